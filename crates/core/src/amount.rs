//! Monetary amount coercion.
//!
//! `NUMERIC` columns are read back as their text rendering so the API layer
//! decides how they become JSON numbers.

use crate::error::CoreError;

/// Parse a stored monetary value (`"12.50"`) into a non-negative finite `f64`.
///
/// A value that does not parse, is not finite, or is negative means the
/// stored row is corrupt, which is an internal error rather than a
/// client mistake.
pub fn parse_stored_amount(field: &'static str, raw: &str) -> Result<f64, CoreError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::Internal(format!("{field} is not numeric: {raw:?}")))?;

    if !value.is_finite() {
        return Err(CoreError::Internal(format!(
            "{field} is not a finite number: {raw:?}"
        )));
    }
    if value < 0.0 {
        return Err(CoreError::Internal(format!("{field} is negative: {raw:?}")));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_numeric_text() {
        assert_eq!(parse_stored_amount("ticket_price", "0.00").unwrap(), 0.0);
        assert_eq!(parse_stored_amount("fund_target", "15000.50").unwrap(), 15000.5);
        assert_eq!(parse_stored_amount("current_fund", " 42 ").unwrap(), 42.0);
    }

    #[test]
    fn rejects_garbage() {
        assert_matches!(
            parse_stored_amount("ticket_price", "abc"),
            Err(CoreError::Internal(msg)) if msg.contains("ticket_price")
        );
        assert_matches!(
            parse_stored_amount("ticket_price", ""),
            Err(CoreError::Internal(_))
        );
    }

    #[test]
    fn rejects_non_finite_and_negative() {
        assert_matches!(
            parse_stored_amount("fund_target", "NaN"),
            Err(CoreError::Internal(_))
        );
        assert_matches!(
            parse_stored_amount("fund_target", "inf"),
            Err(CoreError::Internal(_))
        );
        assert_matches!(
            parse_stored_amount("current_fund", "-1.00"),
            Err(CoreError::Internal(msg)) if msg.contains("negative")
        );
    }
}
