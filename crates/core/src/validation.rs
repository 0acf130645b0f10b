//! Field-level validation rules for incoming requests.
//!
//! Every helper returns a [`CoreError::Validation`] naming the offending
//! field, so handlers can surface the message to the caller verbatim.

use validator::ValidateEmail;

use crate::datetime::{parse_calendar_date, parse_event_timestamp};
use crate::error::CoreError;
use crate::types::{DbId, EventTimestamp};

fn required(field: &str) -> CoreError {
    CoreError::Validation(format!("{field} is required"))
}

/// Require a non-blank string. Returns the trimmed value.
pub fn require_text(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(required(field)),
    }
}

/// Require a positive row id.
pub fn require_id(field: &str, value: Option<DbId>) -> Result<DbId, CoreError> {
    match value {
        None => Err(required(field)),
        Some(id) if id <= 0 => Err(CoreError::Validation(format!(
            "{field} must be a positive integer"
        ))),
        Some(id) => Ok(id),
    }
}

/// Require a parseable event timestamp.
pub fn require_event_date(field: &str, value: Option<&str>) -> Result<EventTimestamp, CoreError> {
    let raw = require_text(field, value)?;
    parse_event_timestamp(&raw).ok_or_else(|| {
        CoreError::Validation(format!(
            "{field} must be a date-time such as 2030-01-01 18:00:00"
        ))
    })
}

/// An optional monetary input; absent means zero.
pub fn non_negative_amount(field: &str, value: Option<f64>) -> Result<f64, CoreError> {
    let value = value.unwrap_or(0.0);
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(value)
}

/// Require a ticket quantity greater than zero.
pub fn require_ticket_quantity(field: &str, value: Option<i64>) -> Result<i32, CoreError> {
    let quantity = value.ok_or_else(|| required(field))?;
    if quantity <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be greater than 0"
        )));
    }
    i32::try_from(quantity)
        .map_err(|_| CoreError::Validation(format!("{field} is too large")))
}

/// Require a syntactically valid email address. Returns the trimmed value.
pub fn require_email(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    let email = require_text(field, value)?;
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "{field} must be a valid email address"
        )));
    }
    Ok(email)
}

// ---------------------------------------------------------------------------
// Query-string filters
// ---------------------------------------------------------------------------

/// Treat a blank query parameter as if it were not supplied.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse an optional `YYYY-MM-DD` filter.
pub fn optional_date_filter(
    field: &str,
    value: Option<&str>,
) -> Result<Option<chrono::NaiveDate>, CoreError> {
    present(value)
        .map(|raw| {
            parse_calendar_date(raw)
                .ok_or_else(|| CoreError::Validation(format!("{field} must be YYYY-MM-DD")))
        })
        .transpose()
}

/// Parse an optional integer id filter.
pub fn optional_id_filter(field: &str, value: Option<&str>) -> Result<Option<DbId>, CoreError> {
    present(value)
        .map(|raw| {
            raw.parse::<DbId>()
                .map_err(|_| CoreError::Validation(format!("{field} must be an integer")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn text_is_trimmed_and_required() {
        assert_eq!(require_text("event_name", Some("  Gala ")).unwrap(), "Gala");
        assert_matches!(
            require_text("event_name", Some("   ")),
            Err(CoreError::Validation(msg)) if msg == "event_name is required"
        );
        assert_matches!(require_text("event_name", None), Err(CoreError::Validation(_)));
    }

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(require_id("category_id", Some(3)).unwrap(), 3);
        assert_matches!(require_id("category_id", Some(0)), Err(CoreError::Validation(_)));
        assert_matches!(require_id("category_id", None), Err(CoreError::Validation(_)));
    }

    #[test]
    fn amounts_default_to_zero() {
        assert_eq!(non_negative_amount("ticket_price", None).unwrap(), 0.0);
        assert_eq!(non_negative_amount("ticket_price", Some(25.5)).unwrap(), 25.5);
        assert_matches!(
            non_negative_amount("ticket_price", Some(-0.01)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn quantity_must_be_positive() {
        assert_eq!(require_ticket_quantity("ticket_quantity", Some(2)).unwrap(), 2);
        assert_matches!(
            require_ticket_quantity("ticket_quantity", Some(0)),
            Err(CoreError::Validation(msg)) if msg.contains("greater than 0")
        );
        assert_matches!(
            require_ticket_quantity("ticket_quantity", Some(-4)),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            require_ticket_quantity("ticket_quantity", Some(i64::from(i32::MAX) + 1)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn email_format_is_checked() {
        assert_eq!(
            require_email("email", Some("ada@example.org")).unwrap(),
            "ada@example.org"
        );
        assert_matches!(
            require_email("email", Some("not-an-email")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn event_date_is_parsed() {
        assert!(require_event_date("event_date", Some("2030-01-01 18:00:00")).is_ok());
        assert_matches!(
            require_event_date("event_date", Some("soon")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn blank_filters_are_absent() {
        assert_eq!(optional_date_filter("date", Some("")).unwrap(), None);
        assert_eq!(optional_id_filter("categoryId", None).unwrap(), None);
        assert_eq!(optional_id_filter("categoryId", Some(" 7 ")).unwrap(), Some(7));
        assert_matches!(
            optional_id_filter("categoryId", Some("seven")),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            optional_date_filter("date", Some("2030/01/01")),
            Err(CoreError::Validation(_))
        );
    }
}
