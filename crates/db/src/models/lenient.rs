//! Serde helpers accepting numbers that arrive as JSON strings.
//!
//! Browser forms commonly submit `"3"` for a `<select>` value or `"12.50"`
//! for a price input; both deserialize here as if they were numbers. Blank
//! strings count as absent.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

fn from_text<T, E>(text: &str, expected: &str) -> Result<Option<T>, E>
where
    T: std::str::FromStr,
    E: serde::de::Error,
{
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| E::custom(format!("expected {expected}, got {text:?}")))
}

/// Deserialize an optional integer from a number or a numeric string.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText<i64>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) => from_text(&s, "an integer"),
    }
}

/// Deserialize an optional float from a number or a numeric string.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText<f64>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) => from_text(&s, "a number"),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::opt_i64")]
        id: Option<i64>,
        #[serde(default, deserialize_with = "super::opt_f64")]
        price: Option<f64>,
    }

    fn probe(json: &str) -> Result<Probe, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let p = probe(r#"{"id": 3, "price": 12.5}"#).unwrap();
        assert_eq!((p.id, p.price), (Some(3), Some(12.5)));

        let p = probe(r#"{"id": "3", "price": "12.50"}"#).unwrap();
        assert_eq!((p.id, p.price), (Some(3), Some(12.5)));
    }

    #[test]
    fn missing_null_and_blank_are_absent() {
        let p = probe("{}").unwrap();
        assert_eq!((p.id, p.price), (None, None));

        let p = probe(r#"{"id": null, "price": ""}"#).unwrap();
        assert_eq!((p.id, p.price), (None, None));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!(probe(r#"{"id": "three"}"#).is_err());
        assert!(probe(r#"{"id": 1.5}"#).is_err());
    }
}
