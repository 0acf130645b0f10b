//! Parsing of the date and timestamp formats accepted on the wire.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::EventTimestamp;

/// Naive formats accepted for an event date, tried in order.
///
/// Covers `2030-01-01 18:00:00`, the ISO `T` separator, optional fractional
/// seconds, and the minute-precision value an HTML `datetime-local` input
/// submits.
const EVENT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse an event timestamp.
///
/// Values carrying an offset (RFC 3339) are converted to UTC wall-clock time.
/// A bare date means midnight.
pub fn parse_event_timestamp(raw: &str) -> Option<EventTimestamp> {
    let raw = raw.trim();

    if let Some(ts) = EVENT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(ts);
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_utc());
    }

    parse_calendar_date(raw).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a `YYYY-MM-DD` calendar date, as used by the search filter.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
