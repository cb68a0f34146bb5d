//! Timestamp parsing for the wire format.
//!
//! The API sends timestamps as `yyyy-MM-ddTHH:mm:ss±HHMM`. RFC 3339 strings
//! (`Z` or `±HH:MM` offsets) are accepted as well since the live service
//! emits them.

use chrono::{DateTime, Utc};

/// chrono format string for the wire timestamp format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parses a wire timestamp, normalizing it to UTC.
///
/// Returns `None` when the string matches neither the wire format nor
/// RFC 3339.
///
/// # Examples
///
/// ```
/// use eonet_core::catalog::parse_timestamp;
///
/// let parsed = parse_timestamp("2024-03-01T12:00:00+0200").unwrap();
/// assert_eq!(parsed.to_rfc3339(), "2024-03-01T10:00:00+00:00");
///
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// Formats a timestamp in the wire format (always with a `+0000` offset).
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}
