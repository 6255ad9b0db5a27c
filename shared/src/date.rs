//! Date conversions between the three string shapes an event date lives in:
//! the wire (RFC 3339), the `datetime-local` input control (`%Y-%m-%dT%H:%M`),
//! and human display. Malformed input degrades, it never panics.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Normalize a `datetime-local` control value to the RFC 3339 timestamp
/// string the API stores. Returns `None` when the value does not parse.
///
/// The value is interpreted as UTC, not shifted from the viewer's zone:
/// the wall-clock time entered is the wall-clock time stored, and the
/// round trip through [`input_from_rfc3339`] preserves the minute exactly.
pub fn rfc3339_from_input(value: &str) -> Option<String> {
    let naive = NaiveDateTime::parse_from_str(value, INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    let utc = DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc);
    Some(utc.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Seed value for a `datetime-local` control from a stored timestamp.
/// Empty string when the timestamp is absent or malformed.
pub fn input_from_rfc3339(value: &str) -> String {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Human-readable form for tables and the detail view. Falls back to the raw
/// string so an unparseable date is still visible.
pub fn display_date(value: &str) -> String {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_value_normalizes_to_rfc3339() {
        assert_eq!(
            rfc3339_from_input("2026-09-01T19:30").as_deref(),
            Some("2026-09-01T19:30:00Z")
        );
        assert_eq!(
            rfc3339_from_input("2026-09-01T19:30:45").as_deref(),
            Some("2026-09-01T19:30:45Z")
        );
        assert!(rfc3339_from_input("next friday").is_none());
        assert!(rfc3339_from_input("").is_none());
    }

    #[test]
    fn stored_timestamp_seeds_the_input() {
        assert_eq!(
            input_from_rfc3339("2026-09-01T19:30:00Z"),
            "2026-09-01T19:30"
        );
        assert_eq!(input_from_rfc3339(""), "");
        assert_eq!(input_from_rfc3339("garbage"), "");
    }

    #[test]
    fn input_round_trip_preserves_the_minute() {
        let wire = rfc3339_from_input("2026-12-31T23:59").unwrap();
        assert_eq!(input_from_rfc3339(&wire), "2026-12-31T23:59");
    }

    #[test]
    fn display_falls_back_to_raw_text() {
        assert_eq!(display_date("2026-09-01T19:30:00Z"), "2026-09-01 19:30");
        assert_eq!(display_date("tbd"), "tbd");
    }
}
