//! Calendar date validation
//!
//! A string is valid only if it parses under the given format AND formats
//! back to itself. The round trip rejects values chrono would otherwise
//! absorb, such as out-of-range days normalized away or missing zero
//! padding.

use chrono::{NaiveDate, NaiveDateTime};

/// Validates a date string against a `chrono` format, e.g. `"%Y-%m-%d"`.
pub fn date(input: &str, format: &str) -> bool {
    NaiveDate::parse_from_str(input, format)
        .map(|d| d.format(format).to_string() == input)
        .unwrap_or(false)
}

/// Validates a date time string against a `chrono` format, e.g.
/// `"%Y-%m-%d %H:%M:%S"`.
pub fn date_time(input: &str, format: &str) -> bool {
    NaiveDateTime::parse_from_str(input, format)
        .map(|d| d.format(format).to_string() == input)
        .unwrap_or(false)
}
