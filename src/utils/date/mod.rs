// Date utility functions
// Canonical date keys used by the event store

use chrono::{Datelike, NaiveDate};

/// Format used for event store keys (`YYYY-MM-DD`, zero padded)
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Build the store key for a calendar day.
///
/// ```
/// use chrono::NaiveDate;
/// use month_calendar::utils::date::date_key;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(date_key(day), "2024-03-05");
/// ```
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a store key back into a date.
///
/// Only the canonical zero-padded form is accepted, so `2024-3-5` is
/// rejected even though chrono would read it.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let bytes = key.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// Check whether `key` is a canonical date key.
pub fn is_date_key(key: &str) -> bool {
    parse_date_key(key).is_some()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month
    date.with_day(1).unwrap_or(date)
}

/// The same calendar month as `date`, on `day`, if that day exists.
pub fn with_day(date: NaiveDate, day: u32) -> Option<NaiveDate> {
    date.with_day(day)
}
