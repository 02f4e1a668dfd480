//! Date normalization for source records
//!
//! Bank exports disagree on date formats: the JSON export uses ISO-8601
//! timestamps, CSV exports use either ISO-8601 with a `Z` suffix or
//! `dd.mm.yyyy`, and spreadsheets store Excel serial numbers. Everything is
//! normalized to [`NaiveDateTime`] at read time, keeping the wall-clock time
//! written in the source.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};

/// Date-time layouts tried in order after RFC 3339
const DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%d.%m.%Y %H:%M:%S",
];

/// Date-only layouts, interpreted as midnight
const DATE_FORMATS: [&str; 2] = ["%d.%m.%Y", "%Y-%m-%d"];

/// Parse a date in any supported textual format
///
/// # Returns
///
/// * `Some(NaiveDateTime)` - the parsed wall-clock date-time
/// * `None` - blank input or no supported format matched
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    // Timestamps with an explicit offset keep their local wall-clock time
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time.naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS.iter().find_map(|format| {
                NaiveDate::parse_from_str(text, format)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
        })
}

/// Convert an Excel serial date (days since 1899-12-30) to a date-time
pub fn from_excel_serial(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    epoch.checked_add_signed(TimeDelta::try_milliseconds(millis)?)
}
