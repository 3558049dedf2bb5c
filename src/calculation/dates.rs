//! Entry date parsing and payroll-period expansion.
//!
//! Time entries, holiday sets, and the paste ingestor all identify calendar
//! days by display-format date strings. This module owns that format and the
//! helpers built on it.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// The display format used for entry dates throughout the engine (`MM/dd/yyyy`).
pub const ENTRY_DATE_FORMAT: &str = "%m/%d/%Y";

/// Parses an entry date string in `MM/dd/yyyy` format.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::parse_entry_date;
/// use chrono::NaiveDate;
///
/// let date = parse_entry_date("03/05/2024").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
/// assert!(parse_entry_date("2024-03-05").is_err());
/// ```
pub fn parse_entry_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ENTRY_DATE_FORMAT).map_err(|_| {
        EngineError::InvalidEntryDate {
            value: value.to_string(),
        }
    })
}

/// Returns `true` if the entry date string falls on a Sunday.
///
/// An unparseable date is logged and treated as not a Sunday, so one
/// malformed row degrades locally instead of aborting a batch.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::is_sunday;
///
/// assert!(is_sunday("03/10/2024"));
/// assert!(!is_sunday("03/05/2024"));
/// ```
pub fn is_sunday(date: &str) -> bool {
    match parse_entry_date(date) {
        Ok(parsed) => parsed.weekday() == Weekday::Sun,
        Err(error) => {
            warn!(%error, "Skipping Sunday check for unparseable entry date");
            false
        }
    }
}

/// Expands an inclusive date range into ordered `MM/dd/yyyy` strings.
///
/// Returns an empty vector when the end date precedes the start date.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::dates_in_range;
/// use chrono::NaiveDate;
///
/// let dates = dates_in_range(
///     NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
/// );
/// assert_eq!(dates, vec!["03/04/2024", "03/05/2024", "03/06/2024"]);
/// ```
pub fn dates_in_range(start: NaiveDate, end: NaiveDate) -> Vec<String> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current.format(ENTRY_DATE_FORMAT).to_string());
        current += Duration::days(1);
    }
    dates
}
