//! Holiday pay-unit counting.
//!
//! Regular holidays pay double when worked and single when attendance was
//! maintained on the nearest non-Sunday workdays around the holiday. The
//! two special categories pay one unit per holiday actually worked.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::warn;

use crate::models::{Holidays, TimeEntry};

use super::dates::{ENTRY_DATE_FORMAT, parse_entry_date};

/// Counts regular-holiday pay units across an employee's entries.
///
/// For each entry dated on a regular holiday:
/// - a valid clock-in/clock-out pair (worked on the holiday) contributes 2;
/// - otherwise, if valid entries exist for the nearest non-Sunday calendar
///   days strictly before and strictly after the holiday (skipping Sundays
///   while searching), the entry contributes 1;
/// - otherwise it contributes 0.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_total_regular_holiday;
/// use attendance_engine::models::{Holidays, TimeEntry};
///
/// let holidays = Holidays {
///     regular: ["03/05/2024".to_string()].into(),
///     ..Default::default()
/// };
/// let entries = vec![TimeEntry {
///     date: "03/05/2024".to_string(),
///     time_in: "8:00 AM".to_string(),
///     time_out: "5:00 PM".to_string(),
/// }];
/// assert_eq!(calculate_total_regular_holiday(&entries, &holidays), 2);
/// ```
pub fn calculate_total_regular_holiday(entries: &[TimeEntry], holidays: &Holidays) -> u32 {
    let mut total = 0;

    for entry in entries {
        if !holidays.is_regular_holiday(&entry.date) {
            continue;
        }

        if entry.is_valid() {
            // Double pay for working the holiday itself.
            total += 2;
            continue;
        }

        let holiday_date = match parse_entry_date(&entry.date) {
            Ok(date) => date,
            Err(error) => {
                warn!(%error, "Skipping holiday pay for unparseable entry date");
                continue;
            }
        };

        let worked_before = worked_on(entries, nearest_workday(holiday_date, -1));
        let worked_after = worked_on(entries, nearest_workday(holiday_date, 1));
        if worked_before && worked_after {
            // Paid holiday: attendance maintained around the holiday.
            total += 1;
        }
    }

    total
}

/// Counts special non-working holiday pay units: 1 per holiday worked.
pub fn calculate_total_special_non_working_holiday(
    entries: &[TimeEntry],
    holidays: &Holidays,
) -> u32 {
    count_worked_holidays(entries, |date| {
        holidays.is_special_non_working_holiday(date)
    })
}

/// Counts special working holiday pay units: 1 per holiday worked.
pub fn calculate_total_special_working_holiday(entries: &[TimeEntry], holidays: &Holidays) -> u32 {
    count_worked_holidays(entries, |date| holidays.is_special_working_holiday(date))
}

fn count_worked_holidays<F>(entries: &[TimeEntry], is_holiday: F) -> u32
where
    F: Fn(&str) -> bool,
{
    entries
        .iter()
        .filter(|entry| is_holiday(&entry.date) && entry.is_valid())
        .count() as u32
}

/// Steps from `date` in one-day increments, skipping Sundays.
fn nearest_workday(date: NaiveDate, step: i64) -> NaiveDate {
    let mut candidate = date + Duration::days(step);
    while candidate.weekday() == Weekday::Sun {
        candidate += Duration::days(step);
    }
    candidate
}

fn worked_on(entries: &[TimeEntry], date: NaiveDate) -> bool {
    let formatted = date.format(ENTRY_DATE_FORMAT).to_string();
    entries
        .iter()
        .any(|entry| entry.date == formatted && entry.is_valid())
}
