//! Whole/half work-day counting.
//!
//! Day counts are attendance units distinct from the raw hours that feed
//! overtime: a qualifying day credits 1.0 at the regular-hours threshold,
//! 0.5 at the half-day threshold, and 0 below that.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Holidays, TimeEntry};

use super::dates::is_sunday;
use super::overtime::REGULAR_WORK_HOURS;
use super::work_hours::calculate_work_hours;

/// The minimum worked hours credited as a half day.
pub const MINIMUM_HALF_DAY_HOURS: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Policy for a date that is simultaneously a Sunday and a holiday.
///
/// The attendance rules exclude holidays from the regular-day count and the
/// Sunday-day count alike, so a holiday falling on a Sunday contributes to
/// neither bucket. Whether that is intended or an unhandled edge case is
/// ambiguous in the business rules, so the choice is surfaced as an explicit
/// policy instead of being hard-coded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SundayHolidayPolicy {
    /// A Sunday holiday counts toward neither day bucket (original behavior).
    #[default]
    ExcludeFromBoth,
    /// A Sunday holiday still counts toward the Sunday-day bucket.
    CountAsSunday,
}

/// Credits a day from its worked hours: 1.0, 0.5, or 0.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::worked_day_credit;
/// use rust_decimal::Decimal;
///
/// assert_eq!(worked_day_credit(Decimal::from(9)), Decimal::ONE);
/// assert_eq!(worked_day_credit(Decimal::from(4)), Decimal::new(5, 1));
/// assert_eq!(worked_day_credit(Decimal::from(3)), Decimal::ZERO);
/// ```
pub fn worked_day_credit(worked_hours: Decimal) -> Decimal {
    if worked_hours >= REGULAR_WORK_HOURS {
        Decimal::ONE
    } else if worked_hours >= MINIMUM_HALF_DAY_HOURS {
        Decimal::new(5, 1)
    } else {
        Decimal::ZERO
    }
}

/// Counts qualifying regular work days in whole/half-day units.
///
/// A day qualifies when it is not a Sunday, not classified under any holiday
/// category, and carries a valid clock-in/clock-out pair. Qualifying days
/// credit per [`worked_day_credit`]; a worked day under the half-day
/// threshold counts as zero days even though its hours may still feed the
/// overtime aggregates.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_total_regular_work_days;
/// use attendance_engine::models::{Holidays, TimeEntry};
/// use rust_decimal::Decimal;
///
/// let entries = vec![TimeEntry {
///     date: "03/05/2024".to_string(), // Tuesday
///     time_in: "8:00 AM".to_string(),
///     time_out: "5:00 PM".to_string(),
/// }];
/// let days = calculate_total_regular_work_days(&entries, &Holidays::default());
/// assert_eq!(days, Decimal::ONE);
/// ```
pub fn calculate_total_regular_work_days(entries: &[TimeEntry], holidays: &Holidays) -> Decimal {
    entries
        .iter()
        .filter(|entry| {
            !is_sunday(&entry.date) && !holidays.is_holiday_day(&entry.date) && entry.is_valid()
        })
        .map(|entry| {
            worked_day_credit(calculate_work_hours(
                &entry.time_in,
                &entry.time_out,
                &entry.date,
            ))
        })
        .sum()
}

/// Counts qualifying Sunday work days in whole/half-day units.
///
/// Mirrors [`calculate_total_regular_work_days`] but requires the date to be
/// a Sunday. Holiday Sundays are included or excluded per the supplied
/// [`SundayHolidayPolicy`].
pub fn calculate_total_sunday_work_days(
    entries: &[TimeEntry],
    holidays: &Holidays,
    policy: SundayHolidayPolicy,
) -> Decimal {
    entries
        .iter()
        .filter(|entry| {
            let holiday_allowed = match policy {
                SundayHolidayPolicy::ExcludeFromBoth => !holidays.is_holiday_day(&entry.date),
                SundayHolidayPolicy::CountAsSunday => true,
            };
            is_sunday(&entry.date) && holiday_allowed && entry.is_valid()
        })
        .map(|entry| {
            worked_day_credit(calculate_work_hours(
                &entry.time_in,
                &entry.time_out,
                &entry.date,
            ))
        })
        .sum()
}
