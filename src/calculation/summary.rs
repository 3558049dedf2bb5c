//! Summary builder.
//!
//! Composes the workday, overtime, and holiday-pay aggregators into one
//! per-employee [`Summary`] record.

use crate::error::EngineResult;
use crate::models::{Holidays, Summary, TimeEntry};

use super::holiday_pay::{
    calculate_total_regular_holiday, calculate_total_special_non_working_holiday,
    calculate_total_special_working_holiday,
};
use super::overtime::{
    calculate_regular_overtime, calculate_total_regular_holiday_overtime,
    calculate_total_sunday_overtime,
};
use super::workday::{
    SundayHolidayPolicy, calculate_total_regular_work_days, calculate_total_sunday_work_days,
};

/// Builds the eight-field summary for one employee's entries.
///
/// Pure composition over the aggregators; identical inputs always yield an
/// identical summary, which the copy-to-clipboard path relies on when it
/// recomputes instead of caching. Uses the default
/// [`SundayHolidayPolicy`].
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_summary;
/// use attendance_engine::models::{Holidays, TimeEntry};
/// use rust_decimal::Decimal;
///
/// let entries = vec![TimeEntry {
///     date: "03/05/2024".to_string(), // Tuesday
///     time_in: "8:00 AM".to_string(),
///     time_out: "5:00 PM".to_string(),
/// }];
/// let summary = calculate_summary(&entries, &Holidays::default()).unwrap();
/// assert_eq!(summary.total_regular_work_days, Decimal::ONE);
/// assert_eq!(summary.total_regular_overtime, Decimal::ZERO);
/// ```
pub fn calculate_summary(entries: &[TimeEntry], holidays: &Holidays) -> EngineResult<Summary> {
    calculate_summary_with_policy(entries, holidays, SundayHolidayPolicy::default())
}

/// Builds the summary with an explicit Sunday-holiday policy.
pub fn calculate_summary_with_policy(
    entries: &[TimeEntry],
    holidays: &Holidays,
    policy: SundayHolidayPolicy,
) -> EngineResult<Summary> {
    Ok(Summary {
        total_regular_work_days: calculate_total_regular_work_days(entries, holidays),
        total_sunday_days: calculate_total_sunday_work_days(entries, holidays, policy),
        total_sunday_overtime: calculate_total_sunday_overtime(entries)?,
        total_regular_overtime: calculate_regular_overtime(entries)?,
        total_regular_holiday: calculate_total_regular_holiday(entries, holidays),
        total_regular_holiday_overtime: calculate_total_regular_holiday_overtime(
            entries, holidays,
        )?,
        total_special_non_working_holiday: calculate_total_special_non_working_holiday(
            entries, holidays,
        ),
        total_special_working_holiday: calculate_total_special_working_holiday(entries, holidays),
    })
}
