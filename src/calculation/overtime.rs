//! Overtime derivation and aggregation.
//!
//! Overtime is the excess of a day's worked hours over the regular-hours
//! threshold. The aggregate functions partition overtime by day category:
//! non-Sunday days, Sundays, and regular holidays.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Holidays, TimeEntry};

use super::dates::is_sunday;
use super::work_hours::calculate_work_hours;

/// The daily regular-hours threshold beyond which overtime accrues.
pub const REGULAR_WORK_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Derives overtime hours from one day's worked hours.
///
/// Worked hours reaching this function have already passed through the
/// work-duration calculator, which guarantees non-negativity. A negative
/// value therefore signals a programming error upstream and fails loudly
/// with [`EngineError::InvalidWorkedHours`] instead of being clamped.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_overtime;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_overtime(Decimal::from(10)).unwrap(), Decimal::from(2));
/// assert_eq!(calculate_overtime(Decimal::from(6)).unwrap(), Decimal::ZERO);
/// assert!(calculate_overtime(Decimal::from(-1)).is_err());
/// ```
pub fn calculate_overtime(worked_hours: Decimal) -> EngineResult<Decimal> {
    if worked_hours < Decimal::ZERO {
        return Err(EngineError::InvalidWorkedHours {
            value: worked_hours,
        });
    }

    if worked_hours > REGULAR_WORK_HOURS {
        Ok(worked_hours - REGULAR_WORK_HOURS)
    } else {
        Ok(Decimal::ZERO)
    }
}

/// Sums overtime hours across all non-Sunday entries.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_regular_overtime;
/// use attendance_engine::models::TimeEntry;
/// use rust_decimal::Decimal;
///
/// let entries = vec![TimeEntry {
///     date: "03/05/2024".to_string(), // Tuesday
///     time_in: "8:00 AM".to_string(),
///     time_out: "7:00 PM".to_string(), // 10 net hours
/// }];
/// assert_eq!(calculate_regular_overtime(&entries).unwrap(), Decimal::from(2));
/// ```
pub fn calculate_regular_overtime(entries: &[TimeEntry]) -> EngineResult<Decimal> {
    sum_overtime(entries, |entry| !is_sunday(&entry.date))
}

/// Sums overtime hours across Sunday entries only.
pub fn calculate_total_sunday_overtime(entries: &[TimeEntry]) -> EngineResult<Decimal> {
    sum_overtime(entries, |entry| is_sunday(&entry.date))
}

/// Sums overtime hours across entries dated on regular holidays.
pub fn calculate_total_regular_holiday_overtime(
    entries: &[TimeEntry],
    holidays: &Holidays,
) -> EngineResult<Decimal> {
    sum_overtime(entries, |entry| holidays.is_regular_holiday(&entry.date))
}

fn sum_overtime<F>(entries: &[TimeEntry], include: F) -> EngineResult<Decimal>
where
    F: Fn(&TimeEntry) -> bool,
{
    let mut total = Decimal::ZERO;
    for entry in entries.iter().filter(|entry| include(entry)) {
        let worked = calculate_work_hours(&entry.time_in, &entry.time_out, &entry.date);
        total += calculate_overtime(worked)?;
    }
    Ok(total)
}
