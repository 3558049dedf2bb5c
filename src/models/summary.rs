//! Per-employee attendance summary model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The derived attendance summary for one employee over a payroll period.
///
/// Day counts are in whole/half-day units (multiples of 0.5); overtime
/// fields are in hours at two-decimal precision; holiday fields are pay-unit
/// counts. The summary is always recomputed from the time entries and the
/// holiday classification, never persisted as a source of truth.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Summary;
///
/// let summary = Summary::default();
/// assert_eq!(summary.total_regular_holiday, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Qualifying non-Sunday, non-holiday work days, in 0.5-day units.
    pub total_regular_work_days: Decimal,
    /// Qualifying Sunday work days, in 0.5-day units.
    pub total_sunday_days: Decimal,
    /// Overtime hours worked on Sundays.
    pub total_sunday_overtime: Decimal,
    /// Overtime hours worked on non-Sunday days.
    pub total_regular_overtime: Decimal,
    /// Regular-holiday pay units (2 worked, 1 adjacent attendance, 0 neither).
    pub total_regular_holiday: u32,
    /// Overtime hours worked on regular holidays.
    pub total_regular_holiday_overtime: Decimal,
    /// Special non-working holiday pay units (1 per holiday worked).
    pub total_special_non_working_holiday: u32,
    /// Special working holiday pay units (1 per holiday worked).
    pub total_special_working_holiday: u32,
}
