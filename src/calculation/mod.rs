//! Calculation logic for the attendance engine.
//!
//! This module contains all the pure functions for deriving summaries:
//! 12-hour clock parsing with overnight rollover, net work-duration
//! calculation with the conditional lunch deduction, overtime derivation
//! and aggregation, whole/half work-day counting, holiday pay counting,
//! and the summary builder that composes them.

mod clock_time;
mod dates;
mod holiday_pay;
mod overtime;
mod summary;
mod work_hours;
mod workday;

pub use clock_time::parse_clock_time;
pub use dates::{ENTRY_DATE_FORMAT, dates_in_range, is_sunday, parse_entry_date};
pub use holiday_pay::{
    calculate_total_regular_holiday, calculate_total_special_non_working_holiday,
    calculate_total_special_working_holiday,
};
pub use overtime::{
    REGULAR_WORK_HOURS, calculate_overtime, calculate_regular_overtime,
    calculate_total_regular_holiday_overtime, calculate_total_sunday_overtime,
};
pub use summary::{calculate_summary, calculate_summary_with_policy};
pub use work_hours::{FULL_SHIFT_HOURS, LUNCH_BREAK_MINUTES, calculate_work_hours};
pub use workday::{
    MINIMUM_HALF_DAY_HOURS, SundayHolidayPolicy, calculate_total_regular_work_days,
    calculate_total_sunday_work_days, worked_day_credit,
};
