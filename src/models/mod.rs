//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod holidays;
mod payroll_period;
mod summary;
mod time_entry;

pub use employee::EmployeeData;
pub use holidays::{HolidayKind, Holidays};
pub use payroll_period::PayrollPeriod;
pub use summary::Summary;
pub use time_entry::{ABSENT_SENTINEL, TimeEntry, is_valid_time_entry};
