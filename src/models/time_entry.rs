//! Time entry model.
//!
//! This module defines the [`TimeEntry`] struct representing one employee's
//! clock-in/clock-out pair for a single calendar day.

use serde::{Deserialize, Serialize};

/// The literal token used in pasted timecard data for "no entry / absent".
pub const ABSENT_SENTINEL: &str = "-";

/// One clock-in/clock-out record for a single calendar day.
///
/// The `date` field is a display-format date string (`MM/dd/yyyy`) naming one
/// day of the active payroll period. `time_in` and `time_out` are free-form
/// 12-hour clock strings (e.g. `"8:00 AM"`, `"12:00 MN"`) or the sentinel
/// `"-"` meaning the employee was absent. Entries are immutable once produced
/// by the paste ingestor; one entry exists per (employee, date) pair.
///
/// # Example
///
/// ```
/// use attendance_engine::models::TimeEntry;
///
/// let entry = TimeEntry {
///     date: "03/05/2024".to_string(),
///     time_in: "8:00 AM".to_string(),
///     time_out: "5:00 PM".to_string(),
/// };
/// assert!(entry.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// The calendar day this entry belongs to, in `MM/dd/yyyy` format.
    pub date: String,
    /// The clock-in time, a 12-hour clock string or `"-"`.
    pub time_in: String,
    /// The clock-out time, a 12-hour clock string or `"-"`.
    pub time_out: String,
}

impl TimeEntry {
    /// Returns `true` if both the clock-in and clock-out fields are present.
    ///
    /// A field is present when it is non-empty and not the absence sentinel
    /// `"-"` after trimming. Entries failing this test never contribute to
    /// worked hours, day counts, or overtime.
    pub fn is_valid(&self) -> bool {
        is_valid_time_entry(&self.time_in, &self.time_out)
    }
}

/// Checks whether a clock-in/clock-out pair is a usable time entry.
///
/// Both values must be non-empty and not equal to `"-"` after trimming.
///
/// # Example
///
/// ```
/// use attendance_engine::models::is_valid_time_entry;
///
/// assert!(is_valid_time_entry("8:00 AM", "5:00 PM"));
/// assert!(!is_valid_time_entry("-", "5:00 PM"));
/// assert!(!is_valid_time_entry("8:00 AM", ""));
/// ```
pub fn is_valid_time_entry(time_in: &str, time_out: &str) -> bool {
    let present = |s: &str| {
        let trimmed = s.trim();
        !trimmed.is_empty() && trimmed != ABSENT_SENTINEL
    };
    present(time_in) && present(time_out)
}
