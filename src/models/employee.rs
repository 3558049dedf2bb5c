//! Employee data model.

use serde::{Deserialize, Serialize};

use super::{Summary, TimeEntry};

/// One employee's parsed time entries and derived summary.
///
/// Produced wholesale by the paste ingestor for one paste operation and
/// replaced wholesale by the next paste; never edited in place.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{EmployeeData, Summary};
///
/// let employee = EmployeeData {
///     name: "DOE, JOHN".to_string(),
///     time_entries: vec![],
///     summary: Summary::default(),
/// };
/// assert_eq!(employee.name, "DOE, JOHN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeData {
    /// The employee name exactly as pasted.
    pub name: String,
    /// One time entry per day of the payroll period, in date order.
    pub time_entries: Vec<TimeEntry>,
    /// The summary derived from the entries and the holiday classification.
    pub summary: Summary,
}
