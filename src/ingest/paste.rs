//! Pasted timecard ingestion.
//!
//! One pasted line per employee: the name first, then clock-in/clock-out
//! pairs in date order, separated by tabs or runs of two or more spaces.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::calculation::{SundayHolidayPolicy, calculate_summary_with_policy};
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeData, Holidays, TimeEntry};

/// Field separator for pasted rows: a tab or a run of two or more spaces.
static FIELD_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\t|\s{2,}").expect("valid field separator regex"));

/// Ingests raw pasted text into per-employee data with derived summaries.
///
/// Splits the text on newlines and discards blank lines. Each remaining
/// line splits on tabs or multi-space runs; the first token is the employee
/// name and the rest are consumed pairwise (clock-in, clock-out), zipped
/// positionally against `dates` — one pair per date, in order. Rows shorter
/// than `dates` leave the missing slots empty, which the work-duration
/// calculator treats as absences.
///
/// # Errors
///
/// - [`EngineError::EmptyDateRange`] when `dates` is empty: the payroll
///   period has not been applied, so no computation may run.
/// - [`EngineError::EmptyPaste`] when no non-blank lines remain: nothing to
///   ingest, and no partial employee data is produced.
///
/// # Example
///
/// ```
/// use attendance_engine::ingest::process_pasted_data;
/// use attendance_engine::models::Holidays;
///
/// let dates = vec![
///     "03/04/2024".to_string(),
///     "03/05/2024".to_string(),
///     "03/06/2024".to_string(),
/// ];
/// let pasted = "DOE, JOHN\t8:00 AM\t5:00 PM\t-\t-\t8:00 AM\t5:00 PM";
///
/// let employees = process_pasted_data(&dates, pasted, &Holidays::default()).unwrap();
/// assert_eq!(employees.len(), 1);
/// assert_eq!(employees[0].time_entries.len(), 3);
/// ```
pub fn process_pasted_data(
    dates: &[String],
    pasted_text: &str,
    holidays: &Holidays,
) -> EngineResult<Vec<EmployeeData>> {
    process_pasted_data_with_policy(dates, pasted_text, holidays, SundayHolidayPolicy::default())
}

/// Ingests pasted text with an explicit Sunday-holiday counting policy.
///
/// Identical to [`process_pasted_data`] except that the policy threads
/// through to each employee's summary.
pub fn process_pasted_data_with_policy(
    dates: &[String],
    pasted_text: &str,
    holidays: &Holidays,
    policy: SundayHolidayPolicy,
) -> EngineResult<Vec<EmployeeData>> {
    if dates.is_empty() {
        return Err(EngineError::EmptyDateRange);
    }

    let lines: Vec<&str> = pasted_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.is_empty() {
        return Err(EngineError::EmptyPaste);
    }

    let mut employees = Vec::with_capacity(lines.len());
    for line in lines {
        let mut fields = FIELD_SEPARATOR.split(line);
        let name = fields.next().unwrap_or_default().trim().to_string();
        let times: Vec<&str> = fields.collect();

        let time_entries: Vec<TimeEntry> = dates
            .iter()
            .enumerate()
            .map(|(index, date)| TimeEntry {
                date: date.clone(),
                time_in: times.get(index * 2).copied().unwrap_or_default().to_string(),
                time_out: times
                    .get(index * 2 + 1)
                    .copied()
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect();

        let summary = calculate_summary_with_policy(&time_entries, holidays, policy)?;
        employees.push(EmployeeData {
            name,
            time_entries,
            summary,
        });
    }

    Ok(employees)
}
