//! Clipboard export payload.
//!
//! Renders summaries as the tab-separated, newline-joined block users paste
//! into their payroll spreadsheet. The column order and the two blank
//! legacy columns are load-bearing for spreadsheet compatibility and must
//! not change.

use rust_decimal::Decimal;

use crate::models::EmployeeData;

/// Formats one numeric cell for the clipboard payload.
///
/// Values format to two decimals with a trailing `.00` stripped; an exact
/// zero renders as an empty cell.
///
/// # Example
///
/// ```
/// use attendance_engine::ingest::format_summary_value;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_summary_value(Decimal::from(8)), "8");
/// assert_eq!(format_summary_value(Decimal::new(25, 1)), "2.50");
/// assert_eq!(format_summary_value(Decimal::ZERO), "");
/// ```
pub fn format_summary_value(value: Decimal) -> String {
    if value <= Decimal::ZERO {
        return String::new();
    }
    let fixed = format!("{:.2}", value);
    match fixed.strip_suffix(".00") {
        Some(stripped) => stripped.to_string(),
        None => fixed,
    }
}

/// Renders the copy-to-clipboard payload for a set of employees.
///
/// One row per employee, columns in fixed order: regular work days, Sunday
/// days, Sunday overtime, regular overtime, regular holiday, regular
/// holiday overtime, two blank legacy placeholder columns, special
/// non-working holiday, special working holiday.
///
/// # Example
///
/// ```
/// use attendance_engine::ingest::{clipboard_payload, process_pasted_data};
/// use attendance_engine::models::Holidays;
///
/// let dates = vec!["03/04/2024".to_string()];
/// let employees =
///     process_pasted_data(&dates, "DOE, JOHN\t8:00 AM\t5:00 PM", &Holidays::default()).unwrap();
///
/// assert_eq!(clipboard_payload(&employees), "1\t\t\t\t\t\t\t\t\t");
/// ```
pub fn clipboard_payload(employees: &[EmployeeData]) -> String {
    employees
        .iter()
        .map(|employee| {
            let summary = &employee.summary;
            [
                format_summary_value(summary.total_regular_work_days),
                format_summary_value(summary.total_sunday_days),
                format_summary_value(summary.total_sunday_overtime),
                format_summary_value(summary.total_regular_overtime),
                format_summary_value(Decimal::from(summary.total_regular_holiday)),
                format_summary_value(summary.total_regular_holiday_overtime),
                // Two reserved legacy columns, always blank.
                String::new(),
                String::new(),
                format_summary_value(Decimal::from(summary.total_special_non_working_holiday)),
                format_summary_value(Decimal::from(summary.total_special_working_holiday)),
            ]
            .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
