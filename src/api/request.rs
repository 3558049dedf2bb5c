//! Request types for the attendance engine API.
//!
//! This module defines the JSON request structures shared by the
//! `/summaries` and `/export` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Holidays;

/// Request body for the `/summaries` and `/export` endpoints.
///
/// Carries the payroll period, the raw pasted timecard text, and an
/// optional explicit holiday classification. When `holidays` is omitted the
/// configured holiday calendar applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The payroll period to expand into per-day entries.
    pub period: PeriodRequest,
    /// The raw pasted timecard text, one employee per line.
    pub pasted_text: String,
    /// Optional explicit holiday classification for the period.
    #[serde(default)]
    pub holidays: Option<HolidaysRequest>,
}

/// Payroll period information in a summary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The start date of the payroll period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the payroll period (inclusive).
    pub end_date: NaiveDate,
}

/// Holiday classification in a summary request.
///
/// Dates use the `MM/dd/yyyy` display format, matching pasted entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidaysRequest {
    /// Dates classified as regular holidays.
    #[serde(default)]
    pub regular: Vec<String>,
    /// Dates classified as special non-working holidays.
    #[serde(default)]
    pub special_non_working: Vec<String>,
    /// Dates classified as special working holidays.
    #[serde(default)]
    pub special_working: Vec<String>,
}

impl From<HolidaysRequest> for Holidays {
    fn from(request: HolidaysRequest) -> Self {
        Holidays {
            regular: request.regular.into_iter().collect(),
            special_non_working: request.special_non_working.into_iter().collect(),
            special_working: request.special_working.into_iter().collect(),
        }
    }
}
