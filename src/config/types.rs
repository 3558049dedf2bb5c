//! Configuration types for the attendance engine.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the YAML configuration files.

use serde::Deserialize;

use crate::calculation::SundayHolidayPolicy;

/// Engine settings loaded from `engine.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineSettings {
    /// How a date that is both a Sunday and a holiday is counted.
    #[serde(default)]
    pub sunday_holiday_policy: SundayHolidayPolicy,
}

/// One holiday calendar file, listing pre-classified dates.
///
/// Dates use the same `MM/dd/yyyy` display format as time entries. Multiple
/// calendar files (typically one per year) are merged on load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidayCalendar {
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
