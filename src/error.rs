//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing summaries.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the attendance engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A holiday date was assigned to more than one classification.
    #[error("Holiday date '{date}' appears in more than one category")]
    HolidayOverlap {
        /// The date present in multiple categories.
        date: String,
    },

    /// A clock time string did not match the expected 12-hour format.
    #[error("Unrecognized clock time: '{value}'")]
    InvalidClockTime {
        /// The raw clock time string that failed to parse.
        value: String,
    },

    /// An entry date string did not match the `MM/dd/yyyy` format.
    #[error("Unrecognized entry date: '{value}'")]
    InvalidEntryDate {
        /// The raw date string that failed to parse.
        value: String,
    },

    /// A negative worked-hours value reached the overtime calculator.
    ///
    /// Worked hours are guaranteed non-negative by the work-duration
    /// calculator, so this indicates an upstream contract violation.
    #[error("Invalid worked hours: {value} (must be non-negative)")]
    InvalidWorkedHours {
        /// The offending worked-hours value.
        value: Decimal,
    },

    /// The payroll period end date precedes the start date.
    #[error("Invalid payroll period: {start} to {end}")]
    InvalidPeriod {
        /// The start date of the period.
        start: String,
        /// The end date of the period.
        end: String,
    },

    /// The pasted text contained no usable rows.
    #[error("Pasted text contains no time entry rows")]
    EmptyPaste,

    /// The active date range is empty or unset.
    #[error("The payroll period contains no dates")]
    EmptyDateRange,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
