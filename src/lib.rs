//! Attendance and payroll summary engine.
//!
//! This crate derives per-employee attendance summaries (regular and Sunday
//! work days, overtime by category, holiday pay counts) from raw pasted
//! clock-in/clock-out rows, a payroll period, and a holiday classification.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
