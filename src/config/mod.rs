//! Configuration loading and management for the attendance engine.
//!
//! This module provides functionality to load engine settings and
//! pre-classified holiday calendars from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/attendance").unwrap();
//! println!("Loaded {} regular holidays", config.holiday_calendar().regular.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineSettings, HolidayCalendar};
