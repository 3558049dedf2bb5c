//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! settings and holiday calendars from YAML files.

use std::fs;
use std::path::Path;

use crate::calculation::SundayHolidayPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayKind, Holidays};

use super::types::{EngineSettings, HolidayCalendar};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the engine settings plus the merged holiday calendar used as the
/// default classification when a request supplies none.
///
/// # Directory Structure
///
/// ```text
/// config/attendance/
/// ├── engine.yaml      # Engine settings
/// └── holidays/
///     └── 2024.yaml    # Pre-classified holiday dates for one year
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/attendance").unwrap();
/// assert!(loader.holiday_calendar().is_regular_holiday("12/25/2024"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: EngineSettings,
    holidays: Holidays,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/attendance")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `engine.yaml` is missing or contains invalid YAML
    /// - Any holiday calendar file contains invalid YAML
    /// - A holiday date appears in more than one category across the
    ///   merged calendars (the disjointness invariant)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("engine.yaml");
        let settings = Self::load_yaml::<EngineSettings>(&settings_path)?;

        let holidays_dir = path.join("holidays");
        let holidays = Self::load_holidays(&holidays_dir)?;

        Ok(Self { settings, holidays })
    }

    /// Returns the configured Sunday-holiday counting policy.
    pub fn sunday_holiday_policy(&self) -> SundayHolidayPolicy {
        self.settings.sunday_holiday_policy
    }

    /// Returns the merged, disjointness-checked holiday classification.
    pub fn holiday_calendar(&self) -> &Holidays {
        &self.holidays
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all calendar files from the holidays directory and merges them.
    ///
    /// A missing directory yields an empty calendar; holiday defaults are
    /// optional.
    fn load_holidays(dir: &Path) -> EngineResult<Holidays> {
        let mut merged = Holidays::default();

        if !dir.is_dir() {
            return Ok(merged);
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir.display().to_string(),
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "yaml" || ext == "yml"))
            .collect();
        paths.sort();

        for path in paths {
            let calendar = Self::load_yaml::<HolidayCalendar>(&path)?;
            Self::merge_calendar(&mut merged, calendar)?;
        }

        Ok(merged)
    }

    fn merge_calendar(merged: &mut Holidays, calendar: HolidayCalendar) -> EngineResult<()> {
        let additions = [
            (calendar.regular, HolidayKind::Regular),
            (calendar.special_non_working, HolidayKind::SpecialNonWorking),
            (calendar.special_working, HolidayKind::SpecialWorking),
        ];

        for (dates, kind) in additions {
            for date in dates {
                if merged.is_holiday_day(&date) {
                    return Err(EngineError::HolidayOverlap { date });
                }
                let target = match kind {
                    HolidayKind::Regular => &mut merged.regular,
                    HolidayKind::SpecialNonWorking => &mut merged.special_non_working,
                    HolidayKind::SpecialWorking => &mut merged.special_working,
                };
                target.insert(date);
            }
        }

        Ok(())
    }
}
