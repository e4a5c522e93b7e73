//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading firm
//! settings and calendar data from YAML files.

use std::fs;
use std::path::Path;

use crate::calendar::StaticCalendar;
use crate::error::{RosterError, RosterResult};

use super::types::{CalendarYearConfig, FirmSettings};

/// Loads and provides access to firm and calendar configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the firm settings plus a calendar provider backed by the
/// bundled per-month records.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/
/// ├── firm.yaml        # Positions, shifts, holiday policy, operating days
/// └── calendar/
///     └── 2026.yaml    # Official working days/hours and holidays per month
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Positions configured: {}", loader.settings().positions.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: FirmSettings,
    calendar: StaticCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `firm.yaml` is missing or contains invalid YAML
    /// - The `calendar` directory is missing or holds no YAML files
    /// - Any calendar file contains invalid YAML
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// # Ok::<(), roster_engine::error::RosterError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();

        let firm_path = path.join("firm.yaml");
        let settings = Self::load_yaml::<FirmSettings>(&firm_path)?;

        let calendar_dir = path.join("calendar");
        let calendar = Self::load_calendar(&calendar_dir)?;

        Ok(Self { settings, calendar })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RosterResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RosterError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all calendar files from the calendar directory.
    fn load_calendar(calendar_dir: &Path) -> RosterResult<StaticCalendar> {
        let calendar_dir_str = calendar_dir.display().to_string();

        if !calendar_dir.exists() {
            return Err(RosterError::ConfigNotFound {
                path: calendar_dir_str,
            });
        }

        let entries = fs::read_dir(calendar_dir).map_err(|_| RosterError::ConfigNotFound {
            path: calendar_dir_str.clone(),
        })?;

        let mut calendar = StaticCalendar::new();
        let mut loaded = 0usize;

        for entry in entries {
            let entry = entry.map_err(|_| RosterError::ConfigNotFound {
                path: calendar_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let year_config = Self::load_yaml::<CalendarYearConfig>(&path)?;
                for (month, month_calendar) in year_config.months {
                    calendar.insert(year_config.year, month, month_calendar);
                }
                loaded += 1;
            }
        }

        if loaded == 0 {
            return Err(RosterError::ConfigNotFound {
                path: format!("{} (no calendar files found)", calendar_dir_str),
            });
        }

        Ok(calendar)
    }

    /// Returns the firm settings.
    pub fn settings(&self) -> &FirmSettings {
        &self.settings
    }

    /// Returns the bundled calendar provider.
    pub fn calendar(&self) -> &StaticCalendar {
        &self.calendar
    }
}
