//! Configuration loading and management for the roster generation engine.
//!
//! This module provides functionality to load firm settings (positions,
//! shifts, holiday policy, operating weekdays) and official calendar data
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config").unwrap();
//! println!("Positions configured: {}", loader.settings().positions.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{default_operating_days, CalendarYearConfig, FirmSettings};
