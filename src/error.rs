//! Error types for the roster generation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur before or during roster
//! generation. Once inputs pass validation, generation itself has no error
//! path: understaffing and labour-rule violations are reported in the
//! result, not raised as errors.

use thiserror::Error;

/// The main error type for the roster generation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::RosterError;
///
/// let error = RosterError::ConfigNotFound {
///     path: "/missing/firm.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/firm.yaml");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
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

    /// A position definition was invalid or inconsistent.
    #[error("Invalid position '{position_id}': {message}")]
    InvalidPosition {
        /// The ID of the invalid position.
        position_id: String,
        /// A description of what made the position invalid.
        message: String,
    },

    /// A shift definition was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A month/year combination outside the supported range was requested.
    #[error("Invalid date: month {month}, year {year}")]
    InvalidDate {
        /// The requested month (expected 1..=12).
        month: u32,
        /// The requested year.
        year: i32,
    },

    /// The calendar provider has no data for the requested month.
    #[error("No calendar data for {month}/{year}")]
    CalendarMonthNotFound {
        /// The requested month.
        month: u32,
        /// The requested year.
        year: i32,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
