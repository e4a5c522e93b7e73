//! Shift model.
//!
//! This module defines the Shift struct for representing reusable shift
//! definitions (time windows with break durations) in the roster system.
//! Worked hours and the extended flag are derived from the time window, not
//! stored.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::scheduling::{is_extended_shift, net_shift_hours, shift_hours};

/// A reusable shift definition: a time-of-day window plus a break duration.
///
/// Shift windows may wrap past midnight (e.g. 22:00–06:00). Shifts are part
/// of the firm configuration and immutable during a generation run.
///
/// # Example
///
/// ```
/// use roster_engine::models::Shift;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let shift = Shift {
///     id: "shift_day".to_string(),
///     name: "Day".to_string(),
///     abbreviation: "D".to_string(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
///     break_minutes: 30,
/// };
/// assert_eq!(shift.worked_hours(), Decimal::new(80, 1)); // 8.0
/// assert!(!shift.is_extended());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The human-readable name of the shift.
    pub name: String,
    /// A short display abbreviation (e.g. "M" for morning).
    pub abbreviation: String,
    /// The time of day the shift starts.
    pub start_time: NaiveTime,
    /// The time of day the shift ends (may be before `start_time` for
    /// overnight shifts).
    pub end_time: NaiveTime,
    /// Unpaid break duration in minutes, subtracted from worked hours.
    #[serde(default)]
    pub break_minutes: u32,
}

impl Shift {
    /// Returns the raw span of the shift in fractional hours, handling
    /// overnight wraparound.
    pub fn duration_hours(&self) -> Decimal {
        shift_hours(self.start_time, self.end_time)
    }

    /// Returns the worked hours for the shift: the raw span minus the break.
    pub fn worked_hours(&self) -> Decimal {
        net_shift_hours(self.start_time, self.end_time, self.break_minutes)
    }

    /// Returns true when the raw span is at least 10 hours.
    ///
    /// Extended shifts are subject to stricter consecutive-day and
    /// mandatory-rest rules.
    pub fn is_extended(&self) -> bool {
        is_extended_shift(self.start_time, self.end_time)
    }
}
