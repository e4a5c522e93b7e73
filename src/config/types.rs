//! Configuration types for roster generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::calendar::MonthCalendar;
use crate::models::{Position, Shift};

/// Firm-level settings consumed by the generator.
///
/// Bundles the position and shift catalogues with the firm's holiday
/// policy and operating weekdays. Immutable for the duration of a
/// generation run.
#[derive(Debug, Clone, Deserialize)]
pub struct FirmSettings {
    /// The firm's staffed positions.
    pub positions: Vec<Position>,
    /// The firm's shift catalogue, shared across positions.
    pub shifts: Vec<Shift>,
    /// Whether the firm opens on declared holidays.
    #[serde(default)]
    pub works_on_holidays: bool,
    /// Operating weekdays as Monday-based numbers (1 = Monday .. 7 =
    /// Sunday). Defaults to Monday through Friday.
    #[serde(default = "default_operating_days")]
    pub operating_days: BTreeSet<u32>,
}

/// Returns the default operating weekdays: Monday through Friday.
pub fn default_operating_days() -> BTreeSet<u32> {
    BTreeSet::from([1, 2, 3, 4, 5])
}

/// One year of official calendar data, as stored in a calendar file.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarYearConfig {
    /// The calendar year the records belong to.
    pub year: i32,
    /// Per-month records keyed by month number (1..=12).
    pub months: BTreeMap<u32, MonthCalendar>,
}
