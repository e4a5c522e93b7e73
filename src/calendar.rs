//! Calendar collaborator for official working-day data.
//!
//! The engine does not compute national holidays or official working-day
//! counts itself; it consumes them from a [`CalendarProvider`]. The provider
//! is treated as authoritative and read-only. [`StaticCalendar`] is the
//! bundled implementation backed by in-memory per-month records, typically
//! deserialized from the calendar configuration files.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// Official calendar data for one month.
///
/// # Example
///
/// ```
/// use roster_engine::calendar::MonthCalendar;
/// use std::collections::BTreeSet;
///
/// let calendar = MonthCalendar {
///     working_days: 21,
///     working_hours: 168,
///     holidays: BTreeSet::from([1, 6]),
/// };
/// assert!(calendar.holidays.contains(&6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCalendar {
    /// The official number of working days in the month.
    pub working_days: u32,
    /// The official number of working hours in the month (8h basis).
    pub working_hours: u32,
    /// Day-numbers (1-based) of declared holidays in the month.
    #[serde(default)]
    pub holidays: BTreeSet<u32>,
}

/// Source of official working-day counts and holiday dates.
///
/// Implementations must be deterministic: repeated queries for the same
/// month return identical data.
pub trait CalendarProvider {
    /// Returns the calendar data for the given month.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::CalendarMonthNotFound`] when the provider has
    /// no data for the requested month.
    fn month_calendar(&self, month: u32, year: i32) -> RosterResult<MonthCalendar>;

    /// Returns true when the given date is a declared holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// A [`CalendarProvider`] backed by a fixed set of per-month records.
///
/// # Example
///
/// ```
/// use roster_engine::calendar::{CalendarProvider, MonthCalendar, StaticCalendar};
/// use std::collections::BTreeSet;
///
/// let mut calendar = StaticCalendar::new();
/// calendar.insert(2026, 1, MonthCalendar {
///     working_days: 21,
///     working_hours: 168,
///     holidays: BTreeSet::from([1]),
/// });
///
/// let january = calendar.month_calendar(1, 2026).unwrap();
/// assert_eq!(january.working_days, 21);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCalendar {
    months: BTreeMap<(i32, u32), MonthCalendar>,
}

impl StaticCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) the record for a month.
    pub fn insert(&mut self, year: i32, month: u32, calendar: MonthCalendar) {
        self.months.insert((year, month), calendar);
    }
}

impl CalendarProvider for StaticCalendar {
    fn month_calendar(&self, month: u32, year: i32) -> RosterResult<MonthCalendar> {
        self.months
            .get(&(year, month))
            .cloned()
            .ok_or(RosterError::CalendarMonthNotFound { month, year })
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.months
            .get(&(date.year(), date.month()))
            .is_some_and(|m| m.holidays.contains(&date.day()))
    }
}

/// Returns the number of calendar days in the given month.
///
/// # Errors
///
/// Returns [`RosterError::InvalidDate`] when `month` is outside `1..=12` or
/// the year is outside chrono's representable range.
///
/// # Example
///
/// ```
/// use roster_engine::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2, 2026).unwrap(), 28);
/// assert_eq!(days_in_month(2, 2028).unwrap(), 29);
/// assert_eq!(days_in_month(7, 2026).unwrap(), 31);
/// ```
pub fn days_in_month(month: u32, year: i32) -> RosterResult<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(RosterError::InvalidDate { month, year })?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(RosterError::InvalidDate { month, year })?;

    Ok(next.signed_duration_since(first).num_days() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_month() -> MonthCalendar {
        MonthCalendar {
            working_days: 21,
            working_hours: 168,
            holidays: BTreeSet::from([1, 6]),
        }
    }

    #[test]
    fn test_month_calendar_lookup() {
        let mut calendar = StaticCalendar::new();
        calendar.insert(2026, 1, sample_month());

        let january = calendar.month_calendar(1, 2026).unwrap();
        assert_eq!(january.working_days, 21);
        assert_eq!(january.working_hours, 168);
        assert_eq!(january.holidays, BTreeSet::from([1, 6]));
    }

    #[test]
    fn test_missing_month_returns_error() {
        let calendar = StaticCalendar::new();

        let result = calendar.month_calendar(3, 2026);
        match result {
            Err(RosterError::CalendarMonthNotFound { month, year }) => {
                assert_eq!(month, 3);
                assert_eq!(year, 2026);
            }
            _ => panic!("Expected CalendarMonthNotFound error"),
        }
    }

    #[test]
    fn test_is_holiday() {
        let mut calendar = StaticCalendar::new();
        calendar.insert(2026, 1, sample_month());

        let holiday = NaiveDate::from_ymd_opt(2026, 1, 6).unwrap();
        let workday = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        assert!(calendar.is_holiday(holiday));
        assert!(!calendar.is_holiday(workday));
    }

    #[test]
    fn test_is_holiday_false_for_unknown_month() {
        let calendar = StaticCalendar::new();

        let date = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        assert!(!calendar.is_holiday(date));
    }

    #[test]
    fn test_days_in_month_regular_year() {
        assert_eq!(days_in_month(1, 2026).unwrap(), 31);
        assert_eq!(days_in_month(2, 2026).unwrap(), 28);
        assert_eq!(days_in_month(4, 2026).unwrap(), 30);
        assert_eq!(days_in_month(12, 2026).unwrap(), 31);
    }

    #[test]
    fn test_days_in_month_leap_year() {
        assert_eq!(days_in_month(2, 2028).unwrap(), 29);
    }

    #[test]
    fn test_days_in_month_invalid_month() {
        let result = days_in_month(13, 2026);
        match result {
            Err(RosterError::InvalidDate { month, year }) => {
                assert_eq!(month, 13);
                assert_eq!(year, 2026);
            }
            _ => panic!("Expected InvalidDate error"),
        }
    }

    #[test]
    fn test_month_calendar_serde_round_trip() {
        let month = sample_month();
        let json = serde_json::to_string(&month).unwrap();
        let deserialized: MonthCalendar = serde_json::from_str(&json).unwrap();
        assert_eq!(month, deserialized);
    }

    #[test]
    fn test_month_calendar_deserializes_without_holidays() {
        let json = r#"{"working_days": 20, "working_hours": 160}"#;
        let month: MonthCalendar = serde_json::from_str(json).unwrap();
        assert_eq!(month.working_days, 20);
        assert!(month.holidays.is_empty());
    }
}
