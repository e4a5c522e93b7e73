//! Shift duration calculations.
//!
//! Pure functions converting a shift's start/end time-of-day into worked
//! hours, net of break time, handling overnight wraparound, and classifying
//! extended shifts. Times are interpreted as minutes since midnight; all
//! hour values are exact decimals (minutes / 60).

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

const MINUTES_PER_DAY: i64 = 1440;

/// Raw span (in minutes) at or above which a shift counts as extended.
///
/// Extended shifts trigger stricter consecutive-day and mandatory-rest
/// rules. The classification uses the raw span, not the net span.
pub const EXTENDED_SHIFT_MINUTES: i64 = 600;

fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight() / 60)
}

fn span_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    let start = minutes_since_midnight(start);
    let end = minutes_since_midnight(end);

    if end > start {
        end - start
    } else {
        // Overnight wraparound: the shift runs past midnight.
        (MINUTES_PER_DAY - start) + end
    }
}

/// Returns the raw span of a shift in fractional hours.
///
/// When `end` is not after `start`, the shift is taken to wrap past
/// midnight: `(1440 - start) + end` minutes.
///
/// # Example
///
/// ```
/// use roster_engine::scheduling::shift_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
/// assert_eq!(shift_hours(start, end), Decimal::from(8));
/// ```
pub fn shift_hours(start: NaiveTime, end: NaiveTime) -> Decimal {
    Decimal::from(span_minutes(start, end)) / Decimal::from(60)
}

/// Returns the worked hours of a shift: the raw span minus the break.
///
/// # Example
///
/// ```
/// use roster_engine::scheduling::net_shift_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(17, 30, 0).unwrap();
/// assert_eq!(net_shift_hours(start, end, 30), Decimal::from(8));
/// ```
pub fn net_shift_hours(start: NaiveTime, end: NaiveTime, break_minutes: u32) -> Decimal {
    Decimal::from(span_minutes(start, end) - i64::from(break_minutes)) / Decimal::from(60)
}

/// Returns true when the raw span of the shift is at least 10 hours.
///
/// # Example
///
/// ```
/// use roster_engine::scheduling::is_extended_shift;
/// use chrono::NaiveTime;
///
/// let start = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
/// assert!(is_extended_shift(start, end));
/// ```
pub fn is_extended_shift(start: NaiveTime, end: NaiveTime) -> bool {
    span_minutes(start, end) >= EXTENDED_SHIFT_MINUTES
}

/// Returns the overtime portion of a day's worked hours.
///
/// Overtime is `max(0, worked - contract)`; contract hours are a target,
/// not the actual clock.
///
/// # Example
///
/// ```
/// use roster_engine::scheduling::overtime_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     overtime_hours(Decimal::new(115, 1), Decimal::from(8)),
///     Decimal::new(35, 1)
/// );
/// assert_eq!(overtime_hours(Decimal::from(6), Decimal::from(8)), Decimal::ZERO);
/// ```
pub fn overtime_hours(worked: Decimal, contract: Decimal) -> Decimal {
    if worked > contract {
        worked - contract
    } else {
        Decimal::ZERO
    }
}
