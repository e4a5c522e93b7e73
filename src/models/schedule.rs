//! Schedule result models for the roster generation engine.
//!
//! This module contains the [`MonthSchedule`] type and its associated
//! structures that capture all outputs from a generation run: per-employee
//! day entries and totals, coverage gaps, and the compliance verdict.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single day's entry for one employee.
///
/// Exactly one entry exists per employee per calendar day at the end of a
/// run. Work entries carry the hours actually derived from the assigned
/// shift; `shift_id` is `None` only when no shifts were defined and the
/// generator fell back to contract-hours accounting.
///
/// # Example
///
/// ```
/// use roster_engine::models::ScheduleEntry;
/// use rust_decimal::Decimal;
///
/// let entry = ScheduleEntry::Work {
///     shift_id: Some("shift_day".to_string()),
///     worked_hours: Decimal::new(80, 1),
///     contract_hours: Decimal::from(8),
///     overtime_hours: Decimal::ZERO,
/// };
/// assert!(matches!(entry, ScheduleEntry::Work { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScheduleEntry {
    /// A rest day (planned or forced by labour rules).
    Rest,
    /// A firm-closed holiday.
    Holiday,
    /// A working day with the assigned shift's derived hours.
    Work {
        /// The assigned shift, or None on the contract-hours fallback path.
        shift_id: Option<String>,
        /// Net worked hours for the day (shift span minus break).
        worked_hours: Decimal,
        /// The employee's contract hours at the time of assignment.
        contract_hours: Decimal,
        /// Overtime hours: max(0, worked - contract).
        overtime_hours: Decimal,
    },
}

impl ScheduleEntry {
    /// Returns true for [`ScheduleEntry::Work`] entries.
    pub fn is_work(&self) -> bool {
        matches!(self, ScheduleEntry::Work { .. })
    }

    /// Returns true for [`ScheduleEntry::Rest`] entries.
    pub fn is_rest(&self) -> bool {
        matches!(self, ScheduleEntry::Rest)
    }
}

/// The full month of entries and running totals for one employee.
///
/// Entries accumulate monotonically as days are processed; totals and the
/// compliance verdict are finalized only after all days are processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSchedule {
    /// The ID of the employee this schedule belongs to.
    pub employee_id: String,
    /// Day-number (1-based) to entry mapping; one entry per calendar day.
    pub entries: BTreeMap<u32, ScheduleEntry>,
    /// Total worked hours across the month.
    pub total_hours: Decimal,
    /// Total number of Work entries.
    pub total_work_days: u32,
    /// Total number of Rest entries (Holiday entries are not counted).
    pub total_rest_days: u32,
    /// True iff `compliance_issues` is empty.
    pub is_compliant: bool,
    /// Human-readable descriptions of detected labour-rule violations.
    pub compliance_issues: Vec<String>,
}

impl EmployeeSchedule {
    /// Creates an empty schedule for the given employee.
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            entries: BTreeMap::new(),
            total_hours: Decimal::ZERO,
            total_work_days: 0,
            total_rest_days: 0,
            is_compliant: true,
            compliance_issues: Vec::new(),
        }
    }
}

/// A recorded shortfall: fewer employees worked a position on a day than
/// its configured minimum.
///
/// Gaps are append-only observations. The generator never forces an
/// employee back onto a planned or legally-mandated rest day to close one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageGap {
    /// The day-number (1-based) the gap occurred on.
    pub day: u32,
    /// The ID of the understaffed position.
    pub position_id: String,
    /// The display name of the understaffed position.
    pub position_name: String,
    /// The configured minimum headcount.
    pub required: u32,
    /// The headcount actually working.
    pub actual: u32,
}

/// The complete result of a generation run.
///
/// Fully constructed by the generator in one pass and immutable once
/// returned. Apart from `generated_at`, repeated runs over identical inputs
/// produce identical values.
///
/// # Example
///
/// ```
/// use roster_engine::models::MonthSchedule;
/// use chrono::Utc;
///
/// let schedule = MonthSchedule {
///     month: 6,
///     year: 2026,
///     generated_at: Utc::now(),
///     employee_schedules: vec![],
///     coverage_gaps: vec![],
/// };
/// assert_eq!(schedule.month, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSchedule {
    /// The scheduled month (1..=12).
    pub month: u32,
    /// The scheduled year.
    pub year: i32,
    /// When the schedule was generated.
    pub generated_at: DateTime<Utc>,
    /// One schedule per assigned employee, in input order.
    pub employee_schedules: Vec<EmployeeSchedule>,
    /// All recorded staffing shortfalls, in day order.
    pub coverage_gaps: Vec<CoverageGap>,
}

impl MonthSchedule {
    /// Returns the schedule for the given employee, if present.
    pub fn employee_schedule(&self, employee_id: &str) -> Option<&EmployeeSchedule> {
        self.employee_schedules
            .iter()
            .find(|s| s.employee_id == employee_id)
    }
}
