//! Input validation.
//!
//! Structural problems in the firm configuration or roster are rejected
//! here, before any schedule entry is produced. Generation itself never
//! fails mid-run: understaffing and labour-rule violations are reported in
//! the result instead.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::config::FirmSettings;
use crate::error::{RosterError, RosterResult};
use crate::models::Employee;

/// Validates firm settings and the employee roster ahead of generation.
///
/// # Errors
///
/// - [`RosterError::InvalidPosition`] for a duplicate position id, a
///   `min_per_day` of zero, or a position with no assigned employees.
/// - [`RosterError::InvalidShift`] for a duplicate shift id, equal start
///   and end times, or a break that does not fit in the shift span.
/// - [`RosterError::InvalidEmployee`] for a duplicate employee id or an
///   assignment to an unknown position.
pub fn validate_inputs(settings: &FirmSettings, employees: &[Employee]) -> RosterResult<()> {
    let mut position_ids = BTreeSet::new();
    for position in &settings.positions {
        if !position_ids.insert(position.id.as_str()) {
            return Err(RosterError::InvalidPosition {
                position_id: position.id.clone(),
                message: "duplicate position id".to_string(),
            });
        }
        if position.min_per_day == 0 {
            return Err(RosterError::InvalidPosition {
                position_id: position.id.clone(),
                message: "min_per_day must be at least 1".to_string(),
            });
        }
    }

    let mut shift_ids = BTreeSet::new();
    for shift in &settings.shifts {
        if !shift_ids.insert(shift.id.as_str()) {
            return Err(RosterError::InvalidShift {
                shift_id: shift.id.clone(),
                message: "duplicate shift id".to_string(),
            });
        }
        if shift.start_time == shift.end_time {
            return Err(RosterError::InvalidShift {
                shift_id: shift.id.clone(),
                message: "start and end times are equal".to_string(),
            });
        }
        let break_hours = Decimal::from(shift.break_minutes) / Decimal::from(60);
        if break_hours >= shift.duration_hours() {
            return Err(RosterError::InvalidShift {
                shift_id: shift.id.clone(),
                message: "break does not fit in the shift span".to_string(),
            });
        }
    }

    let mut employee_ids = BTreeSet::new();
    for employee in employees {
        if !employee_ids.insert(employee.id.as_str()) {
            return Err(RosterError::InvalidEmployee {
                field: "id".to_string(),
                message: format!("duplicate employee id '{}'", employee.id),
            });
        }
        if let Some(position_id) = &employee.position_id {
            if !position_ids.contains(position_id.as_str()) {
                return Err(RosterError::InvalidEmployee {
                    field: "position_id".to_string(),
                    message: format!("references unknown position '{position_id}'"),
                });
            }
        }
    }

    for position in &settings.positions {
        let assigned = employees
            .iter()
            .filter(|e| e.position_id.as_deref() == Some(position.id.as_str()))
            .count();
        if assigned == 0 {
            return Err(RosterError::InvalidPosition {
                position_id: position.id.clone(),
                message: "no employees assigned".to_string(),
            });
        }
    }

    Ok(())
}
