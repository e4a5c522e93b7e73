//! Shift balancing for a single day and position.
//!
//! Given the employees confirmed to work a position on a day, spreads them
//! across the shift catalogue as evenly as possible. When headcount does
//! not divide evenly, the extra slot rotates to a different shift each
//! processed day, and the employee ordering itself rotates with the
//! day-number, so neither a shift nor an employee is chronically favoured.

use std::collections::BTreeMap;

use crate::models::{Employee, Shift};

/// Per-run rotation state for the balancer, keyed by position.
///
/// Each position carries a day-offset counter that advances once per
/// processed day; it selects which shifts absorb the remainder slots. The
/// state is owned by the generator and passed explicitly.
#[derive(Debug, Clone, Default)]
pub struct BalancerState {
    offsets: BTreeMap<String, usize>,
}

impl BalancerState {
    /// Creates a fresh state with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current day offset for a position.
    pub fn offset(&self, position_id: &str) -> usize {
        self.offsets.get(position_id).copied().unwrap_or(0)
    }

    /// Advances the day offset for a position by one.
    pub fn advance(&mut self, position_id: &str) {
        *self.offsets.entry(position_id.to_string()).or_insert(0) += 1;
    }
}

/// Assigns each working employee to exactly one shift.
///
/// With `n` employees and `s` shifts, every shift receives
/// `base = n / s` employees; the `n % s` remainder slots go to the shifts
/// at index `(i + day_offset) % s`. Employees are taken in stable id order,
/// cyclically rotated by `(day - 1) % n`, and paired positionally with the
/// slot list.
///
/// Returns an employee-id to shift-id mapping; empty when there are no
/// shifts or no employees (the caller then falls back to contract-hours
/// accounting).
///
/// # Example
///
/// ```
/// use roster_engine::models::{ContractHours, Employee, Shift};
/// use roster_engine::scheduling::assign_shifts;
/// use chrono::NaiveTime;
///
/// let shifts = vec![
///     Shift {
///         id: "shift_am".to_string(),
///         name: "Morning".to_string(),
///         abbreviation: "M".to_string(),
///         start_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///         end_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
///         break_minutes: 0,
///     },
///     Shift {
///         id: "shift_pm".to_string(),
///         name: "Afternoon".to_string(),
///         abbreviation: "A".to_string(),
///         start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
///         end_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///         break_minutes: 0,
///     },
/// ];
/// let employees: Vec<Employee> = (1..=2)
///     .map(|i| Employee {
///         id: format!("emp_{i:03}"),
///         name: format!("Employee {i}"),
///         position_id: Some("pos_reception".to_string()),
///         contract_hours: ContractHours::Eight,
///         is_minor: false,
///         birth_date: None,
///     })
///     .collect();
/// let workers: Vec<&Employee> = employees.iter().collect();
///
/// let assignments = assign_shifts(&workers, &shifts, 1, 0);
/// assert_eq!(assignments.len(), 2);
/// ```
pub fn assign_shifts(
    workers: &[&Employee],
    shifts: &[Shift],
    day: u32,
    day_offset: usize,
) -> BTreeMap<String, String> {
    if workers.is_empty() || shifts.is_empty() {
        return BTreeMap::new();
    }

    let n = workers.len();
    let s = shifts.len();
    let base = n / s;
    let remainder = n % s;

    let mut slots: Vec<&Shift> = Vec::with_capacity(n);
    for shift in shifts {
        for _ in 0..base {
            slots.push(shift);
        }
    }
    for i in 0..remainder {
        slots.push(&shifts[(i + day_offset) % s]);
    }

    let mut ordered: Vec<&Employee> = workers.to_vec();
    ordered.sort_by(|a, b| a.id.cmp(&b.id));
    let rotation = ((day - 1) as usize) % n;
    ordered.rotate_left(rotation);

    ordered
        .iter()
        .zip(slots)
        .map(|(employee, shift)| (employee.id.clone(), shift.id.clone()))
        .collect()
}
