//! Rest-day planning.
//!
//! For one position and its assigned employees, decides ahead of the
//! day-by-day simulation which calendar days each employee is *intended*
//! to rest, so that attendance on workable days approximates the firm's
//! target working-day count for the month. The plan is advisory: the
//! labour-limit tracker can force additional rest, but a planned rest day
//! is never turned back into work.
//!
//! Two algorithms are chosen by a structural rule. A position with exactly
//! two employees and a minimum headcount of one uses the handoff pattern,
//! which keeps the pair's rest days complementary so the position is
//! covered by construction. Every other combination uses the standard
//! pattern: per-employee even spacing with adjacent-day avoidance, then a
//! per-employee stagger so colleagues don't all rest on identical days.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};

use crate::models::{Employee, Position, Shift};

/// Inputs for planning one position's rest days.
#[derive(Debug, Clone)]
pub struct RestPlanContext<'a> {
    /// The position being planned.
    pub position: &'a Position,
    /// The employees assigned to the position.
    pub employees: &'a [&'a Employee],
    /// Number of calendar days in the month.
    pub days_in_month: u32,
    /// The firm's target working-day count for the month.
    pub target_work_days: u32,
    /// Day-numbers of declared holidays in the month.
    pub holidays: &'a BTreeSet<u32>,
    /// Whether the firm opens on declared holidays.
    pub works_on_holidays: bool,
    /// The shift catalogue (used to detect extended shifts).
    pub shifts: &'a [Shift],
    /// Operating weekdays as Monday-based numbers (1 = Monday .. 7 = Sunday).
    pub operating_days: &'a BTreeSet<u32>,
    /// The scheduled month (1..=12).
    pub month: u32,
    /// The scheduled year.
    pub year: i32,
}

/// The planner's advisory output for one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestPlan {
    rest_days: BTreeMap<String, BTreeSet<u32>>,
    workable_days: Vec<u32>,
}

impl RestPlan {
    /// Returns true when the plan designates `day` as rest for the employee.
    pub fn is_rest_day(&self, employee_id: &str, day: u32) -> bool {
        self.rest_days
            .get(employee_id)
            .is_some_and(|days| days.contains(&day))
    }

    /// Returns the planned rest days for an employee, if planned.
    pub fn rest_days(&self, employee_id: &str) -> Option<&BTreeSet<u32>> {
        self.rest_days.get(employee_id)
    }

    /// Returns the workable days the plan was computed over.
    pub fn workable_days(&self) -> &[u32] {
        &self.workable_days
    }
}

/// Returns the workable days of the month, in ascending order.
///
/// A day is workable when its weekday is in the firm's operating set and it
/// is not a holiday the firm closes for.
pub fn workable_days(
    days_in_month: u32,
    holidays: &BTreeSet<u32>,
    works_on_holidays: bool,
    operating_days: &BTreeSet<u32>,
    month: u32,
    year: i32,
) -> Vec<u32> {
    (1..=days_in_month)
        .filter(|&day| {
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                return false;
            };
            if !operating_days.contains(&date.weekday().number_from_monday()) {
                return false;
            }
            !(holidays.contains(&day) && !works_on_holidays)
        })
        .collect()
}

/// Plans rest days for one position's employees.
///
/// The returned plan maps each employee id to its planned rest day-numbers.
/// Work-day counts approximate the target on a best-effort basis; the plan
/// never guarantees an exact hit for degenerate inputs (e.g. very small
/// workable-day counts).
pub fn plan_rest_days(ctx: &RestPlanContext<'_>) -> RestPlan {
    let workable = workable_days(
        ctx.days_in_month,
        ctx.holidays,
        ctx.works_on_holidays,
        ctx.operating_days,
        ctx.month,
        ctx.year,
    );

    let mut employees: Vec<&Employee> = ctx.employees.to_vec();
    employees.sort_by(|a, b| a.id.cmp(&b.id));

    let rest_days = if employees.len() == 2 && ctx.position.min_per_day == 1 {
        plan_handoff(&employees, &workable, ctx.target_work_days, ctx.shifts)
    } else {
        plan_standard(
            &employees,
            &workable,
            ctx.target_work_days,
            ctx.days_in_month,
            ctx.holidays,
            ctx.works_on_holidays,
        )
    };

    RestPlan {
        rest_days,
        workable_days: workable,
    }
}

/// Handoff pattern for two employees covering a minimum of one.
///
/// Rest days are handed out alternately, one workable day at a time, or in
/// contiguous 2-day blocks when any shift is extended (a 2-on/2-off
/// rotation). Each employee receives at most the rest-day count implied by
/// the target; on every workable day at most one of the pair rests. A
/// greedy repair then converts excess work days to rest, only on days the
/// partner is already working, so coverage is preserved throughout.
fn plan_handoff(
    employees: &[&Employee],
    workable: &[u32],
    target_work_days: u32,
    shifts: &[Shift],
) -> BTreeMap<String, BTreeSet<u32>> {
    let rest_needed = workable.len().saturating_sub(target_work_days as usize);
    let extended = shifts.iter().any(Shift::is_extended);
    let mut rest: [BTreeSet<u32>; 2] = [BTreeSet::new(), BTreeSet::new()];

    if extended {
        for (block, chunk) in workable.chunks(2).enumerate() {
            let who = block % 2;
            for &day in chunk {
                if rest[who].len() < rest_needed {
                    rest[who].insert(day);
                }
            }
        }
    } else {
        for (slot, &day) in workable.iter().enumerate() {
            let who = slot % 2;
            if rest[who].len() < rest_needed {
                rest[who].insert(day);
            }
        }
    }

    // Excess work days become rest, but never on a day the partner rests.
    for who in 0..2 {
        let other = 1 - who;
        let work_count = workable.len() - rest[who].len();
        let mut excess = work_count.saturating_sub(target_work_days as usize);
        for &day in workable {
            if excess == 0 {
                break;
            }
            if !rest[who].contains(&day) && !rest[other].contains(&day) {
                rest[who].insert(day);
                excess -= 1;
            }
        }
    }

    let [first, second] = rest;
    BTreeMap::from([
        (employees[0].id.clone(), first),
        (employees[1].id.clone(), second),
    ])
}

/// Standard pattern: per-employee even spacing plus a stagger.
fn plan_standard(
    employees: &[&Employee],
    workable: &[u32],
    target_work_days: u32,
    days_in_month: u32,
    holidays: &BTreeSet<u32>,
    works_on_holidays: bool,
) -> BTreeMap<String, BTreeSet<u32>> {
    let rest_needed = workable.len().saturating_sub(target_work_days as usize);
    if rest_needed == 0 {
        return employees
            .iter()
            .map(|e| (e.id.clone(), BTreeSet::new()))
            .collect();
    }

    let base = place_evenly(workable, rest_needed);

    employees
        .iter()
        .enumerate()
        .map(|(index, employee)| {
            let days = if index == 0 {
                base.clone()
            } else {
                let offset = stagger_offset(index, employees.len(), rest_needed);
                shift_within_month(&base, offset, days_in_month, holidays, works_on_holidays)
            };
            (employee.id.clone(), days)
        })
        .collect()
}

/// Places `rest_needed` rest days at roughly even spacing across the
/// workable-day sequence, avoiding adjacent calendar days where possible.
fn place_evenly(workable: &[u32], rest_needed: usize) -> BTreeSet<u32> {
    let count = workable.len();
    if count == 0 {
        return BTreeSet::new();
    }

    let interval = count as f64 / (rest_needed + 1) as f64;
    let mut chosen_days: BTreeSet<u32> = BTreeSet::new();
    let mut chosen_slots: BTreeSet<usize> = BTreeSet::new();

    for k in 0..rest_needed {
        let ideal = (((k + 1) as f64) * interval).floor() as usize;
        let ideal = ideal.min(count - 1);
        if let Some(slot) = find_slot(workable, &chosen_slots, &chosen_days, ideal) {
            chosen_slots.insert(slot);
            chosen_days.insert(workable[slot]);
        }
    }

    chosen_days
}

/// Finds the free slot nearest `ideal` whose day is not calendar-adjacent
/// to an already-chosen rest day, falling back to the nearest free slot.
fn find_slot(
    workable: &[u32],
    chosen_slots: &BTreeSet<usize>,
    chosen_days: &BTreeSet<u32>,
    ideal: usize,
) -> Option<usize> {
    let count = workable.len();

    let candidates = |delta: usize| {
        let mut slots = Vec::with_capacity(2);
        if ideal + delta < count {
            slots.push(ideal + delta);
        }
        if delta > 0 && delta <= ideal {
            slots.push(ideal - delta);
        }
        slots
    };

    for delta in 0..count {
        for slot in candidates(delta) {
            if chosen_slots.contains(&slot) {
                continue;
            }
            let day = workable[slot];
            let adjacent = chosen_days.contains(&day.saturating_sub(1))
                || chosen_days.contains(&(day + 1));
            if !adjacent {
                return Some(slot);
            }
        }
    }

    for delta in 0..count {
        for slot in candidates(delta) {
            if !chosen_slots.contains(&slot) {
                return Some(slot);
            }
        }
    }

    None
}

/// Stagger step for the employee at `index`: proportional to the index,
/// inversely proportional to headcount and rest-day count. The 30 is a
/// fixed month-length approximation.
fn stagger_offset(index: usize, employee_count: usize, rest_needed: usize) -> i64 {
    let step = 30.0 / employee_count as f64 / rest_needed as f64;
    (index as f64 * step).floor() as i64
}

/// Shifts a rest-day set by `offset`, wrapping within the month and
/// skipping holidays when the firm closes on them.
fn shift_within_month(
    days: &BTreeSet<u32>,
    offset: i64,
    days_in_month: u32,
    holidays: &BTreeSet<u32>,
    works_on_holidays: bool,
) -> BTreeSet<u32> {
    days.iter()
        .map(|&day| {
            let mut shifted =
                (i64::from(day) - 1 + offset).rem_euclid(i64::from(days_in_month)) as u32 + 1;
            if !works_on_holidays {
                let mut guard = 0;
                while holidays.contains(&shifted) && guard < days_in_month {
                    shifted = shifted % days_in_month + 1;
                    guard += 1;
                }
            }
            shifted
        })
        .collect()
}
