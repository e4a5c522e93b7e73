//! Schedule generation orchestration.
//!
//! Drives the day-by-day, position-by-position simulation: plans rest days
//! once per position, filters planned workers through the labour-limit
//! tracker, balances survivors across shifts, records entries, accumulates
//! coverage gaps, and finally audits every employee's totals. Days are
//! processed in strict increasing order because each day's decisions depend
//! on the previous day's tracker state; positions are independent of each
//! other and processed sequentially in configuration order.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::calendar::{days_in_month, CalendarProvider};
use crate::config::FirmSettings;
use crate::error::{RosterError, RosterResult};
use crate::models::{CoverageGap, Employee, EmployeeSchedule, MonthSchedule, ScheduleEntry};

use super::compliance::audit_employee_schedule;
use super::rest_days::{plan_rest_days, RestPlan, RestPlanContext};
use super::shift_balance::{assign_shifts, BalancerState};
use super::shift_hours::overtime_hours;
use super::validate::validate_inputs;
use super::work_limits::WorkLimits;

/// Generates the month schedule for a firm's roster.
///
/// The single entry point of the engine. Consumes plain in-memory records
/// and returns a fresh, independent [`MonthSchedule`]; no storage is read
/// or written. Employees without an assigned position are excluded from
/// the run.
///
/// Once inputs pass validation there is no failure path: understaffing is
/// recorded as [`CoverageGap`]s and labour-rule violations as per-employee
/// compliance issues, and a complete schedule is always returned. Apart
/// from the `generated_at` timestamp, the result is fully determined by
/// the inputs.
///
/// # Errors
///
/// Fails fast, before any entry is produced, on structurally invalid
/// input: see [`validate_inputs`](super::validate_inputs), plus
/// [`RosterError::InvalidDate`] for an out-of-range month and
/// [`RosterError::CalendarMonthNotFound`] when the calendar provider has
/// no data for the month.
pub fn generate_schedule(
    settings: &FirmSettings,
    employees: &[Employee],
    month: u32,
    year: i32,
    calendar: &impl CalendarProvider,
) -> RosterResult<MonthSchedule> {
    validate_inputs(settings, employees)?;
    let total_days = days_in_month(month, year)?;
    let month_calendar = calendar.month_calendar(month, year)?;

    info!(
        month,
        year,
        employees = employees.len(),
        positions = settings.positions.len(),
        "generating month schedule"
    );

    // Arena of scheduled employees with a stable index, computed once.
    let roster: Vec<&Employee> = employees.iter().filter(|e| e.position_id.is_some()).collect();
    let mut schedules: Vec<EmployeeSchedule> = roster
        .iter()
        .map(|e| EmployeeSchedule::new(e.id.clone()))
        .collect();
    let mut limits: Vec<WorkLimits> = vec![WorkLimits::new(); roster.len()];

    // Members per position, in stable id order.
    let position_members: Vec<Vec<usize>> = settings
        .positions
        .iter()
        .map(|position| {
            let mut members: Vec<usize> = (0..roster.len())
                .filter(|&i| roster[i].position_id.as_deref() == Some(position.id.as_str()))
                .collect();
            members.sort_by(|&a, &b| roster[a].id.cmp(&roster[b].id));
            members
        })
        .collect();

    // Rest-day plans, one per position, ahead of the day loop.
    let plans: Vec<RestPlan> = settings
        .positions
        .iter()
        .zip(&position_members)
        .map(|(position, members)| {
            let assigned: Vec<&Employee> = members.iter().map(|&i| roster[i]).collect();
            plan_rest_days(&RestPlanContext {
                position,
                employees: &assigned,
                days_in_month: total_days,
                target_work_days: month_calendar.working_days,
                holidays: &month_calendar.holidays,
                works_on_holidays: settings.works_on_holidays,
                shifts: &settings.shifts,
                operating_days: &settings.operating_days,
                month,
                year,
            })
        })
        .collect();

    let mut balancer = BalancerState::new();
    let mut coverage_gaps: Vec<CoverageGap> = Vec::new();

    for day in 1..=total_days {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(RosterError::InvalidDate { month, year })?;
        let weekday = date.weekday().number_from_monday();
        let is_holiday = month_calendar.holidays.contains(&day);

        for (index, position) in settings.positions.iter().enumerate() {
            let members = &position_members[index];

            if is_holiday && !settings.works_on_holidays {
                for &member in members {
                    schedules[member].entries.insert(day, ScheduleEntry::Holiday);
                    limits[member].record_closed_holiday();
                }
                continue;
            }

            if !settings.operating_days.contains(&weekday) {
                for &member in members {
                    schedules[member].entries.insert(day, ScheduleEntry::Rest);
                    schedules[member].total_rest_days += 1;
                    limits[member].record_rest();
                }
                continue;
            }

            // Open day: planner designation first, then the legal veto.
            let mut resting: Vec<usize> = Vec::new();
            let mut working: Vec<usize> = Vec::new();
            for &member in members {
                let employee = roster[member];
                let planned_rest = plans[index].is_rest_day(&employee.id, day);
                let veto = limits[member].forced_rest(day, is_holiday, employee.is_minor);
                if let Some(reason) = veto {
                    if !planned_rest {
                        debug!(day, employee = %employee.id, %reason, "forced rest");
                    }
                }
                if planned_rest || veto.is_some() {
                    resting.push(member);
                } else {
                    working.push(member);
                }
            }

            if (working.len() as u32) < position.min_per_day {
                warn!(
                    day,
                    position = %position.id,
                    required = position.min_per_day,
                    actual = working.len(),
                    "coverage gap"
                );
                coverage_gaps.push(CoverageGap {
                    day,
                    position_id: position.id.clone(),
                    position_name: position.name.clone(),
                    required: position.min_per_day,
                    actual: working.len() as u32,
                });
            }

            let workers: Vec<&Employee> = working.iter().map(|&i| roster[i]).collect();
            let assignments: BTreeMap<String, String> =
                assign_shifts(&workers, &settings.shifts, day, balancer.offset(&position.id));
            balancer.advance(&position.id);

            for &member in &resting {
                schedules[member].entries.insert(day, ScheduleEntry::Rest);
                schedules[member].total_rest_days += 1;
                limits[member].record_rest();
            }

            for &member in &working {
                let employee = roster[member];
                let contract = employee.contract_hours.as_decimal();
                let assigned = assignments
                    .get(&employee.id)
                    .and_then(|id| settings.shifts.iter().find(|s| &s.id == id));

                let (shift_id, worked, extended) = match assigned {
                    Some(shift) => (Some(shift.id.clone()), shift.worked_hours(), shift.is_extended()),
                    None => (None, contract, false),
                };
                let overtime = overtime_hours(worked, contract);

                schedules[member].entries.insert(
                    day,
                    ScheduleEntry::Work {
                        shift_id,
                        worked_hours: worked,
                        contract_hours: contract,
                        overtime_hours: overtime,
                    },
                );
                schedules[member].total_hours += worked;
                schedules[member].total_work_days += 1;
                limits[member].record_work(day, worked, extended);
            }
        }
    }

    for member in 0..roster.len() {
        audit_employee_schedule(
            &mut schedules[member],
            roster[member],
            &limits[member],
            month_calendar.working_days,
        );
    }

    info!(gaps = coverage_gaps.len(), "month schedule generated");

    Ok(MonthSchedule {
        month,
        year,
        generated_at: Utc::now(),
        employee_schedules: schedules,
        coverage_gaps,
    })
}
