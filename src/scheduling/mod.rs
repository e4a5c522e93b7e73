//! Scheduling logic for the roster generation engine.
//!
//! This module contains the core algorithms: shift duration calculations,
//! input validation, rest-day planning (even spacing and the two-employee
//! handoff pattern), per-day shift balancing, labour-law limit tracking,
//! the post-hoc compliance audit, and the generator that orchestrates the
//! day-by-day simulation.

mod compliance;
mod generator;
mod rest_days;
mod shift_balance;
mod shift_hours;
mod validate;
mod work_limits;

pub use compliance::{audit_employee_schedule, MONTHLY_OVERAGE_TOLERANCE_HOURS};
pub use generator::generate_schedule;
pub use rest_days::{plan_rest_days, workable_days, RestPlan, RestPlanContext};
pub use shift_balance::{assign_shifts, BalancerState};
pub use shift_hours::{
    is_extended_shift, net_shift_hours, overtime_hours, shift_hours, EXTENDED_SHIFT_MINUTES,
};
pub use validate::validate_inputs;
pub use work_limits::{
    week_index, weekly_ceiling, ForcedRest, WorkLimits, ADULT_WEEKLY_HOURS_CEILING,
    EXTENDED_REST_DAYS, MAX_CONSECUTIVE_EXTENDED_DAYS, MAX_CONSECUTIVE_WORK_DAYS,
    MINOR_WEEKLY_HOURS_CEILING, WEEK_BUCKETS,
};
