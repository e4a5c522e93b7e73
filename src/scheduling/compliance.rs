//! Post-hoc compliance auditing.
//!
//! After all days are processed, each employee's finalized totals are
//! checked against the monthly target and the weekly hour ceilings. Audit
//! findings are reported as human-readable issue strings on the schedule;
//! they never abort generation.

use rust_decimal::Decimal;

use crate::models::{Employee, EmployeeSchedule};
use crate::scheduling::work_limits::{weekly_ceiling, WorkLimits, WEEK_BUCKETS};

/// Hours by which monthly totals may exceed the target before an issue is
/// raised.
pub const MONTHLY_OVERAGE_TOLERANCE_HOURS: u32 = 8;

/// Audits one employee's finalized schedule, filling in the compliance
/// verdict.
///
/// The monthly target is the calendar's official working-day count times
/// the employee's contract hours (not the employee-specific workable
/// count). An issue is raised when total hours exceed the target by more
/// than [`MONTHLY_OVERAGE_TOLERANCE_HOURS`], and for every week bucket
/// above the employee's weekly ceiling. `is_compliant` ends up true iff no
/// issue was raised.
pub fn audit_employee_schedule(
    schedule: &mut EmployeeSchedule,
    employee: &Employee,
    limits: &WorkLimits,
    official_working_days: u32,
) {
    let target_hours = Decimal::from(official_working_days) * employee.contract_hours.as_decimal();
    let tolerance = Decimal::from(MONTHLY_OVERAGE_TOLERANCE_HOURS);

    if schedule.total_hours > target_hours + tolerance {
        schedule.compliance_issues.push(format!(
            "Monthly hours {} exceed the target of {} by more than {} hours",
            schedule.total_hours.normalize(),
            target_hours.normalize(),
            tolerance.normalize()
        ));
    }

    let ceiling = weekly_ceiling(employee.is_minor);
    for bucket in 0..WEEK_BUCKETS {
        let hours = limits.week_hours(bucket);
        if hours > ceiling {
            schedule.compliance_issues.push(format!(
                "Week {} hours {} exceed the weekly ceiling of {}",
                bucket + 1,
                hours.normalize(),
                ceiling.normalize()
            ));
        }
    }

    schedule.is_compliant = schedule.compliance_issues.is_empty();
}
