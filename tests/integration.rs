//! Comprehensive integration tests for the roster generation engine.
//!
//! This test suite covers the end-to-end generation scenarios:
//! - Entry completeness across a full synthetic month
//! - Handoff coverage for two-employee minimum-one positions
//! - Extended-shift handoff with 2-on/2-off blocks
//! - Legal vetoes (weekly ceilings, minors on holidays)
//! - Coverage-gap reporting without correction
//! - Determinism of repeated runs
//! - Generation from the bundled YAML configuration

use std::collections::BTreeSet;

use chrono::NaiveTime;
use rust_decimal::Decimal;

use roster_engine::calendar::{MonthCalendar, StaticCalendar};
use roster_engine::config::{default_operating_days, ConfigLoader, FirmSettings};
use roster_engine::models::{ContractHours, Employee, Position, ScheduleEntry, Shift};
use roster_engine::scheduling::generate_schedule;

// =============================================================================
// Test Helpers
// =============================================================================

fn make_shift(id: &str, start: (u32, u32), end: (u32, u32), break_minutes: u32) -> Shift {
    Shift {
        id: id.to_string(),
        name: id.to_string(),
        abbreviation: id.chars().last().unwrap().to_uppercase().to_string(),
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        break_minutes,
    }
}

fn make_employee(id: &str, position: &str, hours: ContractHours, is_minor: bool) -> Employee {
    Employee {
        id: id.to_string(),
        name: format!("Employee {id}"),
        position_id: Some(position.to_string()),
        contract_hours: hours,
        is_minor,
        birth_date: None,
    }
}

fn single_position_settings(min_per_day: u32, shifts: Vec<Shift>) -> FirmSettings {
    FirmSettings {
        positions: vec![Position {
            id: "pos_001".to_string(),
            name: "Reception".to_string(),
            min_per_day,
        }],
        shifts,
        works_on_holidays: false,
        operating_days: default_operating_days(),
    }
}

fn calendar_for(
    year: i32,
    month: u32,
    working_days: u32,
    holidays: BTreeSet<u32>,
) -> StaticCalendar {
    let mut calendar = StaticCalendar::new();
    calendar.insert(
        year,
        month,
        MonthCalendar {
            working_days,
            working_hours: working_days * 8,
            holidays,
        },
    );
    calendar
}

fn all_week() -> BTreeSet<u32> {
    BTreeSet::from([1, 2, 3, 4, 5, 6, 7])
}

// =============================================================================
// Entry completeness
// =============================================================================

#[test]
fn test_every_employee_has_one_entry_per_day() {
    let settings = FirmSettings {
        positions: vec![
            Position {
                id: "pos_reception".to_string(),
                name: "Reception".to_string(),
                min_per_day: 2,
            },
            Position {
                id: "pos_kitchen".to_string(),
                name: "Kitchen".to_string(),
                min_per_day: 1,
            },
        ],
        shifts: vec![
            make_shift("shift_morning", (6, 0), (14, 30), 30),
            make_shift("shift_evening", (14, 0), (22, 30), 30),
        ],
        works_on_holidays: false,
        operating_days: default_operating_days(),
    };
    let employees = vec![
        make_employee("emp_001", "pos_reception", ContractHours::Eight, false),
        make_employee("emp_002", "pos_reception", ContractHours::Eight, false),
        make_employee("emp_003", "pos_reception", ContractHours::Six, false),
        make_employee("emp_004", "pos_kitchen", ContractHours::Eight, false),
        make_employee("emp_005", "pos_kitchen", ContractHours::Four, true),
    ];
    // January 2026: 31 days, holiday on the 1st.
    let calendar = calendar_for(2026, 1, 21, BTreeSet::from([1]));

    let schedule = generate_schedule(&settings, &employees, 1, 2026, &calendar).unwrap();

    assert_eq!(schedule.employee_schedules.len(), 5);
    for employee_schedule in &schedule.employee_schedules {
        assert_eq!(
            employee_schedule.entries.len(),
            31,
            "employee {} is missing entries",
            employee_schedule.employee_id
        );
        for day in 1..=31 {
            assert!(employee_schedule.entries.contains_key(&day));
        }
    }
}

#[test]
fn test_totals_match_entries() {
    let settings = single_position_settings(1, vec![make_shift("shift_day", (9, 0), (17, 30), 30)]);
    let employees = vec![
        make_employee("emp_001", "pos_001", ContractHours::Eight, false),
        make_employee("emp_002", "pos_001", ContractHours::Eight, false),
    ];
    let calendar = calendar_for(2026, 2, 17, BTreeSet::new());

    let schedule = generate_schedule(&settings, &employees, 2, 2026, &calendar).unwrap();

    for employee_schedule in &schedule.employee_schedules {
        let work_entries = employee_schedule.entries.values().filter(|e| e.is_work()).count();
        let rest_entries = employee_schedule.entries.values().filter(|e| e.is_rest()).count();
        assert_eq!(employee_schedule.total_work_days, work_entries as u32);
        assert_eq!(employee_schedule.total_rest_days, rest_entries as u32);

        let hours: Decimal = employee_schedule
            .entries
            .values()
            .map(|e| match e {
                ScheduleEntry::Work { worked_hours, .. } => *worked_hours,
                _ => Decimal::ZERO,
            })
            .sum();
        assert_eq!(employee_schedule.total_hours, hours);
    }
}

// =============================================================================
// Handoff coverage
// =============================================================================

#[test]
fn test_handoff_pair_never_rests_simultaneously() {
    let settings = FirmSettings {
        positions: vec![Position {
            id: "pos_001".to_string(),
            name: "Security".to_string(),
            min_per_day: 1,
        }],
        shifts: vec![make_shift("shift_day", (9, 0), (17, 0), 0)],
        works_on_holidays: false,
        operating_days: all_week(),
    };
    let employees = vec![
        make_employee("emp_001", "pos_001", ContractHours::Eight, false),
        make_employee("emp_002", "pos_001", ContractHours::Eight, false),
    ];
    // June 2026: 30 days, all workable, target 15 each.
    let calendar = calendar_for(2026, 6, 15, BTreeSet::new());

    let schedule = generate_schedule(&settings, &employees, 6, 2026, &calendar).unwrap();

    let first = schedule.employee_schedule("emp_001").unwrap();
    let second = schedule.employee_schedule("emp_002").unwrap();
    for day in 1..=30 {
        let both_resting = first.entries[&day].is_rest() && second.entries[&day].is_rest();
        assert!(!both_resting, "both employees rest on day {day}");
    }
    assert!(schedule.coverage_gaps.is_empty());
}

#[test]
fn test_extended_handoff_blocks_and_full_coverage() {
    let settings = FirmSettings {
        positions: vec![Position {
            id: "pos_001".to_string(),
            name: "Security".to_string(),
            min_per_day: 1,
        }],
        shifts: vec![make_shift("shift_long", (7, 0), (19, 0), 0)], // 12h, extended
        works_on_holidays: false,
        operating_days: all_week(),
    };
    let employees = vec![
        make_employee("emp_001", "pos_001", ContractHours::Twelve, false),
        make_employee("emp_002", "pos_001", ContractHours::Twelve, false),
    ];
    // 30 workable days, target 15 each.
    let calendar = calendar_for(2026, 6, 15, BTreeSet::new());

    let schedule = generate_schedule(&settings, &employees, 6, 2026, &calendar).unwrap();

    // Complementary coverage leaves no gap despite the extended-shift rules.
    assert!(schedule.coverage_gaps.is_empty());

    let first = schedule.employee_schedule("emp_001").unwrap();
    let second = schedule.employee_schedule("emp_002").unwrap();

    // 2-on/2-off: the first employee rests days 1-2 while the second works,
    // then they swap for days 3-4.
    assert!(first.entries[&1].is_rest() && first.entries[&2].is_rest());
    assert!(second.entries[&1].is_work() && second.entries[&2].is_work());
    assert!(first.entries[&3].is_work() && first.entries[&4].is_work());
    assert!(second.entries[&3].is_rest() && second.entries[&4].is_rest());

    assert_eq!(first.total_work_days, 15);
    assert_eq!(second.total_work_days, 15);

    // Both stay compliant: 12h x 15 = 180h against a 15 x 12 = 180h target.
    assert!(first.is_compliant, "issues: {:?}", first.compliance_issues);
    assert!(second.is_compliant, "issues: {:?}", second.compliance_issues);
}

// =============================================================================
// Legal limits
// =============================================================================

#[test]
fn test_weekly_overwork_is_flagged_never_silent() {
    // A 9.5h shift worked six days straight puts 57h into a week bucket;
    // the audit must flag every bucket that ended above the ceiling.
    let settings = FirmSettings {
        positions: vec![Position {
            id: "pos_001".to_string(),
            name: "Security".to_string(),
            min_per_day: 1,
        }],
        shifts: vec![make_shift("shift_long", (8, 0), (17, 30), 0)],
        works_on_holidays: false,
        operating_days: all_week(),
    };
    let employees = vec![make_employee(
        "emp_001",
        "pos_001",
        ContractHours::Eight,
        false,
    )];
    let calendar = calendar_for(2026, 7, 31, BTreeSet::new());

    let schedule = generate_schedule(&settings, &employees, 7, 2026, &calendar).unwrap();

    let employee_schedule = &schedule.employee_schedules[0];
    let ceiling = Decimal::from(56);

    // Recompute week buckets from the entries themselves.
    let mut weekly = [Decimal::ZERO; 5];
    for (day, entry) in &employee_schedule.entries {
        if let ScheduleEntry::Work { worked_hours, .. } = entry {
            weekly[((day - 1) / 7) as usize] += *worked_hours;
        }
    }

    for (bucket, hours) in weekly.iter().enumerate() {
        if *hours > ceiling {
            assert!(
                employee_schedule
                    .compliance_issues
                    .iter()
                    .any(|i| i.contains(&format!("Week {}", bucket + 1))),
                "week {} exceeded the ceiling silently",
                bucket + 1
            );
        }
    }
    assert!(!employee_schedule.is_compliant);
}

#[test]
fn test_minor_never_works_open_holidays() {
    let settings = FirmSettings {
        positions: vec![Position {
            id: "pos_001".to_string(),
            name: "Kitchen".to_string(),
            min_per_day: 1,
        }],
        shifts: vec![make_shift("shift_day", (9, 0), (13, 0), 0)],
        works_on_holidays: true,
        operating_days: all_week(),
    };
    let employees = vec![
        make_employee("emp_adult", "pos_001", ContractHours::Four, false),
        make_employee("emp_minor", "pos_001", ContractHours::Four, true),
    ];
    let holidays = BTreeSet::from([1, 6, 24]);
    let calendar = calendar_for(2026, 5, 19, holidays.clone());

    let schedule = generate_schedule(&settings, &employees, 5, 2026, &calendar).unwrap();

    let minor = schedule.employee_schedule("emp_minor").unwrap();
    for &day in &holidays {
        assert!(
            !minor.entries[&day].is_work(),
            "minor scheduled to work on holiday {day}"
        );
    }
}

// =============================================================================
// Coverage gaps
// =============================================================================

#[test]
fn test_rest_target_produces_reported_gaps() {
    let settings = single_position_settings(1, vec![make_shift("shift_day", (9, 0), (17, 0), 0)]);
    let employees = vec![make_employee(
        "emp_001",
        "pos_001",
        ContractHours::Eight,
        false,
    )];
    // July 2026 has 23 weekdays; a holiday on Monday the 6th leaves 22
    // workable days against a target of 15.
    let calendar = calendar_for(2026, 7, 15, BTreeSet::from([6]));

    let schedule = generate_schedule(&settings, &employees, 7, 2026, &calendar).unwrap();

    let employee_schedule = &schedule.employee_schedules[0];
    assert_eq!(employee_schedule.total_work_days, 15);

    // 7 planned rest days on workable days, each reported as a gap.
    let workable_rest_days: Vec<u32> = schedule
        .coverage_gaps
        .iter()
        .map(|gap| gap.day)
        .collect();
    assert_eq!(workable_rest_days.len(), 7);

    // No two planned rest days on adjacent calendar days.
    for pair in workable_rest_days.windows(2) {
        assert!(
            pair[1] - pair[0] >= 2,
            "adjacent planned rest days {pair:?}"
        );
    }

    for gap in &schedule.coverage_gaps {
        assert_eq!(gap.required, 1);
        assert_eq!(gap.actual, 0);
        assert!(employee_schedule.entries[&gap.day].is_rest());
    }
}

#[test]
fn test_full_staffing_has_no_gaps() {
    // Five employees on a minimum-two position across February 2026's 20
    // workable days, with a target of 20: nobody needs rest.
    let settings = single_position_settings(
        2,
        vec![make_shift("shift_day", (9, 0), (17, 0), 0)],
    );
    let employees: Vec<Employee> = (1..=5)
        .map(|i| make_employee(&format!("emp_{i:03}"), "pos_001", ContractHours::Eight, false))
        .collect();
    let calendar = calendar_for(2026, 2, 20, BTreeSet::new());

    let schedule = generate_schedule(&settings, &employees, 2, 2026, &calendar).unwrap();

    assert!(schedule.coverage_gaps.is_empty());
    for employee_schedule in &schedule.employee_schedules {
        assert_eq!(employee_schedule.total_work_days, 20);
    }
}

#[test]
fn test_all_hands_position_assigns_no_rest() {
    // Three employees, minimum three: the planner must assign zero rest
    // days and every workable day is worked.
    let settings = single_position_settings(
        3,
        vec![make_shift("shift_day", (9, 0), (17, 0), 0)],
    );
    let employees: Vec<Employee> = (1..=3)
        .map(|i| make_employee(&format!("emp_{i:03}"), "pos_001", ContractHours::Eight, false))
        .collect();
    let calendar = calendar_for(2026, 2, 20, BTreeSet::new());

    let schedule = generate_schedule(&settings, &employees, 2, 2026, &calendar).unwrap();

    assert!(schedule.coverage_gaps.is_empty());
    for employee_schedule in &schedule.employee_schedules {
        assert_eq!(employee_schedule.total_work_days, 20);
        // Rest entries only on the closed weekend days.
        assert_eq!(employee_schedule.total_rest_days, 8);
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_repeated_runs_are_identical_apart_from_timestamp() {
    let settings = FirmSettings {
        positions: vec![
            Position {
                id: "pos_reception".to_string(),
                name: "Reception".to_string(),
                min_per_day: 2,
            },
            Position {
                id: "pos_kitchen".to_string(),
                name: "Kitchen".to_string(),
                min_per_day: 1,
            },
        ],
        shifts: vec![
            make_shift("shift_morning", (6, 0), (14, 30), 30),
            make_shift("shift_evening", (14, 0), (22, 30), 30),
            make_shift("shift_night", (22, 0), (6, 30), 30),
        ],
        works_on_holidays: false,
        operating_days: BTreeSet::from([1, 2, 3, 4, 5, 6]),
    };
    let employees: Vec<Employee> = (1..=9)
        .map(|i| {
            make_employee(
                &format!("emp_{i:03}"),
                if i <= 6 { "pos_reception" } else { "pos_kitchen" },
                ContractHours::Eight,
                i == 9,
            )
        })
        .collect();
    let calendar = calendar_for(2026, 3, 21, BTreeSet::from([3]));

    let first = generate_schedule(&settings, &employees, 3, 2026, &calendar).unwrap();
    let second = generate_schedule(&settings, &employees, 3, 2026, &calendar).unwrap();

    assert_eq!(first.employee_schedules, second.employee_schedules);
    assert_eq!(first.coverage_gaps, second.coverage_gaps);
    assert_eq!(first.month, second.month);
    assert_eq!(first.year, second.year);
}

// =============================================================================
// Configuration-driven generation
// =============================================================================

#[test]
fn test_generate_from_bundled_configuration() {
    let loader = ConfigLoader::load("./config").expect("Failed to load config");
    let settings = loader.settings();

    let employees = vec![
        make_employee("emp_001", "pos_reception", ContractHours::Eight, false),
        make_employee("emp_002", "pos_reception", ContractHours::Eight, false),
        make_employee("emp_003", "pos_reception", ContractHours::Six, false),
        make_employee("emp_004", "pos_kitchen", ContractHours::Eight, false),
        make_employee("emp_005", "pos_kitchen", ContractHours::Eight, false),
        make_employee("emp_006", "pos_security", ContractHours::Twelve, false),
        make_employee("emp_007", "pos_security", ContractHours::Twelve, false),
    ];

    let schedule =
        generate_schedule(settings, &employees, 6, 2026, loader.calendar()).unwrap();

    assert_eq!(schedule.month, 6);
    assert_eq!(schedule.year, 2026);
    assert_eq!(schedule.employee_schedules.len(), 7);
    for employee_schedule in &schedule.employee_schedules {
        assert_eq!(employee_schedule.entries.len(), 30);
    }

    // The result serializes and round-trips.
    let json = serde_json::to_string(&schedule).unwrap();
    let deserialized: roster_engine::models::MonthSchedule =
        serde_json::from_str(&json).unwrap();
    assert_eq!(schedule, deserialized);
}
