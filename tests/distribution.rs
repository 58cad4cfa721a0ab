#![forbid(unsafe_code)]
use chrono::NaiveDate;
use roulement::{
    distribution_stats, generate, validate_distribution, Assignment, GenerateOptions, LockedDays,
    ShiftCounts,
};

const NAMES: [&str; 5] = ["Alice", "Bob", "Charlie", "David", "Eve"];

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn plan(days: u32, locked: &LockedDays) -> Vec<Assignment> {
    generate(&NAMES, GenerateOptions::new(day(2024, 1, 1), days), locked).unwrap()
}

#[test]
fn two_full_cycles_are_valid() {
    let report = validate_distribution(&plan(10, &LockedDays::new()), &NAMES);
    assert!(report.is_valid);
    for name in NAMES {
        assert_eq!(report.distribution[name], ShiftCounts { early: 6, late: 4 });
    }
}

#[test]
fn partial_cycle_is_not_judged() {
    let out = plan(7, &LockedDays::new());
    let report = validate_distribution(&out, &NAMES);
    assert!(report.is_valid);
    let early: u32 = report.distribution.values().map(|c| c.early).sum();
    let late: u32 = report.distribution.values().map(|c| c.late).sum();
    assert_eq!((early, late), (21, 14));
}

#[test]
fn fewer_than_five_days_is_valid() {
    let report = validate_distribution(&plan(4, &LockedDays::new()), &NAMES);
    assert!(report.is_valid);
    assert_eq!(report.distribution["Alice"], ShiftCounts { early: 2, late: 2 });
}

#[test]
fn empty_schedule_is_valid() {
    let report = validate_distribution(&[], &NAMES);
    assert!(report.is_valid);
    assert!(report.distribution.values().all(|c| c.total() == 0));
}

#[test]
fn locked_override_breaks_full_cycle() {
    let mut locked = LockedDays::new();
    locked.insert(
        day(2024, 1, 2),
        Assignment {
            date: day(2024, 1, 2),
            early: vec!["Alice".into(), "Bob".into(), "Charlie".into()],
            late: vec!["David".into(), "Eve".into()],
            absent: Vec::new(),
            missing: 0,
            locked: true,
        },
    );
    let report = validate_distribution(&plan(5, &locked), &NAMES);
    assert!(!report.is_valid);
    assert_eq!(report.distribution["Alice"], ShiftCounts { early: 4, late: 1 });
}

#[test]
fn unknown_names_are_ignored() {
    let mut out = plan(5, &LockedDays::new());
    out[0].early[0] = "Zed".to_string();
    let report = validate_distribution(&out, &NAMES);
    assert!(!report.distribution.contains_key("Zed"));
    assert!(!report.is_valid);
    assert_eq!(report.distribution["Alice"], ShiftCounts { early: 2, late: 2 });
}

#[test]
fn stats_follow_team_order() {
    let stats = distribution_stats(&plan(5, &LockedDays::new()), &NAMES);
    let order: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(order, NAMES);
    assert!(stats.iter().all(|s| s.early == 3 && s.late == 2 && s.total == 5));
}
