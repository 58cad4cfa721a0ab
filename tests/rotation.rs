#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate, Weekday};
use roulement::{generate, Assignment, GenerateOptions, LockedDays, SchedError};

const NAMES: [&str; 5] = ["Alice", "Bob", "Charlie", "David", "Eve"];

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn rejects_wrong_roster_size() {
    let opts = GenerateOptions::new(day(2024, 1, 1), 5);
    let err = generate(&["Alice", "Bob"], opts, &LockedDays::new()).unwrap_err();
    assert_eq!(err, SchedError::InvalidRosterSize(2));

    let six = ["Alice", "Bob", "Charlie", "David", "Eve", "Frank"];
    let err = generate(&six, opts, &LockedDays::new()).unwrap_err();
    assert_eq!(err, SchedError::InvalidRosterSize(6));
}

#[test]
fn rejects_zero_days() {
    let opts = GenerateOptions::new(day(2024, 1, 1), 0);
    let err = generate(&NAMES, opts, &LockedDays::new()).unwrap_err();
    assert_eq!(err, SchedError::InvalidDayCount(0));
}

#[test]
fn rotates_left_one_step_per_day() {
    let opts = GenerateOptions::new(day(2024, 1, 1), 5);
    let out = generate(&NAMES, opts, &LockedDays::new()).unwrap();
    assert_eq!(out.len(), 5);

    assert_eq!(out[0].early, names(&["Alice", "Bob", "Charlie"]));
    assert_eq!(out[0].late, names(&["David", "Eve"]));
    assert_eq!(out[1].early, names(&["Bob", "Charlie", "David"]));
    assert_eq!(out[1].late, names(&["Eve", "Alice"]));
    assert_eq!(out[2].early, names(&["Charlie", "David", "Eve"]));
    assert_eq!(out[2].late, names(&["Alice", "Bob"]));
    assert_eq!(out[3].early, names(&["David", "Eve", "Alice"]));
    assert_eq!(out[3].late, names(&["Bob", "Charlie"]));
    assert_eq!(out[4].early, names(&["Eve", "Alice", "Bob"]));
    assert_eq!(out[4].late, names(&["Charlie", "David"]));

    for (i, a) in out.iter().enumerate() {
        assert_eq!(a.date, day(2024, 1, 1 + i as u32));
        assert!(a.absent.is_empty());
        assert_eq!(a.missing, 0);
        assert!(!a.locked);
    }
}

#[test]
fn every_name_once_per_day() {
    let opts = GenerateOptions::new(day(2024, 1, 1), 12);
    for a in generate(&NAMES, opts, &LockedDays::new()).unwrap() {
        let mut all: Vec<&String> = a.early.iter().chain(a.late.iter()).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 5);
        assert!(a.early.iter().all(|n| !a.late.contains(n)));
    }
}

#[test]
fn offset_follows_planned_day_index() {
    let opts = GenerateOptions::new(day(2024, 1, 1), 23).skip_weekends(true);
    let out = generate(&NAMES, opts, &LockedDays::new()).unwrap();
    for (r, a) in out.iter().enumerate() {
        let shift = r % 5;
        let rotated: Vec<String> = NAMES[shift..]
            .iter()
            .chain(NAMES[..shift].iter())
            .map(|s| s.to_string())
            .collect();
        assert_eq!(a.early, rotated[0..3]);
        assert_eq!(a.late, rotated[3..5]);
    }
}

#[test]
fn full_cycles_are_fair() {
    let opts = GenerateOptions::new(day(2024, 3, 4), 15);
    let out = generate(&NAMES, opts, &LockedDays::new()).unwrap();
    for name in NAMES {
        let early = out.iter().filter(|a| a.early.iter().any(|n| n == name)).count();
        let late = out.iter().filter(|a| a.late.iter().any(|n| n == name)).count();
        assert_eq!((early, late), (9, 6), "{name}");
    }
}

#[test]
fn skips_weekends_without_advancing_rotation() {
    // vendredi
    let opts = GenerateOptions::new(day(2024, 1, 5), 3).skip_weekends(true);
    let out = generate(&NAMES, opts, &LockedDays::new()).unwrap();

    let dates: Vec<NaiveDate> = out.iter().map(|a| a.date).collect();
    assert_eq!(dates, vec![day(2024, 1, 5), day(2024, 1, 8), day(2024, 1, 9)]);
    assert_eq!(out[1].early, names(&["Bob", "Charlie", "David"]));
    assert_eq!(out[2].early, names(&["Charlie", "David", "Eve"]));
}

#[test]
fn weekend_start_emits_requested_count() {
    // samedi
    let opts = GenerateOptions::new(day(2024, 1, 6), 7).skip_weekends(true);
    let out = generate(&NAMES, opts, &LockedDays::new()).unwrap();
    assert_eq!(out.len(), 7);
    assert_eq!(out[0].date, day(2024, 1, 8));
    assert!(out
        .iter()
        .all(|a| !matches!(a.date.weekday(), Weekday::Sat | Weekday::Sun)));
}

#[test]
fn weekends_are_planned_when_not_skipped() {
    let opts = GenerateOptions::new(day(2024, 1, 5), 3);
    let out = generate(&NAMES, opts, &LockedDays::new()).unwrap();
    assert_eq!(out[1].date, day(2024, 1, 6));
    assert_eq!(out[2].date, day(2024, 1, 7));
}

#[test]
fn locked_day_is_kept_and_still_consumes_a_rotation_step() {
    let pinned = Assignment {
        date: day(2024, 1, 2),
        early: names(&["Eve", "David", "Charlie"]),
        late: names(&["Bob", "Alice"]),
        absent: Vec::new(),
        missing: 0,
        locked: false,
    };
    let mut locked = LockedDays::new();
    locked.insert(pinned.date, pinned.clone());

    let opts = GenerateOptions::new(day(2024, 1, 1), 4);
    let out = generate(&NAMES, opts, &locked).unwrap();

    assert_eq!(out[1], Assignment { locked: true, ..pinned });
    // jour suivant : décalage 2, comme si le 2 janvier avait été calculé
    assert_eq!(out[2].early, names(&["Charlie", "David", "Eve"]));
    assert_eq!(out[2].late, names(&["Alice", "Bob"]));
    assert!(!out[2].locked);
}

#[test]
fn same_inputs_same_output() {
    let opts = GenerateOptions::new(day(2024, 2, 26), 9).skip_weekends(true);
    let a = generate(&NAMES, opts, &LockedDays::new()).unwrap();
    let b = generate(&NAMES, opts, &LockedDays::new()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn calendar_end_is_an_error() {
    let opts = GenerateOptions::new(NaiveDate::MAX, 2).skip_weekends(false);
    let err = generate(&NAMES, opts, &LockedDays::new()).unwrap_err();
    assert_eq!(err, SchedError::DateOverflow);

    // un seul jour : pas besoin de lendemain
    let out = generate(
        &NAMES,
        GenerateOptions::new(NaiveDate::MAX, 1).skip_weekends(false),
        &LockedDays::new(),
    )
    .unwrap();
    assert_eq!(out[0].date, NaiveDate::MAX);
}
