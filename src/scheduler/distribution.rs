use super::{DistributionReport, DistributionStat, ShiftCounts};
use crate::model::{Assignment, EARLY_SEATS, LATE_SEATS, TEAM_SIZE};
use std::collections::BTreeMap;

pub(super) fn validate<S: AsRef<str>>(assignments: &[Assignment], names: &[S]) -> DistributionReport {
    let mut distribution: BTreeMap<String, ShiftCounts> = names
        .iter()
        .map(|n| (n.as_ref().to_owned(), ShiftCounts::default()))
        .collect();

    for a in assignments {
        // les noms hors équipe sont ignorés
        for name in &a.early {
            if let Some(counts) = distribution.get_mut(name) {
                counts.early += 1;
            }
        }
        for name in &a.late {
            if let Some(counts) = distribution.get_mut(name) {
                counts.late += 1;
            }
        }
    }

    let cycles = assignments.len() / TEAM_SIZE;
    let full_cycles = cycles > 0 && assignments.len() % TEAM_SIZE == 0;
    let is_valid = !full_cycles || {
        let expected = ShiftCounts {
            early: (cycles * EARLY_SEATS) as u32,
            late: (cycles * LATE_SEATS) as u32,
        };
        distribution.values().all(|counts| *counts == expected)
    };

    DistributionReport {
        is_valid,
        distribution,
    }
}

pub(super) fn stats<S: AsRef<str>>(assignments: &[Assignment], names: &[S]) -> Vec<DistributionStat> {
    let report = validate(assignments, names);
    names
        .iter()
        .map(|n| {
            let counts = report
                .distribution
                .get(n.as_ref())
                .copied()
                .unwrap_or_default();
            DistributionStat {
                name: n.as_ref().to_owned(),
                early: counts.early,
                late: counts.late,
                total: counts.total(),
            }
        })
        .collect()
}
