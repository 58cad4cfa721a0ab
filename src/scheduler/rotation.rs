use crate::model::{missing_seats, Assignment, EARLY_SEATS, LATE_SEATS, TEAM_SIZE};
use chrono::NaiveDate;

/// Rotation à gauche de `rotation_index % 5` positions.
pub(super) fn rotated<S: AsRef<str>>(names: &[S], rotation_index: usize) -> Vec<String> {
    let shift = rotation_index % TEAM_SIZE;
    names[shift..]
        .iter()
        .chain(names[..shift].iter())
        .map(|n| n.as_ref().to_owned())
        .collect()
}

/// Remplit 18h puis 16h, dans l'ordre, à partir de la liste disponible.
pub(super) fn fill_slots(
    date: NaiveDate,
    available: Vec<String>,
    absent: Vec<String>,
) -> Assignment {
    let mut pool = available.into_iter();
    let early: Vec<String> = pool.by_ref().take(EARLY_SEATS).collect();
    let late: Vec<String> = pool.take(LATE_SEATS).collect();
    let missing = missing_seats(absent.len(), early.len(), late.len());

    Assignment {
        date,
        early,
        late,
        absent,
        missing,
        locked: false,
    }
}

/// Journée épinglée : reprise telle quelle, marquée verrouillée.
pub(super) fn pinned(stored: &Assignment) -> Assignment {
    Assignment {
        locked: true,
        ..stored.clone()
    }
}
