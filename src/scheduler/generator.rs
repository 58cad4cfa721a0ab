use super::{rotation, util::PlannedDays, GenerateOptions, SchedError};
use crate::model::{Assignment, LockedDays, Person, TEAM_SIZE};

fn check_inputs(roster_len: usize, opts: &GenerateOptions) -> Result<(), SchedError> {
    if roster_len != TEAM_SIZE {
        return Err(SchedError::InvalidRosterSize(roster_len));
    }
    if opts.days < 1 {
        return Err(SchedError::InvalidDayCount(opts.days));
    }
    Ok(())
}

pub(super) fn generate<S: AsRef<str>>(
    names: &[S],
    opts: GenerateOptions,
    locked: &LockedDays,
) -> Result<Vec<Assignment>, SchedError> {
    check_inputs(names.len(), &opts)?;

    let mut out = Vec::with_capacity(opts.days as usize);
    for day in PlannedDays::new(opts.start, opts.days, opts.skip_weekends) {
        let (rotation_index, date) = day?;

        if let Some(stored) = locked.get(&date) {
            out.push(rotation::pinned(stored));
            continue;
        }

        let order = rotation::rotated(names, rotation_index);
        out.push(rotation::fill_slots(date, order, Vec::new()));
    }
    Ok(out)
}

pub(super) fn generate_with_leaves(
    people: &[Person],
    opts: GenerateOptions,
    locked: &LockedDays,
) -> Result<Vec<Assignment>, SchedError> {
    check_inputs(people.len(), &opts)?;

    let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
    let mut out = Vec::with_capacity(opts.days as usize);

    for day in PlannedDays::new(opts.start, opts.days, opts.skip_weekends) {
        let (rotation_index, date) = day?;

        if let Some(stored) = locked.get(&date) {
            #[cfg(feature = "logging")]
            tracing::debug!(%date, rotation_index, "locked day kept as is");
            out.push(rotation::pinned(stored));
            continue;
        }

        // l'ordre se calcule sur l'équipe complète, les congés filtrent ensuite
        let order = rotation::rotated(names.as_slice(), rotation_index);
        let absent: Vec<String> = people
            .iter()
            .filter(|p| p.is_on_leave(date))
            .map(|p| p.name.clone())
            .collect();
        let available: Vec<String> = order
            .into_iter()
            .filter(|name| !absent.contains(name))
            .collect();

        #[cfg(feature = "logging")]
        if !absent.is_empty() {
            tracing::debug!(%date, ?absent, available = available.len(), "absences applied");
        }

        out.push(rotation::fill_slots(date, available, absent));
    }
    Ok(out)
}
