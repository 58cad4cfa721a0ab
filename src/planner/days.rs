use super::{PlanError, Planner};
use crate::model::{Assignment, EARLY_SEATS, LATE_SEATS, TEAM_SIZE};
use crate::scheduler;
use chrono::NaiveDate;
use std::collections::HashSet;

pub(super) fn generate(planner: &mut Planner) -> Result<&[Assignment], PlanError> {
    let state = &planner.state;
    let assignments =
        scheduler::generate_with_leaves(&state.team, state.params.into(), &state.locked_days)?;

    #[cfg(feature = "logging")]
    tracing::info!(
        days = assignments.len(),
        locked = state.locked_days.len(),
        "schedule generated"
    );

    planner.state.assignments = assignments;
    Ok(planner.state.assignments.as_slice())
}

pub(super) fn lock_day(planner: &mut Planner, date: NaiveDate) -> Result<(), PlanError> {
    let Some(current) = planner.state.assignments.iter_mut().find(|a| a.date == date) else {
        return Err(PlanError::UnknownDay(date));
    };
    current.locked = true;
    let pinned = current.clone();
    planner.state.locked_days.insert(date, pinned);
    Ok(())
}

pub(super) fn unlock_day(planner: &mut Planner, date: NaiveDate) -> Result<(), PlanError> {
    let removed = planner.state.locked_days.remove(&date);
    let current = planner.state.assignments.iter_mut().find(|a| a.date == date);
    if removed.is_none() && current.is_none() {
        return Err(PlanError::UnknownDay(date));
    }
    if let Some(current) = current {
        current.locked = false;
    }
    Ok(())
}

pub(super) fn edit_day(
    planner: &mut Planner,
    date: NaiveDate,
    early: Vec<String>,
    late: Vec<String>,
) -> Result<(), PlanError> {
    if early.len() != EARLY_SEATS || late.len() != LATE_SEATS {
        return Err(PlanError::EditInvalid("exactly 3 early and 2 late names are required"));
    }
    let unique: HashSet<&str> = early.iter().chain(late.iter()).map(String::as_str).collect();
    if unique.len() != TEAM_SIZE {
        return Err(PlanError::EditInvalid("a member can only hold one slot per day"));
    }
    if let Some(unknown) = unique
        .iter()
        .find(|name| planner.state.find_member_by_name(name).is_none())
    {
        return Err(PlanError::UnknownMember((*unknown).to_string()));
    }

    let Some(pos) = planner.state.assignments.iter().position(|a| a.date == date) else {
        return Err(PlanError::UnknownDay(date));
    };

    let edited = Assignment {
        date,
        early,
        late,
        absent: Vec::new(),
        missing: 0,
        locked: true,
    };
    planner.state.assignments[pos] = edited.clone();
    planner.state.locked_days.insert(date, edited);
    Ok(())
}
