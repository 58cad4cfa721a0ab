use super::{PlanError, Planner};
use crate::model::{LeaveRange, Person, PersonId, TEAM_SIZE};

fn member_index(planner: &Planner, id: &PersonId) -> Result<usize, PlanError> {
    planner
        .state
        .team
        .iter()
        .position(|p| &p.id == id)
        .ok_or_else(|| PlanError::UnknownMember(id.as_str().to_string()))
}

/// Nom nettoyé, non vide et unique (casse ignorée) hors `except`.
fn checked_name(planner: &Planner, name: &str, except: Option<&PersonId>) -> Result<String, PlanError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PlanError::EmptyName);
    }
    let taken = planner
        .state
        .team
        .iter()
        .filter(|p| Some(&p.id) != except)
        .any(|p| p.has_name(name));
    if taken {
        return Err(PlanError::DuplicateName(name.to_string()));
    }
    Ok(name.to_string())
}

pub(super) fn add_member(planner: &mut Planner, name: &str) -> Result<PersonId, PlanError> {
    if planner.state.team.len() >= TEAM_SIZE {
        return Err(PlanError::TeamFull);
    }
    let name = checked_name(planner, name, None)?;
    let person = Person::new(name);
    let id = person.id.clone();
    planner.state.team.push(person);
    Ok(id)
}

/// Retire le membre ; les journées verrouillées qui le citent sont déverrouillées.
pub(super) fn remove_member(planner: &mut Planner, id: &PersonId) -> Result<(), PlanError> {
    let pos = member_index(planner, id)?;
    let removed = planner.state.team.remove(pos);
    let state = &mut planner.state;
    state.locked_days.retain(|_, day| !day.mentions(&removed.name));
    for day in state.assignments.iter_mut().filter(|a| a.mentions(&removed.name)) {
        day.locked = false;
    }

    #[cfg(feature = "logging")]
    tracing::debug!(member = %removed.name, locked = state.locked_days.len(), "member removed");

    Ok(())
}

/// Renomme le membre, y compris dans le planning et les journées verrouillées.
pub(super) fn rename_member(planner: &mut Planner, id: &PersonId, name: &str) -> Result<(), PlanError> {
    let pos = member_index(planner, id)?;
    let name = checked_name(planner, name, Some(id))?;
    let old = std::mem::replace(&mut planner.state.team[pos].name, name.clone());
    for day in planner
        .state
        .assignments
        .iter_mut()
        .chain(planner.state.locked_days.values_mut())
    {
        day.rename(&old, &name);
    }
    Ok(())
}

pub(super) fn reorder_member(planner: &mut Planner, from: usize, to: usize) -> Result<(), PlanError> {
    let len = planner.state.team.len();
    if from >= len {
        return Err(PlanError::UnknownMember(format!("#{from}")));
    }
    let person = planner.state.team.remove(from);
    planner.state.team.insert(to.min(len - 1), person);
    Ok(())
}

pub(super) fn add_leave(planner: &mut Planner, id: &PersonId, leave: LeaveRange) -> Result<(), PlanError> {
    if leave.start > leave.end {
        return Err(PlanError::InvalidLeave(leave.start, leave.end));
    }
    let pos = member_index(planner, id)?;
    planner.state.team[pos].leaves.push(leave);
    Ok(())
}

pub(super) fn remove_leave(
    planner: &mut Planner,
    id: &PersonId,
    index: usize,
) -> Result<LeaveRange, PlanError> {
    let pos = member_index(planner, id)?;
    let person = &mut planner.state.team[pos];
    if index >= person.leaves.len() {
        return Err(PlanError::UnknownLeave {
            member: person.name.clone(),
            index,
        });
    }
    Ok(person.leaves.remove(index))
}
