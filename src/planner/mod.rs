mod days;
mod team;
mod types;

pub use types::{PlanError, PlanState, PlannerParams};

use crate::model::{Assignment, LeaveRange, PersonId};
use crate::scheduler::{self, DistributionReport, DistributionStat};
use chrono::NaiveDate;

/// Planner : encapsule l'état d'une session (équipe, planning, verrous).
#[derive(Debug, Default)]
pub struct Planner {
    state: PlanState,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            state: PlanState::default(),
        }
    }

    pub fn from_state(state: PlanState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &PlanState {
        &self.state
    }
    pub fn state_mut(&mut self) -> &mut PlanState {
        &mut self.state
    }
    pub fn into_state(self) -> PlanState {
        self.state
    }

    pub fn add_member(&mut self, name: &str) -> Result<PersonId, PlanError> {
        team::add_member(self, name)
    }

    pub fn remove_member(&mut self, id: &PersonId) -> Result<(), PlanError> {
        team::remove_member(self, id)
    }

    pub fn rename_member(&mut self, id: &PersonId, name: &str) -> Result<(), PlanError> {
        team::rename_member(self, id, name)
    }

    /// Déplace un membre ; l'ordre de l'équipe est l'ordre de rotation.
    pub fn reorder_member(&mut self, from: usize, to: usize) -> Result<(), PlanError> {
        team::reorder_member(self, from, to)
    }

    pub fn add_leave(&mut self, id: &PersonId, leave: LeaveRange) -> Result<(), PlanError> {
        team::add_leave(self, id, leave)
    }

    pub fn remove_leave(&mut self, id: &PersonId, index: usize) -> Result<LeaveRange, PlanError> {
        team::remove_leave(self, id, index)
    }

    pub fn set_params(&mut self, params: PlannerParams) {
        self.state.params = params;
    }

    /// (Re)génère le planning en respectant congés et journées verrouillées.
    pub fn generate(&mut self) -> Result<&[Assignment], PlanError> {
        days::generate(self)
    }

    pub fn lock_day(&mut self, date: NaiveDate) -> Result<(), PlanError> {
        days::lock_day(self, date)
    }

    pub fn unlock_day(&mut self, date: NaiveDate) -> Result<(), PlanError> {
        days::unlock_day(self, date)
    }

    /// Modification manuelle d'une journée ; la journée est ensuite verrouillée.
    pub fn edit_day(
        &mut self,
        date: NaiveDate,
        early: Vec<String>,
        late: Vec<String>,
    ) -> Result<(), PlanError> {
        days::edit_day(self, date, early, late)
    }

    pub fn distribution(&self) -> DistributionReport {
        scheduler::validate_distribution(&self.state.assignments, self.state.names().as_slice())
    }

    pub fn distribution_stats(&self) -> Vec<DistributionStat> {
        scheduler::distribution_stats(&self.state.assignments, self.state.names().as_slice())
    }
}
