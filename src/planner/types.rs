use crate::model::{Assignment, LockedDays, Person};
use crate::scheduler::{GenerateOptions, SchedError};
use chrono::{NaiveDate, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Paramètres de planification persistés avec l'état.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlannerParams {
    pub start_date: NaiveDate,
    pub number_of_days: u32,
    pub skip_weekends: bool,
}

impl Default for PlannerParams {
    fn default() -> Self {
        Self {
            start_date: Utc::now().date_naive(),
            number_of_days: 10,
            skip_weekends: true,
        }
    }
}

impl From<PlannerParams> for GenerateOptions {
    fn from(p: PlannerParams) -> Self {
        GenerateOptions::new(p.start_date, p.number_of_days).skip_weekends(p.skip_weekends)
    }
}

/// État complet d'une session de planification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanState {
    #[cfg_attr(feature = "serde", serde(default))]
    pub team: Vec<Person>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub assignments: Vec<Assignment>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub locked_days: LockedDays,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: PlannerParams,
}

impl PlanState {
    pub fn names(&self) -> Vec<&str> {
        self.team.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn find_member_by_name<'a>(&'a self, name: &str) -> Option<&'a Person> {
        self.team.iter().find(|p| p.name == name)
    }

    pub fn find_assignment<'a>(&'a self, date: NaiveDate) -> Option<&'a Assignment> {
        self.assignments.iter().find(|a| a.date == date)
    }
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("team is full (5 members max)")]
    TeamFull,
    #[error("member name cannot be empty")]
    EmptyName,
    #[error("duplicate member name: {0}")]
    DuplicateName(String),
    #[error("unknown member: {0}")]
    UnknownMember(String),
    #[error("invalid leave: start {0} is after end {1}")]
    InvalidLeave(NaiveDate, NaiveDate),
    #[error("unknown leave #{index} for member {member}")]
    UnknownLeave { member: String, index: usize },
    #[error("no planned day on {0}")]
    UnknownDay(NaiveDate),
    #[error("edit invalid: {0}")]
    EditInvalid(&'static str),
    #[error(transparent)]
    Sched(#[from] SchedError),
}
