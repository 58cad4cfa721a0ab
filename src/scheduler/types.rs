use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Options de génération
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub start: NaiveDate,
    pub days: u32,
    pub skip_weekends: bool,
}

impl GenerateOptions {
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self {
            start,
            days,
            skip_weekends: false,
        }
    }

    pub fn skip_weekends(mut self, skip: bool) -> Self {
        self.skip_weekends = skip;
        self
    }
}

/// Compteurs d'affectations d'une personne.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftCounts {
    pub early: u32,
    pub late: u32,
}

impl ShiftCounts {
    pub fn total(&self) -> u32 {
        self.early + self.late
    }
}

/// Résultat du contrôle d'équité.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionReport {
    pub is_valid: bool,
    pub distribution: BTreeMap<String, ShiftCounts>,
}

/// Ligne de statistiques, dans l'ordre de l'équipe.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistributionStat {
    pub name: String,
    pub early: u32,
    pub late: u32,
    pub total: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    #[error("invalid roster size: expected exactly 5 people, got {0}")]
    InvalidRosterSize(usize),
    #[error("invalid day count: {0} (must be at least 1)")]
    InvalidDayCount(u32),
    #[error("date overflow while iterating planned days")]
    DateOverflow,
}
