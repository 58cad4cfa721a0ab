use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Taille fixe de l'équipe : 3 places "18h" + 2 places "16h".
pub const TEAM_SIZE: usize = 5;
/// Nombre de places du créneau long (fin 18h).
pub const EARLY_SEATS: usize = 3;
/// Nombre de places du créneau court (fin 16h).
pub const LATE_SEATS: usize = 2;

/// Identifiant fort pour Person
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PersonId(String);

impl PersonId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Membre de l'équipe. Le nom sert de clé d'affectation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub leaves: Vec<LeaveRange>,
}

impl Person {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            id: PersonId::random(),
            name: name.into(),
            leaves: Vec::new(),
        }
    }

    pub fn with_leaves(mut self, leaves: Vec<LeaveRange>) -> Self {
        self.leaves = leaves;
        self
    }

    /// Vrai si l'une des périodes de congé couvre `date`.
    pub fn is_on_leave(&self, date: NaiveDate) -> bool {
        self.leaves.iter().any(|leave| leave.contains(date))
    }

    /// Comparaison de noms insensible à la casse (Unicode).
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Initiales (deux au maximum) : "Jean Pierre Martin" → "JP".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// Période de congé, bornes incluses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeaveRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl LeaveRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, String> {
        if start > end {
            return Err("leave start must not be after end".to_string());
        }
        Ok(Self { start, end })
    }

    /// Congé d'une seule journée.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Une plage inversée (`start > end`) ne contient aucune date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Les deux créneaux d'une journée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftSlot {
    /// Créneau long, 3 places.
    Early,
    /// Créneau court, 2 places.
    Late,
}

impl ShiftSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftSlot::Early => "early",
            ShiftSlot::Late => "late",
        }
    }
}

/// Affectation d'une journée planifiée.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    pub date: NaiveDate,
    pub early: Vec<String>,
    pub late: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub absent: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub missing: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub locked: bool,
}

impl Assignment {
    /// Noms affectés à `slot`, dans l'ordre de rotation.
    pub fn slot(&self, slot: ShiftSlot) -> &[String] {
        match slot {
            ShiftSlot::Early => &self.early,
            ShiftSlot::Late => &self.late,
        }
    }

    pub fn is_assigned(&self, name: &str) -> bool {
        self.early.iter().chain(self.late.iter()).any(|n| n == name)
    }

    /// Vrai si `name` apparaît dans un créneau ou parmi les absents.
    pub fn mentions(&self, name: &str) -> bool {
        self.is_assigned(name) || self.absent.iter().any(|n| n == name)
    }

    /// Remplace `from` par `to` partout dans la journée.
    pub fn rename(&mut self, from: &str, to: &str) {
        for n in self
            .early
            .iter_mut()
            .chain(self.late.iter_mut())
            .chain(self.absent.iter_mut())
        {
            if n == from {
                *n = to.to_string();
            }
        }
    }
}

/// Journées épinglées par l'appelant, indexées par date.
pub type LockedDays = BTreeMap<NaiveDate, Assignment>;

/// Écart entre le nombre de places et l'effectif présent + affecté.
pub fn missing_seats(absent: usize, early: usize, late: usize) -> usize {
    TEAM_SIZE.saturating_sub(absent + early + late)
}
