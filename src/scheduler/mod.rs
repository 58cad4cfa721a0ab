//! Rotation équitable 3 × 18h / 2 × 16h sur une équipe de 5.
//!
//! Chaque jour planifié (hors week-ends sautés) fait avancer l'index de
//! rotation d'un cran, y compris les journées verrouillées : le verrou fige
//! la sortie, pas la phase de rotation.

mod distribution;
mod generator;
mod rotation;
mod types;
mod util;

pub use types::{DistributionReport, DistributionStat, GenerateOptions, SchedError, ShiftCounts};

use crate::model::{Assignment, LockedDays, Person};

/// Rotation de base, sans congés.
///
/// Jour `r` : l'équipe décalée à gauche de `r % 5`, les trois premiers
/// en 18h, les deux suivants en 16h.
pub fn generate<S: AsRef<str>>(
    names: &[S],
    opts: GenerateOptions,
    locked: &LockedDays,
) -> Result<Vec<Assignment>, SchedError> {
    generator::generate(names, opts, locked)
}

/// Rotation avec congés : même ordre que [`generate`], les absents sont
/// retirés après rotation et les places remplies dans l'ordre restant.
pub fn generate_with_leaves(
    people: &[Person],
    opts: GenerateOptions,
    locked: &LockedDays,
) -> Result<Vec<Assignment>, SchedError> {
    generator::generate_with_leaves(people, opts, locked)
}

/// Contrôle d'équité sur cycles complets de 5 jours.
pub fn validate_distribution<S: AsRef<str>>(
    assignments: &[Assignment],
    names: &[S],
) -> DistributionReport {
    distribution::validate(assignments, names)
}

pub fn distribution_stats<S: AsRef<str>>(
    assignments: &[Assignment],
    names: &[S],
) -> Vec<DistributionStat> {
    distribution::stats(assignments, names)
}
