#![forbid(unsafe_code)]
//! Roulement : planification de la rotation 18h/16h d'une équipe de 5 (sans BD).
//!
//! - Rotation round-robin équitable : 3 personnes en 18h, 2 en 16h.
//! - Congés filtrés après rotation, journées verrouillées reprises telles quelles.
//! - Contrôle d'équité sur cycles complets de 5 jours.
//! - Stockage fichier (JSON), exports CSV/ICS/JSON.

#[cfg(feature = "serde")]
pub mod io;
pub mod ics;
pub mod model;
pub mod planner;
pub mod scheduler;
#[cfg(feature = "serde")]
pub mod storage;
pub mod summary;

pub use ics::{export_ics, render_ics, IcsOptions};
pub use model::{Assignment, LeaveRange, LockedDays, Person, PersonId, ShiftSlot, TEAM_SIZE};
pub use planner::{PlanError, PlanState, Planner, PlannerParams};
pub use scheduler::{
    distribution_stats, generate, generate_with_leaves, validate_distribution, DistributionReport,
    DistributionStat, GenerateOptions, SchedError, ShiftCounts,
};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
pub use summary::{group_by_week, summarize_day, DayRenderer, TextSummary};
