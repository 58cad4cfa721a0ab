use crate::model::{Assignment, LeaveRange, LockedDays, Person, EARLY_SEATS, LATE_SEATS};
use crate::planner::{PlanState, PlannerParams};
use crate::scheduler::DistributionStat;
use anyhow::{bail, Context};
use chrono::{DateTime, NaiveDate, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Version du format de sauvegarde JSON.
pub const BACKUP_VERSION: &str = "1.0";

/// Sauvegarde complète exportable/importable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backup {
    pub version: String,
    pub export_date: DateTime<Utc>,
    pub team: Vec<Person>,
    pub assignments: Vec<Assignment>,
    pub params: PlannerParams,
}

/// Import de l'équipe depuis CSV: header `name[,leaves]`
///
/// `leaves` : `2024-01-03/2024-01-05;2024-02-10` (une date seule = un jour).
pub fn import_team_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Person>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out: Vec<Person> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid team row (empty name)");
        }
        if out.iter().any(|p| p.has_name(name)) {
            bail!("duplicate member name: {name}");
        }
        let mut person = Person::new(name);
        if let Some(raw) = rec.get(1) {
            let raw = raw.trim();
            if !raw.is_empty() {
                person.leaves = parse_leaves(raw)
                    .with_context(|| format!("invalid leaves value for {name}"))?;
            }
        }
        out.push(person);
    }
    Ok(out)
}

pub fn parse_leaves(raw: &str) -> anyhow::Result<Vec<LeaveRange>> {
    raw.split(';')
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| parse_leave(chunk.trim()))
        .collect()
}

/// `start/end`, `start..end` ou une date seule.
pub fn parse_leave(chunk: &str) -> anyhow::Result<LeaveRange> {
    if let Some((start_raw, end_raw)) = chunk.split_once('/').or_else(|| chunk.split_once("..")) {
        let start = parse_date(start_raw.trim())?;
        let end = parse_date(end_raw.trim())?;
        LeaveRange::new(start, end).map_err(anyhow::Error::msg)
    } else {
        Ok(LeaveRange::single(parse_date(chunk)?))
    }
}

pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("invalid date: {raw}"))
}

/// Export CSV du planning: header `date,early_1..3,late_1..2,absent`
pub fn write_assignments_csv<W: Write>(writer: W, assignments: &[Assignment]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(writer);
    w.write_record([
        "date", "early_1", "early_2", "early_3", "late_1", "late_2", "absent",
    ])?;
    for a in assignments {
        let date = a.date.format("%d/%m/%Y").to_string();
        let absent = a.absent.join(";");
        let mut row: Vec<&str> = Vec::with_capacity(2 + EARLY_SEATS + LATE_SEATS);
        row.push(&date);
        row.extend(padded(&a.early, EARLY_SEATS));
        row.extend(padded(&a.late, LATE_SEATS));
        row.push(&absent);
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}

fn padded(names: &[String], seats: usize) -> impl Iterator<Item = &str> {
    names
        .iter()
        .map(String::as_str)
        .chain(std::iter::repeat(""))
        .take(seats)
}

pub fn export_assignments_csv<P: AsRef<Path>>(path: P, assignments: &[Assignment]) -> anyhow::Result<()> {
    let file = fs::File::create(path.as_ref())
        .with_context(|| format!("creating {}", path.as_ref().display()))?;
    write_assignments_csv(file, assignments)
}

/// Export CSV de la répartition: header `name,early,late,total`
pub fn write_distribution_csv<W: Write>(writer: W, stats: &[DistributionStat]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(writer);
    w.write_record(["name", "early", "late", "total"])?;
    let (mut early, mut late, mut total) = (itoa::Buffer::new(), itoa::Buffer::new(), itoa::Buffer::new());
    for s in stats {
        w.write_record([
            s.name.as_str(),
            early.format(s.early),
            late.format(s.late),
            total.format(s.total),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn export_distribution_csv<P: AsRef<Path>>(path: P, stats: &[DistributionStat]) -> anyhow::Result<()> {
    let file = fs::File::create(path.as_ref())
        .with_context(|| format!("creating {}", path.as_ref().display()))?;
    write_distribution_csv(file, stats)
}

/// Export JSON du planning seul (jolie mise en forme)
pub fn export_assignments_json<P: AsRef<Path>>(path: P, assignments: &[Assignment]) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(assignments)?;
    fs::write(path, s)?;
    Ok(())
}

pub fn backup_from_state(state: &PlanState, now: DateTime<Utc>) -> Backup {
    Backup {
        version: BACKUP_VERSION.to_string(),
        export_date: now,
        team: state.team.clone(),
        assignments: state.assignments.clone(),
        params: state.params,
    }
}

/// Reconstruit l'état ; les verrous sont déduits des journées `locked`.
pub fn state_from_backup(backup: Backup) -> anyhow::Result<PlanState> {
    if backup.version != BACKUP_VERSION {
        bail!("unsupported backup version: {}", backup.version);
    }
    let locked_days: LockedDays = backup
        .assignments
        .iter()
        .filter(|a| a.locked)
        .map(|a| (a.date, a.clone()))
        .collect();
    Ok(PlanState {
        team: backup.team,
        assignments: backup.assignments,
        locked_days,
        params: backup.params,
    })
}

pub fn export_backup_json<P: AsRef<Path>>(
    path: P,
    state: &PlanState,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(&backup_from_state(state, now))?;
    fs::write(path.as_ref(), s)
        .with_context(|| format!("writing backup {}", path.as_ref().display()))?;
    Ok(())
}

pub fn import_backup_json<P: AsRef<Path>>(path: P) -> anyhow::Result<PlanState> {
    let data = fs::read(path.as_ref())
        .with_context(|| format!("reading backup {}", path.as_ref().display()))?;
    let backup: Backup = serde_json::from_slice(&data)
        .with_context(|| format!("parsing backup {}", path.as_ref().display()))?;
    state_from_backup(backup)
}
