//! Export iCalendar (RFC 5545) : un événement par personne, par créneau et par jour.

use crate::model::{Assignment, ShiftSlot};
use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fs;
use std::path::Path;

const PRODID: &str = "-//roulement//planning//FR";
const MAX_LINE_OCTETS: usize = 75;

/// Réglages du rendu ICS. Les heures sont locales à `timezone` et
/// converties en UTC à l'écriture.
#[derive(Debug, Clone)]
pub struct IcsOptions {
    pub timezone: Tz,
    pub day_start: NaiveTime,
    pub early_end: NaiveTime,
    pub late_end: NaiveTime,
    pub early_label: String,
    pub late_label: String,
    pub location: String,
    pub description: String,
    pub generated_at: DateTime<Utc>,
}

impl Default for IcsOptions {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Europe::Paris,
            day_start: hour(9),
            early_end: hour(18),
            late_end: hour(16),
            early_label: "Service 18h".to_string(),
            late_label: "Sortie 16h".to_string(),
            location: "Bureau".to_string(),
            description: "Planning généré automatiquement".to_string(),
            generated_at: Utc::now(),
        }
    }
}

fn hour(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).expect("constant hour below 24")
}

impl IcsOptions {
    fn end_of(&self, slot: ShiftSlot) -> NaiveTime {
        match slot {
            ShiftSlot::Early => self.early_end,
            ShiftSlot::Late => self.late_end,
        }
    }

    fn label_of(&self, slot: ShiftSlot) -> &str {
        match slot {
            ShiftSlot::Early => &self.early_label,
            ShiftSlot::Late => &self.late_label,
        }
    }
}

/// Rendu du calendrier complet, lignes terminées par CRLF.
///
/// Échoue si une heure locale n'existe pas dans le fuseau (passage à l'heure d'été).
pub fn render_ics(assignments: &[Assignment], opts: &IcsOptions) -> anyhow::Result<String> {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".into(),
        "VERSION:2.0".into(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".into(),
    ];
    let stamp = utc_stamp(opts.generated_at);

    for a in assignments {
        for slot in [ShiftSlot::Early, ShiftSlot::Late] {
            for name in a.slot(slot) {
                lines.extend(event_lines(a.date, name, slot, &stamp, opts)?);
            }
        }
    }
    lines.push("END:VCALENDAR".into());

    let mut out = String::new();
    for line in &lines {
        out.push_str(&fold(line));
        out.push_str("\r\n");
    }
    Ok(out)
}

pub fn export_ics<P: AsRef<Path>>(path: P, assignments: &[Assignment], opts: &IcsOptions) -> anyhow::Result<()> {
    fs::write(path.as_ref(), render_ics(assignments, opts)?)
        .with_context(|| format!("writing calendar {}", path.as_ref().display()))
}

fn event_lines(
    date: NaiveDate,
    name: &str,
    slot: ShiftSlot,
    stamp: &str,
    opts: &IcsOptions,
) -> anyhow::Result<Vec<String>> {
    let uid_name: String = name.split_whitespace().collect();
    let start = to_utc(date.and_time(opts.day_start), opts.timezone)?;
    let end = to_utc(date.and_time(opts.end_of(slot)), opts.timezone)?;
    Ok(vec![
        "BEGIN:VEVENT".into(),
        format!("UID:{date}-{uid_name}-{}@roulement", slot.as_str()),
        format!("DTSTAMP:{stamp}"),
        format!("DTSTART:{}", utc_stamp(start)),
        format!("DTEND:{}", utc_stamp(end)),
        format!("SUMMARY:{}", escape_text(&format!("{} - {name}", opts.label_of(slot)))),
        format!("DESCRIPTION:{}", escape_text(&opts.description)),
        format!("LOCATION:{}", escape_text(&opts.location)),
        "END:VEVENT".into(),
    ])
}

/// Heure locale → UTC ; en cas d'ambiguïté (retour à l'heure d'hiver), la première.
fn to_utc(local: NaiveDateTime, tz: Tz) -> anyhow::Result<DateTime<Utc>> {
    let zoned = tz
        .from_local_datetime(&local)
        .earliest()
        .with_context(|| format!("{local} does not exist in {}", tz.name()))?;
    Ok(zoned.with_timezone(&Utc))
}

fn utc_stamp(at: DateTime<Utc>) -> String {
    at.format("%Y%m%dT%H%M%SZ").to_string()
}

fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            // CR retiré : CRLF devient \n
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Pliage à 75 octets, sans couper un caractère UTF-8.
fn fold(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut width = 0;
    for c in line.chars() {
        let len = c.len_utf8();
        // les lignes de continuation commencent par une espace
        if width + len > MAX_LINE_OCTETS {
            out.push_str("\r\n ");
            width = 1;
        }
        out.push(c);
        width += len;
    }
    out
}
