use crate::model::Assignment;
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Permet de customiser le rendu d'une journée (presse-papier, chat, etc.).
pub trait DayRenderer {
    fn render(&self, assignment: &Assignment) -> String;
}

/// Rendu texte compact, à coller tel quel.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSummary;

impl DayRenderer for TextSummary {
    fn render(&self, a: &Assignment) -> String {
        let mut out = format!(
            "{date}{lock}\n18h: {early}\n16h: {late}\n",
            date = a.date.format("%d/%m/%Y"),
            lock = if a.locked { " (verrouillé)" } else { "" },
            early = a.early.join(", "),
            late = a.late.join(", "),
        );
        if !a.absent.is_empty() {
            out.push_str(&format!("Absents: {}\n", a.absent.join(", ")));
        }
        if a.missing > 0 {
            out.push_str(&format!("Places manquantes: {}\n", a.missing));
        }
        out
    }
}

/// Résumé de la journée `date` dans le planning donné.
pub fn summarize_day(
    assignments: &[Assignment],
    date: NaiveDate,
    renderer: &dyn DayRenderer,
) -> Result<String> {
    let assignment = assignments
        .iter()
        .find(|a| a.date == date)
        .with_context(|| format!("no planned day on {date}"))?;
    Ok(renderer.render(assignment))
}

/// Regroupe les journées par semaine ISO `(année, semaine)`.
pub fn group_by_week(assignments: &[Assignment]) -> BTreeMap<(i32, u32), Vec<&Assignment>> {
    let mut weeks: BTreeMap<(i32, u32), Vec<&Assignment>> = BTreeMap::new();
    for a in assignments {
        let week = a.date.iso_week();
        weeks.entry((week.year(), week.week())).or_default().push(a);
    }
    weeks
}
