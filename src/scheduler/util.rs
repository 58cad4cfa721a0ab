use super::SchedError;
use chrono::{Datelike, NaiveDate, Weekday};

pub(super) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub(super) fn next_day(date: NaiveDate) -> Result<NaiveDate, SchedError> {
    date.succ_opt().ok_or(SchedError::DateOverflow)
}

/// Itère les jours planifiés `(rotation_index, date)` : l'index n'avance
/// que sur les jours émis, jamais sur les week-ends sautés.
pub(super) struct PlannedDays {
    current: NaiveDate,
    emitted: u32,
    days: u32,
    skip_weekends: bool,
}

impl PlannedDays {
    pub(super) fn new(start: NaiveDate, days: u32, skip_weekends: bool) -> Self {
        Self {
            current: start,
            emitted: 0,
            days,
            skip_weekends,
        }
    }
}

impl Iterator for PlannedDays {
    type Item = Result<(usize, NaiveDate), SchedError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted >= self.days {
            return None;
        }
        while self.skip_weekends && is_weekend(self.current) {
            match next_day(self.current) {
                Ok(d) => self.current = d,
                Err(err) => {
                    self.emitted = self.days;
                    return Some(Err(err));
                }
            }
        }
        let date = self.current;
        let index = self.emitted as usize;
        self.emitted += 1;
        // le dernier jour émis n'a pas besoin de successeur
        if self.emitted < self.days {
            match next_day(date) {
                Ok(d) => self.current = d,
                Err(err) => {
                    self.emitted = self.days;
                    return Some(Err(err));
                }
            }
        }
        Some(Ok((index, date)))
    }
}
