use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::config::{CANCEL_THRESHOLD, OPEN_SESSION_WEEKDAY};
use crate::parser::classify::ClassifiedMatch;

/// Home matches bucketed by date, table order kept within each bucket.
/// Dates without matches have no bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleIndex {
    by_date: BTreeMap<NaiveDate, Vec<ClassifiedMatch>>,
}

/// Outcome for one candidate training date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingStatus {
    Training { open_session: bool },
    Cancelled,
}

impl ScheduleIndex {
    pub fn group_by_date(matches: Vec<ClassifiedMatch>) -> Self {
        let mut by_date: BTreeMap<NaiveDate, Vec<ClassifiedMatch>> = BTreeMap::new();
        for m in matches {
            by_date.entry(m.parsed_date).or_default().push(m);
        }
        Self { by_date }
    }

    /// Matches on `date`; empty when there are none.
    pub fn matches_on(&self, date: NaiveDate) -> &[ClassifiedMatch] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn status_on(&self, date: NaiveDate) -> TrainingStatus {
        decide(date, self.matches_on(date))
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedMatch> {
        self.by_date.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

/// Two or more home matches on a date need the whole hall. Otherwise training
/// runs, opened to the public on Mondays.
pub fn decide(date: NaiveDate, matches: &[ClassifiedMatch]) -> TrainingStatus {
    if matches.len() >= CANCEL_THRESHOLD {
        TrainingStatus::Cancelled
    } else {
        TrainingStatus::Training {
            open_session: date.weekday() == OPEN_SESSION_WEEKDAY,
        }
    }
}

// ── Tests ──
