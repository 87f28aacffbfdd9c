use chrono::NaiveDate;
use serde::Serialize;

use super::table::MatchRecord;
use crate::config::Config;
use crate::error::ScheduleError;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A home match of the club with its derived attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedMatch {
    #[serde(flatten)]
    pub record: MatchRecord,
    pub is_masters_category: bool,
    pub parsed_date: NaiveDate,
}

impl ClassifiedMatch {
    pub fn home_team(&self) -> &str {
        self.record.home_team.as_deref().unwrap_or_default()
    }

    pub fn guest_team(&self) -> &str {
        self.record.guest_team.as_deref().unwrap_or_default()
    }
}

/// Keep the club's home matches and enrich them. Filtering runs before date
/// parsing, so a broken date on someone else's match never aborts the run.
pub fn classify_and_filter(
    records: Vec<MatchRecord>,
    config: &Config,
) -> Result<Vec<ClassifiedMatch>, ScheduleError> {
    records
        .into_iter()
        .filter(|r| is_home_match(r, &config.club_marker))
        .map(|r| enrich(r, &config.masters_marker))
        .collect()
}

fn is_home_match(record: &MatchRecord, club_marker: &str) -> bool {
    record
        .home_team
        .as_deref()
        .is_some_and(|team| team.to_lowercase().contains(club_marker))
}

fn enrich(record: MatchRecord, masters_marker: &str) -> Result<ClassifiedMatch, ScheduleError> {
    let is_masters_category = record
        .league
        .as_deref()
        .is_some_and(|league| league.contains(masters_marker));

    let text = record.date.as_deref().unwrap_or_default();
    let parsed_date =
        NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|source| ScheduleError::DateFormat {
            text: text.to_string(),
            home_team: record.home_team.clone().unwrap_or_default(),
            source,
        })?;

    Ok(ClassifiedMatch {
        record,
        is_masters_category,
        parsed_date,
    })
}

// ── Tests ──
