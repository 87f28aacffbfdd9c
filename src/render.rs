use std::fmt::Write;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::parser::classify::ClassifiedMatch;
use crate::schedule::{ScheduleIndex, TrainingStatus};

const TRAINING_LABEL: &str = "Training";
const OPEN_SESSION_LABEL: &str = " - <strong>Tischtennis für Alle!</strong>";
const CANCELLED_LABEL: &str = "<strong>Kein Training!</strong>";
const MASTERS_PREFIX: &str = "O40 ";
const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// German short weekday for the training days; empty for any other day.
pub fn weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Wed => "Mi",
        Weekday::Fri => "Fr",
        _ => "",
    }
}

/// One `<tr>` per candidate date. Text from the table is emitted as-is.
pub fn render(dates: impl IntoIterator<Item = NaiveDate>, index: &ScheduleIndex) -> String {
    let mut html = String::new();
    for date in dates {
        let _ = write!(
            html,
            "<tr>\n    <td>{}</td>\n    <td>{}</td>\n    <td>{}</td>\n</tr>\n",
            weekday_short(date.weekday()),
            date.format(DISPLAY_DATE_FORMAT),
            training_cell(index.status_on(date), index.matches_on(date)),
        );
    }
    html
}

fn training_cell(status: TrainingStatus, matches: &[ClassifiedMatch]) -> String {
    let mut cell = match status {
        TrainingStatus::Training { open_session: true } => {
            format!("{TRAINING_LABEL}{OPEN_SESSION_LABEL}")
        }
        TrainingStatus::Training { open_session: false } => TRAINING_LABEL.to_string(),
        TrainingStatus::Cancelled => CANCELLED_LABEL.to_string(),
    };
    cell.push_str("<br />");
    for m in matches {
        if m.is_masters_category {
            cell.push_str(MASTERS_PREFIX);
        }
        let _ = write!(cell, "{} vs {}<br />", m.home_team(), m.guest_team());
    }
    cell
}

// ── Tests ──
