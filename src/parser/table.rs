use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use tracing::debug;

use crate::config::TABLE_CLASS;
use crate::error::ScheduleError;

static TABLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(&format!("table.{TABLE_CLASS}")).unwrap());
static ROW_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Cells per match row: day, date, time, location, round, league, home, separator, guest.
pub const COLUMN_COUNT: usize = 9;

/// One row of the club-meetings table. A field is `None` when the row ran out of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub day: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub round: Option<String>,
    pub league: Option<String>,
    pub home_team: Option<String>,
    pub guest_team: Option<String>,
}

impl MatchRecord {
    fn from_cells(cells: Vec<String>) -> Self {
        let mut it = cells.into_iter();
        let day = it.next();
        let date = it.next();
        let time = it.next();
        let location = it.next();
        let round = it.next();
        let league = it.next();
        let home_team = it.next();
        let _separator = it.next();
        let guest_team = it.next();

        Self {
            day,
            date,
            time,
            location,
            round,
            league,
            home_team,
            guest_team,
        }
    }
}

#[derive(Default)]
struct LastSeen {
    day: Option<String>,
    date: Option<String>,
}

/// Parse the schedule table into one record per row, filling merged day/date cells
/// from the nearest row above.
pub fn extract(html: &str) -> Result<Vec<MatchRecord>, ScheduleError> {
    let document = Html::parse_document(html);
    let table = document
        .select(&TABLE_SEL)
        .next()
        .ok_or_else(|| ScheduleError::Parse {
            class: TABLE_CLASS.to_string(),
        })?;

    let rows: Vec<MatchRecord> = table
        .select(&ROW_SEL)
        .map(row_cells)
        // header rows are built from <th>
        .filter(|cells| !cells.is_empty())
        .inspect(|cells| {
            if cells.len() < COLUMN_COUNT {
                debug!("Short row with {} of {} cells", cells.len(), COLUMN_COUNT);
            }
        })
        .map(MatchRecord::from_cells)
        .collect();

    let records = forward_fill(rows);
    debug!("Extracted {} schedule rows", records.len());
    Ok(records)
}

fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    row.select(&CELL_SEL)
        .map(|td| td.text().collect::<String>().trim().to_string())
        .collect()
}

fn forward_fill(rows: Vec<MatchRecord>) -> Vec<MatchRecord> {
    let (records, _) = rows.into_iter().fold(
        (Vec::new(), LastSeen::default()),
        |(mut out, mut last), mut row| {
            row.day = carry(&mut last.day, row.day.take());
            row.date = carry(&mut last.date, row.date.take());
            out.push(row);
            (out, last)
        },
    );
    records
}

/// Non-empty cells replace the remembered value; empty or missing ones inherit it.
fn carry(last: &mut Option<String>, cell: Option<String>) -> Option<String> {
    match cell {
        Some(value) if !value.is_empty() => {
            *last = Some(value.clone());
            Some(value)
        }
        other => last.clone().or(other),
    }
}

// ── Tests ──
