pub mod classify;
pub mod table;

use tracing::{debug, info};

use crate::calendar::training_dates;
use crate::config::Config;
use crate::error::ScheduleError;
use crate::render::render;
use crate::schedule::{ScheduleIndex, TrainingStatus};

/// Two-pass pipeline: html → rows → home matches, grouped by date.
pub fn process_page(html: &str, config: &Config) -> Result<ScheduleIndex, ScheduleError> {
    let records = table::extract(html)?;
    let total = records.len();
    let matches = classify::classify_and_filter(records, config)?;
    info!("Kept {} of {} matches as home matches", matches.len(), total);
    Ok(ScheduleIndex::group_by_date(matches))
}

/// Full run over one page: the training calendar fragment for the configured window.
pub fn build_calendar(html: &str, config: &Config) -> Result<String, ScheduleError> {
    let index = process_page(html, config)?;
    let dates = training_dates(config.window_start, config.window_days);

    for date in dates.clone() {
        if index.status_on(date) == TrainingStatus::Cancelled {
            debug!("No training on {}: {} home matches", date, index.matches_on(date).len());
        }
    }

    Ok(render(dates, &index))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixture() -> String {
        std::fs::read_to_string("tests/fixtures/club_meetings.html").unwrap()
    }

    const TWO_ROW_PAGE: &str = r#"
        <html><body>
        <table class="result-set">
          <tr><th>Tag</th><th>Datum</th><th>Zeit</th><th>Halle</th><th>Runde</th>
              <th>Liga</th><th>Heimmannschaft</th><th></th><th>Gastmannschaft</th></tr>
          <tr><td>Sa</td><td>12.07.2025</td><td>14:00</td><td>(1)</td><td>1</td>
              <td>1. Liga</td><td>TV Urdorf</td><td>-</td><td>X</td></tr>
          <tr><td></td><td></td><td>16:00</td><td>(1)</td><td>1</td>
              <td>O40</td><td>TV Urdorf</td><td>-</td><td>Y</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn two_row_scenario() {
        let records = table::extract(TWO_ROW_PAGE).unwrap();
        assert_eq!(records[1].day.as_deref(), Some("Sa"));
        assert_eq!(records[1].date.as_deref(), Some("12.07.2025"));

        let config = Config::with_window(ymd(2025, 7, 12), 1);
        let index = process_page(TWO_ROW_PAGE, &config).unwrap();
        let sat = ymd(2025, 7, 12);
        assert_eq!(index.matches_on(sat).len(), 2);
        assert_eq!(index.status_on(sat), TrainingStatus::Cancelled);

        // a Saturday is never a training day, so render it directly
        let out = render([sat], &index);
        assert!(out.contains(
            "<strong>Kein Training!</strong><br />TV Urdorf vs X<br />O40 TV Urdorf vs Y<br />"
        ));
    }

    #[test]
    fn fixture_home_matches() {
        let config = Config::with_window(ymd(2025, 10, 1), 40);
        let index = process_page(&fixture(), &config).unwrap();
        assert_eq!(index.len(), 6);
        assert!(index
            .iter()
            .all(|m| m.home_team().to_lowercase().contains("urdorf")));

        // Monday 6.10.: two home matches, one of them O40
        let mon = ymd(2025, 10, 6);
        let on_monday = index.matches_on(mon);
        assert_eq!(on_monday.len(), 2);
        assert!(!on_monday[0].is_masters_category);
        assert!(on_monday[1].is_masters_category);
        assert_eq!(index.status_on(mon), TrainingStatus::Cancelled);

        // Wednesday 8.10.: single home match
        assert_eq!(
            index.status_on(ymd(2025, 10, 8)),
            TrainingStatus::Training { open_session: false }
        );
    }

    #[test]
    fn fixture_calendar() {
        let config = Config::with_window(ymd(2025, 10, 1), 14);
        let out = build_calendar(&fixture(), &config).unwrap();

        // Wed 1.10. through Mon 13.10.
        assert_eq!(out.matches("<tr>").count(), 6);
        assert!(out.starts_with("<tr>\n    <td>Mi</td>\n    <td>01.10.2025</td>"));
        assert!(out.contains(
            "<td>06.10.2025</td>\n    <td><strong>Kein Training!</strong><br />TV Urdorf I vs TTC Wädenswil<br />O40 TV Urdorf O40 vs TTC Bülach<br /></td>"
        ));
        assert!(out.contains(
            "<td>08.10.2025</td>\n    <td>Training<br />TV Urdorf II vs TTC Dietikon<br /></td>"
        ));
        assert!(out.contains(
            "<td>13.10.2025</td>\n    <td>Training - <strong>Tischtennis für Alle!</strong><br /></td>"
        ));
    }

    #[test]
    fn idempotent() {
        let config = Config::with_window(ymd(2025, 10, 1), 40);
        let first = build_calendar(&fixture(), &config).unwrap();
        let second = build_calendar(&fixture(), &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_table_aborts() {
        let config = Config::with_window(ymd(2025, 10, 1), 40);
        let err = build_calendar("<html><body><p>Wartung</p></body></html>", &config).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse { .. }));
    }

    #[test]
    fn leading_row_without_date_aborts() {
        let page = r#"<table class="result-set">
            <tr><td></td><td></td><td>19:30</td><td></td><td></td>
                <td>3. Liga</td><td>TV Urdorf III</td><td>-</td><td>X</td></tr>
        </table>"#;
        let config = Config::with_window(ymd(2025, 10, 1), 40);
        let err = build_calendar(page, &config).unwrap_err();
        assert!(matches!(err, ScheduleError::DateFormat { ref text, .. } if text.is_empty()));
    }
}
