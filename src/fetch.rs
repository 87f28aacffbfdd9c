use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::config::CLUB_MEETINGS_URL;

/// Form fields of the "club meetings" search, everything but the club id.
const SEARCH_FORM: &[(&str, &str)] = &[
    ("searchType", "0"),
    ("searchTimeRange", "4"),
    ("searchTimeRangeFrom", ""),
    ("searchTimeRangeTo", ""),
    ("selectedTeamId", "WONoSelectionString"),
    ("searchMeetings", "Suchen"),
];

fn search_form(club_id: &str) -> Vec<(&str, &str)> {
    let mut form: Vec<(&str, &str)> = SEARCH_FORM.to_vec();
    form.push(("club", club_id));
    form
}

/// POST the club-meetings search and return the result page.
pub async fn fetch_club_meetings(club_id: &str) -> Result<String> {
    let client = reqwest::Client::new();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Fetching schedule for club {club_id}"));
    spinner.enable_steady_tick(Duration::from_millis(100));

    info!("Fetching club meetings: {} (club {})", CLUB_MEETINGS_URL, club_id);
    let response = client
        .post(CLUB_MEETINGS_URL)
        .form(&search_form(club_id))
        .send()
        .await
        .context("Failed to reach click-tt")?
        .error_for_status()
        .context("click-tt rejected the schedule search")?;

    let html = response
        .text()
        .await
        .context("Failed to read schedule page")?;

    spinner.finish_and_clear();
    info!("Fetched {} bytes", html.len());
    Ok(html)
}

// ── Tests ──
