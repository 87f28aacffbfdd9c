use chrono::{Local, NaiveDate, Weekday};

pub const CLUB_MEETINGS_URL: &str =
    "https://www.click-tt.ch/cgi-bin/WebObjects/nuLigaTTCH.woa/wa/clubMeetings";
pub const DEFAULT_CLUB_ID: &str = "33194";

/// Class attribute of the schedule table on the club-meetings page.
pub const TABLE_CLASS: &str = "result-set";

pub const DEFAULT_CLUB_MARKER: &str = "urdorf";
pub const DEFAULT_MASTERS_MARKER: &str = "O40";
pub const DEFAULT_WINDOW_DAYS: i64 = 40;

pub const TRAINING_WEEKDAYS: &[Weekday] = &[Weekday::Mon, Weekday::Wed, Weekday::Fri];
pub const OPEN_SESSION_WEEKDAY: Weekday = Weekday::Mon;

/// Home matches on one date at or above this count take the whole hall.
pub const CANCEL_THRESHOLD: usize = 2;

#[derive(Debug, Clone)]
pub struct Config {
    /// Lowercase substring identifying the club in the home-team column.
    pub club_marker: String,
    /// Case-sensitive substring flagging a masters league.
    pub masters_marker: String,
    pub window_start: NaiveDate,
    pub window_days: i64,
}

impl Config {
    pub fn with_window(window_start: NaiveDate, window_days: i64) -> Self {
        Self {
            window_start,
            window_days,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            club_marker: DEFAULT_CLUB_MARKER.to_string(),
            masters_marker: DEFAULT_MASTERS_MARKER.to_string(),
            window_start: Local::now().date_naive(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}
