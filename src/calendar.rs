use chrono::{Datelike, Days, NaiveDate};

use crate::config::TRAINING_WEEKDAYS;

/// Training days in `[start, start + span_days)`, ascending.
///
/// Calling again with the same arguments yields the same dates; a span of zero
/// or less yields nothing.
pub fn training_dates(start: NaiveDate, span_days: i64) -> impl Iterator<Item = NaiveDate> + Clone {
    let span = u64::try_from(span_days).unwrap_or(0);
    (0..span)
        .filter_map(move |offset| start.checked_add_days(Days::new(offset)))
        .filter(|d| TRAINING_WEEKDAYS.contains(&d.weekday()))
}

// ── Tests ──
