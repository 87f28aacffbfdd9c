use thiserror::Error;

/// Failures of the schedule pipeline. Both abort the run; there is no partial output.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("no table with class `{class}` in document")]
    Parse { class: String },

    #[error("invalid match date {text:?} (home team {home_team:?}): {source}")]
    DateFormat {
        text: String,
        home_team: String,
        #[source]
        source: chrono::ParseError,
    },
}
