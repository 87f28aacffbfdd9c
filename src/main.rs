mod calendar;
mod config;
mod error;
mod fetch;
mod parser;
mod render;
mod schedule;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use config::{Config, DEFAULT_CLUB_ID, DEFAULT_WINDOW_DAYS};

#[derive(Parser)]
#[command(
    name = "training_calendar",
    about = "Training calendar from the click-tt club schedule"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Source {
    /// Read a saved schedule page instead of fetching it
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// click-tt club id
    #[arg(long, default_value = DEFAULT_CLUB_ID)]
    club: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the training calendar rows as an HTML fragment
    Render {
        #[command(flatten)]
        source: Source,
        /// First day of the window (YYYY-MM-DD or DD.MM.YYYY, default: today)
        #[arg(short, long, value_parser = parse_start)]
        start: Option<NaiveDate>,
        /// Number of days in the window
        #[arg(short = 'n', long, default_value_t = DEFAULT_WINDOW_DAYS)]
        days: i64,
    },
    /// List the club's home matches
    Matches {
        #[command(flatten)]
        source: Source,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the raw schedule page (save it for --input)
    Fetch {
        /// click-tt club id
        #[arg(long, default_value = DEFAULT_CLUB_ID)]
        club: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            source,
            start,
            days,
        } => {
            let html = load_page(&source).await?;
            let config = match start {
                Some(start) => Config::with_window(start, days),
                None => Config {
                    window_days: days,
                    ..Config::default()
                },
            };
            info!(
                "Training window: {} days from {}",
                config.window_days, config.window_start
            );
            let fragment = parser::build_calendar(&html, &config)?;
            print!("{}", fragment);
        }
        Commands::Matches { source, json } => {
            let html = load_page(&source).await?;
            let index = parser::process_page(&html, &Config::default())?;
            if json {
                let matches: Vec<_> = index.iter().collect();
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else if index.is_empty() {
                println!("No home matches found.");
            } else {
                print_matches(&index);
            }
        }
        Commands::Fetch { club } => {
            let html = fetch::fetch_club_meetings(&club).await?;
            print!("{}", html);
        }
    }

    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}

async fn load_page(source: &Source) -> anyhow::Result<String> {
    match &source.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => fetch::fetch_club_meetings(&source.club).await,
    }
}

fn parse_start(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, parser::classify::DATE_FORMAT))
        .map_err(|_| format!("expected YYYY-MM-DD or DD.MM.YYYY, got {s:?}"))
}

fn print_matches(index: &schedule::ScheduleIndex) {
    println!(
        "{:>3} | {:<10} | {:<3} | {:<5} | {:<20} | {:<40} | {:<3}",
        "#", "Date", "Day", "Time", "League", "Match", "O40"
    );
    println!("{}", "-".repeat(100));

    for (i, m) in index.iter().enumerate() {
        let fixture = format!("{} vs {}", m.home_team(), m.guest_team());
        println!(
            "{:>3} | {:<10} | {:<3} | {:<5} | {:<20} | {:<40} | {:<3}",
            i + 1,
            m.parsed_date.format(parser::classify::DATE_FORMAT),
            render::weekday_short(m.parsed_date.weekday()),
            m.record.time.as_deref().unwrap_or("-"),
            truncate(m.record.league.as_deref().unwrap_or("-"), 20),
            truncate(&fixture, 40),
            if m.is_masters_category { "yes" } else { "" },
        );
    }

    let cancelled = index
        .dates()
        .filter(|d| index.status_on(*d) == schedule::TrainingStatus::Cancelled)
        .count();
    println!(
        "\n{} home matches on {} dates | {} dates need the whole hall",
        index.len(),
        index.dates().count(),
        cancelled
    );
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
