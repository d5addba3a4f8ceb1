//! Offline collector for the starting quarterback snapshot.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use chrono::{Datelike, Local};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gq_core::QbSnapshot;
use gq_fetch::team_ids::team_id;
use gq_fetch::{DEFAULT_BASE_URL, EspnClient, collect_starters, starter_for, write_snapshot};

/// Collect the starting quarterback of every team into a snapshot file.
#[derive(Parser)]
#[command(name = "gq-fetch", version, about)]
struct Args {
    /// Season year to read depth charts for (defaults to the current year)
    #[arg(short, long)]
    season: Option<i32>,

    /// Where to write the snapshot
    #[arg(short, long, default_value = "crates/gq-core/data/qb_data.json")]
    output: PathBuf,

    /// Pause between teams, in milliseconds
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// API root, for mirrors and testing
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Resolve one team's starter and print it instead of writing a snapshot
    #[arg(short, long)]
    team: Option<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("GQ_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() {
    init_logging();
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), String> {
    let today = Local::now().date_naive();
    let season = args.season.unwrap_or_else(|| today.year());
    let client = EspnClient::new(args.base_url).map_err(|e| e.to_string())?;

    if let Some(abbr) = args.team {
        let abbr = abbr.to_lowercase();
        let id = team_id(&abbr).ok_or_else(|| format!("unknown team abbreviation: \"{abbr}\""))?;
        let qb = starter_for(&client, season, &abbr, id)
            .await
            .map_err(|e| e.to_string())?;
        println!("{} ({}): {}", abbr.to_uppercase(), qb.athlete_id, qb.name);
        return Ok(());
    }

    tracing::info!(season, "collecting starting quarterbacks");
    let qbs = collect_starters(&client, season, Duration::from_millis(args.delay_ms)).await;
    if qbs.is_empty() {
        return Err("no quarterbacks collected; snapshot left unchanged".to_string());
    }

    let snapshot = QbSnapshot {
        last_updated: today,
        qbs,
    };
    write_snapshot(&args.output, &snapshot).map_err(|e| e.to_string())?;
    println!(
        "Wrote {} quarterbacks to {}",
        snapshot.qbs.len(),
        args.output.display()
    );
    Ok(())
}
