//! CLI frontend for the NFL grid quiz.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gq",
    about = "NFL grid quiz: divisions and starting quarterbacks",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List teams grouped by division, AFC first
    Teams {
        /// Only show one division (e.g. "AFC East")
        #[arg(short, long)]
        division: Option<String>,

        /// Include logo URLs
        #[arg(long)]
        urls: bool,
    },

    /// List the eight divisions with their conference
    Divisions,

    /// List the starting quarterback snapshot
    Qbs {
        /// Snapshot file (default: the bundled snapshot)
        #[arg(short = 'D', long)]
        data: Option<PathBuf>,

        /// Only show the quarterback of one team abbreviation
        #[arg(short, long)]
        team: Option<String>,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,

        /// Add a column with each quarterback's headshot URL
        #[arg(long)]
        urls: bool,
    },

    /// Show which division a team plays in
    Lookup {
        /// Full team name, e.g. "Buffalo Bills"
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Guess the division of one random team at a time
    Guess {
        /// RNG seed for a reproducible session
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Sort all 32 teams into their divisions
    Assign {
        /// RNG seed for a reproducible session
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Match every starting quarterback to his team
    Qb {
        /// RNG seed for a reproducible session
        #[arg(short, long)]
        seed: Option<u64>,

        /// Snapshot file (default: the bundled snapshot)
        #[arg(short = 'D', long)]
        data: Option<PathBuf>,
    },

    /// Launch the full-screen quiz
    Tui {
        /// Mode to open: guess, assign, qb
        #[arg(short, long)]
        mode: Option<String>,

        /// RNG seed for a reproducible session
        #[arg(short, long)]
        seed: Option<u64>,

        /// Snapshot file (default: the bundled snapshot)
        #[arg(short = 'D', long)]
        data: Option<PathBuf>,

        /// Write shared results to this file
        #[arg(long)]
        share_to: Option<PathBuf>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("GQ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Teams { division, urls } => commands::teams::run(division.as_deref(), urls),
        Commands::Divisions => commands::divisions::run(),
        Commands::Qbs {
            data,
            team,
            json,
            urls,
        } => commands::qbs::run(data.as_deref(), team.as_deref(), json, urls),
        Commands::Lookup { name } => commands::lookup::run(&name.join(" ")),
        Commands::Guess { seed } => commands::guess::run(seed),
        Commands::Assign { seed } => commands::assign::run(seed),
        Commands::Qb { seed, data } => commands::qb::run(seed, data.as_deref()),
        Commands::Tui {
            mode,
            seed,
            data,
            share_to,
        } => commands::tui::run(
            mode.as_deref(),
            seed,
            data.as_deref(),
            share_to.as_deref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
