//! Standalone TUI binary for the NFL grid quiz.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use gq_core::QbRoster;
use gq_modes::{FileShare, NoShare, QuizConfig, ShareSurface};
use gq_tui::app::TuiApp;
use gq_tui::tabs::TabId;

#[derive(Parser)]
#[command(
    name = "gq-tui",
    about = "Terminal UI for the NFL grid quiz",
    version
)]
struct Args {
    /// Start on a specific mode (guess, assign, qb)
    #[arg(long, default_value = "guess")]
    mode: String,

    /// RNG seed for reproducible shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// Quarterback snapshot file (default: the bundled snapshot)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Write shared results to this file
    #[arg(long)]
    share_to: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let Some(tab) = TabId::from_name(&args.mode) else {
        eprintln!("error: unknown mode: \"{}\" (expected guess, assign, or qb)", args.mode);
        process::exit(1);
    };

    let roster = match QbRoster::load_or_bundled(args.data.as_deref()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: failed to load quarterback data: {e}");
            process::exit(1);
        }
    };

    let config = QuizConfig::default().with_optional_seed(args.seed);
    let surface: Box<dyn ShareSurface> = match args.share_to {
        Some(path) => Box::new(FileShare::new(path)),
        None => Box::new(NoShare),
    };

    let app = TuiApp::new(&roster, tab, &config, surface);

    if let Err(e) = gq_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
