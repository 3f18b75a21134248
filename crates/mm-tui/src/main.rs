//! Standalone TUI binary for MetalMind.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mm_core::ContentPack;
use mm_tui::tabs::TabId;

#[derive(Parser)]
#[command(
    name = "mm-tui",
    about = "Terminal UI for MetalMind, the metals and non-metals learning game",
    version
)]
struct Args {
    /// Start on a specific tab (home, learn, sort, quiz, about)
    #[arg(long, default_value = "home")]
    tab: String,

    /// Shuffle the sorting items with this seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON content pack to use instead of the built-in content
    #[arg(long)]
    content: Option<PathBuf>,

    /// Write logs to this file (filter from MM_LOG, default debug)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// The terminal is in raw mode while the UI runs, so logs only go to a file.
fn init_tracing(path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("cannot open {}: {e}", path.display()))?;
    let filter = EnvFilter::try_from_env("MM_LOG").unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = try_main(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn try_main(args: Args) -> Result<(), String> {
    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    let tab = TabId::from_name(&args.tab).ok_or_else(|| {
        format!(
            "unknown tab: {} (expected home, learn, sort, quiz or about)",
            args.tab
        )
    })?;

    let pack = ContentPack::load(args.content.as_deref()).map_err(|e| e.to_string())?;
    let app = mm_tui::app::TuiApp::new(pack, tab, args.seed)?;
    mm_tui::terminal::run(app)
}
