//! CLI frontend for MetalMind, the metals and non-metals learning game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mm",
    about = "MetalMind: learn metals & non-metals through fun & play",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine transitions to stderr (overridden by MM_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the element reference
    Learn {
        /// Element to show in detail (name or id, case-insensitive)
        name: Option<String>,

        /// Only list elements of this category (metal, non-metal)
        #[arg(short, long)]
        category: Option<String>,

        /// JSON content pack to use instead of the built-in content
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Play the sorting game
    Sort {
        /// Shuffle the items with this seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON content pack to use instead of the built-in content
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Take the multiple-choice quiz
    Quiz {
        /// JSON content pack to use instead of the built-in content
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Validate a content pack, or export the built-in one
    Content {
        /// Content pack to validate (default: built-in)
        #[arg(long)]
        content: Option<PathBuf>,

        /// Print the pack as JSON instead of a summary
        #[arg(short, long)]
        export: bool,
    },

    /// About MetalMind
    About,

    /// Launch the interactive terminal UI
    Tui {
        /// Start on a specific tab (home, learn, sort, quiz, about)
        #[arg(long, default_value = "home")]
        tab: String,

        /// Shuffle seed for the sorting tab
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON content pack to use instead of the built-in content
        #[arg(long)]
        content: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MM_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Learn {
            name,
            category,
            content,
        } => commands::learn::run(content.as_deref(), name.as_deref(), category.as_deref()),
        Commands::Sort { seed, content } => commands::sort::run(content.as_deref(), seed),
        Commands::Quiz { content } => commands::quiz::run(content.as_deref()),
        Commands::Content { content, export } => {
            commands::content::run(content.as_deref(), export)
        }
        Commands::About => commands::about::run(),
        Commands::Tui { tab, seed, content } => {
            commands::tui::run(&tab, seed, content.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
