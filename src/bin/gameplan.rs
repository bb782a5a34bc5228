//! gameplan CLI - precomputed tic-tac-toe replies
//!
//! This CLI provides:
//! - Generating Circle's reply table as a JavaScript lookup function or JSON
//! - Summary counts for the full position graph
//! - Inspection of a single position's score and continuations

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gameplan")]
#[command(version, about = "Precompute tic-tac-toe replies for Circle", long_about = None)]
struct Cli {
    /// Log build progress to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and render the reply table
    Generate(gameplan::cli::commands::generate::GenerateArgs),

    /// Show counts for the position graph
    Stats(gameplan::cli::commands::stats::StatsArgs),

    /// Inspect one position
    Show(gameplan::cli::commands::show::ShowArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(args) => gameplan::cli::commands::generate::execute(args),
        Commands::Stats(args) => gameplan::cli::commands::stats::execute(args),
        Commands::Show(args) => gameplan::cli::commands::show::execute(args),
    }
}
