//! Tic-Tac-Toe CLI
//!
//! This CLI provides:
//! - Interactive games against a human or a synthetic opponent
//! - Hints and full move analysis for arbitrary boards
//! - AI-vs-AI matches for comparing policies

use anyhow::Result;
use clap::{Parser, Subcommand};
use elite_tictactoe::cli::commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-Tac-Toe with minimax opponents, hints and turn timers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(commands::play::PlayArgs),

    /// Suggest the best move for a board
    Hint(commands::hint::HintArgs),

    /// Score every legal move for a board
    Analyze(commands::analyze::AnalyzeArgs),

    /// Pit two policies against each other
    Arena(commands::arena::ArenaArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => commands::play::execute(args),
        Commands::Hint(args) => commands::hint::execute(args),
        Commands::Analyze(args) => commands::analyze::execute(args),
        Commands::Arena(args) => commands::arena::execute(args),
    }
}
