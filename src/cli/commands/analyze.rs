//! Analyze command - minimax value of every candidate move

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::board_and_side;
use crate::{
    cli::output,
    search::{self, ScoredMove},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Score every legal move on a board")]
pub struct AnalyzeArgs {
    /// Board as nine cells, e.g. `X...O....` (`.` for empty)
    pub board: String,

    /// Side to move (`x` or `o`); inferred from piece counts when omitted
    #[arg(long, short = 's')]
    pub side: Option<String>,

    /// Export the analysis as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct AnalysisExport<'a> {
    board: String,
    side: Player,
    chosen: Option<usize>,
    score: i32,
    moves: &'a [ScoredMove],
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let (board, side) = board_and_side(&args.board, args.side.as_deref())?;

    let spinner = output::create_spinner("Searching game tree...");
    let outcome = search::search(&board, side);
    let moves = search::evaluate_moves(&board, side);
    spinner.finish_and_clear();

    output::print_section(&format!("Analysis for {side} to move"));
    println!("{}\n", output::format_board(&board));
    output::print_kv("Board", &board.encode());
    output::print_kv("Root score", &outcome.score.to_string());

    if moves.is_empty() {
        println!("\nThe game is already over.");
    } else {
        println!("\n  cell  score  plies");
        for scored in &moves {
            let marker = if Some(scored.index) == outcome.index {
                "  <- chosen"
            } else {
                ""
            };
            println!(
                "  {:>4}  {:>5}  {:>5}{marker}",
                scored.index + 1,
                scored.score,
                scored.plies
            );
        }
        println!("\nScores are from O's point of view (+10 O wins, -10 X wins).");
    }

    if let Some(path) = &args.export {
        let export = AnalysisExport {
            board: board.encode(),
            side,
            chosen: outcome.index,
            score: outcome.score,
            moves: &moves,
        };
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &export)?;
        println!("\n✓ Analysis exported to: {}", path.display());
    }

    Ok(())
}
