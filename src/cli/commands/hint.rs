//! Hint command - best move for a given board

use anyhow::Result;
use clap::Parser;

use super::board_and_side;
use crate::{cli::output, search};

#[derive(Parser, Debug)]
#[command(about = "Suggest the best move for a board")]
pub struct HintArgs {
    /// Board as nine cells, e.g. `XX.OO....` (`.` for empty)
    pub board: String,

    /// Side to move (`x` or `o`); inferred from piece counts when omitted
    #[arg(long, short = 's')]
    pub side: Option<String>,
}

pub fn execute(args: HintArgs) -> Result<()> {
    let (board, side) = board_and_side(&args.board, args.side.as_deref())?;

    println!("{}\n", output::format_board(&board));
    match search::hint(&board, side) {
        Some(index) => println!("Hint for {side}: cell {} (index {index})", index + 1),
        None => println!("No hint: the game is already over."),
    }
    Ok(())
}
