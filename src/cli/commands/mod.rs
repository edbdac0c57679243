//! CLI subcommands

pub mod analyze;
pub mod arena;
pub mod hint;
pub mod play;

use anyhow::Result;

use crate::tictactoe::{Board, Player};

/// Parse a board argument and work out whose turn it is.
///
/// An explicit `--side` wins; otherwise X is assumed to have opened.
pub(crate) fn board_and_side(board: &str, side: Option<&str>) -> Result<(Board, Player)> {
    let board = Board::from_string(board)?;
    let side = match side {
        Some(token) => token.parse::<Player>()?,
        None => board.side_to_move()?,
    };
    Ok((board, side))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_is_inferred_or_overridden() {
        let (_, side) = board_and_side("X........", None).unwrap();
        assert_eq!(side, Player::O);

        let (_, side) = board_and_side(".........", Some("o")).unwrap();
        assert_eq!(side, Player::O);

        assert!(board_and_side("O........", None).is_err());
        assert!(board_and_side("XX.OO....", Some("?")).is_err());
    }
}
