//! Full-depth minimax search
//!
//! Scores are always reported from the maximizing side's point of view:
//! O is the maximizer, X the minimizer. A won position for O scores +10, a
//! won position for X scores -10 and a full board scores 0. Inner nodes take
//! exactly one child's score, so no other values ever appear.
//!
//! Every candidate is evaluated on its own copy of the board, so sibling
//! branches never observe each other's speculative marks.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tictactoe::{Board, Player};

/// Score of a position won by the maximizing side
pub const WIN_SCORE: i32 = 10;

/// Score of a position won by the minimizing side
pub const LOSS_SCORE: i32 = -10;

/// Score of a full board with no winner
pub const DRAW_SCORE: i32 = 0;

/// The side whose score the search maximizes
pub const MAXIMIZER: Player = Player::O;

/// The side whose score the search minimizes
pub const MINIMIZER: Player = Player::X;

/// Result of a search call
///
/// `index` is only set at the root of a search over a non-terminal board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub index: Option<usize>,
    pub score: i32,
    /// Plies from this position until the game is decided under best play
    pub plies: u8,
}

/// Minimax value of one candidate move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    pub index: usize,
    pub score: i32,
    pub plies: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Evaluation {
    score: i32,
    plies: u8,
}

impl Evaluation {
    /// Whether `self` is strictly preferable to `other` for `mover`.
    ///
    /// The score decides first. Between equal scores a winning mover wants
    /// the shorter line and a losing mover the longer one.
    fn beats(self, other: Evaluation, mover: Player) -> bool {
        let sign = if mover == MAXIMIZER { 1 } else { -1 };
        let (mine, theirs) = (self.score * sign, other.score * sign);
        if mine != theirs {
            return mine > theirs;
        }
        match mine.signum() {
            1 => self.plies < other.plies,
            -1 => self.plies > other.plies,
            _ => false,
        }
    }
}

/// Leaf evaluation, checked in a fixed order: minimizer win, maximizer win, full board
fn leaf_score(board: &Board) -> Option<i32> {
    if board.has_won(MINIMIZER) {
        Some(LOSS_SCORE)
    } else if board.has_won(MAXIMIZER) {
        Some(WIN_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

#[derive(Default)]
struct Minimax {
    nodes: u64,
}

impl Minimax {
    fn evaluate(&mut self, board: Board, mover: Player) -> Evaluation {
        self.nodes += 1;

        if let Some(score) = leaf_score(&board) {
            return Evaluation { score, plies: 0 };
        }

        let mut best: Option<Evaluation> = None;
        for (_, child) in self.children(board, mover) {
            if best.is_none_or(|current| child.beats(current, mover)) {
                best = Some(child);
            }
        }

        // A non-terminal board always has at least one child
        best.unwrap_or(Evaluation {
            score: DRAW_SCORE,
            plies: 0,
        })
    }

    /// Evaluate each empty cell in ascending order, one board copy per branch
    fn children(&mut self, board: Board, mover: Player) -> Vec<(usize, Evaluation)> {
        (0..9)
            .filter(|&pos| board.is_empty(pos))
            .map(|pos| {
                let mut next = board;
                next.cells[pos] = mover.to_cell();
                let child = self.evaluate(next, mover.opponent());
                (
                    pos,
                    Evaluation {
                        score: child.score,
                        plies: child.plies + 1,
                    },
                )
            })
            .collect()
    }
}

/// Run a full-depth search for `mover` and report the chosen root move.
///
/// On a terminal board the leaf score is returned with no index.
pub fn search(board: &Board, mover: Player) -> SearchOutcome {
    let mut minimax = Minimax::default();

    if let Some(score) = leaf_score(board) {
        return SearchOutcome {
            index: None,
            score,
            plies: 0,
        };
    }

    let mut best: Option<(usize, Evaluation)> = None;
    for (index, child) in minimax.children(*board, mover) {
        if best.is_none_or(|(_, current)| child.beats(current, mover)) {
            best = Some((index, child));
        }
    }

    let outcome = match best {
        Some((index, eval)) => SearchOutcome {
            index: Some(index),
            score: eval.score,
            plies: eval.plies,
        },
        None => SearchOutcome {
            index: None,
            score: DRAW_SCORE,
            plies: 0,
        },
    };

    debug!(
        board = %board.encode(),
        mover = %mover,
        index = ?outcome.index,
        score = outcome.score,
        nodes = minimax.nodes,
        "minimax search complete"
    );

    outcome
}

/// Minimax value of every legal move for `mover`, in ascending cell order
pub fn evaluate_moves(board: &Board, mover: Player) -> Vec<ScoredMove> {
    if leaf_score(board).is_some() {
        return Vec::new();
    }

    let mut minimax = Minimax::default();
    minimax
        .children(*board, mover)
        .into_iter()
        .map(|(index, eval)| ScoredMove {
            index,
            score: eval.score,
            plies: eval.plies,
        })
        .collect()
}

/// Advisory move for the side to move, or `None` once the game is over.
///
/// Identical to the optimal policy's choice. The board is taken by
/// reference and never modified.
pub fn hint(board: &Board, mover: Player) -> Option<usize> {
    search(board, mover).index
}
