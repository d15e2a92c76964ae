//! Game rules for noughts and crosses.
//!
//! Pure functions that evaluate a board. Rules are kept apart from board
//! storage so the session and the search can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{lines, winning_line};

use crate::board::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// No winner yet and at least one empty cell remains.
    Undecided,
    /// A player owns a complete line.
    Winner(Player),
    /// The board is full and no line is won.
    Draw,
}

impl Verdict {
    /// True for `Winner` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Verdict::Undecided)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Verdict::Winner(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Undecided => write!(f, "Undecided"),
            Verdict::Winner(player) => write!(f, "Player {} wins", player),
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates `board`.
///
/// Lines are scanned diagonals first, then rows top to bottom, then
/// columns left to right; the first complete line decides the winner.
/// A full board with no complete line is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board) -> Verdict {
    verdict_of(board)
}

/// Uninstrumented [`evaluate`] for the search hot path.
pub(crate) fn verdict_of(board: &Board) -> Verdict {
    if let Some(winner) = win::check_winner(board) {
        return Verdict::Winner(winner);
    }
    if draw::no_empty_cell(board) {
        return Verdict::Draw;
    }
    Verdict::Undecided
}
