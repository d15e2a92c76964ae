//! Commands consumed by a session and events it emits.
//!
//! Commands are the only way in; events are the only way out. A renderer
//! translates input into [`Command`]s and [`Event`]s into visual updates.

use crate::action::Move;
use crate::board::{Board, Player};
use crate::rules::Verdict;
use crate::score::Scoreboard;
use crate::strategy::Strategy;
use crate::turn::Seats;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Input accepted by [`GameSession::handle`](crate::GameSession::handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// The human chooses an identity; the CPU takes the other.
    PickSymbol(Player),
    /// Chooses the CPU policy and starts the first round.
    PickStrategy(Strategy),
    /// The human marks a cell.
    PlaceMark(usize),
    /// Clears the board and starts a new round.
    Reset,
    /// Ends the session.
    Exit,
}

impl Command {
    /// Short name used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::PickSymbol(_) => "pick symbol",
            Command::PickStrategy(_) => "pick strategy",
            Command::PlaceMark(_) => "place mark",
            Command::Reset => "reset",
            Command::Exit => "exit",
        }
    }
}

/// Snapshot emitted after each half-move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveReport {
    /// The mark just placed.
    mark: Move,
    /// Whether the CPU placed it.
    by_cpu: bool,
    /// Board after the mark.
    board: Board,
    /// Verdict after the mark.
    verdict: Verdict,
    /// Scores after the verdict was applied.
    scores: Scoreboard,
    /// Winning cells when the mark won the round.
    winning_line: Option<Vec<usize>>,
}

impl MoveReport {
    pub(crate) fn new(
        mark: Move,
        by_cpu: bool,
        board: Board,
        verdict: Verdict,
        scores: Scoreboard,
        winning_line: Option<Vec<usize>>,
    ) -> Self {
        Self {
            mark,
            by_cpu,
            board,
            verdict,
            scores,
            winning_line,
        }
    }
}

/// Output of [`GameSession::handle`](crate::GameSession::handle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Identities were assigned and the first player drawn.
    SymbolsAssigned {
        /// Human and CPU identities.
        seats: Seats,
        /// Player who opens the first round.
        first: Player,
    },
    /// A round began on a blank board.
    RoundStarted {
        /// Board edge length.
        size: usize,
        /// Player who opens the round.
        first: Player,
    },
    /// A mark was placed.
    MarkPlaced(MoveReport),
    /// The human reset an undecided round; the CPU is credited the win.
    Withdrawal {
        /// Identity credited with the win.
        winner: Player,
        /// Scores after the withdrawal.
        scores: Scoreboard,
    },
    /// The session ended.
    Exited,
}
