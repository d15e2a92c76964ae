//! CPU strategy engine.
//!
//! Three interchangeable policies select the CPU's next cell: uniform
//! random, depth-capped minimax, and an alternating policy that hands
//! each move to one of the other two.

pub mod alternating;
pub mod minimax;
pub mod random;

pub use minimax::MAX_DEPTH;

use crate::board::Board;
use crate::rules::verdict_of;
use crate::turn::Seats;
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// CPU move-selection policy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Strategy {
    /// Uniformly random empty cell.
    Random,
    /// Depth-capped minimax search.
    Minimax,
    /// Each move delegates to Random or Minimax, chosen 50/50.
    #[strum(to_string = "alternating", serialize = "schizophrenia")]
    Alternating,
}

impl Strategy {
    /// The strategies Alternating may delegate to.
    pub const DELEGATES: [Strategy; 2] = [Strategy::Random, Strategy::Minimax];

    /// One-line description of how the CPU behaves.
    pub fn description(self) -> &'static str {
        match self {
            Strategy::Random => "Will behave randomly with no strategy",
            Strategy::Minimax => "Will maximise chances of not losing",
            Strategy::Alternating => "Will change behaviour each round",
        }
    }
}

/// Seating plus the strategy the CPU plays with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// Human and CPU identities.
    pub seats: Seats,
    /// CPU policy.
    pub strategy: Strategy,
}

/// A move selected by the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Choice {
    /// Cell index, always empty on the board the choice was made for.
    index: usize,
    /// The policy that produced the index (the delegate for Alternating).
    strategy: Strategy,
}

impl Choice {
    pub(crate) fn new(index: usize, strategy: Strategy) -> Self {
        Self { index, strategy }
    }
}

/// Selects the CPU's next cell under `info.strategy`.
///
/// Returns `None` when the board is already decided, which includes a
/// full board.
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    info: &PlayerInfo,
    rng: &mut R,
) -> Option<Choice> {
    if verdict_of(board).is_terminal() {
        debug!("Board already decided, no move");
        return None;
    }
    let strategy = match info.strategy {
        Strategy::Alternating => alternating::delegate(rng),
        other => other,
    };
    let index = match strategy {
        Strategy::Minimax => minimax::best_move(board, info.seats.cpu),
        Strategy::Random | Strategy::Alternating => random::pick(board, rng),
    }?;
    debug!(index, %strategy, "CPU chose move");
    Some(Choice::new(index, strategy))
}
