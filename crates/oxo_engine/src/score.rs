//! Scoreboard: win/draw/lose tallies per player for the session lifetime.

use crate::board::Player;
use crate::rules::Verdict;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Outcome of a finished round.
///
/// Unlike [`Verdict`] there is no undecided case, so a scoreboard can
/// only be updated once a round is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the round.
    Winner(Player),
    /// Round ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Converts a terminal verdict; `None` for [`Verdict::Undecided`].
    pub fn from_verdict(verdict: Verdict) -> Option<Self> {
        match verdict {
            Verdict::Undecided => None,
            Verdict::Winner(player) => Some(Outcome::Winner(player)),
            Verdict::Draw => Some(Outcome::Draw),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Counters for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Rounds won.
    pub win: u32,
    /// Rounds drawn.
    pub draw: u32,
    /// Rounds lost.
    pub lose: u32,
}

impl ScoreRecord {
    /// Rounds played.
    pub fn total(&self) -> u32 {
        self.win + self.draw + self.lose
    }
}

/// Tallies for both players.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    cross: ScoreRecord,
    nought: ScoreRecord,
}

impl Scoreboard {
    /// Creates a scoreboard with every counter at zero.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for `player`.
    pub fn record(&self, player: Player) -> &ScoreRecord {
        match player {
            Player::Cross => &self.cross,
            Player::Nought => &self.nought,
        }
    }

    fn record_mut(&mut self, player: Player) -> &mut ScoreRecord {
        match player {
            Player::Cross => &mut self.cross,
            Player::Nought => &mut self.nought,
        }
    }

    /// Rounds recorded so far.
    pub fn rounds(&self) -> u32 {
        self.cross.total()
    }

    /// Applies a finished round: the winner gains a win and the other
    /// player a loss, or both gain a draw.
    #[instrument(skip(self))]
    pub fn update(&mut self, outcome: Outcome) {
        for player in Player::ALL {
            let record = self.record_mut(player);
            if outcome.is_draw() {
                record.draw += 1;
            } else if outcome.winner() == Some(player) {
                record.win += 1;
            } else {
                record.lose += 1;
            }
        }
        info!(
            %outcome,
            cross = ?self.cross,
            nought = ?self.nought,
            "Scores updated"
        );
    }
}
