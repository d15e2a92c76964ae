//! Turn controller: session lifecycle and whose move it is.
//!
//! ```text
//! AwaitingSymbolPick --pick_symbol--> AwaitingStrategyPick --pick_strategy--> InProgress
//! InProgress --advance--> InProgress
//! InProgress --finish--> RoundOver --restart--> InProgress
//! any --exit--> Exited
//! ```

use crate::board::Player;
use crate::error::SessionError;
use crate::score::Outcome;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Which identity the human and the CPU play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats {
    /// Identity picked by the human.
    pub human: Player,
    /// The remaining identity, played by the CPU.
    pub cpu: Player,
}

impl Seats {
    /// Seats the human as `human` and the CPU as the other identity.
    pub fn from_human(human: Player) -> Self {
        Self {
            human,
            cpu: human.opponent(),
        }
    }
}

/// Returns the human if `current` is the CPU, otherwise the CPU.
pub fn swap_player(current: Player, seats: Seats) -> Player {
    if current == seats.cpu {
        seats.human
    } else {
        seats.cpu
    }
}

/// Coarse lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to choose crosses or noughts.
    AwaitingSymbolPick,
    /// Waiting for the CPU strategy.
    AwaitingStrategyPick,
    /// A round is being played; the player to move.
    InProgress(Player),
    /// The round is decided.
    RoundOver(Outcome),
    /// The session was exited.
    Exited,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingSymbolPick => write!(f, "awaiting symbol pick"),
            Phase::AwaitingStrategyPick => write!(f, "awaiting strategy pick"),
            Phase::InProgress(player) => write!(f, "in progress ({} to move)", player),
            Phase::RoundOver(outcome) => write!(f, "round over ({})", outcome),
            Phase::Exited => write!(f, "exited"),
        }
    }
}

/// Tracks the lifecycle phase and the seating of both players.
#[derive(Debug, Clone)]
pub struct TurnController {
    phase: Phase,
    seats: Option<Seats>,
    first: Option<Player>,
}

impl TurnController {
    /// Creates a controller waiting for the symbol pick.
    #[instrument]
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingSymbolPick,
            seats: None,
            first: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seating, once the symbol has been picked.
    pub fn seats(&self) -> Option<Seats> {
        self.seats
    }

    /// Player to move, while a round is in progress.
    pub fn current(&self) -> Option<Player> {
        match self.phase {
            Phase::InProgress(player) => Some(player),
            _ => None,
        }
    }

    /// True when a round is in progress and the CPU is to move.
    pub fn is_cpu_turn(&self) -> bool {
        matches!(
            (self.phase, self.seats),
            (Phase::InProgress(current), Some(seats)) if current == seats.cpu
        )
    }

    fn reject(&self, command: &'static str) -> SessionError {
        match self.phase {
            Phase::Exited => SessionError::Exited,
            phase => SessionError::WrongPhase { command, phase },
        }
    }

    fn draw_first<R: Rng + ?Sized>(seats: Seats, rng: &mut R) -> Player {
        if rng.gen_bool(0.5) {
            seats.human
        } else {
            seats.cpu
        }
    }

    /// Seats the human as `human` and draws the first player 50/50.
    ///
    /// Returns the seating and the first player.
    #[instrument(skip(self, rng))]
    pub fn pick_symbol<R: Rng + ?Sized>(
        &mut self,
        human: Player,
        rng: &mut R,
    ) -> Result<(Seats, Player), SessionError> {
        if self.phase != Phase::AwaitingSymbolPick {
            return Err(self.reject("pick symbol"));
        }
        let seats = Seats::from_human(human);
        let first = Self::draw_first(seats, rng);
        self.seats = Some(seats);
        self.first = Some(first);
        self.phase = Phase::AwaitingStrategyPick;
        info!(?seats, ?first, "Symbols assigned");
        Ok((seats, first))
    }

    /// Starts the first round with the player drawn at symbol pick.
    #[instrument(skip(self))]
    pub fn pick_strategy(&mut self) -> Result<Player, SessionError> {
        match (self.phase, self.first) {
            (Phase::AwaitingStrategyPick, Some(first)) => {
                self.phase = Phase::InProgress(first);
                info!(?first, "Round started");
                Ok(first)
            }
            _ => Err(self.reject("pick strategy")),
        }
    }

    /// Hands the move to the other player after a non-terminal move.
    #[instrument(skip(self))]
    pub fn advance(&mut self) -> Result<Player, SessionError> {
        match (self.phase, self.seats) {
            (Phase::InProgress(current), Some(seats)) => {
                let next = swap_player(current, seats);
                self.phase = Phase::InProgress(next);
                debug!(?current, ?next, "Turn advanced");
                Ok(next)
            }
            _ => Err(self.reject("advance")),
        }
    }

    /// Ends the round with `outcome`.
    #[instrument(skip(self))]
    pub fn finish(&mut self, outcome: Outcome) -> Result<(), SessionError> {
        if !matches!(self.phase, Phase::InProgress(_)) {
            return Err(self.reject("finish"));
        }
        self.phase = Phase::RoundOver(outcome);
        info!(%outcome, "Round over");
        Ok(())
    }

    /// Starts a new round with a freshly drawn first player.
    #[instrument(skip(self, rng))]
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Player, SessionError> {
        match (self.phase, self.seats) {
            (Phase::InProgress(_) | Phase::RoundOver(_), Some(seats)) => {
                let first = Self::draw_first(seats, rng);
                self.first = Some(first);
                self.phase = Phase::InProgress(first);
                info!(?first, "Round restarted");
                Ok(first)
            }
            _ => Err(self.reject("reset")),
        }
    }

    /// Terminates the session. Every later transition is rejected.
    #[instrument(skip(self))]
    pub fn exit(&mut self) -> Result<(), SessionError> {
        if self.phase == Phase::Exited {
            return Err(SessionError::Exited);
        }
        self.phase = Phase::Exited;
        self.seats = None;
        self.first = None;
        info!("Session exited");
        Ok(())
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
