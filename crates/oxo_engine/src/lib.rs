//! Noughts and crosses engine.
//!
//! A human plays a CPU opponent on a square board between 3x3 and 5x5.
//! The engine owns the game state and nothing else: rendering and input
//! devices sit on the other side of the [`Command`]/[`Event`] boundary.
//!
//! # Architecture
//!
//! - **Board**: fixed-size grid of cells, row-major.
//! - **Rules**: win/draw evaluation over rows, columns and diagonals.
//! - **Score**: win/draw/lose tallies per player.
//! - **Turn**: coarse lifecycle and whose move it is.
//! - **Strategy**: CPU move selection (random, minimax, alternating).
//! - **Session**: orchestrates the above from a stream of commands.
//!
//! # Example
//!
//! ```
//! use oxo_engine::{Command, GameSession, Player, Strategy};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! # fn example() -> Result<(), oxo_engine::SessionError> {
//! let mut session = GameSession::with_rng(3, StdRng::seed_from_u64(7));
//! session.handle(Command::PickSymbol(Player::Cross))?;
//! let events = session.handle(Command::PickStrategy(Strategy::Minimax))?;
//! assert!(!events.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod action;
mod board;
mod command;
mod error;
mod invariants;
mod rules;
mod score;
mod session;
mod strategy;
mod turn;

pub use action::Move;
pub use board::{Board, Cell, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE, Player};
pub use command::{Command, Event, MoveReport};
pub use error::{MoveError, SessionError};
pub use invariants::{
    BalancedMarks, Invariant, InvariantSet, InvariantViolation, SessionInvariants,
    SymmetricScores,
};
pub use rules::{Verdict, evaluate, is_full, lines, winning_line};
pub use score::{Outcome, ScoreRecord, Scoreboard};
pub use session::GameSession;
pub use strategy::{Choice, MAX_DEPTH, PlayerInfo, Strategy, choose_move, minimax};
pub use turn::{Phase, Seats, TurnController, swap_player};
