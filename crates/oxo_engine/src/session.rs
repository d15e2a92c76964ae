//! Game session: owns the board, the scores and the turn controller, and
//! drives them from a stream of [`Command`]s.

use crate::action::Move;
use crate::board::{Board, Player};
use crate::command::{Command, Event, MoveReport};
use crate::error::SessionError;
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::rules::{Verdict, evaluate, winning_line};
use crate::score::{Outcome, Scoreboard};
use crate::strategy::{PlayerInfo, Strategy, choose_move};
use crate::turn::{Phase, TurnController};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

/// One human-versus-CPU session.
///
/// Scores accumulate across rounds until the session exits. All
/// randomness (first player, random moves, alternating delegate) comes
/// from `R`, so a seeded generator makes a session reproducible.
#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    board: Board,
    scores: Scoreboard,
    turns: TurnController,
    strategy: Option<Strategy>,
    history: Vec<Move>,
    rng: R,
}

impl GameSession<StdRng> {
    /// Creates a session on a `size` board seeded from OS entropy.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self::with_rng(size, StdRng::from_entropy())
    }

    /// Creates a session whose randomness is seeded with `seed`.
    #[instrument]
    pub fn seeded(size: usize, seed: u64) -> Self {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Creates a session on a `size` board (clamped to 3..=5) using `rng`.
    pub fn with_rng(size: usize, rng: R) -> Self {
        let board = Board::new(size);
        info!(size = board.size(), "Creating game session");
        Self {
            board,
            scores: Scoreboard::new(),
            turns: TurnController::new(),
            strategy: None,
            history: Vec::new(),
            rng,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Scores accumulated so far.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// The turn controller.
    pub fn turns(&self) -> &TurnController {
        &self.turns
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.turns.phase()
    }

    /// Moves of the current round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Seating and CPU strategy, once both have been picked.
    pub fn player_info(&self) -> Option<PlayerInfo> {
        Some(PlayerInfo {
            seats: self.turns.seats()?,
            strategy: self.strategy?,
        })
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Applies one command and returns the events it produced.
    ///
    /// When the command leaves the CPU to move, the CPU's move is applied
    /// before returning and its [`Event::MarkPlaced`] is included.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::WrongPhase`] when the command is not valid in
    /// the current phase, [`SessionError::Move`] for an out-of-range or
    /// occupied cell, and [`SessionError::Exited`] after [`Command::Exit`].
    #[instrument(skip(self), fields(phase = %self.turns.phase()))]
    pub fn handle(&mut self, command: Command) -> Result<Vec<Event>, SessionError> {
        if self.turns.phase() == Phase::Exited {
            warn!(command = command.name(), "Command after exit");
            return Err(SessionError::Exited);
        }

        let mut events = Vec::new();
        match command {
            Command::PickSymbol(human) => {
                let (seats, first) = self.turns.pick_symbol(human, &mut self.rng)?;
                events.push(Event::SymbolsAssigned { seats, first });
            }
            Command::PickStrategy(strategy) => {
                let first = self.turns.pick_strategy()?;
                self.strategy = Some(strategy);
                info!(%strategy, description = strategy.description(), "CPU strategy chosen");
                events.push(Event::RoundStarted {
                    size: self.board.size(),
                    first,
                });
                self.play_cpu_turn(&mut events)?;
            }
            Command::PlaceMark(index) => {
                let phase = self.turns.phase();
                let human = match (phase, self.turns.seats()) {
                    (Phase::InProgress(current), Some(seats)) if current == seats.human => current,
                    _ => {
                        return Err(SessionError::WrongPhase {
                            command: command.name(),
                            phase,
                        });
                    }
                };
                self.apply_mark(index, human, false, &mut events)?;
                self.play_cpu_turn(&mut events)?;
            }
            Command::Reset => self.reset(&mut events)?,
            Command::Exit => {
                self.turns.exit()?;
                self.board = Board::new(self.board.size());
                self.scores = Scoreboard::new();
                self.strategy = None;
                self.history.clear();
                events.push(Event::Exited);
            }
        }

        Ok(events)
    }

    /// Clears the board and starts a new round.
    ///
    /// Resetting an undecided round counts as a withdrawal and credits the
    /// CPU with the win, whoever was ahead.
    fn reset(&mut self, events: &mut Vec<Event>) -> Result<(), SessionError> {
        let phase = self.turns.phase();
        let seats = match (phase, self.turns.seats()) {
            (Phase::InProgress(_) | Phase::RoundOver(_), Some(seats)) => seats,
            _ => {
                return Err(SessionError::WrongPhase {
                    command: Command::Reset.name(),
                    phase,
                });
            }
        };

        if evaluate(&self.board) == Verdict::Undecided {
            self.scores.update(Outcome::Winner(seats.cpu));
            info!(winner = %seats.cpu, "Round withdrawn");
            events.push(Event::Withdrawal {
                winner: seats.cpu,
                scores: self.scores.clone(),
            });
        }

        self.board = Board::new(self.board.size());
        self.history.clear();
        let first = self.turns.restart(&mut self.rng)?;
        events.push(Event::RoundStarted {
            size: self.board.size(),
            first,
        });
        self.play_cpu_turn(events)
    }

    /// Lets the CPU move if it is its turn.
    fn play_cpu_turn(&mut self, events: &mut Vec<Event>) -> Result<(), SessionError> {
        if !self.turns.is_cpu_turn() {
            return Ok(());
        }
        let info = self.player_info().ok_or(SessionError::WrongPhase {
            command: "cpu move",
            phase: self.turns.phase(),
        })?;
        let choice =
            choose_move(&self.board, &info, &mut self.rng).ok_or(SessionError::NoMoveAvailable)?;
        debug!(index = choice.index(), strategy = %choice.strategy(), "CPU move");
        self.apply_mark(*choice.index(), info.seats.cpu, true, events)
    }

    /// Writes a mark, evaluates the board, updates scores and turns.
    fn apply_mark(
        &mut self,
        index: usize,
        player: Player,
        by_cpu: bool,
        events: &mut Vec<Event>,
    ) -> Result<(), SessionError> {
        self.board.set(index, player)?;
        let mark = Move::new(player, index);
        self.history.push(mark);

        let verdict = evaluate(&self.board);
        let line = match verdict {
            Verdict::Winner(_) => winning_line(&self.board),
            _ => None,
        };

        match Outcome::from_verdict(verdict) {
            Some(outcome) => {
                self.scores.update(outcome);
                self.turns.finish(outcome)?;
            }
            None => {
                self.turns.advance()?;
            }
        }
        info!(%mark, by_cpu, %verdict, "Mark placed");

        self.assert_invariants();

        events.push(Event::MarkPlaced(MoveReport::new(
            mark,
            by_cpu,
            self.board.clone(),
            verdict,
            self.scores.clone(),
            line,
        )));
        Ok(())
    }

    /// Checks session invariants in debug builds.
    fn assert_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = SessionInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Session invariants violated");
        }
    }
}
