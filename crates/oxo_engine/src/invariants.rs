//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every move.
//! They are testable independently and checked by the session in debug
//! builds.

use crate::board::Player;
use crate::session::GameSession;
use rand::Rng;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the two players' mark counts differ by at most one.
pub struct BalancedMarks;

impl<R: Rng> Invariant<GameSession<R>> for BalancedMarks {
    fn holds(session: &GameSession<R>) -> bool {
        let board = session.board();
        board
            .count(Player::Cross)
            .abs_diff(board.count(Player::Nought))
            <= 1
    }

    fn description() -> &'static str {
        "Players alternate, so mark counts differ by at most one"
    }
}

/// Invariant: every round credited one side's win against the other's loss,
/// or a draw to both.
pub struct SymmetricScores;

impl<R: Rng> Invariant<GameSession<R>> for SymmetricScores {
    fn holds(session: &GameSession<R>) -> bool {
        let cross = session.scores().record(Player::Cross);
        let nought = session.scores().record(Player::Nought);
        cross.win == nought.lose && cross.lose == nought.win && cross.draw == nought.draw
    }

    fn description() -> &'static str {
        "Each win is matched by a loss and draws are shared"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (BalancedMarks, SymmetricScores);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Command, Strategy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_invariants_hold_for_new_session() {
        let session = GameSession::with_rng(3, StdRng::seed_from_u64(0));
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariants_hold_through_play() {
        let mut session = GameSession::with_rng(3, StdRng::seed_from_u64(8));
        session.handle(Command::PickSymbol(Player::Cross)).unwrap();
        session
            .handle(Command::PickStrategy(Strategy::Random))
            .unwrap();
        for _ in 0..3 {
            while let Some(index) = session.board().empty_indices().first().copied() {
                if session.turns().current().is_none() {
                    break;
                }
                session.handle(Command::PlaceMark(index)).unwrap();
                assert!(SessionInvariants::check_all(&session).is_ok());
            }
            session.handle(Command::Reset).unwrap();
            assert!(SessionInvariants::check_all(&session).is_ok());
        }
    }

    #[test]
    fn test_unbalanced_board_is_detected() {
        let mut session = GameSession::with_rng(3, StdRng::seed_from_u64(0));
        session.board_mut().set(0, Player::Cross).unwrap();
        session.board_mut().set(1, Player::Cross).unwrap();
        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            <BalancedMarks as Invariant<GameSession<StdRng>>>::description()
        );
    }
}
