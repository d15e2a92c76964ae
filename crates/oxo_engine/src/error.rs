//! Error types for board writes and session commands.

use crate::turn::Phase;

/// Error that can occur when writing a mark to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is past the last cell.
    #[display("Cell {} is out of range for a board of {} cells", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
}

impl std::error::Error for MoveError {}

/// Error returned when a command violates the session contract.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// The command is not accepted in the current phase.
    #[display("{} is not allowed while {}", command, phase)]
    WrongPhase {
        /// Name of the rejected command.
        command: &'static str,
        /// Phase the session was in.
        phase: Phase,
    },

    /// The session has been exited and holds no state.
    #[display("Session has exited")]
    Exited,

    /// The CPU was asked to move on a board with no empty cell.
    #[display("No move available for the CPU")]
    NoMoveAvailable,

    /// The mark could not be written.
    #[display("Invalid move: {}", _0)]
    #[from]
    Move(MoveError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(err) => Some(err),
            _ => None,
        }
    }
}
