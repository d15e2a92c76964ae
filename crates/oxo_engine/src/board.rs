//! Board model: a square grid of cells in row-major order.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest supported board edge.
pub const MIN_SIZE: usize = 3;

/// Largest supported board edge.
pub const MAX_SIZE: usize = 5;

/// Board edge used when none is configured.
pub const DEFAULT_SIZE: usize = 3;

/// One of the two player identities in a session.
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
pub enum Player {
    /// Crosses (X).
    #[strum(to_string = "cross", serialize = "x")]
    Cross,
    /// Noughts (O).
    #[strum(to_string = "nought", serialize = "o")]
    Nought,
}

impl Player {
    /// Both identities, in a fixed order.
    pub const ALL: [Player; 2] = [Player::Cross, Player::Nought];

    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// Single-character symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::Cross => 'X',
            Player::Nought => 'O',
        }
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    Empty,
    /// Marked by a player.
    Occupied(Player),
}

/// Square board of `size * size` cells.
///
/// Cells are indexed row-major: `index = row * size + column`. The only
/// public mutation is [`Board::set`], which writes a mark into an empty
/// cell; marks are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board, clamping `size` to [`MIN_SIZE`]..=[`MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Self {
        let size = size.clamp(MIN_SIZE, MAX_SIZE);
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Edge length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size * size`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true when the board has no cells. Boards built with
    /// [`Board::new`] hold at least nine, so this is false for them.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// True when `index` is in range and holds no mark.
    pub fn is_free(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// True when no cell has been marked.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| *cell == Cell::Empty)
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Number of marked cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    /// Marks `index` for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] when `index` is past the last cell
    /// and [`MoveError::CellOccupied`] when the cell already holds a mark.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn set(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        match self.get(index) {
            None => Err(MoveError::OutOfRange {
                index,
                len: self.len(),
            }),
            Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied(index)),
            Some(Cell::Empty) => {
                self.cells[index] = Cell::Occupied(player);
                Ok(())
            }
        }
    }

    /// Unchecked write used by search on its private scratch board.
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        debug_assert_eq!(self.cells[index], Cell::Empty);
        self.cells[index] = Cell::Occupied(player);
    }

    /// Undoes a [`Board::place`] on a scratch board.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}
