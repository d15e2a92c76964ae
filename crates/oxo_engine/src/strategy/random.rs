//! Uniform random policy.

use crate::board::Board;
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks one empty cell uniformly at random.
pub fn pick<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_indices().choose(rng).copied()
}
