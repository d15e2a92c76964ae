//! Alternating policy: every call hands the move to another strategy.

use super::Strategy;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

/// Draws the delegate for one move, never [`Strategy::Alternating`].
pub fn delegate<R: Rng + ?Sized>(rng: &mut R) -> Strategy {
    let strategy = *Strategy::DELEGATES
        .choose(rng)
        .unwrap_or(&Strategy::Random);
    trace!(%strategy, "Alternating delegate drawn");
    strategy
}
