//! CPU-versus-CPU self-play.

use oxo_engine::{
    Board, Outcome, Player, PlayerInfo, Scoreboard, Seats, SessionError, Strategy, choose_move,
    evaluate,
};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Strategies for both identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup {
    /// Strategy playing crosses.
    pub cross: Strategy,
    /// Strategy playing noughts.
    pub nought: Strategy,
}

impl Matchup {
    fn info(&self, player: Player) -> PlayerInfo {
        let strategy = match player {
            Player::Cross => self.cross,
            Player::Nought => self.nought,
        };
        PlayerInfo {
            seats: Seats {
                human: player.opponent(),
                cpu: player,
            },
            strategy,
        }
    }
}

/// Plays one round on a fresh board with `first` to move.
#[instrument(skip(rng))]
pub fn play_round<R: Rng + ?Sized>(
    size: usize,
    matchup: Matchup,
    first: Player,
    rng: &mut R,
) -> Result<Outcome, SessionError> {
    let mut board = Board::new(size);
    let mut to_move = first;
    loop {
        let choice = choose_move(&board, &matchup.info(to_move), rng)
            .ok_or(SessionError::NoMoveAvailable)?;
        board.set(*choice.index(), to_move)?;
        if let Some(outcome) = Outcome::from_verdict(evaluate(&board)) {
            debug!(%outcome, moves = board.filled(), "Round finished");
            return Ok(outcome);
        }
        to_move = to_move.opponent();
    }
}

/// Plays `rounds` rounds and tallies the results.
///
/// The opening player of each round is drawn 50/50, as in a session.
#[instrument(skip(rng))]
pub fn simulate<R: Rng + ?Sized>(
    rounds: u32,
    size: usize,
    matchup: Matchup,
    rng: &mut R,
) -> Result<Scoreboard, SessionError> {
    let mut scores = Scoreboard::new();
    for _ in 0..rounds {
        let first = if rng.gen_bool(0.5) {
            Player::Cross
        } else {
            Player::Nought
        };
        scores.update(play_round(size, matchup, first, rng)?);
    }
    info!(
        rounds,
        cross = ?scores.record(Player::Cross),
        nought = ?scores.record(Player::Nought),
        "Simulation finished"
    );
    Ok(scores)
}
