//! Depth-capped minimax for the CPU.
//!
//! Scores are from the CPU's point of view: a CPU win is `+1`, a loss
//! `-1`, a draw `0`. Branches that run deeper than [`MAX_DEPTH`] plies are
//! scored as draws, which keeps 5x5 boards tractable at the cost of
//! exactness there.
//!
//! At the root the first move (ascending cell index) whose score is
//! strictly greater than every earlier one is kept, so ties go to the
//! lowest index. Alpha-beta cut-offs are applied below the root with the
//! root's best score as the lower bound: a sibling that cannot beat it is
//! only ever proven "not better", never mis-scored above it, so the chosen
//! index and its score match an exhaustive search.
//!
//! The search runs on one private copy of the caller's board and undoes
//! each trial mark before trying the next.

use crate::board::{Board, Player};
use crate::rules::{Verdict, verdict_of};
use tracing::{debug, instrument, trace};

/// Deepest ply that is still expanded; deeper branches score as draws.
pub const MAX_DEPTH: usize = 8;

/// Score of a CPU win.
pub const WIN: i8 = 1;

/// Score of a CPU loss.
pub const LOSS: i8 = -1;

/// Score of a draw, including branches cut off by depth.
pub const DRAW: i8 = 0;

/// Best move and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    /// Cell index.
    pub index: usize,
    /// Minimax score of the position after playing `index`.
    pub score: i8,
}

struct Search {
    board: Board,
    maximizer: Player,
    max_depth: usize,
    nodes: u64,
}

impl Search {
    /// Minimax value of the scratch board with `to_move` to play.
    ///
    /// Fail-soft alpha-beta: the result is exact inside `(alpha, beta)`,
    /// at most `alpha` when the true value is, at least `beta` likewise.
    fn value(&mut self, to_move: Player, depth: usize, mut alpha: i8, mut beta: i8) -> i8 {
        self.nodes += 1;

        match verdict_of(&self.board) {
            Verdict::Winner(winner) if winner == self.maximizer => return WIN,
            Verdict::Winner(_) => return LOSS,
            Verdict::Draw => return DRAW,
            Verdict::Undecided => {}
        }

        if depth > self.max_depth {
            return DRAW;
        }

        let maximizing = to_move == self.maximizer;
        let mut best = if maximizing { i8::MIN } else { i8::MAX };

        for index in 0..self.board.len() {
            if !self.board.is_free(index) {
                continue;
            }
            self.board.place(index, to_move);
            let score = self.value(to_move.opponent(), depth + 1, alpha, beta);
            self.board.clear(index);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

/// Searches every empty cell of `board` for `maximizer` to play.
///
/// Returns `None` when the board is decided or has no empty cell.
pub fn search(board: &Board, maximizer: Player) -> Option<Scored> {
    search_to_depth(board, maximizer, MAX_DEPTH)
}

/// [`search`] with branches past `max_depth` plies scored as draws.
#[instrument(skip(board), fields(size = board.size(), filled = board.filled()))]
pub(crate) fn search_to_depth(
    board: &Board,
    maximizer: Player,
    max_depth: usize,
) -> Option<Scored> {
    if verdict_of(board).is_terminal() {
        return None;
    }

    let mut search = Search {
        board: board.clone(),
        maximizer,
        max_depth,
        nodes: 0,
    };
    let mut best: Option<Scored> = None;

    for index in 0..board.len() {
        if !board.is_free(index) {
            continue;
        }
        let floor = best.map_or(i8::MIN, |scored| scored.score);

        search.board.place(index, maximizer);
        let score = search.value(maximizer.opponent(), 1, floor, i8::MAX);
        search.board.clear(index);
        trace!(index, score, "Root move scored");

        if score > floor {
            best = Some(Scored { index, score });
        }
        if floor == WIN || score == WIN {
            break;
        }
    }

    debug!(?best, nodes = search.nodes, "Minimax search finished");
    best
}

/// CPU move under the minimax policy.
///
/// An untouched board always opens in cell 0 without searching.
pub fn best_move(board: &Board, maximizer: Player) -> Option<usize> {
    if board.is_blank() {
        return Some(0);
    }
    search(board, maximizer).map(|scored| scored.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::evaluate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    use Player::{Cross as X, Nought as O};

    fn board_from(size: usize, marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new(size);
        for &(index, player) in marks {
            board.set(index, player).unwrap();
        }
        board
    }

    /// Exhaustive depth-capped minimax with copies and no cut-offs.
    fn reference(
        board: &Board,
        to_move: Player,
        maximizer: Player,
        depth: usize,
    ) -> (i8, Option<usize>) {
        capped_reference(board, to_move, maximizer, depth, MAX_DEPTH)
    }

    fn capped_reference(
        board: &Board,
        to_move: Player,
        maximizer: Player,
        depth: usize,
        max_depth: usize,
    ) -> (i8, Option<usize>) {
        match evaluate(board) {
            Verdict::Winner(winner) if winner == maximizer => return (WIN, None),
            Verdict::Winner(_) => return (LOSS, None),
            Verdict::Draw => return (DRAW, None),
            Verdict::Undecided => {}
        }
        if depth > max_depth {
            return (DRAW, None);
        }
        let maximizing = to_move == maximizer;
        let mut best = if maximizing { i8::MIN } else { i8::MAX };
        let mut best_index = None;
        for index in board.empty_indices() {
            let mut next = board.clone();
            next.set(index, to_move).unwrap();
            let (score, _) =
                capped_reference(&next, to_move.opponent(), maximizer, depth + 1, max_depth);
            if depth == 0 && score > best {
                best_index = Some(index);
            }
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        (best, best_index)
    }

    fn random_position(size: usize, plies: usize, rng: &mut StdRng) -> Option<(Board, Player)> {
        let mut board = Board::new(size);
        let mut to_move = X;
        for _ in 0..plies {
            let index = *board.empty_indices().choose(rng)?;
            board.set(index, to_move).unwrap();
            to_move = to_move.opponent();
            if evaluate(&board).is_terminal() {
                return None;
            }
        }
        Some((board, to_move))
    }

    #[test]
    fn test_blank_board_opens_in_corner() {
        for size in 3..=5 {
            assert_eq!(best_move(&Board::new(size), X), Some(0));
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X . / O O . / . . .  with X to play.
        let board = board_from(3, &[(0, X), (1, X), (3, O), (4, O)]);
        assert_eq!(best_move(&board, X), Some(2));
        assert_eq!(search(&board, X).unwrap().score, WIN);
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // O O . / . X . / . . X  with X to play: O threatens cell 2.
        let board = board_from(3, &[(0, O), (1, O), (4, X), (8, X)]);
        assert_eq!(best_move(&board, X), Some(2));
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // Every reply draws; the first empty cell is kept.
        // X O X / X O O / O X .  with X to play: only cell 8 remains.
        let board = board_from(
            3,
            &[(0, X), (1, O), (2, X), (3, X), (4, O), (5, O), (6, O), (7, X)],
        );
        assert_eq!(search(&board, X), Some(Scored { index: 8, score: DRAW }));

        // . . . / . X . / . . .  with O to play: the four corners draw,
        // edges lose, so the lowest corner wins the tie.
        let board = board_from(3, &[(4, X)]);
        assert_eq!(search(&board, O), Some(Scored { index: 0, score: DRAW }));
    }

    #[test]
    fn test_decided_board_has_no_move() {
        let board = board_from(3, &[(0, X), (1, X), (2, X), (3, O), (4, O)]);
        assert_eq!(search(&board, O), None);
    }

    #[test]
    fn test_does_not_mutate_callers_board() {
        let board = board_from(4, &[(0, X), (5, O), (10, X), (15, O), (3, X), (12, O)]);
        let before = board.clone();
        let _ = best_move(&board, X);
        assert_eq!(board, before);
    }

    #[test]
    fn test_matches_exhaustive_search_three_by_three() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut checked = 0;
        while checked < 40 {
            let plies = 1 + checked % 6;
            let Some((board, to_move)) = random_position(3, plies, &mut rng) else {
                continue;
            };
            let (score, index) = reference(&board, to_move, to_move, 0);
            let found = search(&board, to_move).unwrap();
            assert_eq!(Some(found.index), index, "board {:?}", board.cells());
            assert_eq!(found.score, score, "board {:?}", board.cells());
            checked += 1;
        }
    }

    #[test]
    fn test_matches_exhaustive_search_four_by_four() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut checked = 0;
        while checked < 15 {
            let Some((board, to_move)) = random_position(4, 10, &mut rng) else {
                continue;
            };
            let (score, index) = reference(&board, to_move, to_move, 0);
            let found = search(&board, to_move).unwrap();
            assert_eq!(Some(found.index), index, "board {:?}", board.cells());
            assert_eq!(found.score, score, "board {:?}", board.cells());
            checked += 1;
        }
    }

    #[test]
    fn test_depth_cap_is_eight_plies() {
        assert_eq!(MAX_DEPTH, 8);
    }

    #[test]
    fn test_wins_past_the_cap_score_as_draws() {
        // X . O / . O . / . . X  with X to play: 6 blocks O and forks
        // 3 and 7, so X wins on the third ply.
        let board = board_from(3, &[(0, X), (8, X), (4, O), (2, O)]);
        assert_eq!(search(&board, X), Some(Scored { index: 6, score: WIN }));
        assert_eq!(
            search_to_depth(&board, X, 2),
            Some(Scored { index: 6, score: WIN })
        );
        // One ply short of the win: every branch through 6 is cut off.
        assert_eq!(
            search_to_depth(&board, X, 1),
            Some(Scored { index: 6, score: DRAW })
        );
        // The unpruned reference agrees under the same cap.
        let (score, index) = capped_reference(&board, X, X, 0, 1);
        assert_eq!((score, index), (DRAW, Some(6)));
    }

    #[test]
    fn test_matches_exhaustive_search_past_the_cap() {
        // 11 empty cells: branches run past the cap and are cut to draws.
        let mut rng = StdRng::seed_from_u64(5);
        let mut checked = 0;
        while checked < 3 {
            let Some((board, to_move)) = random_position(4, 5, &mut rng) else {
                continue;
            };
            assert!(board.empty_indices().len() > MAX_DEPTH);
            let (score, index) = reference(&board, to_move, to_move, 0);
            let found = search(&board, to_move).unwrap();
            assert_eq!(Some(found.index), index, "board {:?}", board.cells());
            assert_eq!(found.score, score, "board {:?}", board.cells());
            checked += 1;
        }
    }
}
