//! Win detection for square boards of any supported size.

use crate::board::{Board, Cell, Player};
use tracing::instrument;

/// Number of winning lines on a board of edge `size`.
fn line_count(size: usize) -> usize {
    2 * size + 2
}

/// Index of the `k`-th cell of winning line `line`.
///
/// Lines are numbered in scan order: main diagonal, anti-diagonal,
/// rows top to bottom, columns left to right.
fn line_cell(size: usize, line: usize, k: usize) -> usize {
    match line {
        0 => k * (size + 1),
        1 => (size - 1) * (k + 1),
        row if row < 2 + size => (row - 2) * size + k,
        column => (column - 2 - size) + k * size,
    }
}

/// The player owning every cell of `line`, if any.
fn line_owner(board: &Board, line: usize) -> Option<Player> {
    let size = board.size();
    let cells = board.cells();
    let Cell::Occupied(first) = cells[line_cell(size, line, 0)] else {
        return None;
    };
    (1..size)
        .all(|k| cells[line_cell(size, line, k)] == Cell::Occupied(first))
        .then_some(first)
}

/// First complete line in scan order, with its owner.
pub(crate) fn first_complete_line(board: &Board) -> Option<(usize, Player)> {
    let size = board.size();

    // Nobody can own a line before placing `size` marks.
    if Player::ALL.iter().all(|&player| board.count(player) < size) {
        return None;
    }

    (0..line_count(size)).find_map(|line| line_owner(board, line).map(|owner| (line, owner)))
}

/// All winning lines for a board of edge `size`, in scan order.
#[instrument]
pub fn lines(size: usize) -> Vec<Vec<usize>> {
    (0..line_count(size))
        .map(|line| (0..size).map(|k| line_cell(size, line, k)).collect())
        .collect()
}

/// Returns the winner if some line is fully owned by one player.
pub fn check_winner(board: &Board) -> Option<Player> {
    first_complete_line(board).map(|(_, owner)| owner)
}

/// Cell indices of the winning line, using the same scan as [`check_winner`].
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board) -> Option<Vec<usize>> {
    let size = board.size();
    first_complete_line(board)
        .map(|(line, _)| (0..size).map(|k| line_cell(size, line, k)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: &mut Board, indices: &[usize], player: Player) {
        for &index in indices {
            board.set(index, player).unwrap();
        }
    }

    #[test]
    fn test_lines_three_by_three() {
        let lines = lines(3);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], vec![0, 4, 8]);
        assert_eq!(lines[1], vec![2, 4, 6]);
        assert_eq!(lines[2], vec![0, 1, 2]);
        assert_eq!(lines[4], vec![6, 7, 8]);
        assert_eq!(lines[5], vec![0, 3, 6]);
        assert_eq!(lines[7], vec![2, 5, 8]);
    }

    #[test]
    fn test_lines_five_by_five_diagonals() {
        let lines = lines(5);
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], vec![0, 6, 12, 18, 24]);
        assert_eq!(lines[1], vec![4, 8, 12, 16, 20]);
        assert_eq!(lines[11], vec![4, 9, 14, 19, 24]);
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new(3)), None);
        assert_eq!(winning_line(&Board::new(5)), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new(3);
        mark(&mut board, &[0, 1, 2], Player::Cross);
        assert_eq!(check_winner(&board), Some(Player::Cross));
        assert_eq!(winning_line(&board), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_winner_anti_diagonal_four() {
        let mut board = Board::new(4);
        mark(&mut board, &[3, 6, 9, 12], Player::Nought);
        mark(&mut board, &[0, 1, 2], Player::Cross);
        assert_eq!(check_winner(&board), Some(Player::Nought));
        assert_eq!(winning_line(&board), Some(vec![3, 6, 9, 12]));
    }

    #[test]
    fn test_winner_last_column_five() {
        let mut board = Board::new(5);
        mark(&mut board, &[4, 9, 14, 19, 24], Player::Cross);
        assert_eq!(winning_line(&board), Some(vec![4, 9, 14, 19, 24]));
    }

    #[test]
    fn test_early_win_on_large_board_is_found() {
        // Five crosses and four noughts: still detected with most cells empty.
        let mut board = Board::new(5);
        mark(&mut board, &[10, 11, 12, 13, 14], Player::Cross);
        mark(&mut board, &[0, 6, 18, 24], Player::Nought);
        assert_eq!(check_winner(&board), Some(Player::Cross));
    }

    #[test]
    fn test_diagonal_wins_scan_order_ties() {
        // Malformed board owning both the main diagonal and the top row.
        let mut board = Board::new(3);
        mark(&mut board, &[0, 1, 2, 4, 8], Player::Cross);
        assert_eq!(winning_line(&board), Some(vec![0, 4, 8]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new(3);
        mark(&mut board, &[0, 1], Player::Cross);
        mark(&mut board, &[2], Player::Nought);
        assert_eq!(check_winner(&board), None);
    }
}
