//! Tests for CPU move selection.

use oxo_engine::{
    Board, Player, PlayerInfo, Seats, Strategy, Verdict, choose_move, evaluate, minimax,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{HashMap, HashSet};

fn info(strategy: Strategy, cpu: Player) -> PlayerInfo {
    PlayerInfo {
        seats: Seats::from_human(cpu.opponent()),
        strategy,
    }
}

/// Plays a full 3x3 game; `pick` returns the move for the side to play.
fn play_out<F>(first: Player, mut pick: F) -> Verdict
where
    F: FnMut(&Board, Player) -> usize,
{
    let mut board = Board::new(3);
    let mut to_move = first;
    loop {
        let verdict = evaluate(&board);
        if verdict.is_terminal() {
            return verdict;
        }
        let index = pick(&board, to_move);
        board.set(index, to_move).unwrap();
        to_move = to_move.opponent();
    }
}

#[test]
fn test_minimax_takes_winning_move() {
    // . O O / . X . / . . X  with crosses to play: cell 0 wins.
    let mut board = Board::new(3);
    board.set(4, Player::Cross).unwrap();
    board.set(8, Player::Cross).unwrap();
    board.set(1, Player::Nought).unwrap();
    board.set(2, Player::Nought).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let choice = choose_move(&board, &info(Strategy::Minimax, Player::Cross), &mut rng).unwrap();
    assert_eq!(*choice.index(), 0);
    board.set(0, Player::Cross).unwrap();
    assert_eq!(evaluate(&board), Verdict::Winner(Player::Cross));
    assert_eq!(*choice.strategy(), Strategy::Minimax);
}

#[test]
fn test_minimax_self_play_draws() {
    for first in Player::ALL {
        let verdict = play_out(first, |board, player| {
            minimax::best_move(board, player).unwrap()
        });
        assert_eq!(verdict, Verdict::Draw, "{first} opened");
    }
}

#[test]
fn test_minimax_never_loses_to_random() {
    let mut rng = StdRng::seed_from_u64(77);
    for game in 0..60 {
        let cpu = if game % 2 == 0 {
            Player::Cross
        } else {
            Player::Nought
        };
        let first = if game % 4 < 2 { cpu } else { cpu.opponent() };
        let minimax_info = info(Strategy::Minimax, cpu);
        let random_info = info(Strategy::Random, cpu.opponent());
        let verdict = play_out(first, |board, player| {
            let info = if player == cpu {
                &minimax_info
            } else {
                &random_info
            };
            *choose_move(board, info, &mut rng).unwrap().index()
        });
        assert_ne!(verdict, Verdict::Winner(cpu.opponent()), "game {game}");
    }
}

#[test]
fn test_random_only_picks_empty_cells_and_covers_all() {
    let mut board = Board::new(3);
    board.set(4, Player::Cross).unwrap();
    board.set(0, Player::Nought).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let info = info(Strategy::Random, Player::Cross);
    let mut seen = HashSet::new();
    for _ in 0..500 {
        let choice = choose_move(&board, &info, &mut rng).unwrap();
        assert!(board.is_free(*choice.index()));
        seen.insert(*choice.index());
    }
    assert_eq!(seen, board.empty_indices().into_iter().collect());
}

#[test]
fn test_alternating_delegates_to_both_others() {
    let mut board = Board::new(3);
    board.set(4, Player::Cross).unwrap();
    let mut rng = StdRng::seed_from_u64(123);
    let info = info(Strategy::Alternating, Player::Nought);
    let mut counts: HashMap<Strategy, u32> = HashMap::new();
    for _ in 0..1000 {
        let choice = choose_move(&board, &info, &mut rng).unwrap();
        assert!(board.is_free(*choice.index()));
        *counts.entry(*choice.strategy()).or_default() += 1;
    }
    assert_eq!(counts.get(&Strategy::Alternating), None);
    let random = counts[&Strategy::Random];
    let minimax = counts[&Strategy::Minimax];
    assert!((400..=600).contains(&random), "random {random}");
    assert!((400..=600).contains(&minimax), "minimax {minimax}");
}

#[test]
fn test_decided_board_yields_no_choice() {
    let mut board = Board::new(3);
    for index in [0, 4, 8] {
        board.set(index, Player::Nought).unwrap();
    }
    let mut rng = StdRng::seed_from_u64(1);
    for strategy in [Strategy::Random, Strategy::Minimax, Strategy::Alternating] {
        assert!(choose_move(&board, &info(strategy, Player::Cross), &mut rng).is_none());
    }
}

#[test]
fn test_strategy_names_and_descriptions() {
    assert_eq!("minimax".parse::<Strategy>().unwrap(), Strategy::Minimax);
    assert_eq!(
        "schizophrenia".parse::<Strategy>().unwrap(),
        Strategy::Alternating
    );
    assert_eq!(Strategy::Alternating.to_string(), "alternating");
    assert_eq!(
        Strategy::Random.description(),
        "Will behave randomly with no strategy"
    );
}
