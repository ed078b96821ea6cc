//! Integration tests for random playouts and the statistics sweep.

use fastrand::Rng;

use hex_rust::board::{BoardError, HexBoard, Player};
use hex_rust::playout::{play_random_game, simulate_game};
use hex_rust::stats::WinStats;

#[test]
fn test_playout_always_produces_a_winner() {
    let mut rng = Rng::with_seed(12);
    for size in 1..=7 {
        let mut board = HexBoard::new(size).unwrap();
        let winner = play_random_game(&mut board, &mut rng);
        match winner {
            Player::One => assert!(board.has_player_one_won()),
            Player::Two => assert!(board.has_player_two_won()),
        }
    }
}

#[test]
fn test_playout_never_overfills_the_board() {
    let mut rng = Rng::with_seed(99);
    for _ in 0..20 {
        let mut board = HexBoard::new(5).unwrap();
        play_random_game(&mut board, &mut rng);
        // Rejection sampling only ever claims unset cells, so the counter
        // cannot wrap past zero.
        assert!(board.number_of_unset_tiles() <= 25);
    }
}

#[test]
fn test_winner_has_a_winning_path() {
    let mut rng = Rng::with_seed(7);
    let size = 6;
    let mut board = HexBoard::new(size).unwrap();
    let winner = play_random_game(&mut board, &mut rng);

    let mut on_path = 0;
    for row in 0..size {
        for col in 0..size {
            if board.is_on_winning_path(row, col).unwrap() {
                assert_eq!(board.get_player(row, col), Some(winner));
                on_path += 1;
            }
        }
    }
    // A chain across an n-by-n board needs at least n tiles.
    assert!(on_path >= size, "winning path has only {on_path} tiles");
}

#[test]
fn test_seeded_simulation_is_reproducible() {
    let mut first = Rng::with_seed(42);
    let mut second = Rng::with_seed(42);
    for size in 2..=5 {
        assert_eq!(
            simulate_game(size, &mut first).unwrap(),
            simulate_game(size, &mut second).unwrap()
        );
    }
}

#[test]
fn test_simulate_game_rejects_zero_size() {
    let mut rng = Rng::with_seed(1);
    match simulate_game(0, &mut rng) {
        Err(BoardError::InvalidSize) => {}
        other => panic!("expected invalid-size error, got {other:?}"),
    }
}

#[test]
fn test_stats_estimates_are_probabilities() {
    let mut rng = Rng::with_seed(3);
    let stats = WinStats::collect(1, 3, 20, &mut rng).unwrap();

    assert_eq!(stats.min_size(), 1);
    assert_eq!(stats.max_size(), 3);
    assert_eq!(stats.games(), 20);

    for n in 1..=3 {
        let p1 = stats.p1_win_estimate(n).unwrap();
        let p2 = stats.p2_win_estimate(n).unwrap();
        assert!((0.0..=1.0).contains(&p1));
        assert!((p1 + p2 - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_stats_out_of_range_size_yields_none() {
    let mut rng = Rng::with_seed(5);
    let stats = WinStats::collect(2, 4, 5, &mut rng).unwrap();
    assert_eq!(stats.p1_win_estimate(1), None);
    assert_eq!(stats.p1_win_estimate(5), None);
    assert_eq!(stats.p2_win_estimate(5), None);
}

#[test]
fn test_stats_on_one_by_one_boards() {
    // Player One always moves first and the single cell wins outright.
    let mut rng = Rng::with_seed(8);
    let stats = WinStats::collect(1, 1, 10, &mut rng).unwrap();
    assert_eq!(stats.p1_win_estimate(1), Some(1.0));
    assert_eq!(stats.p2_win_estimate(1), Some(0.0));
}
