//! Random game simulation.
//!
//! A playout fills a board with uniformly random legal placements,
//! alternating players, until one side completes its connection. Hex
//! admits no draw, so a playout always terminates with a winner; the
//! statistics sweep in [`crate::stats`] runs many of them per board size.

use fastrand::Rng;

use crate::board::{BoardError, HexBoard, Player};

/// Plays random tiles on `board` until one player wins.
///
/// Placement alternates starting with Player One, which matches play
/// from an empty board. The board is left in its final state so callers
/// can inspect the winning position afterwards.
pub fn play_random_game(board: &mut HexBoard, rng: &mut Rng) -> Player {
    let mut current = Player::One;

    while !board.has_player_one_won() && !board.has_player_two_won() {
        let (row, col) = random_unset_tile(board, rng);
        board.set_tile(row, col, current);
        current = current.other();
    }

    if board.has_player_one_won() {
        Player::One
    } else {
        Player::Two
    }
}

/// Simulates one random game on a fresh board of the given size.
///
/// # Errors
///
/// Returns [`BoardError::InvalidSize`] if `size` is zero.
pub fn simulate_game(size: usize, rng: &mut Rng) -> Result<Player, BoardError> {
    let mut board = HexBoard::new(size)?;
    Ok(play_random_game(&mut board, rng))
}

/// Rejection-samples coordinates until an unset cell turns up.
///
/// The win-query loop above guarantees at least one cell is still unset
/// whenever this runs: a full Hex board always has a winner.
fn random_unset_tile(board: &HexBoard, rng: &mut Rng) -> (usize, usize) {
    loop {
        let row = rng.usize(0..board.size());
        let col = rng.usize(0..board.size());
        if !board.is_set(row, col) {
            return (row, col);
        }
    }
}
