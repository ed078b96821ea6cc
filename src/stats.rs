//! Win-probability estimation over a range of board sizes.
//!
//! For each side length in an inclusive range, plays a fixed number of
//! random games and records how often Player One wins. Each game runs on
//! its own board; the connectivity structures are never shared between
//! games.

use std::time::Instant;

use fastrand::Rng;

use crate::board::{BoardError, Player};
use crate::playout::simulate_game;

/// Player One win-rate estimates for board sizes `min_size..=max_size`.
pub struct WinStats {
    min_size: usize,
    max_size: usize,
    games: usize,
    p1_estimates: Vec<f64>,
}

impl WinStats {
    /// Plays `games` random games per board size and collects the
    /// Player One win ratio for each, printing a per-size timing line.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `min_size` is zero. Callers
    /// are expected to pass `min_size <= max_size` and `games > 0`; an
    /// empty range simply yields no estimates.
    pub fn collect(
        min_size: usize,
        max_size: usize,
        games: usize,
        rng: &mut Rng,
    ) -> Result<Self, BoardError> {
        let mut p1_estimates = Vec::new();

        for size in min_size..=max_size {
            let started = Instant::now();
            let mut p1_wins = 0;
            for _ in 0..games {
                if simulate_game(size, rng)? == Player::One {
                    p1_wins += 1;
                }
            }
            let elapsed = started.elapsed().as_secs_f64();
            println!("size {size}: {games} games in {elapsed:.3}s");
            p1_estimates.push(p1_wins as f64 / games as f64);
        }

        Ok(Self {
            min_size,
            max_size,
            games,
            p1_estimates,
        })
    }

    /// Smallest board size covered by the sweep.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Largest board size covered by the sweep.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Number of games played per board size.
    pub fn games(&self) -> usize {
        self.games
    }

    /// Estimated probability that Player One wins on an `n`-by-`n` board,
    /// or `None` if `n` is outside the collected range.
    pub fn p1_win_estimate(&self, n: usize) -> Option<f64> {
        if n < self.min_size || n > self.max_size {
            return None;
        }
        self.p1_estimates.get(n - self.min_size).copied()
    }

    /// Estimated probability that Player Two wins on an `n`-by-`n` board.
    pub fn p2_win_estimate(&self, n: usize) -> Option<f64> {
        self.p1_win_estimate(n).map(|p1| 1.0 - p1)
    }
}
