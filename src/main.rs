//! Hex-Rust: Random-play Hex simulation.
//!
//! ## Usage
//!
//! - `hex-rust` - Play one random demo game and show the winning path
//! - `hex-rust demo [size]` - Same, with an explicit board size
//! - `hex-rust stats <min-size> <max-size> <games>` - Estimate per-size
//!   win probabilities from random games

use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use fastrand::Rng;

use hex_rust::board::{HexBoard, Player};
use hex_rust::playout::play_random_game;
use hex_rust::stats::WinStats;

/// Hex-Rust: Hex board engine with random-play win statistics
#[derive(Parser)]
#[command(name = "hex-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the random number generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate win probabilities by playing random games on each board
    /// size in an inclusive range
    Stats {
        /// Smallest board size to simulate
        min_size: usize,
        /// Largest board size to simulate
        max_size: usize,
        /// Number of games per board size
        games: usize,
    },
    /// Play a single random game and show the winning path
    Demo {
        /// Board size
        #[arg(default_value_t = 7)]
        size: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };

    match cli.command {
        Some(Commands::Stats {
            min_size,
            max_size,
            games,
        }) => run_stats(min_size, max_size, games, &mut rng),
        Some(Commands::Demo { size }) => run_demo(size, &mut rng),
        None => run_demo(7, &mut rng),
    }
}

fn run_stats(min_size: usize, max_size: usize, games: usize, rng: &mut Rng) -> Result<()> {
    ensure!(min_size > 0, "minimum board size must be positive");
    ensure!(
        min_size <= max_size,
        "maximum board size must not be smaller than the minimum"
    );
    ensure!(games > 0, "game count must be positive");

    let stats = WinStats::collect(min_size, max_size, games, rng)?;

    for n in min_size..=max_size {
        let p1 = stats.p1_win_estimate(n).unwrap_or(0.0);
        let p2 = stats.p2_win_estimate(n).unwrap_or(0.0);
        println!("N = {n}, P1 = {p1:.3}, P2 = {p2:.3}");
    }
    Ok(())
}

fn run_demo(size: usize, rng: &mut Rng) -> Result<()> {
    println!("Hex-Rust: random game on a {size}x{size} board\n");

    let mut board = HexBoard::new(size)?;
    let winner = play_random_game(&mut board, rng);

    println!("{board}");
    match winner {
        Player::One => println!("Player One (X) wins by connecting the first and last columns"),
        Player::Two => println!("Player Two (O) wins by connecting the first and last rows"),
    }

    println!("\nWinning path (other tiles lowercased):");
    for row in 0..size {
        print!("{:indent$}", "", indent = row);
        for col in 0..size {
            let on_path = board.is_on_winning_path(row, col)?;
            let ch = match (board.get_player(row, col), on_path) {
                (Some(Player::One), true) => 'X',
                (Some(Player::One), false) => 'x',
                (Some(Player::Two), true) => 'O',
                (Some(Player::Two), false) => 'o',
                (None, _) => '.',
            };
            print!("{ch} ");
        }
        println!();
    }
    Ok(())
}
