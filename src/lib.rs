//! Hex-Rust: An N-by-N Hex board engine with incremental win detection.
//!
//! The engine tracks tile connectivity with two weighted quick-union
//! structures updated on every placement: one with virtual nodes for the
//! four board edges, making the win query a single `connected` call, and
//! one restricted to the real cells so that winning-path membership can
//! be answered without virtual-node shortcuts.
//!
//! ## Modules
//!
//! - [`union_find`] - Weighted quick-union (disjoint-set) primitive
//! - [`board`] - Board state, placement, win and winning-path queries
//! - [`playout`] - Random game simulation
//! - [`stats`] - Win-probability estimation across board sizes
//!
//! ## Example
//!
//! ```
//! use hex_rust::board::{HexBoard, Player};
//!
//! // Player One connects column 0 to column size-1
//! let mut board = HexBoard::new(2).unwrap();
//! board.set_tile(0, 0, Player::One);
//! board.set_tile(1, 0, Player::One);
//! assert!(!board.has_player_one_won());
//!
//! board.set_tile(0, 1, Player::One);
//! assert!(board.has_player_one_won());
//! assert!(board.is_on_winning_path(0, 0).unwrap());
//! ```

pub mod board;
pub mod playout;
pub mod stats;
pub mod union_find;
