//! Hex board state and incremental win detection.
//!
//! The board keeps two disjoint-set structures side by side:
//!
//! - `win_check` spans the `size * size` cells plus four virtual edge
//!   nodes, one per board side. A player has won exactly when their two
//!   virtual nodes end up in the same set, so the win query is a single
//!   `connected` call.
//! - `paths` spans only the real cells. Virtual nodes make every tile on
//!   an edge look connected to every other tile on that edge, which would
//!   corrupt winning-path queries; `paths` records genuine tile-to-tile
//!   adjacency only and backs [`HexBoard::is_on_winning_path`].
//!
//! Both structures are unioned in lockstep on every placement. Player One
//! connects the column-0 and column-`size-1` edges; Player Two connects
//! the row-0 and row-`size-1` edges.

use std::fmt;

use crate::union_find::UnionFind;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opposing player.
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Errors reported by board construction and winning-path queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board constructed with size zero.
    InvalidSize,
    /// Winning-path query outside the board.
    OutOfBounds { row: usize, col: usize, size: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize => write!(f, "board size cannot be zero"),
            BoardError::OutOfBounds { row, col, size } => write!(
                f,
                "coordinates ({row}, {col}) out of bounds on a {size}x{size} board"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// The six neighbor offsets of a hex cell on the rhombus grid.
const NEIGHBOR_OFFSETS: [(isize, isize); 6] =
    [(0, -1), (0, 1), (1, 0), (1, -1), (-1, 0), (-1, 1)];

/// A board side represented by a virtual node in the win-check structure.
///
/// Top and Bottom (columns 0 and `size - 1`) are Player One's target
/// edges; Left and Right (rows 0 and `size - 1`) are Player Two's.
#[derive(Copy, Clone)]
enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// An N-by-N Hex board with incremental connectivity tracking.
pub struct HexBoard {
    size: usize,
    grid: Vec<Option<Player>>,
    unset_tiles: usize,
    /// Real cell adjacency only; backs winning-path queries.
    paths: UnionFind,
    /// Cells plus four virtual edge nodes; backs the win queries.
    win_check: UnionFind,
}

impl HexBoard {
    /// Creates an empty board of the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }
        let cells = size * size;
        Ok(Self {
            size,
            grid: vec![None; cells],
            unset_tiles: cells,
            paths: UnionFind::new(cells),
            win_check: UnionFind::new(cells + 4),
        })
    }

    /// The side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Linear index of a cell, shared by the grid and both disjoint sets.
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "coordinates ({row}, {col}) out of bounds on a {size}x{size} board",
            size = self.size
        );
        col + row * self.size
    }

    /// Element id of a virtual edge node in the win-check structure.
    fn edge_node(&self, edge: Edge) -> usize {
        self.size * self.size + edge as usize
    }

    /// The owner of a cell, or `None` while it is unset.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are off the board; staying in range is
    /// the caller's responsibility.
    pub fn get_player(&self, row: usize, col: usize) -> Option<Player> {
        self.grid[self.index(row, col)]
    }

    /// True iff the cell has been claimed by either player.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are off the board.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get_player(row, col).is_some()
    }

    /// Number of cells still unclaimed.
    pub fn number_of_unset_tiles(&self) -> usize {
        self.unset_tiles
    }

    /// Claims a cell for `player` and updates both connectivity structures.
    ///
    /// The cell is unioned with its target edge's virtual node when it
    /// lies on one, and with every in-bounds neighbor owned by the same
    /// player. Occupancy is not re-checked: callers must only place on
    /// cells where [`HexBoard::is_set`] is false.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are off the board.
    pub fn set_tile(&mut self, row: usize, col: usize, player: Player) {
        let cell = self.index(row, col);
        self.grid[cell] = Some(player);

        // Edge placements reach the matching virtual node. Both checks run
        // independently: on a 1x1 board one cell sits on both target edges.
        match player {
            Player::One => {
                if col == 0 {
                    self.win_check.union(cell, self.edge_node(Edge::Top));
                }
                if col == self.size - 1 {
                    self.win_check.union(cell, self.edge_node(Edge::Bottom));
                }
            }
            Player::Two => {
                if row == 0 {
                    self.win_check.union(cell, self.edge_node(Edge::Left));
                }
                if row == self.size - 1 {
                    self.win_check.union(cell, self.edge_node(Edge::Right));
                }
            }
        }

        self.connect_neighbors(row, col);

        self.unset_tiles -= 1;
    }

    /// Unions the freshly placed cell with same-owner neighbors, in both
    /// the plain and the win-check structures.
    fn connect_neighbors(&mut self, row: usize, col: usize) {
        let cell = self.index(row, col);
        let owner = self.grid[cell];
        for (d_row, d_col) in NEIGHBOR_OFFSETS {
            let row2 = row as isize + d_row;
            let col2 = col as isize + d_col;
            if row2 < 0 || col2 < 0 || row2 >= self.size as isize || col2 >= self.size as isize {
                continue;
            }
            let neighbor = self.index(row2 as usize, col2 as usize);
            if self.grid[neighbor] == owner {
                self.paths.union(cell, neighbor);
                self.win_check.union(cell, neighbor);
            }
        }
    }

    /// True iff Player One has connected columns 0 and `size - 1`.
    pub fn has_player_one_won(&self) -> bool {
        self.win_check
            .connected(self.edge_node(Edge::Top), self.edge_node(Edge::Bottom))
    }

    /// True iff Player Two has connected rows 0 and `size - 1`.
    pub fn has_player_two_won(&self) -> bool {
        self.win_check
            .connected(self.edge_node(Edge::Left), self.edge_node(Edge::Right))
    }

    /// True iff the cell belongs to the winning player's connecting chain.
    ///
    /// Returns false for every cell until a player has won, and for every
    /// cell the winner does not own. The check runs against the plain
    /// structure: the cell must reach some cell physically on each of the
    /// winner's two target edges through real adjacencies alone, so edge
    /// tiles that merely touch a virtual node do not count.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the coordinates are off the
    /// board.
    pub fn is_on_winning_path(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let pos = self.index(row, col);
        let size = self.size;

        match self.grid[pos] {
            Some(Player::One) if self.has_player_one_won() => {
                let top = (0..size).any(|i| self.paths.connected(pos, size * i));
                let bottom = (1..=size).any(|i| self.paths.connected(pos, size * i - 1));
                Ok(top && bottom)
            }
            Some(Player::Two) if self.has_player_two_won() => {
                let left = (0..size).any(|i| self.paths.connected(pos, i));
                let right =
                    (size * size - size..size * size).any(|i| self.paths.connected(pos, i));
                Ok(left && right)
            }
            _ => Ok(false),
        }
    }
}

impl fmt::Display for HexBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            write!(f, "{:indent$}", "", indent = row)?;
            for col in 0..self.size {
                let ch = match self.get_player(row, col) {
                    Some(Player::One) => 'X',
                    Some(Player::Two) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
