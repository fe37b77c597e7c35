//! Board representation for five-in-a-row

pub mod board;


// Re-exports
pub use board::Board;

use serde::{Deserialize, Serialize};

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Default connection length needed to win
pub const DEFAULT_WIN_COUNT: usize = 5;
/// Largest supported board side (positions are stored as `u8`)
pub const MAX_BOARD_SIZE: usize = u8::MAX as usize;

/// Stone colors. Empty cells are `None` on the board, never a stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stone {
    /// Moves first (traditionally black)
    First,
    /// Moves second (traditionally white)
    Second,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::First => Stone::Second,
            Stone::Second => Stone::First,
        }
    }

    /// Index into per-player arrays
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Stone::First => 0,
            Stone::Second => 1,
        }
    }

    /// Character used for ASCII board dumps
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::First => 'X',
            Stone::Second => 'O',
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stone::First => write!(f, "First"),
            Stone::Second => write!(f, "Second"),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of side `size`
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Check signed coordinates against a board of side `size`
    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    /// Step `steps` cells along `(dr, dc)`, or `None` when leaving the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32, size: usize) -> Option<Pos> {
        let r = i32::from(self.row) + dr * steps;
        let c = i32::from(self.col) + dc * steps;
        if Pos::is_valid(r, c, size) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan(self, other: Pos) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
