//! Board structure: a square grid of optional stones

use super::{Pos, Stone, DEFAULT_BOARD_SIZE};

/// Game board
///
/// Cells are stored row-major. `Clone` produces an independent deep copy,
/// which is what the move selector relies on for hypothetical placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Stone>>,
}

impl Board {
    /// Create an empty board with side `size`
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Render a board from a sequence of placements, in order.
    ///
    /// Placements outside the board or onto occupied cells are skipped, so a
    /// well-formed move log always reproduces the position it was recorded on.
    pub fn replay<I>(size: usize, moves: I) -> Self
    where
        I: IntoIterator<Item = (Pos, Stone)>,
    {
        let mut board = Self::new(size);
        for (pos, stone) in moves {
            if board.contains(pos) && board.is_empty(pos) {
                board.place_stone(pos, stone);
            }
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check that a position lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get stone at position (`None` for empty or off-board cells)
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if self.contains(pos) {
            self.cells[pos.to_index(self.size)]
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Place a stone without any rule checks.
    /// Use `Game::place` for game moves.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.contains(pos), "{pos} is off a {0}x{0} board", self.size);
        let idx = pos.to_index(self.size);
        self.cells[idx] = Some(stone);
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        debug_assert!(self.contains(pos), "{pos} is off a {0}x{0} board", self.size);
        let idx = pos.to_index(self.size);
        self.cells[idx] = None;
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Stones of one color on board
    pub fn count_of(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&c| c == Some(stone)).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(idx, _)| Pos::from_index(idx, self.size))
            .collect()
    }

    /// Centre cell, `(size / 2, size / 2)`
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }

    /// Iterate over occupied cells in row-major order
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, c)| c.map(|s| (Pos::from_index(idx, self.size), s)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{:>3}", c)?;
        }
        writeln!(f)?;
        for r in 0..self.size {
            write!(f, "{:>3}", r)?;
            for c in 0..self.size {
                let ch = self
                    .get(Pos::new(r as u8, c as u8))
                    .map_or('.', Stone::symbol);
                write!(f, "{:>3}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
