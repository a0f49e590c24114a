//! Board module - manages the game grid
//!
//! The board is an N x N grid (N fixed at construction) where each cell is
//! either empty or holds a power-of-two tile. Uses a flat fixed-capacity array
//! sized for the largest supported board, so boards never allocate.
//! Coordinates: (row, col) with row 0 at the top and col 0 at the left.
//!
//! Moves are processed one line at a time. [`Board::line`] reads a row or column
//! oriented so that index 0 is the edge the tiles travel toward, and
//! [`Board::set_line`] writes it back the same way. That lets a single
//! "slide toward index 0" routine serve all four directions.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{
    is_tile_value, Cell, Direction, MAX_BOARD_SIZE, MAX_CELLS, MIN_BOARD_SIZE,
};

/// One row or column, leading edge first
pub type Line = ArrayVec<Cell, { MAX_BOARD_SIZE as usize }>;

/// The game board - square grid using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    /// Flat array of cells, row-major order (row * size + col)
    cells: [Cell; MAX_CELLS],
}

impl Board {
    /// Create a new empty board
    ///
    /// `size` is clamped into the supported range.
    pub fn new(size: u8) -> Self {
        Self {
            size: size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE),
            cells: [None; MAX_CELLS],
        }
    }

    /// Build a board from rows of values, `0` meaning empty
    ///
    /// Returns `None` if the rows are not square, the size is unsupported, or
    /// a value is not a valid tile.
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_rows(&[&[2, 0], &[0, 4]]).unwrap();
    /// assert_eq!(board.get(1, 1), Some(Some(4)));
    /// assert!(Board::from_rows(&[&[3, 0], &[0, 0]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[u32]]) -> Option<Self> {
        let size = rows.len();
        if !(MIN_BOARD_SIZE as usize..=MAX_BOARD_SIZE as usize).contains(&size) {
            return None;
        }
        let mut board = Self::new(size as u8);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return None;
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = if value == 0 { None } else { Some(value) };
                if !board.set(row, col, cell) {
                    return None;
                }
            }
        }
        Some(board)
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.size as usize;
        if row >= n || col >= n {
            return None;
        }
        Some(row * n + col)
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Tile value at (row, col), `0` for empty or out of bounds
    pub fn value(&self, row: usize, col: usize) -> u32 {
        self.get(row, col).flatten().unwrap_or(0)
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds or the value is not a power of two >= 2
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if let Some(value) = cell {
            if !is_tile_value(value) {
                return false;
            }
        }
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Cells actually in use, row-major
    pub fn cells(&self) -> &[Cell] {
        let n = self.size as usize;
        &self.cells[..n * n]
    }

    pub fn occupied_count(&self) -> usize {
        self.cells().iter().filter(|c| c.is_some()).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells().len() - self.occupied_count()
    }

    pub fn is_full(&self) -> bool {
        self.cells().iter().all(|c| c.is_some())
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells().iter().flatten().map(|&v| v as u64).sum()
    }

    /// Largest tile value, `0` on an empty board
    pub fn max_tile(&self) -> u32 {
        self.cells().iter().flatten().copied().max().unwrap_or(0)
    }

    /// Position of the `n`-th empty cell in row-major order
    pub fn nth_empty(&self, n: usize) -> Option<(usize, usize)> {
        let size = self.size as usize;
        self.cells()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .nth(n)
            .map(|(idx, _)| (idx / size, idx % size))
    }

    /// Board coordinates of position `k` along line `idx` for a move in `dir`
    ///
    /// Position 0 is the edge the tiles slide toward.
    #[inline(always)]
    fn line_coords(&self, dir: Direction, idx: usize, k: usize) -> (usize, usize) {
        let last = self.size as usize - 1;
        match dir {
            Direction::Left => (idx, k),
            Direction::Right => (idx, last - k),
            Direction::Up => (k, idx),
            Direction::Down => (last - k, idx),
        }
    }

    /// Read line `idx` (a row for Left/Right, a column for Up/Down), leading edge first
    pub fn line(&self, dir: Direction, idx: usize) -> Line {
        let n = self.size as usize;
        let mut line = Line::new();
        if idx >= n {
            return line;
        }
        for k in 0..n {
            let (row, col) = self.line_coords(dir, idx, k);
            line.push(self.cells[row * n + col]);
        }
        line
    }

    /// Write line `idx` back in the orientation used by [`Board::line`]
    ///
    /// Extra entries beyond the board size are ignored.
    pub fn set_line(&mut self, dir: Direction, idx: usize, line: &[Cell]) {
        let n = self.size as usize;
        if idx >= n {
            return;
        }
        for (k, &cell) in line.iter().take(n).enumerate() {
            let (row, col) = self.line_coords(dir, idx, k);
            self.cells[row * n + col] = cell;
        }
    }

    /// True if two orthogonally adjacent cells hold the same tile and could merge
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size as usize;
        for row in 0..n {
            for col in 0..n {
                let Some(v) = self.cells[row * n + col] else {
                    continue;
                };
                if v.checked_mul(2).is_none() {
                    continue;
                }
                if col + 1 < n && self.cells[row * n + col + 1] == Some(v) {
                    return true;
                }
                if row + 1 < n && self.cells[(row + 1) * n + col] == Some(v) {
                    return true;
                }
            }
        }
        false
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Copy values into rows, `0` meaning empty (for rendering and tests)
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        let n = self.size as usize;
        (0..n)
            .map(|row| (0..n).map(|col| self.value(row, col)).collect())
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size as usize;
        for row in 0..n {
            for col in 0..n {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.cells[row * n + col] {
                    Some(v) => write!(f, "{:>5}", v)?,
                    None => write!(f, "{:>5}", ".")?,
                }
            }
            if row + 1 < n {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_BOARD_SIZE)
    }
}
