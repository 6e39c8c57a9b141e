//! Rectangular grid geometry with (row, col) coordinates

use serde::{Deserialize, Serialize};

/// Default board dimension (rows and columns)
pub const DEFAULT_DIM: usize = 8;

/// Grid coordinates, row-major, zero-based
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step one cell in direction (dr, dc), or None when that leaves a rows x cols grid
    pub fn step(&self, (dr, dc): (isize, isize), rows: usize, cols: usize) -> Option<Pos> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < rows && col < cols).then_some(Pos::new(row, col))
    }

    /// In-bounds neighbours (up to 8)
    pub fn neighbors(self, rows: usize, cols: usize) -> impl Iterator<Item = Pos> {
        DIRECTIONS
            .iter()
            .filter_map(move |&dir| self.step(dir, rows, cols))
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Pos::new(row, col)
    }
}

/// Direction vectors (dr, dc), clockwise from north
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, 1),   // E
    (1, 1),   // SE
    (1, 0),   // S
    (1, -1),  // SW
    (0, -1),  // W
    (-1, -1), // NW
];
