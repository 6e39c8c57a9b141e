//! Error types

/// A rejected move. The board is left untouched whenever one is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Row or column outside the board
    #[error("invalid coordinate: ({row}, {col})")]
    InvalidCoordinate { row: usize, col: usize },

    /// Target cell already holds a disc
    #[error("cell occupied: ({row}, {col})")]
    CellOccupied { row: usize, col: usize },

    /// Target cell touches no disc of either player
    #[error("no adjacent disc: ({row}, {col})")]
    NoAdjacentDisc { row: usize, col: usize },
}

/// Invalid board configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must be at least 2x2, got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },
}
