//! Reversi Core - Board state machine
//!
//! This crate provides the core game logic for Reversi:
//! - Grid geometry (row/column coordinates, 8 directions)
//! - Board state, move legality and disc flipping
//! - Termination, scoring and a fixed-width text snapshot
//! - A single-game session that notifies observers of changes

pub mod board;
pub mod config;
pub mod error;
pub mod grid;
pub mod session;

// Re-exports for convenient access
pub use board::{Board, Cell, MoveOutcome, Outcome, Player, Score};
pub use config::BoardConfig;
pub use error::{ConfigError, MoveError};
pub use grid::{Pos, DEFAULT_DIM, DIRECTIONS};
pub use session::{BoardObserver, MoveRequest, Session, Status};
