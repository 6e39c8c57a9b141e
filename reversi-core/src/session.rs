//! Single-game session: owns a board and notifies observers of changes
//!
//! The board itself has no subscription mechanism. Front-ends (terminal,
//! GUI, network echo) register a [`BoardObserver`] here and every move,
//! local or received from a peer, goes through [`Session::play`].

use serde::{Deserialize, Serialize};

use crate::board::{Board, MoveOutcome, Outcome, Player};
use crate::error::MoveError;

/// A move request as exchanged with a remote peer: coordinates only
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub row: usize,
    pub col: usize,
}

impl MoveRequest {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Game status as seen from the local seat
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    NotOver,
    Won,
    Lost,
    Tie,
}

/// Receives a callback after every successful move
pub trait BoardObserver {
    fn board_changed(&mut self, board: &Board, outcome: &MoveOutcome);
}

impl<F> BoardObserver for F
where
    F: FnMut(&Board, &MoveOutcome),
{
    fn board_changed(&mut self, board: &Board, outcome: &MoveOutcome) {
        self(board, outcome)
    }
}

/// One game in progress
pub struct Session {
    board: Board,
    /// Seat played by this process, None for hot-seat
    local: Option<Player>,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl Session {
    pub fn new(board: Board, local: Option<Player>) -> Self {
        Self {
            board,
            local,
            observers: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn local(&self) -> Option<Player> {
        self.local
    }

    pub fn subscribe(&mut self, observer: Box<dyn BoardObserver>) {
        self.observers.push(observer);
    }

    /// Apply a move for whoever is to play, then notify observers.
    /// Rejected requests are reported unchanged and nobody is notified.
    pub fn play(&mut self, request: MoveRequest) -> Result<MoveOutcome, MoveError> {
        let outcome = match self.board.apply_move(request.row, request.col) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!("Rejected move ({}, {}): {}", request.row, request.col, e);
                return Err(e);
            }
        };

        for observer in &mut self.observers {
            observer.board_changed(&self.board, &outcome);
        }

        if let Some(result) = self.board.winner() {
            tracing::info!("Game over after {} discs: {:?}", self.board.move_count(), result);
        }

        Ok(outcome)
    }

    /// True when the local seat is to move (always true for hot-seat)
    pub fn is_my_turn(&self) -> bool {
        self.local
            .map_or(true, |me| me == self.board.active_player())
    }

    pub fn moves_left(&self) -> usize {
        self.board.moves_left()
    }

    /// Hot-seat sessions report from player one's side
    pub fn status(&self) -> Status {
        let me = self.local.unwrap_or(Player::PlayerOne);
        match self.board.winner() {
            None => Status::NotOver,
            Some(Outcome::Tie) => Status::Tie,
            Some(Outcome::Winner(p)) if p == me => Status::Won,
            Some(Outcome::Winner(_)) => Status::Lost,
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("board", &self.board)
            .field("local", &self.local)
            .field("observers", &self.observers.len())
            .finish()
    }
}
