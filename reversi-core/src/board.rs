//! Board state, move legality and disc flipping

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;
use crate::error::{ConfigError, MoveError};
use crate::grid::{Pos, DEFAULT_DIM, DIRECTIONS};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// Cell state holding this player's disc
    pub fn cell(self) -> Cell {
        match self {
            Player::PlayerOne => Cell::PlayerOne,
            Player::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::PlayerOne => write!(f, "player one ({})", Cell::PlayerOne.symbol()),
            Player::PlayerTwo => write!(f, "player two ({})", Cell::PlayerTwo.symbol()),
        }
    }
}

/// Occupancy of a single cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// Symbol used by the text snapshot
    pub fn symbol(self) -> char {
        match self {
            Cell::PlayerOne => 'O',
            Cell::PlayerTwo => 'X',
            Cell::Empty => '.',
        }
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::PlayerOne),
            Cell::PlayerTwo => Some(Player::PlayerTwo),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Final result of a finished game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

/// Disc counts per player
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player_one: usize,
    pub player_two: usize,
}

impl Score {
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::PlayerOne => self.player_one,
            Player::PlayerTwo => self.player_two,
        }
    }

    /// Leader by disc count, Tie on equal counts
    pub fn outcome(&self) -> Outcome {
        use std::cmp::Ordering;
        match self.player_one.cmp(&self.player_two) {
            Ordering::Equal => Outcome::Tie,
            Ordering::Greater => Outcome::Winner(Player::PlayerOne),
            Ordering::Less => Outcome::Winner(Player::PlayerTwo),
        }
    }
}

/// Effect of a successfully applied move
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub player: Player,
    pub placed: Pos,
    /// Opponent discs turned over, grouped by direction
    pub flipped: Vec<Pos>,
}

// ============================================================================
// BOARD
// ============================================================================

/// Reversi board (mutated only through `apply_move`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cells, `row * cols + col`
    cells: Vec<Cell>,
    active_player: Player,
    /// Discs currently on the board
    move_count: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_DIM, DEFAULT_DIM)
    }
}

impl Board {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a board with the four centre discs placed.
    ///
    /// `rows` and `cols` must both be at least 2; use [`Board::from_config`]
    /// when the dimensions come from outside the program.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut board = Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            active_player: Player::PlayerOne,
            move_count: 4,
        };

        let (r, c) = (rows / 2, cols / 2);
        board.set(Pos::new(r - 1, c - 1), Cell::PlayerOne);
        board.set(Pos::new(r, c), Cell::PlayerOne);
        board.set(Pos::new(r - 1, c), Cell::PlayerTwo);
        board.set(Pos::new(r, c - 1), Cell::PlayerTwo);

        board
    }

    /// Create a board from a validated configuration
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.rows, config.cols))
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Player who moves next
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Number of discs on the board
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Empty cells remaining
    pub fn moves_left(&self) -> usize {
        self.rows * self.cols - self.move_count
    }

    /// Cell at (row, col), None when out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Pos::new(i / cols, i % cols), cell))
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row * self.cols + pos.col]
    }

    fn set(&mut self, pos: Pos, cell: Cell) {
        let i = pos.row * self.cols + pos.col;
        self.cells[i] = cell;
    }

    // ========================================================================
    // LEGALITY
    // ========================================================================

    /// True iff any in-bounds neighbour of (row, col) holds a disc.
    ///
    /// This is the whole adjacency requirement: the neighbour may belong to
    /// either player and no capturing line is needed.
    pub fn has_occupied_neighbor(&self, row: usize, col: usize) -> bool {
        Pos::new(row, col)
            .neighbors(self.rows, self.cols)
            .any(|n| !self.get(n).is_empty())
    }

    /// True iff (row, col) is in bounds, empty and next to a disc
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.check_move(row, col).is_ok()
    }

    /// All positions the active player may currently play
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.cells()
            .filter(|&(pos, _)| self.is_valid_move(pos.row, pos.col))
            .map(|(pos, _)| pos)
            .collect()
    }

    fn check_move(&self, row: usize, col: usize) -> Result<Pos, MoveError> {
        let Some(i) = self.index(row, col) else {
            return Err(MoveError::InvalidCoordinate { row, col });
        };
        if !self.cells[i].is_empty() {
            return Err(MoveError::CellOccupied { row, col });
        }
        if !self.has_occupied_neighbor(row, col) {
            return Err(MoveError::NoAdjacentDisc { row, col });
        }
        Ok(Pos::new(row, col))
    }

    // ========================================================================
    // MOVE APPLICATION
    // ========================================================================

    /// Place the active player's disc at (row, col), flip captured runs and
    /// pass the turn. On error nothing changes.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let pos = self.check_move(row, col)?;
        let player = self.active_player;

        self.move_count += 1;
        self.set(pos, player.cell());
        let flipped = self.flip_from(pos);
        self.active_player = player.opponent();

        tracing::debug!(
            "{:?} placed at ({}, {}), flipped {}",
            player,
            row,
            col,
            flipped.len()
        );

        Ok(MoveOutcome {
            player,
            placed: pos,
            flipped,
        })
    }

    /// Flip every anchored opponent run radiating from `origin`
    fn flip_from(&mut self, origin: Pos) -> Vec<Pos> {
        let me = self.get(origin);
        let mut flipped = Vec::new();

        for &dir in DIRECTIONS.iter() {
            let run = self.capturable_run(origin, dir, me);
            for &pos in &run {
                self.set(pos, me);
            }
            flipped.extend(run);
        }

        flipped
    }

    /// Maximal run of opponent discs from `origin` along `dir`, or empty if
    /// the run is not closed by a disc of `me`
    fn capturable_run(&self, origin: Pos, dir: (isize, isize), me: Cell) -> Vec<Pos> {
        let mut run = Vec::new();
        let mut current = origin.step(dir, self.rows, self.cols);

        while let Some(pos) = current {
            let cell = self.get(pos);
            if cell == me {
                return run;
            }
            if cell.is_empty() {
                break;
            }
            run.push(pos);
            current = pos.step(dir, self.rows, self.cols);
        }

        // Fell off the board or hit an empty cell
        Vec::new()
    }

    // ========================================================================
    // TERMINATION & SCORING
    // ========================================================================

    /// The game ends only when every cell is occupied
    pub fn is_game_over(&self) -> bool {
        self.move_count == self.rows * self.cols
    }

    /// Disc count per player at any point in the game
    pub fn score(&self) -> Score {
        self.cells.iter().fold(Score::default(), |mut score, cell| {
            match cell {
                Cell::PlayerOne => score.player_one += 1,
                Cell::PlayerTwo => score.player_two += 1,
                Cell::Empty => {}
            }
            score
        })
    }

    /// Result of a finished game, None while cells remain empty
    pub fn winner(&self) -> Option<Outcome> {
        self.is_game_over().then(|| self.score().outcome())
    }

    // ========================================================================
    // RENDERING
    // ========================================================================

    /// Fixed-width text grid, see the `Display` impl
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Header of column indices, then one line per row:
///
/// ```text
///   0  1  2  3
/// 0[.][.][.][.]
/// 1[.][O][X][.]
/// 2[.][X][O][.]
/// 3[.][.][.][.]
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 0..self.cols {
            write!(f, " {} ", c)?;
        }
        writeln!(f)?;

        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            write!(f, "{}", r)?;
            for cell in row {
                write!(f, "[{}]", cell.symbol())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
