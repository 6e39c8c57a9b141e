//! Play command - hot-seat game over stdin
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_game(), report_final()
//! - Level 3: handle_line()
//! - Level 4: BoardPrinter observer

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use anyhow::Result;
use clap::Args;

use reversi_core::{Board, BoardObserver, MoveOutcome, Session, Status};

use crate::input::parse_move;
use crate::replay::describe_outcome;
use crate::BoardArgs;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub board: BoardArgs,
}

/// What the loop should do after a line of input
#[derive(Debug, PartialEq, Eq)]
enum LineAction {
    Continue,
    Quit,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Build the board and session
/// 2. Read moves until the board is full, input ends or a player quits
/// 3. Print the result
pub fn run(args: PlayArgs) -> Result<()> {
    let board = args.board.build_board()?;
    let out = Rc::new(RefCell::new(io::stdout()));

    let status = play_game(board, io::stdin().lock(), out)?;
    tracing::info!("Session ended: {:?}", status);
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Drive one hot-seat game, echoing the board after every accepted move
fn play_game<R, W>(board: Board, input: R, out: Rc<RefCell<W>>) -> Result<Status>
where
    R: BufRead,
    W: Write + 'static,
{
    let mut session = Session::new(board, None);
    session.subscribe(Box::new(BoardPrinter { out: Rc::clone(&out) }));

    write!(out.borrow_mut(), "{}", session.board())?;

    let mut lines = input.lines();
    while !session.board().is_game_over() {
        prompt(&session, &out)?;
        let Some(line) = lines.next() else {
            break;
        };
        if handle_line(&mut session, &line?, &out)? == LineAction::Quit {
            break;
        }
    }

    report_final(&session, &out)?;
    Ok(session.status())
}

fn report_final<W: Write>(session: &Session, out: &Rc<RefCell<W>>) -> Result<()> {
    let board = session.board();
    let score = board.score();
    let mut out = out.borrow_mut();

    writeln!(out, "Score: O={} X={}", score.player_one, score.player_two)?;
    match board.winner() {
        Some(outcome) => writeln!(out, "Result: {}", describe_outcome(outcome))?,
        None => writeln!(out, "Game abandoned with {} moves left", session.moves_left())?,
    }
    out.flush()?;
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn prompt<W: Write>(session: &Session, out: &Rc<RefCell<W>>) -> Result<()> {
    let mut out = out.borrow_mut();
    write!(out, "{} to move> ", session.board().active_player())?;
    out.flush()?;
    Ok(())
}

fn handle_line<W: Write>(
    session: &mut Session,
    line: &str,
    out: &Rc<RefCell<W>>,
) -> Result<LineAction> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(LineAction::Continue);
    }
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
        return Ok(LineAction::Quit);
    }

    let request = match parse_move(line) {
        Ok(request) => request,
        Err(e) => {
            writeln!(out.borrow_mut(), "Invalid input: {:#}", e)?;
            return Ok(LineAction::Continue);
        }
    };

    // Observers borrow `out`, so no borrow may be held across play()
    if let Err(e) = session.play(request) {
        writeln!(out.borrow_mut(), "Rejected: {}", e)?;
    }
    Ok(LineAction::Continue)
}

// ============================================================================
// LEVEL 4 - OBSERVER
// ============================================================================

/// Prints the board after each move
struct BoardPrinter<W: Write> {
    out: Rc<RefCell<W>>,
}

impl<W: Write> BoardObserver for BoardPrinter<W> {
    fn board_changed(&mut self, board: &Board, outcome: &MoveOutcome) {
        let mut out = self.out.borrow_mut();
        let written = writeln!(
            out,
            "{} played ({}, {}), flipped {}",
            outcome.player,
            outcome.placed.row,
            outcome.placed.col,
            outcome.flipped.len()
        )
        .and_then(|_| write!(out, "{}", board));

        if let Err(e) = written {
            tracing::warn!("Failed to print board: {}", e);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
