//! Replay command - apply a list of moves to a fresh board
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: replay_moves(), report_results()
//! - Level 3: build_report()
//! - Level 4: argument parsing

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use reversi_core::{Board, MoveRequest, Outcome, Score};

use crate::input::parse_move;
use crate::BoardArgs;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Moves in play order, each as ROW,COL
    #[arg(value_name = "MOVE", value_parser = parse_move_arg)]
    pub moves: Vec<MoveRequest>,

    /// Output the final state as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_move_arg(text: &str) -> Result<MoveRequest, String> {
    parse_move(text).map_err(|e| format!("{:#}", e))
}

/// Final state of a replay
#[derive(Serialize)]
struct ReplayReport<'a> {
    moves_applied: usize,
    game_over: bool,
    score: Score,
    winner: Option<Outcome>,
    board: &'a Board,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run replay command
///
/// 1. Build the board
/// 2. Apply every move, stopping at the first rejection
/// 3. Report the final state
pub fn run(args: ReplayArgs) -> Result<()> {
    let mut board = args.board.build_board()?;

    tracing::info!(
        "Replaying {} moves on {}x{} board",
        args.moves.len(),
        board.rows(),
        board.cols()
    );

    replay_moves(&mut board, &args.moves)?;
    report_results(&board, args.moves.len(), args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Apply moves in order; the first rejected move aborts the replay
fn replay_moves(board: &mut Board, moves: &[MoveRequest]) -> Result<()> {
    for (i, mv) in moves.iter().enumerate() {
        let player = board.active_player();
        board
            .apply_move(mv.row, mv.col)
            .with_context(|| format!("move {} by {} rejected", i + 1, player))?;
    }
    Ok(())
}

fn report_results(board: &Board, moves_applied: usize, json: bool) -> Result<()> {
    let report = build_report(board, moves_applied);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text_report(&report);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn build_report(board: &Board, moves_applied: usize) -> ReplayReport<'_> {
    ReplayReport {
        moves_applied,
        game_over: board.is_game_over(),
        score: board.score(),
        winner: board.winner(),
        board,
    }
}

fn print_text_report(report: &ReplayReport<'_>) {
    print!("{}", report.board);
    println!(
        "Score: O={} X={}",
        report.score.player_one, report.score.player_two
    );
    match report.winner {
        Some(outcome) => println!("Result: {}", describe_outcome(outcome)),
        None => println!(
            "Next: {} ({} moves left)",
            report.board.active_player(),
            report.board.moves_left()
        ),
    }
}

pub fn describe_outcome(outcome: Outcome) -> String {
    match outcome {
        Outcome::Winner(player) => format!("{} wins", player),
        Outcome::Tie => "tie".to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
