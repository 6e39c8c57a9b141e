//! Reversi CLI - Command-line interface
//!
//! Commands:
//! - show: Print the starting board
//! - replay: Apply a list of moves and print the result
//! - play: Hot-seat game over stdin

mod input;
mod play;
mod replay;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use reversi_core::{Board, BoardConfig};

#[derive(Parser)]
#[command(name = "reversi")]
#[command(about = "Reversi board engine")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the starting board
    Show {
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Apply moves given as ROW,COL and print the final board
    Replay(replay::ReplayArgs),
    /// Play a hot-seat game, one "ROW COL" per line on stdin
    Play(play::PlayArgs),
}

/// Board size options shared by all commands
#[derive(Args, Clone, Debug)]
pub struct BoardArgs {
    /// Number of rows
    #[arg(long, default_value = "8")]
    pub rows: usize,

    /// Number of columns
    #[arg(long, default_value = "8")]
    pub cols: usize,

    /// JSON board config file (takes precedence over --rows/--cols)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl BoardArgs {
    /// Resolve the board configuration; validated when the board is built
    pub fn board_config(&self) -> Result<BoardConfig> {
        match &self.config {
            Some(path) => BoardConfig::load(path),
            None => Ok(BoardConfig::new(self.rows, self.cols)),
        }
    }

    pub fn build_board(&self) -> Result<Board> {
        let config = self.board_config()?;
        tracing::debug!("Creating {}x{} board", config.rows, config.cols);
        Ok(Board::from_config(&config)?)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Show { board } => {
            print!("{}", board.build_board()?);
            Ok(())
        }
        Commands::Replay(args) => replay::run(args),
        Commands::Play(args) => play::run(args),
    }
}
