//! Parsing of move coordinates typed by a user

use anyhow::{bail, Context, Result};

use reversi_core::MoveRequest;

/// Parse "ROW,COL" or "ROW COL" into a move request
pub fn parse_move(text: &str) -> Result<MoveRequest> {
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        bail!("expected ROW,COL or ROW COL, got '{}'", text.trim());
    };

    let row = row
        .parse::<usize>()
        .with_context(|| format!("invalid row '{}'", row))?;
    let col = col
        .parse::<usize>()
        .with_context(|| format!("invalid column '{}'", col))?;

    Ok(MoveRequest::new(row, col))
}
