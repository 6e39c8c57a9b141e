//! Integration tests for the reversi binary
//!
//! Runs the built executable end to end: board setup, replay and stdin play

use std::io::Write;
use std::process::{Command, Output, Stdio};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn reversi(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reversi"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run reversi binary")
}

fn reversi_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_reversi"))
        .args(args)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn reversi binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ============================================================================
// SHOW
// ============================================================================

#[test]
fn test_show_default_board() {
    let output = reversi(&["show"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "  0  1  2  3  4  5  6  7 ");
    // lines[0] is the column header, board row r is lines[r + 1]
    assert_eq!(lines[1], "0[.][.][.][.][.][.][.][.]");
    assert_eq!(lines[4], "3[.][.][.][O][X][.][.][.]");
    assert_eq!(lines[5], "4[.][.][.][X][O][.][.][.]");
    assert_eq!(lines[8], "7[.][.][.][.][.][.][.][.]");
    assert_eq!(text.matches(['O', 'X']).count(), 4);
}

#[test]
fn test_show_small_board() {
    let output = reversi(&["show", "--rows", "4", "--cols", "4"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "  0  1  2  3 \n0[.][.][.][.]\n1[.][O][X][.]\n2[.][X][O][.]\n3[.][.][.][.]\n"
    );
}

#[test]
fn test_show_rejects_tiny_board() {
    let output = reversi(&["show", "--rows", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("at least 2x2"));
}

#[test]
fn test_show_from_config_file() {
    let path = std::env::temp_dir().join(format!("reversi-it-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"rows": 4, "cols": 6}"#).unwrap();

    let output = reversi(&["show", "--config", path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("  0  1  2  3  4  5 \n"));
    assert_eq!(text.lines().count(), 5);
}

// ============================================================================
// REPLAY
// ============================================================================

#[test]
fn test_replay_text_output() {
    let output = reversi(&["replay", "2,4"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("2[.][.][.][.][O][.][.][.]"));
    assert!(text.contains("3[.][.][.][O][O][.][.][.]"));
    assert!(text.contains("Score: O=4 X=1"));
    assert!(text.contains("Next: player two (X) (59 moves left)"));
}

#[test]
fn test_replay_rejected_move_fails() {
    let output = reversi(&["replay", "2,4", "2,4"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("move 2 by player two (X) rejected"));
    assert!(stderr.contains("cell occupied: (2, 4)"));
}

#[test]
fn test_replay_bad_coordinate_syntax() {
    let output = reversi(&["replay", "2-4"]);
    assert!(!output.status.success());
}

#[test]
fn test_replay_json_full_game() {
    let output = reversi(&[
        "replay", "--rows", "2", "--cols", "4", "--json", "1,0", "1,3", "0,3", "0,0",
    ]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["moves_applied"], 4);
    assert_eq!(json["game_over"], true);
    assert_eq!(json["score"]["player_one"], 6);
    assert_eq!(json["score"]["player_two"], 2);
    assert_eq!(json["winner"]["Winner"], "PlayerOne");
    assert_eq!(json["board"]["cells"].as_array().unwrap().len(), 8);
}

// ============================================================================
// PLAY
// ============================================================================

#[test]
fn test_play_hot_seat_to_the_end() {
    let output = reversi_with_stdin(
        &["play", "--rows", "2", "--cols", "3"],
        "0 0\n0 2\n1,2\n",
    );
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Rejected: cell occupied: (0, 0)"));
    assert!(text.contains("player two (X) played (1, 2), flipped 1"));
    assert!(text.contains("Result: tie"));
}

#[test]
fn test_play_quit() {
    let output = reversi_with_stdin(&["play"], "q\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Game abandoned with 60 moves left"));
}
