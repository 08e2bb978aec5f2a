//! Integration tests for the oneillo engine binary.
//!
//! Tests full protocol sessions by spawning the engine process, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_oneillo");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start oneillo");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

#[test]
fn otp_handshake_with_protocol_version() {
    let lines = run_engine(&["otp", "quit"]);

    assert!(lines.iter().any(|l| l == "id name oneillo"));
    assert!(lines.iter().any(|l| l == "protocol_version 1"));

    let ok_idx = lines.iter().position(|l| l == "otpok").unwrap();
    let proto_idx = lines.iter().position(|l| l == "protocol_version 1").unwrap();
    assert!(proto_idx < ok_idx, "protocol_version must appear before otpok");
    assert_eq!(ok_idx, lines.len() - 1);
}

#[test]
fn otp_handshake_includes_options() {
    let lines = run_engine(&["otp", "quit"]);
    let option_lines: Vec<&String> = lines.iter().filter(|l| l.starts_with("option ")).collect();
    assert!(!option_lines.is_empty());
    for opt in &option_lines {
        assert!(opt.contains("type "), "option line missing type: {}", opt);
    }
}

#[test]
fn unknown_and_empty_lines_are_ignored() {
    let lines = run_engine(&["foobar", "", "  ", "play", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn opening_legal_moves() {
    let lines = run_engine(&["legal", "quit"]);
    assert_eq!(lines, vec!["legal d3 c4 f5 e6"]);
}

#[test]
fn play_then_board() {
    let lines = run_engine(&["play d3", "board", "score", "quit"]);
    assert_eq!(lines[0], "played d3 flips 1");
    assert_eq!(lines[3], "...B....");
    assert_eq!(lines[4], "...BB...");
    assert_eq!(lines[5], "...BW...");
    assert_eq!(lines[9], "position 8/8/3b4/3bb3/3bw3/8/8/8 w");
    assert_eq!(lines[10], "score black 4 white 1");
}

#[test]
fn illegal_and_off_board_moves_are_reported() {
    let lines = run_engine(&["play a1", "play 8 3", "play 2 3", "quit"]);
    assert_eq!(lines[0], "illegal a1");
    assert!(lines[1].starts_with("error "), "{}", lines[1]);
    assert_eq!(lines[2], "played d3 flips 1");
}

#[test]
fn pass_only_when_forced() {
    let lines = run_engine(&[
        "pass",
        "position bw6/8/8/8/8/8/8/8 w",
        "legal",
        "pass",
        "play c1",
        "quit",
    ]);
    assert!(lines[0].starts_with("error "));
    assert_eq!(lines[1], "legal");
    assert_eq!(lines[2], "passed");
    assert_eq!(lines[3], "played c1 flips 1");
    assert_eq!(lines[4], "gameover black black 3 white 0");
}

#[test]
fn bad_position_reports_error_and_keeps_game() {
    let lines = run_engine(&["position 8/8/8 b", "legal", "quit"]);
    assert!(lines[0].starts_with("error "));
    assert_eq!(lines[1], "legal d3 c4 f5 e6");
}

#[test]
fn newgame_resets_position() {
    let lines = run_engine(&["play d3", "newgame", "score", "legal", "quit"]);
    assert_eq!(lines[1], "score black 2 white 2");
    assert_eq!(lines[2], "legal d3 c4 f5 e6");
}

#[test]
fn go_plays_whole_game() {
    let mut commands = vec!["setoption name Strategy value random", "setoption name Seed value 3"];
    commands.extend(std::iter::repeat("go").take(128));
    commands.push("quit");
    let lines = run_engine(&commands);

    let gameover: Vec<&String> = lines.iter().filter(|l| l.starts_with("gameover ")).collect();
    assert_eq!(gameover.len(), 1, "expected one gameover line: {:?}", lines);
    assert!(lines.iter().all(|l| l.starts_with("bestmove ") || l.starts_with("gameover ")));
    // Nothing after the game ends.
    assert!(lines.last().unwrap().starts_with("gameover "));
}
