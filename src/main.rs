//! oneillo -- an O'Neillo (Othello) engine driven by a text protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Diagnostics go to stderr through `env_logger` (`RUST_LOG` to adjust).

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use log::error;

use oneillo::engine::Engine;
use oneillo::protocol::parser::{parse_command, Command};

/// Runs the main protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match run(stdin.lock(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("output error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let mut engine = Engine::new();

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Otp => engine.handle_otp(out)?,
            Command::IsReady => engine.handle_isready(out)?,
            Command::SetOption { name, value } => engine.set_option(name, value),
            Command::NewGame => engine.new_game(),
            Command::Position { pos } => engine.handle_position(&pos, out)?,
            Command::Play { row, col } => engine.handle_play(row, col, out)?,
            Command::Pass => engine.handle_pass(out)?,
            Command::Legal => engine.handle_legal(out)?,
            Command::Board => engine.handle_board(out)?,
            Command::Score => engine.handle_score(out)?,
            Command::Go => engine.handle_go(out)?,
            Command::Quit => break,
        }
    }

    out.flush()
}
