//! Engine state management.
//!
//! Holds the current game, engine options, and the random source used by
//! `go`. Each handler writes its protocol response to the given writer.

use std::collections::HashMap;
use std::io::{self, Write};

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::eval::Strategy;
use crate::game::{Game, GameError};
use crate::protocol::pos::{encode_position, parse_position, PositionError};

/// Strategy used by `go` unless the `Strategy` option says otherwise.
const DEFAULT_STRATEGY: Strategy = Strategy::Positional;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub game: Game,
    pub options: HashMap<String, String>,
    rng: SmallRng,
}

impl Engine {
    /// Creates an engine at the starting position.
    pub fn new() -> Self {
        Engine {
            game: Game::new(),
            options: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Resets the game to the starting position. Options are kept.
    pub fn new_game(&mut self) {
        self.game.reset();
    }

    /// Replaces the current game with the given position.
    pub fn set_position(&mut self, pos: &str) -> Result<(), PositionError> {
        let (board, turn) = parse_position(pos)?;
        self.game = Game::from_position(board, turn);
        Ok(())
    }

    /// Sets an engine option. Setting `Seed` reseeds the random source.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        let value = value.unwrap_or_default();
        if name == "Seed" {
            match value.parse::<u64>() {
                Ok(seed) => self.rng = SmallRng::seed_from_u64(seed),
                Err(_) => warn!("invalid Seed value: '{}'", value),
            }
        }
        self.options.insert(name, value);
    }

    /// Returns the configured `go` strategy, or the default.
    fn strategy(&self) -> Strategy {
        match self.options.get("Strategy") {
            Some(v) => v.parse().unwrap_or_else(|e| {
                warn!("{}; using {}", e, DEFAULT_STRATEGY);
                DEFAULT_STRATEGY
            }),
            None => DEFAULT_STRATEGY,
        }
    }

    /// Handles the handshake: writes id, options, protocol_version, and otpok.
    pub fn handle_otp<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name oneillo")?;
        writeln!(out, "id author oneillo")?;
        writeln!(
            out,
            "option name Strategy type combo default {} var random var greedy var positional",
            DEFAULT_STRATEGY
        )?;
        writeln!(out, "option name Seed type spin default 0 min 0 max 18446744073709551615")?;
        writeln!(out, "protocol_version 1")?;
        writeln!(out, "otpok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles `position`: replies only on error.
    pub fn handle_position<W: Write>(&mut self, pos: &str, out: &mut W) -> io::Result<()> {
        if let Err(e) = self.set_position(pos) {
            writeln!(out, "error {}", e)?;
            out.flush()?;
        }
        Ok(())
    }

    /// Handles `play`: validates, applies and hands the turn over.
    pub fn handle_play<W: Write>(&mut self, row: usize, col: usize, out: &mut W) -> io::Result<()> {
        match self.game.play(row, col) {
            Ok(outcome) => {
                writeln!(out, "played {} flips {}", outcome.at, outcome.flipped.len())?;
                self.write_gameover(out)?;
            }
            Err(GameError::IllegalMove(at)) => writeln!(out, "illegal {}", at)?,
            Err(e) => writeln!(out, "error {}", e)?,
        }
        out.flush()
    }

    /// Handles `pass`.
    pub fn handle_pass<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.game.pass() {
            Ok(()) => writeln!(out, "passed")?,
            Err(e) => writeln!(out, "error {}", e)?,
        }
        out.flush()
    }

    /// Handles `legal`: lists placements for the side to move.
    pub fn handle_legal<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "legal")?;
        for at in self.game.legal_moves() {
            write!(out, " {}", at)?;
        }
        writeln!(out)?;
        out.flush()
    }

    /// Handles `board`: prints the grid, then the position string.
    pub fn handle_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let board = self.game.board();
        for cells in board.rows() {
            let line: String = cells.iter().map(|c| c.display_char()).collect();
            writeln!(out, "{}", line)?;
        }
        writeln!(out, "position {}", encode_position(board, self.game.turn()))?;
        out.flush()
    }

    /// Handles `score`.
    pub fn handle_score<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let score = self.game.score();
        writeln!(out, "score black {} white {}", score.black, score.white)?;
        out.flush()
    }

    /// Handles `go`: picks a move with the configured strategy and plays
    /// it, passing when there is nothing to place. Silent once the game
    /// is over.
    pub fn handle_go<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.game.is_over() {
            debug!("go: game is over");
            return Ok(());
        }

        let strategy = self.strategy();
        let turn = self.game.turn();
        match strategy.choose(self.game.board(), turn, &mut self.rng) {
            Some(at) => match self.game.play_at(at) {
                Ok(_) => {
                    writeln!(out, "bestmove {}", at)?;
                    self.write_gameover(out)?;
                }
                Err(e) => writeln!(out, "error {}", e)?,
            },
            None => match self.game.pass() {
                Ok(()) => writeln!(out, "bestmove pass")?,
                Err(e) => writeln!(out, "error {}", e)?,
            },
        }
        out.flush()
    }

    /// Writes the `gameover` line if neither side can move.
    fn write_gameover<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.game.is_over() {
            return Ok(());
        }
        let score = self.game.score();
        let result = self.game.winner().map_or("draw", |p| p.name());
        writeln!(
            out,
            "gameover {} black {} white {}",
            result, score.black, score.white
        )
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
