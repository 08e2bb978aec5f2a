//! Self-play game generation.
//!
//! Plays full games with the engine on both sides, each colour using its
//! configured strategy and passing when forced. Records the move list and
//! final result of every game for analysis or training.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Player;
use crate::eval::{Strategy, UnknownStrategy};
use crate::game::{Game, Move};
use crate::protocol::pos::encode_position;

/// Configuration for self-play game generation.
///
/// Every field has a default, so a JSON config file may set any subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Strategy for the black side.
    pub black: Strategy,
    /// Strategy for the white side.
    pub white: Strategy,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            black: Strategy::Random,
            white: Strategy::Random,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

impl SelfPlayConfig {
    /// Strategy for the given side.
    pub fn strategy_for(&self, player: Player) -> Strategy {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

/// Errors that can occur while loading a self-play config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownStrategy(#[from] UnknownStrategy),
}

/// Loads a self-play config from a JSON file at the given path.
pub fn load_config(path: &Path) -> Result<SelfPlayConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    config_from_str(&data)
}

/// On-disk form of [`SelfPlayConfig`]. Strategy names go through
/// `Strategy::from_str` so files accept the same spellings as the CLI.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ConfigFile {
    num_games: usize,
    black: String,
    white: String,
    threads: usize,
    seed: u64,
    quiet: bool,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let base = SelfPlayConfig::default();
        ConfigFile {
            num_games: base.num_games,
            black: base.black.to_string(),
            white: base.white.to_string(),
            threads: base.threads,
            seed: base.seed,
            quiet: base.quiet,
        }
    }
}

/// Loads a self-play config from a JSON string.
pub fn config_from_str(json: &str) -> Result<SelfPlayConfig, ConfigError> {
    let file: ConfigFile = serde_json::from_str(json)?;
    Ok(SelfPlayConfig {
        num_games: file.num_games,
        black: file.black.parse()?,
        white: file.white.parse()?,
        threads: file.threads,
        seed: file.seed,
        quiet: file.quiet,
    })
}

/// A complete self-play game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    pub black: Strategy,
    pub white: Strategy,
    /// Squares in algebraic notation, `pass` for passes.
    pub moves: Vec<String>,
    /// The side with more discs, `None` on a draw.
    pub winner: Option<Player>,
    pub black_discs: u8,
    pub white_discs: u8,
    pub passes: usize,
    /// Final position in position notation.
    pub final_position: String,
}

/// Returns the seeded or entropy RNG for game `game_id`.
fn game_rng(config: &SelfPlayConfig, game_id: usize) -> SmallRng {
    if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays a single self-play game and returns the game record.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let mut game = Game::new();

    while !game.is_over() {
        let turn = game.turn();
        let strategy = config.strategy_for(turn);
        let result = match strategy.choose(game.board(), turn, rng) {
            Some(at) => game.play_at(at).map(|_| ()),
            None => game.pass(),
        };
        if let Err(e) = result {
            // A chooser only returns legal squares, so this ends the game
            // rather than looping on a rejected move.
            warn!("game {}: {} move rejected: {}", game_id, turn.name(), e);
            break;
        }
    }

    let score = game.score();
    let moves: Vec<String> = game.history().iter().map(|m| m.to_string()).collect();
    let passes = game.history().iter().filter(|m| **m == Move::Pass).count();

    GameRecord {
        game_id,
        black: config.black,
        white: config.white,
        moves,
        winner: game.winner(),
        black_discs: score.black,
        white_discs: score.white,
        passes,
        final_position: encode_position(game.board(), game.turn()),
    }
}

/// Runs self-play generation, producing multiple game records ordered by
/// game ID.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    run_self_play_with_callback(config, |game| {
        games.push(game);
    });
    games.sort_by_key(|g| g.game_id);
    games
}

/// Runs self-play generation, calling `on_game` with each completed game
/// record in completion order.
pub fn run_self_play_with_callback<F>(config: &SelfPlayConfig, on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_self_play_parallel(config, on_game);
    } else {
        run_self_play_sequential(config, on_game);
    }
}

fn log_game(config: &SelfPlayConfig, n: usize, game: &GameRecord, started: Instant) {
    if config.quiet {
        return;
    }
    let outcome = match game.winner {
        Some(w) => format!("{} wins", w.name()),
        None => "draw".to_string(),
    };
    info!(
        "Game {}/{}: {} {}-{} after {} moves ({:.1}ms)",
        n,
        config.num_games,
        outcome,
        game.black_discs,
        game.white_discs,
        game.moves.len(),
        started.elapsed().as_secs_f64() * 1000.0,
    );
}

/// Sequential self-play: plays games one at a time.
fn run_self_play_sequential<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    for i in 0..config.num_games {
        let started = Instant::now();
        let mut rng = game_rng(config, i);
        let game = play_game(config, i, &mut rng);
        log_game(config, i + 1, &game, started);
        on_game(game);
    }
}

/// Parallel self-play: plays games concurrently using rayon.
/// Uses a channel to deliver completed games to the callback from worker threads.
fn run_self_play_parallel<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
    {
        Ok(pool) => pool,
        Err(e) => {
            warn!("failed to build thread pool ({}), playing sequentially", e);
            run_self_play_sequential(config, on_game);
            return;
        }
    };

    let (tx, rx) = mpsc::channel::<GameRecord>();
    let completed = AtomicUsize::new(0);
    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        pool.install(|| {
            (0..config_clone.num_games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let started = Instant::now();
                    let mut rng = game_rng(&config_clone, i);
                    let game = play_game(&config_clone, i, &mut rng);
                    let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    log_game(&config_clone, n, &game, started);
                    let _ = tx.send(game);
                });
        });
    });

    // Receive completed games on the calling thread and pass to callback.
    for game in rx {
        on_game(game);
    }

    if let Err(panic) = handle.join() {
        std::panic::resume_unwind(panic);
    }
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Aggregate statistics over a batch of games.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_passes: f64,
}

/// Computes win/draw counts and average game length.
pub fn summarize(games: &[GameRecord]) -> Summary {
    let mut summary = Summary {
        games: games.len(),
        ..Summary::default()
    };
    let mut total_moves = 0usize;
    let mut total_passes = 0usize;

    for game in games {
        total_moves += game.moves.len();
        total_passes += game.passes;
        match game.winner {
            Some(Player::Black) => summary.black_wins += 1,
            Some(Player::White) => summary.white_wins += 1,
            None => summary.draws += 1,
        }
    }

    let n = games.len().max(1) as f64;
    summary.avg_moves = total_moves as f64 / n;
    summary.avg_passes = total_passes as f64 / n;
    summary
}

/// Prints a summary of self-play results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let s = summarize(games);
    let pct = |n: usize| 100.0 * n as f64 / s.games.max(1) as f64;

    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", s.games);
    eprintln!("Avg moves/game: {:.1}", s.avg_moves);
    eprintln!("Avg passes/game: {:.2}", s.avg_passes);
    eprintln!("Black wins: {} ({:.1}%)", s.black_wins, pct(s.black_wins));
    eprintln!("White wins: {} ({:.1}%)", s.white_wins, pct(s.white_wins));
    eprintln!("Draws: {} ({:.1}%)", s.draws, pct(s.draws));
}
