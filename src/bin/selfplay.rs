//! Self-play game generation CLI.
//!
//! Plays O'Neillo games engine-against-engine and outputs records as JSONL.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --config FILE   JSON config file; flags given after it override it
//!   --games N       Number of games to play (default: 10)
//!   --black S       Strategy for black: random, greedy, positional (default: random)
//!   --white S       Strategy for white (default: random)
//!   --threads N     Number of parallel threads (default: 4)
//!   --seed N        Random seed, 0 for entropy (default: 0)
//!   --output FILE   Output file path (default: stdout)
//!   --quiet         Suppress progress and summary output

use std::env;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use oneillo::selfplay::{self, SelfPlayConfig};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let (config, output_path) = match parse_args(&args) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("{}", msg);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let default_filter = if config.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if !config.quiet {
        eprintln!(
            "Self-play: {} games, black {}, white {}, {} threads",
            config.num_games, config.black, config.white, config.threads
        );
    }

    let start = Instant::now();
    let games = selfplay::run_self_play(&config);
    let elapsed = start.elapsed();

    if !config.quiet {
        eprintln!(
            "Completed {} games in {:.2}s",
            games.len(),
            elapsed.as_secs_f64()
        );
        selfplay::print_summary(&games);
    }

    let written = match &output_path {
        Some(path) => File::create(path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&games, &mut writer)
        }),
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer)
        }
    };

    match (written, output_path) {
        (Ok(()), Some(path)) => {
            if !config.quiet {
                eprintln!("Wrote {} games to {}", games.len(), path);
            }
            ExitCode::SUCCESS
        }
        (Ok(()), None) => ExitCode::SUCCESS,
        (Err(e), _) => {
            eprintln!("failed to write output: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Parses command-line flags. Returns `Ok(None)` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<(SelfPlayConfig, Option<String>)>, String> {
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" => {
                let path = value_of(args, &mut i, flag)?;
                config = selfplay::load_config(Path::new(path)).map_err(|e| e.to_string())?;
            }
            "--games" => config.num_games = parse_value(args, &mut i, flag)?,
            "--black" => config.black = parse_value(args, &mut i, flag)?,
            "--white" => config.white = parse_value(args, &mut i, flag)?,
            "--threads" => config.threads = parse_value(args, &mut i, flag)?,
            "--seed" => config.seed = parse_value(args, &mut i, flag)?,
            "--output" => output_path = Some(value_of(args, &mut i, flag)?.to_string()),
            "--quiet" => config.quiet = true,
            "--help" | "-h" => return Ok(None),
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(Some((config, output_path)))
}

/// Advances past a flag and returns its value.
fn value_of<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("missing value for {}", flag))
}

fn parse_value<T>(args: &[String], i: &mut usize, flag: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = value_of(args, i, flag)?;
    raw.parse()
        .map_err(|e| format!("invalid {} value '{}': {}", flag, raw, e))
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    JSON config file (later flags override it)");
    eprintln!("  --games N        Number of games to play (default: 10)");
    eprintln!("  --black S        Black strategy: random, greedy, positional (default: random)");
    eprintln!("  --white S        White strategy (default: random)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress progress and summary output");
    eprintln!("  --help           Show this help");
}

#[cfg(test)]
mod tests {
    use super::*;

    use oneillo::eval::Strategy;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("selfplay")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    fn parsed(list: &[&str]) -> (SelfPlayConfig, Option<String>) {
        parse_args(&args(list)).unwrap().unwrap()
    }

    #[test]
    fn no_flags_gives_defaults() {
        let (config, output) = parsed(&[]);
        assert_eq!(config, SelfPlayConfig::default());
        assert_eq!(output, None);
    }

    #[test]
    fn flags_set_every_field() {
        let (config, output) = parsed(&[
            "--games", "3", "--black", "greedy", "--white", "Positional", "--threads", "2",
            "--seed", "9", "--output", "out.jsonl", "--quiet",
        ]);
        assert_eq!(config.num_games, 3);
        assert_eq!(config.black, Strategy::Greedy);
        assert_eq!(config.white, Strategy::Positional);
        assert_eq!(config.threads, 2);
        assert_eq!(config.seed, 9);
        assert!(config.quiet);
        assert_eq!(output.as_deref(), Some("out.jsonl"));
    }

    #[test]
    fn help_returns_none() {
        assert_eq!(parse_args(&args(&["--help"])), Ok(None));
        assert_eq!(parse_args(&args(&["--games", "2", "-h"])), Ok(None));
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = parse_args(&args(&["--fast"])).unwrap_err();
        assert!(err.contains("--fast"), "{}", err);
    }

    #[test]
    fn missing_value_is_an_error() {
        let err = parse_args(&args(&["--games"])).unwrap_err();
        assert_eq!(err, "missing value for --games");
    }

    #[test]
    fn bad_values_are_errors() {
        let err = parse_args(&args(&["--games", "lots"])).unwrap_err();
        assert!(err.starts_with("invalid --games value 'lots'"), "{}", err);
        let err = parse_args(&args(&["--black", "minimax"])).unwrap_err();
        assert!(err.contains("minimax"), "{}", err);
    }

    #[test]
    fn later_flags_override_config_file() {
        let path = env::temp_dir().join(format!("oneillo-selfplay-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"num_games": 7, "black": "greedy", "seed": 5}"#).unwrap();
        let path_str = path.to_str().unwrap();

        let (config, _) = parsed(&["--config", path_str, "--games", "2"]);
        assert_eq!(config.num_games, 2);
        assert_eq!(config.black, Strategy::Greedy);
        assert_eq!(config.seed, 5);

        // Flags before --config are replaced by the file.
        let (config, _) = parsed(&["--games", "2", "--config", path_str]);
        assert_eq!(config.num_games, 7);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = parse_args(&args(&["--config", "/nonexistent/selfplay.json"])).unwrap_err();
        assert!(err.contains("/nonexistent/selfplay.json"), "{}", err);
    }
}
