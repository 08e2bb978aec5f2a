//! Text protocol command parser.
//!
//! Parses incoming protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use log::warn;

use crate::board::Coord;

use super::pos::START_POS;

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the protocol handshake.
    Otp,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset to the starting position.
    NewGame,

    /// Load a position; `startpos` is expanded to the starting position.
    Position { pos: String },

    /// Place a disc for the side to move. Row and column are not range
    /// checked here so the engine can report off-board input.
    Play { row: usize, col: usize },

    /// Pass the turn.
    Pass,

    /// List legal placements for the side to move.
    Legal,

    /// Print the board.
    Board,

    /// Print disc counts.
    Score,

    /// Let the engine choose and play a move for the side to move.
    Go,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "otp" => Some(Command::Otp),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "pass" => Some(Command::Pass),
        "legal" => Some(Command::Legal),
        "board" => Some(Command::Board),
        "score" => Some(Command::Score),
        "go" => Some(Command::Go),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "play" => parse_play(&tokens),

        other => {
            warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                warn!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `position startpos` or `position <ranks> <side>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    match tokens.len() {
        2 if tokens[1] == "startpos" => Some(Command::Position {
            pos: START_POS.to_string(),
        }),
        3 => Some(Command::Position {
            pos: format!("{} {}", tokens[1], tokens[2]),
        }),
        _ => {
            warn!("malformed position: expected 'position startpos' or 'position <ranks> <side>'");
            None
        }
    }
}

/// Parses `play <square>` or `play <row> <col>`.
fn parse_play(tokens: &[&str]) -> Option<Command> {
    match tokens.len() {
        2 => match tokens[1].parse::<Coord>() {
            Ok(at) => Some(Command::Play {
                row: at.row(),
                col: at.col(),
            }),
            Err(e) => {
                warn!("malformed play: {}", e);
                None
            }
        },
        3 => match (tokens[1].parse::<usize>(), tokens[2].parse::<usize>()) {
            (Ok(row), Ok(col)) => Some(Command::Play { row, col }),
            _ => {
                warn!("malformed play: row and column must be non-negative integers");
                None
            }
        },
        _ => {
            warn!("malformed play: expected 'play <square>' or 'play <row> <col>'");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("otp"), Some(Command::Otp));
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("newgame"), Some(Command::NewGame));
        assert_eq!(parse_command("pass"), Some(Command::Pass));
        assert_eq!(parse_command("legal"), Some(Command::Legal));
        assert_eq!(parse_command("board"), Some(Command::Board));
        assert_eq!(parse_command("score"), Some(Command::Score));
        assert_eq!(parse_command("go"), Some(Command::Go));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("foobar"), None);
    }

    #[test]
    fn parse_setoption_with_value() {
        let cmd = parse_command("setoption name Strategy value greedy").unwrap();
        assert_eq!(
            cmd,
            Command::SetOption {
                name: "Strategy".to_string(),
                value: Some("greedy".to_string()),
            }
        );
    }

    #[test]
    fn parse_setoption_no_value() {
        let cmd = parse_command("setoption name Seed").unwrap();
        assert_eq!(
            cmd,
            Command::SetOption {
                name: "Seed".to_string(),
                value: None,
            }
        );
    }

    #[test]
    fn parse_setoption_malformed_returns_none() {
        assert_eq!(parse_command("setoption"), None);
        assert_eq!(parse_command("setoption foo"), None);
        assert_eq!(parse_command("setoption name value 3"), None);
    }

    #[test]
    fn parse_position_startpos() {
        assert_eq!(
            parse_command("position startpos"),
            Some(Command::Position {
                pos: START_POS.to_string()
            })
        );
    }

    #[test]
    fn parse_position_explicit() {
        assert_eq!(
            parse_command("position 8/8/8/3wb3/3bw3/8/8/8 w"),
            Some(Command::Position {
                pos: "8/8/8/3wb3/3bw3/8/8/8 w".to_string()
            })
        );
    }

    #[test]
    fn parse_position_malformed_returns_none() {
        assert_eq!(parse_command("position"), None);
        assert_eq!(parse_command("position 8/8/8/3wb3/3bw3/8/8/8"), None);
    }

    #[test]
    fn parse_play_square() {
        assert_eq!(
            parse_command("play d3"),
            Some(Command::Play { row: 2, col: 3 })
        );
    }

    #[test]
    fn parse_play_row_col_keeps_range() {
        assert_eq!(
            parse_command("play 2 3"),
            Some(Command::Play { row: 2, col: 3 })
        );
        assert_eq!(
            parse_command("play 9 0"),
            Some(Command::Play { row: 9, col: 0 })
        );
    }

    #[test]
    fn parse_play_malformed_returns_none() {
        assert_eq!(parse_command("play"), None);
        assert_eq!(parse_command("play z9"), None);
        assert_eq!(parse_command("play -1 3"), None);
        assert_eq!(parse_command("play 1 2 3"), None);
    }

    #[test]
    fn parse_with_leading_trailing_whitespace() {
        assert_eq!(parse_command("  otp  "), Some(Command::Otp));
        assert_eq!(parse_command("  isready  "), Some(Command::IsReady));
    }
}
