//! Text protocol handling.
//!
//! This module implements the position notation used by the `position`
//! and `board` commands and the command parser for the main loop.

pub mod parser;
pub mod pos;

pub use parser::{parse_command, Command};
pub use pos::{encode_position, parse_position, PositionError, START_POS};
