//! oneillo engine library.
//!
//! Exposes the board representation, move generation and application, the
//! game session, move selection, and protocol modules for use by
//! integration tests and the binary entry points.

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod protocol;
pub mod resolve;
pub mod selfplay;
