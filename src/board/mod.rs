//! Board representation and game-state types.
//!
//! Contains the core data structures for cells, players, coordinates,
//! compass directions, and the grid itself.

pub mod cell;
pub mod coord;
pub mod state;

pub use cell::{Cell, Player, ALL_PLAYERS};
pub use coord::{Coord, CoordError, Direction, Ray, BOARD_SIZE, CELL_COUNT, DIRECTIONS};
pub use state::{Board, Score};
