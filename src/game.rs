//! Game session.
//!
//! A `Game` owns the board and the side to move. It is the only way the
//! board changes during play: `apply_move` places and flips, and the turn
//! flips only through `switch_turn`, `play` (legal placement then toggle)
//! or `pass`.

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::board::{Board, Cell, Coord, CoordError, Player, Score};
use crate::movegen;
use crate::resolve;

/// Errors returned by the game session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordError),

    #[error("invalid move at {0}, try again")]
    IllegalMove(Coord),

    #[error("cannot pass while a legal move is available")]
    PassNotAllowed,

    #[error("the game is over")]
    GameOver,
}

/// One entry of the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Coord),
    Pass,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(at) => write!(f, "{}", at),
            Move::Pass => write!(f, "pass"),
        }
    }
}

/// The result of a successful `play`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: Player,
    pub at: Coord,
    pub flipped: Vec<Coord>,
}

/// Board plus side to move, with the move history since the last reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Player,
    history: Vec<Move>,
}

impl Game {
    /// Starts a new game from the standard position with Black to move.
    pub fn new() -> Self {
        Game {
            board: Board::initial(),
            turn: Player::Black,
            history: Vec::new(),
        }
    }

    /// Starts from an arbitrary position.
    pub fn from_position(board: Board, turn: Player) -> Self {
        Game {
            board,
            turn,
            history: Vec::new(),
        }
    }

    /// Restores the standard starting position and clears the history.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Player::Black;
        self.history.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Disc colour of the side to move.
    pub fn current_color(&self) -> Cell {
        self.turn.cell()
    }

    /// Disc colour of the side not to move.
    pub fn opponent_color(&self) -> Cell {
        self.turn.opponent().cell()
    }

    /// Returns whether the side to move may place at `(row, col)`.
    ///
    /// Fails only for off-board coordinates.
    pub fn is_legal_move(&self, row: usize, col: usize) -> Result<bool, GameError> {
        let at = Coord::new(row, col)?;
        Ok(movegen::is_legal_move(&self.board, at, self.turn))
    }

    /// Places the side to move's disc at `(row, col)` and flips captured
    /// discs. The caller must have checked legality; the turn is not
    /// switched.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Vec<Coord>, GameError> {
        let at = Coord::new(row, col)?;
        Ok(self.apply_at(at))
    }

    fn apply_at(&mut self, at: Coord) -> Vec<Coord> {
        let flipped = resolve::apply_move(&mut self.board, at, self.turn);
        self.history.push(Move::Place(at));
        flipped
    }

    /// Hands the move to the other side.
    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Validates, applies and then switches the turn. On an illegal move,
    /// or once the game is over, nothing changes.
    pub fn play(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        let at = Coord::new(row, col)?;
        self.play_at(at)
    }

    /// Same as [`Game::play`] for an already validated coordinate.
    pub fn play_at(&mut self, at: Coord) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !movegen::is_legal_move(&self.board, at, self.turn) {
            debug!("{} rejected at {}", self.turn.name(), at);
            return Err(GameError::IllegalMove(at));
        }
        let player = self.turn;
        let flipped = self.apply_at(at);
        debug!("{} plays {}, flipping {}", player.name(), at, flipped.len());
        self.switch_turn();
        Ok(MoveOutcome {
            player,
            at,
            flipped,
        })
    }

    /// Passes the turn. Only allowed when the side to move has no legal
    /// placement and the opponent still has one.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.has_legal_move() {
            return Err(GameError::PassNotAllowed);
        }
        debug!("{} passes", self.turn.name());
        self.history.push(Move::Pass);
        self.switch_turn();
        Ok(())
    }

    /// Legal placements for the side to move, row-major.
    pub fn legal_moves(&self) -> Vec<Coord> {
        movegen::legal_moves(&self.board, self.turn)
    }

    pub fn has_legal_move(&self) -> bool {
        movegen::has_legal_move(&self.board, self.turn)
    }

    /// True when neither side can place a disc.
    pub fn is_over(&self) -> bool {
        !movegen::has_legal_move(&self.board, Player::Black)
            && !movegen::has_legal_move(&self.board, Player::White)
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// The side with more discs once the game is over. `None` while the
    /// game is running or on a draw.
    pub fn winner(&self) -> Option<Player> {
        if !self.is_over() {
            return None;
        }
        let score = self.score();
        match score.black.cmp(&score.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
