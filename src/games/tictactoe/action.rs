//! Move and jump results for the game engine.
//!
//! Illegal moves are not failures: the engine ignores them and reports
//! why through [`MoveOutcome::Rejected`], which callers are free to drop.

use super::status::GameStatus;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A mark placed by a player at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The cell index is not on the board.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The viewed board is already won or drawn.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),
}

/// Result of [`GameEngine::apply_move`](super::GameEngine::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was recorded as a new history step.
    Accepted {
        /// The mark that was placed.
        mv: Move,
        /// Step index of the new snapshot.
        step: usize,
    },
    /// The move was ignored; the engine state is unchanged.
    Rejected(MoveRejection),
}

impl MoveOutcome {
    /// Returns true if the move was recorded.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// Error returned by [`GameEngine::jump_to`](super::GameEngine::jump_to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// The requested step is not in the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
