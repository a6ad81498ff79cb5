//! Terminal status of a board snapshot.

use super::rules::{check_winner, is_draw};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the board at the viewed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing; the player to move next.
    #[display("Next player is: {_0}")]
    InProgress(Player),
    /// A player completed three in a row.
    #[display("Winner is: {_0} !")]
    Won(Player),
    /// Every line is occupied and nobody won.
    #[display("Game is a draw!")]
    Draw,
}

impl GameStatus {
    /// Evaluates `board`, with `next` as the player to move if play continues.
    ///
    /// A winner takes precedence over a draw.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board, next: Player) -> Self {
        if let Some(winner) = check_winner(board) {
            GameStatus::Won(winner)
        } else if is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(next)
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}
