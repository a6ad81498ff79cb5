//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::{LINES, check_winner};
use tracing::instrument;

/// Checks that every one of the 8 triples has all three squares occupied.
///
/// The marks need not match. Since the triples cover every square this
/// holds exactly when the board is full.
#[instrument(skip(board))]
pub fn all_lines_occupied(board: &Board) -> bool {
    LINES
        .iter()
        .all(|line| line.iter().all(|&pos| board.get(pos).is_occupied()))
}

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw: no winner and every triple fully occupied.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    check_winner(board).is_none() && all_lines_occupied(board)
}
