//! History-indexed game engine for tic-tac-toe.
//!
//! The engine records one board snapshot per accepted move and keeps a
//! pointer to the step being viewed. Jumping moves the pointer only; a
//! move made from an earlier step discards the snapshots after it.

use super::action::{JumpError, Move, MoveOutcome, MoveRejection};
use super::history::History;
#[cfg(debug_assertions)]
use super::invariants::{EngineInvariants, InvariantSet};
use super::snapshot::{MoveEntry, Snapshot};
use super::status::GameStatus;
use super::{Board, Player, Position};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe engine with time-travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) history: History,
    pub(crate) step: usize,
}

impl GameEngine {
    /// Creates an engine at the empty starting board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step: 0,
        }
    }

    /// Builds an engine by applying `cells` in order.
    ///
    /// Illegal cells are skipped exactly as [`GameEngine::apply_move`]
    /// skips them.
    #[instrument(skip(cells))]
    pub fn replay(cells: impl IntoIterator<Item = usize>) -> Self {
        let mut engine = Self::new();
        for cell in cells {
            engine.apply_move(cell);
        }
        engine
    }

    /// Places the active player's mark at `cell` (0-8).
    ///
    /// Ignored when the cell is off the board or occupied, or when the
    /// viewed board is already won or drawn. Otherwise the history is cut
    /// back to the viewed step, the new board appended, and the view moved
    /// to it.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn apply_move(&mut self, cell: usize) -> MoveOutcome {
        let outcome = match self.check_move(cell) {
            Ok(position) => {
                let mv = Move::new(self.next_player(), position);
                let next = self.current_board().with_mark(position, mv.player);

                self.history.truncate_after(self.step);
                self.step = self.history.push(next);
                debug!(%mv, step = self.step, "Move accepted");

                MoveOutcome::Accepted { mv, step: self.step }
            }
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                MoveOutcome::Rejected(rejection)
            }
        };

        #[cfg(debug_assertions)]
        self.assert_invariants();

        outcome
    }

    /// Views the snapshot at `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::StepOutOfRange`] if `step` was never recorded;
    /// the viewed step is left unchanged.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        let len = self.history.len();
        if step >= len {
            warn!(len, "Jump target out of range");
            return Err(JumpError::StepOutOfRange { step, len });
        }

        self.step = step;
        debug!("Jumped");
        Ok(())
    }

    /// Status of the board at the viewed step.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current_board(), self.next_player())
    }

    /// The board at the viewed step.
    pub fn current_board(&self) -> &Board {
        self.history.entries()[self.step].board()
    }

    /// The full recorded history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of recorded snapshots, including the starting board.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the viewed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// True when X moves next, i.e. the viewed step is even.
    pub fn x_is_next(&self) -> bool {
        self.step % 2 == 0
    }

    /// The player who moves next from the viewed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Positions still open on the viewed board, empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_over() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    /// One entry per recorded step, for rendering a "go to move" list.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|step| MoveEntry::new(step, step == self.step))
            .collect()
    }

    /// Render-ready view of the engine.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_engine(self)
    }

    fn check_move(&self, cell: usize) -> Result<Position, MoveRejection> {
        let position = Position::from_index(cell).ok_or(MoveRejection::OutOfBounds(cell))?;

        let status = self.status();
        if status.is_over() {
            return Err(MoveRejection::GameOver(status));
        }

        if !self.current_board().is_empty(position) {
            return Err(MoveRejection::SquareOccupied(position));
        }

        Ok(position)
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        if let Err(violations) = EngineInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Engine invariants violated: {descriptions}");
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
