//! Render-ready view of a [`GameEngine`].

use super::engine::GameEngine;
use super::status::GameStatus;
use super::Board;
use serde::{Deserialize, Serialize};

/// One row of the "go to move" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// True for the step currently viewed.
    pub current: bool,
}

impl MoveEntry {
    /// Creates the entry for `step`.
    pub fn new(step: usize, current: bool) -> Self {
        let label = if step == 0 {
            "Go to Game Start".to_string()
        } else {
            format!("Go to move #{step}")
        };
        Self {
            step,
            label,
            current,
        }
    }
}

/// Everything a hosting UI needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board at the viewed step.
    pub board: Board,
    /// Viewed step.
    pub step: usize,
    /// Number of recorded snapshots.
    pub history_len: usize,
    /// Status of the viewed board.
    pub status: GameStatus,
    /// Human-readable status line.
    pub status_text: String,
    /// Entries for the move list.
    pub moves: Vec<MoveEntry>,
}

impl Snapshot {
    /// Captures the current view of `engine`.
    pub fn from_engine(engine: &GameEngine) -> Self {
        let status = engine.status();
        Self {
            board: *engine.current_board(),
            step: engine.step(),
            history_len: engine.history_len(),
            status,
            status_text: status.to_string(),
            moves: engine.move_list(),
        }
    }
}
