//! Append-only record of board snapshots.

use super::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One recorded board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
}

impl HistoryEntry {
    /// Wraps a board snapshot.
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// The recorded board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Ordered board snapshots, index 0 being the empty starting board.
///
/// Entries are never edited in place. The only removal is
/// [`History::truncate_after`], which discards a superseded future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::new(Board::new())],
        }
    }

    /// Number of recorded snapshots (never zero).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the starting board is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// All snapshots in order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Keeps entries `0..=step` and drops everything after.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn truncate_after(&mut self, step: usize) {
        let keep = step.saturating_add(1);
        if keep < self.entries.len() {
            debug!(discarded = self.entries.len() - keep, "Discarding superseded history");
            self.entries.truncate(keep);
        }
    }

    /// Appends a snapshot and returns its step index.
    pub fn push(&mut self, board: Board) -> usize {
        self.entries.push(HistoryEntry::new(board));
        self.entries.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
