//! Headless replay: apply moves, optionally time-travel, and render the view.

use crate::games::tictactoe::{GameEngine, MoveOutcome, Snapshot};
use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

/// Replays `moves` on a fresh engine and jumps to `jump` if given.
///
/// Ignored moves are logged and skipped, like clicks on a filled square.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>) -> Result<GameEngine> {
    let mut engine = GameEngine::new();

    for (turn, &cell) in moves.iter().enumerate() {
        if let MoveOutcome::Rejected(reason) = engine.apply_move(cell) {
            warn!(turn, cell, %reason, "Skipping ignored move");
        }
    }

    if let Some(step) = jump {
        engine
            .jump_to(step)
            .with_context(|| format!("Cannot jump to step {step}"))?;
    }

    info!(step = engine.step(), status = %engine.status(), "Replay finished");
    Ok(engine)
}

/// Renders a snapshot as plain text: board, status line, and move list.
pub fn render_text(snapshot: &Snapshot) -> String {
    let mut out = snapshot.board.display();
    out.push_str("\n\n");
    out.push_str(&snapshot.status_text);
    out.push('\n');
    for entry in &snapshot.moves {
        let marker = if entry.current { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}. {}\n", entry.step, entry.label));
    }
    out
}

/// Renders a snapshot as pretty-printed JSON.
pub fn render_json(snapshot: &Snapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")
}
