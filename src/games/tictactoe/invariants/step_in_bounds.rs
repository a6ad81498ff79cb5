//! Step bounds invariant: the viewed step is always recorded.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `0 <= step < history_len`.
pub struct StepInBoundsInvariant;

impl Invariant<GameEngine> for StepInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.step < engine.history.len()
    }

    fn description() -> &'static str {
        "Viewed step is a valid history index"
    }
}
