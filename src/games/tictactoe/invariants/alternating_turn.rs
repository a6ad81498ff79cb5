//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player};
use super::Invariant;
use super::single_cell_delta::added_mark;

/// Invariant: the mark added at step `k + 1` belongs to the player for
/// step `k`, so X moves from even steps and O from odd steps.
///
/// Steps that do not add a single mark are left to
/// [`SingleCellDeltaInvariant`](super::SingleCellDeltaInvariant).
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history
            .entries()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| match added_mark(pair[0].board(), pair[1].board()) {
                Some((_, player)) => player == Player::for_step(step),
                None => true,
            })
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}
