//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::super::{Board, GameEngine, Player, Position, Square};
use super::Invariant;

/// Invariant: adjacent snapshots differ in exactly one cell, which was
/// empty in the earlier one.
///
/// Squares are never overwritten or cleared between steps.
pub struct SingleCellDeltaInvariant;

/// Returns the single mark added between `before` and `after`.
///
/// `None` if zero or several cells changed, or if the change overwrote
/// or cleared a square.
pub(super) fn added_mark(before: &Board, after: &Board) -> Option<(Position, Player)> {
    let mut changed = Position::ALL
        .into_iter()
        .filter(|&pos| before.get(pos) != after.get(pos));

    let pos = changed.next()?;
    if changed.next().is_some() {
        return None;
    }

    match (before.get(pos), after.get(pos)) {
        (Square::Empty, Square::Occupied(player)) => Some((pos, player)),
        _ => None,
    }
}

impl Invariant<GameEngine> for SingleCellDeltaInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history
            .entries()
            .windows(2)
            .all(|pair| added_mark(pair[0].board(), pair[1].board()).is_some())
    }

    fn description() -> &'static str {
        "Each history step adds exactly one mark to an empty square"
    }
}
