//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board). Rules are kept
//! apart from the engine so they can be evaluated against any recorded
//! snapshot in the history.

pub mod draw;
pub mod win;

pub use draw::{all_lines_occupied, is_draw, is_full};
pub use win::{LINES, check_winner};
