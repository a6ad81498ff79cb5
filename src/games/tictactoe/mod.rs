//! Tic-tac-toe with move history and time-travel.

mod action;
mod engine;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod status;
mod types;

pub use action::{JumpError, Move, MoveOutcome, MoveRejection};
pub use engine::GameEngine;
pub use history::{History, HistoryEntry};
pub use position::Position;
pub use snapshot::{MoveEntry, Snapshot};
pub use status::GameStatus;
pub use types::{Board, Player, Square};
