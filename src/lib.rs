//! Tic-tac-toe with move history and time-travel.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] records one board per move and can view
//!   any earlier step. Moving from an earlier step discards the rest.
//! - **Rules**: pure win and draw checks over a single [`Board`].
//! - **Hosts**: a terminal UI ([`run_tui`]) and a headless
//!   [`replay`](replay::replay) used by the CLI.
//!
//! # Example
//!
//! ```
//! use tictactoe_timetravel::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 4, 1, 3, 2] {
//!     engine.apply_move(cell);
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//!
//! engine.jump_to(2).unwrap();
//! assert_eq!(engine.status(), GameStatus::InProgress(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod games;
pub mod replay;
mod tui;

// Crate-level exports - CLI and configuration
pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, Focus, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameEngine, GameStatus, History, HistoryEntry, JumpError, Move, MoveEntry, MoveOutcome,
    MoveRejection, Player, Position, Snapshot, Square, invariants, rules,
};
