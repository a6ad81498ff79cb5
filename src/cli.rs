//! Command-line interface for tictactoe_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timetravel")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply moves without a UI and print the resulting view
    Replay {
        /// Cell indices (0-8) in play order, comma separated
        #[arg(short, long, value_delimiter = ',', num_args = 0..)]
        moves: Vec<usize>,

        /// History step to view after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
