//! tictactoe_timetravel - unified CLI
//!
//! Play in the terminal, or replay a move list headlessly.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_timetravel::{AppConfig, Cli, Command, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play => {
            init_file_logging(&config)?;
            run_tui(&config)
        }
        Command::Replay { moves, jump, json } => {
            init_stderr_logging(&config);
            run_replay(&moves, jump, json)
        }
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to a file so the TUI keeps the terminal to itself.
fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging(config: &AppConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_replay(moves: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    info!(moves = moves.len(), ?jump, "Replaying moves");
    let snapshot = replay::replay(moves, jump)?.snapshot();

    let output = if json {
        replay::render_json(&snapshot)?
    } else {
        replay::render_text(&snapshot)
    };
    println!("{output}");
    Ok(())
}
