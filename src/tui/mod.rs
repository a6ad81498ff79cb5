//! Terminal UI host for the time-travel engine.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

use crate::config::AppConfig;

/// Runs the TUI until the player quits.
///
/// The terminal is restored on every exit path, including a failed setup.
#[instrument(skip(config))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let res = setup_and_run(config);
    let restored = restore_terminal();

    let res = finish(res, restored);
    if let Err(e) = &res {
        error!(error = %e, "TUI exited with error");
    }
    info!("TUI closed");
    res
}

fn setup_and_run(config: &AppConfig) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let app = App::new(*config.show_cell_numbers());
    let tick = Duration::from_millis(*config.tick_rate_ms());
    run_app(&mut terminal, app, tick)
}

/// Leaves raw mode and the alternate screen, attempting both steps.
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let mut stdout = io::stdout();
    let screen = execute!(stdout, LeaveAlternateScreen, Show)
        .context("Failed to leave alternate screen");
    raw.and(screen)
}

/// Combines the event loop result with the restore result.
///
/// The loop's own error wins; a restore failure is only returned when the
/// loop succeeded.
fn finish(run: Result<()>, restored: Result<()>) -> Result<()> {
    match (run, restored) {
        (Err(e), Err(restore)) => {
            warn!(error = %restore, "Failed to restore terminal");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored,
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == AppAction::Quit
        {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_keeps_loop_error_over_restore_error() {
        let res = finish(
            Err(anyhow::anyhow!("draw failed")),
            Err(anyhow::anyhow!("raw mode stuck")),
        );
        assert_eq!(res.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn test_finish_reports_restore_error_after_clean_exit() {
        let res = finish(Ok(()), Err(anyhow::anyhow!("raw mode stuck")));
        assert_eq!(res.unwrap_err().to_string(), "raw mode stuck");
    }

    #[test]
    fn test_finish_clean() {
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
