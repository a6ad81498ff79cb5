//! Application state and logic.

use crate::games::tictactoe::{GameEngine, MoveOutcome, Position};
use crossterm::event::KeyCode;
use tracing::{debug, instrument};

use super::input::{digit_cell, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 board.
    Board,
    /// The "go to move" list.
    History,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
///
/// Owns the engine; the UI is redrawn from it after every key press.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    message: Option<String>,
    show_cell_numbers: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_cell_numbers: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            message: None,
            show_cell_numbers,
        }
    }

    /// The engine being displayed.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The highlighted board cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The highlighted row of the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether empty squares show their cell number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => self.toggle_focus(),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
        AppAction::Continue
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine = GameEngine::new();
        self.selected_step = 0;
        self.message = Some("Game restarted".to_string());
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected_step = self.engine.step();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        if let Some(cell) = digit_cell(key) {
            if let Some(pos) = Position::from_index(cell) {
                self.cursor = pos;
            }
            self.play(cell);
            return;
        }

        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.engine.history_len() - 1;
        match key {
            KeyCode::Up => self.selected_step = self.selected_step.saturating_sub(1),
            KeyCode::Down => self.selected_step = (self.selected_step + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected_step),
            _ => {}
        }
    }

    fn play(&mut self, cell: usize) {
        self.message = Some(match self.engine.apply_move(cell) {
            MoveOutcome::Accepted { mv, .. } => format!("{} played {}", mv.player, mv.position.label()),
            MoveOutcome::Rejected(reason) => reason.to_string(),
        });
        self.selected_step = self.engine.step();
    }

    fn jump(&mut self, step: usize) {
        self.message = Some(match self.engine.jump_to(step) {
            Ok(()) if step == 0 => "Back to game start".to_string(),
            Ok(()) => format!("Viewing move #{step}"),
            Err(e) => e.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            assert_eq!(app.handle_key(key), AppAction::Continue);
        }
    }

    #[test]
    fn test_digits_play_cells() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);

        assert_eq!(app.engine().history_len(), 3);
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.message(), Some("O played Center"));
    }

    #[test]
    fn test_enter_plays_cursor() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(app.engine().current_board().squares()[0].player(), Some(Player::X));
    }

    #[test]
    fn test_occupied_square_reports_rejection() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);

        assert_eq!(app.engine().history_len(), 2);
        assert_eq!(app.message(), Some("Square Center is already occupied"));
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('2')]);
        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);

        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.engine().step(), 1);
        assert_eq!(app.engine().status(), GameStatus::InProgress(Player::O));
        assert_eq!(app.engine().history_len(), 4);
    }

    #[test]
    fn test_move_after_jump_discards_future() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('2')]);
        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        press(&mut app, &[KeyCode::Tab, KeyCode::Char('9')]);

        assert_eq!(app.engine().history_len(), 3);
        assert_eq!(app.selected_step(), 2);
    }

    #[test]
    fn test_quit_and_restart() {
        let mut app = App::new(false);
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('r')]);
        assert_eq!(app.engine().history_len(), 1);
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
    }
}
