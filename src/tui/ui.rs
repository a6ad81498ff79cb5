//! Stateless UI rendering for the time-travel board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Focus};
use crate::games::tictactoe::{GameStatus, Player, Position, Square};

/// Renders the whole screen from the application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board + history
            Constraint::Length(4), // Status
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe - Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_history(frame, body[1], app);
    draw_status(frame, chunks[2], app);

    let help = Paragraph::new("arrows move  enter play  1-9 play cell  tab history  r restart  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn focus_block(title: &'static str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = focus_block("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    let playable = app.engine().valid_moves();
    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], app, cells, &playable);
        if row < 2 {
            let sep = Paragraph::new("-------+-------+-------")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, cells: &[Position], playable: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for (i, &pos) in cells.iter().enumerate() {
        let widget = cell_widget(app, pos, playable.contains(&pos));
        frame.render_widget(widget, cols[i * 2]);
        if i < 2 {
            let sep = Paragraph::new("|").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[i * 2 + 1]);
        }
    }
}

/// Text for one cell. Empty cells that can no longer be played show a dot.
fn cell_symbol(square: Square, pos: Position, playable: bool, show_numbers: bool) -> String {
    match square {
        Square::Occupied(player) => player.to_string(),
        Square::Empty if !playable => "\u{b7}".to_string(),
        Square::Empty if show_numbers => (pos.to_index() + 1).to_string(),
        Square::Empty => " ".to_string(),
    }
}

fn cell_widget(app: &App, pos: Position, playable: bool) -> Paragraph<'static> {
    let square = app.engine().current_board().get(pos);
    let symbol = cell_symbol(square, pos, playable, app.show_cell_numbers());

    let base_style = match square {
        Square::Occupied(player) => player_style(player),
        Square::Empty if playable => Style::default().fg(Color::DarkGray),
        Square::Empty => Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    };

    let style = if pos == app.cursor() && app.focus() == Focus::Board {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    Paragraph::new(Line::from(Span::styled(format!(" {symbol} "), style)))
        .alignment(Alignment::Center)
}

fn player_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .engine()
        .move_list()
        .into_iter()
        .map(|entry| {
            let style = if entry.current {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}. {}", entry.step, entry.label),
                style,
            )))
        })
        .collect();

    let focused = app.focus() == Focus::History;
    let list = List::new(items)
        .block(focus_block("History", focused))
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let selected = if focused { app.selected_step() } else { app.engine().step() };
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.engine().status();
    let status_style = match status {
        GameStatus::Won(player) => player_style(player),
        GameStatus::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        GameStatus::InProgress(_) => Style::default().fg(Color::Yellow),
    };

    let mut lines = vec![Line::from(Span::styled(status.to_string(), status_style))];
    if let Some(message) = app.message() {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Gray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
