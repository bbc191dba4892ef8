//! Stateless rendering of a game view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::{Cell, CellView, GameView, Player, Position};

use crate::config::Settings;

const HELP: &str =
    "1-9/Enter: place  ←↑→↓: cursor  b/n: step back/forward  Home/End: start/latest  r: reverse  q: quit";

/// Draws the whole screen: board, status, move list and key help.
pub fn draw(frame: &mut Frame, view: &GameView, cursor: Position, settings: &Settings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and history
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind Games - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(30)])
        .split(chunks[1]);

    draw_board(frame, body[0], view, cursor, settings);
    draw_info(frame, body[1], view);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, settings: &Settings) {
    let block = Block::default().borders(Borders::ALL).title(" Board ");
    let inner = center_rect(block.inner(area), 40, 11);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(inner);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, view, cursor, settings, row * 3);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Position,
    settings: &Settings,
    start: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (offset, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(cell) = view.cell(start + offset) {
            draw_cell(frame, area, cell, cursor, settings);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, cursor: Position, settings: &Settings) {
    let (symbol, mut style) = match cell.cell {
        Cell::Empty => (format!(" {} ", cell.index + 1), Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };

    if cell.winning && *settings.highlight_winning_line() {
        style = style.bg(Color::LightBlue);
    }
    if cell.last_move && *settings.highlight_last_move() {
        style = style.fg(Color::Red).add_modifier(Modifier::UNDERLINED);
    }
    if cell.index == cursor.to_index() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center the symbol in the 3-line cell.
    let paragraph = Paragraph::new(vec![Line::default(), Line::from(Span::styled(symbol, style))])
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_info(frame: &mut Frame, area: Rect, view: &GameView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Min(3),    // Moves
            Constraint::Length(1), // Order
        ])
        .split(area);

    let status_style = if view.status().is_over() {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(view.status_text().as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let text = format!("{}. {}", entry.step + 1, entry.label);
            let style = if entry.current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();
    let moves = List::new(items).block(Block::default().borders(Borders::ALL).title(" History "));
    frame.render_widget(moves, chunks[1]);

    let order = Paragraph::new(format!("[r] {}", view.order_toggle_label()))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(order, chunks[2]);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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
