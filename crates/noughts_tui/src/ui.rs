//! Stateless rendering for the game screen.

use noughts_core::{Board, Cell, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the board with cursor and winning-line highlights, plus a
/// status line and key help.
pub fn draw(
    frame: &mut Frame,
    board: &Board,
    cursor: usize,
    winning_line: Option<[usize; 3]>,
    status: &str,
) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Noughts — Tic Tac Toe")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], board, cursor, winning_line);

    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new("↑↓←→: Move | Enter/1-9: Place | r: Restart | Esc: Menu | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: usize,
    winning_line: Option<[usize; 3]>,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, board, cursor, winning_line, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: usize,
    winning_line: Option<[usize; 3]>,
    row: usize,
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

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        draw_cell(frame, chunk, board, cursor, winning_line, row * 3 + col);
    }
    draw_vertical_separator(frame, cols[1]);
    draw_vertical_separator(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: usize,
    winning_line: Option<[usize; 3]>,
    idx: usize,
) {
    let (symbol, base_style) = match board.get(idx) {
        Some(Cell::Marked(Mark::X)) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Marked(Mark::O)) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        // Empty cells hint at their digit key.
        _ => (format!(" {} ", idx + 1), Style::default().fg(Color::DarkGray)),
    };

    let on_winning_line = winning_line.is_some_and(|line| line.contains(&idx));
    let style = if on_winning_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if idx == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
