//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_rounds::{Cell, Game, render_scoreboard, render_status};

const CELL_WIDTH: u16 = 7;
const HELP: &str = "arrows move · enter/space or 1-9 play · n new round · r restart · q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, game: &Game, cursor: Cell, message: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Scoreboard
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Rounds - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let scores = Paragraph::new(render_scoreboard(game))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(scores, chunks[1]);

    draw_board(frame, chunks[2], game, cursor);

    let (status, color) = match message {
        Some(message) => (message.to_string(), Color::Red),
        None => (render_status(game), Color::Yellow),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, game: &Game, cursor: Cell) {
    let size = game.board().size() as u16;
    let width = size * CELL_WIDTH + size.saturating_sub(1);
    let height = size * 2 - 1;
    let board_area = center_rect(area, width, height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); height as usize])
        .split(board_area);

    for (row, cells) in game.board().rows().iter().enumerate() {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1], width);
        }
        draw_row(frame, rows[row * 2], game, cursor, row, cells);
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    cursor: Cell,
    row: usize,
    cells: &[char],
) {
    let mut spans = Vec::with_capacity(cells.len() * 2);
    for (col, &symbol) in cells.iter().enumerate() {
        if col > 0 {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
        let cell = Cell::new(row, col);
        spans.push(Span::styled(
            format!("{:^width$}", symbol, width = CELL_WIDTH as usize),
            cell_style(game, cell, symbol, cell == cursor),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn cell_style(game: &Game, cell: Cell, symbol: char, selected: bool) -> Style {
    let base = if symbol == game.player1().symbol() {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else if symbol == game.player2().symbol() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let base = if game.win_cells().contains(&cell) {
        base.bg(Color::Green).fg(Color::Black)
    } else {
        base
    };

    if selected {
        base.bg(Color::White).fg(Color::Black)
    } else {
        base
    }
}

fn draw_separator(frame: &mut Frame, area: Rect, width: u16) {
    let sep =
        Paragraph::new("─".repeat(width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
