//! Stateless UI rendering for gomoku.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::gomoku::{AudioCue, Cell, GameState, Player};

const HELP: &str = "←↑↓→ move  Enter place  r restart  1/2/3 difficulty  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = match app.state() {
        Some(state) => format!(
            "Strictly Gomoku - {} - {}×{}",
            state.difficulty(),
            state.board().size(),
            state.board().size()
        ),
        None => "Strictly Gomoku".to_string(),
    };
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.state() {
        Some(state) => draw_board(frame, chunks[1], state, app.cursor()),
        None => frame.render_widget(
            Paragraph::new("Waiting for game to start...").alignment(Alignment::Center),
            chunks[1],
        ),
    }

    draw_status(frame, chunks[2], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, state: &GameState, cursor: (usize, usize)) {
    let board = state.board();
    let size = board.size();

    let mut lines = Vec::with_capacity(size + 1);
    let mut header = String::from("    ");
    for col in 0..size {
        header.push_str(&format!("{:^3}", col));
    }
    lines.push(Line::from(Span::styled(
        header,
        Style::default().fg(Color::DarkGray),
    )));

    for row in 0..size {
        let mut spans = vec![Span::styled(
            format!("{:>3} ", row),
            Style::default().fg(Color::DarkGray),
        )];
        for col in 0..size {
            let index = board.index_of(row, col);
            spans.push(cell_span(
                board.get(index).unwrap_or_default(),
                (row, col) == cursor,
                *state.last_move() == Some(index),
            ));
        }
        lines.push(Line::from(spans));
    }

    let width = (4 + 3 * size + 2) as u16;
    let height = (size + 3) as u16;
    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, center_rect(area, width, height));
}

fn cell_span(cell: Cell, under_cursor: bool, last_move: bool) -> Span<'static> {
    let (symbol, base_style) = match cell {
        Cell::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        Cell::Stone(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Stone(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if last_move {
        base_style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut text = app.status().to_string();
    if let Some(cue) = app.last_cue() {
        text.push_str(&format!("  [{}]", cue_text(cue)));
    }

    let mut block = Block::default().borders(Borders::ALL);
    if app.celebrating() {
        block = block.title("★ Congratulations! ★");
    }

    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(status, area);
}

fn cue_text(cue: AudioCue) -> &'static str {
    match cue {
        AudioCue::Place => "click",
        AudioCue::Win => "fanfare",
        AudioCue::Lose => "womp womp",
    }
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
