//! Keyboard handling: cursor movement and command keys.

use super::app::App;
use crate::games::gomoku::Difficulty;
use crate::orchestrator::Command;
use crossterm::event::KeyCode;

/// Moves the cursor one cell, staying on a board of `size`.
pub fn move_cursor(cursor: (usize, usize), size: usize, key: KeyCode) -> (usize, usize) {
    let (row, col) = cursor;
    let last = size.saturating_sub(1);
    match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(last), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(last)),
        _ => cursor,
    }
}

/// Applies a key to the view and returns the command it stands for, if any.
pub fn handle_key(app: &mut App, key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            app.move_cursor(key);
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.cursor_index().map(Command::Place),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('1') => Some(Command::SetDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(Command::SetDifficulty(Difficulty::Medium)),
        KeyCode::Char('3') => Some(Command::SetDifficulty(Difficulty::Hard)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
