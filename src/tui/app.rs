//! View model fed by game events.

use super::input::move_cursor;
use crate::games::gomoku::{AudioCue, GameEvent, GameState, INITIAL_SIZE, StatusMessage};
use crossterm::event::KeyCode;
use tracing::debug;

/// Everything the screen shows.
#[derive(Debug, Clone)]
pub struct App {
    state: Option<GameState>,
    status: StatusMessage,
    cursor: (usize, usize),
    last_cue: Option<AudioCue>,
    celebrating: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates an empty view with the cursor near the middle.
    pub fn new() -> Self {
        let mid = (INITIAL_SIZE - 1) / 2;
        Self {
            state: None,
            status: StatusMessage::PlayerTurn,
            cursor: (mid, mid),
            last_cue: None,
            celebrating: false,
        }
    }

    /// Latest game snapshot, once the first render arrived.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Current status line.
    pub fn status(&self) -> StatusMessage {
        self.status
    }

    /// Cursor as (row, column).
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Most recent sound cue.
    pub fn last_cue(&self) -> Option<AudioCue> {
        self.last_cue
    }

    /// True after the human won, until the next game.
    pub fn celebrating(&self) -> bool {
        self.celebrating
    }

    fn size(&self) -> usize {
        self.state
            .as_ref()
            .map_or(INITIAL_SIZE, |state| state.board().size())
    }

    /// Board index under the cursor.
    pub fn cursor_index(&self) -> Option<usize> {
        let state = self.state.as_ref()?;
        let (row, col) = self.cursor;
        Some(state.board().index_of(row, col))
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = move_cursor(self.cursor, self.size(), key);
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::Render { state, status } => {
                if state.history().is_empty() {
                    self.celebrating = false;
                    self.last_cue = None;
                }
                let last = state.board().size() - 1;
                self.cursor = (self.cursor.0.min(last), self.cursor.1.min(last));
                self.state = Some(state);
                self.status = status;
            }
            GameEvent::Cue(cue) => self.last_cue = Some(cue),
            GameEvent::Celebrate => self.celebrating = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::{ChannelPresenter, Difficulty, TurnController};

    fn drain(rx: &mut tokio::sync::mpsc::UnboundedReceiver<GameEvent>, app: &mut App) {
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
    }

    #[test]
    fn test_tracks_renders_and_cues() {
        let (presenter, mut rx) = ChannelPresenter::channel();
        let mut game = TurnController::new(Difficulty::Easy, Box::new(presenter));
        let mut app = App::new();
        drain(&mut rx, &mut app);
        assert_eq!(app.cursor_index(), Some(27));

        game.handle_human_move(27).unwrap();
        drain(&mut rx, &mut app);
        assert_eq!(app.status(), StatusMessage::AiTurn);
        assert_eq!(app.last_cue(), Some(AudioCue::Place));
        assert_eq!(app.state().and_then(|s| *s.last_move()), Some(27));

        game.restart(Difficulty::Easy);
        drain(&mut rx, &mut app);
        assert_eq!(app.last_cue(), None);
        assert!(!app.celebrating());
    }

    #[test]
    fn test_no_index_before_first_render() {
        assert_eq!(App::new().cursor_index(), None);
    }
}
