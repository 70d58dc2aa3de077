//! Callbacks from the rules engine to whatever draws the game.
//!
//! The engine never touches a screen or a speaker. After every state change
//! it calls into a [`Presenter`], which may render, play a cue, or forward
//! the event elsewhere.

use super::controller::GameState;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{trace, warn};

/// Status line shown with each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum StatusMessage {
    /// The human is to move.
    #[strum(to_string = "Your turn.")]
    PlayerTurn,
    /// The computer is to move.
    #[strum(to_string = "AI is thinking...")]
    AiTurn,
    /// The human completed five in a row.
    #[strum(to_string = "You win!")]
    PlayerWin,
    /// The computer completed five in a row.
    #[strum(to_string = "AI wins!")]
    AiWin,
    /// The board filled without a winner.
    #[strum(to_string = "It's a draw!")]
    Draw,
    /// The board grew by one rank and file.
    #[strum(to_string = "The board has been expanded!")]
    BoardExpanded,
}

/// Sound the front end may play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum AudioCue {
    /// A stone was placed.
    Place,
    /// The human won.
    Win,
    /// The computer won.
    Lose,
}

/// Receiver of engine notifications.
pub trait Presenter {
    /// Called after every state mutation.
    fn render(&mut self, state: &GameState, status: StatusMessage);

    /// Called when a sound should play.
    fn play_cue(&mut self, cue: AudioCue);

    /// Called once when the human wins.
    fn celebrate(&mut self);
}

/// Presenter that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&mut self, _state: &GameState, _status: StatusMessage) {}

    fn play_cue(&mut self, _cue: AudioCue) {}

    fn celebrate(&mut self) {}
}

/// Engine notification as a value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    /// State changed and should be drawn.
    Render {
        /// Snapshot after the change.
        state: GameState,
        /// Status line to show.
        status: StatusMessage,
    },
    /// A sound should play.
    Cue(AudioCue),
    /// The human won; show the celebration.
    Celebrate,
}

/// Presenter that forwards every notification over a channel.
#[derive(Debug, Clone)]
pub struct ChannelPresenter {
    tx: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelPresenter {
    /// Creates a presenter and the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: GameEvent) {
        trace!(?event, "Forwarding game event");
        if self.tx.send(event).is_err() {
            warn!("Game event receiver dropped");
        }
    }
}

impl Presenter for ChannelPresenter {
    fn render(&mut self, state: &GameState, status: StatusMessage) {
        self.send(GameEvent::Render {
            state: state.clone(),
            status,
        });
    }

    fn play_cue(&mut self, cue: AudioCue) {
        self.send(GameEvent::Cue(cue));
    }

    fn celebrate(&mut self) {
        self.send(GameEvent::Celebrate);
    }
}
