//! Five-in-a-row on a board that grows from 8×8 up to 12×12.

pub mod action;
pub mod ai;
pub mod controller;
pub mod phases;
pub mod presenter;
pub mod probe;
pub mod random;
pub mod rules;
pub mod types;

pub use action::{Move, MoveError};
pub use ai::{Decision, Difficulty};
pub use controller::{AiStep, AiTicket, GameState, TurnController};
pub use phases::{Outcome, Phase};
pub use presenter::{
    AudioCue, ChannelPresenter, GameEvent, NullPresenter, Presenter, StatusMessage,
};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use types::{Board, BoardError, Cell, INITIAL_SIZE, Line, MAX_SIZE, Player, WIN_LENGTH};
