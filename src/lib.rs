//! Strictly Gomoku library - five in a row against a tiered AI
//!
//! Two players alternate placing stones on a square board; the first to line
//! up five in a row, column, or diagonal wins. The computer plays at one of
//! three difficulty tiers, and on the hardest it grows the board from 8×8 up
//! to 12×12 rather than settle for a likely draw.
//!
//! # Architecture
//!
//! - **Rules**: board geometry, win and draw detection, board expansion
//! - **AI**: easy, medium and hard move heuristics behind one entry point
//! - **Controller**: the turn state machine, reporting through a `Presenter`
//! - **Orchestrator**: schedules the delayed AI reply
//! - **TUI**: ratatui front end
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{Difficulty, NullPresenter, Phase, ScriptedRandom, TurnController};
//!
//! let mut game = TurnController::new(Difficulty::Hard, Box::new(NullPresenter));
//! assert_eq!(game.handle_human_move(27), Ok(Phase::AiThinking));
//!
//! let mut rng = ScriptedRandom::always_pass();
//! game.run_ai_turn(&mut rng);
//! assert_eq!(game.phase(), Phase::AwaitingHumanMove);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod games;
mod orchestrator;
pub mod tui;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Orchestration
pub use orchestrator::{Command, Flow, Orchestrator};

// Crate-level exports - Game types (gomoku)
pub use games::gomoku::{
    AiStep, AiTicket, AudioCue, Board, BoardError, Cell, ChannelPresenter, Decision, Difficulty,
    GameEvent, GameState, INITIAL_SIZE, Line, MAX_SIZE, Move, MoveError, NullPresenter, Outcome,
    Phase, Player, Presenter, RandomSource, ScriptedRandom, SeededRandom, StatusMessage,
    TurnController, WIN_LENGTH,
};
