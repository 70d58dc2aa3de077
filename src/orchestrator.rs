//! Drives a game between the human and the AI.
//!
//! The orchestrator owns the only timer in the program: the deadline for
//! the pending AI turn. Front ends feed it [`Command`]s and poll it with the
//! current time; everything runs on one thread.

use crate::config::GameConfig;
use crate::games::gomoku::{
    AiStep, AiTicket, Difficulty, Phase, Presenter, SeededRandom, TurnController,
};
use tokio::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Request from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a stone at a board index.
    Place(usize),
    /// Start a new game on the current difficulty.
    Restart,
    /// Switch difficulty, which starts a new game.
    SetDifficulty(Difficulty),
    /// Leave the program.
    Quit,
}

/// Whether the front end should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Shut down.
    Quit,
}

#[derive(Debug, Clone, Copy)]
struct PendingAi {
    ticket: AiTicket,
    due: Instant,
}

/// Owns a game, its random source, and the AI timer.
#[derive(Debug)]
pub struct Orchestrator {
    controller: TurnController,
    rng: SeededRandom,
    config: GameConfig,
    pending: Option<PendingAi>,
}

impl Orchestrator {
    /// Creates an orchestrator and starts the first game.
    #[instrument(skip(presenter))]
    pub fn new(config: GameConfig, presenter: Box<dyn Presenter>) -> Self {
        info!("Starting game orchestration");
        Self {
            controller: TurnController::new(*config.difficulty(), presenter),
            rng: SeededRandom::new(*config.seed()),
            config,
            pending: None,
        }
    }

    /// The game being played.
    pub fn controller(&self) -> &TurnController {
        &self.controller
    }

    /// When the pending AI turn fires, if one is scheduled.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    /// Handles one player command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Place(index) => match self.controller.handle_human_move(index) {
                Ok(Phase::AiThinking) => self.schedule_ai(self.config.think_delay()),
                Ok(phase) if phase.is_terminal() => info!(?phase, "Human move ended the game"),
                Ok(phase) => debug!(?phase, "Human move applied"),
                Err(err) => debug!(%err, "Ignoring move"),
            },
            Command::Restart => {
                let difficulty = self.controller.difficulty();
                self.pending = None;
                if self.controller.restart(difficulty) == Phase::AiThinking {
                    self.schedule_ai(self.config.think_delay());
                }
            }
            Command::SetDifficulty(difficulty) => {
                self.pending = None;
                if self.controller.set_difficulty(difficulty) == Phase::AiThinking {
                    self.schedule_ai(self.config.think_delay());
                }
            }
            Command::Quit => {
                info!("Quit requested");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Completes the pending AI turn if its deadline has passed.
    ///
    /// Returns the step taken, or `None` if nothing was due.
    #[instrument(skip(self))]
    pub fn poll_ai(&mut self, now: Instant) -> Option<AiStep> {
        let pending = self.pending.filter(|p| p.due <= now)?;
        self.pending = None;

        let step = self.controller.complete_ai_turn(pending.ticket, &mut self.rng);
        debug!(?step, "AI turn advanced");
        if let AiStep::Expanded(ticket) = step {
            self.pending = Some(PendingAi {
                ticket,
                due: now + self.config.expand_delay(),
            });
        }
        Some(step)
    }

    /// Sleeps until the pending AI turn is due, then completes it.
    ///
    /// Returns `None` at once if no turn is pending.
    pub async fn run_pending_ai(&mut self) -> Option<AiStep> {
        let due = self.deadline()?;
        tokio::time::sleep_until(due).await;
        self.poll_ai(Instant::now())
    }

    fn schedule_ai(&mut self, delay: Duration) {
        if let Some(ticket) = self.controller.begin_ai_turn() {
            debug!(delay_ms = delay.as_millis() as u64, "AI turn scheduled");
            self.pending = Some(PendingAi {
                ticket,
                due: Instant::now() + delay,
            });
        }
    }
}
