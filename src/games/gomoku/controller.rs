//! Turn controller: the only code that mutates a live game.
//!
//! The controller owns the board and walks the turn cycle
//! `AwaitingHumanMove → AiThinking → AwaitingHumanMove`, stopping in
//! `Terminal` on a win or draw. Deciding a computer move and applying it are
//! split into [`TurnController::begin_ai_turn`] and
//! [`TurnController::complete_ai_turn`] so a scheduler can put a delay in
//! between, and tests can skip it with [`TurnController::run_ai_turn`].

use super::action::{Move, MoveError};
use super::ai::{Decision, Difficulty, choose_move, decide};
use super::phases::{Outcome, Phase};
use super::presenter::{AudioCue, Presenter, StatusMessage};
use super::random::RandomSource;
use super::rules::expand::expand;
use super::rules::draw::is_draw;
use super::rules::win::winner;
use super::types::{Board, BoardError, Cell, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Read-only snapshot of a game for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Side to move.
    current_player: Player,
    /// False once the game has ended.
    active: bool,
    /// Difficulty tier of the computer.
    difficulty: Difficulty,
    /// Most recent stone placed by either side.
    last_move: Option<usize>,
    /// Most recent stone placed by the computer.
    last_ai_move: Option<usize>,
    /// Result of the game, once over.
    winner: Option<Outcome>,
    /// Moves played since the last restart.
    history: Vec<Move>,
}

impl GameState {
    fn fresh(difficulty: Difficulty, first: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first,
            active: true,
            difficulty,
            last_move: None,
            last_ai_move: None,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Phase implied by this snapshot.
    pub fn phase(&self) -> Phase {
        match (self.winner, self.current_player) {
            (Some(outcome), _) => Phase::Terminal(outcome),
            (None, Player::X) => Phase::AwaitingHumanMove,
            (None, Player::O) => Phase::AiThinking,
        }
    }
}

/// Proof that an AI turn was started in a particular game.
///
/// A restart invalidates every outstanding ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTicket {
    epoch: u64,
}

/// Result of advancing an AI turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiStep {
    /// A stone was placed at this index.
    Moved(usize),
    /// The board grew; complete the turn again with the returned ticket.
    Expanded(AiTicket),
    /// The game changed underneath the ticket; nothing was applied.
    Discarded,
    /// No empty cell remained.
    NoMove,
}

/// Owns a game and applies every legal transition.
pub struct TurnController {
    state: GameState,
    previous_outcome: Option<Outcome>,
    thinking: bool,
    epoch: u64,
    presenter: Box<dyn Presenter>,
}

impl std::fmt::Debug for TurnController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnController")
            .field("state", &self.state)
            .field("previous_outcome", &self.previous_outcome)
            .field("thinking", &self.thinking)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl TurnController {
    /// Starts a game with the human to move.
    #[instrument(skip(presenter))]
    pub fn new(difficulty: Difficulty, presenter: Box<dyn Presenter>) -> Self {
        info!("Starting new game");
        let mut controller = Self {
            state: GameState::fresh(difficulty, Player::HUMAN),
            previous_outcome: None,
            thinking: false,
            epoch: 0,
            presenter,
        };
        controller.render(StatusMessage::PlayerTurn);
        controller
    }

    /// Continues a game from a saved snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Malformed`] if the snapshot's board is not a
    /// valid square board.
    #[instrument(skip(state, presenter), fields(size = state.board.size()))]
    pub fn resume(mut state: GameState, presenter: Box<dyn Presenter>) -> Result<Self, BoardError> {
        state.board.validate()?;
        state.active = state.winner.is_none();
        info!("Resuming saved game");
        let mut controller = Self {
            previous_outcome: state.winner,
            state,
            thinking: false,
            epoch: 0,
            presenter,
        };
        let status = match controller.phase() {
            Phase::AwaitingHumanMove => StatusMessage::PlayerTurn,
            Phase::AiThinking => StatusMessage::AiTurn,
            Phase::Terminal(Outcome::Winner(Player::X)) => StatusMessage::PlayerWin,
            Phase::Terminal(Outcome::Winner(Player::O)) => StatusMessage::AiWin,
            Phase::Terminal(Outcome::Draw) => StatusMessage::Draw,
        };
        controller.render(status);
        Ok(controller)
    }

    /// Snapshot of the current game.
    pub fn current_state(&self) -> GameState {
        self.state.clone()
    }

    /// Borrowed view of the current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase of the turn cycle.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Current difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }

    /// True while an AI turn is outstanding.
    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    /// Applies a human move at `index`.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the game is over, it is the computer's
    /// turn, or the cell is off the board or occupied. The game is left
    /// unchanged in every such case.
    #[instrument(skip(self))]
    pub fn handle_human_move(&mut self, index: usize) -> Result<Phase, MoveError> {
        if !self.state.active {
            debug!("Rejected move: game inactive");
            return Err(MoveError::GameInactive);
        }
        if self.state.current_player != Player::HUMAN || self.thinking {
            debug!("Rejected move: not the human's turn");
            return Err(MoveError::NotYourTurn(Player::HUMAN));
        }
        match self.state.board.get(index) {
            None => {
                debug!("Rejected move: off the board");
                Err(MoveError::OutOfRange(index))
            }
            Some(Cell::Stone(_)) => {
                debug!("Rejected move: cell occupied");
                Err(MoveError::CellOccupied(index))
            }
            Some(Cell::Empty) => Ok(self.apply_move(index, Player::HUMAN)),
        }
    }

    /// Marks an AI turn as started.
    ///
    /// Returns `None`, dropping the trigger, if a turn is already
    /// outstanding, the game is over, or the human is to move.
    #[instrument(skip(self))]
    pub fn begin_ai_turn(&mut self) -> Option<AiTicket> {
        if self.thinking {
            debug!("AI already thinking, trigger dropped");
            return None;
        }
        if !self.state.active || self.state.current_player != Player::AI {
            debug!("Not the AI's turn, trigger dropped");
            return None;
        }
        self.thinking = true;
        Some(AiTicket { epoch: self.epoch })
    }

    /// Decides and applies the AI move for an outstanding turn.
    ///
    /// On the hard tier this may grow the board instead; the turn then stays
    /// outstanding and must be completed again with the returned ticket.
    #[instrument(skip(self, rng), fields(difficulty = %self.state.difficulty))]
    pub fn complete_ai_turn(&mut self, ticket: AiTicket, rng: &mut impl RandomSource) -> AiStep {
        if ticket.epoch != self.epoch {
            warn!("Discarding AI result from a previous game");
            return AiStep::Discarded;
        }
        if !self.state.active || self.state.current_player != Player::AI {
            warn!("Discarding AI result, game moved on");
            self.thinking = false;
            return AiStep::Discarded;
        }

        let decision = decide(&self.state.board, self.state.difficulty, Player::AI, rng);
        let choice = match decision {
            Decision::Expand => match expand(&self.state.board) {
                Ok(grown) => {
                    self.state.board = grown;
                    self.render(StatusMessage::BoardExpanded);
                    return AiStep::Expanded(ticket);
                }
                Err(err) => {
                    debug!(%err, "Expansion refused, moving on current board");
                    choose_move(&self.state.board, self.state.difficulty, Player::AI, rng)
                }
            },
            Decision::Place(index) => Some(index),
            Decision::NoMove => None,
        };

        self.thinking = false;
        match choice {
            Some(index) if self.state.board.is_vacant(index) => {
                self.apply_move(index, Player::AI);
                AiStep::Moved(index)
            }
            _ => {
                warn!("AI found no empty cell");
                AiStep::NoMove
            }
        }
    }

    /// Runs a whole AI turn synchronously, expansions included.
    pub fn run_ai_turn(&mut self, rng: &mut impl RandomSource) -> AiStep {
        let Some(mut ticket) = self.begin_ai_turn() else {
            return AiStep::Discarded;
        };
        loop {
            match self.complete_ai_turn(ticket, rng) {
                AiStep::Expanded(next) => ticket = next,
                step => return step,
            }
        }
    }

    /// Starts a new game on a fresh board at `difficulty`.
    ///
    /// The computer opens if the human won the previous game.
    #[instrument(skip(self))]
    pub fn restart(&mut self, difficulty: Difficulty) -> Phase {
        let first = match self.previous_outcome {
            Some(Outcome::Winner(Player::X)) => Player::AI,
            _ => Player::HUMAN,
        };
        info!(%first, "Restarting game");

        self.state = GameState::fresh(difficulty, first);
        self.thinking = false;
        self.epoch += 1;

        let status = if first == Player::AI {
            StatusMessage::AiTurn
        } else {
            StatusMessage::PlayerTurn
        };
        self.render(status);
        self.phase()
    }

    /// Switches difficulty, which restarts the game.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Phase {
        info!("Difficulty changed");
        self.restart(difficulty)
    }

    fn apply_move(&mut self, index: usize, player: Player) -> Phase {
        if self.state.board.set(index, Cell::Stone(player)).is_err() {
            warn!(index, "Move target vanished");
            return self.phase();
        }
        self.state.last_move = Some(index);
        if player == Player::AI {
            self.state.last_ai_move = Some(index);
        }
        self.state.history.push(Move::new(player, index));
        debug!(%player, index, "Stone placed");
        self.presenter.play_cue(AudioCue::Place);

        if let Some(owner) = winner(&self.state.board) {
            self.finish(Outcome::Winner(owner));
            if owner == Player::HUMAN {
                self.presenter.play_cue(AudioCue::Win);
                self.presenter.celebrate();
                self.render(StatusMessage::PlayerWin);
            } else {
                self.presenter.play_cue(AudioCue::Lose);
                self.render(StatusMessage::AiWin);
            }
            return self.phase();
        }

        if is_draw(&self.state.board) {
            self.finish(Outcome::Draw);
            self.render(StatusMessage::Draw);
            return self.phase();
        }

        self.state.current_player = player.opponent();
        let status = if self.state.current_player == Player::AI {
            StatusMessage::AiTurn
        } else {
            StatusMessage::PlayerTurn
        };
        self.render(status);
        self.phase()
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, "Game over");
        self.state.active = false;
        self.state.winner = Some(outcome);
        self.previous_outcome = Some(outcome);
    }

    fn render(&mut self, status: StatusMessage) {
        self.presenter.render(&self.state, status);
    }
}
