//! Turn phases and game outcomes.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Board filled with no winner.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the turn cycle currently stands.
///
/// `Terminal` is absorbing until the game is restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to place a stone.
    AwaitingHumanMove,
    /// The computer is to move.
    AiThinking,
    /// The game is over.
    Terminal(Outcome),
}

impl Phase {
    /// True once the game has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Terminal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        assert_eq!(Outcome::Winner(Player::X).to_string(), "Player X wins");
    }

    #[test]
    fn test_terminal_phase() {
        assert!(Phase::Terminal(Outcome::Draw).is_terminal());
        assert!(!Phase::AiThinking.is_terminal());
    }
}
