//! First-class action types for five-in-a-row.
//!
//! Moves are domain events, not side effects. They record who placed a
//! stone where, and are kept in the game history until restart.

use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing a stone at a board index.
///
/// The index refers to the board size at the time of the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The index where the stone was placed.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// Why a human move was rejected.
///
/// Rejections are reachable through ordinary input races, so callers treat
/// them as no-ops. The game state is never altered when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside the current board.
    #[display("Index {} is off the board", _0)]
    OutOfRange(usize),

    /// The cell already holds a stone.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game has ended or not been restarted.
    #[display("Game is not active")]
    GameInactive,

    /// It is the other side's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(Player::X, 27).to_string(), "X -> 27");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoveError::NotYourTurn(Player::X).to_string(),
            "It's not X's turn"
        );
        assert_eq!(
            MoveError::CellOccupied(4).to_string(),
            "Cell 4 is already occupied"
        );
    }
}
