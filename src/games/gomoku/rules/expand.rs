//! Draw estimation and board growth for the hard tier.
//!
//! When the hard AI judges a draw nearly certain it grows the board by one
//! rank and file so the game can continue. The thresholds below are tuning
//! constants, not rules of the game.

use super::super::ai::Difficulty;
use super::super::types::{Board, BoardError, MAX_SIZE, Player};
use super::win::count_winning_moves;
use tracing::{debug, info, instrument};

/// Estimate at or above which the hard tier expands the board.
pub const EXPAND_THRESHOLD: f64 = 0.95;

/// Estimate returned when nobody has a winning cell and space is scarce.
pub const NEAR_CERTAIN_DRAW: f64 = 0.95;

/// Estimate returned when winning cells are rare and space is limited.
pub const LIKELY_DRAW: f64 = 0.80;

/// Heuristic chance that the game ends in a draw.
///
/// Always `0.0` below the hard tier.
#[instrument(skip(board), fields(size = board.size()))]
pub fn draw_probability(board: &Board, difficulty: Difficulty) -> f64 {
    if difficulty != Difficulty::Hard {
        return 0.0;
    }

    let size = board.size();
    let empty = board.empty_count();
    let human_wins = count_winning_moves(board, Player::HUMAN);
    let ai_wins = count_winning_moves(board, Player::AI);

    let estimate = if empty < 2 * size && human_wins == 0 && ai_wins == 0 {
        NEAR_CERTAIN_DRAW
    } else if empty < 3 * size && human_wins <= 1 && ai_wins <= 1 {
        LIKELY_DRAW
    } else {
        0.0
    };

    debug!(empty, human_wins, ai_wins, estimate, "Estimated draw probability");
    estimate
}

/// Grows the board by one, keeping every stone at its (row, col).
///
/// # Errors
///
/// Returns [`BoardError::MaxSizeReached`] once the board is at [`MAX_SIZE`].
#[instrument(skip(board), fields(size = board.size()))]
pub fn expand(board: &Board) -> Result<Board, BoardError> {
    if board.size() >= MAX_SIZE {
        return Err(BoardError::MaxSizeReached { size: board.size() });
    }

    let grown = board.resize(board.size() + 1)?;
    info!(new_size = grown.size(), "Board expanded");
    Ok(grown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::types::Cell;

    /// A full draw-pattern board with the given cells cleared.
    fn sparse_draw(size: usize, cleared: &[usize]) -> Board {
        let mut board = Board::with_size(size);
        for index in 0..board.len() {
            let (row, col) = board.coords(index);
            let player = if (col + 2 * row) % 4 < 2 {
                Player::X
            } else {
                Player::O
            };
            board.set(index, Cell::Stone(player)).unwrap();
        }
        for &index in cleared {
            board.set(index, Cell::Empty).unwrap();
        }
        board
    }

    #[test]
    fn test_zero_below_hard() {
        let board = sparse_draw(8, &[0, 9]);
        assert_eq!(draw_probability(&board, Difficulty::Easy), 0.0);
        assert_eq!(draw_probability(&board, Difficulty::Medium), 0.0);
    }

    #[test]
    fn test_near_certain_draw_with_ten_empty() {
        let board = sparse_draw(8, &[0, 9, 18, 27, 36, 45, 54, 63, 7, 56]);
        assert_eq!(board.empty_count(), 10);
        assert_eq!(draw_probability(&board, Difficulty::Hard), 0.95);
    }

    #[test]
    fn test_likely_draw_band() {
        // 20 empty cells: below 3 * 8 but not below 2 * 8.
        let cleared: Vec<usize> = (0..20).map(|k| k * 3).collect();
        let board = sparse_draw(8, &cleared);
        assert_eq!(count_winning_moves(&board, Player::X), 0);
        assert_eq!(count_winning_moves(&board, Player::O), 0);
        assert_eq!(draw_probability(&board, Difficulty::Hard), 0.80);
    }

    #[test]
    fn test_open_board_is_not_a_draw() {
        assert_eq!(draw_probability(&Board::new(), Difficulty::Hard), 0.0);
    }

    #[test]
    fn test_expand_until_max() {
        let mut board = Board::new();
        board.set(0, Cell::Stone(Player::X)).unwrap();
        for expected in 9..=MAX_SIZE {
            board = expand(&board).unwrap();
            assert_eq!(board.size(), expected);
            assert_eq!(board.at(0, 0), Some(Cell::Stone(Player::X)));
        }
        assert_eq!(
            expand(&board),
            Err(BoardError::MaxSizeReached { size: MAX_SIZE })
        );
    }
}
