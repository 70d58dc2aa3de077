//! Draw detection logic for five-in-a-row.

use super::super::types::Board;
use super::win::has_win;
use tracing::instrument;

/// True for a full board without a completed line.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_win(board)
}
