//! Win detection logic for five-in-a-row.

use super::super::probe::with_stone;
use super::super::types::{Board, Cell, Line, MAX_SIZE, Player, WIN_LENGTH};
use std::borrow::Cow;
use std::sync::OnceLock;
use tracing::instrument;

/// Enumerates every straight run of five cells on a `size` board.
///
/// Order: rows, columns, down-right diagonals, down-left diagonals.
/// Boards smaller than five yield nothing.
#[instrument]
pub fn all_lines(size: usize) -> Vec<Line> {
    if size < WIN_LENGTH {
        return Vec::new();
    }

    let span = size - WIN_LENGTH;
    let at = |row: usize, col: usize| row * size + col;
    let mut lines = Vec::with_capacity(2 * size * (span + 1) + 2 * (span + 1) * (span + 1));

    // Rows
    for row in 0..size {
        for col in 0..=span {
            lines.push(Line(std::array::from_fn(|k| at(row, col + k))));
        }
    }

    // Columns
    for col in 0..size {
        for row in 0..=span {
            lines.push(Line(std::array::from_fn(|k| at(row + k, col))));
        }
    }

    // Diagonals ↘
    for row in 0..=span {
        for col in 0..=span {
            lines.push(Line(std::array::from_fn(|k| at(row + k, col + k))));
        }
    }

    // Diagonals ↗
    for row in 0..=span {
        for col in (WIN_LENGTH - 1)..size {
            lines.push(Line(std::array::from_fn(|k| at(row + k, col - k))));
        }
    }

    lines
}

/// Lines for a board size, generated once per size and reused.
pub fn lines_for(size: usize) -> Cow<'static, [Line]> {
    static CACHE: [OnceLock<Vec<Line>>; MAX_SIZE + 1] = [const { OnceLock::new() }; MAX_SIZE + 1];

    match CACHE.get(size) {
        Some(slot) => Cow::Borrowed(slot.get_or_init(|| all_lines(size)).as_slice()),
        None => Cow::Owned(all_lines(size)),
    }
}

/// Returns the owner of the first completed line, if any.
pub fn winner(board: &Board) -> Option<Player> {
    lines_for(board.size()).iter().find_map(|line| {
        let [first, rest @ ..] = line.indices();
        let owner = board.get(*first)?.player()?;
        rest.iter()
            .all(|&i| board.get(i) == Some(Cell::Stone(owner)))
            .then_some(owner)
    })
}

/// True iff some line holds five identical stones.
pub fn has_win(board: &Board) -> bool {
    winner(board).is_some()
}

/// Finds the lowest empty index that wins immediately for `player`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_winning_move(board: &Board, player: Player) -> Option<usize> {
    let mut scratch = board.clone();
    board
        .empty_indices()
        .into_iter()
        .find(|&index| with_stone(&mut scratch, index, player, has_win).unwrap_or(false))
}

/// Counts empty cells that would win immediately for `player`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn count_winning_moves(board: &Board, player: Player) -> usize {
    let mut scratch = board.clone();
    board
        .empty_indices()
        .into_iter()
        .filter(|&index| with_stone(&mut scratch, index, player, has_win).unwrap_or(false))
        .count()
}
