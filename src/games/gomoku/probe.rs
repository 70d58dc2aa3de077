//! Tentative stone placement that always reverts.
//!
//! Scoring places a stone, inspects the board, and takes the stone back.
//! [`Probe`] ties the take-back to scope exit so an early return or panic
//! cannot leave a half-mutated board behind.

use super::types::{Board, Cell, Player};
use std::ops::Deref;

/// A board with one cell temporarily overwritten.
///
/// The previous content of the cell is restored on drop.
#[derive(Debug)]
pub struct Probe<'a> {
    board: &'a mut Board,
    index: usize,
    previous: Cell,
}

impl<'a> Probe<'a> {
    /// Places `player` at `index` until the probe is dropped.
    ///
    /// Returns `None` if `index` is off the board.
    pub fn place(board: &'a mut Board, index: usize, player: Player) -> Option<Self> {
        let previous = board.get(index)?;
        board.set(index, Cell::Stone(player)).ok()?;
        Some(Self {
            board,
            index,
            previous,
        })
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        let _ = self.board.set(self.index, self.previous);
    }
}

/// Runs `f` with `player` tentatively placed at `index`.
///
/// Returns `None` if `index` is off the board.
pub fn with_stone<R>(
    board: &mut Board,
    index: usize,
    player: Player,
    f: impl FnOnce(&Board) -> R,
) -> Option<R> {
    let probe = Probe::place(board, index, player)?;
    Some(f(&probe))
}
