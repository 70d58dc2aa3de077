//! Core domain types for five-in-a-row.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of a freshly started board.
pub const INITIAL_SIZE: usize = 8;

/// Largest side length the board may grow to.
pub const MAX_SIZE: usize = 12;

/// Number of stones in a winning run.
pub const WIN_LENGTH: usize = 5;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X, the human side.
    X,
    /// Player O, the computer side.
    O,
}

impl Player {
    /// The side the human plays.
    pub const HUMAN: Player = Player::X;

    /// The side the computer plays.
    pub const AI: Player = Player::O;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's stone.
    Stone(Player),
}

impl Cell {
    /// Returns the stone owner, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Stone(player) => Some(player),
        }
    }

    /// True if no stone is placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Errors raised by board operations.
///
/// None of these are fatal: the board is left untouched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Index lies outside the current board.
    #[display("Index {index} is outside a board of {len} cells")]
    OutOfRange {
        /// Offending index.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },
    /// Resize would shrink the board or produce an empty one.
    #[display("Cannot resize board from {from} to {to}")]
    InvalidResize {
        /// Current side length.
        from: usize,
        /// Requested side length.
        to: usize,
    },
    /// Board is already at its largest size.
    #[display("Board is already at the maximum size of {size}")]
    MaxSizeReached {
        /// Current side length.
        size: usize,
    },
    /// Side length outside 8..=12, or a cell count that does not match it.
    #[display("Board of side {size} with {cells} cells is not a valid board")]
    Malformed {
        /// Claimed side length.
        size: usize,
        /// Number of cells present.
        cells: usize,
    },
}

/// A square board of cells in row-major order.
///
/// Index `i` maps to `row = i / size`, `col = i % size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board at the starting size.
    pub fn new() -> Self {
        Self::with_size(INITIAL_SIZE)
    }

    /// Creates an empty board with the given side length.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Checks that a deserialized board is square and between the starting
    /// and maximum sizes.
    pub fn validate(&self) -> Result<(), BoardError> {
        let square = self.cells.len() == self.size * self.size;
        if (INITIAL_SIZE..=MAX_SIZE).contains(&self.size) && square {
            Ok(())
        } else {
            Err(BoardError::Malformed {
                size: self.size,
                cells: self.cells.len(),
            })
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size * size`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-sized board.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `index`, or `None` if it is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns the cell at (`row`, `col`), or `None` if it is off the board.
    pub fn at(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            self.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Sets the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if `index` is not on the board.
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<(), BoardError> {
        let len = self.cells.len();
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::OutOfRange { index, len })?;
        *slot = cell;
        Ok(())
    }

    /// True if the cell at `index` exists and holds no stone.
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// True once every cell holds a stone.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of cells without a stone.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// All cells as a slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Splits an index into (`row`, `col`).
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Joins (`row`, `col`) into an index.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Steps from (`row`, `col`) by (`dr`, `dc`) times `steps`.
    ///
    /// Returns the target index, or `None` if the step leaves the board.
    pub fn offset(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        steps: isize,
    ) -> Option<usize> {
        let r = row as isize + dr * steps;
        let c = col as isize + dc * steps;
        let size = self.size as isize;
        if r < 0 || r >= size || c < 0 || c >= size {
            None
        } else {
            Some(self.index_of(r as usize, c as usize))
        }
    }

    /// Returns a larger board with every stone kept at the same (row, col).
    ///
    /// Cells beyond the old extent are empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidResize`] unless `new_size > size`.
    #[instrument(skip(self), fields(from = self.size))]
    pub fn resize(&self, new_size: usize) -> Result<Board, BoardError> {
        if new_size <= self.size {
            return Err(BoardError::InvalidResize {
                from: self.size,
                to: new_size,
            });
        }

        let mut grown = Board::with_size(new_size);
        for row in 0..self.size {
            let old = row * self.size;
            let new = row * new_size;
            grown.cells[new..new + self.size].copy_from_slice(&self.cells[old..old + self.size]);
        }
        Ok(grown)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Five board indices forming a straight run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [usize; WIN_LENGTH]);

impl Line {
    /// The indices of this line.
    pub fn indices(&self) -> &[usize; WIN_LENGTH] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty_eight_by_eight() {
        let board = Board::new();
        assert_eq!(board.size(), 8);
        assert_eq!(board.len(), 64);
        assert_eq!(board.empty_count(), 64);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_out_of_range() {
        let mut board = Board::new();
        let err = board.set(64, Cell::Stone(Player::X)).unwrap_err();
        assert_eq!(err, BoardError::OutOfRange { index: 64, len: 64 });
        assert_eq!(board.empty_count(), 64);
    }

    #[test]
    fn test_coords_round_trip() {
        let board = Board::with_size(9);
        assert_eq!(board.coords(10), (1, 1));
        assert_eq!(board.index_of(1, 1), 10);
    }

    #[test]
    fn test_resize_keeps_row_and_col() {
        let mut board = Board::new();
        board.set(9, Cell::Stone(Player::X)).unwrap(); // (1, 1)
        board.set(63, Cell::Stone(Player::O)).unwrap(); // (7, 7)

        let grown = board.resize(9).unwrap();
        assert_eq!(grown.size(), 9);
        assert_eq!(grown.at(1, 1), Some(Cell::Stone(Player::X)));
        assert_eq!(grown.at(7, 7), Some(Cell::Stone(Player::O)));
        assert_eq!(grown.empty_count(), 81 - 2);
        for i in 0..9 {
            assert_eq!(grown.at(8, i), Some(Cell::Empty));
            assert_eq!(grown.at(i, 8), Some(Cell::Empty));
        }
    }

    #[test]
    fn test_resize_rejects_shrink_and_same() {
        let board = Board::new();
        assert_eq!(
            board.resize(8),
            Err(BoardError::InvalidResize { from: 8, to: 8 })
        );
        assert_eq!(
            board.resize(3),
            Err(BoardError::InvalidResize { from: 8, to: 3 })
        );
    }

    #[test]
    fn test_offset_stops_at_edges() {
        let board = Board::new();
        assert_eq!(board.offset(0, 0, -1, 0, 1), None);
        assert_eq!(board.offset(0, 0, 1, 1, 2), Some(18));
        assert_eq!(board.offset(7, 7, 0, 1, 1), None);
    }

    #[test]
    fn test_validate_bounds_side_length() {
        assert_eq!(Board::new().validate(), Ok(()));
        assert_eq!(Board::with_size(MAX_SIZE).validate(), Ok(()));
        assert_eq!(
            Board::with_size(7).validate(),
            Err(BoardError::Malformed { size: 7, cells: 49 })
        );
        assert_eq!(
            Board::with_size(13).validate(),
            Err(BoardError::Malformed {
                size: 13,
                cells: 169
            })
        );
    }
}
