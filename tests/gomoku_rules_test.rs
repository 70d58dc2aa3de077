//! Tests for board geometry, win detection, and board growth.

use proptest::prelude::*;
use strictly_gomoku::games::gomoku::rules::{
    all_lines, expand, find_winning_move, has_win, is_draw, lines_for, winner,
};
use strictly_gomoku::{Board, BoardError, Cell, MAX_SIZE, Player, WIN_LENGTH};

const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Places `length` stones from (row, col) along `dir`, or `None` if it runs off.
fn board_with_run(
    size: usize,
    row: usize,
    col: usize,
    dir: (isize, isize),
    length: usize,
    player: Player,
) -> Option<Board> {
    let mut board = Board::with_size(size);
    for step in 0..length as isize {
        let r = row as isize + dir.0 * step;
        let c = col as isize + dir.1 * step;
        if r < 0 || c < 0 || r >= size as isize || c >= size as isize {
            return None;
        }
        let index = board.index_of(r as usize, c as usize);
        board.set(index, Cell::Stone(player)).ok()?;
    }
    Some(board)
}

/// Maps two seeds to a start cell from which a `length` run along `dir` fits.
fn fitting_start(
    size: usize,
    dir: (isize, isize),
    length: usize,
    rs: usize,
    cs: usize,
) -> (usize, usize) {
    let span = size - length + 1;
    let row = if dir.0 == 0 { rs % size } else { rs % span };
    let col = match dir.1 {
        0 => cs % size,
        1 => cs % span,
        _ => length - 1 + cs % span,
    };
    (row, col)
}

fn player_strategy() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

proptest! {
    #[test]
    fn five_in_a_row_is_detected(
        size in 5usize..=MAX_SIZE,
        rs in 0usize..1000,
        cs in 0usize..1000,
        dir in 0usize..4,
        player in player_strategy(),
    ) {
        let (row, col) = fitting_start(size, DIRECTIONS[dir], WIN_LENGTH, rs, cs);
        let board = board_with_run(size, row, col, DIRECTIONS[dir], WIN_LENGTH, player).unwrap();
        prop_assert_eq!(winner(&board), Some(player));
        prop_assert!(has_win(&board));
    }

    #[test]
    fn four_in_a_row_is_not_a_win(
        size in 5usize..=MAX_SIZE,
        rs in 0usize..1000,
        cs in 0usize..1000,
        dir in 0usize..4,
        player in player_strategy(),
    ) {
        let (row, col) = fitting_start(size, DIRECTIONS[dir], WIN_LENGTH - 1, rs, cs);
        let board = board_with_run(size, row, col, DIRECTIONS[dir], WIN_LENGTH - 1, player).unwrap();
        prop_assert_eq!(winner(&board), None);
    }

    #[test]
    fn resize_keeps_every_stone(
        size in 5usize..MAX_SIZE,
        grow in 1usize..=4,
        stones in proptest::collection::vec((0usize..MAX_SIZE, 0usize..MAX_SIZE, player_strategy()), 0..20),
    ) {
        let target = (size + grow).min(MAX_SIZE);

        let mut board = Board::with_size(size);
        for &(r, c, p) in &stones {
            if r < size && c < size {
                let index = board.index_of(r, c);
                board.set(index, Cell::Stone(p)).unwrap();
            }
        }

        let grown = board.resize(target).unwrap();
        prop_assert_eq!(grown.size(), target);
        for r in 0..target {
            for c in 0..target {
                let expected = if r < size && c < size {
                    board.at(r, c).unwrap()
                } else {
                    Cell::Empty
                };
                prop_assert_eq!(grown.at(r, c), Some(expected));
            }
        }
    }
}

#[test]
fn test_line_count_follows_generation_rule() {
    for size in 5..=MAX_SIZE {
        let n = size - 4;
        assert_eq!(all_lines(size).len(), 2 * size * n + 2 * n * n, "size {size}");
    }
    assert_eq!(all_lines(8).len(), 96);
    assert!(all_lines(4).is_empty());
}

#[test]
fn test_cached_lines_match_generated() {
    for size in 5..=MAX_SIZE {
        assert_eq!(&*lines_for(size), all_lines(size).as_slice());
    }
}

#[test]
fn test_resize_rejects_shrinking_and_same_size() {
    let board = Board::new();
    assert_eq!(
        board.resize(8),
        Err(BoardError::InvalidResize { from: 8, to: 8 })
    );
    assert!(board.resize(7).is_err());
}

#[test]
fn test_expand_stops_at_maximum() {
    let mut board = Board::new();
    let mut expansions = 0;
    loop {
        match expand(&board) {
            Ok(grown) => {
                assert_eq!(grown.size(), board.size() + 1);
                board = grown;
                expansions += 1;
            }
            Err(err) => {
                assert_eq!(err, BoardError::MaxSizeReached { size: MAX_SIZE });
                break;
            }
        }
    }
    assert_eq!(expansions, MAX_SIZE - 8);
}

#[test]
fn test_winning_move_found_after_growth() {
    // X holds (8, 8)..(8, 11) on a 12-board; only (8, 7) completes five.
    let mut board = Board::with_size(MAX_SIZE);
    for col in 8..12 {
        let index = board.index_of(8, col);
        board.set(index, Cell::Stone(Player::X)).unwrap();
    }
    assert_eq!(find_winning_move(&board, Player::X), Some(board.index_of(8, 7)));
    assert_eq!(find_winning_move(&board, Player::O), None);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let size = 8;
    let mut board = Board::with_size(size);
    for row in 0..size {
        for col in 0..size {
            let player = if (col + 2 * row) % 4 < 2 {
                Player::X
            } else {
                Player::O
            };
            let index = board.index_of(row, col);
            board.set(index, Cell::Stone(player)).unwrap();
        }
    }
    assert!(is_draw(&board));
    assert_eq!(winner(&board), None);
}
