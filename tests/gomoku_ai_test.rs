//! Tests for the difficulty tiers and the hard tier's board growth.

use proptest::prelude::*;
use strictly_gomoku::games::gomoku::ai::{choose_move, decide};
use strictly_gomoku::games::gomoku::rules::draw_probability;
use strictly_gomoku::{
    AiStep, Board, Cell, ChannelPresenter, Decision, Difficulty, GameEvent, GameState, MAX_SIZE,
    NullPresenter, Player, ScriptedRandom, SeededRandom, StatusMessage, TurnController,
};

fn board_with(size: usize, stones: &[(usize, usize, Player)]) -> Board {
    let mut board = Board::with_size(size);
    for &(row, col, player) in stones {
        let index = board.index_of(row, col);
        board.set(index, Cell::Stone(player)).unwrap();
    }
    board
}

/// Full board with no five alike, minus the listed cells.
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

/// Snapshot of a game on `board` with `to_move` next.
fn snapshot(board: &Board, to_move: Player, difficulty: Difficulty) -> GameState {
    let game = TurnController::new(difficulty, Box::new(NullPresenter));
    let mut value = serde_json::to_value(game.current_state()).unwrap();
    value["board"] = serde_json::to_value(board).unwrap();
    value["current_player"] = serde_json::to_value(to_move).unwrap();
    serde_json::from_value(value).unwrap()
}

const DIAGONAL_CLEARED: [usize; 10] = [0, 9, 18, 27, 36, 45, 54, 63, 7, 56];

#[test]
fn test_every_tier_blocks_four_when_gates_pass() {
    // X holds (5, 1)..(5, 4); (5, 0) and (5, 5) both stop it, lowest first.
    let board = board_with(
        8,
        &[
            (5, 1, Player::X),
            (5, 2, Player::X),
            (5, 3, Player::X),
            (5, 4, Player::X),
            (0, 7, Player::O),
        ],
    );
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let mut rng = ScriptedRandom::always_pass();
        assert_eq!(
            choose_move(&board, difficulty, Player::O, &mut rng),
            Some(40),
            "{difficulty}"
        );
    }
}

#[test]
fn test_hard_blocks_even_with_hostile_rng() {
    let board = board_with(
        8,
        &[
            (1, 2, Player::X),
            (2, 3, Player::X),
            (3, 4, Player::X),
            (4, 5, Player::X),
        ],
    );
    // (0, 1) precedes (5, 6) in row-major order.
    let mut rng = ScriptedRandom::always_fail();
    assert_eq!(choose_move(&board, Difficulty::Hard, Player::O, &mut rng), Some(1));
}

#[test]
fn test_easy_can_miss_a_win() {
    let board = board_with(
        8,
        &[
            (7, 0, Player::O),
            (7, 1, Player::O),
            (7, 2, Player::O),
            (7, 3, Player::O),
        ],
    );
    let mut rng = ScriptedRandom::always_fail();
    let index = choose_move(&board, Difficulty::Easy, Player::O, &mut rng).unwrap();
    assert_ne!(index, 60);
    assert!(board.is_vacant(index));
}

#[test]
fn test_decide_expands_only_on_hard() {
    let board = sparse_draw(8, &DIAGONAL_CLEARED);
    let mut rng = ScriptedRandom::always_pass();
    assert_eq!(decide(&board, Difficulty::Hard, Player::O, &mut rng), Decision::Expand);
    assert!(matches!(
        decide(&board, Difficulty::Medium, Player::O, &mut rng),
        Decision::Place(_)
    ));
    assert_eq!(draw_probability(&board, Difficulty::Easy), 0.0);
}

#[test]
fn test_decide_never_expands_at_max_size() {
    let cleared: Vec<usize> = (0..10).map(|i| i * 13).collect();
    let board = sparse_draw(MAX_SIZE, &cleared);
    let mut rng = ScriptedRandom::always_pass();
    match decide(&board, Difficulty::Hard, Player::O, &mut rng) {
        Decision::Place(index) => assert!(board.is_vacant(index)),
        other => panic!("expected a placement, got {other:?}"),
    }
}

#[test]
fn test_controller_expands_then_moves() {
    let state = snapshot(&sparse_draw(8, &DIAGONAL_CLEARED), Player::O, Difficulty::Hard);
    let (presenter, mut rx) = ChannelPresenter::channel();
    let mut game = TurnController::resume(state, Box::new(presenter)).unwrap();

    let step = game.run_ai_turn(&mut ScriptedRandom::always_pass());
    assert!(matches!(step, AiStep::Moved(_)));

    let board = game.state().board();
    assert_eq!(board.size(), 9);
    assert_eq!(board.empty_count(), 10 + 17 - 1);
    assert_eq!(*game.state().current_player(), Player::X);

    let statuses: Vec<StatusMessage> = std::iter::from_fn(|| rx.try_recv().ok())
        .filter_map(|event| match event {
            GameEvent::Render { status, .. } => Some(status),
            _ => None,
        })
        .collect();
    assert_eq!(
        statuses,
        vec![
            StatusMessage::AiTurn,
            StatusMessage::BoardExpanded,
            StatusMessage::PlayerTurn
        ]
    );
}

#[test]
fn test_expansion_keeps_turn_outstanding() {
    let state = snapshot(&sparse_draw(8, &DIAGONAL_CLEARED), Player::O, Difficulty::Hard);
    let mut game = TurnController::resume(state, Box::new(NullPresenter)).unwrap();

    let ticket = game.begin_ai_turn().unwrap();
    let mut rng = ScriptedRandom::always_pass();
    let next = match game.complete_ai_turn(ticket, &mut rng) {
        AiStep::Expanded(next) => next,
        other => panic!("expected expansion, got {other:?}"),
    };
    assert!(game.is_thinking());
    assert_eq!(game.state().board().size(), 9);

    assert!(matches!(game.complete_ai_turn(next, &mut rng), AiStep::Moved(_)));
    assert!(!game.is_thinking());
}

proptest! {
    #[test]
    fn chosen_cell_is_always_vacant(
        stones in proptest::collection::vec((0usize..64, any::<bool>()), 0..40),
        tier in 0usize..3,
        seed in any::<u64>(),
    ) {
        let mut board = Board::new();
        for &(index, is_x) in &stones {
            let player = if is_x { Player::X } else { Player::O };
            board.set(index, Cell::Stone(player)).unwrap();
        }
        let difficulty = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard][tier];
        let mut rng = SeededRandom::from_seed(seed);
        let index = choose_move(&board, difficulty, Player::O, &mut rng);
        prop_assert!(index.is_some());
        prop_assert!(board.is_vacant(index.unwrap()));
    }
}
