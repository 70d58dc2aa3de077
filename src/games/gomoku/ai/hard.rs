//! Hard tier: ungated tactics plus attack and defence run scoring.
//!
//! Board expansion is decided one level up in [`super::decide`]; this
//! module only ever picks a cell on the board it is given.

use super::best_scoring;
use super::scan::{AXES, AxisRun, GapRule, center_distance, scan_axis};
use crate::games::gomoku::random::RandomSource;
use crate::games::gomoku::rules::win::find_winning_move;
use crate::games::gomoku::types::{Board, Player};
use tracing::{debug, instrument, warn};

/// Share of the defensive score added to a cell's value.
pub const DEFENCE_WEIGHT: f64 = 0.8;

/// Picks a move for `player`, or `None` on a full board.
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn choose_move(board: &Board, player: Player, rng: &mut impl RandomSource) -> Option<usize> {
    if let Some(index) = find_winning_move(board, player) {
        debug!(index, "Taking winning move");
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, player.opponent()) {
        debug!(index, "Blocking opponent");
        return Some(index);
    }

    let empty = board.empty_indices();
    if let Some((index, score)) = best_scoring(empty.iter().copied(), |i| {
        position_score(board, i, player)
    }) && score > f64::NEG_INFINITY
    {
        debug!(index, score, "Playing best scored cell");
        return Some(index);
    }

    if empty.is_empty() {
        return None;
    }
    let index = empty[rng.pick(empty.len())];
    warn!(index, "No cell scored, playing a random empty cell");
    Some(index)
}

/// Value of `player` taking `index`, attack and weighted defence combined.
pub fn position_score(board: &Board, index: usize, player: Player) -> f64 {
    let attack: f64 = AXES
        .iter()
        .map(|&axis| {
            let run = scan_axis(board, index, player, axis, 4, GapRule::SkipEmpty, true);
            let mut value = pattern_value(run);
            if run.blocked == 0 {
                value += f64::from(run.count) * 500.0;
            }
            value
        })
        .sum();

    let center = (4.0 - center_distance(board, index)) * 100.0;

    attack + center + defensive_score(board, index, player.opponent()) * DEFENCE_WEIGHT
}

/// Threat `opponent` would hold by taking `index` instead.
pub fn defensive_score(board: &Board, index: usize, opponent: Player) -> f64 {
    AXES.iter()
        .map(|&axis| {
            pattern_value(scan_axis(
                board,
                index,
                opponent,
                axis,
                4,
                GapRule::SkipEmpty,
                false,
            ))
        })
        .sum()
}

fn pattern_value(run: AxisRun) -> f64 {
    match (run.count, run.empty) {
        (c, _) if c >= 4 => 10_000.0,
        (3, e) if e >= 2 => 5_000.0,
        (2, e) if e >= 3 => 1_000.0,
        _ => 0.0,
    }
}
