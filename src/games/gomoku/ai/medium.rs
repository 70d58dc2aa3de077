//! Medium tier: near-certain tactics and contact-heavy scoring.

use super::best_scoring;
use super::scan::{
    GapRule, NEIGHBORS, center_distance, check_consecutive, neighbor_counts, scan_axis,
};
use crate::games::gomoku::random::RandomSource;
use crate::games::gomoku::rules::win::find_winning_move;
use crate::games::gomoku::types::{Board, Player};
use tracing::{debug, instrument};

/// Chance applied to each of the win, block and scoring steps.
pub const TACTIC_CHANCE: f64 = 0.99;

/// Picks a move for `player`, or `None` on a full board.
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn choose_move(board: &Board, player: Player, rng: &mut impl RandomSource) -> Option<usize> {
    if let Some(index) = find_winning_move(board, player)
        && rng.chance(TACTIC_CHANCE)
    {
        debug!(index, "Taking winning move");
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, player.opponent())
        && rng.chance(TACTIC_CHANCE)
    {
        debug!(index, "Blocking opponent");
        return Some(index);
    }

    if rng.chance(TACTIC_CHANCE)
        && let Some((index, score)) =
            best_scoring(board.empty_indices(), |i| positional_score(board, i, player))
    {
        debug!(index, score, "Playing best scored cell");
        return Some(index);
    }

    let fallback = best_scoring(board.empty_indices(), |i| {
        let (own, opp) = neighbor_counts(board, i, player);
        -5.0 * center_distance(board, i) + 7.0 * f64::from(own) + 12.0 * f64::from(opp)
    });
    fallback.map(|(index, _)| index)
}

/// Positional score of an empty cell for `player`.
///
/// Runs are scanned from each of the eight directions, both ways, so every
/// axis contributes twice.
pub fn positional_score(board: &Board, index: usize, player: Player) -> f64 {
    let mut score = (4.0 - center_distance(board, index)) * 15.0;

    let (own, opp) = neighbor_counts(board, index, player);
    score += f64::from(own) * 7.0 + f64::from(opp) * 12.0;

    for direction in NEIGHBORS {
        let run = scan_axis(board, index, player, direction, 4, GapRule::StopAtEmpty, true);
        score += match (run.count, run.blocked) {
            (c, _) if c >= 4 => 200.0,
            (3, 0) => 150.0,
            (3, _) => 130.0,
            (2, 0) => 100.0,
            _ => 0.0,
        };
    }

    if own >= 2 {
        score += 25.0;
    }

    score + defensive_score(board, index, player.opponent())
}

/// Value of denying `opponent` this cell.
fn defensive_score(board: &Board, index: usize, opponent: Player) -> f64 {
    if check_consecutive(board, index, opponent, 4) {
        150.0
    } else if check_consecutive(board, index, opponent, 3) {
        120.0
    } else {
        0.0
    }
}
