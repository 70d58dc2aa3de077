//! Easy tier: every tactical step is gated by a coin flip.

use super::best_scoring;
use super::scan::{NEIGHBORS, center_distance, in_center_region, neighbor_counts, ray_length};
use crate::games::gomoku::random::RandomSource;
use crate::games::gomoku::rules::win::find_winning_move;
use crate::games::gomoku::types::Board;
use crate::games::gomoku::types::Player;
use tracing::{debug, instrument};

/// Chance to take an immediate win.
pub const WIN_CHANCE: f64 = 0.85;
/// Chance to block the opponent's immediate win.
pub const BLOCK_CHANCE: f64 = 0.80;
/// Chance to run the full positional scoring pass.
pub const SCORING_CHANCE: f64 = 0.70;
/// Chance to prefer a random central cell in the fallback.
pub const CENTER_CHANCE: f64 = 0.90;

/// Picks a move for `player`, or `None` on a full board.
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn choose_move(board: &Board, player: Player, rng: &mut impl RandomSource) -> Option<usize> {
    if let Some(index) = find_winning_move(board, player)
        && rng.chance(WIN_CHANCE)
    {
        debug!(index, "Taking winning move");
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, player.opponent())
        && rng.chance(BLOCK_CHANCE)
    {
        debug!(index, "Blocking opponent");
        return Some(index);
    }

    if rng.chance(SCORING_CHANCE)
        && let Some((index, score)) =
            best_scoring(board.empty_indices(), |i| positional_score(board, i, player))
    {
        debug!(index, score, "Playing best scored cell");
        return Some(index);
    }

    fallback(board, player, rng)
}

/// Positional score of an empty cell for `player`.
pub fn positional_score(board: &Board, index: usize, player: Player) -> f64 {
    let mut score = 0.0;

    if in_center_region(board, index) {
        score += 60.0;
    }
    score += (4.0 - center_distance(board, index)) * 10.0;

    let (own, opp) = neighbor_counts(board, index, player);
    score += f64::from(own) * 8.0 + f64::from(opp) * 5.0;

    for direction in NEIGHBORS {
        match ray_length(board, index, player, direction, 3) {
            n if n >= 3 => score += 40.0,
            2 => score += 25.0,
            _ => {}
        }
    }

    if own >= 2 {
        score += 20.0;
    }

    score
}

/// Last resort: usually a random central cell, otherwise the best of the rest.
fn fallback(board: &Board, player: Player, rng: &mut impl RandomSource) -> Option<usize> {
    let (center, other): (Vec<usize>, Vec<usize>) = board
        .empty_indices()
        .into_iter()
        .partition(|&i| in_center_region(board, i));

    if !center.is_empty() && rng.chance(CENTER_CHANCE) {
        let index = center[rng.pick(center.len())];
        debug!(index, "Random central cell");
        return Some(index);
    }

    let scored = best_scoring(other, |i| {
        let (own, opp) = neighbor_counts(board, i, player);
        -3.0 * center_distance(board, i) + 3.0 * f64::from(own) + 2.0 * f64::from(opp)
    });
    if let Some((index, _)) = scored {
        debug!(index, "Best outer cell");
        return Some(index);
    }

    // Only central cells remain but the center gate failed.
    center.first().copied()
}
