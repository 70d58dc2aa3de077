//! Difficulty-tiered move selection.
//!
//! Each tier is a pure function of the board, the side to move and an
//! injected [`RandomSource`]. The tiers share one cascade (win, block,
//! score, fall back) and differ in gating probabilities and weights.

pub mod easy;
pub mod hard;
pub mod medium;
pub mod scan;

use super::random::RandomSource;
use super::rules::expand::{EXPAND_THRESHOLD, draw_probability};
use super::types::{Board, MAX_SIZE, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Difficulty tier of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Gated, forgiving heuristics.
    #[default]
    Easy,
    /// Near-certain tactics with denser scoring.
    Medium,
    /// Ungated scoring with board expansion to avoid draws.
    Hard,
}

/// What the AI wants to do this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Place a stone at this index.
    Place(usize),
    /// Grow the board first, then decide again.
    Expand,
    /// No empty cell remains.
    NoMove,
}

/// Decides the AI's action on `board` for `player`.
///
/// Only the hard tier ever asks for [`Decision::Expand`], and only while
/// the board can still grow.
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn decide(
    board: &Board,
    difficulty: Difficulty,
    player: Player,
    rng: &mut impl RandomSource,
) -> Decision {
    if difficulty == Difficulty::Hard
        && board.size() < MAX_SIZE
        && draw_probability(board, difficulty) >= EXPAND_THRESHOLD
    {
        debug!("Draw looks certain, requesting expansion");
        return Decision::Expand;
    }

    match choose_move(board, difficulty, player, rng) {
        Some(index) => Decision::Place(index),
        None => Decision::NoMove,
    }
}

/// Picks a cell for `player` with the tier's strategy, never expanding.
pub fn choose_move(
    board: &Board,
    difficulty: Difficulty,
    player: Player,
    rng: &mut impl RandomSource,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => easy::choose_move(board, player, rng),
        Difficulty::Medium => medium::choose_move(board, player, rng),
        Difficulty::Hard => hard::choose_move(board, player, rng),
    }
}

/// Highest-scoring candidate; ties go to the earliest.
pub(crate) fn best_scoring(
    candidates: impl IntoIterator<Item = usize>,
    mut score: impl FnMut(usize) -> f64,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for index in candidates {
        let value = score(index);
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((index, value));
        }
    }
    best
}
