//! Board geometry shared by the move heuristics.
//!
//! Every helper reads the board without mutating it. The candidate cell is
//! treated as already holding the scanning player's stone, which is why no
//! scan ever reads the origin cell itself.

use crate::games::gomoku::types::{Board, Cell, Player};

/// The eight compass steps around a cell.
pub const NEIGHBORS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The four undirected axes: horizontal, vertical, ↘ and ↗.
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Side length of the square the easy tier prefers.
const CENTER_REGION_SPAN: usize = 4;

/// Euclidean distance from a cell to the geometric center of the board.
pub fn center_distance(board: &Board, index: usize) -> f64 {
    let (row, col) = board.coords(index);
    let center = (board.size() as f64 - 1.0) / 2.0;
    let dr = row as f64 - center;
    let dc = col as f64 - center;
    (dr * dr + dc * dc).sqrt()
}

/// True if the cell lies in the preferred 4×4 square near the center.
///
/// The square sits one column right of true center: on an 8×8 board it
/// covers rows 2 through 5 and columns 3 through 6.
pub fn in_center_region(board: &Board, index: usize) -> bool {
    let row_start = board.size().saturating_sub(CENTER_REGION_SPAN) / 2;
    let col_start = row_start + 1;
    let (row, col) = board.coords(index);
    (row_start..row_start + CENTER_REGION_SPAN).contains(&row)
        && (col_start..col_start + CENTER_REGION_SPAN).contains(&col)
}

/// Counts `player`'s and the opponent's stones among the eight neighbors.
pub fn neighbor_counts(board: &Board, index: usize, player: Player) -> (u32, u32) {
    let (row, col) = board.coords(index);
    NEIGHBORS
        .iter()
        .filter_map(|&(dr, dc)| board.offset(row, col, dr, dc, 1))
        .filter_map(|i| board.get(i).and_then(Cell::player))
        .fold((0, 0), |(own, opp), stone| {
            if stone == player {
                (own + 1, opp)
            } else {
                (own, opp + 1)
            }
        })
}

/// What lies beyond the origin along one axis, both ways.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisRun {
    /// Stones of the scanning player, origin included.
    pub count: u32,
    /// Empty cells passed over.
    pub empty: u32,
    /// Ends closed by an opposing stone or, if counted, the board edge.
    pub blocked: u32,
}

/// How a directional scan treats cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapRule {
    /// Stop at the first empty cell.
    StopAtEmpty,
    /// Count empty cells and keep scanning through them.
    SkipEmpty,
}

/// Scans `steps` cells each way along (`dr`, `dc`) from `index`.
///
/// Scanning stops at an opposing stone, at the board edge, and, under
/// [`GapRule::StopAtEmpty`], at the first empty cell. An opposing stone
/// always counts as a blocked end; the edge does so only if `edge_blocks`.
pub fn scan_axis(
    board: &Board,
    index: usize,
    player: Player,
    (dr, dc): (isize, isize),
    steps: isize,
    gaps: GapRule,
    edge_blocks: bool,
) -> AxisRun {
    let (row, col) = board.coords(index);
    let mut run = AxisRun {
        count: 1,
        ..AxisRun::default()
    };

    for dir in [-1, 1] {
        for step in 1..=steps {
            let Some(target) = board.offset(row, col, dr * dir, dc * dir, step) else {
                if edge_blocks {
                    run.blocked += 1;
                }
                break;
            };
            match board.get(target) {
                Some(Cell::Stone(stone)) if stone == player => run.count += 1,
                Some(Cell::Empty) => {
                    run.empty += 1;
                    if gaps == GapRule::StopAtEmpty {
                        break;
                    }
                }
                _ => {
                    run.blocked += 1;
                    break;
                }
            }
        }
    }

    run
}

/// Length of the unbroken run through `index` heading one way only.
///
/// Looks up to `steps` cells ahead; off-board cells add nothing.
pub fn ray_length(
    board: &Board,
    index: usize,
    player: Player,
    (dr, dc): (isize, isize),
    steps: isize,
) -> u32 {
    let (row, col) = board.coords(index);
    let mut count = 1;
    for step in 1..=steps {
        let Some(target) = board.offset(row, col, dr, dc, step) else {
            continue;
        };
        if board.get(target) == Some(Cell::Stone(player)) {
            count += 1;
        } else {
            break;
        }
    }
    count
}

/// True if some axis through `position` holds `count` of `player`'s stones in
/// an unbroken run, the origin included.
///
/// The origin cell is assumed to hold `player`'s stone.
pub fn check_consecutive(board: &Board, position: usize, player: Player, count: usize) -> bool {
    let (row, col) = board.coords(position);
    let reach = count.saturating_sub(1) as isize;

    AXES.iter().any(|&(dr, dc)| {
        let mut consecutive = 1;
        for dir in [-1, 1] {
            for step in 1..=reach {
                match board.offset(row, col, dr * dir, dc * dir, step) {
                    Some(target) if board.get(target) == Some(Cell::Stone(player)) => {
                        consecutive += 1
                    }
                    _ => break,
                }
            }
        }
        consecutive >= count
    })
}
