//! Game rules for five-in-a-row.
//!
//! This module contains pure functions for evaluating game state
//! according to five-in-a-row rules. Rules are separated from board
//! storage so the AI and the turn controller share one definition of a win.

pub mod draw;
pub mod expand;
pub mod win;

pub use draw::is_draw;
pub use expand::{draw_probability, expand};
pub use win::{all_lines, count_winning_moves, find_winning_move, has_win, lines_for, winner};
