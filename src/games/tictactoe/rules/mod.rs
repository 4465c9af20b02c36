//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for win and draw detection on
//! boards of any supported size.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinningLine, check_winner, lines, winning_lines};
