//! Board shape invariant: the board always has exactly N² cells.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: cell count matches the configured size.
pub struct BoardShapeInvariant;

impl<R> Invariant<GameEngine<R>> for BoardShapeInvariant {
    fn holds(game: &GameEngine<R>) -> bool {
        let board = game.board();
        board.cells().len() == board.size().cell_count()
    }

    fn description() -> &'static str {
        "Board holds exactly size² cells"
    }
}
