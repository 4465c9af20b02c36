//! First-class move and turn types for tic-tac-toe.
//!
//! A turn is what the caller observes after one call to
//! [`GameEngine::apply_move`](super::GameEngine::apply_move): the human
//! placement and, in AI mode, the reply that was played in the same call.

use super::ai::MoveReason;
use super::{GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The player who placed the mark.
    pub player: Player,
    /// Row-major index of the cell.
    pub index: usize,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TurnReport {
    /// Placements in the order they were applied (one or two).
    placements: Vec<Placement>,
    /// Why the AI picked its reply, when it played one.
    ai_reason: Option<MoveReason>,
    /// Status after the last placement.
    status: GameStatus,
    /// Indices to highlight when the turn ended the game with a win.
    winning_line: Option<Vec<usize>>,
}

impl TurnReport {
    pub(crate) fn new(
        placements: Vec<Placement>,
        ai_reason: Option<MoveReason>,
        status: GameStatus,
        winning_line: Option<Vec<usize>>,
    ) -> Self {
        Self {
            placements,
            ai_reason,
            status,
            winning_line,
        }
    }

    /// True if this turn ended the game.
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Error that can occur when applying a move.
///
/// A rejected move never changes the board, the status, or whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside the board.
    #[display("Cell {} is outside the board", _0)]
    OutOfBounds(usize),

    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
