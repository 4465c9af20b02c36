//! N×N tic-tac-toe: board, rules, invariants, the AI heuristic and the engine.

mod action;
pub mod ai;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{MoveError, Placement, TurnReport};
pub use ai::{AiChoice, MoveReason, choose_move};
pub use game::GameEngine;
pub use rules::WinningLine;
pub use types::{
    Board, BoardSize, Cell, GameMode, GameStatus, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Player,
};
