//! Win detection logic for tic-tac-toe.
//!
//! A board of edge N has 2N + 2 candidate lines: N rows, N columns, the
//! main diagonal and the anti-diagonal, always produced in that order.

use super::super::{Board, BoardSize, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line and the player who owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// Owner of every cell in the line.
    pub player: Player,
    /// Row-major indices of the line's cells.
    pub indices: Vec<usize>,
}

/// Builds every candidate line for a board of the given size.
#[instrument]
pub fn lines(size: BoardSize) -> Vec<Vec<usize>> {
    let n = size.get();
    let mut lines = Vec::with_capacity(2 * n + 2);

    for row in 0..n {
        lines.push((0..n).map(|col| row * n + col).collect());
    }
    for col in 0..n {
        lines.push((0..n).map(|row| row * n + col).collect());
    }
    lines.push((0..n).map(|i| i * n + i).collect());
    lines.push((0..n).map(|i| i * n + (n - 1 - i)).collect());

    lines
}

/// Owner of `line` if all of its cells hold the same player.
fn line_owner(board: &Board, line: &[usize]) -> Option<Player> {
    let first = board.get(*line.first()?)?.player()?;
    line.iter()
        .all(|&i| board.get(i).and_then(|c| c.player()) == Some(first))
        .then_some(first)
}

/// Every completed line on the board, in candidate order.
///
/// Several lines can complete at once (a move that closes a row and a
/// diagonal together). Under alternating play they share one owner.
#[instrument(skip(board))]
pub fn winning_lines(board: &Board) -> Vec<WinningLine> {
    lines(board.size())
        .into_iter()
        .filter_map(|indices| {
            line_owner(board, &indices).map(|player| WinningLine { player, indices })
        })
        .collect()
}

/// Returns the first completed line, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    lines(board.size()).into_iter().find_map(|indices| {
        line_owner(board, &indices).map(|player| WinningLine { player, indices })
    })
}
