//! Board view model for renderers, plus a plain-text renderer.

use crate::games::tictactoe::{Cell, GameEngine, GameStatus};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// What a renderer needs to draw one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct CellView {
    /// Row-major index.
    index: usize,
    /// `"X"`, `"O"` or `""`.
    symbol: &'static str,
    /// True when the cell holds a mark and cannot be played.
    occupied: bool,
    /// True when the cell is part of the winning line.
    winner: bool,
}

impl CellView {
    /// Accessible label, e.g. `"Tile 5: X"` or `"Tile 1: Empty"`.
    pub fn label(&self) -> String {
        let symbol = if self.occupied { self.symbol } else { "Empty" };
        format!("Tile {}: {}", self.index + 1, symbol)
    }
}

/// Snapshot of the board for drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct BoardView {
    /// Edge length.
    size: usize,
    /// Cells in row-major order.
    cells: Vec<CellView>,
    /// End-of-game banner, if the game is over.
    message: Option<String>,
}

/// Builds the view of the engine's current board.
#[instrument(skip(engine), fields(size = %engine.size()))]
pub fn board_view<R>(engine: &GameEngine<R>) -> BoardView {
    let winners = engine.winning_line().unwrap_or(&[]);
    let cells = engine
        .board()
        .cells()
        .iter()
        .enumerate()
        .map(|(index, cell)| CellView {
            index,
            symbol: cell.symbol(),
            occupied: *cell != Cell::Empty,
            winner: winners.contains(&index),
        })
        .collect();

    BoardView {
        size: engine.size().get(),
        cells,
        message: engine.status().message(),
    }
}

/// Status line for the player to read between moves.
pub fn status_line<R>(engine: &GameEngine<R>) -> String {
    match engine.status() {
        GameStatus::InProgress => format!("{} to move", engine.current_player()),
        status => status.message().unwrap_or_default(),
    }
}

impl std::fmt::Display for BoardView {
    /// Renders a grid. Empty cells show their 1-based number, winning cells
    /// are bracketed.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = (self.size * self.size).to_string().len();
        let separator = vec!["-".repeat(width + 2); self.size].join("+");

        for (row, cells) in self.cells.chunks(self.size.max(1)).enumerate() {
            if row > 0 {
                writeln!(f, "{separator}")?;
            }
            let line: Vec<String> = cells
                .iter()
                .map(|cell| {
                    let text = if cell.occupied {
                        cell.symbol.to_string()
                    } else {
                        (cell.index + 1).to_string()
                    };
                    if cell.winner {
                        format!("[{text:^width$}]")
                    } else {
                        format!(" {text:^width$} ")
                    }
                })
                .collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
