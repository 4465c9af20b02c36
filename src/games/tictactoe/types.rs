//! Core domain types for N×N tic-tac-toe.

use crate::settings::SettingsError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest board edge the engine accepts.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest board edge the engine accepts.
pub const MAX_BOARD_SIZE: usize = 10;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, played by the AI in [`GameMode::VsAi`]).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Symbol shown for this cell: `"X"`, `"O"`, or `""` when empty.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Occupied(Player::X) => "X",
            Cell::Occupied(Player::O) => "O",
        }
    }
}

/// Edge length of a square board, validated to `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Validates a board edge length.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, SettingsError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(SettingsError::SizeOutOfRange(size))
        }
    }

    /// Returns the edge length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells on a board of this size.
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(MIN_BOARD_SIZE)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = SettingsError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// N×N board stored row-major (`index = row * N + col`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Builds a board from row-major cells.
    ///
    /// Returns `None` when the cell count does not match `size²`.
    pub fn from_cells(size: BoardSize, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == size.cell_count()).then_some(Self { size, cells })
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at the given index. Out-of-range indices are ignored.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Indices of all empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of cells held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game is won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// End-of-game banner, `None` while the game is running.
    pub fn message(self) -> Option<String> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(format!("{player} Wins!")),
            GameStatus::Draw => Some("Draw!".to_string()),
        }
    }
}

/// Who controls player O.
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
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[serde(rename = "twoPlayer")]
    #[strum(serialize = "twoPlayer")]
    TwoPlayer,
    /// O is played by the built-in heuristic.
    #[serde(rename = "ai")]
    #[strum(serialize = "ai")]
    VsAi,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_bounds() {
        assert!(BoardSize::new(2).is_err());
        assert!(BoardSize::new(3).is_ok());
        assert!(BoardSize::new(MAX_BOARD_SIZE).is_ok());
        assert!(BoardSize::new(MAX_BOARD_SIZE + 1).is_err());
    }

    #[test]
    fn test_new_board_all_empty() {
        for n in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
            let board = Board::new(BoardSize::new(n).unwrap());
            assert_eq!(board.cells().len(), n * n);
            assert_eq!(board.empty_cells().len(), n * n);
        }
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        let size = BoardSize::default();
        assert!(Board::from_cells(size, vec![Cell::Empty; 8]).is_none());
        assert!(Board::from_cells(size, vec![Cell::Empty; 9]).is_some());
    }

    #[test]
    fn test_game_mode_tags() {
        assert_eq!(GameMode::TwoPlayer.to_string(), "twoPlayer");
        assert_eq!("ai".parse::<GameMode>().unwrap(), GameMode::VsAi);
        assert!("chess".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(GameStatus::Won(Player::X).message().unwrap(), "X Wins!");
        assert_eq!(GameStatus::Draw.message().unwrap(), "Draw!");
        assert!(GameStatus::InProgress.message().is_none());
    }
}
