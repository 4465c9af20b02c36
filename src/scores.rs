//! Cumulative win/draw tally.

use crate::games::tictactoe::{GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Counts of X wins, O wins and draws across games.
///
/// Serialized as `{"x":..,"o":..,"draws":..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Games won by X.
    #[serde(default)]
    pub x: u32,
    /// Games won by O.
    #[serde(default)]
    pub o: u32,
    /// Drawn games.
    #[serde(default)]
    pub draws: u32,
}

impl ScoreTally {
    /// Counts one finished game. Running games are ignored; counters stop
    /// at `u32::MAX`.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::InProgress => return,
            GameStatus::Won(Player::X) => self.x = self.x.saturating_add(1),
            GameStatus::Won(Player::O) => self.o = self.o.saturating_add(1),
            GameStatus::Draw => self.draws = self.draws.saturating_add(1),
        }
        debug!(x = self.x, o = self.o, draws = self.draws, "Tally updated");
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.x.saturating_add(self.o).saturating_add(self.draws)
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}  Draws: {}", self.x, self.o, self.draws)
    }
}
