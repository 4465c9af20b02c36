//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, GameStatus, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// X moves first, so X holds either as many marks as O or one more.
/// While the game runs, X is to move exactly when the counts are equal.
pub struct AlternatingTurnInvariant;

impl<R> Invariant<GameEngine<R>> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine<R>) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);

        if x != o && x != o + 1 {
            return false;
        }

        if game.status() != GameStatus::InProgress {
            return true;
        }

        let expected_next = if x == o { Player::X } else { Player::O };
        game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
