//! Consistent winner invariant: simultaneous winning lines share one owner.

use super::super::GameEngine;
use super::super::rules::winning_lines;
use super::Invariant;

/// Invariant: every completed line belongs to the same player.
///
/// Alternating play cannot produce lines owned by both players, but a
/// board assembled by other means can. Reporting one owner for such a
/// board would be arbitrary, so it is rejected.
pub struct ConsistentWinnerInvariant;

impl<R> Invariant<GameEngine<R>> for ConsistentWinnerInvariant {
    fn holds(game: &GameEngine<R>) -> bool {
        let lines = winning_lines(game.board());
        match lines.first() {
            Some(first) => lines.iter().all(|line| line.player == first.player),
            None => true,
        }
    }

    fn description() -> &'static str {
        "All completed lines belong to one player"
    }
}
