//! One-ply opponent heuristic.
//!
//! The AI looks exactly one move ahead: take a winning cell if one exists,
//! otherwise occupy the cell that would let the opponent win, otherwise
//! play a uniformly random empty cell. It can be beaten by multi-move
//! traps on larger boards.

use super::rules::check_winner;
use super::{Board, Cell, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why the AI chose its cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum MoveReason {
    /// The cell completes a line for the AI.
    Win,
    /// The cell denies an immediate opponent win.
    Block,
    /// No forced move existed.
    Random,
}

/// A cell chosen by the heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiChoice {
    /// Row-major index to play.
    pub index: usize,
    /// Which rule selected the index.
    pub reason: MoveReason,
}

/// First empty index (ascending) where `player` would complete a line.
///
/// Each candidate is placed on a scratch board and removed again before
/// the next one is tried.
fn completing_cell(board: &Board, empty: &[usize], player: Player) -> Option<usize> {
    let mut scratch = board.clone();
    for &index in empty {
        scratch.set(index, Cell::Occupied(player));
        let wins = check_winner(&scratch).is_some_and(|line| line.player == player);
        scratch.set(index, Cell::Empty);
        if wins {
            return Some(index);
        }
    }
    None
}

/// Picks a cell for `me`. Returns `None` only on a full board.
#[instrument(skip(board, rng), fields(size = %board.size()))]
pub fn choose_move<R: Rng + ?Sized>(board: &Board, me: Player, rng: &mut R) -> Option<AiChoice> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    if let Some(index) = completing_cell(board, &empty, me) {
        debug!(index, "Winning cell found");
        return Some(AiChoice {
            index,
            reason: MoveReason::Win,
        });
    }

    if let Some(index) = completing_cell(board, &empty, me.opponent()) {
        debug!(index, "Blocking opponent threat");
        return Some(AiChoice {
            index,
            reason: MoveReason::Block,
        });
    }

    let index = empty[rng.random_range(0..empty.len())];
    debug!(index, candidates = empty.len(), "No forced move, picking at random");
    Some(AiChoice {
        index,
        reason: MoveReason::Random,
    })
}

#[cfg(test)]
mod tests {
    use super::super::BoardSize;
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_with(size: usize, marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new(BoardSize::new(size).unwrap());
        for &(index, player) in marks {
            board.set(index, Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_takes_win_over_block() {
        // X threatens 6-7-8, O can finish 0-1-2.
        let board = board_with(
            3,
            &[
                (0, Player::O),
                (1, Player::O),
                (6, Player::X),
                (7, Player::X),
                (4, Player::X),
            ],
        );
        let choice = choose_move(&board, Player::O, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(choice.index, 2);
        assert_eq!(choice.reason, MoveReason::Win);
    }

    #[test]
    fn test_blocks_threat() {
        let board = board_with(3, &[(0, Player::X), (4, Player::X), (1, Player::O)]);
        let choice = choose_move(&board, Player::O, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(choice.index, 8);
        assert_eq!(choice.reason, MoveReason::Block);
    }

    #[test]
    fn test_lowest_index_wins_ties() {
        // O can complete either row 0 (at 2) or row 2 (at 8).
        let board = board_with(
            3,
            &[
                (0, Player::O),
                (1, Player::O),
                (6, Player::O),
                (7, Player::O),
                (3, Player::X),
                (4, Player::X),
            ],
        );
        let choice = choose_move(&board, Player::O, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(choice.index, 2);
    }

    #[test]
    fn test_random_fallback_is_empty_and_seeded() {
        let board = board_with(4, &[(5, Player::X)]);
        let a = choose_move(&board, Player::O, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = choose_move(&board, Player::O, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.reason, MoveReason::Random);
        assert!(board.is_empty(a.index));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let marks: Vec<_> = (0..9)
            .map(|i| (i, if i % 2 == 0 { Player::X } else { Player::O }))
            .collect();
        let board = board_with(3, &marks);
        assert!(choose_move(&board, Player::O, &mut StdRng::seed_from_u64(0)).is_none());
    }
}
