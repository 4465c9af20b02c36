//! The game-state engine.
//!
//! [`GameEngine`] owns the board, whose turn it is, the mode, the status and
//! the running score tally. It performs no I/O; renderers, storage and sound
//! read its state after each call.

use super::action::{MoveError, Placement, TurnReport};
use super::ai::{self, MoveReason};
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules::{check_winner, is_full};
use super::{Board, BoardSize, Cell, GameMode, GameStatus, Player};
use crate::scores::ScoreTally;
use crate::settings::GameConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// `R` is the random source used for the AI's unforced moves. Inject a
/// seeded generator with [`GameEngine::with_rng`] for reproducible games.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) mode: GameMode,
    pub(crate) status: GameStatus,
    pub(crate) winning_line: Option<Vec<usize>>,
    pub(crate) scores: ScoreTally,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Creates an engine whose AI draws from an OS-seeded generator.
    #[instrument(skip(config), fields(size = %config.size, mode = %config.mode))]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R> GameEngine<R> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Indices of the line that won the game, if it has been won.
    pub fn winning_line(&self) -> Option<&[usize]> {
        self.winning_line.as_deref()
    }

    /// Returns the score tally.
    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    /// Clears the board for a new game. Scores are kept.
    #[instrument(skip(self), fields(size = %self.board.size()))]
    pub fn reset_game(&mut self) {
        self.board = Board::new(self.board.size());
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        info!("Game reset");
    }

    /// Switches to a new board size and starts a new game.
    #[instrument(skip(self))]
    pub fn change_size(&mut self, size: BoardSize) {
        self.board = Board::new(size);
        self.reset_game();
    }

    /// Switches the game mode and starts a new game.
    #[instrument(skip(self))]
    pub fn change_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset_game();
    }

    /// Zeroes the score tally.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores = ScoreTally::default();
        info!("Scores reset");
    }

    /// Places `player` at `index` and settles the status.
    ///
    /// Preconditions are checked by the caller.
    fn place(&mut self, index: usize, player: Player) {
        self.board.set(index, Cell::Occupied(player));

        if let Some(line) = check_winner(&self.board) {
            info!(winner = %line.player, line = ?line.indices, "Game won");
            self.status = GameStatus::Won(line.player);
            self.winning_line = Some(line.indices);
        } else if is_full(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.opponent();
        }
    }

    fn check_preconditions(&self, index: usize) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        match self.board.get(index) {
            None => Err(MoveError::OutOfBounds(index)),
            Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied(index)),
            Some(Cell::Empty) => Ok(()),
        }
    }
}

impl<R: Rng> GameEngine<R> {
    /// Creates an engine from an explicit configuration and random source.
    #[instrument(skip(config, rng), fields(size = %config.size, mode = %config.mode))]
    pub fn with_rng(config: &GameConfig, rng: R) -> Self {
        Self {
            board: Board::new(config.size),
            current_player: Player::X,
            mode: config.mode,
            status: GameStatus::InProgress,
            winning_line: None,
            scores: config.scores,
            rng,
        }
    }

    /// Plays the current player's mark at `index`.
    ///
    /// In [`GameMode::VsAi`], when the move leaves O to play, O's reply is
    /// chosen and applied before returning. The report covers both halves.
    ///
    /// # Errors
    ///
    /// Rejected moves leave the engine exactly as it was.
    #[instrument(skip(self), fields(player = %self.current_player, mode = %self.mode))]
    pub fn apply_move(&mut self, index: usize) -> Result<TurnReport, MoveError> {
        self.check_preconditions(index)?;

        let snapshot = (
            self.board.clone(),
            self.current_player,
            self.status,
            self.winning_line.clone(),
        );

        let player = self.current_player;
        self.place(index, player);
        let mut placements = vec![Placement { player, index }];
        let mut ai_reason = None;

        if self.mode == GameMode::VsAi
            && self.status == GameStatus::InProgress
            && self.current_player == Player::O
        {
            // A running game always has an empty cell.
            if let Some(choice) = ai::choose_move(&self.board, Player::O, &mut self.rng) {
                debug!(index = choice.index, reason = %choice.reason, "AI reply");
                self.place(choice.index, Player::O);
                placements.push(Placement {
                    player: Player::O,
                    index: choice.index,
                });
                ai_reason = Some(choice.reason);
            }
        }

        if let Err(violations) = EngineInvariants::check_all(&*self) {
            let description = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%description, "Move rejected by postcondition");
            (
                self.board,
                self.current_player,
                self.status,
                self.winning_line,
            ) = snapshot;
            return Err(MoveError::InvariantViolation(description));
        }

        self.scores.record(self.status);

        Ok(TurnReport::new(
            placements,
            ai_reason,
            self.status,
            self.winning_line.clone(),
        ))
    }

    /// The AI's pick for the current position, without playing it.
    ///
    /// Returns `None` when the game is over.
    #[instrument(skip(self))]
    pub fn suggest_move(&mut self) -> Option<(usize, MoveReason)> {
        if self.status.is_terminal() {
            return None;
        }
        ai::choose_move(&self.board, self.current_player, &mut self.rng)
            .map(|choice| (choice.index, choice.reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(mode: GameMode) -> GameEngine<StdRng> {
        let config = GameConfig {
            mode,
            ..GameConfig::default()
        };
        GameEngine::with_rng(&config, StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = engine(GameMode::TwoPlayer);
        assert_eq!(game.current_player(), Player::X);
        game.apply_move(0).unwrap();
        assert_eq!(game.current_player(), Player::O);
        game.apply_move(1).unwrap();
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut game = engine(GameMode::TwoPlayer);
        game.apply_move(4).unwrap();
        let before = game.board().clone();

        assert_eq!(game.apply_move(4), Err(MoveError::CellOccupied(4)));
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = engine(GameMode::TwoPlayer);
        assert_eq!(game.apply_move(9), Err(MoveError::OutOfBounds(9)));
    }

    #[test]
    fn test_win_records_line_and_score() {
        let mut game = engine(GameMode::TwoPlayer);
        for index in [0, 3, 1, 4] {
            game.apply_move(index).unwrap();
        }
        let report = game.apply_move(2).unwrap();

        assert_eq!(*report.status(), GameStatus::Won(Player::X));
        assert_eq!(game.winning_line(), Some(&[0, 1, 2][..]));
        assert_eq!(game.scores().x, 1);
        assert_eq!(game.apply_move(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_mixed_owner_board_is_rejected() {
        let config = GameConfig {
            size: BoardSize::new(4).unwrap(),
            ..GameConfig::default()
        };
        let mut game = GameEngine::with_rng(&config, StdRng::seed_from_u64(0));
        for index in [0, 1, 2, 5] {
            game.board.set(index, Cell::Occupied(Player::X));
        }
        for index in 12..16 {
            game.board.set(index, Cell::Occupied(Player::O));
        }
        let before = game.board().clone();

        let err = game.apply_move(3).unwrap_err();
        assert!(matches!(err, MoveError::InvariantViolation(_)));
        assert_eq!(game.board(), &before);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.scores(), &ScoreTally::default());
    }

    #[test]
    fn test_ai_replies_in_same_call() {
        let mut game = engine(GameMode::VsAi);
        let report = game.apply_move(0).unwrap();

        assert_eq!(report.placements().len(), 2);
        assert_eq!(report.placements()[1].player, Player::O);
        assert_eq!(*report.ai_reason(), Some(MoveReason::Random));
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.board().empty_cells().len(), 7);
    }

    #[test]
    fn test_suggest_move_does_not_play() {
        let mut game = engine(GameMode::TwoPlayer);
        game.apply_move(0).unwrap();
        game.apply_move(3).unwrap();
        game.apply_move(1).unwrap();

        // O to move and must block at 2.
        assert_eq!(game.suggest_move(), Some((2, MoveReason::Block)));
        assert!(game.board().is_empty(2));
    }
}
