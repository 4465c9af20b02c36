//! Property tests: random legal play never breaks the engine's invariants.

use neon_tictactoe::{
    BoardSize, EngineInvariants, GameConfig, GameEngine, GameMode, GameStatus, InvariantSet,
    MAX_BOARD_SIZE, MIN_BOARD_SIZE, MoveError, is_draw, winning_lines,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn engine(size: usize, ai: bool, seed: u64) -> GameEngine<StdRng> {
    let config = GameConfig {
        size: BoardSize::new(size).unwrap(),
        mode: if ai { GameMode::VsAi } else { GameMode::TwoPlayer },
        ..GameConfig::default()
    };
    GameEngine::with_rng(&config, StdRng::seed_from_u64(seed))
}

proptest! {
    #[test]
    fn random_play_keeps_invariants(
        size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE,
        ai in any::<bool>(),
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..120),
    ) {
        let mut game = engine(size, ai, seed);

        for pick in picks {
            if game.status().is_terminal() {
                prop_assert_eq!(game.apply_move(0), Err(MoveError::GameOver));
                break;
            }
            let empty = game.board().empty_cells();
            let index = empty[pick.index(empty.len())];
            let before = game.board().count(game.current_player());

            let report = game.apply_move(index).unwrap();
            prop_assert!(EngineInvariants::check_all(&game).is_ok());
            prop_assert!(!report.placements().is_empty() && report.placements().len() <= 2);
            prop_assert_eq!(*report.status(), game.status());
            prop_assert!(game.board().count(report.placements()[0].player) > before);
        }

        match game.status() {
            GameStatus::Won(player) => {
                let lines = winning_lines(game.board());
                prop_assert!(!lines.is_empty());
                prop_assert!(lines.iter().all(|l| l.player == player));
                prop_assert_eq!(game.scores().wins(player), 1);
            }
            GameStatus::Draw => {
                prop_assert!(is_draw(game.board()));
                prop_assert_eq!(game.scores().draws, 1);
            }
            GameStatus::InProgress => {
                prop_assert_eq!(game.scores().games(), 0);
            }
        }
    }

    #[test]
    fn occupied_cells_are_always_rejected(
        seed in any::<u64>(),
        moves in prop::collection::vec(0usize..9, 1..9),
    ) {
        let mut game = engine(3, false, seed);
        for index in moves {
            let board = game.board().clone();
            let player = game.current_player();
            let status = game.status();
            if game.apply_move(index).is_err() {
                prop_assert_eq!(game.board(), &board);
                prop_assert_eq!(game.current_player(), player);
                prop_assert_eq!(game.status(), status);
            }
        }
    }
}
