//! Tests for sessions backed by the JSON record store.

use neon_tictactoe::{
    BOARD_SIZE_KEY, BoardSize, FeedbackEvent, GAME_MODE_KEY, GameConfig, GameMode, GameStatus,
    JsonFileStore, Player, Preferences, RecordingFeedback, SCORES_KEY, ScoreTally, Session,
    SettingsStore, THEME_KEY, Theme,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;

fn open(path: &std::path::Path) -> Session<JsonFileStore, RecordingFeedback> {
    Session::open_with_rng(
        JsonFileStore::new(path),
        RecordingFeedback::default(),
        StdRng::seed_from_u64(17),
    )
}

#[test]
fn test_scores_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");

    {
        let mut session = open(&path);
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        assert_eq!(session.engine().status(), GameStatus::Won(Player::X));
    }

    let session = open(&path);
    assert_eq!(session.engine().scores(), &ScoreTally { x: 1, o: 0, draws: 0 });
    assert_eq!(session.engine().status(), GameStatus::InProgress);
}

#[test]
fn test_settings_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");

    {
        let mut session = open(&path);
        session.change_size(BoardSize::new(4).unwrap());
        session.change_mode(GameMode::VsAi);
        session.change_theme(Theme::Cosmic);
    }

    let store = JsonFileStore::new(&path);
    assert_eq!(store.get(BOARD_SIZE_KEY).unwrap().as_deref(), Some("4"));
    assert_eq!(store.get(GAME_MODE_KEY).unwrap().as_deref(), Some("ai"));
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("cosmic"));

    let session = open(&path);
    assert_eq!(session.engine().size().get(), 4);
    assert_eq!(session.engine().mode(), GameMode::VsAi);
    assert_eq!(session.theme(), Theme::Cosmic);
}

#[test]
fn test_scores_record_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    let mut store = JsonFileStore::new(&path);
    store.set(SCORES_KEY, r#"{"x":2,"o":1,"draws":3}"#).unwrap();

    let mut session = open(&path);
    assert_eq!(session.engine().scores(), &ScoreTally { x: 2, o: 1, draws: 3 });

    // Draw: X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        session.play(index).unwrap();
    }
    let saved = JsonFileStore::new(&path).get(SCORES_KEY).unwrap().unwrap();
    let tally: ScoreTally = serde_json::from_str(&saved).unwrap();
    assert_eq!(tally, ScoreTally { x: 2, o: 1, draws: 4 });
}

#[test]
fn test_invalid_records_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    std::fs::write(
        &path,
        r#"{"boardSize":"99","gameMode":"chess","theme":"retro","scores":"not json"}"#,
    )
    .unwrap();

    let session = open(&path);
    assert_eq!(session.engine().size(), BoardSize::default());
    assert_eq!(session.engine().mode(), GameMode::TwoPlayer);
    assert_eq!(session.theme(), Theme::Retro);
    assert_eq!(session.engine().scores(), &ScoreTally::default());
}

#[test]
fn test_corrupt_store_file_recovers_on_next_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    std::fs::write(&path, "not json").unwrap();

    {
        let mut session = open(&path);
        assert_eq!(session.engine().scores(), &ScoreTally::default());
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        session.change_theme(Theme::Retro);
    }

    let session = open(&path);
    assert_eq!(session.engine().scores(), &ScoreTally { x: 1, o: 0, draws: 0 });
    assert_eq!(session.theme(), Theme::Retro);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("records.json.bak")).unwrap(),
        "not json"
    );
}

#[test]
fn test_config_file_seeds_new_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.json");
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(config_file, "size = 5\nmode = \"ai\"\ntheme = \"retro\"").unwrap();

    let config = GameConfig::from_file(config_file.path()).unwrap();
    let session = Session::with_config(
        config,
        JsonFileStore::new(&path),
        RecordingFeedback::default(),
        StdRng::seed_from_u64(0),
    );
    assert_eq!(session.engine().size().get(), 5);

    let loaded = Preferences::new(JsonFileStore::new(&path)).load();
    assert_eq!(loaded, config);
}

#[test]
fn test_ai_turn_feedback_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(&dir.path().join("records.json"));
    session.change_mode(GameMode::VsAi);
    session.play(4).unwrap();

    let tones: Vec<f64> = session
        .feedback()
        .events
        .iter()
        .filter_map(|e| match e {
            FeedbackEvent::Tone(tone) => Some(tone.frequency_hz),
            FeedbackEvent::Confetti(_) => None,
        })
        .collect();
    assert_eq!(tones, vec![440.0, 660.0]);
}
