//! Persistence tests: durable storage, recovery, and round-trip properties.

use std::fs;
use std::path::PathBuf;

use tabletalk::core::{GameState, StateUpdate};
use tabletalk::store::{FileStorage, GameStore, MemoryStorage, GAME_STATE_KEY};

fn temp_dir(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tabletalk-{label}-{}", std::process::id()))
}

#[test]
fn test_state_survives_store_recreation() {
    let dir = temp_dir("survive");
    let _ = fs::remove_dir_all(&dir);

    {
        let mut store = GameStore::new(FileStorage::new(&dir));
        store.set_players("Ana", "Bruno");
        store.record_answer();
        store.switch_turn();
        store.add_user_question("¿Qué te gustaría aprender juntos?");
    }

    let store = GameStore::new(FileStorage::new(&dir));
    let state = store.load();
    assert!(state.game_started);
    assert_eq!(state.questions_answered, 1);
    assert_eq!(state.current_player_index, 1);
    assert_eq!(store.current_player().unwrap().name, "Bruno");
    assert_eq!(state.user_questions.len(), 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupt_file_recovers_to_default() {
    let dir = temp_dir("corrupt");
    let _ = fs::remove_dir_all(&dir);

    {
        let mut store = GameStore::new(FileStorage::new(&dir));
        store.set_players("Ana", "Bruno");
    }

    fs::write(dir.join(format!("{GAME_STATE_KEY}.json")), "][ not json").unwrap();

    let store = GameStore::new(FileStorage::new(&dir));
    assert_eq!(store.load(), GameState::default());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_reset_equals_never_initialized() {
    let dir = temp_dir("reset");
    let _ = fs::remove_dir_all(&dir);

    let mut store = GameStore::new(FileStorage::new(&dir));
    store.set_players("Ana", "Bruno");
    store.record_answer();
    store.reset();

    // Same observable state as a store over a directory that never existed
    let fresh = GameStore::new(FileStorage::new(temp_dir("reset-fresh")));
    assert_eq!(store.load(), fresh.load());
    assert_eq!(store.load(), GameState::default());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_save_load_is_idempotent() {
    let mut store = GameStore::new(MemoryStorage::new());
    store.set_players("Ana", "Bruno");
    store.record_answer();

    let loaded = store.load();
    store.save(
        StateUpdate::new()
            .with_players(loaded.players.clone())
            .with_current_player_index(loaded.current_player_index)
            .with_questions_answered(loaded.questions_answered)
            .with_current_reward_index(loaded.current_reward_index)
            .with_game_started(loaded.game_started)
            .with_user_questions(loaded.user_questions.clone()),
    );

    assert_eq!(store.load(), loaded);
}

#[test]
fn test_concurrent_reader_sees_completed_save() {
    // Two stores over the same directory model a reader observing a writer
    let dir = temp_dir("reader");
    let _ = fs::remove_dir_all(&dir);

    let mut writer = GameStore::new(FileStorage::new(&dir));
    let reader = GameStore::new(FileStorage::new(&dir));

    writer.set_players("Ana", "Bruno");
    assert!(reader.load().game_started);

    writer.record_answer();
    assert_eq!(reader.load().questions_answered, 1);

    let _ = fs::remove_dir_all(&dir);
}
