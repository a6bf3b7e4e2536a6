//! Score store integration tests.

use std::sync::Arc;
use std::thread;

use pocket_arcade::core::{GameKind, ScoresConfig};
use pocket_arcade::scores::{self, open_store, FileScoreStore, MemoryScoreStore, ScoreRecord, ScoreStore};

fn check_contract(store: &dyn ScoreStore) {
    assert_eq!(store.set_high_score_if_greater(GameKind::Board2048, 50), 50);
    assert_eq!(store.set_high_score_if_greater(GameKind::Board2048, 30), 50);
    assert_eq!(store.high_score(GameKind::Board2048), 50);

    store.set_high_score_if_greater(GameKind::Snake, 10);
    store.set_high_score_if_greater(GameKind::Memory, 20);
    store.clear_all();
    for kind in GameKind::ALL {
        assert_eq!(store.high_score(kind), 0);
    }
}

#[test]
fn test_memory_store_contract() {
    check_contract(&MemoryScoreStore::new());
}

#[test]
fn test_file_store_contract() {
    let dir = tempfile::tempdir().unwrap();
    check_contract(&FileScoreStore::open(dir.path().join("scores.bin")));
}

#[test]
fn test_keys_are_independent() {
    let store = MemoryScoreStore::new();
    store.set_high_score_if_greater(GameKind::Snake, 100);
    assert_eq!(store.high_score(GameKind::Board2048), 0);
    assert_eq!(store.high_score(GameKind::Memory), 0);
}

#[test]
fn test_open_store_follows_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.bin");
    let config = ScoresConfig {
        path: Some(path.clone()),
    };

    open_store(&config).set_high_score_if_greater(GameKind::Memory, 70);
    assert!(path.exists());
    assert_eq!(open_store(&config).high_score(GameKind::Memory), 70);

    let in_memory = open_store(&ScoresConfig::default());
    assert_eq!(in_memory.high_score(GameKind::Memory), 0);
}

#[test]
fn test_save_and_load_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("record.bin");
    let mut record = ScoreRecord::new();
    record.raise(GameKind::Snake, 240);

    scores::save(&path, &record).unwrap();
    assert_eq!(scores::load(&path).unwrap(), record);

    let store = MemoryScoreStore::with_record(record);
    assert_eq!(store.high_score(GameKind::Snake), 240);
}

#[test]
fn test_concurrent_raises_keep_maximum() {
    let store = Arc::new(MemoryScoreStore::new());
    let handles: Vec<_> = (0..8u32)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..100 {
                    store.set_high_score_if_greater(GameKind::Board2048, t * 100 + i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.high_score(GameKind::Board2048), 799);
}

#[test]
fn test_game_keys() {
    assert_eq!(GameKind::Board2048.key(), "game_2048");
    assert_eq!(GameKind::Snake.key(), "game_snake");
    assert_eq!(GameKind::Memory.key(), "game_memory");
    for kind in GameKind::ALL {
        assert_eq!(kind.key().parse::<GameKind>().unwrap(), kind);
    }
    assert!("game_tetris".parse::<GameKind>().is_err());
}
