//! Session, arcade and runtime integration tests.
//!
//! These tests wire sessions to real score stores and drive the timed
//! behaviours under paused tokio time.

use std::sync::Arc;
use std::time::Duration;

use pocket_arcade::core::{ArcadeConfig, Direction, GameKind, MemoryConfig, SnakeConfig};
use pocket_arcade::runtime::{flip_and_schedule, share, spawn_snake, LoopExit};
use pocket_arcade::scores::{FileScoreStore, MemoryScoreStore, ScoreStore};
use pocket_arcade::session::{AnySession, FlipOutcome, Session};
use pocket_arcade::{Arcade, Memory, Snake};

fn store() -> Arc<MemoryScoreStore> {
    Arc::new(MemoryScoreStore::new())
}

// =============================================================================
// Gating
// =============================================================================

#[test]
fn test_paused_session_rejects_everything() {
    let config = ArcadeConfig::default();
    for kind in GameKind::ALL {
        let mut session = AnySession::new(kind, &config, store(), 17);
        session.pause();

        let accepted = match &mut session {
            AnySession::Board2048(s) => Direction::ALL.into_iter().any(|d| s.apply_move(d)),
            AnySession::Snake(s) => s.tick() || s.set_direction(Direction::Up),
            AnySession::Memory(s) => s.flip(0) != FlipOutcome::Rejected,
        };
        assert!(!accepted, "{kind} accepted input while paused");
        assert_eq!(session.score(), 0);
    }
}

#[test]
fn test_finished_snake_rejects_ticks() {
    let config = SnakeConfig::default().with_board_size(3);
    let mut session = Session::<Snake>::new(config, store(), 5);

    while session.tick() {}
    assert!(session.is_over());
    assert!(!session.set_direction(Direction::Up));
    assert!(!session.tick());

    session.restart();
    assert!(!session.is_over());
    assert!(session.tick());
}

// =============================================================================
// High Scores
// =============================================================================

#[test]
fn test_memory_game_records_best_score() {
    let store = store();
    let mut session = Session::<Memory>::new(MemoryConfig::default().with_pair_count(2), store.clone(), 3);

    for i in 0..4 {
        let value = session.state().cards()[i].value;
        if session.state().cards()[i].is_matched {
            continue;
        }
        let j = (0..4)
            .find(|&j| j != i && session.state().cards()[j].value == value)
            .unwrap();
        session.flip(i);
        session.flip(j);
        session.resolve();
    }

    assert!(session.is_over());
    assert_eq!(session.score(), 20);
    assert_eq!(store.high_score(GameKind::Memory), 20);
    assert_eq!(store.high_score(GameKind::Snake), 0);
}

#[test]
fn test_file_store_survives_arcade_reload() {
    let dir = tempfile::tempdir().unwrap();
    let config = ArcadeConfig::default().with_scores_path(dir.path().join("scores.bin"));

    {
        let arcade = Arcade::from_config(config.clone());
        let mut session = arcade.start(GameKind::Snake, 2);
        let snake = session.as_snake().unwrap();
        for _ in 0..200 {
            if snake.is_over() || snake.score() > 0 {
                break;
            }
            let head = snake.state().head();
            let food = snake.state().food().unwrap();
            let dir = if food.x > head.x {
                Direction::Right
            } else if food.x < head.x {
                Direction::Left
            } else if food.y > head.y {
                Direction::Down
            } else {
                Direction::Up
            };
            snake.set_direction(dir);
            snake.tick();
        }
    }

    let reloaded = Arcade::from_config(config);
    let best = reloaded.store().high_score(GameKind::Snake);
    let session = reloaded.start(GameKind::Snake, 9);
    assert_eq!(session.high_score(), best);
    assert_eq!(
        FileScoreStore::open(reloaded.config().scores.path.clone().unwrap()).high_score(GameKind::Snake),
        best
    );
}

#[test]
fn test_stores_are_shared_across_sessions() {
    let shared = store();
    let arcade = Arcade::with_store(ArcadeConfig::default(), shared.clone());
    let before = arcade.start(GameKind::Board2048, 1);

    shared.set_high_score_if_greater(GameKind::Board2048, 64);
    let after = arcade.start(GameKind::Board2048, 1);

    assert_eq!(before.high_score(), 0);
    assert_eq!(after.high_score(), 64);
}

// =============================================================================
// Runtime
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_snake_loop_runs_to_wall() {
    let config = SnakeConfig::default().with_board_size(5);
    let session = share(Session::<Snake>::new(config, store(), 8));

    let handle = spawn_snake(session.clone()).await;
    let exit = handle.await.unwrap();
    assert_eq!(exit, LoopExit::GameOver);
    assert!(session.lock().await.is_over());
}

#[tokio::test(start_paused = true)]
async fn test_restart_hands_over_to_new_loop() {
    let session = share(Session::<Snake>::new(SnakeConfig::default(), store(), 8));
    let old = spawn_snake(session.clone()).await;

    tokio::time::sleep(Duration::from_millis(400)).await;
    session.lock().await.restart();
    assert_eq!(old.await.unwrap(), LoopExit::Restarted);

    let start = session.lock().await.state().head();
    let new = spawn_snake(session.clone()).await;
    tokio::time::sleep(Duration::from_millis(160)).await;
    assert_ne!(session.lock().await.state().head(), start);
    new.abort();
}

#[tokio::test(start_paused = true)]
async fn test_deferred_resolve_scores_match() {
    let shared = store();
    let session = share(Session::<Memory>::new(MemoryConfig::default(), shared.clone(), 6));
    let (a, b) = {
        let guard = session.lock().await;
        let cards = guard.state().cards();
        let b = (1..cards.len()).find(|&i| cards[i].value == cards[0].value).unwrap();
        (0, b)
    };

    assert!(flip_and_schedule(&session, a).await.is_none());
    let pending = flip_and_schedule(&session, b).await.unwrap();
    assert!(flip_and_schedule(&session, 5).await.is_none());

    assert!(pending.await.unwrap());
    assert_eq!(session.lock().await.score(), 10);
    assert_eq!(shared.high_score(GameKind::Memory), 10);
}
