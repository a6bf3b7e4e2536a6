//! The high-score contract and its in-memory implementation.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::GameKind;

/// Best score per game. Missing entries read as 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    scores: FxHashMap<GameKind, u32>,
}

impl ScoreRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored score for `kind`, or 0.
    #[must_use]
    pub fn get(&self, kind: GameKind) -> u32 {
        self.scores.get(&kind).copied().unwrap_or(0)
    }

    /// Store `score` if it beats the current entry. Returns the entry after
    /// the update.
    pub fn raise(&mut self, kind: GameKind, score: u32) -> u32 {
        let entry = self.scores.entry(kind).or_insert(0);
        *entry = (*entry).max(score);
        *entry
    }

    /// Reset every game to 0.
    pub fn clear(&mut self) {
        self.scores.clear();
    }
}

/// Persists one high score per game.
///
/// Implementations must never fail a caller: if persistence breaks they keep
/// working in memory, so gameplay is unaffected.
pub trait ScoreStore: Send + Sync + std::fmt::Debug {
    /// Stored score for `kind`, 0 if never recorded.
    fn high_score(&self, kind: GameKind) -> u32;

    /// Store `score` only if it beats the stored value. Returns the stored
    /// value afterwards.
    fn set_high_score_if_greater(&self, kind: GameKind, score: u32) -> u32;

    /// Reset every game to 0.
    fn clear_all(&self);
}

/// Score store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    record: Mutex<ScoreRecord>,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record.
    #[must_use]
    pub fn with_record(record: ScoreRecord) -> Self {
        Self {
            record: Mutex::new(record),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ScoreRecord> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ScoreStore for MemoryScoreStore {
    fn high_score(&self, kind: GameKind) -> u32 {
        self.lock().get(kind)
    }

    fn set_high_score_if_greater(&self, kind: GameKind, score: u32) -> u32 {
        self.lock().raise(kind, score)
    }

    fn clear_all(&self) {
        self.lock().clear();
    }
}
