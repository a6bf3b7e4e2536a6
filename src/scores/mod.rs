//! High-score persistence.
//!
//! Engines never touch storage. Sessions receive a shared
//! `Arc<dyn ScoreStore>` and push every new best score into it.
//!
//! ```
//! use pocket_arcade::core::GameKind;
//! use pocket_arcade::scores::{MemoryScoreStore, ScoreStore};
//!
//! let store = MemoryScoreStore::new();
//! store.set_high_score_if_greater(GameKind::Snake, 50);
//! store.set_high_score_if_greater(GameKind::Snake, 30);
//! assert_eq!(store.high_score(GameKind::Snake), 50);
//! ```

mod file;
mod store;

use std::sync::Arc;

pub use file::{load, save, FileScoreStore};
pub use store::{MemoryScoreStore, ScoreRecord, ScoreStore};

use crate::core::ScoresConfig;

/// Shared handle passed to every session.
pub type SharedScoreStore = Arc<dyn ScoreStore>;

/// Build the store described by `config`: file-backed when a path is set,
/// in-memory otherwise.
#[must_use]
pub fn open_store(config: &ScoresConfig) -> SharedScoreStore {
    match &config.path {
        Some(path) => Arc::new(FileScoreStore::open(path)),
        None => Arc::new(MemoryScoreStore::new()),
    }
}
