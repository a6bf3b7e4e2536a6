//! File-backed score store.
//!
//! The whole `ScoreRecord` is rewritten as bincode after every change that
//! raises or clears a score. Writes go to a sibling temp file first and are
//! renamed into place.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use super::store::{ScoreRecord, ScoreStore};
use crate::core::{ArcadeError, GameKind};

/// Score store persisted to a single file.
///
/// A missing file starts empty. An unreadable or corrupt file is logged and
/// treated as empty; failed writes are logged and the scores stay in memory.
#[derive(Debug)]
pub struct FileScoreStore {
    path: PathBuf,
    record: Mutex<ScoreRecord>,
}

impl FileScoreStore {
    /// Open the store at `path`, degrading to an empty record on errors.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let record = if path.exists() {
            load(&path).unwrap_or_else(|e| {
                warn!("Ignoring unreadable score file {}: {}", path.display(), e);
                ScoreRecord::default()
            })
        } else {
            debug!("No score file at {}, starting empty", path.display());
            ScoreRecord::default()
        };

        Self {
            path,
            record: Mutex::new(record),
        }
    }

    /// Location of the score file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current record now.
    pub fn flush(&self) -> Result<(), ArcadeError> {
        save(&self.path, &self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, ScoreRecord> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, record: &ScoreRecord) {
        if let Err(e) = save(&self.path, record) {
            warn!(
                "High scores will not survive restart; write to {} failed: {}",
                self.path.display(),
                e
            );
        }
    }
}

impl ScoreStore for FileScoreStore {
    fn high_score(&self, kind: GameKind) -> u32 {
        self.lock().get(kind)
    }

    fn set_high_score_if_greater(&self, kind: GameKind, score: u32) -> u32 {
        let mut record = self.lock();
        let before = record.get(kind);
        let after = record.raise(kind, score);
        if after != before {
            self.persist(&record);
        }
        after
    }

    fn clear_all(&self) {
        let mut record = self.lock();
        record.clear();
        self.persist(&record);
    }
}

/// Read a record from `path`.
pub fn load(path: &Path) -> Result<ScoreRecord, ArcadeError> {
    let bytes = std::fs::read(path)?;
    Ok(bincode::deserialize(&bytes)?)
}

/// Write `record` to `path`, creating parent directories.
pub fn save(path: &Path, record: &ScoreRecord) -> Result<(), ArcadeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let bytes = bincode::serialize(record)?;
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, bytes)?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        if let Err(cleanup) = std::fs::remove_file(&tmp) {
            debug!("Could not remove {}: {}", tmp.display(), cleanup);
        }
        return Err(e.into());
    }
    Ok(())
}
