//! Top-level wiring: configuration plus the shared score store.

use tracing::{info, instrument};

use crate::core::{load_config, ArcadeConfig, GameKind};
use crate::scores::{open_store, ScoreStore, SharedScoreStore};
use crate::session::AnySession;

/// Entry point for a front end.
///
/// Owns the configuration and the one score store every session shares.
#[derive(Debug, Clone)]
pub struct Arcade {
    config: ArcadeConfig,
    store: SharedScoreStore,
}

impl Arcade {
    /// Load configuration from the environment and default search paths.
    #[must_use]
    pub fn load() -> Self {
        Self::from_config(load_config())
    }

    /// Build the score store described by `config`.
    #[must_use]
    pub fn from_config(config: ArcadeConfig) -> Self {
        let store = open_store(&config.scores);
        Self { config, store }
    }

    /// Use an existing store instead of the configured one.
    #[must_use]
    pub fn with_store(config: ArcadeConfig, store: SharedScoreStore) -> Self {
        Self { config, store }
    }

    #[must_use]
    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &SharedScoreStore {
        &self.store
    }

    /// Start a new session of `kind`.
    ///
    /// Panics if the config section for `kind` is invalid; configs from
    /// [`Arcade::load`] are already validated.
    #[instrument(skip(self))]
    pub fn start(&self, kind: GameKind, seed: u64) -> AnySession {
        info!(game = %kind, "starting session");
        AnySession::new(kind, &self.config, self.store.clone(), seed)
    }

    /// Best score per game, in menu order.
    #[must_use]
    pub fn high_scores(&self) -> Vec<(GameKind, u32)> {
        GameKind::ALL
            .into_iter()
            .map(|kind| (kind, self.store.high_score(kind)))
            .collect()
    }

    /// Reset every game's high score.
    pub fn clear_high_scores(&self) {
        info!("clearing all high scores");
        self.store.clear_all();
    }
}
