//! Game configuration types and loading.
//!
//! Each game is configured by its own struct:
//! - `Board2048Config`: board size and win threshold
//! - `SnakeConfig`: grid size, wall policy, tick timing
//! - `MemoryConfig`: number of pairs and the resolution delay
//!
//! `ArcadeConfig` bundles them with the score-file location. Every field has
//! a default matching the shipped games, so a config file only needs the
//! values it changes:
//!
//! ```toml
//! [snake]
//! board_size = 20
//! wall_policy = "wrap"
//!
//! [scores]
//! path = "scores.bin"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::ArcadeError;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ARCADE_CONFIG";

/// Environment variable overriding `scores.path`.
pub const SCORES_PATH_ENV: &str = "ARCADE_SCORES_PATH";

/// Environment variable overriding `snake.wall_policy` (`bounded` or `wrap`).
pub const SNAKE_WALLS_ENV: &str = "ARCADE_SNAKE_WALLS";

/// Locations searched for a config file when `ARCADE_CONFIG` is unset.
pub const CONFIG_SEARCH_PATHS: &[&str] = &["arcade.toml", "../arcade.toml"];

/// 2048 configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Board2048Config {
    /// Side length of the square board.
    pub size: usize,

    /// Reaching a tile of at least this value wins the game.
    pub win_value: u32,
}

impl Default for Board2048Config {
    fn default() -> Self {
        Self {
            size: 6,
            win_value: 128,
        }
    }
}

impl Board2048Config {
    /// Set the board side length.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        assert!(size >= 2, "2048 board must be at least 2x2");
        self.size = size;
        self
    }

    /// Set the winning tile value.
    #[must_use]
    pub fn with_win_value(mut self, win_value: u32) -> Self {
        assert!(
            win_value >= 4 && win_value.is_power_of_two(),
            "Win value must be a power of two >= 4"
        );
        self.win_value = win_value;
        self
    }

    /// Check values that builders assert but struct literals can skip.
    pub fn validate(&self) -> Result<(), ArcadeError> {
        if self.size < 2 {
            return Err(ArcadeError::new("board_2048.size must be at least 2"));
        }
        if self.win_value < 4 || !self.win_value.is_power_of_two() {
            return Err(ArcadeError::new(
                "board_2048.win_value must be a power of two >= 4",
            ));
        }
        Ok(())
    }
}

/// What happens when the snake's head leaves the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallPolicy {
    /// Leaving the grid ends the game.
    #[default]
    Bounded,
    /// Coordinates wrap around modulo the board size.
    Wrap,
}

impl std::str::FromStr for WallPolicy {
    type Err = ArcadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bounded" => Ok(Self::Bounded),
            "wrap" => Ok(Self::Wrap),
            other => Err(ArcadeError::new(format!("unknown wall policy: {}", other))),
        }
    }
}

/// Snake configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Side length of the square grid.
    pub board_size: usize,

    /// Wall behaviour. One policy per game, never mixed.
    pub wall_policy: WallPolicy,

    /// Tick interval at the start of a game, in milliseconds.
    pub initial_delay_ms: u64,

    /// Fastest allowed tick interval, in milliseconds.
    pub min_delay_ms: u64,

    /// Tick interval reduction per food eaten, in milliseconds.
    pub speedup_ms: u64,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            board_size: 15,
            wall_policy: WallPolicy::Bounded,
            initial_delay_ms: 150,
            min_delay_ms: 50,
            speedup_ms: 10,
        }
    }
}

impl SnakeConfig {
    /// Set the grid side length.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        assert!(size >= 2, "Snake grid must be at least 2x2");
        self.board_size = size;
        self
    }

    /// Set the wall policy.
    #[must_use]
    pub fn with_wall_policy(mut self, policy: WallPolicy) -> Self {
        self.wall_policy = policy;
        self
    }

    /// Set the tick timing: starting interval, floor, and per-food speed-up.
    #[must_use]
    pub fn with_timing(mut self, initial: Duration, min: Duration, speedup: Duration) -> Self {
        assert!(!min.is_zero(), "Minimum delay must be positive");
        assert!(min <= initial, "Minimum delay must not exceed the initial delay");
        self.initial_delay_ms = initial.as_millis() as u64;
        self.min_delay_ms = min.as_millis() as u64;
        self.speedup_ms = speedup.as_millis() as u64;
        self
    }

    /// Tick interval at the start of a game.
    #[must_use]
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// Fastest allowed tick interval.
    #[must_use]
    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    /// Interval after `foods_eaten` foods.
    #[must_use]
    pub fn delay_after(&self, foods_eaten: u32) -> Duration {
        let reduction = self.speedup_ms.saturating_mul(u64::from(foods_eaten));
        let delay = self.initial_delay_ms.saturating_sub(reduction);
        Duration::from_millis(delay.max(self.min_delay_ms))
    }

    /// Check values that builders assert but struct literals can skip.
    pub fn validate(&self) -> Result<(), ArcadeError> {
        if self.board_size < 2 {
            return Err(ArcadeError::new("snake.board_size must be at least 2"));
        }
        if self.min_delay_ms == 0 || self.min_delay_ms > self.initial_delay_ms {
            return Err(ArcadeError::new(
                "snake.min_delay_ms must be positive and <= snake.initial_delay_ms",
            ));
        }
        Ok(())
    }
}

/// Memory-match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Number of distinct card values; the deck holds twice as many cards.
    pub pair_count: usize,

    /// How long a mismatched or matched pair stays face up before
    /// resolution, in milliseconds.
    pub match_delay_ms: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            pair_count: 8,
            match_delay_ms: 500,
        }
    }
}

impl MemoryConfig {
    /// Set the number of pairs.
    #[must_use]
    pub fn with_pair_count(mut self, pairs: usize) -> Self {
        assert!(pairs >= 1, "Need at least one pair");
        self.pair_count = pairs;
        self
    }

    /// Set the resolution delay.
    #[must_use]
    pub fn with_match_delay(mut self, delay: Duration) -> Self {
        self.match_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Resolution delay.
    #[must_use]
    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    /// Check values that builders assert but struct literals can skip.
    pub fn validate(&self) -> Result<(), ArcadeError> {
        if self.pair_count == 0 {
            return Err(ArcadeError::new("memory.pair_count must be at least 1"));
        }
        Ok(())
    }
}

/// Where high scores are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoresConfig {
    /// Score file. `None` keeps scores in memory only.
    pub path: Option<PathBuf>,
}

/// Complete configuration for the collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub board_2048: Board2048Config,
    pub snake: SnakeConfig,
    pub memory: MemoryConfig,
    pub scores: ScoresConfig,
}

impl ArcadeConfig {
    /// Replace the 2048 configuration.
    #[must_use]
    pub fn with_board_2048(mut self, config: Board2048Config) -> Self {
        self.board_2048 = config;
        self
    }

    /// Replace the snake configuration.
    #[must_use]
    pub fn with_snake(mut self, config: SnakeConfig) -> Self {
        self.snake = config;
        self
    }

    /// Replace the memory configuration.
    #[must_use]
    pub fn with_memory(mut self, config: MemoryConfig) -> Self {
        self.memory = config;
        self
    }

    /// Persist scores to the given file.
    #[must_use]
    pub fn with_scores_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scores.path = Some(path.into());
        self
    }

    /// Check the values a config file could have gotten wrong.
    pub fn validate(&self) -> Result<(), ArcadeError> {
        self.board_2048.validate()?;
        self.snake.validate()?;
        self.memory.validate()
    }
}

/// Load configuration from `ARCADE_CONFIG` or the default search paths.
///
/// Never fails: a missing or broken file falls back to defaults with a
/// warning. Environment overrides are applied last.
pub fn load_config() -> ArcadeConfig {
    let lookup = |key: &str| std::env::var(key).ok();

    if let Some(path) = lookup(CONFIG_ENV).map(PathBuf::from) {
        if path.exists() {
            info!("Loading config from {}: {}", CONFIG_ENV, path.display());
            return apply_overrides(load_or_default(&path), lookup);
        }
        warn!(
            "{}={} not found, searching defaults",
            CONFIG_ENV,
            path.display()
        );
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return apply_overrides(load_or_default(path), lookup);
        }
    }

    debug!("No arcade.toml found, using built-in defaults");
    apply_overrides(ArcadeConfig::default(), lookup)
}

/// Load and validate configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<ArcadeConfig, ArcadeError> {
    let content = std::fs::read_to_string(path)?;
    let config: ArcadeConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

fn load_or_default(path: &Path) -> ArcadeConfig {
    load_from_path(path).unwrap_or_else(|e| {
        warn!("Failed to load {}: {}, using defaults", path.display(), e);
        ArcadeConfig::default()
    })
}

/// Apply environment-style overrides through `lookup`.
pub fn apply_overrides(
    mut config: ArcadeConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ArcadeConfig {
    if let Some(path) = lookup(SCORES_PATH_ENV) {
        config.scores.path = Some(PathBuf::from(path));
    }

    if let Some(walls) = lookup(SNAKE_WALLS_ENV) {
        match walls.parse::<WallPolicy>() {
            Ok(policy) => config.snake.wall_policy = policy,
            Err(e) => warn!("Ignoring {}: {}", SNAKE_WALLS_ENV, e),
        }
    }

    config
}
