//! Error type for the I/O edge of the crate.
//!
//! Gameplay never fails; only loading configuration and reading or writing
//! score files can. Those paths return `ArcadeError`, which records where it
//! was raised.

use derive_more::{Display, Error};

/// Error with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", message, file, line)]
pub struct ArcadeError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ArcadeError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ArcadeError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<toml::de::Error> for ArcadeError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Config parse error: {}", err))
    }
}

impl From<bincode::Error> for ArcadeError {
    #[track_caller]
    fn from(err: bincode::Error) -> Self {
        Self::new(format!("Score file encoding error: {}", err))
    }
}
