//! The closed set of games in the collection.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tag identifying one of the three games.
///
/// Doubles as the high-score key: each kind owns exactly one stored score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameKind {
    Board2048,
    Snake,
    Memory,
}

impl GameKind {
    /// Every game kind, in menu order.
    pub const ALL: [GameKind; 3] = [Self::Board2048, Self::Snake, Self::Memory];

    /// Stable string key used by score stores.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Board2048 => "game_2048",
            Self::Snake => "game_snake",
            Self::Memory => "game_memory",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string names no known game.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown game key: {key}")]
pub struct UnknownGameKey {
    pub key: String,
}

impl FromStr for GameKind {
    type Err = UnknownGameKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| UnknownGameKey { key: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for kind in GameKind::ALL {
            assert_eq!(kind.key().parse::<GameKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = "game_tetris".parse::<GameKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown game key: game_tetris");
    }
}
