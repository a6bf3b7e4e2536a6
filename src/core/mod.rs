//! Core types shared by every game: RNG, directions, game tags,
//! configuration, errors, and the `Game` trait.
//!
//! Nothing here knows the rules of a particular game.

pub mod config;
pub mod direction;
pub mod error;
pub mod game;
pub mod kind;
pub mod rng;

pub use config::{
    load_config, load_from_path, ArcadeConfig, Board2048Config, MemoryConfig, ScoresConfig,
    SnakeConfig, WallPolicy,
};
pub use direction::Direction;
pub use error::ArcadeError;
pub use game::Game;
pub use kind::{GameKind, UnknownGameKey};
pub use rng::GameRng;
