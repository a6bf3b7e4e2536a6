//! # pocket-arcade
//!
//! Game-state core for a casual game collection: 2048, Snake and
//! Memory-match.
//!
//! ## Design Principles
//!
//! 1. **Pure Engines**: Every engine operation takes `&self` and returns a
//!    new state. Randomness travels inside the state as a `GameRng`, so a
//!    transition is a deterministic function of the prior state and input.
//!
//! 2. **Silent Rejection**: Invalid input (reversing the snake, flipping a
//!    matched card, a move that changes nothing) returns the state unchanged.
//!    Only I/O at the edges can fail.
//!
//! 3. **Injected Persistence**: Engines never touch storage. Sessions push
//!    new best scores through a shared `ScoreStore`.
//!
//! ## Architecture
//!
//! - **Sessions** wrap an engine with pause, restart and a generation
//!   counter. Deferred callbacks carry a `Ticket` and are ignored after a
//!   restart.
//!
//! - **Runtime** drives the two timed behaviours on tokio: the Snake tick
//!   loop and the delayed Memory resolve.
//!
//! ## Modules
//!
//! - `core`: RNG, directions, game tags, configuration, errors, `Game` trait
//! - `games`: the 2048, Snake and Memory engines
//! - `scores`: high-score contract with in-memory and file-backed stores
//! - `session`: `Session<G>`, `AnySession`, `Ticket`
//! - `runtime`: async tick loop and deferred resolve
//! - `arcade`: configuration plus shared store, the front end's entry point

pub mod arcade;
pub mod core;
pub mod games;
pub mod runtime;
pub mod scores;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ArcadeConfig, ArcadeError, Board2048Config, Direction, Game, GameKind, GameRng,
    MemoryConfig, SnakeConfig, WallPolicy,
};

pub use crate::games::{Board2048, Board2048State, Memory, MemoryState, Snake, SnakeState};

pub use crate::scores::{FileScoreStore, MemoryScoreStore, ScoreStore, SharedScoreStore};

pub use crate::session::{AnySession, FlipOutcome, Session, Ticket};

pub use crate::runtime::{flip_and_schedule, run_snake, spawn_snake, SharedSession};

pub use crate::arcade::Arcade;
