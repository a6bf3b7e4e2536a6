//! The three game engines.
//!
//! Each engine is a set of pure transitions on its own state type and a
//! marker type implementing `core::Game`:
//! - `board2048`: slide and merge tiles
//! - `snake`: discrete-step movement, collision, growth
//! - `memory`: flip two cards, then resolve match or mismatch

pub mod board2048;
pub mod memory;
pub mod snake;

pub use board2048::{Board2048, Board2048State};
pub use memory::{Memory, MemoryState};
pub use snake::{Snake, SnakeState};
