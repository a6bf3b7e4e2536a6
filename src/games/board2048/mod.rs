//! 2048: slide tiles on a square board, merging equal neighbours.
//!
//! - Every non-zero tile is a power of two >= 2
//! - A move that changes nothing is ignored (no spawn, no score)
//! - The game ends when no move can change the board, or a tile reaches
//!   the win value

mod board;
mod game;

pub use board::{slide_merge_left, Board, SPAWN_TWO_PROBABILITY};
pub use game::{Board2048, Board2048State};
