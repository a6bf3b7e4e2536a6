//! Memory-match: turn cards two at a time and find the pairs.

mod card;
mod game;

pub use card::Card;
pub use game::{Memory, MemoryState, POINTS_PER_MATCH};
