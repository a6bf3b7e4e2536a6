//! Memory cards.

use serde::{Deserialize, Serialize};

/// One card in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position in the deck at deal time.
    pub id: usize,
    /// Face value; exactly two cards share each value.
    pub value: u32,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl Card {
    /// A face-down, unmatched card.
    #[must_use]
    pub const fn new(id: usize, value: u32) -> Self {
        Self {
            id,
            value,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Can this card be turned over?
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.is_flipped && !self.is_matched
    }
}
