//! Grid coordinates for the snake board.

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// A cell on the grid. `x` is the column, `y` the row; `(0, 0)` is top-left.
///
/// Signed so that a step off the edge is representable before the wall
/// policy decides what it means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell towards `direction`, unbounded.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Is this cell on a `size x size` grid?
    #[must_use]
    pub fn in_bounds(self, size: usize) -> bool {
        let size = size as i32;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }

    /// Wrap both coordinates onto a `size x size` grid.
    #[must_use]
    pub fn wrapped(self, size: usize) -> Self {
        let size = size as i32;
        Self::new(self.x.rem_euclid(size), self.y.rem_euclid(size))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
