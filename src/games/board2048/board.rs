//! Square tile board and the slide/merge rule.
//!
//! Every move is reduced to "slide left": the board is rotated clockwise so
//! that the requested direction points left, each row is compacted and
//! merged, and the board is rotated back.
//!
//! | Direction | Clockwise turns before | Turns back |
//! |-----------|------------------------|------------|
//! | Left      | 0                      | 0          |
//! | Down      | 1                      | 3          |
//! | Right     | 2                      | 2          |
//! | Up        | 3                      | 1          |

use serde::{Deserialize, Serialize};

use crate::core::{Direction, GameRng};

/// Probability that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Square grid of tiles stored row-major. Zero marks an empty cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Create an empty `size x size` board.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a board from rows.
    ///
    /// Panics if the rows do not form a square.
    ///
    /// ```
    /// use pocket_arcade::games::board2048::Board;
    ///
    /// let board = Board::from_rows(&[vec![2, 0], vec![0, 4]]);
    /// assert_eq!(board.get(1, 1), 4);
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[Vec<u32>]) -> Self {
        let size = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == size),
            "Board rows must form a square"
        );
        Self {
            size,
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile at `(row, col)`.
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        assert!(row < self.size && col < self.size, "Cell out of range");
        self.cells[row * self.size + col]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Copy the board out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// All tiles, row-major.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Coordinates of every empty cell, row-major.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Largest tile on the board (0 when empty).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Does any two orthogonally adjacent cells hold the same value?
    #[must_use]
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        (0..n).any(|row| {
            (0..n).any(|col| {
                let v = self.get(row, col);
                (col + 1 < n && self.get(row, col + 1) == v)
                    || (row + 1 < n && self.get(row + 1, col) == v)
            })
        })
    }

    /// Can any move change the board?
    #[must_use]
    pub fn has_moves(&self) -> bool {
        self.cells.contains(&0) || self.has_adjacent_pair()
    }

    /// Rotate clockwise by `quarter_turns` (taken modulo 4).
    #[must_use]
    pub fn rotate(&self, quarter_turns: usize) -> Self {
        let n = self.size;
        let mut board = self.clone();
        for _ in 0..quarter_turns % 4 {
            let cells = (0..n * n)
                .map(|i| {
                    let (row, col) = (i / n, i % n);
                    board.cells[(n - 1 - col) * n + row]
                })
                .collect();
            board.cells = cells;
        }
        board
    }

    /// Slide every tile towards `direction`, merging equal neighbours.
    ///
    /// Returns the new board and the score gained from merges. The input is
    /// untouched; compare the result with `self` to detect an invalid move.
    #[must_use]
    pub fn slide(&self, direction: Direction) -> (Self, u32) {
        let turns = match direction {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        };

        let mut rotated = self.rotate(turns);
        let mut gain = 0u32;
        let n = rotated.size;
        for row in 0..n {
            let span = row * n..(row + 1) * n;
            let (merged, row_gain) = slide_merge_left(&rotated.cells[span.clone()]);
            rotated.cells[span].copy_from_slice(&merged);
            gain = gain.saturating_add(row_gain);
        }

        (rotated.rotate((4 - turns) % 4), gain)
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns an identical board when no cell is empty.
    #[must_use]
    pub fn spawn_tile(&self, rng: &mut GameRng) -> Self {
        let empty: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(i, _)| i)
            .collect();

        let mut board = self.clone();
        if let Some(&index) = rng.choose(&empty) {
            board.cells[index] = if rng.gen_bool(SPAWN_TWO_PROBABILITY) { 2 } else { 4 };
        }
        board
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|&v| if v == 0 { ".".to_string() } else { v.to_string() })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Slide one row to the left and merge.
///
/// Non-zero values are compacted leftward in order, then each adjacent equal
/// pair is merged once, scanning left to right. A tile produced by a merge
/// does not merge again in the same move. Returns the new row (same length)
/// and the sum of merged values.
///
/// ```
/// use pocket_arcade::games::board2048::slide_merge_left;
///
/// assert_eq!(slide_merge_left(&[2, 2, 4, 0]), (vec![4, 4, 0, 0], 4));
/// assert_eq!(slide_merge_left(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
/// ```
#[must_use]
pub fn slide_merge_left(row: &[u32]) -> (Vec<u32>, u32) {
    let tiles: Vec<u32> = row.iter().copied().filter(|&v| v != 0).collect();

    let mut out = Vec::with_capacity(row.len());
    let mut gain = 0u32;
    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            let merged = tiles[i].saturating_mul(2);
            out.push(merged);
            gain = gain.saturating_add(merged);
            i += 2;
        } else {
            out.push(tiles[i]);
            i += 1;
        }
    }

    out.resize(row.len(), 0);
    (out, gain)
}
