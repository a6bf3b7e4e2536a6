//! 2048 game state and the move transition.

use tracing::debug;

use super::board::Board;
use crate::core::{ArcadeError, Board2048Config, Direction, Game, GameKind, GameRng};

/// One 2048 position.
///
/// Values are immutable: `apply_move` returns a new state. The RNG that
/// decides tile spawns travels with the state.
#[derive(Clone, Debug)]
pub struct Board2048State {
    board: Board,
    score: u32,
    high_score: u32,
    is_game_over: bool,
    is_win: bool,
    win_value: u32,
    rng: GameRng,
}

impl Board2048State {
    /// Start a game: an empty board with two spawned tiles.
    #[must_use]
    pub fn new(config: &Board2048Config, high_score: u32, mut rng: GameRng) -> Self {
        let board = Board::empty(config.size)
            .spawn_tile(&mut rng)
            .spawn_tile(&mut rng);
        Self::from_parts(board, 0, high_score, config.win_value, rng)
    }

    /// Rebuild a state around an existing board.
    ///
    /// Terminal flags are derived from the board. Useful for restoring a
    /// position or setting up a puzzle.
    #[must_use]
    pub fn from_parts(board: Board, score: u32, high_score: u32, win_value: u32, rng: GameRng) -> Self {
        let is_win = board.max_tile() >= win_value;
        let is_game_over = !board.has_moves();
        Self {
            board,
            score,
            high_score: high_score.max(score),
            is_game_over,
            is_win,
            win_value,
            rng,
        }
    }

    /// Current tiles.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Points from merges so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score seen, including this game.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// No empty cell and no adjacent equal pair.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Some tile reached the win value.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.is_win
    }

    /// Tile value that wins the game.
    #[must_use]
    pub fn win_value(&self) -> u32 {
        self.win_value
    }

    /// Either terminal condition holds.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_game_over || self.is_win
    }

    /// Slide the board towards `direction`.
    ///
    /// A move that leaves the board unchanged is invalid and returns an
    /// identical state: no tile spawns and the score stays. A finished game
    /// ignores every move.
    #[must_use]
    pub fn apply_move(&self, direction: Direction) -> Self {
        if self.is_finished() {
            return self.clone();
        }

        let (slid, gain) = self.board.slide(direction);
        if slid == self.board {
            return self.clone();
        }

        let mut rng = self.rng.clone();
        let board = slid.spawn_tile(&mut rng);
        let score = self.score.saturating_add(gain);
        let next = Self::from_parts(board, score, self.high_score, self.win_value, rng);

        if next.is_win {
            debug!(score, max_tile = next.board.max_tile(), "2048 won");
        } else if next.is_game_over {
            debug!(score, "2048 over: no moves left");
        }
        next
    }

    /// Directions that would change the board.
    #[must_use]
    pub fn valid_moves(&self) -> Vec<Direction> {
        if self.is_finished() {
            return Vec::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.board.slide(dir).0 != self.board)
            .collect()
    }

    /// Replace the high score shown with this board, e.g. with the value a
    /// score store holds.
    #[must_use]
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }
}

/// Marker type wiring 2048 into sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Board2048;

impl Game for Board2048 {
    type State = Board2048State;
    type Config = Board2048Config;

    const KIND: GameKind = GameKind::Board2048;

    fn validate(config: &Self::Config) -> Result<(), ArcadeError> {
        config.validate()
    }

    fn new_game(config: &Self::Config, high_score: u32, rng: GameRng) -> Self::State {
        Board2048State::new(config, high_score, rng)
    }

    fn is_over(state: &Self::State) -> bool {
        state.is_finished()
    }

    fn score(state: &Self::State) -> u32 {
        state.score
    }

    fn high_score(state: &Self::State) -> u32 {
        state.high_score
    }

    fn with_high_score(state: Self::State, high_score: u32) -> Self::State {
        state.with_high_score(high_score)
    }
}
