//! Snake state and the tick transition.

use std::time::Duration;

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::position::Position;
use crate::core::{ArcadeError, Direction, Game, GameKind, GameRng, SnakeConfig, WallPolicy};

/// Points awarded per food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Why a snake game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeOutcome {
    /// Head left the grid under `WallPolicy::Bounded`.
    HitWall,
    /// Head ran into the body.
    HitSelf,
    /// The snake covers every cell; nowhere left for food.
    BoardFilled,
}

/// One snake position.
///
/// `snake` is head-first and never empty. `food` never overlaps the snake
/// and is `None` only once the snake has filled the board.
#[derive(Clone, Debug)]
pub struct SnakeState {
    snake: Vector<Position>,
    food: Option<Position>,
    direction: Direction,
    score: u32,
    high_score: u32,
    foods_eaten: u32,
    move_delay: Duration,
    outcome: Option<SnakeOutcome>,
    config: SnakeConfig,
    rng: GameRng,
}

impl SnakeState {
    /// Start a game: one segment in the centre heading right, food at a
    /// random free cell.
    #[must_use]
    pub fn new(config: &SnakeConfig, high_score: u32, rng: GameRng) -> Self {
        let mid = (config.board_size / 2) as i32;
        let mut state = Self {
            snake: Vector::unit(Position::new(mid, mid)),
            food: None,
            direction: Direction::Right,
            score: 0,
            high_score,
            foods_eaten: 0,
            move_delay: config.initial_delay(),
            outcome: None,
            config: config.clone(),
            rng,
        };
        state.food = state.place_food();
        state
    }

    /// Build a state with an explicit body and food.
    ///
    /// Panics if the body is empty, leaves the grid, overlaps itself, or if
    /// the food sits on the body.
    #[must_use]
    pub fn with_layout(
        config: &SnakeConfig,
        body: &[Position],
        direction: Direction,
        food: Option<Position>,
        rng: GameRng,
    ) -> Self {
        assert!(!body.is_empty(), "Snake needs at least one segment");
        assert!(
            body.iter().all(|p| p.in_bounds(config.board_size)),
            "Snake segments must be on the grid"
        );
        let occupied: FxHashSet<Position> = body.iter().copied().collect();
        assert_eq!(occupied.len(), body.len(), "Snake segments must be distinct");
        if let Some(food) = food {
            assert!(food.in_bounds(config.board_size), "Food must be on the grid");
            assert!(!occupied.contains(&food), "Food must not overlap the snake");
        }

        Self {
            snake: body.iter().copied().collect(),
            food,
            direction,
            score: 0,
            high_score: 0,
            foods_eaten: 0,
            move_delay: config.initial_delay(),
            outcome: None,
            config: config.clone(),
            rng,
        }
    }

    /// Body segments, head first.
    #[must_use]
    pub fn snake(&self) -> &Vector<Position> {
        &self.snake
    }

    /// The head segment.
    #[must_use]
    pub fn head(&self) -> Position {
        self.snake[0]
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// Always false; a snake keeps at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    /// Current food cell.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    /// Direction the next tick will move in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Interval the scheduler should wait before the next tick.
    #[must_use]
    pub fn move_delay(&self) -> Duration {
        self.move_delay
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// How the game ended, if it has.
    #[must_use]
    pub fn outcome(&self) -> Option<SnakeOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.config.board_size
    }

    #[must_use]
    pub fn wall_policy(&self) -> WallPolicy {
        self.config.wall_policy
    }

    /// Turn the snake.
    ///
    /// Reversing onto the body (the exact opposite of the current
    /// direction) is ignored, as is any turn after the game ended.
    #[must_use]
    pub fn set_direction(&self, direction: Direction) -> Self {
        if self.is_game_over() || direction == self.direction.opposite() {
            return self.clone();
        }
        Self {
            direction,
            ..self.clone()
        }
    }

    /// Advance one cell.
    #[must_use]
    pub fn tick(&self) -> Self {
        if self.is_game_over() {
            return self.clone();
        }

        let stepped = self.head().step(self.direction);
        let new_head = match self.config.wall_policy {
            WallPolicy::Bounded if !stepped.in_bounds(self.config.board_size) => {
                return self.finish(SnakeOutcome::HitWall);
            }
            WallPolicy::Bounded => stepped,
            WallPolicy::Wrap => stepped.wrapped(self.config.board_size),
        };

        if self.snake.contains(&new_head) {
            return self.finish(SnakeOutcome::HitSelf);
        }

        let mut next = self.clone();
        next.snake.push_front(new_head);

        if self.food == Some(new_head) {
            next.score = next.score.saturating_add(POINTS_PER_FOOD);
            next.high_score = next.high_score.max(next.score);
            next.foods_eaten += 1;
            next.move_delay = self.config.delay_after(next.foods_eaten);
            next.food = next.place_food();
            debug!(
                score = next.score,
                length = next.snake.len(),
                delay_ms = next.move_delay.as_millis() as u64,
                "snake ate food"
            );
            if next.food.is_none() {
                next.outcome = Some(SnakeOutcome::BoardFilled);
                debug!(score = next.score, "snake filled the board");
            }
        } else {
            next.snake.pop_back();
        }

        next
    }

    /// Replace the high score shown with this game, e.g. with the value a
    /// score store holds.
    #[must_use]
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }

    fn finish(&self, outcome: SnakeOutcome) -> Self {
        debug!(?outcome, score = self.score, length = self.snake.len(), "snake game over");
        Self {
            outcome: Some(outcome),
            ..self.clone()
        }
    }

    /// Pick a uniformly random cell not covered by the snake.
    fn place_food(&mut self) -> Option<Position> {
        let occupied: FxHashSet<Position> = self.snake.iter().copied().collect();
        let size = self.config.board_size as i32;
        let free: Vec<Position> = (0..size)
            .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
            .filter(|p| !occupied.contains(p))
            .collect();
        self.rng.choose(&free).copied()
    }
}

/// Marker type wiring Snake into sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Snake;

impl Game for Snake {
    type State = SnakeState;
    type Config = SnakeConfig;

    const KIND: GameKind = GameKind::Snake;

    fn validate(config: &Self::Config) -> Result<(), ArcadeError> {
        config.validate()
    }

    fn new_game(config: &Self::Config, high_score: u32, rng: GameRng) -> Self::State {
        SnakeState::new(config, high_score, rng)
    }

    fn is_over(state: &Self::State) -> bool {
        state.is_game_over()
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
