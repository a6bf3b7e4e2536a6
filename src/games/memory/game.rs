//! Memory state with the two-phase flip/resolve transition.
//!
//! ## Phases
//!
//! ```text
//! Idle --flip--> OneUp --flip--> PairPending --resolve--> Idle | Finished
//! ```
//!
//! `flip` never compares cards. Once two are face up the state waits in
//! `PairPending` until the caller runs `resolve`, normally after a delay so
//! both faces can be seen. While pending, every further `flip` is rejected.

use im::Vector;
use smallvec::SmallVec;
use tracing::debug;

use super::card::Card;
use crate::core::{ArcadeError, Game, GameKind, GameRng, MemoryConfig};

/// Points awarded per matched pair.
pub const POINTS_PER_MATCH: u32 = 10;

/// One memory-match position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryState {
    cards: Vector<Card>,
    flipped: SmallVec<[usize; 2]>,
    score: u32,
    high_score: u32,
    moves: u32,
    is_game_over: bool,
}

impl MemoryState {
    /// Deal a shuffled deck of `pair_count` pairs, all face down.
    #[must_use]
    pub fn new(config: &MemoryConfig, high_score: u32, mut rng: GameRng) -> Self {
        let pairs = config.pair_count as u32;
        let mut values: Vec<u32> = (1..=pairs).chain(1..=pairs).collect();
        rng.shuffle(&mut values);
        Self::from_values(&values, high_score)
    }

    /// Deal the given values in order.
    ///
    /// Panics unless every value appears exactly twice.
    #[must_use]
    pub fn from_values(values: &[u32], high_score: u32) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        assert!(
            sorted.len() % 2 == 0
                && sorted.chunks(2).all(|pair| pair[0] == pair[1])
                && sorted.chunks(2).zip(sorted.chunks(2).skip(1)).all(|(a, b)| a[0] != b[0]),
            "Every card value must appear exactly twice"
        );

        Self {
            cards: values
                .iter()
                .enumerate()
                .map(|(id, &value)| Card::new(id, value))
                .collect(),
            flipped: SmallVec::new(),
            score: 0,
            high_score,
            moves: 0,
            is_game_over: false,
        }
    }

    /// The deck in layout order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Indices of the face-up, unmatched cards (0, 1 or 2).
    #[must_use]
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    /// Two cards are up and waiting for `resolve`.
    #[must_use]
    pub fn is_resolution_pending(&self) -> bool {
        self.flipped.len() == 2
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Accepted flips so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Every card is matched.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Number of matched pairs.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Turn the card at `index` face up.
    ///
    /// Ignored when the game is over, `index` is out of range, the card is
    /// already up or matched, or a pair is already waiting for `resolve`.
    #[must_use]
    pub fn flip(&self, index: usize) -> Self {
        let selectable = self.cards.get(index).is_some_and(Card::is_selectable);
        if self.is_game_over || !selectable || self.flipped.len() >= 2 {
            return self.clone();
        }

        let mut next = self.clone();
        next.cards[index].is_flipped = true;
        next.flipped.push(index);
        next.moves += 1;
        next
    }

    /// Compare the two face-up cards.
    ///
    /// Equal values stay up as a match and score; unequal values turn back
    /// down. Ignored unless exactly two cards are up.
    #[must_use]
    pub fn resolve(&self) -> Self {
        let &[a, b] = self.flipped.as_slice() else {
            return self.clone();
        };

        let mut next = self.clone();
        next.flipped.clear();

        if self.cards[a].value == self.cards[b].value {
            next.cards[a].is_matched = true;
            next.cards[b].is_matched = true;
            next.score = next.score.saturating_add(POINTS_PER_MATCH);
            next.high_score = next.high_score.max(next.score);
            next.is_game_over = next.cards.iter().all(|c| c.is_matched);
            debug!(value = self.cards[a].value, score = next.score, "memory pair matched");
            if next.is_game_over {
                debug!(score = next.score, moves = next.moves, "memory board cleared");
            }
        } else {
            next.cards[a].is_flipped = false;
            next.cards[b].is_flipped = false;
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
}

/// Marker type wiring Memory into sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Memory;

impl Game for Memory {
    type State = MemoryState;
    type Config = MemoryConfig;

    const KIND: GameKind = GameKind::Memory;

    fn validate(config: &Self::Config) -> Result<(), ArcadeError> {
        config.validate()
    }

    fn new_game(config: &Self::Config, high_score: u32, rng: GameRng) -> Self::State {
        MemoryState::new(config, high_score, rng)
    }

    fn is_over(state: &Self::State) -> bool {
        state.is_game_over
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
