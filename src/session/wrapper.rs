//! `Session<G>`: pause, restart and gating around one engine.

use tracing::{debug, instrument};

use super::ticket::Ticket;
use crate::core::{ArcadeError, Direction, Game, GameKind, GameRng};
use crate::games::{Board2048, Memory, Snake};
use crate::scores::{ScoreStore, SharedScoreStore};

/// A running game plus the flags the presentation layer toggles.
///
/// All mutation goes through engine operations: the session only swaps in
/// the state they return. Operations are rejected (return `false`) while
/// paused or after the game ended.
#[derive(Debug)]
pub struct Session<G: Game> {
    config: G::Config,
    state: G::State,
    paused: bool,
    generation: u64,
    seeder: GameRng,
    store: SharedScoreStore,
}

impl<G: Game> Session<G> {
    /// Start a game, reading the high score from `store`.
    ///
    /// `seed` drives every game this session creates, restarts included.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation; use [`Session::try_new`] for
    /// configs built outside the `with_*` builders.
    #[must_use]
    pub fn new(config: G::Config, store: SharedScoreStore, seed: u64) -> Self {
        match Self::try_new(config, store, seed) {
            Ok(session) => session,
            Err(err) => panic!("invalid {} config: {}", G::KIND, err.message),
        }
    }

    /// Like [`Session::new`], but rejects an invalid `config` instead of
    /// panicking.
    pub fn try_new(config: G::Config, store: SharedScoreStore, seed: u64) -> Result<Self, ArcadeError> {
        G::validate(&config)?;
        let mut seeder = GameRng::new(seed);
        let high_score = store.high_score(G::KIND);
        let state = G::new_game(&config, high_score, seeder.fork());
        Ok(Self {
            config,
            state,
            paused: false,
            generation: 0,
            seeder,
            store,
        })
    }

    /// Which game this session runs.
    #[must_use]
    pub fn kind(&self) -> GameKind {
        G::KIND
    }

    /// Current engine state.
    #[must_use]
    pub fn state(&self) -> &G::State {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &G::Config {
        &self.config
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        G::is_over(&self.state)
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        G::score(&self.state)
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        G::high_score(&self.state)
    }

    /// Number of restarts so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Tag for a callback scheduled against the current game.
    #[must_use]
    pub fn ticket(&self) -> Ticket {
        Ticket::new(self.generation)
    }

    /// Was `ticket` issued for the current game?
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation() == self.generation
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip the pause flag and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Replace the game with a fresh one and unpause.
    ///
    /// Outstanding tickets become stale.
    #[instrument(skip(self), fields(game = %G::KIND, generation = self.generation))]
    pub fn restart(&mut self) {
        let high_score = self.store.high_score(G::KIND);
        self.state = G::new_game(&self.config, high_score, self.seeder.fork());
        self.paused = false;
        self.generation += 1;
        debug!(generation = self.generation, "session restarted");
    }

    /// Accepting engine operations right now?
    fn is_live(&self) -> bool {
        !self.paused && !G::is_over(&self.state)
    }

    /// Swap in `next`, pushing a raised score through the store.
    ///
    /// The state's high score is always replaced with the store's value, so a
    /// reset made elsewhere shows up on the next accepted operation.
    fn commit(&mut self, next: G::State) {
        let score = G::score(&next);
        let stored = if score > G::score(&self.state) {
            self.store.set_high_score_if_greater(G::KIND, score)
        } else {
            self.store.high_score(G::KIND)
        };
        let next = G::with_high_score(next, stored);
        if G::is_over(&next) && !G::is_over(&self.state) {
            debug!(game = %G::KIND, score, "game over");
        }
        self.state = next;
    }
}

impl Session<Board2048> {
    /// Slide the tiles. Returns whether the board changed.
    #[instrument(level = "trace", skip(self), fields(generation = self.generation))]
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if !self.is_live() {
            return false;
        }
        let next = self.state.apply_move(direction);
        let changed = next.board() != self.state.board();
        if changed {
            self.commit(next);
        }
        changed
    }
}

impl Session<Snake> {
    /// Turn the snake. Returns whether the turn was accepted.
    #[instrument(level = "trace", skip(self), fields(generation = self.generation))]
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.is_live() {
            return false;
        }
        let next = self.state.set_direction(direction);
        let accepted = next.direction() == direction;
        self.commit(next);
        accepted
    }

    /// Advance one step. Returns whether the state moved on.
    pub fn tick(&mut self) -> bool {
        if !self.is_live() {
            return false;
        }
        let next = self.state.tick();
        self.commit(next);
        true
    }

    /// `tick`, unless `ticket` predates a restart.
    pub fn tick_with(&mut self, ticket: Ticket) -> bool {
        self.is_current(ticket) && self.tick()
    }

    /// Delay before the next tick should fire.
    #[must_use]
    pub fn move_delay(&self) -> std::time::Duration {
        self.state.move_delay()
    }
}

/// What a `flip` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Paused, finished, bad index, or a pair is already waiting.
    Rejected,
    /// First card of a pair is up.
    Flipped,
    /// Second card is up; call `resolve_with(ticket)` after the match delay.
    PairPending(Ticket),
}

impl Session<Memory> {
    /// Turn a card face up.
    #[instrument(level = "trace", skip(self), fields(generation = self.generation))]
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if !self.is_live() {
            return FlipOutcome::Rejected;
        }
        let next = self.state.flip(index);
        if next.moves() == self.state.moves() {
            return FlipOutcome::Rejected;
        }
        self.commit(next);
        if self.state.is_resolution_pending() {
            FlipOutcome::PairPending(self.ticket())
        } else {
            FlipOutcome::Flipped
        }
    }

    /// Compare the face-up pair.
    ///
    /// Not gated by pause: the pair is already committed and only needs
    /// settling. Returns whether a pair was resolved.
    pub fn resolve(&mut self) -> bool {
        if !self.state.is_resolution_pending() {
            return false;
        }
        let next = self.state.resolve();
        self.commit(next);
        true
    }

    /// `resolve`, unless `ticket` predates a restart.
    pub fn resolve_with(&mut self, ticket: Ticket) -> bool {
        self.is_current(ticket) && self.resolve()
    }
}
