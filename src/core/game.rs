//! Uniform seam between sessions and engines.
//!
//! Each game implements `Game` on a marker type so that `Session<G>` can
//! create, restart and inspect any engine without knowing its rules:
//! - How a fresh state is built
//! - When the game is over
//! - Which score and high score the state carries
//!
//! Game-specific operations (moving tiles, ticking, flipping) stay on the
//! engine's state type; sessions reach them through typed `impl` blocks.

use super::error::ArcadeError;
use super::kind::GameKind;
use super::rng::GameRng;

/// Game engine trait.
///
/// ## Implementation Notes
///
/// - `new_game`: must consume `rng` as the state's only randomness source
/// - `is_over`: true for every terminal state, win or loss
/// - `high_score`: the state's view, already folded with its own score
pub trait Game {
    /// Engine state value. Operations return new values of this type.
    type State: Clone + std::fmt::Debug;

    /// Per-game configuration.
    type Config: Clone + std::fmt::Debug;

    /// Tag and high-score key for this game.
    const KIND: GameKind;

    /// Reject configurations the engine cannot run.
    fn validate(config: &Self::Config) -> Result<(), ArcadeError>;

    /// Build a fresh initial state.
    fn new_game(config: &Self::Config, high_score: u32, rng: GameRng) -> Self::State;

    /// Is the game finished?
    fn is_over(state: &Self::State) -> bool;

    /// Current score.
    fn score(state: &Self::State) -> u32;

    /// Best score known to the state.
    fn high_score(state: &Self::State) -> u32;

    /// Replace the state's high score with the authoritative stored value.
    fn with_high_score(state: Self::State, high_score: u32) -> Self::State;
}
