//! Sessions: one running game plus pause, restart and high-score wiring.
//!
//! ## Cancellation
//!
//! Deferred work (the Snake tick loop, the Memory resolve delay) captures a
//! [`Ticket`] when it is scheduled. `restart` bumps the session generation,
//! and `tick_with`/`resolve_with` ignore tickets from older generations, so
//! a timer armed for an abandoned game never touches the new one.
//!
//! ## Gating
//!
//! While paused or after game over, moves, turns, ticks and flips are
//! rejected. Resolving an already face-up Memory pair is allowed while
//! paused.

mod any;
mod ticket;
mod wrapper;

pub use any::AnySession;
pub use ticket::Ticket;
pub use wrapper::{FlipOutcome, Session};
