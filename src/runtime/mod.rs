//! Async drivers for the two timed behaviours.
//!
//! Sessions stay synchronous; these helpers share one behind a
//! `tokio::sync::Mutex` and call into it from timers:
//! - [`run_snake`]: the tick loop, re-armed with the latest move delay
//! - [`flip_and_schedule`]: a Memory flip whose pair resolves after the
//!   match delay
//!
//! Both capture a [`Ticket`](crate::session::Ticket) up front, so a restart
//! quietly retires them.

mod memory;
mod snake;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::Game;
use crate::session::Session;

pub use memory::flip_and_schedule;
pub use snake::{run_snake, spawn_snake, LoopExit};

/// Session handle shared between the front end and the timers.
pub type SharedSession<G> = Arc<Mutex<Session<G>>>;

/// Wrap `session` for use with the drivers.
#[must_use]
pub fn share<G: Game>(session: Session<G>) -> SharedSession<G> {
    Arc::new(Mutex::new(session))
}
