use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, instrument};

use super::SharedSession;
use crate::games::Snake;
use crate::session::Ticket;

/// Why a tick loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopExit {
    /// The snake crashed or filled the board.
    GameOver,
    /// The session was restarted; a new loop owns the new game.
    Restarted,
}

/// Tick the game `ticket` was issued for until it ends.
///
/// The timer is re-armed after every tick with the current move delay, so
/// speed-ups apply from the next step. While paused the timer keeps running
/// but nothing moves. A stale `ticket` retires the loop at its first wake-up.
#[instrument(skip(session), fields(generation = ticket.generation()))]
pub async fn run_snake(session: SharedSession<Snake>, ticket: Ticket) -> LoopExit {
    loop {
        let delay = session.lock().await.move_delay();
        sleep(delay).await;

        let mut guard = session.lock().await;
        if !guard.is_current(ticket) {
            debug!(generation = ticket.generation(), "tick loop retired by restart");
            return LoopExit::Restarted;
        }
        guard.tick_with(ticket);
        if guard.is_over() {
            debug!(score = guard.score(), "tick loop finished");
            return LoopExit::GameOver;
        }
    }
}

/// Start [`run_snake`] for the session's current game on the current
/// runtime.
///
/// The ticket is taken before the task is spawned, so a restart issued
/// right after this returns retires the new loop.
pub async fn spawn_snake(session: SharedSession<Snake>) -> JoinHandle<LoopExit> {
    let ticket = session.lock().await.ticket();
    tokio::spawn(run_snake(session, ticket))
}
