use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::trace;

use super::SharedSession;
use crate::games::Memory;
use crate::session::FlipOutcome;

/// Flip card `index`; if that leaves a pair face up, resolve it after the
/// configured match delay.
///
/// Returns the resolve task when one was scheduled. Its result is `false`
/// when a restart made the pair stale.
pub async fn flip_and_schedule(
    session: &SharedSession<Memory>,
    index: usize,
) -> Option<JoinHandle<bool>> {
    let (ticket, delay) = {
        let mut guard = session.lock().await;
        match guard.flip(index) {
            FlipOutcome::PairPending(ticket) => (ticket, guard.config().match_delay()),
            FlipOutcome::Flipped | FlipOutcome::Rejected => return None,
        }
    };

    let session = session.clone();
    Some(tokio::spawn(async move {
        sleep(delay).await;
        let resolved = session.lock().await.resolve_with(ticket);
        trace!(resolved, generation = ticket.generation(), "deferred resolve");
        resolved
    }))
}
