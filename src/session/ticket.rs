//! Generation tags for scheduled callbacks.

/// Proof that a callback was scheduled against a particular game.
///
/// Every restart bumps the session's generation, so a ticket issued before
/// the restart no longer matches and its callback becomes a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    pub(crate) const fn new(generation: u64) -> Self {
        Self { generation }
    }

    /// Generation this ticket was issued for.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}
