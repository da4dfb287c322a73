//! Request tickets for "latest wins" operations.
//!
//! A task started for an operation takes a [`Ticket`] from the category's
//! [`Sequence`] in the synchronous update step. When the task resolves it
//! checks the ticket against the sequence in the latest state; a newer
//! request, or anything else that bumped the sequence, makes the result
//! stale and it is discarded.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Sequence(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Ticket(u64);

impl Sequence {
    /// Supersede every outstanding ticket and hand out a new one.
    pub fn issue(&mut self) -> Ticket {
        self.0 = self.0.wrapping_add(1);
        Ticket(self.0)
    }

    /// Supersede every outstanding ticket without handing out a new one.
    pub fn invalidate(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0 == ticket.0
    }
}
