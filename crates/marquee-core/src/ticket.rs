//! Generation tickets for in-flight requests.
//!
//! Every outgoing request is tagged with a [`Ticket`] from a
//! [`Generation`]. When the response arrives it is applied only if its
//! ticket is still the latest one issued; anything older was superseded
//! while it was in flight and is dropped.

/// Identifies one request within a [`Generation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Monotonic ticket counter for one kind of request.
#[derive(Debug, Default)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding every earlier one.
    pub fn issue(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        Ticket(self.latest)
    }

    /// Supersede every ticket issued so far without starting a new request.
    pub fn invalidate(&mut self) {
        self.latest = self.latest.wrapping_add(1);
    }

    /// Whether `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let mut generation = Generation::new();
        let first = generation.issue();
        assert!(generation.is_current(first));

        let second = generation.issue();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_invalidate_supersedes_everything() {
        let mut generation = Generation::new();
        let ticket = generation.issue();
        generation.invalidate();
        assert!(!generation.is_current(ticket));
    }

    #[test]
    fn test_tickets_are_distinct() {
        let mut generation = Generation::new();
        let a = generation.issue();
        let b = generation.issue();
        assert_ne!(a, b);
    }
}
