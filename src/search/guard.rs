/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Monotonic request-generation counter.
///
/// Every issued request and every invalidation bumps the generation, so a
/// ticket is current only until something newer happens. The counter is
/// never reset, which keeps tickets from a previous dialog session from
/// matching tickets issued after a reopen.
#[derive(Debug, Default)]
pub struct RequestGuard {
    generation: u64,
    outstanding: bool,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request, superseding any earlier one.
    pub fn issue(&mut self) -> Ticket {
        self.generation += 1;
        self.outstanding = true;
        Ticket(self.generation)
    }

    /// Supersede whatever is outstanding without issuing a new request.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.outstanding = false;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.outstanding && ticket.0 == self.generation
    }

    /// Accept the completion of `ticket` if it is current, retiring it.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if self.is_current(ticket) {
            self.outstanding = false;
            true
        } else {
            false
        }
    }

    pub fn has_outstanding(&self) -> bool {
        self.outstanding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let mut guard = RequestGuard::new();
        let first = guard.issue();
        let second = guard.issue();

        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
        assert!(first.generation() < second.generation());
    }

    #[test]
    fn invalidate_retires_outstanding_ticket() {
        let mut guard = RequestGuard::new();
        let ticket = guard.issue();
        guard.invalidate();

        assert!(!guard.settle(ticket));
        assert!(!guard.has_outstanding());
    }

    #[test]
    fn ticket_settles_once() {
        let mut guard = RequestGuard::new();
        let ticket = guard.issue();

        assert!(guard.settle(ticket));
        assert!(!guard.settle(ticket));
    }
}
