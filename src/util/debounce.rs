//! Generation-counted debounce bookkeeping.
//!
//! Every trigger bumps the generation and hands back a ticket. A deferred
//! action only runs if its ticket is still the latest when it fires, so a
//! burst of triggers yields exactly one action after the quiet period.
//! The browser side additionally drops the previous timer so stale tickets
//! rarely fire at all.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Opaque handle for one scheduled action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: u64,
    fired: bool,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger, superseding any earlier ticket.
    pub fn trigger(&mut self) -> Ticket {
        self.generation += 1;
        self.fired = false;
        Ticket(self.generation)
    }

    /// Claim the action for `ticket`.
    ///
    /// Returns `true` exactly once, and only for the newest ticket.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

