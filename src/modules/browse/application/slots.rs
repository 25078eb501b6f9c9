//! Stale-response guard
//!
//! Each logical channel of in-flight work is a [`Slot`]. Starting a request
//! hands out a ticket carrying a fresh generation; only the holder of the most
//! recent ticket for a slot may publish its response.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Trending,
    Genres,
    /// A new search session (first page)
    Search,
    /// Follow-up pages of the current search session
    SearchPage,
    /// The single detail view; the latest requested id wins
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    slot: Slot,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct SlotTracker {
    next_generation: AtomicU64,
    current: DashMap<Slot, u64>,
}

impl SlotTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding whatever the slot was waiting on
    pub fn begin(&self, slot: Slot) -> RequestTicket {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.current.insert(slot, generation);
        RequestTicket { slot, generation }
    }

    /// Whether the ticket is still the latest for its slot
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.current
            .get(&ticket.slot)
            .map(|generation| *generation == ticket.generation)
            .unwrap_or(false)
    }
}
