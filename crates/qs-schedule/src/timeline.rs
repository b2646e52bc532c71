//! `EventTimeline` — the priority structure that drives the virtual clock.
//!
//! `BinaryHeap` gives O(log E) push and pop where E = pending events.  The
//! heap is a max-heap, so entries order in reverse on `(time, kind, seq)`.
//!
//! At equal times every completion pops before any arrival, so an agent that
//! finishes at `t` is free for a client arriving at `t`.  Events of the same
//! kind and time pop in push order.
//!
//! There is no cancellation and no duplicate suppression: every pushed event
//! is eventually popped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use qs_core::{AgentId, SimTime};

use crate::{Event, EventKind};

struct Entry {
    time:  SimTime,
    kind:  EventKind,
    seq:   u64,
    event: Event,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: the earliest (time, kind, seq) is the heap maximum.
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.kind.cmp(&self.kind))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Pending events, earliest first.
#[derive(Default)]
pub struct EventTimeline {
    heap:     BinaryHeap<Entry>,
    next_seq: u64,
}

impl EventTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at `event.time()`.
    pub fn push(&mut self, event: impl Into<Event>) {
        let event = event.into();
        self.heap.push(Entry {
            time: event.time(),
            kind: event.kind(),
            seq:  self.next_seq,
            event,
        });
        self.next_seq += 1;
    }

    /// Remove and return the earliest event, or `None` if the timeline is
    /// exhausted.
    pub fn pop_min(&mut self) -> Option<Event> {
        self.heap.pop().map(|e| e.event)
    }

    /// Time of the earliest pending event.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|e| e.time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total events ever pushed.
    pub fn pushed(&self) -> u64 {
        self.next_seq
    }

    /// All pending events in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.heap.iter().map(|e| &e.event)
    }

    /// Pending completions that reference `agent`.  O(E); meant for
    /// instrumentation, not the hot loop.
    pub fn pending_completions(&self, agent: AgentId) -> usize {
        self.iter()
            .filter(|e| matches!(e, Event::Completion(c) if c.agent == agent))
            .count()
    }
}
