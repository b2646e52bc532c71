//! Unit tests for qs-schedule.

use qs_core::{AgentId, ClientId, SimTime};

use crate::{Completion, Event, EventKind, EventTimeline};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn arrival(t: f64, id: u64) -> Event {
    Event::Arrival { time: SimTime(t), client: ClientId(id) }
}

fn completion(t: f64, id: u64, agent: u32) -> Completion {
    Completion { time: SimTime(t), client: ClientId(id), agent: AgentId(agent) }
}

// ── Event ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event {
    use super::*;

    #[test]
    fn accessors() {
        let a = arrival(1.5, 4);
        assert_eq!(a.time(), SimTime(1.5));
        assert_eq!(a.client(), ClientId(4));
        assert_eq!(a.kind(), EventKind::Arrival);

        let c: Event = completion(3.0, 4, 1).into();
        assert_eq!(c.time(), SimTime(3.0));
        assert_eq!(c.kind(), EventKind::Completion);
    }
}

// ── EventTimeline ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod timeline {
    use super::*;

    #[test]
    fn empty() {
        let mut tl = EventTimeline::new();
        assert!(tl.is_empty());
        assert_eq!(tl.len(), 0);
        assert!(tl.peek_time().is_none());
        assert!(tl.pop_min().is_none());
    }

    #[test]
    fn pops_in_time_order() {
        let mut tl = EventTimeline::new();
        tl.push(arrival(3.0, 3));
        tl.push(arrival(0.5, 1));
        tl.push(completion(2.0, 1, 0));
        tl.push(arrival(1.0, 2));

        assert_eq!(tl.peek_time(), Some(SimTime(0.5)));
        let times: Vec<f64> = std::iter::from_fn(|| tl.pop_min()).map(|e| e.time().0).collect();
        assert_eq!(times, vec![0.5, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn equal_times_pop_in_push_order() {
        let mut tl = EventTimeline::new();
        tl.push(arrival(2.0, 1));
        tl.push(arrival(2.0, 2));
        tl.push(completion(2.0, 9, 1));
        tl.push(completion(2.0, 8, 0));

        let clients: Vec<u64> = std::iter::from_fn(|| tl.pop_min()).map(|e| e.client().0).collect();
        assert_eq!(clients, vec![9, 8, 1, 2]);
    }

    #[test]
    fn completion_beats_arrival_at_same_time() {
        let mut tl = EventTimeline::new();
        tl.push(arrival(2.0, 1));
        tl.push(arrival(3.0, 2));
        tl.push(completion(2.0, 9, 0));

        assert_eq!(tl.pop_min(), Some(Event::from(completion(2.0, 9, 0))));
        assert_eq!(tl.pop_min(), Some(arrival(2.0, 1)));
        assert_eq!(tl.pop_min(), Some(arrival(3.0, 2)));
    }

    #[test]
    fn kinds_order_completion_first() {
        assert!(EventKind::Completion < EventKind::Arrival);
    }

    #[test]
    fn interleaved_push_pop() {
        let mut tl = EventTimeline::new();
        tl.push(arrival(5.0, 1));
        tl.push(arrival(1.0, 2));
        assert_eq!(tl.pop_min().map(|e| e.client()), Some(ClientId(2)));
        tl.push(completion(3.0, 2, 0));
        assert_eq!(tl.pop_min().map(|e| e.time()), Some(SimTime(3.0)));
        assert_eq!(tl.pop_min().map(|e| e.time()), Some(SimTime(5.0)));
        assert!(tl.is_empty());
        assert_eq!(tl.pushed(), 3);
    }

    #[test]
    fn no_duplicate_suppression() {
        let mut tl = EventTimeline::new();
        tl.push(arrival(1.0, 1));
        tl.push(arrival(1.0, 1));
        assert_eq!(tl.len(), 2);
    }

    #[test]
    fn counts_pending_completions_per_agent() {
        let mut tl = EventTimeline::new();
        tl.push(arrival(0.0, 1));
        tl.push(completion(2.0, 1, 0));
        tl.push(completion(4.0, 2, 1));
        assert_eq!(tl.pending_completions(AgentId(0)), 1);
        assert_eq!(tl.pending_completions(AgentId(1)), 1);
        assert_eq!(tl.pending_completions(AgentId(2)), 0);
        assert_eq!(tl.iter().count(), 3);
    }
}
