//! Scheduled state transitions.

use qs_core::{AgentId, ClientId, SimTime};

/// End of service for `client` on `agent`.
///
/// Only `Agent::start_next_service` creates these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Completion {
    pub time:   SimTime,
    pub client: ClientId,
    pub agent:  AgentId,
}

/// An event on the timeline.  Events carry identifiers only; they own no
/// clients or agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// `client` enters the system at `time`.
    Arrival { time: SimTime, client: ClientId },
    /// An agent finishes serving a client.
    Completion(Completion),
}

/// Discriminant of [`Event`].
///
/// Variant order is the processing order for events at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    Completion,
    Arrival,
}

impl Event {
    #[inline]
    pub fn time(&self) -> SimTime {
        match self {
            Event::Arrival { time, .. } => *time,
            Event::Completion(c) => c.time,
        }
    }

    #[inline]
    pub fn client(&self) -> ClientId {
        match self {
            Event::Arrival { client, .. } => *client,
            Event::Completion(c) => c.client,
        }
    }

    #[inline]
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Arrival { .. } => EventKind::Arrival,
            Event::Completion(_) => EventKind::Completion,
        }
    }
}

impl From<Completion> for Event {
    fn from(c: Completion) -> Self {
        Event::Completion(c)
    }
}
