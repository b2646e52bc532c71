//! A single service agent: waiting queue, service slot, and counters.
//!
//! # Load estimate
//!
//! ```text
//! load(now) = max(free_at - now, 0)   if serving, else 0
//!           + Σ difficulty of every queued client
//! ```
//!
//! The queued part is maintained incrementally in `queued_work` by
//! [`Agent::enqueue`] and [`Agent::start_next_service`], so reading the load
//! is O(1) and never mutates the agent.

use std::collections::VecDeque;

use qs_core::{AgentId, ClientId, SimTime};
use qs_schedule::Completion;

use crate::Client;

// ── ServiceState ──────────────────────────────────────────────────────────────

/// The client currently being served and when its service ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InService {
    pub client:  Client,
    pub started: SimTime,
    pub free_at: SimTime,
}

/// Whether an agent is serving.
///
/// `Serving` holds if and only if exactly one `Completion` for this agent is
/// pending on the event timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ServiceState {
    #[default]
    Idle,
    Serving(InService),
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// A server that processes one client at a time and queues the rest FIFO.
#[derive(Debug, Clone)]
pub struct Agent {
    id:          AgentId,
    waiting:     VecDeque<Client>,
    state:       ServiceState,
    /// Sum of difficulties in `waiting`.
    queued_work: u64,

    /// Clients whose service has started on this agent.
    pub served:     u64,
    /// Sum of service durations started on this agent.
    pub busy_time:  f64,
    /// Sum of `start - arrival` over every started client.
    pub total_wait: f64,
}

impl Agent {
    pub fn new(id: AgentId) -> Self {
        Self {
            id,
            waiting:     VecDeque::new(),
            state:       ServiceState::Idle,
            queued_work: 0,
            served:      0,
            busy_time:   0.0,
            total_wait:  0.0,
        }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Append `client` to the back of the waiting queue.
    pub fn enqueue(&mut self, client: Client) {
        self.queued_work += u64::from(client.difficulty);
        self.waiting.push_back(client);
    }

    /// `true` when no client is in service.
    ///
    /// A serving agent whose `free_at` is already behind `now` means a
    /// completion was skipped; that is checked in debug builds only.
    pub fn is_free(&self, now: SimTime) -> bool {
        match &self.state {
            ServiceState::Idle => true,
            ServiceState::Serving(s) => {
                debug_assert!(
                    s.free_at >= now,
                    "agent {} still serving {} at {now}, due at {}",
                    self.id,
                    s.client.id,
                    s.free_at,
                );
                false
            }
        }
    }

    /// Move the head of the queue into service.
    ///
    /// Returns `None` if the queue is empty or a client is already in
    /// service.  Otherwise updates the counters and returns the completion
    /// that must be scheduled; this is the only way a completion is made.
    pub fn start_next_service(&mut self, now: SimTime) -> Option<Completion> {
        if self.is_serving() {
            return None;
        }
        let client = self.waiting.pop_front()?;
        self.queued_work -= u64::from(client.difficulty);

        let free_at = now + client.service_time();
        self.served += 1;
        self.busy_time += client.service_time();
        self.total_wait += now.since(client.arrival);
        self.state = ServiceState::Serving(InService { client, started: now, free_at });

        Some(Completion { time: free_at, client: client.id, agent: self.id })
    }

    /// Release the client in service and return it.
    ///
    /// # Panics
    /// If the agent is idle or serving a different client: a completion
    /// this agent did not schedule means the run is corrupt.
    pub fn finish_service(&mut self, client: ClientId) -> Client {
        match std::mem::take(&mut self.state) {
            ServiceState::Serving(s) if s.client.id == client => s.client,
            ServiceState::Serving(s) => panic!(
                "agent {} got completion for {client} while serving {}",
                self.id, s.client.id,
            ),
            ServiceState::Idle => panic!(
                "agent {} got completion for {client} while idle",
                self.id,
            ),
        }
    }

    /// Estimated remaining work at `now`.  Read-only.
    pub fn current_load(&self, now: SimTime) -> f64 {
        let remaining = match &self.state {
            ServiceState::Idle => 0.0,
            ServiceState::Serving(s) => s.free_at.since(now),
        };
        remaining + self.queued_work as f64
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> &ServiceState {
        &self.state
    }

    #[inline]
    pub fn is_serving(&self) -> bool {
        matches!(self.state, ServiceState::Serving(_))
    }

    /// The in-service record, if any.
    pub fn serving(&self) -> Option<&InService> {
        match &self.state {
            ServiceState::Serving(s) => Some(s),
            ServiceState::Idle => None,
        }
    }

    /// When the current service ends, or `None` while idle.
    pub fn free_at(&self) -> Option<SimTime> {
        self.serving().map(|s| s.free_at)
    }

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.waiting.len()
    }

    /// Sum of difficulties of the queued clients.
    #[inline]
    pub fn queued_work(&self) -> u64 {
        self.queued_work
    }

    /// Queued clients, front first.
    pub fn waiting(&self) -> impl Iterator<Item = &Client> + '_ {
        self.waiting.iter()
    }

    /// Mean time a started client spent queued; `0.0` before any start.
    pub fn mean_wait(&self) -> f64 {
        if self.served == 0 {
            0.0
        } else {
            self.total_wait / self.served as f64
        }
    }
}
