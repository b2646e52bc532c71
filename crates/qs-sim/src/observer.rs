//! Simulation observer trait for progress reporting and data collection.

use qs_agent::{AgentPool, Client};
use qs_core::{AgentId, ClientId, SimTime};
use qs_schedule::{Completion, Event, EventTimeline};

use crate::RunSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — dispatch tracer
///
/// ```rust,ignore
/// struct Tracer;
///
/// impl SimObserver for Tracer {
///     fn on_dispatch(&mut self, now: SimTime, client: &Client, chosen: AgentId, _loads: &[f64]) {
///         println!("{now}: {} -> {chosen}", client.id);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once after the arrival schedule has been pushed.
    fn on_prime(&mut self, _arrivals: u64, _last_arrival: SimTime) {}

    /// Called for each admitted arrival, before it is enqueued.
    ///
    /// `loads` holds every agent's load as read for the dispatch decision.
    fn on_dispatch(&mut self, _now: SimTime, _client: &Client, _chosen: AgentId, _loads: &[f64]) {}

    /// Called when an arrival is ignored because the target was reached.
    fn on_rejected(&mut self, _now: SimTime, _client: ClientId) {}

    /// Called when a client moves from a queue into service.
    fn on_service_start(&mut self, _now: SimTime, _client: &Client, _completion: &Completion) {}

    /// Called when an agent releases a served client.
    fn on_completion(&mut self, _now: SimTime, _agent: AgentId, _client: &Client) {}

    /// Called after every processed event with read-only access to the
    /// agents and the remaining timeline.
    fn on_event_processed(
        &mut self,
        _event:    &Event,
        _agents:   &AgentPool,
        _timeline: &EventTimeline,
    ) {}

    /// Called once when the run reaches the Drained phase.
    fn on_drained(&mut self, _agents: &AgentPool, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
