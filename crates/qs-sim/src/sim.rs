//! The `Sim` struct and its event loop.

use log::{debug, info, trace};
use qs_agent::{AgentPool, Client};
use qs_core::{AgentId, ClientId, ParameterSource, SimConfig, SimTime};
use qs_schedule::{Completion, Event, EventTimeline};

use crate::dispatch::{is_least_loaded, least_loaded};
use crate::{SimError, SimObserver, SimResult};

// ── Phase and summary ─────────────────────────────────────────────────────────

/// Lifecycle of a run.  Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPhase {
    /// Built, arrival schedule not yet generated.
    Priming,
    /// Arrivals scheduled; events are being processed.
    Running,
    /// Timeline exhausted or target reached.  Terminal.
    Drained,
}

/// Global counters at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub clients_created:  u64,
    pub clients_served:   u64,
    /// Arrivals ignored because the served target had been reached.
    pub clients_rejected: u64,
    pub events_processed: u64,
    /// Virtual time of the last processed event.
    pub end_time:         SimTime,
    /// `true` when the timeline ran dry before the target was reached.
    pub exhausted:        bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation controller.
///
/// Holds every agent, the event timeline, and the global counters.  All
/// mutation happens inside [`step`][Self::step], one event at a time.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: ParameterSource> {
    /// Run parameters, validated by the builder.
    pub config: SimConfig,

    /// The fixed-size agent collection, indexed by `AgentId`.
    pub agents: AgentPool,

    /// Pending events, earliest first.
    pub timeline: EventTimeline,

    pub(crate) source:           S,
    pub(crate) phase:            SimPhase,
    pub(crate) clock:            SimTime,
    pub(crate) clients_created:  u64,
    pub(crate) clients_served:   u64,
    pub(crate) clients_rejected: u64,
    pub(crate) events_processed: u64,
}

impl<S: ParameterSource> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run to the Drained phase and return the final counters.
    ///
    /// Observers receive the final agent state through
    /// [`SimObserver::on_drained`].  Calling `run` on a drained sim returns
    /// the same summary again without notifying observers.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        while self.step(observer)? {}
        Ok(self.summary())
    }

    /// Process at most one event.
    ///
    /// Primes the timeline on first use.  Returns `Ok(false)` once the run is
    /// drained; the transition into Drained happens on the call that finds
    /// nothing left to do.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        match self.phase {
            SimPhase::Drained => return Ok(false),
            SimPhase::Priming => self.prime(observer),
            SimPhase::Running => {}
        }

        if self.clients_served >= self.config.target_served {
            self.drain(observer);
            return Ok(false);
        }
        let Some(event) = self.timeline.pop_min() else {
            self.drain(observer);
            return Ok(false);
        };

        debug_assert!(
            event.time() >= self.clock,
            "event at {} behind clock {}",
            event.time(),
            self.clock,
        );
        self.clock = event.time();
        self.events_processed += 1;
        trace!("pop {event:?}");

        match event {
            Event::Arrival { time, client } => self.handle_arrival(time, client, observer)?,
            Event::Completion(done) => self.handle_completion(done, observer),
        }

        observer.on_event_processed(&event, &self.agents, &self.timeline);
        Ok(true)
    }

    #[inline]
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Virtual time of the most recently processed event.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock
    }

    #[inline]
    pub fn clients_created(&self) -> u64 {
        self.clients_created
    }

    #[inline]
    pub fn clients_served(&self) -> u64 {
        self.clients_served
    }

    #[inline]
    pub fn clients_rejected(&self) -> u64 {
        self.clients_rejected
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            clients_created:  self.clients_created,
            clients_served:   self.clients_served,
            clients_rejected: self.clients_rejected,
            events_processed: self.events_processed,
            end_time:         self.clock,
            exhausted:        self.clients_served < self.config.target_served,
        }
    }

    // ── Phases ────────────────────────────────────────────────────────────

    /// Push one arrival per client.  Each gap is drawn independently; the
    /// running sum gives the arrival time.
    fn prime<O: SimObserver>(&mut self, observer: &mut O) {
        let mut at = SimTime::ZERO;
        let mut id = ClientId(1);
        for _ in 0..self.config.target_served {
            at = at + self.source.next_inter_arrival();
            self.timeline.push(Event::Arrival { time: at, client: id });
            id = id.next();
            self.clients_created += 1;
        }
        self.phase = SimPhase::Running;
        info!(
            "primed {} arrivals over {} agents, last at {at}",
            self.clients_created,
            self.agents.len(),
        );
        observer.on_prime(self.clients_created, at);
    }

    fn drain<O: SimObserver>(&mut self, observer: &mut O) {
        self.phase = SimPhase::Drained;
        let summary = self.summary();
        if summary.exhausted {
            info!(
                "timeline exhausted at {} with {}/{} served",
                self.clock, self.clients_served, self.config.target_served,
            );
        } else {
            info!("served {} clients by {}", self.clients_served, self.clock);
        }
        observer.on_drained(&self.agents, &summary);
    }

    // ── Event handlers ────────────────────────────────────────────────────

    pub(crate) fn handle_arrival<O: SimObserver>(
        &mut self,
        now:      SimTime,
        id:       ClientId,
        observer: &mut O,
    ) -> SimResult<()> {
        if self.clients_served >= self.config.target_served {
            self.clients_rejected += 1;
            debug!("{now}: {id} turned away, target reached");
            observer.on_rejected(now, id);
            return Ok(());
        }

        let loads = self.agents.loads(now);
        let chosen = least_loaded(&self.agents, &loads)
            .ok_or(SimError::NoAgents { client: id, time: now })?;
        debug_assert!(is_least_loaded(&loads, chosen));

        // Difficulty is drawn when the client shows up, not at priming.
        let client = Client::new(id, now, self.source.next_difficulty());
        debug!(
            "{now}: {id} (difficulty {}) -> {chosen} at load {:.2}",
            client.difficulty,
            loads[chosen.index()],
        );
        observer.on_dispatch(now, &client, chosen, &loads);

        self.agents.get_mut(chosen).enqueue(client);
        if self.agents.get(chosen).is_free(now) {
            self.start_service(chosen, now, observer);
        }
        Ok(())
    }

    fn handle_completion<O: SimObserver>(&mut self, done: Completion, observer: &mut O) {
        let now = done.time;
        let agent = self.agents.get_mut(done.agent);
        let client = agent.finish_service(done.client);
        self.clients_served += 1;
        debug!("{now}: {} done with {}", done.agent, client.id);
        observer.on_completion(now, done.agent, &client);

        let agent = self.agents.get(done.agent);
        if agent.is_free(now) && agent.queue_len() > 0 {
            self.start_service(done.agent, now, observer);
        }
    }

    /// Start the head of `agent`'s queue and schedule its completion.
    ///
    /// Callers only get here for a free agent with a non-empty queue.
    fn start_service<O: SimObserver>(&mut self, agent: AgentId, now: SimTime, observer: &mut O) {
        let agent = self.agents.get_mut(agent);
        let (Some(completion), Some(serving)) = (agent.start_next_service(now), agent.serving())
        else {
            panic!("{} cannot start service at {now}: busy or nothing queued", agent.id());
        };
        debug!(
            "{now}: {} starts {} until {}",
            completion.agent, serving.client.id, completion.time,
        );
        observer.on_service_start(now, &serving.client, &completion);
        self.timeline.push(completion);
    }
}
