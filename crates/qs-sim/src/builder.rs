//! Fluent builder for constructing a [`Sim`].

use qs_agent::AgentPool;
use qs_core::{ParameterSource, SimConfig, SimTime, UniformSource};
use qs_schedule::EventTimeline;

use crate::{Sim, SimPhase, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Inputs
///
/// | Method         | Default                                                  |
/// |----------------|----------------------------------------------------------|
/// | `new(config)`  | required                                                 |
/// | `.source(s)`   | `UniformSource` over the config's interval bounds, seeded from `config.seed` (entropy when `None`) |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .source(ScriptedSource::new([0.0, 1.0, 1.0], [2, 5, 1]))
///     .build()?;
/// ```
pub struct SimBuilder<S: ParameterSource> {
    config: SimConfig,
    source: S,
}

impl SimBuilder<UniformSource> {
    pub fn new(config: SimConfig) -> Self {
        let source = match config.seed {
            Some(seed) => UniformSource::new(config.interval_min, config.interval_max, seed),
            None => UniformSource::from_entropy(config.interval_min, config.interval_max),
        };
        Self { config, source }
    }
}

impl<S: ParameterSource> SimBuilder<S> {
    /// Replace the parameter source (e.g. a `ScriptedSource` for a
    /// hand-checked scenario).
    pub fn source<T: ParameterSource>(self, source: T) -> SimBuilder<T> {
        SimBuilder { config: self.config, source }
    }

    /// Validate the configuration and return a [`Sim`] in the Priming phase.
    ///
    /// No event is generated before validation succeeds.
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;

        Ok(Sim {
            agents:           AgentPool::new(self.config.agent_count),
            config:           self.config,
            timeline:         EventTimeline::new(),
            source:           self.source,
            phase:            SimPhase::Priming,
            clock:            SimTime::ZERO,
            clients_created:  0,
            clients_served:   0,
            clients_rejected: 0,
            events_processed: 0,
        })
    }
}
