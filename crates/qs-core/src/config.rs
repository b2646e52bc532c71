//! Run configuration.

use crate::{QsError, QsResult};

/// Parameters fixed at simulation start.
///
/// Built in code by the caller; there is no runtime reconfiguration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of parallel service agents (`n`).
    pub agent_count: usize,

    /// Clients to serve before stopping (`m`).  Also the number of arrivals
    /// generated during priming.
    pub target_served: u64,

    /// Lower bound of the inter-arrival interval (inclusive).
    pub interval_min: f64,

    /// Upper bound of the inter-arrival interval (exclusive unless equal to
    /// `interval_min`).
    pub interval_max: f64,

    /// Master RNG seed.  `None` seeds from OS entropy; the same `Some(seed)`
    /// always produces identical results.
    pub seed: Option<u64>,
}

impl SimConfig {
    pub fn new(agent_count: usize, target_served: u64, interval_min: f64, interval_max: f64) -> Self {
        Self {
            agent_count,
            target_served,
            interval_min,
            interval_max,
            seed: None,
        }
    }

    /// Same configuration with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> QsResult<()> {
        if self.agent_count == 0 {
            return Err(QsError::Config("agent count must be positive".into()));
        }
        if u32::try_from(self.agent_count).is_err() {
            return Err(QsError::Config(format!(
                "agent count {} exceeds the AgentId range",
                self.agent_count
            )));
        }
        if self.target_served == 0 {
            return Err(QsError::Config("target client count must be positive".into()));
        }
        if !self.interval_min.is_finite() || !self.interval_max.is_finite() {
            return Err(QsError::Config("interval bounds must be finite".into()));
        }
        if self.interval_min <= 0.0 {
            return Err(QsError::Config(format!(
                "interval lower bound must be positive, got {}",
                self.interval_min
            )));
        }
        if self.interval_min > self.interval_max {
            return Err(QsError::Config(format!(
                "inverted interval bounds: {} > {}",
                self.interval_min, self.interval_max
            )));
        }
        Ok(())
    }
}
