//! Plain data row type for the report.

use qs_agent::Agent;
use qs_core::AgentId;

/// Final counters of one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReportRow {
    pub agent:       AgentId,
    pub served:      u64,
    /// Cumulative service time.
    pub busy_time:   f64,
    /// Mean time a client spent queued before service.
    pub mean_wait:   f64,
    /// `busy_time / makespan`, in `[0, 1]`.  `0.0` for a zero-length run.
    pub utilization: f64,
}

impl ReportRow {
    pub fn from_agent(agent: &Agent, makespan: f64) -> Self {
        let utilization = if makespan > 0.0 {
            (agent.busy_time / makespan).min(1.0)
        } else {
            0.0
        };
        Self {
            agent: agent.id(),
            served: agent.served,
            busy_time: agent.busy_time,
            mean_wait: agent.mean_wait(),
            utilization,
        }
    }
}
