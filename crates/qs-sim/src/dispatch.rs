//! Least-loaded dispatch.

use std::cmp::Ordering;

use qs_agent::AgentPool;
use qs_core::AgentId;

/// Pick the agent with the smallest load.
///
/// `loads[i]` is agent `i`'s pre-enqueue load.  Exact ties go to the lowest
/// `AgentId`.  Returns `None` only for an empty pool.
pub fn least_loaded(agents: &AgentPool, loads: &[f64]) -> Option<AgentId> {
    debug_assert_eq!(agents.len(), loads.len());
    agents
        .iter()
        .zip(loads)
        .min_by(|(a, la), (b, lb)| la.total_cmp(lb).then_with(|| a.id().cmp(&b.id())))
        .map(|(agent, _)| agent.id())
}

/// `true` if `chosen` is a valid least-loaded pick for `loads`.
pub fn is_least_loaded(loads: &[f64], chosen: AgentId) -> bool {
    let picked = loads[chosen.index()];
    loads.iter().all(|l| picked.total_cmp(l) != Ordering::Greater)
}
