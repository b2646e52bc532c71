//! `AgentPool` — the fixed-size collection of agents owned by the simulation.
//!
//! Agent `i` lives at index `i`, so `AgentId` doubles as a `Vec` index:
//!
//! ```ignore
//! let load = pool.get(agent).current_load(now);  // O(1)
//! ```

use qs_core::{AgentId, SimTime};

use crate::Agent;

/// All agents of a run, indexed by `AgentId`.
#[derive(Debug, Clone)]
pub struct AgentPool {
    agents: Vec<Agent>,
}

impl AgentPool {
    /// Create `count` idle agents with ids `0..count`.
    ///
    /// # Panics
    /// If `count` exceeds the `AgentId` range; `SimConfig::validate` rejects
    /// such configurations before a pool is built.
    pub fn new(count: usize) -> Self {
        let count = u32::try_from(count)
            .unwrap_or_else(|_| panic!("agent count {count} overflows AgentId"));
        Self { agents: (0..count).map(|i| Agent::new(AgentId(i))).collect() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> &Agent {
        &self.agents[agent.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut Agent {
        &mut self.agents[agent.index()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(Agent::id)
    }

    /// Every agent's load at `now`, indexed by `AgentId`.
    pub fn loads(&self, now: SimTime) -> Vec<f64> {
        self.agents.iter().map(|a| a.current_load(now)).collect()
    }

    /// Sum of per-agent `served` counters.
    pub fn total_served(&self) -> u64 {
        self.agents.iter().map(|a| a.served).sum()
    }
}

impl<'a> IntoIterator for &'a AgentPool {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}
