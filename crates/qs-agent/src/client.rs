//! The unit of work routed to agents.

use qs_core::{ClientId, SimTime};

/// A client waiting for, or receiving, service.
///
/// Immutable once created.  `difficulty` is the service duration in virtual
/// time units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Client {
    pub id:         ClientId,
    pub arrival:    SimTime,
    pub difficulty: u32,
}

impl Client {
    #[inline]
    pub fn new(id: ClientId, arrival: SimTime, difficulty: u32) -> Self {
        Self { id, arrival, difficulty }
    }

    /// Service duration as a clock offset.
    #[inline]
    pub fn service_time(&self) -> f64 {
        f64::from(self.difficulty)
    }
}
