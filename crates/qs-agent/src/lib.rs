//! `qs-agent` — service agents for the `rust_qs` queueing simulator.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`client`] | `Client` (id, arrival time, difficulty)                      |
//! | [`agent`]  | `Agent`, `ServiceState`, `InService`                         |
//! | [`pool`]   | `AgentPool` — the fixed-size agent collection                |
//!
//! # Ownership model
//!
//! A [`Client`] is owned by exactly one place at a time: the controller while
//! it travels inside an arrival, an agent's waiting queue, or that same
//! agent's [`ServiceState::Serving`] slot.  The move from queue to slot
//! happens only in [`Agent::start_next_service`], and the slot is released
//! only by [`Agent::finish_service`].

pub mod agent;
pub mod client;
pub mod pool;


pub use agent::{Agent, InService, ServiceState};
pub use client::Client;
pub use pool::AgentPool;
