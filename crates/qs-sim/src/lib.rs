//! `qs-sim` — event loop controller for the rust_qs queueing simulator.
//!
//! # Run phases
//!
//! ```text
//! Priming  — draw one inter-arrival gap per client, push every Arrival.
//! Running  — pop the earliest event:
//!              Arrival(t, c)          → ignored once served == target;
//!                                       else dispatch to the least-loaded
//!                                       agent, draw difficulty, enqueue,
//!                                       start service if the agent is free.
//!              Completion(t, c, a)    → finish on agent a, served += 1,
//!                                       start the next queued client.
//!            until the timeline is empty or served == target.
//! Drained  — observers get the final agent state (reporting).
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use qs_core::SimConfig;
//! use qs_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::new(3, 10, 0.5, 2.0).with_seed(42);
//! let mut sim = SimBuilder::new(config).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! assert_eq!(summary.clients_served, 10);
//! ```

pub mod builder;
pub mod dispatch;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use dispatch::least_loaded;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunSummary, Sim, SimPhase};
