//! `qs-core` — foundational types for the `rust_qs` queueing simulator.
//!
//! This crate is a dependency of every other `qs-*` crate.  It has no
//! `qs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `ClientId`                                      |
//! | [`time`]    | `SimTime` (virtual clock value, totally ordered)           |
//! | [`config`]  | `SimConfig` and its validation                             |
//! | [`rng`]     | `ParameterSource` trait, `UniformSource`, `ScriptedSource` |
//! | [`error`]   | `QsError`, `QsResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, times, and config.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{QsError, QsResult};
pub use ids::{AgentId, ClientId};
pub use rng::{DIFFICULTY_MAX, DIFFICULTY_MIN, ParameterSource, ScriptedSource, UniformSource};
pub use time::SimTime;
