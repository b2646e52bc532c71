//! `qs-output` — the end-of-run report for the rust_qs queueing simulator.
//!
//! The report is a pure projection of the final agent counters: it never
//! mutates simulation state.  Rows are ordered by clients served
//! (descending), then busy time (ascending), then agent id.
//!
//! # Usage
//!
//! ```rust,ignore
//! use qs_output::ReportObserver;
//!
//! let mut obs = ReportObserver::new();
//! sim.run(&mut obs)?;
//! if let Some(report) = obs.take_report() {
//!     print!("{report}");
//! }
//! ```

pub mod error;
pub mod observer;
pub mod report;
pub mod row;


pub use error::{OutputError, OutputResult};
pub use observer::ReportObserver;
pub use report::Report;
pub use row::ReportRow;
