//! `qs-schedule` — events and the event timeline.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`event`]    | `Event` (`Arrival`, `Completion`), `Completion`           |
//! | [`timeline`] | `EventTimeline` (min-time `BinaryHeap`)                   |
//!
//! # Ordering
//!
//! Events pop in ascending time.  Events with equal times pop in the order
//! they were pushed:
//!
//! ```text
//! key = (time, push sequence)
//! ```
//!
//! Because the whole arrival schedule is pushed during priming, an arrival
//! and a completion at the same instant are handled arrival first.

pub mod event;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use event::{Completion, Event, EventKind};
pub use timeline::EventTimeline;
