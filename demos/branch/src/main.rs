//! branch — a three-desk service branch built on the rust_qs simulator.
//!
//! Clients walk in every 0.5–2.0 time units, each with a difficulty of 1–10
//! units, and are sent to whichever desk has the least outstanding work.
//! The run stops once ten clients have been served and prints a per-desk
//! report.
//!
//! Every run draws a fresh seed; it is logged at `info` level so a run can
//! be replayed by pinning it in `SEED`.
//!
//! ```text
//! RUST_LOG=debug cargo run -p branch
//! ```

use anyhow::Result;
use log::info;

use qs_core::SimConfig;
use qs_output::ReportObserver;
use qs_sim::SimBuilder;

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:  usize       = 3;
const TARGET:       u64         = 10;
const INTERVAL_MIN: f64         = 0.5;
const INTERVAL_MAX: f64         = 2.0;
/// `Some(seed)` replays a run exactly.
const SEED:         Option<u64> = None;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = SEED.unwrap_or_else(rand::random);
    let config = SimConfig::new(AGENT_COUNT, TARGET, INTERVAL_MIN, INTERVAL_MAX).with_seed(seed);
    info!(
        "agents: {AGENT_COUNT}  target: {TARGET}  interval: [{INTERVAL_MIN}, {INTERVAL_MAX})  seed: {seed}"
    );

    let mut sim = SimBuilder::new(config).build()?;
    let mut obs = ReportObserver::new();
    let summary = sim.run(&mut obs)?;
    info!(
        "{} events processed, ended at {}",
        summary.events_processed, summary.end_time
    );

    if let Some(report) = obs.take_report() {
        report.write_to(std::io::stdout().lock())?;
    }
    Ok(())
}
