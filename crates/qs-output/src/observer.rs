//! `ReportObserver` — builds the [`Report`] when the run drains.

use qs_agent::AgentPool;
use qs_sim::{RunSummary, SimObserver};

use crate::Report;

/// A [`SimObserver`] that captures the final report on `on_drained`.
#[derive(Default)]
pub struct ReportObserver {
    report: Option<Report>,
}

impl ReportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The report, once the run has drained.
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn take_report(&mut self) -> Option<Report> {
        self.report.take()
    }
}

impl SimObserver for ReportObserver {
    fn on_drained(&mut self, agents: &AgentPool, summary: &RunSummary) {
        self.report = Some(Report::from_agents(
            agents,
            summary.clients_served,
            summary.end_time.as_f64(),
        ));
    }
}
