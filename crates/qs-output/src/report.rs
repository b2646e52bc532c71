//! The sorted end-of-run summary and its text rendering.

use std::cmp::Ordering;
use std::fmt;
use std::io::Write;

use qs_agent::Agent;

use crate::{OutputResult, ReportRow};

const RULE_WIDTH: usize = 58;

/// Per-agent rows plus the global served count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// Sorted: served desc, busy time asc, agent id asc.
    pub rows:         Vec<ReportRow>,
    pub total_served: u64,
    /// Virtual time at which the run ended.
    pub makespan:     f64,
}

impl Report {
    /// Project the final agent state into a report.
    pub fn from_agents<'a>(
        agents:       impl IntoIterator<Item = &'a Agent>,
        total_served: u64,
        makespan:     f64,
    ) -> Self {
        let mut rows: Vec<ReportRow> = agents
            .into_iter()
            .map(|a| ReportRow::from_agent(a, makespan))
            .collect();
        rows.sort_by(report_order);
        Self { rows, total_served, makespan }
    }

    /// Render into any byte sink.
    pub fn write_to<W: Write>(&self, mut out: W) -> OutputResult<()> {
        write!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }
}

fn report_order(a: &ReportRow, b: &ReportRow) -> Ordering {
    b.served
        .cmp(&a.served)
        .then_with(|| a.busy_time.total_cmp(&b.busy_time))
        .then_with(|| a.agent.cmp(&b.agent))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Agent report")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            f,
            "{:<8}{:<10}{:<14}{:<14}{:<12}",
            "Agent", "Served", "Busy time", "Utilization", "Mean wait"
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<8}{:<10}{:<14.2}{:<14}{:<12.2}",
                row.agent.0,
                row.served,
                row.busy_time,
                format!("{:.1}%", row.utilization * 100.0),
                row.mean_wait,
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total clients served: {}", self.total_served)
    }
}
