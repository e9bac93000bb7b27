//! Batch runner and report formatting.
//!
//! Validates a batch, runs the four disciplines in the fixed order
//! FCFS → SJF → SRTF → RR and reduces each run to [`Stats`]. Reporting is
//! all-or-nothing: any validation error withholds the whole report.
//!
//! # Text Format
//!
//! ```text
//! First Come, First Served
//! Avg. Resp.:3.33, Avg. T.A.:6.33, Avg. Wait:3.33
//!
//! Shortest Job First
//! ...
//! ```

use std::fmt::{self, Write as _};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::models::{Discipline, ProcessTable, SimulationRun};
use crate::scheduler::{all_simulators, RoundRobin, Stats};
use crate::validation::ValidationError;

/// Result of one discipline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineReport {
    /// Discipline.
    pub discipline: Discipline,
    /// Report heading (e.g., "Shortest Job First").
    pub label: String,
    /// Aggregated statistics.
    pub stats: Stats,
    /// Full run: per-process outcomes and dispatch trace.
    pub run: SimulationRun,
}

/// The four discipline reports for one batch, in fixed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Round Robin quantum used.
    pub quantum: i64,
    /// FCFS, SJF, SRTF, RR.
    pub entries: Vec<DisciplineReport>,
}

impl Report {
    /// Runs every discipline over a validated table.
    pub fn generate(table: &ProcessTable, round_robin: RoundRobin) -> Self {
        let entries = all_simulators(round_robin)
            .iter()
            .map(|sim| {
                let run = sim.simulate(table);
                let stats = Stats::calculate(&run);
                info!(
                    "{}: resp {:.2}, ta {:.2}, wait {:.2}",
                    run.discipline.short_name(),
                    stats.avg_response,
                    stats.avg_turnaround,
                    stats.avg_wait
                );
                DisciplineReport {
                    discipline: run.discipline,
                    label: run.discipline.to_string(),
                    stats,
                    run,
                }
            })
            .collect();

        Self {
            quantum: round_robin.quantum(),
            entries,
        }
    }

    /// Report entry for a discipline.
    pub fn entry(&self, discipline: Discipline) -> Option<&DisciplineReport> {
        self.entries.iter().find(|e| e.discipline == discipline)
    }

    /// Text report with each discipline's dispatch trace appended.
    pub fn to_text_with_trace(&self) -> String {
        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            write_entry(&mut out, entry);
            out.push_str("Trace:");
            for s in &entry.run.slices {
                let _ = write!(out, " P{}[{}-{}]", s.process, s.start, s.end);
            }
            out.push('\n');
        }
        out
    }

    /// JSON rendering of the full report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn write_entry(out: &mut String, entry: &DisciplineReport) {
    let _ = writeln!(out, "{}", entry.label);
    let _ = writeln!(
        out,
        "Avg. Resp.:{:.2}, Avg. T.A.:{:.2}, Avg. Wait:{:.2}",
        entry.stats.avg_response, entry.stats.avg_turnaround, entry.stats.avg_wait
    );
}

/// The four blocks separated by blank lines.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            write_entry(&mut out, entry);
        }
        f.write_str(&out)
    }
}

/// Validates and runs a batch.
///
/// # Returns
/// - `Ok(None)` for an empty batch (nothing to report).
/// - `Ok(Some(report))` when every process and the quantum are valid.
/// - `Err(errors)` with every validation failure otherwise; no simulator
///   has run.
pub fn run_batch(
    pairs: &[(i64, i64)],
    config: &SimulationConfig,
) -> Result<Option<Report>, Vec<ValidationError>> {
    if pairs.is_empty() {
        info!("empty batch, nothing to simulate");
        return Ok(None);
    }

    let table = ProcessTable::from_pairs(pairs);
    let round_robin = RoundRobin::new(config.quantum);
    let (table, round_robin) = match (table, round_robin) {
        (Ok(table), Ok(round_robin)) => (table, round_robin),
        (table, round_robin) => {
            let mut errors = table.err().unwrap_or_default();
            errors.extend(round_robin.err());
            for e in &errors {
                warn!("rejected batch: {e}");
            }
            return Err(errors);
        }
    };

    info!(
        "simulating {} processes, quantum {}",
        table.len(),
        round_robin.quantum()
    );
    Ok(Some(Report::generate(&table, round_robin)))
}
