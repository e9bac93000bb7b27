//! Run statistics.
//!
//! Reduces a completed simulation run to the standard per-discipline
//! performance indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Response | mean(first_start - arrival) |
//! | Avg Turnaround | mean(finish - arrival) |
//! | Avg Wait | mean(turnaround - burst) |
//! | Makespan | Latest finish time |
//! | CPU Utilization | busy time / (makespan - earliest arrival) |

use serde::{Deserialize, Serialize};

use crate::models::{ProcessOutcome, SimulationRun};

/// Performance indicators for one discipline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Mean response time.
    pub avg_response: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_wait: f64,
    /// Latest finish time.
    pub makespan: i64,
    /// Fraction of the active horizon the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
}

impl Stats {
    /// Computes statistics from a completed run.
    pub fn calculate(run: &SimulationRun) -> Self {
        Self::from_outcomes(&run.outcomes)
    }

    /// Computes statistics from per-process outcomes.
    ///
    /// All means are unweighted. An empty slice yields all zeros.
    pub fn from_outcomes(outcomes: &[ProcessOutcome]) -> Self {
        if outcomes.is_empty() {
            return Self::default();
        }

        // Sums of many large times can exceed i64 even when each time fits
        let mut total_response: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_wait: i128 = 0;
        for o in outcomes {
            let t = o.timing();
            total_response += i128::from(t.response);
            total_turnaround += i128::from(t.turnaround);
            total_wait += i128::from(t.wait);
        }
        let n = outcomes.len() as f64;

        let makespan = outcomes.iter().map(|o| o.finish).max().unwrap_or(0);
        let earliest = outcomes.iter().map(|o| o.arrival).min().unwrap_or(0);
        let busy: i128 = outcomes.iter().map(|o| i128::from(o.burst)).sum();
        let horizon = i128::from(makespan) - i128::from(earliest);
        let cpu_utilization = if horizon <= 0 {
            1.0
        } else {
            busy as f64 / horizon as f64
        };

        Self {
            avg_response: total_response as f64 / n,
            avg_turnaround: total_turnaround as f64 / n,
            avg_wait: total_wait as f64 / n,
            makespan,
            cpu_utilization,
        }
    }
}
