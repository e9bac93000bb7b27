//! Built-in dispatching rules.
//!
//! - **SPT**: shortest total burst (SJF)
//! - **SRPT**: shortest remaining time (SRTF)
//! - **FIFO**: earliest arrival (FCFS order, Round Robin admission)
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// Shortest Processing Time.
///
/// Prioritizes processes with the shortest total burst. Optimal for mean
/// waiting time among non-preemptive disciplines when all jobs are
/// available at once.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext<'_>) -> RuleScore {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Shortest Remaining Processing Time.
///
/// Uses `context.remaining` if available, falls back to the total burst
/// for processes that have not run yet.
///
/// # Reference
/// Schrage (1968), optimal for mean flow time with preemption.
#[derive(Debug, Clone, Copy)]
pub struct Srpt;

impl DispatchingRule for Srpt {
    fn name(&self) -> &'static str {
        "SRPT"
    }

    fn evaluate(&self, process: &Process, context: &SchedulingContext<'_>) -> RuleScore {
        context
            .remaining_for(process.index)
            .unwrap_or(process.burst)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Processing Time"
    }
}

/// First In, First Out.
///
/// Prioritizes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext<'_>) -> RuleScore {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "First In, First Out"
    }
}
