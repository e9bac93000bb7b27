//! Simulation run (solution) model.
//!
//! A run is the complete result of one discipline over one process table:
//! the dispatch trace (which process held the CPU, and when) and the
//! per-process outcomes derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProcessOutcome;

/// A scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// First-Come-First-Served, non-preemptive.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Shortest-Remaining-Time-First, preemptive.
    Srtf,
    /// Round Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous time per dispatch.
        quantum: i64,
    },
}

impl Discipline {
    /// Short name (e.g., "FCFS", "RR").
    pub fn short_name(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
            Discipline::Srtf => "SRTF",
            Discipline::RoundRobin { .. } => "RR",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Discipline::Srtf | Discipline::RoundRobin { .. })
    }
}

/// Report heading for the discipline.
impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::Fcfs => write!(f, "First Come, First Served"),
            Discipline::Sjf => write!(f, "Shortest Job First"),
            Discipline::Srtf => write!(f, "Shortest Remaining Time First"),
            Discipline::RoundRobin { quantum } => {
                write!(f, "Round Robin with Time Quantum of {quantum}")
            }
        }
    }
}

/// One contiguous interval during which a process holds the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process index.
    pub process: usize,
    /// Dispatch time.
    pub start: i64,
    /// Time the CPU is released.
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process: usize, start: i64, end: i64) -> Self {
        Self {
            process,
            start,
            end,
        }
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// The result of running one discipline over a process table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// Discipline that produced this run.
    pub discipline: Discipline,
    /// Dispatch trace in time order.
    pub slices: Vec<Slice>,
    /// Per-process outcomes in index order.
    pub outcomes: Vec<ProcessOutcome>,
}

impl SimulationRun {
    /// Latest finish time; 0 for an empty run.
    pub fn makespan(&self) -> i64 {
        self.outcomes.iter().map(|o| o.finish).max().unwrap_or(0)
    }

    /// All slices for one process, in time order.
    pub fn slices_for(&self, process: usize) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.process == process).collect()
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Number of slices (coalesced dispatches).
    pub fn dispatch_count(&self) -> usize {
        self.slices.len()
    }

    /// Whether slices are non-empty, time-ordered and non-overlapping.
    pub fn is_well_formed(&self) -> bool {
        self.slices.iter().all(|s| s.end > s.start)
            && self.slices.windows(2).all(|w| w[0].end <= w[1].start)
    }
}
