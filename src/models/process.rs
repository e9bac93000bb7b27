//! Process and process table model.
//!
//! A process is a single pure-CPU burst with a known length and an arrival
//! time. The process table is the immutable batch every simulator reads.
//!
//! # Time Representation
//! All times are integer time units relative to t=0. The consumer defines
//! what a unit means (ticks, milliseconds).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use crate::validation::{validate_processes, ValidationError};

/// A process to be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// 0-based identity, stable across all simulators.
    pub index: usize,
    /// Time the process becomes ready.
    pub arrival: i64,
    /// Total CPU time the process requires.
    pub burst: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(index: usize, arrival: i64, burst: i64) -> Self {
        Self {
            index,
            arrival,
            burst,
        }
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: i64) -> bool {
        self.arrival <= clock
    }
}

/// The immutable batch of processes for one run.
///
/// Positions equal process indices. A table can only be built from
/// validated input, so every simulator may rely on `arrival >= 0` and
/// `burst > 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Builds a table from `(arrival, burst)` pairs in input order.
    ///
    /// # Errors
    /// Returns every validation failure found (negative arrival, non-positive
    /// burst, a time horizon past `i64::MAX`). No table is produced if any
    /// pair is invalid.
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Result<Self, Vec<ValidationError>> {
        validate_processes(pairs)?;
        let processes = pairs
            .iter()
            .enumerate()
            .map(|(index, &(arrival, burst))| Process::new(index, arrival, burst))
            .collect();
        Ok(Self { processes })
    }

    /// Number of processes.
    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Process at `index`.
    pub fn get(&self, index: usize) -> Option<&Process> {
        self.processes.get(index)
    }

    /// Iterates processes in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// All processes as a slice.
    pub fn as_slice(&self) -> &[Process] {
        &self.processes
    }

    /// Sum of all bursts.
    pub fn total_burst(&self) -> i64 {
        self.processes.iter().map(|p| p.burst).sum()
    }

    /// Earliest arrival time, or `None` for an empty table.
    pub fn earliest_arrival(&self) -> Option<i64> {
        self.processes.iter().map(|p| p.arrival).min()
    }

    /// Whether arrivals are non-decreasing in index order.
    pub fn is_arrival_sorted(&self) -> bool {
        self.processes
            .windows(2)
            .all(|w| w[0].arrival <= w[1].arrival)
    }
}

impl std::ops::Index<usize> for ProcessTable {
    type Output = Process;

    fn index(&self, index: usize) -> &Process {
        &self.processes[index]
    }
}

impl<'a> IntoIterator for &'a ProcessTable {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
