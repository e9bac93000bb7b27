//! First-Come-First-Served simulator.
//!
//! # Algorithm
//!
//! Processes run to completion in table (index) order. For process `i`:
//! `start = max(clock, arrival[i])`, `finish = start + burst[i]`,
//! `clock = finish`. The table need not be sorted by arrival; the clock
//! simply catches up.
//!
//! # Complexity
//! O(n).

use log::debug;

use super::recorder::RunRecorder;
use super::Simulator;
use crate::models::{Discipline, ProcessTable, SimulationRun};

/// Non-preemptive, index-ordered run-to-completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Fcfs {
    /// Creates a new FCFS simulator.
    pub fn new() -> Self {
        Self
    }
}

impl Simulator for Fcfs {
    fn discipline(&self) -> Discipline {
        Discipline::Fcfs
    }

    fn simulate(&self, table: &ProcessTable) -> SimulationRun {
        let mut recorder = RunRecorder::new(table);
        let mut clock = 0;

        for process in table {
            let start = clock.max(process.arrival);
            if start > clock {
                debug!("FCFS: idle {clock} -> {start}");
            }
            clock = start + process.burst;
            debug!("FCFS: P{} runs [{start}, {clock})", process.index);
            recorder.dispatch(process.index, start, clock);
            recorder.complete(process.index, clock);
        }

        recorder.into_run(self.discipline())
    }
}
