//! Discrete-event CPU scheduling simulators and statistics.
//!
//! Four disciplines share one timing model and one contract: a simulator
//! reads an immutable [`ProcessTable`], keeps all of its mutable state
//! (clock, remaining time, ready queue) private to a single invocation, and
//! returns a complete [`SimulationRun`]. Running the same simulator twice on
//! the same table yields identical runs.
//!
//! | Simulator | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | `Fcfs` | no | table order |
//! | `Sjf` | no | shortest burst |
//! | `Srtf` | yes | shortest remaining time, re-evaluated at each arrival |
//! | `RoundRobin` | yes | FIFO queue, fixed quantum |
//!
//! # Stats
//!
//! `Stats` reduces a run to mean response, turnaround and wait time.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

mod fcfs;
mod kpi;
mod recorder;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use kpi::Stats;
pub use round_robin::{RoundRobin, DEFAULT_QUANTUM};
pub use sjf::Sjf;
pub use srtf::Srtf;

use crate::models::{Discipline, ProcessTable, SimulationRun};

/// A single-CPU scheduling discipline.
pub trait Simulator: std::fmt::Debug {
    /// The discipline this simulator implements.
    fn discipline(&self) -> Discipline;

    /// Runs the discipline over the table.
    ///
    /// Allocates fresh state on every call and never mutates the table.
    fn simulate(&self, table: &ProcessTable) -> SimulationRun;
}

/// The four simulators in report order: FCFS, SJF, SRTF, RR.
pub fn all_simulators(round_robin: RoundRobin) -> Vec<Box<dyn Simulator>> {
    vec![
        Box::new(Fcfs::new()),
        Box::new(Sjf::new()),
        Box::new(Srtf::new()),
        Box::new(round_robin),
    ]
}
