//! Scheduling domain models.
//!
//! Provides the core data types for a single-CPU scheduling batch and
//! its results.
//!
//! # Domain Mappings
//!
//! | cpu-sched | Textbook term |
//! |-----------|---------------|
//! | Process | Job / CPU burst |
//! | ProcessTable | Workload |
//! | Slice | Gantt chart bar |
//! | SimulationRun | Schedule |
//! | ProcessOutcome | Per-job metrics |

mod outcome;
mod process;
mod schedule;

pub use outcome::{timing, ProcessOutcome, Timing};
pub use process::{Process, ProcessTable};
pub use schedule::{Discipline, SimulationRun, Slice};
