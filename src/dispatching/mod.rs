//! Dispatching rules and rule engine for CPU selection.
//!
//! Provides the priority rules that decide which ready process gets the
//! CPU next (SPT for SJF, SRPT for SRTF, FIFO for arrival ordering) and an
//! engine that applies them with a deterministic lowest-index tie-break.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{rules, RuleEngine, SchedulingContext};
//! use cpu_sched::models::ProcessTable;
//!
//! let table = ProcessTable::from_pairs(&[(0, 5), (0, 2), (0, 2)]).unwrap();
//! let engine = RuleEngine::new().with_rule(rules::Spt);
//! let context = SchedulingContext::at_time(0);
//!
//! // Equal bursts: the lower index wins
//! assert_eq!(engine.select_best(table.iter(), &context), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Scores are integer
/// time values so comparisons are exact.
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Ties are never broken by the rule
/// itself; the engine falls through to the next rule and finally to the
/// process index.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "SRPT").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process at the current scheduling state.
    fn evaluate(&self, process: &Process, context: &SchedulingContext<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
