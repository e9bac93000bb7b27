//! Scheduling context for dispatching rule evaluation.

use crate::models::Process;

/// Runtime scheduling state passed to dispatching rules.
///
/// Borrows the simulator's private remaining-time buffer so rules can read
/// it without copying. A context never outlives the decision it serves.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchedulingContext<'a> {
    /// Current simulation clock.
    pub clock: i64,
    /// Remaining CPU time per process index, if the simulator tracks it.
    pub remaining: Option<&'a [i64]>,
}

impl<'a> SchedulingContext<'a> {
    /// Creates a context at the given time.
    pub fn at_time(clock: i64) -> Self {
        Self {
            clock,
            remaining: None,
        }
    }

    /// Attaches the remaining-time buffer.
    pub fn with_remaining(mut self, remaining: &'a [i64]) -> Self {
        self.remaining = Some(remaining);
        self
    }

    /// Remaining time of a process, if tracked.
    pub fn remaining_for(&self, index: usize) -> Option<i64> {
        self.remaining.and_then(|r| r.get(index).copied())
    }

    /// Whether a process may be dispatched now: it has arrived by `clock`
    /// and, when remaining time is tracked, still has work left.
    pub fn is_ready(&self, process: &Process) -> bool {
        process.has_arrived(self.clock)
            && !matches!(self.remaining_for(process.index), Some(left) if left <= 0)
    }
}
