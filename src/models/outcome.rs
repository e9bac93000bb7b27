//! Per-process outcome and the shared timing model.
//!
//! Every discipline reduces to the same three measures once a process's
//! first dispatch and completion times are known.
//!
//! | Measure | Definition |
//! |---------|-----------|
//! | Response | first_start - arrival |
//! | Turnaround | finish - arrival |
//! | Wait | turnaround - burst |

use serde::{Deserialize, Serialize};

/// Response, turnaround and wait for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timing {
    /// Time from arrival to first dispatch.
    pub response: i64,
    /// Time from arrival to completion.
    pub turnaround: i64,
    /// Time spent ready but not running.
    pub wait: i64,
}

/// Derives the timing measures for one process.
///
/// The caller guarantees `finish >= first_start >= arrival`.
#[inline]
pub fn timing(arrival: i64, first_start: i64, finish: i64, burst: i64) -> Timing {
    let turnaround = finish - arrival;
    Timing {
        response: first_start - arrival,
        turnaround,
        wait: turnaround - burst,
    }
}

/// The result of one process under one discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Process index.
    pub index: usize,
    /// Arrival time.
    pub arrival: i64,
    /// Total burst.
    pub burst: i64,
    /// Time of first dispatch.
    pub first_start: i64,
    /// Completion time.
    pub finish: i64,
}

impl ProcessOutcome {
    /// Timing measures derived from this outcome.
    pub fn timing(&self) -> Timing {
        timing(self.arrival, self.first_start, self.finish, self.burst)
    }

    /// first_start - arrival.
    #[inline]
    pub fn response(&self) -> i64 {
        self.first_start - self.arrival
    }

    /// finish - arrival.
    #[inline]
    pub fn turnaround(&self) -> i64 {
        self.finish - self.arrival
    }

    /// turnaround - burst.
    #[inline]
    pub fn wait(&self) -> i64 {
        self.turnaround() - self.burst
    }

    /// Whether `response >= 0`, `wait >= 0` and `turnaround >= burst` hold.
    pub fn is_consistent(&self) -> bool {
        let t = self.timing();
        t.response >= 0 && t.wait >= 0 && t.turnaround >= self.burst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_basic() {
        let t = timing(1, 5, 8, 3);
        assert_eq!(
            t,
            Timing {
                response: 4,
                turnaround: 7,
                wait: 4
            }
        );
    }

    #[test]
    fn test_timing_immediate_dispatch() {
        let t = timing(0, 0, 5, 5);
        assert_eq!(t.response, 0);
        assert_eq!(t.turnaround, 5);
        assert_eq!(t.wait, 0);
    }

    #[test]
    fn test_outcome_accessors_match_timing() {
        let o = ProcessOutcome {
            index: 2,
            arrival: 2,
            burst: 1,
            first_start: 8,
            finish: 9,
        };
        assert_eq!(o.response(), 6);
        assert_eq!(o.turnaround(), 7);
        assert_eq!(o.wait(), 6);
        assert_eq!(o.timing().wait, o.wait());
        assert!(o.is_consistent());
    }

    #[test]
    fn test_inconsistent_outcome() {
        // Finished before its burst could have elapsed
        let o = ProcessOutcome {
            index: 0,
            arrival: 0,
            burst: 10,
            first_start: 0,
            finish: 4,
        };
        assert!(!o.is_consistent());
    }
}
