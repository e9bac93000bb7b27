//! Round Robin simulator (fixed quantum).
//!
//! # Algorithm
//!
//! FIFO ready queue. Processes become eligible in `(arrival, index)` order.
//! Each step dequeues the head `p`, runs it for `min(quantum, remaining)`,
//! then enqueues every process that arrived by the end of that slice
//! **before** re-enqueueing `p`. Arrivals during a slice therefore join the
//! queue ahead of the process that just ran.
//!
//! When the queue drains, the clock jumps to the next arrival and every
//! process arriving at exactly that time is enqueued.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::debug;

use super::recorder::RunRecorder;
use super::Simulator;
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{Discipline, ProcessTable, SimulationRun};
use crate::validation::{validate_quantum, ValidationError};

/// Default time quantum.
pub const DEFAULT_QUANTUM: i64 = 100;

/// Preemptive Round Robin with a fixed quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin simulator.
    ///
    /// # Errors
    /// Returns an `InvalidQuantum` error if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self, ValidationError> {
        validate_quantum(quantum)?;
        Ok(Self { quantum })
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
        }
    }
}

/// Admits processes to the ready queue in arrival order.
struct ArrivalCursor<'a> {
    table: &'a ProcessTable,
    order: Vec<usize>,
    next: usize,
}

impl<'a> ArrivalCursor<'a> {
    fn new(table: &'a ProcessTable) -> Self {
        if !table.is_arrival_sorted() {
            debug!("RR: input not sorted by arrival, admitting in arrival order");
        }
        let engine = RuleEngine::new().with_rule(rules::Fifo);
        let order = engine.sort_indices(table.as_slice(), &SchedulingContext::at_time(0));
        Self {
            table,
            order,
            next: 0,
        }
    }

    /// Arrival time of the next process not yet admitted.
    fn peek_arrival(&self) -> Option<i64> {
        self.order.get(self.next).map(|&i| self.table[i].arrival)
    }

    /// Enqueues every not-yet-admitted process with `arrival <= time`.
    fn admit_until(&mut self, time: i64, queue: &mut VecDeque<usize>) {
        while let Some(&index) = self.order.get(self.next) {
            if self.table[index].arrival > time {
                break;
            }
            queue.push_back(index);
            self.next += 1;
        }
    }
}

impl Simulator for RoundRobin {
    fn discipline(&self) -> Discipline {
        Discipline::RoundRobin {
            quantum: self.quantum,
        }
    }

    fn simulate(&self, table: &ProcessTable) -> SimulationRun {
        let mut recorder = RunRecorder::new(table);
        let mut remaining: Vec<i64> = table.iter().map(|p| p.burst).collect();
        let mut arrivals = ArrivalCursor::new(table);
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(table.len());
        let mut completed = 0;

        let mut clock = arrivals.peek_arrival().unwrap_or(0);
        arrivals.admit_until(clock, &mut queue);

        while completed < table.len() {
            let Some(p) = queue.pop_front() else {
                let Some(arrival) = arrivals.peek_arrival() else {
                    break;
                };
                debug!("RR: idle {clock} -> {arrival}");
                clock = arrival;
                arrivals.admit_until(clock, &mut queue);
                continue;
            };

            let slice = self.quantum.min(remaining[p]);
            let end = clock + slice;
            debug!("RR: P{p} runs [{clock}, {end})");
            recorder.dispatch(p, clock, end);

            // Arrivals during the slice go ahead of the preempted process
            arrivals.admit_until(end, &mut queue);

            remaining[p] -= slice;
            clock = end;
            if remaining[p] == 0 {
                recorder.complete(p, clock);
                completed += 1;
            } else {
                queue.push_back(p);
            }
        }

        recorder.into_run(self.discipline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn rr(quantum: i64) -> RoundRobin {
        RoundRobin::new(quantum).unwrap()
    }

    #[test]
    fn test_rr_rejects_non_positive_quantum() {
        assert_eq!(
            RoundRobin::new(0).unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
        assert!(RoundRobin::new(-1).is_err());
        assert_eq!(RoundRobin::default().quantum(), 100);
    }

    #[test]
    fn test_rr_scenario() {
        let table = ProcessTable::from_pairs(&[(0, 5), (1, 3), (2, 1)]).unwrap();
        let run = rr(2).simulate(&table);

        // [0,2) P0; P1,P2 arrive → queue P1 P2 P0
        // [2,4) P1; [4,5) P2 done; [5,7) P0; [7,8) P1 done; [8,9) P0 done
        let order: Vec<(usize, i64, i64)> =
            run.slices.iter().map(|s| (s.process, s.start, s.end)).collect();
        assert_eq!(
            order,
            vec![(0, 0, 2), (1, 2, 4), (2, 4, 5), (0, 5, 7), (1, 7, 8), (0, 8, 9)]
        );
        assert_eq!(run.outcomes[0].finish, 9);
        assert_eq!(run.outcomes[1].finish, 8);
        assert_eq!(run.outcomes[2].finish, 5);
        assert_eq!(run.outcomes[2].first_start, 4);
    }

    #[test]
    fn test_rr_arrival_at_slice_end_queues_before_preempted() {
        // P1 arrives exactly when P0's slice ends: P1 must run next
        let table = ProcessTable::from_pairs(&[(0, 4), (2, 2)]).unwrap();
        let run = rr(2).simulate(&table);

        assert_eq!(run.outcomes[1].first_start, 2);
        assert_eq!(run.outcomes[1].finish, 4);
        assert_eq!(run.outcomes[0].finish, 6);
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs_order() {
        let table = ProcessTable::from_pairs(&[(0, 5), (1, 3), (2, 1)]).unwrap();
        let run = rr(100).simulate(&table);

        let finishes: Vec<i64> = run.outcomes.iter().map(|o| o.finish).collect();
        assert_eq!(finishes, vec![5, 8, 9]);
    }

    #[test]
    fn test_rr_idle_jump_admits_simultaneous_arrivals() {
        let table = ProcessTable::from_pairs(&[(0, 1), (10, 3), (10, 3)]).unwrap();
        let run = rr(2).simulate(&table);

        assert_eq!(run.outcomes[1].first_start, 10);
        assert_eq!(run.outcomes[2].first_start, 12);
        assert_eq!(run.outcomes[1].finish, 15);
        assert_eq!(run.outcomes[2].finish, 16);
    }

    #[test]
    fn test_rr_starts_at_first_arrival() {
        let table = ProcessTable::from_pairs(&[(3, 2)]).unwrap();
        let run = rr(1).simulate(&table);

        assert_eq!(run.outcomes[0].first_start, 3);
        assert_eq!(run.outcomes[0].finish, 5);
        // Two quantum-1 dispatches back to back coalesce into one slice
        assert_eq!(run.dispatch_count(), 1);
    }

    #[test]
    fn test_rr_unsorted_input_uses_arrival_order() {
        // Index 0 arrives last; admission still follows arrival time
        let table = ProcessTable::from_pairs(&[(6, 2), (0, 2), (1, 2)]).unwrap();
        let run = rr(5).simulate(&table);

        assert_eq!(run.outcomes[1].first_start, 0);
        assert_eq!(run.outcomes[2].first_start, 2);
        assert_eq!(run.outcomes[0].first_start, 6);
        assert!(run.outcomes.iter().all(|o| o.is_consistent()));
    }
}
