//! Shortest-Job-First simulator (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Among not-yet-run processes with `arrival <= clock`, select the
//!    shortest burst (SPT), lowest index on ties.
//! 2. If nothing is ready, jump the clock to the earliest pending arrival.
//! 3. Run the selected process to completion.
//!
//! # Complexity
//! O(n²) with the linear selection scan.

use log::debug;

use super::recorder::RunRecorder;
use super::Simulator;
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{Discipline, ProcessTable, SimulationRun};

/// Non-preemptive shortest-burst-first.
#[derive(Debug, Clone)]
pub struct Sjf {
    engine: RuleEngine,
}

impl Sjf {
    /// Creates a new SJF simulator.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new().with_rule(rules::Spt),
        }
    }
}

impl Default for Sjf {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator for Sjf {
    fn discipline(&self) -> Discipline {
        Discipline::Sjf
    }

    fn simulate(&self, table: &ProcessTable) -> SimulationRun {
        let mut recorder = RunRecorder::new(table);
        let mut done = vec![false; table.len()];
        let mut completed = 0;
        let mut clock = 0;

        while completed < table.len() {
            let ctx = SchedulingContext::at_time(clock);
            let ready = table
                .iter()
                .filter(|p| !done[p.index] && ctx.is_ready(p));

            let Some(selected) = self.engine.select_best(ready, &ctx) else {
                let next = table
                    .iter()
                    .filter(|p| !done[p.index])
                    .map(|p| p.arrival)
                    .min();
                match next {
                    Some(arrival) => {
                        debug!("SJF: idle {clock} -> {arrival}");
                        clock = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let start = clock;
            clock += table[selected].burst;
            debug!("SJF: P{selected} runs [{start}, {clock})");
            recorder.dispatch(selected, start, clock);
            recorder.complete(selected, clock);
            done[selected] = true;
            completed += 1;
        }

        recorder.into_run(self.discipline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjf_scenario() {
        let table = ProcessTable::from_pairs(&[(0, 5), (1, 3), (2, 1)]).unwrap();
        let run = Sjf::new().simulate(&table);

        // P0 runs [0,5); then P2 (burst 1) beats P1 (burst 3)
        assert_eq!(run.outcomes[0].finish, 5);
        assert_eq!(run.outcomes[2].first_start, 5);
        assert_eq!(run.outcomes[2].finish, 6);
        assert_eq!(run.outcomes[1].first_start, 6);
        assert_eq!(run.outcomes[1].finish, 9);
    }

    #[test]
    fn test_sjf_never_preempts() {
        let table = ProcessTable::from_pairs(&[(0, 10), (1, 1)]).unwrap();
        let run = Sjf::new().simulate(&table);

        assert_eq!(run.outcomes[0].finish, 10);
        assert_eq!(run.outcomes[1].first_start, 10);
        assert_eq!(run.dispatch_count(), 2);
    }

    #[test]
    fn test_sjf_tie_break_by_index() {
        let table = ProcessTable::from_pairs(&[(0, 3), (0, 3), (0, 3)]).unwrap();
        let run = Sjf::new().simulate(&table);

        let order: Vec<usize> = run.slices.iter().map(|s| s.process).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_sjf_idle_jump_between_groups() {
        // Second group arrives long after the first has drained
        let table = ProcessTable::from_pairs(&[(0, 2), (1, 1), (20, 4), (20, 2)]).unwrap();
        let run = Sjf::new().simulate(&table);

        assert_eq!(run.outcomes[1].finish, 3);
        assert_eq!(run.outcomes[3].first_start, 20);
        assert_eq!(run.outcomes[2].first_start, 22);
        assert_eq!(run.makespan(), 26);
    }

    #[test]
    fn test_sjf_late_first_arrival() {
        let table = ProcessTable::from_pairs(&[(7, 3)]).unwrap();
        let run = Sjf::new().simulate(&table);

        assert_eq!(run.outcomes[0].first_start, 7);
        assert_eq!(run.outcomes[0].response(), 0);
    }
}
