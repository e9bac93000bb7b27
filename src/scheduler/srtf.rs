//! Shortest-Remaining-Time-First simulator (preemptive).
//!
//! # Algorithm
//!
//! Each step:
//! 1. Among incomplete processes with `arrival <= clock`, select the
//!    shortest remaining time (SRPT), lowest index on ties. The process
//!    that just ran competes like any other.
//! 2. If nothing is ready, jump to the earliest pending arrival.
//! 3. Run the selected process until the next arrival strictly after
//!    `clock` or its completion, whichever comes first.
//!
//! Step 3 is an event horizon rather than unit time-stepping: the CPU
//! never runs past an arrival that could preempt.
//!
//! # Complexity
//! O(n²): at most 2n steps (one per arrival, one per completion), each a
//! linear scan.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use log::debug;

use super::recorder::RunRecorder;
use super::Simulator;
use crate::dispatching::{rules, RuleEngine, SchedulingContext};
use crate::models::{Discipline, ProcessTable, SimulationRun};

/// Preemptive shortest-remaining-time-first.
#[derive(Debug, Clone)]
pub struct Srtf {
    engine: RuleEngine,
}

impl Srtf {
    /// Creates a new SRTF simulator.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new().with_rule(rules::Srpt),
        }
    }
}

impl Default for Srtf {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator for Srtf {
    fn discipline(&self) -> Discipline {
        Discipline::Srtf
    }

    fn simulate(&self, table: &ProcessTable) -> SimulationRun {
        let mut recorder = RunRecorder::new(table);
        let mut remaining: Vec<i64> = table.iter().map(|p| p.burst).collect();
        let mut completed = 0;
        let mut clock = 0;

        while completed < table.len() {
            let ctx = SchedulingContext::at_time(clock).with_remaining(&remaining);
            let ready = table.iter().filter(|p| ctx.is_ready(p));

            let Some(selected) = self.engine.select_best(ready, &ctx) else {
                let next = table
                    .iter()
                    .filter(|p| remaining[p.index] > 0)
                    .map(|p| p.arrival)
                    .min();
                match next {
                    Some(arrival) => {
                        debug!("SRTF: idle {clock} -> {arrival}");
                        clock = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let next_arrival = table
                .iter()
                .filter(|p| remaining[p.index] > 0 && p.arrival > clock)
                .map(|p| p.arrival)
                .min();
            let run_for = match next_arrival {
                Some(arrival) => remaining[selected].min(arrival - clock),
                None => remaining[selected],
            };

            let start = clock;
            clock += run_for;
            remaining[selected] -= run_for;
            debug!(
                "SRTF: P{selected} runs [{start}, {clock}), {} left",
                remaining[selected]
            );
            recorder.dispatch(selected, start, clock);

            if remaining[selected] == 0 {
                recorder.complete(selected, clock);
                completed += 1;
            }
        }

        recorder.into_run(self.discipline())
    }
}
