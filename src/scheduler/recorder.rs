//! Per-run bookkeeping shared by all simulators.

use crate::models::{Discipline, ProcessOutcome, ProcessTable, SimulationRun, Slice};

/// Collects dispatches and completions for a single simulator invocation.
///
/// Created empty at simulator start: every `first_start` and `finish` is
/// unset and gets filled exactly once. Contiguous dispatches of the same
/// process are coalesced into one slice.
#[derive(Debug)]
pub(crate) struct RunRecorder<'a> {
    table: &'a ProcessTable,
    first_start: Vec<Option<i64>>,
    finish: Vec<Option<i64>>,
    slices: Vec<Slice>,
}

impl<'a> RunRecorder<'a> {
    pub(crate) fn new(table: &'a ProcessTable) -> Self {
        Self {
            table,
            first_start: vec![None; table.len()],
            finish: vec![None; table.len()],
            slices: Vec::new(),
        }
    }

    /// Records that `process` held the CPU over `[start, end)`.
    ///
    /// The first dispatch of a process fixes its `first_start`; later
    /// dispatches never overwrite it.
    pub(crate) fn dispatch(&mut self, process: usize, start: i64, end: i64) {
        if self.first_start[process].is_none() {
            self.first_start[process] = Some(start);
        }

        match self.slices.last_mut() {
            Some(last) if last.process == process && last.end == start => last.end = end,
            _ => self.slices.push(Slice::new(process, start, end)),
        }
    }

    /// Records that `process` completed at `at`.
    pub(crate) fn complete(&mut self, process: usize, at: i64) {
        debug_assert!(self.finish[process].is_none(), "process finished twice");
        self.finish[process] = Some(at);
    }

    /// Closes the run.
    ///
    /// Only processes with both times recorded produce an outcome; for a
    /// validated table every process does.
    pub(crate) fn into_run(self, discipline: Discipline) -> SimulationRun {
        let outcomes: Vec<ProcessOutcome> = self
            .table
            .iter()
            .filter_map(|p| {
                let first_start = self.first_start[p.index]?;
                let finish = self.finish[p.index]?;
                Some(ProcessOutcome {
                    index: p.index,
                    arrival: p.arrival,
                    burst: p.burst,
                    first_start,
                    finish,
                })
            })
            .collect();
        debug_assert_eq!(outcomes.len(), self.table.len(), "incomplete run");

        SimulationRun {
            discipline,
            slices: self.slices,
            outcomes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_start_never_overwritten() {
        let table = ProcessTable::from_pairs(&[(0, 4)]).unwrap();
        let mut rec = RunRecorder::new(&table);
        rec.dispatch(0, 0, 2);
        rec.dispatch(0, 3, 5);
        rec.complete(0, 5);

        let run = rec.into_run(Discipline::Srtf);
        assert_eq!(run.outcomes[0].first_start, 0);
        assert_eq!(run.outcomes[0].finish, 5);
        assert_eq!(run.slices.len(), 2);
    }

    #[test]
    fn test_contiguous_dispatches_coalesce() {
        let table = ProcessTable::from_pairs(&[(0, 4), (1, 1)]).unwrap();
        let mut rec = RunRecorder::new(&table);
        rec.dispatch(0, 0, 1);
        rec.dispatch(0, 1, 4);
        rec.complete(0, 4);
        rec.dispatch(1, 4, 5);
        rec.complete(1, 5);

        let run = rec.into_run(Discipline::Srtf);
        assert_eq!(run.slices, vec![Slice::new(0, 0, 4), Slice::new(1, 4, 5)]);
    }
}
