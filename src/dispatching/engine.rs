//! Rule engine for dispatching decisions.
//!
//! Applies rules in sequence, consulting the next rule only on ties, and
//! breaks any remaining tie by lowest process index. The final index
//! tie-break makes every decision deterministic.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Srpt)
///     .with_tie_breaker(rules::Fifo);
/// assert_eq!(engine.rule_names(), vec!["SRPT", "FIFO"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine. With no rules, selection is by index.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the index of the highest-priority candidate.
    ///
    /// Single linear scan: a candidate replaces the current best only if it
    /// compares strictly better, with lower index winning full ties.
    pub fn select_best<'p, I>(
        &self,
        candidates: I,
        context: &SchedulingContext<'_>,
    ) -> Option<usize>
    where
        I: IntoIterator<Item = &'p Process>,
    {
        let mut best: Option<&Process> = None;
        for candidate in candidates {
            let better = match best {
                None => true,
                Some(current) => self.compare(candidate, current, context) == Ordering::Less,
            };
            if better {
                best = Some(candidate);
            }
        }
        best.map(|p| p.index)
    }

    /// Sorts processes by priority (highest priority first).
    ///
    /// Returns process indices.
    pub fn sort_indices(
        &self,
        processes: &[Process],
        context: &SchedulingContext<'_>,
    ) -> Vec<usize> {
        let mut order: Vec<&Process> = processes.iter().collect();
        order.sort_by(|a, b| self.compare(a, b, context));
        order.into_iter().map(|p| p.index).collect()
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(
        &self,
        process: &Process,
        context: &SchedulingContext<'_>,
    ) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.evaluate(process, context))
            .collect()
    }

    fn compare(&self, a: &Process, b: &Process, context: &SchedulingContext<'_>) -> Ordering {
        for rule in &self.rules {
            let ordering = rule
                .evaluate(a, context)
                .cmp(&rule.evaluate(b, context));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        // All rules tied → lowest index first
        a.index.cmp(&b.index)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
