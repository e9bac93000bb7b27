//! Seeded random workload generation.
//!
//! Produces `(arrival, burst)` batches with non-decreasing arrivals, for
//! experiments from the command line and for property tests. The same
//! spec and seed always yield the same batch.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Shape of a generated workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Largest gap between consecutive arrivals (inclusive).
    pub max_arrival_gap: i64,
    /// Shortest burst (inclusive, clamped to at least 1).
    pub min_burst: i64,
    /// Longest burst (inclusive).
    pub max_burst: i64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            count: 10,
            max_arrival_gap: 10,
            min_burst: 1,
            max_burst: 20,
        }
    }
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with default ranges.
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the arrival gap bound.
    pub fn with_max_arrival_gap(mut self, gap: i64) -> Self {
        self.max_arrival_gap = gap;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }
}

/// Generates a batch of `(arrival, burst)` pairs.
///
/// The first process arrives at 0. Bursts are always positive, so the
/// result passes validation.
pub fn generate(spec: &WorkloadSpec, seed: u64) -> Vec<(i64, i64)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let gap = spec.max_arrival_gap.max(0);
    let min_burst = spec.min_burst.max(1);
    let max_burst = spec.max_burst.max(min_burst);

    let mut arrival = 0;
    (0..spec.count)
        .map(|i| {
            if i > 0 {
                arrival += rng.random_range(0..=gap);
            }
            (arrival, rng.random_range(min_burst..=max_burst))
        })
        .collect()
}
