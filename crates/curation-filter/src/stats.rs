//! Filter engine counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Point-in-time copy of the engine counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Runs completed entirely on the worker pool.
    pub parallel_runs: u64,
    /// Runs evaluated on the caller's task, including fallback recomputes.
    pub sequential_runs: u64,
    /// Parallel attempts abandoned for a sequential recompute.
    pub fallbacks: u64,
}

impl FilterStats {
    /// Cache hit rate in `[0, 1]`; 0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct RunCounters {
    parallel: AtomicU64,
    sequential: AtomicU64,
    fallbacks: AtomicU64,
}

impl RunCounters {
    pub(crate) fn parallel_run(&self) {
        self.parallel.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn sequential_run(&self) {
        self.sequential.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
        self.sequential.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, cache_hits: u64, cache_misses: u64) -> FilterStats {
        FilterStats {
            cache_hits,
            cache_misses,
            parallel_runs: self.parallel.load(Ordering::Relaxed),
            sequential_runs: self.sequential.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_rate_handles_no_lookups() {
        assert_eq!(FilterStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn fallback_counts_as_sequential_run() {
        let counters = RunCounters::default();
        counters.parallel_run();
        counters.fallback();
        let stats = counters.snapshot(3, 1);
        assert_eq!(stats.parallel_runs, 1);
        assert_eq!(stats.sequential_runs, 1);
        assert_eq!(stats.fallbacks, 1);
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
    }
}
