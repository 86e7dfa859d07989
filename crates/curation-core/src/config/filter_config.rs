use serde::{Deserialize, Serialize};

use super::defaults;

/// Concurrent filter engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Result cache time-to-live (seconds).
    pub cache_ttl_secs: u64,
    /// Maximum distinct criteria cached.
    pub cache_capacity: u64,
    /// File count below which filtering stays sequential.
    pub parallel_threshold: usize,
    /// Files per batch dispatched to one execution unit.
    pub batch_size: usize,
    /// Execution units. `None` uses the available hardware concurrency.
    pub pool_size: Option<usize>,
    /// Per-batch result timeout (milliseconds).
    pub batch_timeout_ms: u64,
    /// Interval between polls for a free execution unit (milliseconds).
    pub poll_interval_ms: u64,
}

impl FilterConfig {
    /// Pool size to use: configured, else hardware concurrency, else the default.
    pub fn effective_pool_size(&self) -> usize {
        self.pool_size.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(defaults::DEFAULT_POOL_SIZE)
        })
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: defaults::DEFAULT_FILTER_CACHE_TTL_SECS,
            cache_capacity: defaults::DEFAULT_FILTER_CACHE_CAPACITY,
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            pool_size: None,
            batch_timeout_ms: defaults::DEFAULT_BATCH_TIMEOUT_MS,
            poll_interval_ms: defaults::DEFAULT_POLL_INTERVAL_MS,
        }
    }
}
