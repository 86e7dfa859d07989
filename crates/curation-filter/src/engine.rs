//! ConcurrentFilterEngine: cached, batch-parallel filtering with sequential fallback.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use curation_core::config::FilterConfig;
use curation_core::errors::FilterError;
use curation_core::models::{DegradationEvent, FileRecord, FilterCriteria};
use curation_observability::tracing_setup::events;
use curation_observability::{DegradationTracker, TrackedDegradation};
use tokio::task::JoinSet;
use tracing::Instrument;

use crate::cache::FilterCache;
use crate::cache_key::cache_key;
use crate::pool::{default_evaluator, BatchEvaluator, WorkerPool};
use crate::predicate::matches;
use crate::stats::{FilterStats, RunCounters};

const COMPONENT: &str = "filter";

/// How a filter result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Cached id set re-checked against the current files.
    Cached,
    /// Evaluated on the caller's task.
    Sequential,
    /// Every batch evaluated on the worker pool.
    Parallel,
    /// Parallel attempt abandoned and recomputed sequentially.
    Fallback,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cached => "cached",
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
            Self::Fallback => "fallback",
        }
    }
}

/// Result of one `apply_detailed` call.
#[derive(Debug)]
pub struct FilterOutcome {
    pub files: Vec<FileRecord>,
    pub mode: FilterMode,
    /// The internal error that forced a fallback, if any.
    pub fallback_error: Option<FilterError>,
    pub elapsed: Duration,
}

impl FilterOutcome {
    pub fn cache_hit(&self) -> bool {
        self.mode == FilterMode::Cached
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}

/// Filters file sets by confidence, status, and iteration.
///
/// Inputs of at least `parallel_threshold` files are split into batches of
/// `batch_size` and evaluated on a persistent [`WorkerPool`]. Any batch
/// failure or timeout discards the parallel attempt and recomputes the whole
/// filter sequentially, so results are always complete.
///
/// Cache entries are keyed by criteria only. A hit re-checks the current
/// files against the cached ids, which assumes an id is never re-created with
/// different confidence inside the TTL.
pub struct ConcurrentFilterEngine {
    config: FilterConfig,
    pool: Option<Arc<WorkerPool>>,
    cache: FilterCache,
    counters: RunCounters,
    degradations: Mutex<DegradationTracker>,
}

impl ConcurrentFilterEngine {
    /// Engine with a pool running the standard predicate.
    pub fn new(config: FilterConfig) -> Self {
        Self::with_evaluator(config, default_evaluator())
    }

    /// Engine whose execution units run `evaluator` on each batch.
    ///
    /// If the pool cannot be built the engine stays sequential for its lifetime.
    pub fn with_evaluator(config: FilterConfig, evaluator: BatchEvaluator) -> Self {
        let requested = config.effective_pool_size();
        let poll_interval = Duration::from_millis(config.poll_interval_ms);
        let mut tracker = DegradationTracker::new();

        let pool = match WorkerPool::new(requested, poll_interval, evaluator) {
            Ok(pool) => Some(Arc::new(pool)),
            Err(e) => {
                events::pool_degraded(requested, &e.to_string());
                tracker.record(DegradationEvent::now(COMPONENT, e.to_string(), "sequential"));
                None
            }
        };

        Self::build(config, pool, tracker)
    }

    /// Engine without a pool; every run is sequential.
    pub fn sequential_only(config: FilterConfig) -> Self {
        Self::build(config, None, DegradationTracker::new())
    }

    fn build(
        config: FilterConfig,
        pool: Option<Arc<WorkerPool>>,
        tracker: DegradationTracker,
    ) -> Self {
        let cache = FilterCache::new(
            Duration::from_secs(config.cache_ttl_secs),
            config.cache_capacity,
        );
        Self {
            config,
            pool,
            cache,
            counters: RunCounters::default(),
            degradations: Mutex::new(tracker),
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Files in `files` matching `criteria`. Never fails.
    pub async fn apply(&self, files: &[FileRecord], criteria: &FilterCriteria) -> Vec<FileRecord> {
        self.apply_detailed(files, criteria).await.files
    }

    /// Like [`apply`](Self::apply), also reporting how the result was produced.
    pub async fn apply_detailed(
        &self,
        files: &[FileRecord],
        criteria: &FilterCriteria,
    ) -> FilterOutcome {
        let started = Instant::now();
        let criteria = criteria.normalized();

        let key = match cache_key(&criteria) {
            Ok(key) => key,
            Err(e) => {
                // Unkeyable criteria: compute without touching the cache.
                events::filter_failed(&e.to_string());
                self.counters.sequential_run();
                let ids = sequential_ids(files, &criteria);
                return self.finish(files, &ids, FilterMode::Sequential, Some(e), started);
            }
        };

        if let Some(ids) = self.cache.get(&key) {
            return self.finish(files, &ids, FilterMode::Cached, None, started);
        }

        let span = curation_observability::filter_span!(files.len(), key);
        let (ids, mode, fallback_error) = self.evaluate(files, &criteria).instrument(span).await;
        let ids = Arc::new(ids);
        self.cache.insert(key, Arc::clone(&ids));
        self.finish(files, &ids, mode, fallback_error, started)
    }

    async fn evaluate(
        &self,
        files: &[FileRecord],
        criteria: &FilterCriteria,
    ) -> (HashSet<String>, FilterMode, Option<FilterError>) {
        let pool = match &self.pool {
            Some(pool) if files.len() >= self.config.parallel_threshold => Arc::clone(pool),
            _ => {
                self.counters.sequential_run();
                return (sequential_ids(files, criteria), FilterMode::Sequential, None);
            }
        };

        match self.evaluate_parallel(pool, files, criteria).await {
            Ok(ids) => {
                self.counters.parallel_run();
                self.mark_recovered();
                (ids, FilterMode::Parallel, None)
            }
            Err(e) => {
                events::filter_fallback(&e.to_string());
                self.record_degradation(&e);
                self.counters.fallback();
                (sequential_ids(files, criteria), FilterMode::Fallback, Some(e))
            }
        }
    }

    /// Fan batches out to the pool. The first error aborts every outstanding batch.
    ///
    /// At most `pool.size()` batches are in flight; the next batch is dispatched
    /// as one completes, so a batch's timeout only covers its own evaluation.
    async fn evaluate_parallel(
        &self,
        pool: Arc<WorkerPool>,
        files: &[FileRecord],
        criteria: &FilterCriteria,
    ) -> Result<HashSet<String>, FilterError> {
        let timeout = Duration::from_millis(self.config.batch_timeout_ms);
        let mut pending = files.chunks(self.config.batch_size.max(1)).enumerate();
        let mut batches = JoinSet::new();

        let mut dispatch = |batches: &mut JoinSet<Result<Vec<String>, FilterError>>| {
            let Some((index, chunk)) = pending.next() else {
                return;
            };
            let pool = Arc::clone(&pool);
            let batch = chunk.to_vec();
            let criteria = criteria.clone();
            batches.spawn(async move { pool.submit(index, batch, criteria, timeout).await });
        };

        for _ in 0..pool.size() {
            dispatch(&mut batches);
        }

        let mut ids = HashSet::new();
        while let Some(joined) = batches.join_next().await {
            let batch_ids = joined.map_err(|e| FilterError::TaskFailed {
                reason: e.to_string(),
            })??;
            ids.extend(batch_ids);
            dispatch(&mut batches);
        }
        Ok(ids)
    }

    fn finish(
        &self,
        files: &[FileRecord],
        ids: &HashSet<String>,
        mode: FilterMode,
        fallback_error: Option<FilterError>,
        started: Instant,
    ) -> FilterOutcome {
        let matched: Vec<FileRecord> = files
            .iter()
            .filter(|f| ids.contains(&f.id))
            .cloned()
            .collect();
        let elapsed = started.elapsed();
        events::filter_applied(
            mode.as_str(),
            files.len(),
            matched.len(),
            elapsed.as_millis() as u64,
        );
        FilterOutcome {
            files: matched,
            mode,
            fallback_error,
            elapsed,
        }
    }

    fn record_degradation(&self, error: &FilterError) {
        match self.degradations.lock() {
            Ok(mut tracker) => {
                tracker.record(DegradationEvent::now(COMPONENT, error.to_string(), "sequential"));
            }
            Err(_) => tracing::warn!(
                event = "degradation_lock_poisoned",
                "degradation tracker unavailable"
            ),
        }
    }

    fn mark_recovered(&self) {
        if let Ok(mut tracker) = self.degradations.lock() {
            tracker.mark_recovered(COMPONENT);
        }
    }

    /// Drop every cached result.
    pub fn clear_cache(&self) {
        self.cache.clear();
        tracing::debug!(event = "filter_cache_cleared", "filter cache cleared");
    }

    pub fn stats(&self) -> FilterStats {
        self.counters
            .snapshot(self.cache.hits(), self.cache.misses())
    }

    /// Execution units in the pool; 0 when running sequentially.
    pub fn pool_size(&self) -> usize {
        self.pool.as_ref().map_or(0, |pool| pool.size())
    }

    pub fn is_parallel(&self) -> bool {
        self.pool.is_some()
    }

    /// Whether a fallback or pool failure is still unanswered by a successful parallel run.
    pub fn is_degraded(&self) -> bool {
        self.degradations
            .lock()
            .map(|tracker| tracker.is_degraded(COMPONENT))
            .unwrap_or(true)
    }

    /// Recorded fallbacks and pool failures, oldest first.
    pub fn degradations(&self) -> Vec<TrackedDegradation> {
        self.degradations
            .lock()
            .map(|tracker| tracker.events().to_vec())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for ConcurrentFilterEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcurrentFilterEngine")
            .field("config", &self.config)
            .field("pool", &self.pool)
            .field("stats", &self.stats())
            .finish()
    }
}

fn sequential_ids(files: &[FileRecord], criteria: &FilterCriteria) -> HashSet<String> {
    files
        .iter()
        .filter(|file| matches(file, criteria))
        .map(|file| file.id.clone())
        .collect()
}
