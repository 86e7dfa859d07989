//! [`MetricsAggregator`]: cached corpus health snapshots with a bounded history.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::Utc;
use curation_core::classify_file;
use curation_core::config::MetricsConfig;
use curation_core::models::{FileRecord, MetricsSnapshot, ProcessingLogEntry, StatusCounts, Trends};
use curation_observability::metrics_span;
use curation_observability::tracing_setup::events;

use crate::health::score_health;
use crate::processing_log::processing_speed;
use crate::round2;

#[derive(Debug, Clone)]
struct CachedSnapshot {
    snapshot: MetricsSnapshot,
    computed_at: Instant,
}

/// Aggregates file confidence into health snapshots.
///
/// A computed snapshot is served unchanged until the TTL expires or
/// [`invalidate`](Self::invalidate) is called. Owned by a single logical thread.
#[derive(Debug)]
pub struct MetricsAggregator {
    config: MetricsConfig,
    cache: Option<CachedSnapshot>,
    history: VecDeque<MetricsSnapshot>,
}

impl MetricsAggregator {
    /// Create an aggregator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MetricsConfig::default())
    }

    pub fn with_config(config: MetricsConfig) -> Self {
        let capacity = config.history_capacity.max(1);
        Self {
            config,
            cache: None,
            history: VecDeque::with_capacity(capacity),
        }
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Compute, or return the cached, health snapshot for `files`.
    ///
    /// `processing_log` holds externally reported "file processed" entries.
    pub fn calculate(
        &mut self,
        files: &[FileRecord],
        processing_log: &[ProcessingLogEntry],
    ) -> MetricsSnapshot {
        if let Some(cached) = self.fresh_cache() {
            events::metrics_cache_hit(cached.computed_at.elapsed().as_millis() as u64);
            return cached.snapshot.clone();
        }

        let span = metrics_span!(files.len());
        let _guard = span.enter();

        let snapshot = self.compute(files, processing_log);
        self.push_history(snapshot.clone());
        self.cache = Some(CachedSnapshot {
            snapshot: snapshot.clone(),
            computed_at: Instant::now(),
        });

        events::metrics_computed(
            snapshot.total,
            snapshot.analyzed,
            snapshot.avg_confidence,
            snapshot.health.score,
        );
        snapshot
    }

    /// Drop the cached snapshot; the next `calculate` recomputes.
    pub fn invalidate(&mut self) {
        if self.cache.take().is_some() {
            tracing::debug!(event = "metrics_invalidated", "metrics cache invalidated");
        }
    }

    /// Whether a cached snapshot would be served right now.
    pub fn is_cached(&self) -> bool {
        self.fresh_cache().is_some()
    }

    /// Trend series over the most recent snapshots, oldest first.
    pub fn trends(&self) -> Trends {
        let skip = self.history.len().saturating_sub(self.config.trend_window);
        let mut trends = Trends::default();
        for snapshot in self.history.iter().skip(skip) {
            trends.confidence.push(snapshot.avg_confidence);
            trends.convergence.push(snapshot.convergence_rate);
            trends.improvement.push(snapshot.improvement_rate);
            trends.timestamps.push(snapshot.timestamp);
        }
        trends
    }

    /// All retained snapshots, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &MetricsSnapshot> {
        self.history.iter()
    }

    fn fresh_cache(&self) -> Option<&CachedSnapshot> {
        let ttl = Duration::from_millis(self.config.cache_ttl_ms);
        self.cache
            .as_ref()
            .filter(|cached| cached.computed_at.elapsed() < ttl)
    }

    fn compute(
        &self,
        files: &[FileRecord],
        processing_log: &[ProcessingLogEntry],
    ) -> MetricsSnapshot {
        let mut counts = StatusCounts::default();
        let mut analyzed = 0usize;
        let mut total_confidence = 0.0;

        for file in files {
            if let Some(confidence) = &file.confidence {
                analyzed += 1;
                total_confidence += confidence.overall();
            }
            counts.increment(classify_file(file));
        }

        let (avg_confidence, convergence_rate) = if analyzed == 0 {
            (0.0, 0.0)
        } else {
            (
                round2(total_confidence / analyzed as f64 * 100.0),
                round2(counts.converged as f64 / analyzed as f64 * 100.0),
            )
        };

        let improvement_rate = self.improvement_rate();
        let now = Utc::now();
        let window = chrono::Duration::seconds(self.config.processing_window_secs as i64);
        let processing_speed = round2(processing_speed(processing_log, window, now));

        MetricsSnapshot {
            timestamp: now,
            total: files.len(),
            analyzed,
            counts,
            avg_confidence,
            convergence_rate,
            improvement_rate,
            processing_speed,
            health: score_health(avg_confidence, improvement_rate, &self.config.health),
        }
    }

    /// Relative change of avg confidence across the stored snapshots in the improvement window.
    fn improvement_rate(&self) -> f64 {
        let skip = self
            .history
            .len()
            .saturating_sub(self.config.improvement_window);
        let mut recent = self.history.iter().skip(skip);
        let (Some(first), Some(last)) = (recent.next(), recent.last()) else {
            return 0.0;
        };
        if first.avg_confidence == 0.0 {
            return 0.0;
        }
        round2((last.avg_confidence - first.avg_confidence) / first.avg_confidence * 100.0)
    }

    fn push_history(&mut self, snapshot: MetricsSnapshot) {
        self.history.push_back(snapshot);
        while self.history.len() > self.config.history_capacity.max(1) {
            self.history.pop_front();
        }
    }
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new()
    }
}
