use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights and grade thresholds for the health score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthScoring {
    /// Weight of average confidence (0.0–1.0).
    pub confidence_weight: f64,
    /// Weight of the improvement rate (0.0–1.0).
    pub improvement_weight: f64,
    /// Improvement rate (percent) that saturates its component.
    pub improvement_scale: f64,
    pub excellent_threshold: u8,
    pub good_threshold: u8,
    pub fair_threshold: u8,
}

impl Default for HealthScoring {
    fn default() -> Self {
        Self {
            confidence_weight: defaults::DEFAULT_CONFIDENCE_WEIGHT,
            improvement_weight: defaults::DEFAULT_IMPROVEMENT_WEIGHT,
            improvement_scale: defaults::DEFAULT_IMPROVEMENT_SCALE,
            excellent_threshold: defaults::DEFAULT_EXCELLENT_THRESHOLD,
            good_threshold: defaults::DEFAULT_GOOD_THRESHOLD,
            fair_threshold: defaults::DEFAULT_FAIR_THRESHOLD,
        }
    }
}

/// Metrics aggregator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// How long a computed snapshot is served unchanged (milliseconds).
    pub cache_ttl_ms: u64,
    /// Snapshots retained in the history ring buffer.
    pub history_capacity: usize,
    /// Snapshots returned by trend queries.
    pub trend_window: usize,
    /// Snapshots compared for the improvement rate.
    pub improvement_window: usize,
    /// Window over which processing speed is measured (seconds).
    pub processing_window_secs: u64,
    pub health: HealthScoring,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            cache_ttl_ms: defaults::DEFAULT_METRICS_CACHE_TTL_MS,
            history_capacity: defaults::DEFAULT_HISTORY_CAPACITY,
            trend_window: defaults::DEFAULT_TREND_WINDOW,
            improvement_window: defaults::DEFAULT_IMPROVEMENT_WINDOW,
            processing_window_secs: defaults::DEFAULT_PROCESSING_WINDOW_SECS,
            health: HealthScoring::default(),
        }
    }
}
