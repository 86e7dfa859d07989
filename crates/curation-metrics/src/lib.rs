//! # curation-metrics
//!
//! Turns a file corpus snapshot into cached, trend-tracked health metrics.

pub mod aggregator;
pub mod health;
pub mod processing_log;

pub use aggregator::MetricsAggregator;
pub use health::score_health;
pub use processing_log::processing_speed;

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
