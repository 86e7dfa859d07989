//! Span definitions per operation: metrics, filter, suggestions.
//!
//! Each span carries duration, result, and metadata via the `tracing` crate.

/// Create a metrics aggregation span.
#[macro_export]
macro_rules! metrics_span {
    ($file_count:expr) => {
        tracing::info_span!("curation.metrics", file_count = $file_count)
    };
}

/// Create a filter span.
#[macro_export]
macro_rules! filter_span {
    ($file_count:expr, $cache_key:expr) => {
        tracing::info_span!("curation.filter", file_count = $file_count, cache_key = %$cache_key)
    };
}

/// Create a suggestion span.
#[macro_export]
macro_rules! suggestion_span {
    ($file_id:expr) => {
        tracing::info_span!("curation.suggestions", file_id = %$file_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const METRICS: &str = "curation.metrics";
    pub const FILTER: &str = "curation.filter";
    pub const SUGGESTIONS: &str = "curation.suggestions";
}
