//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a freshly computed metrics snapshot.
pub fn metrics_computed(total: usize, analyzed: usize, avg_confidence: f64, health_score: u8) {
    tracing::info!(
        event = "metrics_computed",
        total = total,
        analyzed = analyzed,
        avg_confidence = avg_confidence,
        health_score = health_score,
        "metrics computed"
    );
}

/// Log a metrics request served from cache.
pub fn metrics_cache_hit(age_ms: u64) {
    tracing::debug!(
        event = "metrics_cache_hit",
        age_ms = age_ms,
        "metrics served from cache"
    );
}

/// Log a completed filter run.
pub fn filter_applied(mode: &str, input: usize, matched: usize, elapsed_ms: u64) {
    tracing::info!(
        event = "filter_applied",
        mode = %mode,
        input = input,
        matched = matched,
        elapsed_ms = elapsed_ms,
        "filter applied"
    );
}

/// Log an abandoned parallel attempt that fell back to sequential filtering.
pub fn filter_fallback(reason: &str) {
    tracing::warn!(event = "filter_fallback", reason = %reason, "parallel filter abandoned");
}

/// Log a filter failure that was converted into a safe result.
pub fn filter_failed(error: &str) {
    tracing::error!(event = "filter_failed", error = %error, "filter failed");
}

/// Log a worker pool that could not be built.
pub fn pool_degraded(requested: usize, reason: &str) {
    tracing::warn!(
        event = "pool_degraded",
        requested = requested,
        reason = %reason,
        "worker pool unavailable, filtering sequentially"
    );
}

/// Log generated suggestions for one file.
pub fn suggestions_generated(file_id: &str, candidates: usize, returned: usize) {
    tracing::debug!(
        event = "suggestions_generated",
        file_id = %file_id,
        candidates = candidates,
        returned = returned,
        "suggestions generated"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a component returning to normal operation.
pub fn degradation_recovered(component: &str, events: usize) {
    tracing::info!(
        event = "degradation_recovered",
        component = %component,
        recovered_events = events,
        "degradation recovered"
    );
}
