//! Processing speed over externally reported "file processed" entries.

use chrono::{DateTime, Duration, Utc};
use curation_core::models::ProcessingLogEntry;

/// Files per minute over the trailing `window` ending at `now`. Zero for an empty log.
pub fn processing_speed(
    entries: &[ProcessingLogEntry],
    window: Duration,
    now: DateTime<Utc>,
) -> f64 {
    let minutes = window.num_milliseconds() as f64 / 60_000.0;
    if entries.is_empty() || minutes <= 0.0 {
        return 0.0;
    }
    let cutoff = now - window;
    let recent = entries
        .iter()
        .filter(|e| e.timestamp >= cutoff && e.timestamp <= now)
        .count();
    recent as f64 / minutes
}
