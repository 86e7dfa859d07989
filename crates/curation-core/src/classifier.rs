//! Status classification of a file's confidence trajectory.
//!
//! Shared by the metrics aggregator and the filter engine so that status
//! counts and status filters can never disagree.

use crate::constants::{CLASSIFIER_WINDOW, CONVERGENCE_THRESHOLD, IMPROVING_DELTA, STAGNANT_DELTA};
use crate::models::{ConfidenceScore, FileRecord, Status};

/// Classify a score and its history (newest last). Pure and total.
///
/// - no score: `Unprocessed`
/// - `overall >= 0.85`: `Converged`
/// - with at least two history entries, the mean delta of the last three:
///   `> 0.02` is `Improving`, `|mean| < 0.01` is `Stagnant`
/// - everything else: `NeedsWork`
pub fn classify(score: Option<&ConfidenceScore>, history: &[ConfidenceScore]) -> Status {
    let Some(score) = score else {
        return Status::Unprocessed;
    };

    if score.overall() >= CONVERGENCE_THRESHOLD {
        return Status::Converged;
    }

    match mean_recent_delta(history) {
        Some(delta) if delta > IMPROVING_DELTA => Status::Improving,
        Some(delta) if delta.abs() < STAGNANT_DELTA => Status::Stagnant,
        _ => Status::NeedsWork,
    }
}

/// Classify a file by its current confidence and history.
pub fn classify_file(file: &FileRecord) -> Status {
    classify(file.confidence.as_ref(), &file.history)
}

/// Mean of consecutive `overall` deltas across the trailing window, `None` below two entries.
fn mean_recent_delta(history: &[ConfidenceScore]) -> Option<f64> {
    if history.len() < 2 {
        return None;
    }
    let recent = &history[history.len().saturating_sub(CLASSIFIER_WINDOW)..];
    let deltas: Vec<f64> = recent
        .windows(2)
        .map(|pair| pair[1].overall() - pair[0].overall())
        .collect();
    Some(deltas.iter().sum::<f64>() / deltas.len() as f64)
}
