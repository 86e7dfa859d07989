//! The filter predicate shared by the sequential path and every execution unit.

use curation_core::classify_file;
use curation_core::models::{FileRecord, FilterCriteria};

/// Whether `file` satisfies every present field of `criteria`.
///
/// Files without confidence never match. Inverted bounds are swapped before testing.
pub fn matches(file: &FileRecord, criteria: &FilterCriteria) -> bool {
    let Some(confidence) = &file.confidence else {
        return false;
    };

    if let Some(range) = criteria.confidence_range.map(|r| r.normalized()) {
        if !range.contains(confidence.overall_percent()) {
            return false;
        }
    }

    if let Some(statuses) = &criteria.statuses {
        if !statuses.contains(&classify_file(file)) {
            return false;
        }
    }

    if let Some(range) = criteria.iteration_range.map(|r| r.normalized()) {
        if !range.contains(confidence.iteration()) {
            return false;
        }
    }

    true
}

/// Ids of the files in `batch` that match.
pub fn matching_ids(batch: &[FileRecord], criteria: &FilterCriteria) -> Vec<String> {
    batch
        .iter()
        .filter(|file| matches(file, criteria))
        .map(|file| file.id.clone())
        .collect()
}
