//! Canonical cache keys for filter criteria.

use curation_core::errors::FilterError;
use curation_core::models::FilterCriteria;

/// blake3 hex digest of the normalized criteria's JSON serialization.
///
/// Equivalent criteria (swapped bounds, status order) share one key.
pub fn cache_key(criteria: &FilterCriteria) -> Result<String, FilterError> {
    let canonical = serde_json::to_vec(&criteria.normalized()).map_err(|e| FilterError::CacheKey {
        reason: e.to_string(),
    })?;
    Ok(blake3::hash(&canonical).to_hex().to_string())
}
