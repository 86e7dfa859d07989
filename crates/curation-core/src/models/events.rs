use serde::{Deserialize, Serialize};

use super::{FilterCriteria, MetricsSnapshot};

/// Events produced toward external collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CurationEvent {
    MetricsUpdated {
        snapshot: MetricsSnapshot,
    },
    FilterApplied {
        criteria: FilterCriteria,
        result_count: usize,
        elapsed_ms: u64,
    },
    FilterFailed {
        criteria: FilterCriteria,
        error: String,
    },
    /// Pass-through: the action descriptor is not interpreted here.
    SuggestionApplied {
        file_id: String,
        suggestion_id: String,
        action: serde_json::Value,
    },
    CategoryAccepted {
        file_id: String,
        category: String,
    },
    CategoryRejected {
        file_id: String,
        category: String,
    },
}

impl CurationEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MetricsUpdated { .. } => "metrics_updated",
            Self::FilterApplied { .. } => "filter_applied",
            Self::FilterFailed { .. } => "filter_failed",
            Self::SuggestionApplied { .. } => "suggestion_applied",
            Self::CategoryAccepted { .. } => "category_accepted",
            Self::CategoryRejected { .. } => "category_rejected",
        }
    }
}
