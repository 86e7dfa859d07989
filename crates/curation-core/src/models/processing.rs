use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One externally reported "file processed" entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingLogEntry {
    pub file_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ProcessingLogEntry {
    /// Create an entry stamped with the current time.
    pub fn now(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn at(file_id: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            file_id: file_id.into(),
            timestamp,
        }
    }
}
