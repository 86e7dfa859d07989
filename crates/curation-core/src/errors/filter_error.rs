/// Filter engine and worker pool errors.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("worker pool unavailable: {reason}")]
    PoolUnavailable { reason: String },

    #[error("no execution unit became free within {waited_ms}ms")]
    NoFreeUnit { waited_ms: u64 },

    #[error("batch {batch} timed out after {timeout_ms}ms")]
    BatchTimeout { batch: usize, timeout_ms: u64 },

    #[error("execution unit {unit} failed: {reason}")]
    UnitFailed { unit: usize, reason: String },

    #[error("execution unit {unit} disconnected")]
    UnitDisconnected { unit: usize },

    #[error("batch task failed: {reason}")]
    TaskFailed { reason: String },

    #[error("criteria could not be keyed: {reason}")]
    CacheKey { reason: String },
}
