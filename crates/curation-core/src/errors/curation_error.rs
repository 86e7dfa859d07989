use super::{ConfigError, FilterError, SuggestionError};

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CurationError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("suggestion error: {0}")]
    Suggestion(#[from] SuggestionError),

    #[error("file not found: {id}")]
    FileNotFound { id: String },
}

pub type CurationResult<T> = Result<T, CurationError>;
