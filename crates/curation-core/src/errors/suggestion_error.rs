/// Suggestion engine errors.
#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("keyword pattern failed to compile: {reason}")]
    Pattern { reason: String },
}
