//! Error handling for the curation engines.
//! One error enum per subsystem, `thiserror` only.

mod config_error;
mod curation_error;
mod filter_error;
mod suggestion_error;

pub use config_error::ConfigError;
pub use curation_error::{CurationError, CurationResult};
pub use filter_error::FilterError;
pub use suggestion_error::SuggestionError;
