//! # curation-core
//!
//! Foundation crate for the curation analytics engines.
//! Defines the file/confidence data model, the status classifier, collaborator
//! traits, errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use classifier::{classify, classify_file};
pub use config::CurationConfig;
pub use errors::{CurationError, CurationResult};
pub use models::{ConfidenceScore, Dimension, FileRecord, FilterCriteria, Status};
