/// Curation core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Overall confidence at or above which a file counts as converged.
pub const CONVERGENCE_THRESHOLD: f64 = 0.85;

/// Mean history delta above which a file counts as improving.
pub const IMPROVING_DELTA: f64 = 0.02;

/// Absolute mean history delta below which a file counts as stagnant.
pub const STAGNANT_DELTA: f64 = 0.01;

/// Number of trailing history entries inspected by the classifier.
pub const CLASSIFIER_WINDOW: usize = 3;

/// Maximum history entries retained per file by [`crate::FileRecord::push_history`].
pub const MAX_HISTORY_PER_FILE: usize = 20;
