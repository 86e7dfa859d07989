//! # curation-filter
//!
//! Filters a file corpus by confidence range, status set, and iteration range.
//! Large corpora are split into batches evaluated on a persistent pool of
//! execution units; any batch failure recomputes the whole filter sequentially.

pub mod cache;
pub mod cache_key;
pub mod engine;
pub mod pool;
pub mod predicate;
pub mod stats;

pub use cache::FilterCache;
pub use cache_key::cache_key;
pub use engine::{ConcurrentFilterEngine, FilterMode, FilterOutcome};
pub use pool::{default_evaluator, BatchEvaluator, WorkerPool};
pub use predicate::matches;
pub use stats::FilterStats;
