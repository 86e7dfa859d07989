//! Degradation tracking: every fallback the engines take is recorded here.

mod tracker;

pub use tracker::{DegradationTracker, RecoveryStatus, TrackedDegradation};
