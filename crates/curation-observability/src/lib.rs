//! # curation-observability
//!
//! Tracing setup, structured log events, span macros, degradation tracking,
//! and event sinks shared by the curation engines.

pub mod degradation;
pub mod sinks;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use sinks::{RecordingEventSink, TracingEventSink};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
