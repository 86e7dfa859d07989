//! # curation-runtime
//!
//! Owns one instance of each engine, pulls files from an [`ICorpusProvider`]
//! and reports to an [`IEventSink`].
//!
//! [`ICorpusProvider`]: curation_core::traits::ICorpusProvider
//! [`IEventSink`]: curation_core::traits::IEventSink

pub mod runtime;

pub use runtime::CurationRuntime;
