//! CurationRuntime: notification handling and event emission around the engines.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use curation_core::config::CurationConfig;
use curation_core::errors::{CurationError, CurationResult};
use curation_core::models::{
    CategoryDefinition, CategorySuggestion, CurationEvent, FileRecord, FilterCriteria,
    MetricsSnapshot, Suggestion, Trends,
};
use curation_core::traits::{ICorpusProvider, IEventSink};
use curation_filter::{ConcurrentFilterEngine, FilterStats};
use curation_metrics::MetricsAggregator;
use curation_observability::tracing_setup::{self, events};
use curation_suggestions::SuggestionEngine;

/// Wires the metrics, filter and suggestion engines to the host application.
///
/// Notifications arrive through the `on_*` methods; results leave through the
/// event sink. Internal failures never surface as errors to the caller.
pub struct CurationRuntime {
    config: CurationConfig,
    provider: Arc<dyn ICorpusProvider>,
    sink: Arc<dyn IEventSink>,
    aggregator: Mutex<MetricsAggregator>,
    filter: ConcurrentFilterEngine,
    suggestions: SuggestionEngine,
    /// Bumped on every "confidence updated" notification.
    confidence_version: AtomicU64,
    /// Confidence version the cached metrics were computed against.
    metrics_version: AtomicU64,
    files_version: AtomicU64,
}

impl CurationRuntime {
    pub fn new(
        config: CurationConfig,
        provider: Arc<dyn ICorpusProvider>,
        sink: Arc<dyn IEventSink>,
    ) -> Self {
        let aggregator = MetricsAggregator::with_config(config.metrics.clone());
        let filter = ConcurrentFilterEngine::new(config.filter.clone());
        let suggestions = SuggestionEngine::new(config.suggestions.clone());

        tracing::info!(
            event = "runtime_started",
            pool_size = filter.pool_size(),
            parallel = filter.is_parallel(),
            "curation runtime started"
        );

        Self {
            config,
            provider,
            sink,
            aggregator: Mutex::new(aggregator),
            filter,
            suggestions,
            confidence_version: AtomicU64::new(0),
            metrics_version: AtomicU64::new(0),
            files_version: AtomicU64::new(0),
        }
    }

    /// Load configuration from a TOML file, initialize tracing from it, and build the runtime.
    pub fn from_config_file(
        path: &Path,
        provider: Arc<dyn ICorpusProvider>,
        sink: Arc<dyn IEventSink>,
    ) -> CurationResult<Self> {
        let config = CurationConfig::load(path)?;
        tracing_setup::init_from_config(&config.observability);
        Ok(Self::new(config, provider, sink))
    }

    pub fn config(&self) -> &CurationConfig {
        &self.config
    }

    // ── Metrics ──

    /// Current health snapshot. Emits `MetricsUpdated` when it was freshly computed.
    pub fn metrics(&self) -> MetricsSnapshot {
        let mut aggregator = self.aggregator();

        let current = self.confidence_version.load(Ordering::Acquire);
        if self.metrics_version.swap(current, Ordering::AcqRel) != current {
            aggregator.invalidate();
        }

        let fresh = !aggregator.is_cached();
        let snapshot =
            aggregator.calculate(&self.provider.files(), &self.provider.processing_log());
        drop(aggregator);

        if fresh {
            self.sink.emit(CurationEvent::MetricsUpdated {
                snapshot: snapshot.clone(),
            });
        }
        snapshot
    }

    pub fn trends(&self) -> Trends {
        self.aggregator().trends()
    }

    /// A file's confidence changed: recompute metrics now and publish them.
    pub fn on_confidence_updated(&self) -> MetricsSnapshot {
        let version = self.confidence_version.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(
            event = "confidence_updated",
            version = version,
            "confidence updated"
        );
        self.metrics()
    }

    /// The file set changed. Filter cache entries are kept; hits re-check
    /// membership against the files passed at that time.
    pub fn on_files_changed(&self) {
        let version = self.files_version.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(
            event = "files_changed",
            version = version,
            "file set changed"
        );
    }

    pub fn confidence_version(&self) -> u64 {
        self.confidence_version.load(Ordering::Acquire)
    }

    pub fn files_version(&self) -> u64 {
        self.files_version.load(Ordering::Acquire)
    }

    // ── Filter ──

    /// Files of the current corpus matching `criteria`.
    ///
    /// Emits `FilterFailed` when an internal error forced a fallback, then
    /// `FilterApplied` with the (still complete) result.
    pub async fn filter(&self, criteria: &FilterCriteria) -> Vec<FileRecord> {
        let files = self.provider.files();
        let outcome = self.filter.apply_detailed(&files, criteria).await;

        if let Some(error) = &outcome.fallback_error {
            events::filter_failed(&error.to_string());
            self.sink.emit(CurationEvent::FilterFailed {
                criteria: criteria.clone(),
                error: error.to_string(),
            });
        }
        self.sink.emit(CurationEvent::FilterApplied {
            criteria: criteria.clone(),
            result_count: outcome.files.len(),
            elapsed_ms: outcome.elapsed_ms(),
        });
        outcome.files
    }

    pub fn clear_filter_cache(&self) {
        self.filter.clear_cache();
    }

    pub fn filter_stats(&self) -> FilterStats {
        self.filter.stats()
    }

    // ── Suggestions ──

    /// Ranked suggestions for one file; empty for unknown ids.
    pub fn suggestions(&self, file_id: &str) -> Vec<Suggestion> {
        self.lookup(file_id)
            .map(|file| self.suggestions.generate(&file))
            .unwrap_or_default()
    }

    /// Ranked category recommendations for one file; empty for unknown ids.
    pub fn category_suggestions(
        &self,
        file_id: &str,
        known: &[CategoryDefinition],
    ) -> Vec<CategorySuggestion> {
        self.lookup(file_id)
            .map(|file| self.suggestions.suggest_categories(&file, known))
            .unwrap_or_default()
    }

    // ── Pass-through actions ──

    /// Forward an applied suggestion's action descriptor. Nothing is applied here.
    pub fn apply_suggestion(&self, file_id: &str, suggestion_id: &str, action: serde_json::Value) {
        self.sink.emit(CurationEvent::SuggestionApplied {
            file_id: file_id.to_string(),
            suggestion_id: suggestion_id.to_string(),
            action,
        });
    }

    pub fn accept_category(&self, file_id: &str, category: &str) {
        self.sink.emit(CurationEvent::CategoryAccepted {
            file_id: file_id.to_string(),
            category: category.to_string(),
        });
    }

    pub fn reject_category(&self, file_id: &str, category: &str) {
        self.sink.emit(CurationEvent::CategoryRejected {
            file_id: file_id.to_string(),
            category: category.to_string(),
        });
    }

    /// Current version of one file.
    pub fn file(&self, file_id: &str) -> CurationResult<FileRecord> {
        self.provider.file(file_id).ok_or_else(|| CurationError::FileNotFound {
            id: file_id.to_string(),
        })
    }

    fn lookup(&self, file_id: &str) -> Option<FileRecord> {
        match self.file(file_id) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::debug!(event = "file_not_found", error = %e, "suggestions skipped");
                None
            }
        }
    }

    fn aggregator(&self) -> MutexGuard<'_, MetricsAggregator> {
        // A poisoned lock still guards a usable aggregator.
        self.aggregator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for CurationRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurationRuntime")
            .field("filter", &self.filter)
            .field("suggestions", &self.suggestions)
            .field("confidence_version", &self.confidence_version())
            .field("files_version", &self.files_version())
            .finish()
    }
}
