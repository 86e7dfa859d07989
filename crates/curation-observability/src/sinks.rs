//! Stock [`IEventSink`] implementations.

use std::sync::Mutex;

use curation_core::models::CurationEvent;
use curation_core::traits::IEventSink;

/// Sink that logs every event as a structured `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl IEventSink for TracingEventSink {
    fn emit(&self, event: CurationEvent) {
        match &event {
            CurationEvent::FilterFailed { error, .. } => {
                tracing::warn!(event = event.name(), error = %error, "curation event");
            }
            _ => {
                let payload = serde_json::to_string(&event).unwrap_or_default();
                tracing::info!(event = event.name(), payload = %payload, "curation event");
            }
        }
    }
}

/// Sink that keeps every event in memory, for tests and replay.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<CurationEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events received so far.
    pub fn events(&self) -> Vec<CurationEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Names of all events received so far, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(CurationEvent::name).collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.names().into_iter().filter(|n| *n == name).count()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl IEventSink for RecordingEventSink {
    fn emit(&self, event: CurationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingEventSink::new();
        sink.emit(CurationEvent::CategoryAccepted {
            file_id: "f1".into(),
            category: "rust".into(),
        });
        sink.emit(CurationEvent::CategoryRejected {
            file_id: "f1".into(),
            category: "go".into(),
        });
        assert_eq!(sink.names(), vec!["category_accepted", "category_rejected"]);
        assert_eq!(sink.count("category_rejected"), 1);
        sink.clear();
        assert!(sink.events().is_empty());
    }

    #[test]
    fn tracing_sink_accepts_every_event() {
        TracingEventSink.emit(CurationEvent::FilterFailed {
            criteria: Default::default(),
            error: "boom".into(),
        });
    }
}
