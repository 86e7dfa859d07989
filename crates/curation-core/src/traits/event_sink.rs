use crate::models::CurationEvent;

/// Receiver of events produced toward collaborators.
pub trait IEventSink: Send + Sync {
    fn emit(&self, event: CurationEvent);
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl IEventSink for NoopEventSink {
    fn emit(&self, _event: CurationEvent) {}
}
