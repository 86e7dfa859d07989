mod corpus;
mod event_sink;
mod similarity;

pub use corpus::ICorpusProvider;
pub use event_sink::{IEventSink, NoopEventSink};
pub use similarity::ISimilarityStrategy;
