mod confidence;
mod degradation_event;
mod events;
mod file_record;
mod filter_criteria;
mod metrics_snapshot;
mod processing;
mod status;
mod suggestion;

pub use confidence::{ConfidenceScore, Dimension};
pub use degradation_event::DegradationEvent;
pub use events::CurationEvent;
pub use file_record::{FileRecord, StructureInfo};
pub use filter_criteria::{ConfidenceRange, FilterCriteria, IterationRange};
pub use metrics_snapshot::{HealthGrade, HealthSummary, MetricsSnapshot, StatusCounts, Trends};
pub use processing::ProcessingLogEntry;
pub use status::Status;
pub use suggestion::{
    CategoryDefinition, CategorySuggestion, Difficulty, Priority, Suggestion, SuggestionScope,
};
