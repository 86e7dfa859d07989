use crate::models::{FileRecord, ProcessingLogEntry};

/// Provider of the current file corpus.
pub trait ICorpusProvider: Send + Sync {
    /// Snapshot of all files.
    fn files(&self) -> Vec<FileRecord>;

    /// Recent "file processed" entries, used for processing speed.
    fn processing_log(&self) -> Vec<ProcessingLogEntry> {
        Vec::new()
    }

    /// Look up one file by id.
    fn file(&self, id: &str) -> Option<FileRecord> {
        self.files().into_iter().find(|f| f.id == id)
    }
}
