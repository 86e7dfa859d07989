//! Test fixture loader and file builders for the curation engines.
//!
//! Golden corpora live as JSON under the workspace `test-fixtures/golden`
//! directory; builders produce deterministic `FileRecord`s in code.

use std::path::PathBuf;
use std::sync::RwLock;

use curation_core::models::{
    CategoryDefinition, ConfidenceScore, Dimension, FileRecord, ProcessingLogEntry,
};
use curation_core::traits::ICorpusProvider;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to the directory holding test-fixtures/golden.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/golden from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// A golden corpus: files, optional known categories, and expected values.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusFixture {
    pub description: String,
    pub files: Vec<FileRecord>,
    #[serde(default)]
    pub categories: Vec<CategoryDefinition>,
    #[serde(default)]
    pub expected: serde_json::Value,
}

/// Load a golden corpus fixture.
pub fn load_corpus(relative_path: &str) -> CorpusFixture {
    load_fixture(relative_path)
}

/// An analyzed file with the given overall confidence and no dimensions.
pub fn analyzed_file(id: &str, overall: f64) -> FileRecord {
    FileRecord::new(id, format!("{id}.md")).with_confidence(ConfidenceScore::new(overall, 1))
}

/// An analyzed file with per-dimension scores.
pub fn scored_file(id: &str, overall: f64, dimensions: &[(Dimension, f64)]) -> FileRecord {
    let score = dimensions
        .iter()
        .fold(ConfidenceScore::new(overall, 1), |score, (dimension, value)| {
            score.with_dimension(*dimension, *value)
        });
    FileRecord::new(id, format!("{id}.md")).with_confidence(score)
}

/// An analyzed file whose history holds the given overall values, oldest first.
pub fn file_with_history(id: &str, overall: f64, history: &[f64]) -> FileRecord {
    let mut file = analyzed_file(id, overall);
    for value in history {
        file.push_history(ConfidenceScore::new(*value, 1));
    }
    file
}

/// A file with a random UUID id and no confidence.
pub fn unprocessed_file() -> FileRecord {
    let id = uuid::Uuid::new_v4().to_string();
    FileRecord::new(id.clone(), format!("{id}.md"))
}

/// Deterministic corpus of `n` files covering every status.
///
/// Every 10th file is unprocessed; the rest cycle overall confidence through
/// 0.00–0.99, iterations through 1–5 and three history shapes.
pub fn large_corpus(n: usize) -> Vec<FileRecord> {
    (0..n)
        .map(|i| {
            let id = format!("file-{i:05}");
            if i % 10 == 9 {
                return FileRecord::new(id.clone(), format!("{id}.md"));
            }
            let overall = (i % 100) as f64 / 100.0;
            let iteration = 1 + (i % 5) as u32;
            let mut file = FileRecord::new(id.clone(), format!("{id}.md"))
                .with_confidence(ConfidenceScore::new(overall, iteration));
            let history: &[f64] = match i % 3 {
                0 => &[0.2, 0.3, 0.4],
                1 => &[0.5, 0.5, 0.5],
                _ => &[0.6, 0.5],
            };
            for value in history {
                file.push_history(ConfidenceScore::new(*value, 1));
            }
            file
        })
        .collect()
}

/// In-memory corpus provider for runtime tests.
#[derive(Debug, Default)]
pub struct InMemoryCorpus {
    files: RwLock<Vec<FileRecord>>,
    log: RwLock<Vec<ProcessingLogEntry>>,
}

impl InMemoryCorpus {
    pub fn new(files: Vec<FileRecord>) -> Self {
        Self {
            files: RwLock::new(files),
            log: RwLock::new(Vec::new()),
        }
    }

    /// Replace all files.
    pub fn set_files(&self, files: Vec<FileRecord>) {
        *self.files.write().unwrap() = files;
    }

    /// Replace one file by id, or append it.
    pub fn upsert(&self, file: FileRecord) {
        let mut files = self.files.write().unwrap();
        match files.iter_mut().find(|f| f.id == file.id) {
            Some(existing) => *existing = file,
            None => files.push(file),
        }
    }

    pub fn remove(&self, id: &str) {
        self.files.write().unwrap().retain(|f| f.id != id);
    }

    pub fn record_processed(&self, entry: ProcessingLogEntry) {
        self.log.write().unwrap().push(entry);
    }
}

impl ICorpusProvider for InMemoryCorpus {
    fn files(&self) -> Vec<FileRecord> {
        self.files.read().unwrap().clone()
    }

    fn processing_log(&self) -> Vec<ProcessingLogEntry> {
        self.log.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curation_core::models::Status;

    #[test]
    fn fixtures_root_exists() {
        assert!(
            fixtures_root().exists(),
            "test-fixtures directory not found"
        );
    }

    #[test]
    fn all_golden_files_exist() {
        let files = [
            "golden/filter/scenario_confidence_range.json",
            "golden/metrics/three_file_corpus.json",
            "golden/suggestions/weak_categorical.json",
            "golden/suggestions/category_keywords.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn large_corpus_covers_every_status() {
        let corpus = large_corpus(300);
        for status in Status::ALL {
            assert!(
                corpus.iter().any(|f| f.status() == status),
                "no file with status {status}"
            );
        }
    }

    #[test]
    fn in_memory_corpus_upserts() {
        let corpus = InMemoryCorpus::new(vec![analyzed_file("a", 0.2)]);
        corpus.upsert(analyzed_file("a", 0.9));
        corpus.upsert(analyzed_file("b", 0.1));
        let files = corpus.files();
        assert_eq!(files.len(), 2);
        assert_eq!(corpus.file("a").unwrap().confidence.unwrap().overall(), 0.9);
    }
}
