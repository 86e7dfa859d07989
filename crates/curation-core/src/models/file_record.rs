use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ConfidenceScore, Status};
use crate::constants::MAX_HISTORY_PER_FILE;

/// Structural metadata extracted from a file by the analysis pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureInfo {
    pub headings: usize,
    pub sections: usize,
    pub word_count: usize,
}

/// A knowledge-base file as seen by the analytics engines.
///
/// Owned and mutated by the corpus provider; the engines only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub preview: Option<String>,
    /// Ordered, duplicate-free category names.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub confidence: Option<ConfidenceScore>,
    /// Previous confidence snapshots, newest last.
    #[serde(default)]
    pub history: Vec<ConfidenceScore>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub structure: Option<StructureInfo>,
    #[serde(default)]
    pub linked_files: Vec<String>,
    /// Category recommendations not yet reviewed by a user.
    #[serde(default)]
    pub pending_categories: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
}

impl FileRecord {
    /// Create an unanalyzed file with no content or metadata.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: None,
            preview: None,
            categories: Vec::new(),
            confidence: None,
            history: Vec::new(),
            keywords: Vec::new(),
            structure: None,
            linked_files: Vec::new(),
            pending_categories: Vec::new(),
            created_at: None,
            modified_at: None,
        }
    }

    pub fn with_confidence(mut self, confidence: ConfidenceScore) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }

    /// Replace the categories, dropping duplicates while keeping first-seen order.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.clear();
        for category in categories {
            self.add_category(category);
        }
        self
    }

    /// Add a category if it is not already assigned. Returns whether it was added.
    pub fn add_category(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if self.has_category(&category) {
            return false;
        }
        self.categories.push(category);
        true
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category))
    }

    /// Append a history snapshot, dropping the oldest beyond the per-file cap.
    pub fn push_history(&mut self, score: ConfidenceScore) {
        self.history.push(score);
        if self.history.len() > MAX_HISTORY_PER_FILE {
            let excess = self.history.len() - MAX_HISTORY_PER_FILE;
            self.history.drain(..excess);
        }
    }

    /// Text used for keyword extraction: content, falling back to the preview.
    pub fn text(&self) -> &str {
        self.content
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .or(self.preview.as_deref())
            .unwrap_or("")
    }

    /// Analysis iteration, 1 when the file was never analyzed.
    pub fn iteration(&self) -> u32 {
        self.confidence.as_ref().map_or(1, |c| c.iteration())
    }

    pub fn is_analyzed(&self) -> bool {
        self.confidence.is_some()
    }

    pub fn status(&self) -> Status {
        crate::classifier::classify_file(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_deduplicated_in_order() {
        let file = FileRecord::new("f1", "notes.md").with_categories(["rust", "tools", "Rust"]);
        assert_eq!(file.categories, vec!["rust", "tools"]);
    }

    #[test]
    fn text_falls_back_to_preview() {
        let file = FileRecord::new("f1", "a.md")
            .with_content("   ")
            .with_preview("preview text");
        assert_eq!(file.text(), "preview text");
        assert_eq!(FileRecord::new("f2", "b.md").text(), "");
    }

    #[test]
    fn history_is_bounded() {
        let mut file = FileRecord::new("f1", "a.md");
        for i in 0..(MAX_HISTORY_PER_FILE + 5) {
            file.push_history(ConfidenceScore::new(i as f64 / 100.0, 1));
        }
        assert_eq!(file.history.len(), MAX_HISTORY_PER_FILE);
        assert!((file.history[0].overall() - 0.05).abs() < 1e-9);
    }
}
