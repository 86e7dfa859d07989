use std::fmt;

use serde::{Deserialize, Serialize};

use super::Dimension;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn weight(self) -> f64 {
        match self {
            Self::High => 3.0,
            Self::Medium => 2.0,
            Self::Low => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Easy fixes weigh as much as high-priority ones.
    pub fn weight(self) -> f64 {
        match self {
            Self::Easy => 3.0,
            Self::Medium => 2.0,
            Self::Hard => 1.0,
        }
    }
}

/// What a suggestion improves: one dimension, or the file as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionScope {
    Dimension(Dimension),
    General,
}

impl fmt::Display for SuggestionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimension(d) => d.fmt(f),
            Self::General => f.write_str("general"),
        }
    }
}

/// An improvement action for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Stable identifier, unique per rule.
    pub id: String,
    pub scope: SuggestionScope,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub difficulty: Difficulty,
    /// Expected confidence gain in percentage points.
    pub expected_improvement: u32,
    pub time_estimate: String,
    /// Opaque descriptor handed to whoever applies the suggestion.
    pub action: serde_json::Value,
}

impl Suggestion {
    /// Ranking score: priority weight + difficulty weight + expected improvement / 10.
    pub fn priority_score(&self) -> f64 {
        self.priority.weight()
            + self.difficulty.weight()
            + f64::from(self.expected_improvement) / 10.0
    }
}

/// A known category and the keywords that describe it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CategoryDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// A ranked category recommendation for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub name: String,
    /// In (0.3, 1.0].
    pub confidence: f64,
    pub reason: String,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
}
