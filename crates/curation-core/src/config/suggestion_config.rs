use serde::{Deserialize, Serialize};

use super::defaults;

/// Suggestion engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Dimensions scoring below this are weak.
    pub weak_dimension_threshold: f64,
    pub max_weak_dimensions: usize,
    pub max_suggestions: usize,
    pub max_category_suggestions: usize,
    /// Category recommendations must score strictly above this.
    pub min_category_confidence: f64,
    /// Most frequent keywords kept per file.
    pub keyword_limit: usize,
    /// Shortest keyword kept, in characters.
    pub min_keyword_len: usize,
    /// Multiplier applied to name-only category matches.
    pub name_match_damping: f64,
    pub min_preview_len: usize,
    pub min_keywords: usize,
    pub min_categories: usize,
    /// Overall confidence below which a comprehensive review is suggested.
    pub low_overall_threshold: f64,
    /// Iterations after which the analysis approach should be reviewed.
    pub max_iterations_before_review: u32,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            weak_dimension_threshold: defaults::DEFAULT_WEAK_DIMENSION_THRESHOLD,
            max_weak_dimensions: defaults::DEFAULT_MAX_WEAK_DIMENSIONS,
            max_suggestions: defaults::DEFAULT_MAX_SUGGESTIONS,
            max_category_suggestions: defaults::DEFAULT_MAX_CATEGORY_SUGGESTIONS,
            min_category_confidence: defaults::DEFAULT_MIN_CATEGORY_CONFIDENCE,
            keyword_limit: defaults::DEFAULT_KEYWORD_LIMIT,
            min_keyword_len: defaults::DEFAULT_MIN_KEYWORD_LEN,
            name_match_damping: defaults::DEFAULT_NAME_MATCH_DAMPING,
            min_preview_len: defaults::DEFAULT_MIN_PREVIEW_LEN,
            min_keywords: defaults::DEFAULT_MIN_KEYWORDS,
            min_categories: defaults::DEFAULT_MIN_CATEGORIES,
            low_overall_threshold: defaults::DEFAULT_LOW_OVERALL_THRESHOLD,
            max_iterations_before_review: defaults::DEFAULT_MAX_ITERATIONS_BEFORE_REVIEW,
        }
    }
}
