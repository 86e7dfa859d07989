//! SuggestionEngine: ranked improvement actions and category recommendations.

use std::collections::HashSet;

use curation_core::config::SuggestionConfig;
use curation_core::models::{
    CategoryDefinition, CategorySuggestion, ConfidenceScore, Dimension, FileRecord, Suggestion,
};
use curation_core::traits::ISimilarityStrategy;
use curation_observability::tracing_setup::events;

use crate::keywords::extract_keywords;
use crate::rules;
use crate::similarity::LevenshteinSimilarity;

/// Generates suggestions for one file at a time. Holds no per-file state.
pub struct SuggestionEngine {
    config: SuggestionConfig,
    similarity: Box<dyn ISimilarityStrategy>,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(SuggestionConfig::default())
    }
}

impl SuggestionEngine {
    pub fn new(config: SuggestionConfig) -> Self {
        Self {
            config,
            similarity: Box::new(LevenshteinSimilarity),
        }
    }

    /// Replace the strategy used for name-only category matches.
    pub fn with_similarity(mut self, similarity: Box<dyn ISimilarityStrategy>) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Dimensions scoring below the weak threshold, weakest first, capped.
    pub fn weak_dimensions(&self, confidence: &ConfidenceScore) -> Vec<(Dimension, f64)> {
        let mut weak: Vec<(Dimension, f64)> = confidence
            .dimensions()
            .iter()
            .filter(|(_, score)| **score < self.config.weak_dimension_threshold)
            .map(|(dimension, score)| (*dimension, *score))
            .collect();
        weak.sort_by(|a, b| a.1.total_cmp(&b.1));
        weak.truncate(self.config.max_weak_dimensions);
        weak
    }

    /// Up to `max_suggestions` improvement actions, best first.
    ///
    /// Ranked by priority weight + difficulty weight + expected improvement / 10;
    /// equal scores keep rule order. Unanalyzed files get none.
    pub fn generate(&self, file: &FileRecord) -> Vec<Suggestion> {
        let _span = curation_observability::suggestion_span!(file.id).entered();
        let Some(confidence) = &file.confidence else {
            events::suggestions_generated(&file.id, 0, 0);
            return Vec::new();
        };

        let mut candidates: Vec<Suggestion> = self
            .weak_dimensions(confidence)
            .into_iter()
            .flat_map(|(dimension, score)| {
                rules::for_dimension(dimension, score, file, &self.config)
            })
            .collect();
        candidates.extend(rules::general(file, confidence, &self.config));
        let candidate_count = candidates.len();

        let mut seen = HashSet::new();
        candidates.retain(|s| seen.insert(s.id.clone()));
        candidates.sort_by(|a, b| b.priority_score().total_cmp(&a.priority_score()));
        candidates.truncate(self.config.max_suggestions);

        events::suggestions_generated(&file.id, candidate_count, candidates.len());
        candidates
    }

    /// Categories from `known` the file is not yet in, ranked by similarity.
    ///
    /// Categories with keywords score by keyword overlap; the rest score by
    /// name similarity to the file's keywords, damped. Only scores above the
    /// floor are kept.
    pub fn suggest_categories(
        &self,
        file: &FileRecord,
        known: &[CategoryDefinition],
    ) -> Vec<CategorySuggestion> {
        let _span = curation_observability::suggestion_span!(file.id).entered();
        let keywords = match extract_keywords(
            file.text(),
            self.config.keyword_limit,
            self.config.min_keyword_len,
        ) {
            Ok(keywords) => keywords,
            Err(e) => {
                tracing::warn!(
                    event = "keyword_extraction_failed",
                    file_id = %file.id,
                    error = %e,
                    "keyword extraction failed"
                );
                return Vec::new();
            }
        };

        let mut ranked: Vec<CategorySuggestion> = known
            .iter()
            .filter(|category| {
                !category.name.trim().is_empty() && !file.has_category(&category.name)
            })
            .map(|category| self.score_category(&keywords, category))
            .filter(|s| s.confidence > self.config.min_category_confidence)
            .collect();
        ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        ranked.truncate(self.config.max_category_suggestions);

        tracing::debug!(
            event = "categories_suggested",
            file_id = %file.id,
            known = known.len(),
            returned = ranked.len(),
            "category suggestions ranked"
        );
        ranked
    }

    fn score_category(
        &self,
        keywords: &[String],
        category: &CategoryDefinition,
    ) -> CategorySuggestion {
        let category_keywords: Vec<String> = category
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        let (confidence, matched) = if category_keywords.is_empty() {
            let name = category.name.trim().to_lowercase();
            let score = self.similarity.similarity(&keywords.join(" "), &name)
                * self.config.name_match_damping;
            (score, Vec::new())
        } else {
            let matched: Vec<String> = keywords
                .iter()
                .filter(|keyword| {
                    category_keywords
                        .iter()
                        .any(|ck| ck.contains(keyword.as_str()) || keyword.contains(ck.as_str()))
                })
                .cloned()
                .collect();
            let denominator = keywords.len().max(category_keywords.len());
            (matched.len() as f64 / denominator as f64, matched)
        };

        let reason = if matched.is_empty() {
            "content similarity".to_string()
        } else {
            format!("Matched keywords: {}", matched.join(", "))
        };

        CategorySuggestion {
            name: category.name.clone(),
            confidence,
            reason,
            matched_keywords: matched,
        }
    }
}

impl std::fmt::Debug for SuggestionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionEngine")
            .field("config", &self.config)
            .field("similarity", &self.similarity.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(overall: f64, dimensions: &[(Dimension, f64)]) -> FileRecord {
        let score = dimensions
            .iter()
            .fold(ConfidenceScore::new(overall, 1), |s, (d, v)| {
                s.with_dimension(*d, *v)
            });
        FileRecord::new("f", "f.md").with_confidence(score)
    }

    #[test]
    fn weak_dimensions_are_weakest_first_and_capped() {
        let file = scored(
            0.6,
            &[
                (Dimension::Semantic, 0.7),
                (Dimension::Categorical, 0.1),
                (Dimension::Structural, 0.5),
                (Dimension::Temporal, 0.3),
                (Dimension::Relational, 0.9),
            ],
        );
        let weak = SuggestionEngine::default().weak_dimensions(file.confidence.as_ref().unwrap());
        let dims: Vec<Dimension> = weak.iter().map(|(d, _)| *d).collect();
        assert_eq!(
            dims,
            vec![
                Dimension::Categorical,
                Dimension::Temporal,
                Dimension::Structural,
            ]
        );
    }

    #[test]
    fn threshold_is_exclusive() {
        let file = scored(0.8, &[(Dimension::Semantic, 0.75)]);
        assert!(SuggestionEngine::default()
            .weak_dimensions(file.confidence.as_ref().unwrap())
            .is_empty());
    }

    #[test]
    fn unanalyzed_file_gets_no_suggestions() {
        assert!(SuggestionEngine::default()
            .generate(&FileRecord::new("f", "f.md"))
            .is_empty());
    }

    #[test]
    fn empty_keywords_and_name_only_categories_score_nothing() {
        let file = FileRecord::new("f", "f.md");
        let known = [CategoryDefinition::new("cooking")];
        assert!(SuggestionEngine::default()
            .suggest_categories(&file, &known)
            .is_empty());
    }

    struct Always(f64);

    impl ISimilarityStrategy for Always {
        fn similarity(&self, _: &str, _: &str) -> f64 {
            self.0
        }

        fn name(&self) -> &str {
            "always"
        }
    }

    #[test]
    fn name_only_matches_are_damped() {
        let file = FileRecord::new("f", "f.md").with_content("anything goes here");
        let known = [CategoryDefinition::new("misc")];
        let engine = SuggestionEngine::default().with_similarity(Box::new(Always(1.0)));
        let suggestions = engine.suggest_categories(&file, &known);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].confidence, 0.5);
        assert_eq!(suggestions[0].reason, "content similarity");
    }
}
