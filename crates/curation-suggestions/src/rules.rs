//! Rule table turning weak dimensions and general file state into suggestions.

use chrono::{DateTime, Utc};
use curation_core::config::SuggestionConfig;
use curation_core::models::{
    ConfidenceScore, Difficulty, Dimension, FileRecord, Priority, Suggestion, SuggestionScope,
};
use serde_json::json;

struct Rule {
    id: String,
    scope: SuggestionScope,
    title: &'static str,
    description: String,
    priority: Priority,
    difficulty: Difficulty,
    expected_improvement: u32,
    minutes: u32,
    action: serde_json::Value,
}

impl Rule {
    fn into_suggestion(self) -> Suggestion {
        Suggestion {
            id: self.id,
            scope: self.scope,
            title: self.title.to_string(),
            description: self.description,
            priority: self.priority,
            difficulty: self.difficulty,
            expected_improvement: self.expected_improvement,
            time_estimate: format!("{} min", self.minutes),
            action: self.action,
        }
    }
}

/// Candidates for one weak dimension. Falls back to a re-analysis suggestion
/// when no specific rule applies.
pub(crate) fn for_dimension(
    dimension: Dimension,
    score: f64,
    file: &FileRecord,
    config: &SuggestionConfig,
) -> Vec<Suggestion> {
    let scope = SuggestionScope::Dimension(dimension);
    let mut rules = Vec::new();

    match dimension {
        Dimension::Categorical => {
            let assigned = file.categories.len();
            if assigned == 0 {
                rules.push(Rule {
                    id: "add-categories".into(),
                    scope,
                    title: "Add categories",
                    description: "No categories assigned. Add one to make the file discoverable."
                        .into(),
                    priority: Priority::High,
                    difficulty: Difficulty::Easy,
                    expected_improvement: 20,
                    minutes: 2,
                    action: json!({ "type": "add_categories", "file_id": file.id }),
                });
            } else if assigned < config.min_categories {
                rules.push(Rule {
                    id: "add-more-categories".into(),
                    scope,
                    title: "Add more categories",
                    description: format!(
                        "Only {assigned} of the recommended {} categories are assigned.",
                        config.min_categories
                    ),
                    priority: Priority::Medium,
                    difficulty: Difficulty::Easy,
                    expected_improvement: 10,
                    minutes: 2,
                    action: json!({
                        "type": "add_categories",
                        "file_id": file.id,
                        "current": file.categories,
                    }),
                });
            }
            if !file.pending_categories.is_empty() {
                rules.push(Rule {
                    id: "review-category-suggestions".into(),
                    scope,
                    title: "Review category suggestions",
                    description: format!(
                        "{} category recommendation(s) are waiting for review.",
                        file.pending_categories.len()
                    ),
                    priority: Priority::Medium,
                    difficulty: Difficulty::Easy,
                    expected_improvement: 15,
                    minutes: 1,
                    action: json!({
                        "type": "review_categories",
                        "file_id": file.id,
                        "categories": file.pending_categories,
                    }),
                });
            }
        }
        Dimension::Semantic => {
            let preview_len = file.preview.as_deref().map_or(0, |p| p.chars().count());
            if preview_len < config.min_preview_len {
                rules.push(Rule {
                    id: "expand-preview".into(),
                    scope,
                    title: "Expand the preview",
                    description: format!(
                        "The preview has {preview_len} characters; aim for at least {}.",
                        config.min_preview_len
                    ),
                    priority: Priority::Medium,
                    difficulty: Difficulty::Medium,
                    expected_improvement: 15,
                    minutes: 5,
                    action: json!({ "type": "edit_preview", "file_id": file.id }),
                });
            }
            if file.keywords.len() < config.min_keywords {
                rules.push(Rule {
                    id: "extract-keywords".into(),
                    scope,
                    title: "Extract keywords",
                    description: format!(
                        "{} keyword(s) found; extract at least {}.",
                        file.keywords.len(),
                        config.min_keywords
                    ),
                    priority: Priority::Medium,
                    difficulty: Difficulty::Easy,
                    expected_improvement: 10,
                    minutes: 2,
                    action: json!({ "type": "extract_keywords", "file_id": file.id }),
                });
            }
        }
        Dimension::Structural => {
            if file.structure.is_none() {
                rules.push(Rule {
                    id: "analyze-structure".into(),
                    scope,
                    title: "Analyze document structure",
                    description: "No headings or sections were extracted for this file.".into(),
                    priority: Priority::Low,
                    difficulty: Difficulty::Medium,
                    expected_improvement: 10,
                    minutes: 5,
                    action: json!({ "type": "analyze_structure", "file_id": file.id }),
                });
            }
        }
        Dimension::Temporal => {
            if let Some(problem) = date_problem(file.created_at, file.modified_at, Utc::now()) {
                rules.push(Rule {
                    id: "fix-dates".into(),
                    scope,
                    title: "Fix file dates",
                    description: format!("The file dates need attention: {problem}."),
                    priority: Priority::Low,
                    difficulty: Difficulty::Easy,
                    expected_improvement: 5,
                    minutes: 1,
                    action: json!({ "type": "fix_dates", "file_id": file.id, "problem": problem }),
                });
            }
        }
        Dimension::Relational => {
            if file.linked_files.is_empty() {
                rules.push(Rule {
                    id: "link-related-files".into(),
                    scope,
                    title: "Link related files",
                    description: "This file is not linked to any other file.".into(),
                    priority: Priority::Low,
                    difficulty: Difficulty::Medium,
                    expected_improvement: 10,
                    minutes: 10,
                    action: json!({ "type": "link_files", "file_id": file.id }),
                });
            }
        }
    }

    if rules.is_empty() {
        rules.push(Rule {
            id: format!("reanalyze-{dimension}"),
            scope,
            title: "Re-run analysis",
            description: format!(
                "The {dimension} score is {:.0}% with no specific cause. Re-analyze the file.",
                score * 100.0
            ),
            priority: Priority::Low,
            difficulty: Difficulty::Medium,
            expected_improvement: 5,
            minutes: 5,
            action: json!({ "type": "reanalyze", "file_id": file.id, "dimension": dimension }),
        });
    }

    rules.into_iter().map(Rule::into_suggestion).collect()
}

/// Candidates that depend on the overall score and iteration, not on a dimension.
pub(crate) fn general(
    file: &FileRecord,
    confidence: &ConfidenceScore,
    config: &SuggestionConfig,
) -> Vec<Suggestion> {
    let mut rules = Vec::new();

    if confidence.overall() < config.low_overall_threshold {
        rules.push(Rule {
            id: "comprehensive-review".into(),
            scope: SuggestionScope::General,
            title: "Comprehensive review",
            description: format!(
                "Overall confidence is {:.0}%. Review the file end to end.",
                confidence.overall_percent()
            ),
            priority: Priority::High,
            difficulty: Difficulty::Hard,
            expected_improvement: 25,
            minutes: 15,
            action: json!({ "type": "comprehensive_review", "file_id": file.id }),
        });
    }

    if confidence.iteration() > config.max_iterations_before_review {
        rules.push(Rule {
            id: "review-analysis-approach".into(),
            scope: SuggestionScope::General,
            title: "Review the analysis approach",
            description: format!(
                "The file has been analyzed {} times without converging.",
                confidence.iteration()
            ),
            priority: Priority::Medium,
            difficulty: Difficulty::Medium,
            expected_improvement: 10,
            minutes: 10,
            action: json!({ "type": "review_approach", "file_id": file.id }),
        });
    }

    rules.into_iter().map(Rule::into_suggestion).collect()
}

fn date_problem(
    created: Option<DateTime<Utc>>,
    modified: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<&'static str> {
    let (Some(created), Some(modified)) = (created, modified) else {
        return Some("missing date");
    };
    if modified < created {
        Some("modified before created")
    } else if created > now || modified > now {
        Some("date in the future")
    } else {
        None
    }
}
