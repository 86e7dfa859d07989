//! # curation-suggestions
//!
//! Ranks improvement actions for a file's weakest confidence dimensions and
//! recommends categories by keyword overlap or name similarity.

pub mod engine;
pub mod keywords;
mod rules;
pub mod similarity;

pub use engine::SuggestionEngine;
pub use keywords::extract_keywords;
pub use similarity::{levenshtein, string_similarity, LevenshteinSimilarity};
