//! Frequency-ranked keyword extraction.

use std::collections::HashMap;
use std::sync::LazyLock;

use curation_core::errors::SuggestionError;
use regex::Regex;

static PUNCTUATION: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[^\w\s]").ok());

/// Common words carrying no topical signal. Only words that survive the
/// length cut need to be listed.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "also", "because", "been", "before", "being", "below",
    "between", "both", "does", "doing", "down", "during", "each", "every", "from", "further",
    "have", "having", "here", "into", "just", "more", "most", "much", "must", "only", "other",
    "over", "same", "should", "some", "such", "than", "that", "their", "them", "then", "there",
    "these", "they", "this", "those", "through", "under", "until", "very", "were", "what", "when",
    "where", "which", "while", "will", "with", "would", "your", "para", "como", "mais", "pelo",
    "pela", "isso", "esse", "essa", "este", "esta", "quando", "entre", "sobre",
];

/// The `limit` most frequent keywords of `text`.
///
/// Text is lowercased and stripped of punctuation; tokens shorter than
/// `min_len` chars and stop words are dropped. Ties keep first-seen order.
pub fn extract_keywords(
    text: &str,
    limit: usize,
    min_len: usize,
) -> Result<Vec<String>, SuggestionError> {
    let punctuation = PUNCTUATION.as_ref().ok_or_else(|| SuggestionError::Pattern {
        reason: "punctuation pattern unavailable".to_string(),
    })?;
    let cleaned = punctuation
        .replace_all(&text.to_lowercase(), "")
        .into_owned();

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in cleaned.split_whitespace() {
        if token.chars().count() < min_len || STOP_WORDS.contains(&token) {
            continue;
        }
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // Stable sort keeps first occurrence ahead on equal counts.
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    Ok(order.into_iter().take(limit).map(str::to_string).collect())
}
