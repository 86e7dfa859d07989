//! Edit-distance string similarity.

use curation_core::traits::ISimilarityStrategy;

/// Classic Levenshtein distance over chars, unit cost for insert, delete and substitute.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rolling rows of the DP table.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// `(max_len - distance) / max_len`, in [0, 1]. Two empty strings score 1.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    (max_len - levenshtein(a, b)) as f64 / max_len as f64
}

/// Default similarity strategy for name-only category matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinSimilarity;

impl ISimilarityStrategy for LevenshteinSimilarity {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        string_similarity(a, b)
    }

    fn name(&self) -> &str {
        "levenshtein"
    }
}
