/// Pluggable string similarity used to rank category recommendations.
pub trait ISimilarityStrategy: Send + Sync {
    /// Similarity in [0.0, 1.0]; identical inputs score 1.0.
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Human-readable strategy name.
    fn name(&self) -> &str;
}
