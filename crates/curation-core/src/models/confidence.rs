use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One named facet of a file's confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Semantic,
    Categorical,
    Structural,
    Temporal,
    Relational,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Semantic,
        Dimension::Categorical,
        Dimension::Structural,
        Dimension::Temporal,
        Dimension::Relational,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Semantic => "semantic",
            Self::Categorical => "categorical",
            Self::Structural => "structural",
            Self::Temporal => "temporal",
            Self::Relational => "relational",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence of a single analysis pass over a file.
///
/// All values are clamped to [0.0, 1.0] on construction and deserialization.
/// Dimensions that were never scored are absent, not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawConfidenceScore")]
pub struct ConfidenceScore {
    overall: f64,
    dimensions: BTreeMap<Dimension, f64>,
    iteration: u32,
}

#[derive(Deserialize)]
struct RawConfidenceScore {
    overall: f64,
    #[serde(default)]
    dimensions: BTreeMap<Dimension, f64>,
    #[serde(default = "first_iteration")]
    iteration: u32,
}

fn first_iteration() -> u32 {
    1
}

impl From<RawConfidenceScore> for ConfidenceScore {
    fn from(raw: RawConfidenceScore) -> Self {
        raw.dimensions.into_iter().fold(
            ConfidenceScore::new(raw.overall, raw.iteration),
            |score, (dimension, value)| score.with_dimension(dimension, value),
        )
    }
}

/// Clamp into [0.0, 1.0]; NaN collapses to 0.0.
fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl ConfidenceScore {
    /// Create a score with no dimensions. `iteration` is raised to at least 1.
    pub fn new(overall: f64, iteration: u32) -> Self {
        Self {
            overall: clamp_unit(overall),
            dimensions: BTreeMap::new(),
            iteration: iteration.max(1),
        }
    }

    /// Set one dimension, clamping the value.
    pub fn with_dimension(mut self, dimension: Dimension, value: f64) -> Self {
        self.dimensions.insert(dimension, clamp_unit(value));
        self
    }

    pub fn overall(&self) -> f64 {
        self.overall
    }

    /// Overall confidence as a percentage (0–100).
    pub fn overall_percent(&self) -> f64 {
        self.overall * 100.0
    }

    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    /// Score of one dimension, `None` when it was never scored.
    pub fn dimension(&self, dimension: Dimension) -> Option<f64> {
        self.dimensions.get(&dimension).copied()
    }

    pub fn dimensions(&self) -> &BTreeMap<Dimension, f64> {
        &self.dimensions
    }
}

impl fmt::Display for ConfidenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} (iteration {})", self.overall, self.iteration)
    }
}
