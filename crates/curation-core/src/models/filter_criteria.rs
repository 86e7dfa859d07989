use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Status;

/// Inclusive overall-confidence bounds, expressed in percent (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceRange {
    pub min: f64,
    pub max: f64,
}

impl ConfidenceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Swap inverted bounds.
    pub fn normalized(self) -> Self {
        if self.min > self.max {
            Self::new(self.max, self.min)
        } else {
            self
        }
    }

    pub fn contains(&self, percent: f64) -> bool {
        percent >= self.min && percent <= self.max
    }
}

/// Inclusive analysis-iteration bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationRange {
    pub min: u32,
    pub max: u32,
}

impl IterationRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Swap inverted bounds.
    pub fn normalized(self) -> Self {
        if self.min > self.max {
            Self::new(self.max, self.min)
        } else {
            self
        }
    }

    pub fn contains(&self, iteration: u32) -> bool {
        iteration >= self.min && iteration <= self.max
    }
}

/// Filter criteria. Omitted fields impose no constraint; present fields are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub confidence_range: Option<ConfidenceRange>,
    #[serde(default)]
    pub statuses: Option<BTreeSet<Status>>,
    #[serde(default)]
    pub iteration_range: Option<IterationRange>,
}

impl FilterCriteria {
    /// Criteria that match every analyzed file.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confidence_range(mut self, min: f64, max: f64) -> Self {
        self.confidence_range = Some(ConfidenceRange::new(min, max));
        self
    }

    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = Status>) -> Self {
        self.statuses = Some(statuses.into_iter().collect());
        self
    }

    pub fn with_iteration_range(mut self, min: u32, max: u32) -> Self {
        self.iteration_range = Some(IterationRange::new(min, max));
        self
    }

    /// Same criteria with every inverted range swapped. Never fails.
    pub fn normalized(&self) -> Self {
        Self {
            confidence_range: self.confidence_range.map(ConfidenceRange::normalized),
            statuses: self.statuses.clone(),
            iteration_range: self.iteration_range.map(IterationRange::normalized),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.confidence_range.is_none() && self.statuses.is_none() && self.iteration_range.is_none()
    }
}
