use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Status;

/// Number of files per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub unprocessed: usize,
    pub needs_work: usize,
    pub stagnant: usize,
    pub improving: usize,
    pub converged: usize,
}

impl StatusCounts {
    pub fn increment(&mut self, status: Status) {
        *self.slot_mut(status) += 1;
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Unprocessed => self.unprocessed,
            Status::NeedsWork => self.needs_work,
            Status::Stagnant => self.stagnant,
            Status::Improving => self.improving,
            Status::Converged => self.converged,
        }
    }

    pub fn total(&self) -> usize {
        Status::ALL.iter().map(|s| self.get(*s)).sum()
    }

    fn slot_mut(&mut self, status: Status) -> &mut usize {
        match status {
            Status::Unprocessed => &mut self.unprocessed,
            Status::NeedsWork => &mut self.needs_work,
            Status::Stagnant => &mut self.stagnant,
            Status::Improving => &mut self.improving,
            Status::Converged => &mut self.converged,
        }
    }
}

/// Coarse health grade derived from the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthSummary {
    /// 0–100.
    pub score: u8,
    pub grade: HealthGrade,
}

/// Corpus-wide confidence health at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub timestamp: DateTime<Utc>,
    pub total: usize,
    pub analyzed: usize,
    pub counts: StatusCounts,
    /// Mean overall confidence of analyzed files, percent, 2 decimals.
    pub avg_confidence: f64,
    /// Share of analyzed files that converged, percent.
    pub convergence_rate: f64,
    /// Relative change of avg confidence across recent snapshots, percent.
    pub improvement_rate: f64,
    /// Files processed per minute over the processing window.
    pub processing_speed: f64,
    pub health: HealthSummary,
}

/// Aligned series over the most recent snapshots, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trends {
    pub confidence: Vec<f64>,
    pub convergence: Vec<f64>,
    pub improvement: Vec<f64>,
    pub timestamps: Vec<DateTime<Utc>>,
}

impl Trends {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
