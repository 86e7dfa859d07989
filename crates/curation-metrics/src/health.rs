//! Health score and grade from average confidence and improvement rate.

use curation_core::config::HealthScoring;
use curation_core::models::{HealthGrade, HealthSummary};

/// Score corpus health.
///
/// `score = round(clamp01(avg/100 * w_c + clamp01(improvement/scale) * w_i) * 100)`,
/// graded against the configured thresholds.
pub fn score_health(
    avg_confidence: f64,
    improvement_rate: f64,
    scoring: &HealthScoring,
) -> HealthSummary {
    let confidence_part = avg_confidence / 100.0 * scoring.confidence_weight;
    let improvement_part =
        clamp01(improvement_rate / scoring.improvement_scale) * scoring.improvement_weight;
    let score = (clamp01(confidence_part + improvement_part) * 100.0).round() as u8;

    HealthSummary {
        score,
        grade: grade(score, scoring),
    }
}

fn grade(score: u8, scoring: &HealthScoring) -> HealthGrade {
    if score >= scoring.excellent_threshold {
        HealthGrade::Excellent
    } else if score >= scoring.good_threshold {
        HealthGrade::Good
    } else if score >= scoring.fair_threshold {
        HealthGrade::Fair
    } else {
        HealthGrade::Poor
    }
}

fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_corpus_is_excellent() {
        let health = score_health(100.0, 10.0, &HealthScoring::default());
        assert_eq!(health.score, 100);
        assert_eq!(health.grade, HealthGrade::Excellent);
    }

    #[test]
    fn confidence_alone_caps_at_sixty() {
        let health = score_health(100.0, 0.0, &HealthScoring::default());
        assert_eq!(health.score, 60);
        assert_eq!(health.grade, HealthGrade::Good);
    }

    #[test]
    fn negative_improvement_contributes_nothing() {
        let health = score_health(50.0, -40.0, &HealthScoring::default());
        assert_eq!(health.score, 30);
        assert_eq!(health.grade, HealthGrade::Poor);
    }

    #[test]
    fn improvement_saturates_at_scale() {
        let a = score_health(50.0, 10.0, &HealthScoring::default());
        let b = score_health(50.0, 250.0, &HealthScoring::default());
        assert_eq!(a, b);
        assert_eq!(a.score, 70);
    }

    #[test]
    fn thresholds_are_configurable() {
        let scoring = HealthScoring {
            fair_threshold: 20,
            ..Default::default()
        };
        assert_eq!(score_health(50.0, 0.0, &scoring).grade, HealthGrade::Fair);
    }
}
