//! Integration tests for the concurrent filter engine: golden scenario,
//! parallel/sequential agreement, fallback paths, and caching.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use curation_core::config::FilterConfig;
use curation_core::errors::FilterError;
use curation_core::models::{FileRecord, FilterCriteria, Status};
use curation_filter::{matches, BatchEvaluator, ConcurrentFilterEngine, FilterMode};
use test_fixtures::{analyzed_file, large_corpus, load_corpus};

fn pooled(pool_size: usize) -> FilterConfig {
    FilterConfig {
        pool_size: Some(pool_size),
        ..FilterConfig::default()
    }
}

fn ids(files: &[FileRecord]) -> BTreeSet<String> {
    files.iter().map(|f| f.id.clone()).collect()
}

fn expected_ids(files: &[FileRecord], criteria: &FilterCriteria) -> BTreeSet<String> {
    files
        .iter()
        .filter(|f| matches(f, criteria))
        .map(|f| f.id.clone())
        .collect()
}

fn fixture_ids(value: &serde_json::Value) -> BTreeSet<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

// ── Golden scenario ─────────────────────────────────────────────────────────

#[tokio::test]
async fn confidence_range_scenario() {
    let corpus = load_corpus("golden/filter/scenario_confidence_range.json");
    let engine = ConcurrentFilterEngine::new(pooled(2));

    let wide = engine
        .apply(
            &corpus.files,
            &FilterCriteria::new().with_confidence_range(50.0, 100.0),
        )
        .await;
    assert_eq!(ids(&wide), fixture_ids(&corpus.expected["range_50_100"]));

    let narrow = engine
        .apply(
            &corpus.files,
            &FilterCriteria::new().with_confidence_range(80.0, 100.0),
        )
        .await;
    assert_eq!(ids(&narrow), fixture_ids(&corpus.expected["range_80_100"]));
}

#[tokio::test]
async fn iteration_range_scenario() {
    let corpus = load_corpus("golden/filter/scenario_confidence_range.json");
    let engine = ConcurrentFilterEngine::sequential_only(FilterConfig::default());
    let result = engine
        .apply(
            &corpus.files,
            &FilterCriteria::new().with_iteration_range(4, 2),
        )
        .await;
    assert_eq!(
        ids(&result),
        fixture_ids(&corpus.expected["iterations_2_4"])
    );
}

#[tokio::test]
async fn unanalyzed_files_never_match() {
    let files = vec![analyzed_file("a", 0.4), FileRecord::new("b", "b.md")];
    let engine = ConcurrentFilterEngine::sequential_only(FilterConfig::default());
    let result = engine.apply(&files, &FilterCriteria::new()).await;
    assert_eq!(ids(&result), BTreeSet::from(["a".to_string()]));
}

// ── Parallel path ───────────────────────────────────────────────────────────

#[tokio::test]
async fn parallel_matches_sequential_on_large_corpus() {
    let files = large_corpus(1_250);
    let parallel = ConcurrentFilterEngine::new(pooled(4));
    let sequential = ConcurrentFilterEngine::sequential_only(FilterConfig::default());

    let criteria = [
        FilterCriteria::new(),
        FilterCriteria::new().with_confidence_range(25.0, 75.0),
        FilterCriteria::new().with_statuses([Status::Stagnant, Status::Improving]),
        FilterCriteria::new().with_statuses([Status::Unprocessed]),
        FilterCriteria::new()
            .with_confidence_range(90.0, 10.0)
            .with_statuses([Status::NeedsWork])
            .with_iteration_range(2, 3),
    ];

    for criteria in &criteria {
        let outcome = parallel.apply_detailed(&files, criteria).await;
        assert_eq!(outcome.mode, FilterMode::Parallel);
        let expected = sequential.apply(&files, criteria).await;
        assert_eq!(ids(&outcome.files), ids(&expected), "criteria {criteria:?}");
        assert_eq!(ids(&expected), expected_ids(&files, criteria));
    }
    assert_eq!(parallel.stats().parallel_runs, criteria.len() as u64);
    assert_eq!(parallel.stats().fallbacks, 0);
}

#[tokio::test]
async fn below_threshold_stays_sequential() {
    let engine = ConcurrentFilterEngine::new(pooled(2));
    let outcome = engine
        .apply_detailed(&large_corpus(199), &FilterCriteria::new())
        .await;
    assert_eq!(outcome.mode, FilterMode::Sequential);
    assert_eq!(engine.stats().sequential_runs, 1);
}

#[tokio::test]
async fn sequential_only_engine_has_no_pool() {
    let engine = ConcurrentFilterEngine::sequential_only(FilterConfig::default());
    assert!(!engine.is_parallel());
    let files = large_corpus(600);
    let outcome = engine.apply_detailed(&files, &FilterCriteria::new()).await;
    assert_eq!(outcome.mode, FilterMode::Sequential);
    assert_eq!(
        ids(&outcome.files),
        expected_ids(&files, &FilterCriteria::new())
    );
}

#[tokio::test]
async fn queued_batches_do_not_count_against_the_batch_timeout() {
    // Ten 30 ms batches on one unit take ~300 ms in total, well past the
    // 100 ms per-batch timeout, yet no single batch is late.
    let steady: BatchEvaluator = Arc::new(|batch, criteria| {
        std::thread::sleep(Duration::from_millis(30));
        Ok(batch
            .iter()
            .filter(|f| matches(f, criteria))
            .map(|f| f.id.clone())
            .collect())
    });
    let engine = ConcurrentFilterEngine::with_evaluator(
        FilterConfig {
            pool_size: Some(1),
            batch_timeout_ms: 100,
            poll_interval_ms: 1,
            ..FilterConfig::default()
        },
        steady,
    );
    let files = large_corpus(1_000);
    let criteria = FilterCriteria::new().with_confidence_range(50.0, 100.0);

    let outcome = engine.apply_detailed(&files, &criteria).await;

    assert_eq!(outcome.mode, FilterMode::Parallel);
    assert!(outcome.fallback_error.is_none());
    assert_eq!(ids(&outcome.files), expected_ids(&files, &criteria));
    assert!(engine.degradations().is_empty());
}

// ── Fallback ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn slow_batches_fall_back_to_sequential() {
    let slow: BatchEvaluator = Arc::new(|_, _| {
        std::thread::sleep(Duration::from_millis(200));
        Ok(Vec::new())
    });
    let engine = ConcurrentFilterEngine::with_evaluator(
        FilterConfig {
            pool_size: Some(2),
            batch_timeout_ms: 20,
            poll_interval_ms: 1,
            ..FilterConfig::default()
        },
        slow,
    );
    let files = large_corpus(300);
    let criteria = FilterCriteria::new().with_confidence_range(50.0, 100.0);

    let outcome = engine.apply_detailed(&files, &criteria).await;

    assert_eq!(outcome.mode, FilterMode::Fallback);
    assert!(matches!(
        outcome.fallback_error,
        Some(FilterError::BatchTimeout { .. })
    ));
    assert_eq!(ids(&outcome.files), expected_ids(&files, &criteria));
    assert_eq!(engine.stats().fallbacks, 1);
    assert_eq!(engine.degradations().len(), 1);
}

#[tokio::test]
async fn panicking_unit_falls_back_to_sequential() {
    let panicking: BatchEvaluator = Arc::new(|_, _| panic!("unit crashed"));
    let engine = ConcurrentFilterEngine::with_evaluator(pooled(2), panicking);
    let files = large_corpus(400);

    let outcome = engine.apply_detailed(&files, &FilterCriteria::new()).await;

    assert_eq!(outcome.mode, FilterMode::Fallback);
    assert!(matches!(outcome.fallback_error, Some(FilterError::UnitFailed { .. })));
    assert_eq!(
        ids(&outcome.files),
        expected_ids(&files, &FilterCriteria::new())
    );
}

#[tokio::test]
async fn one_failing_batch_discards_the_whole_parallel_attempt() {
    // Only the batch holding file-00150 fails; the others return nothing,
    // so any partial merge would be visibly wrong.
    let failing: BatchEvaluator = Arc::new(|batch, _| {
        if batch.iter().any(|f| f.id == "file-00150") {
            Err(FilterError::UnitFailed {
                unit: 0,
                reason: "bad batch".to_string(),
            })
        } else {
            Ok(Vec::new())
        }
    });
    let engine = ConcurrentFilterEngine::with_evaluator(pooled(3), failing);
    let files = large_corpus(500);
    let criteria = FilterCriteria::new().with_statuses([Status::Converged]);

    let outcome = engine.apply_detailed(&files, &criteria).await;

    assert_eq!(outcome.mode, FilterMode::Fallback);
    assert_eq!(ids(&outcome.files), expected_ids(&files, &criteria));
    assert!(!outcome.files.is_empty());
}

// ── Cache ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn equivalent_criteria_hit_the_cache() {
    let engine = ConcurrentFilterEngine::sequential_only(FilterConfig::default());
    let files = large_corpus(50);

    let first = engine
        .apply_detailed(
            &files,
            &FilterCriteria::new().with_confidence_range(20.0, 60.0),
        )
        .await;
    let second = engine
        .apply_detailed(
            &files,
            &FilterCriteria::new().with_confidence_range(60.0, 20.0),
        )
        .await;

    assert!(!first.cache_hit());
    assert!(second.cache_hit());
    assert_eq!(ids(&first.files), ids(&second.files));
    let stats = engine.stats();
    assert_eq!((stats.cache_hits, stats.cache_misses), (1, 1));
    assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn cache_hit_rechecks_membership_against_current_files() {
    let engine = ConcurrentFilterEngine::sequential_only(FilterConfig::default());
    let criteria = FilterCriteria::new().with_confidence_range(50.0, 100.0);
    let files = vec![analyzed_file("a", 0.9), analyzed_file("b", 0.7), analyzed_file("c", 0.1)];
    engine.apply(&files, &criteria).await;

    // "b" is gone; "c" now scores high but was not in the cached id set.
    let current = vec![analyzed_file("a", 0.9), analyzed_file("c", 0.95)];
    let outcome = engine.apply_detailed(&current, &criteria).await;

    assert!(outcome.cache_hit());
    assert_eq!(ids(&outcome.files), BTreeSet::from(["a".to_string()]));
    assert_eq!(
        outcome.files[0].confidence,
        current[0].confidence,
        "current objects are returned"
    );
}

#[tokio::test]
async fn clear_cache_forces_recompute() {
    let engine = ConcurrentFilterEngine::sequential_only(FilterConfig::default());
    let criteria = FilterCriteria::new().with_confidence_range(50.0, 100.0);
    engine.apply(&[analyzed_file("c", 0.1)], &criteria).await;

    engine.clear_cache();
    let outcome = engine
        .apply_detailed(&[analyzed_file("c", 0.95)], &criteria)
        .await;

    assert!(!outcome.cache_hit());
    assert_eq!(ids(&outcome.files), BTreeSet::from(["c".to_string()]));
}

#[tokio::test]
async fn expired_entries_are_recomputed() {
    let engine = ConcurrentFilterEngine::sequential_only(FilterConfig {
        cache_ttl_secs: 1,
        ..FilterConfig::default()
    });
    let criteria = FilterCriteria::new();
    engine.apply(&[analyzed_file("a", 0.5)], &criteria).await;
    tokio::time::sleep(Duration::from_millis(1_100)).await;

    let outcome = engine
        .apply_detailed(&[analyzed_file("a", 0.5)], &criteria)
        .await;
    assert!(!outcome.cache_hit());
}
