use curation_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CurationConfig::from_toml("").unwrap();

    // Metrics defaults
    assert_eq!(config.metrics.cache_ttl_ms, 3_000);
    assert_eq!(config.metrics.history_capacity, 50);
    assert_eq!(config.metrics.trend_window, 10);
    assert_eq!(config.metrics.improvement_window, 5);
    assert_eq!(config.metrics.processing_window_secs, 300);
    assert_eq!(config.metrics.health.confidence_weight, 0.6);
    assert_eq!(config.metrics.health.improvement_weight, 0.4);
    assert_eq!(config.metrics.health.excellent_threshold, 80);
    assert_eq!(config.metrics.health.good_threshold, 60);
    assert_eq!(config.metrics.health.fair_threshold, 40);

    // Filter defaults
    assert_eq!(config.filter.cache_ttl_secs, 300);
    assert_eq!(config.filter.parallel_threshold, 200);
    assert_eq!(config.filter.batch_size, 100);
    assert_eq!(config.filter.pool_size, None);
    assert_eq!(config.filter.batch_timeout_ms, 5_000);
    assert_eq!(config.filter.poll_interval_ms, 10);

    // Suggestion defaults
    assert_eq!(config.suggestions.weak_dimension_threshold, 0.75);
    assert_eq!(config.suggestions.max_weak_dimensions, 3);
    assert_eq!(config.suggestions.max_suggestions, 5);
    assert_eq!(config.suggestions.keyword_limit, 10);
    assert_eq!(config.suggestions.min_category_confidence, 0.3);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[metrics.health]
confidence_weight = 0.7
improvement_weight = 0.3

[filter]
pool_size = 8
batch_size = 50
"#;
    let config = CurationConfig::from_toml(toml).unwrap();
    assert_eq!(config.metrics.health.confidence_weight, 0.7);
    assert_eq!(config.metrics.health.improvement_weight, 0.3);
    assert_eq!(config.filter.pool_size, Some(8));
    assert_eq!(config.filter.effective_pool_size(), 8);
    assert_eq!(config.filter.batch_size, 50);
    // Non-overridden fields keep defaults
    assert_eq!(config.filter.parallel_threshold, 200);
    assert_eq!(config.metrics.cache_ttl_ms, 3_000);
}

#[test]
fn invalid_weight_is_rejected() {
    let err = CurationConfig::from_toml("[metrics.health]\nconfidence_weight = 1.5\n").unwrap_err();
    assert!(err.to_string().contains("metrics.health.confidence_weight"));
}

#[test]
fn inverted_health_thresholds_are_rejected() {
    let toml = "[metrics.health]\ngood_threshold = 90\n";
    assert!(CurationConfig::from_toml(toml).is_err());
}

#[test]
fn zero_batch_size_is_rejected() {
    let err = CurationConfig::from_toml("[filter]\nbatch_size = 0\n").unwrap_err();
    assert!(err.to_string().contains("filter.batch_size"));
}

#[test]
fn filter_cache_ttl_must_be_bounded() {
    for ttl in ["0", "31536001", "9223372036854775807"] {
        let toml = format!("[filter]\ncache_ttl_secs = {ttl}\n");
        let err = CurationConfig::from_toml(&toml).unwrap_err();
        assert!(
            err.to_string().contains("filter.cache_ttl_secs"),
            "ttl {ttl}: {err}"
        );
    }
    assert!(CurationConfig::from_toml("[filter]\ncache_ttl_secs = 31536000\n").is_ok());
}

#[test]
fn zero_filter_cache_capacity_is_rejected() {
    let err = CurationConfig::from_toml("[filter]\ncache_capacity = 0\n").unwrap_err();
    assert!(err.to_string().contains("filter.cache_capacity"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = CurationConfig::from_toml("[filter\nbatch_size = ").unwrap_err();
    assert!(matches!(err, curation_core::errors::ConfigError::ParseError { .. }));
}

#[test]
fn load_reports_missing_file() {
    let err = CurationConfig::load(std::path::Path::new("/nonexistent/curation.toml")).unwrap_err();
    assert!(matches!(err, curation_core::errors::ConfigError::ReadError { .. }));
}

#[test]
fn effective_pool_size_is_positive_without_override() {
    let config = FilterConfig::default();
    assert!(config.effective_pool_size() >= 1);
}
