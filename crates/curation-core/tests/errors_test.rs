use curation_core::errors::*;

#[test]
fn filter_error_batch_timeout_carries_values() {
    let err = FilterError::BatchTimeout {
        batch: 3,
        timeout_ms: 5000,
    };
    let msg = err.to_string();
    assert!(msg.contains('3'));
    assert!(msg.contains("5000"));
}

#[test]
fn curation_error_wraps_subsystem_errors() {
    let err: CurationError = FilterError::PoolUnavailable {
        reason: "spawn failed".into(),
    }
    .into();
    assert!(matches!(err, CurationError::Filter(_)));
    assert!(err.to_string().contains("spawn failed"));
}

#[test]
fn config_error_names_the_field() {
    let err = ConfigError::ValidationFailed {
        field: "filter.batch_size".into(),
        message: "must be greater than 0".into(),
    };
    assert!(err.to_string().contains("filter.batch_size"));
}
