//! Configuration for the curation engines.
//! TOML-based: defaults < config file < environment (`CURATION_*`).

pub mod defaults;
mod filter_config;
mod metrics_config;
mod observability_config;
mod suggestion_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use filter_config::FilterConfig;
pub use metrics_config::{HealthScoring, MetricsConfig};
pub use observability_config::ObservabilityConfig;
pub use suggestion_config::SuggestionConfig;

use crate::errors::ConfigError;

/// Environment variable overriding `filter.pool_size`.
pub const ENV_POOL_SIZE: &str = "CURATION_POOL_SIZE";

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurationConfig {
    pub metrics: MetricsConfig,
    pub filter: FilterConfig,
    pub suggestions: SuggestionConfig,
    pub observability: ObservabilityConfig,
}

impl CurationConfig {
    /// Parse from a TOML string. Missing keys take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file, then apply environment overrides and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `CURATION_*` environment overrides.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(raw) = std::env::var(ENV_POOL_SIZE) {
            let size = raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::ValidationFailed {
                    field: ENV_POOL_SIZE.to_string(),
                    message: e.to_string(),
                })?;
            self.filter.pool_size = Some(size);
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let health = &self.metrics.health;
        for (field, weight) in [
            ("metrics.health.confidence_weight", health.confidence_weight),
            ("metrics.health.improvement_weight", health.improvement_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        if health.improvement_scale <= 0.0 {
            return Err(invalid("metrics.health.improvement_scale", "must be greater than 0"));
        }
        if !(health.excellent_threshold >= health.good_threshold
            && health.good_threshold >= health.fair_threshold
            && health.excellent_threshold <= 100)
        {
            return Err(invalid(
                "metrics.health",
                "thresholds must satisfy 100 >= excellent >= good >= fair",
            ));
        }
        if self.metrics.history_capacity == 0 {
            return Err(invalid("metrics.history_capacity", "must be greater than 0"));
        }
        if !(1..=defaults::MAX_FILTER_CACHE_TTL_SECS).contains(&self.filter.cache_ttl_secs) {
            return Err(invalid(
                "filter.cache_ttl_secs",
                "must be between 1 and 31536000 (one year)",
            ));
        }
        if self.filter.cache_capacity == 0 {
            return Err(invalid("filter.cache_capacity", "must be greater than 0"));
        }
        if self.filter.batch_size == 0 {
            return Err(invalid("filter.batch_size", "must be greater than 0"));
        }
        if self.filter.pool_size == Some(0) {
            return Err(invalid("filter.pool_size", "must be greater than 0"));
        }
        if self.filter.poll_interval_ms == 0 {
            return Err(invalid("filter.poll_interval_ms", "must be greater than 0"));
        }
        let suggestions = &self.suggestions;
        for (field, value) in [
            ("suggestions.weak_dimension_threshold", suggestions.weak_dimension_threshold),
            ("suggestions.min_category_confidence", suggestions.min_category_confidence),
            ("suggestions.name_match_damping", suggestions.name_match_damping),
            ("suggestions.low_overall_threshold", suggestions.low_overall_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
