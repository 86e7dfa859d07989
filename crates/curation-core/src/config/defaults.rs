// Single source of truth for all default values.

// --- Metrics ---
pub const DEFAULT_METRICS_CACHE_TTL_MS: u64 = 3_000;
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;
pub const DEFAULT_TREND_WINDOW: usize = 10;
pub const DEFAULT_IMPROVEMENT_WINDOW: usize = 5;
pub const DEFAULT_PROCESSING_WINDOW_SECS: u64 = 300; // 5 minutes

// --- Health scoring ---
pub const DEFAULT_CONFIDENCE_WEIGHT: f64 = 0.6;
pub const DEFAULT_IMPROVEMENT_WEIGHT: f64 = 0.4;
pub const DEFAULT_IMPROVEMENT_SCALE: f64 = 10.0;
pub const DEFAULT_EXCELLENT_THRESHOLD: u8 = 80;
pub const DEFAULT_GOOD_THRESHOLD: u8 = 60;
pub const DEFAULT_FAIR_THRESHOLD: u8 = 40;

// --- Filter ---
pub const DEFAULT_FILTER_CACHE_TTL_SECS: u64 = 300; // 5 minutes
pub const DEFAULT_FILTER_CACHE_CAPACITY: u64 = 256;
pub const MAX_FILTER_CACHE_TTL_SECS: u64 = 365 * 24 * 60 * 60; // 1 year
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 200;
pub const DEFAULT_BATCH_SIZE: usize = 100;
pub const DEFAULT_POOL_SIZE: usize = 4;
pub const DEFAULT_BATCH_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10;

// --- Suggestions ---
pub const DEFAULT_WEAK_DIMENSION_THRESHOLD: f64 = 0.75;
pub const DEFAULT_MAX_WEAK_DIMENSIONS: usize = 3;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;
pub const DEFAULT_MAX_CATEGORY_SUGGESTIONS: usize = 5;
pub const DEFAULT_MIN_CATEGORY_CONFIDENCE: f64 = 0.3;
pub const DEFAULT_KEYWORD_LIMIT: usize = 10;
pub const DEFAULT_MIN_KEYWORD_LEN: usize = 4;
pub const DEFAULT_NAME_MATCH_DAMPING: f64 = 0.5;
pub const DEFAULT_MIN_PREVIEW_LEN: usize = 100;
pub const DEFAULT_MIN_KEYWORDS: usize = 5;
pub const DEFAULT_MIN_CATEGORIES: usize = 2;
pub const DEFAULT_LOW_OVERALL_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MAX_ITERATIONS_BEFORE_REVIEW: u32 = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
