//! Filter result cache with TTL.
//!
//! Uses `moka::sync::Cache` keyed by canonical criteria. Values are the ids
//! that matched; callers re-derive results against the current files.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use curation_core::config::defaults::MAX_FILTER_CACHE_TTL_SECS;
use moka::sync::Cache;

/// Matching-id sets keyed by criteria, with hit/miss tracking.
pub struct FilterCache {
    cache: Cache<String, Arc<HashSet<String>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl FilterCache {
    /// TTL is capped at [`MAX_FILTER_CACHE_TTL_SECS`]; moka rejects longer ones.
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        let ttl = ttl.min(Duration::from_secs(MAX_FILTER_CACHE_TTL_SECS));
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: &str) -> Option<Arc<HashSet<String>>> {
        match self.cache.get(key) {
            Some(ids) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(ids)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn insert(&self, key: String, ids: Arc<HashSet<String>>) {
        self.cache.insert(key, ids);
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}
