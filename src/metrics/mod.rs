//! Cache Metrics System
//!
//! Provides a flexible metrics system for cache algorithms using BTreeMap-based
//! metrics reporting. Each cache algorithm tracks its own specific counters
//! while implementing the common [`CacheMetrics`] trait.
//!
//! # Why BTreeMap over HashMap?
//!
//! BTreeMap is used instead of HashMap because metrics must come out in a
//! stable order:
//! - **Deterministic ordering**: Metrics always appear in consistent order
//! - **Reproducible output**: Benchmark comparisons line up run to run
//! - **Better debugging**: Consistent output makes logs more readable
//!
//! The performance difference (O(log n) vs O(1)) is negligible with ~15 metric keys.

use std::collections::BTreeMap;
use std::string::{String, ToString};

pub mod arc;
pub mod lfu;
pub mod lru;

pub use arc::ArcCacheMetrics;
pub use lfu::LfuCacheMetrics;
pub use lru::LruCacheMetrics;

/// Common metrics tracked by all cache algorithms
#[derive(Debug, Default, Clone)]
pub struct CoreCacheMetrics {
    /// Total number of lookups made against the cache
    pub requests: u64,

    /// Number of lookups that found the key resident
    pub cache_hits: u64,

    /// Number of inserts and in-place updates
    pub insertions: u64,

    /// Number of entries dropped because capacity was exceeded
    pub evictions: u64,

    /// Number of entries dropped by explicit removal
    pub removals: u64,
}

impl CoreCacheMetrics {
    /// Creates an empty set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key.
    ///
    /// Misses are derived as `requests - cache_hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records an eviction caused by a capacity limit.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records an insert or an update of an existing key.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an explicit removal.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Number of lookups that missed.
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Calculates the cache hit rate
    ///
    /// # Returns
    /// A value between 0.0 and 1.0, or 0.0 if no requests have been made
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Calculates the cache miss rate
    ///
    /// # Returns
    /// A value between 0.0 and 1.0, or 0.0 if no requests have been made
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Convert core metrics to BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics.insert("requests".to_string(), self.requests as f64);

        // Rates (0.0 to 1.0)
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        if self.requests > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.requests as f64,
            );
        }

        metrics
    }
}

/// Trait that all cache algorithms implement for metrics reporting
///
/// Gives a uniform way to pull counters out of any engine so different
/// policies can be compared side by side on the same workload.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order
    ///
    /// Keys are sorted alphabetically for consistent output.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. "LRU", "LFU", "ARC")
    fn algorithm_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_metrics_rates() {
        let mut core = CoreCacheMetrics::new();
        assert_eq!(core.hit_rate(), 0.0);
        assert_eq!(core.miss_rate(), 0.0);

        core.record_hit();
        core.record_hit();
        core.record_hit();
        core.record_miss();

        assert_eq!(core.requests, 4);
        assert_eq!(core.cache_misses(), 1);
        assert_eq!(core.hit_rate(), 0.75);
        assert_eq!(core.miss_rate(), 0.25);
    }

    #[test]
    fn test_core_metrics_btreemap_keys() {
        let mut core = CoreCacheMetrics::new();
        core.record_insertion();
        core.record_eviction();
        core.record_removal();
        core.record_miss();

        let metrics = core.to_btreemap();
        assert_eq!(metrics.get("insertions"), Some(&1.0));
        assert_eq!(metrics.get("evictions"), Some(&1.0));
        assert_eq!(metrics.get("removals"), Some(&1.0));
        assert_eq!(metrics.get("cache_misses"), Some(&1.0));
        assert_eq!(metrics.get("eviction_rate"), Some(&1.0));

        let keys: Vec<_> = metrics.keys().cloned().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
