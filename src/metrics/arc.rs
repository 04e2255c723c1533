//! ARC Cache Metrics
//!
//! Metrics specific to the adaptive replacement engine: how often each ghost
//! history fired, how often capacity actually moved, and the current split.

use super::{CacheMetrics, CoreCacheMetrics};
use std::collections::BTreeMap;
use std::string::{String, ToString};

/// Adaptive-engine metrics (extends CoreCacheMetrics)
#[derive(Debug, Clone, Default)]
pub struct ArcCacheMetrics {
    /// Core metrics common to all cache algorithms
    pub core: CoreCacheMetrics,

    /// Hits served by the recency partition
    pub recent_hits: u64,

    /// Hits served by the frequency partition
    pub frequent_hits: u64,

    /// Lookups or inserts that matched the recency ghost history
    pub recent_ghost_hits: u64,

    /// Lookups or inserts that matched the frequency ghost history
    pub frequent_ghost_hits: u64,

    /// Ghost hits that moved one unit of capacity between partitions
    pub rebalances: u64,

    /// Copies made from the recency partition into the frequency partition
    pub promotions: u64,

    /// Current capacity of the recency partition
    pub recent_capacity: u64,

    /// Current capacity of the frequency partition
    pub frequent_capacity: u64,
}

impl ArcCacheMetrics {
    /// Creates counters for an engine with the given initial split.
    pub fn new(recent_capacity: usize, frequent_capacity: usize) -> Self {
        Self {
            recent_capacity: recent_capacity as u64,
            frequent_capacity: frequent_capacity as u64,
            ..Default::default()
        }
    }

    /// Records a hit in the recency partition.
    pub fn record_recent_hit(&mut self) {
        self.core.record_hit();
        self.recent_hits += 1;
    }

    /// Records a hit in the frequency partition.
    pub fn record_frequent_hit(&mut self) {
        self.core.record_hit();
        self.frequent_hits += 1;
    }

    /// Records a recency ghost match.
    pub fn record_recent_ghost_hit(&mut self) {
        self.recent_ghost_hits += 1;
    }

    /// Records a frequency ghost match.
    pub fn record_frequent_ghost_hit(&mut self) {
        self.frequent_ghost_hits += 1;
    }

    /// Records a capacity move and the resulting split.
    pub fn record_rebalance(&mut self, recent_capacity: usize, frequent_capacity: usize) {
        self.rebalances += 1;
        self.recent_capacity = recent_capacity as u64;
        self.frequent_capacity = frequent_capacity as u64;
    }

    /// Records a promotion copy.
    pub fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    /// Converts ARC metrics to a BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();

        metrics.insert("recent_hits".to_string(), self.recent_hits as f64);
        metrics.insert("frequent_hits".to_string(), self.frequent_hits as f64);
        metrics.insert(
            "recent_ghost_hits".to_string(),
            self.recent_ghost_hits as f64,
        );
        metrics.insert(
            "frequent_ghost_hits".to_string(),
            self.frequent_ghost_hits as f64,
        );
        metrics.insert("rebalances".to_string(), self.rebalances as f64);
        metrics.insert("promotions".to_string(), self.promotions as f64);
        metrics.insert("recent_capacity".to_string(), self.recent_capacity as f64);
        metrics.insert(
            "frequent_capacity".to_string(),
            self.frequent_capacity as f64,
        );

        metrics
    }
}

impl CacheMetrics for ArcCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "ARC"
    }
}
