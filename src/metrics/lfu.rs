//! LFU Cache Metrics
//!
//! Metrics specific to the LFU (Least Frequently Used) cache algorithm.

use super::{CacheMetrics, CoreCacheMetrics};
use std::collections::BTreeMap;
use std::string::{String, ToString};

/// LFU-specific metrics (extends CoreCacheMetrics)
///
/// LFU tracks the access frequency of every entry, so these metrics focus on
/// the frequency distribution and on how often aging had to step in.
#[derive(Debug, Clone, Default)]
pub struct LfuCacheMetrics {
    /// Core metrics common to all cache algorithms
    pub core: CoreCacheMetrics,

    /// Current minimum frequency in the cache
    pub min_frequency: u64,

    /// Current maximum frequency in the cache
    pub max_frequency: u64,

    /// Total number of frequency increments (every hit or update bumps one)
    pub total_frequency_increments: u64,

    /// Number of unique frequency levels currently in use
    pub active_frequency_levels: u64,

    /// Number of aging passes run because the average frequency got too high
    pub aging_passes: u64,
}

impl LfuCacheMetrics {
    /// Creates an empty set of LFU counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frequency increment for an entry that now sits at `new_frequency`.
    pub fn record_frequency_increment(&mut self, new_frequency: u64) {
        self.total_frequency_increments += 1;
        if new_frequency > self.max_frequency {
            self.max_frequency = new_frequency;
        }
    }

    /// Records one aging pass over the whole cache.
    pub fn record_aging_pass(&mut self) {
        self.aging_passes += 1;
    }

    /// Updates the frequency levels based on current frequency buckets
    pub fn update_frequency_levels<T>(&mut self, frequency_lists: &BTreeMap<u64, T>) {
        self.active_frequency_levels = frequency_lists.len() as u64;

        if let (Some((&min_freq, _)), Some((&max_freq, _))) = (
            frequency_lists.first_key_value(),
            frequency_lists.last_key_value(),
        ) {
            self.min_frequency = min_freq;
            self.max_frequency = max_freq;
        } else {
            self.min_frequency = 0;
            self.max_frequency = 0;
        }
    }

    /// Calculates the frequency range (max - min)
    pub fn frequency_range(&self) -> u64 {
        self.max_frequency.saturating_sub(self.min_frequency)
    }

    /// Converts LFU metrics to a BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();

        metrics.insert("min_frequency".to_string(), self.min_frequency as f64);
        metrics.insert("max_frequency".to_string(), self.max_frequency as f64);
        metrics.insert("frequency_range".to_string(), self.frequency_range() as f64);
        metrics.insert(
            "total_frequency_increments".to_string(),
            self.total_frequency_increments as f64,
        );
        metrics.insert(
            "active_frequency_levels".to_string(),
            self.active_frequency_levels as f64,
        );
        metrics.insert("aging_passes".to_string(), self.aging_passes as f64);

        if self.core.requests > 0 {
            metrics.insert(
                "frequency_increment_rate".to_string(),
                self.total_frequency_increments as f64 / self.core.requests as f64,
            );
        }

        metrics
    }
}

impl CacheMetrics for LfuCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}
