//! Configuration for the Adaptive Replacement (ARC) cache.
//!
//! The adaptive cache splits its `capacity` between a recency partition and a
//! frequency partition. Each partition has a ghost history of keys it evicted
//! recently. A hit in one ghost history means that partition was too small,
//! so one slot moves over to it from the other partition.
//!
//! # Fields
//!
//! | Field | Meaning | Default |
//! |-------|---------|---------|
//! | `capacity` | Total entries across both partitions | (required) |
//! | `promotion_threshold` | Recency hits before a key is copied into the frequency partition | `2` |
//! | `ghost_capacity` | Keys remembered by each ghost history | `capacity` |
//! | `min_partition_capacity` | Floor for either partition when rebalancing | `1` (or `0` below capacity 2) |
//! | `max_average_frequency` | Aging threshold of the frequency partition | `1_000_000` |
//!
//! A `promotion_threshold` of `0` behaves like `1`. A `min_partition_capacity`
//! larger than `capacity / 2` is clamped to `capacity / 2`.
//!
//! # Examples
//!
//! ```
//! use cache_policies::config::ArcCacheConfig;
//! use cache_policies::ArcCache;
//!
//! let config = ArcCacheConfig {
//!     promotion_threshold: 3,
//!     ..ArcCacheConfig::new(100)
//! };
//! let cache: ArcCache<u64, String> = ArcCache::init(config, None);
//! assert_eq!(cache.partition_sizes(), (50, 50));
//! ```

use super::lfu::DEFAULT_MAX_AVERAGE_FREQUENCY;
use core::fmt;

/// Recency hits needed before a key is copied into the frequency partition.
pub const DEFAULT_PROMOTION_THRESHOLD: u64 = 2;

/// Configuration for an adaptive replacement cache.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ArcCacheConfig {
    /// Total capacity shared by the recency and frequency partitions.
    pub capacity: usize,
    /// Access count at which a recent key is propagated to the frequency partition.
    pub promotion_threshold: u64,
    /// Capacity of each ghost history.
    pub ghost_capacity: usize,
    /// Smallest capacity either partition can be shrunk to.
    pub min_partition_capacity: usize,
    /// Average frequency above which the frequency partition ages its counts.
    pub max_average_frequency: u64,
}

impl ArcCacheConfig {
    /// Creates a configuration with the default threshold, ghost capacity and
    /// partition floor for `capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            promotion_threshold: DEFAULT_PROMOTION_THRESHOLD,
            ghost_capacity: capacity,
            min_partition_capacity: if capacity >= 2 { 1 } else { 0 },
            max_average_frequency: DEFAULT_MAX_AVERAGE_FREQUENCY,
        }
    }

    /// Initial `(recent, frequent)` split: the frequency partition gets the
    /// smaller half.
    pub fn initial_partitions(&self) -> (usize, usize) {
        let frequent = self.capacity / 2;
        (self.capacity - frequent, frequent)
    }

    /// Partition floor after clamping to `capacity / 2`.
    pub fn effective_min_partition(&self) -> usize {
        self.min_partition_capacity.min(self.capacity / 2)
    }

    /// Promotion threshold with `0` read as `1`.
    pub fn effective_promotion_threshold(&self) -> u64 {
        self.promotion_threshold.max(1)
    }
}

impl fmt::Debug for ArcCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArcCacheConfig")
            .field("capacity", &self.capacity)
            .field("promotion_threshold", &self.promotion_threshold)
            .field("ghost_capacity", &self.ghost_capacity)
            .field("min_partition_capacity", &self.min_partition_capacity)
            .field("max_average_frequency", &self.max_average_frequency)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_config_defaults() {
        let config = ArcCacheConfig::new(10);
        assert_eq!(config.promotion_threshold, 2);
        assert_eq!(config.ghost_capacity, 10);
        assert_eq!(config.min_partition_capacity, 1);
        assert_eq!(config.max_average_frequency, DEFAULT_MAX_AVERAGE_FREQUENCY);
        assert_eq!(config.initial_partitions(), (5, 5));

        let odd = ArcCacheConfig::new(5);
        assert_eq!(odd.initial_partitions(), (3, 2));

        let tiny = ArcCacheConfig::new(1);
        assert_eq!(tiny.min_partition_capacity, 0);
        assert_eq!(tiny.initial_partitions(), (1, 0));
    }

    #[test]
    fn test_arc_config_clamping() {
        let config = ArcCacheConfig {
            capacity: 6,
            promotion_threshold: 0,
            ghost_capacity: 6,
            min_partition_capacity: 10,
            max_average_frequency: 4,
        };
        assert_eq!(config.effective_min_partition(), 3);
        assert_eq!(config.effective_promotion_threshold(), 1);
    }
}
