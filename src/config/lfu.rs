//! Configuration for the Least Frequently Used (LFU) cache.
//!
//! # Aging
//!
//! LFU keeps a running average of the access frequency of resident entries.
//! Once that average exceeds `max_average_frequency`, every entry's frequency
//! is cut by `max_average_frequency / 2` (at least 1, never below 1). This
//! stops entries that were hot long ago from crowding out new arrivals forever.
//!
//! # Examples
//!
//! ```
//! use cache_policies::config::LfuCacheConfig;
//! use cache_policies::LfuCache;
//!
//! let config = LfuCacheConfig {
//!     capacity: 100,
//!     max_average_frequency: 10,
//! };
//! let cache: LfuCache<String, i32> = LfuCache::init(config, None);
//! assert_eq!(cache.cap(), 100);
//! ```

use core::fmt;

/// Aging threshold used when none is given. High enough that aging is rare.
pub const DEFAULT_MAX_AVERAGE_FREQUENCY: u64 = 1_000_000;

/// Aging threshold used by the sharded LFU when none is given.
pub const DEFAULT_SHARDED_MAX_AVERAGE_FREQUENCY: u64 = 10;

/// Configuration for an LFU (Least Frequently Used) cache.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries. `0` disables the cache.
/// - `max_average_frequency`: Average access frequency that triggers an aging
///   pass. `0` is treated as `1`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LfuCacheConfig {
    /// Maximum number of key-value pairs the cache can hold
    pub capacity: usize,
    /// Average frequency above which all frequencies are aged down
    pub max_average_frequency: u64,
}

impl LfuCacheConfig {
    /// Creates a configuration with the default aging threshold.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_average_frequency: DEFAULT_MAX_AVERAGE_FREQUENCY,
        }
    }

    /// Amount subtracted from every frequency during one aging pass.
    pub fn aging_decrement(&self) -> u64 {
        (self.max_average_frequency / 2).max(1)
    }
}

impl fmt::Debug for LfuCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCacheConfig")
            .field("capacity", &self.capacity)
            .field("max_average_frequency", &self.max_average_frequency)
            .finish()
    }
}
