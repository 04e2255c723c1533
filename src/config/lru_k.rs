//! Configuration for the history-gated LRU-K cache.
//!
//! LRU-K keeps a second, value-less LRU of access counts. A key is admitted
//! into the main cache only once it has been seen `k` times; until then every
//! `get` miss and every `put` just bumps its count in the history.
//!
//! # Examples
//!
//! ```
//! use cache_policies::config::LruKCacheConfig;
//! use cache_policies::LruKCache;
//!
//! let config = LruKCacheConfig { capacity: 100, history_capacity: 400, k: 2 };
//! let cache: LruKCache<String, u32> = LruKCache::init(config, None);
//! assert_eq!(cache.k(), 2);
//! ```

use core::fmt;

/// Configuration for an LRU-K cache.
///
/// # Fields
///
/// - `capacity`: entries in the main cache. `0` disables it.
/// - `history_capacity`: keys whose access counts are remembered.
/// - `k`: accesses needed before admission. `0` behaves like `1`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruKCacheConfig {
    /// Maximum number of admitted entries
    pub capacity: usize,
    /// Maximum number of keys tracked in the access history
    pub history_capacity: usize,
    /// Observations required before a key is admitted
    pub k: u64,
}

impl LruKCacheConfig {
    /// Creates a configuration with a history as large as the cache and `k = 2`.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            history_capacity: capacity,
            k: 2,
        }
    }
}

impl fmt::Debug for LruKCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruKCacheConfig")
            .field("capacity", &self.capacity)
            .field("history_capacity", &self.history_capacity)
            .field("k", &self.k)
            .finish()
    }
}
