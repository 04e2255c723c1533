//! Configuration for the Least Recently Used (LRU) cache.
//!
//! # Examples
//!
//! ```
//! use cache_policies::config::LruCacheConfig;
//! use cache_policies::LruCache;
//!
//! let config = LruCacheConfig { capacity: 1000 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.cap(), 1000);
//!
//! // A zero capacity disables the cache without any branching at call sites.
//! let disabled: LruCache<String, i32> = LruCache::init(LruCacheConfig { capacity: 0 }, None);
//! disabled.put("k".to_string(), 1);
//! assert!(disabled.get("k").is_none());
//! ```

use core::fmt;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// LRU evicts the least recently accessed entry when the cache is full.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries. `0` disables the cache.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl LruCacheConfig {
    /// Creates a configuration with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
