//! Cache Configuration Module
//!
//! Configuration structures for every cache engine. Each engine has its own
//! struct with public fields, so a configuration is built with a struct
//! literal (optionally on top of `::new(capacity)` defaults) and handed to the
//! engine's `init` constructor.
//!
//! # Capacity
//!
//! Capacities count entries. A capacity of `0` is valid and yields a disabled
//! cache: puts are ignored and gets always miss. This lets callers turn a
//! cache off from configuration alone.
//!
//! # Single-Threaded Cache Configs
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache) | Least Recently Used |
//! | `LfuCacheConfig` | [`LfuCache`](crate::LfuCache) | Least Frequently Used with aging |
//! | `ArcCacheConfig` | [`ArcCache`](crate::ArcCache) | Adaptive recency/frequency split |
//! | `LruKCacheConfig` | [`LruKCache`](crate::LruKCache) | LRU with history-gated admission |
//!
//! Every engine locks internally; "single-threaded" refers to the single lock.
//!
//! # Sharded Cache Configs (requires `concurrent` feature)
//!
//! Use the `ConcurrentCacheConfig<C>` wrapper around a base config:
//!
//! | Type Alias | Base Config | Description |
//! |------------|-------------|-------------|
//! | `ConcurrentLruCacheConfig` | `LruCacheConfig` | Sharded LRU |
//! | `ConcurrentLfuCacheConfig` | `LfuCacheConfig` | Sharded LFU |
//!
//! # Examples
//!
//! ```
//! use cache_policies::config::LruCacheConfig;
//! use cache_policies::LruCache;
//!
//! let config = LruCacheConfig { capacity: 10_000 };
//! let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None);
//! assert!(cache.is_empty());
//! ```

pub mod arc;
pub mod lfu;
pub mod lru;
pub mod lru_k;

pub use arc::ArcCacheConfig;
pub use lfu::LfuCacheConfig;
pub use lru::LruCacheConfig;
pub use lru_k::LruKCacheConfig;

/// Generic configuration wrapper for sharded caches.
///
/// Wraps a base cache configuration and adds the number of shards.
///
/// # Fields
///
/// - `base`: The configuration of the cache as a whole. Its `capacity` is the
///   total across all shards; each shard gets `ceil(capacity / segments)`.
/// - `segments`: Number of shards. `0` picks
///   [`default_segment_count`](crate::concurrent::default_segment_count).
///
/// # Example
///
/// ```
/// use cache_policies::config::{ConcurrentCacheConfig, ConcurrentLruCacheConfig, LruCacheConfig};
///
/// let config: ConcurrentLruCacheConfig = ConcurrentCacheConfig {
///     base: LruCacheConfig { capacity: 10_000 },
///     segments: 16,
/// };
/// assert_eq!(config.segments, 16);
/// ```
#[cfg(feature = "concurrent")]
#[derive(Clone, Copy)]
pub struct ConcurrentCacheConfig<C> {
    /// Base configuration for the cache as a whole
    pub base: C,
    /// Number of shards (more shards = less contention)
    pub segments: usize,
}

#[cfg(feature = "concurrent")]
impl<C> ConcurrentCacheConfig<C> {
    /// Shard count with `0` resolved to the machine's available parallelism.
    pub fn effective_segments(&self) -> usize {
        if self.segments == 0 {
            crate::concurrent::default_segment_count()
        } else {
            self.segments
        }
    }
}

#[cfg(feature = "concurrent")]
impl<C: core::fmt::Debug> core::fmt::Debug for ConcurrentCacheConfig<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentCacheConfig")
            .field("base", &self.base)
            .field("segments", &self.segments)
            .finish()
    }
}

#[cfg(feature = "concurrent")]
/// Configuration for a sharded LRU cache.
/// Type alias for `ConcurrentCacheConfig<LruCacheConfig>`.
pub type ConcurrentLruCacheConfig = ConcurrentCacheConfig<LruCacheConfig>;

#[cfg(feature = "concurrent")]
/// Configuration for a sharded LFU cache.
/// Type alias for `ConcurrentCacheConfig<LfuCacheConfig>`.
pub type ConcurrentLfuCacheConfig = ConcurrentCacheConfig<LfuCacheConfig>;
