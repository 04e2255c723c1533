#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! This section provides quick code examples and API references for each cache engine.
//!
//! ## Algorithm Selection Guide
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │                     Which Cache Engine Should I Use?                     │
//! ├──────────────────────────────────────────────────────────────────────────┤
//! │                                                                          │
//! │  Do you know whether recency or frequency predicts reuse?                │
//! │                                                                          │
//! │  ┌─────────────────┐                                                     │
//! │  │    Not sure?    │──Yes──▶ ┌──────────┐                                │
//! │  │ (mixed traffic) │         │   ARC    │                                │
//! │  └────────┬────────┘         └──────────┘                                │
//! │          No                                                              │
//! │           ▼                                                              │
//! │  ┌─────────────────┐                                                     │
//! │  │ Recency-based?  │──Yes──▶ Are one-off scans common?                   │
//! │  │ (recent = hot)  │              │                                      │
//! │  └────────┬────────┘         Yes  │  No                                  │
//! │          No                   ▼   ▼                                      │
//! │           │               ┌──────────┐  ┌──────────┐                     │
//! │           │               │  LRU-K   │  │   LRU    │                     │
//! │           ▼               └──────────┘  └──────────┘                     │
//! │  ┌─────────────────┐                                                     │
//! │  │ Frequency-based?│──Yes──▶ ┌──────────┐                                │
//! │  │ (popular = hot) │         │   LFU    │                                │
//! │  └─────────────────┘         └──────────┘                                │
//! │                                                                          │
//! │  Many threads hammering one cache? Use the sharded variants.             │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Reference
//!
//! | Engine | Description | Best Use Case |
//! |--------|-------------|---------------|
//! | [`LruCache`] | Least Recently Used | General purpose, recency-based access |
//! | [`LfuCache`] | Least Frequently Used with aging | Stable popularity patterns |
//! | [`ArcCache`] | Adaptive recency/frequency split | Workloads whose character shifts |
//! | [`LruKCache`] | LRU admitting keys after `k` sightings | Scan-heavy traffic |
//! | `ConcurrentLruCache` | Sharded LRU | High-contention recency caching |
//! | `ConcurrentLfuCache` | Sharded LFU | High-contention frequency caching |
//!
//! ## Performance Characteristics
//!
//! | Engine | Get | Put | Remove | Scan Resist | Adapts |
//! |--------|-----|-----|--------|-------------|--------|
//! | LRU    | O(1)| O(1)| O(1)   | Poor        | N/A    |
//! | LFU    | O(log F)| O(log F)| O(log F) | Excellent | Aging |
//! | ARC    | O(log F)| O(log F)| O(log F) | Good  | Yes    |
//! | LRU-K  | O(1)| O(1)| O(1)   | Good        | No     |
//!
//! `F` is the number of distinct frequency levels, which aging keeps small.
//! An aging pass itself is linear in the number of entries.
//!
//! ## Code Examples
//!
//! ### LRU (Least Recently Used)
//!
//! Evicts the entry that hasn't been accessed for the longest time.
//!
//! ```rust
//! use cache_policies::LruCache;
//! use cache_policies::config::LruCacheConfig;
//!
//! let cache = LruCache::init(LruCacheConfig { capacity: 2 }, None);
//!
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");          // "a" is now most recently used
//! cache.put("c", 3);        // evicts "b"
//!
//! assert!(cache.get(&"b").is_none());
//! assert_eq!(cache.get(&"a"), Some(1));
//! ```
//!
//! ### LFU (Least Frequently Used)
//!
//! Evicts the entry with the lowest access count. Among equally cold entries
//! the oldest one goes first.
//!
//! ```rust
//! use cache_policies::LfuCache;
//! use cache_policies::config::LfuCacheConfig;
//!
//! let config = LfuCacheConfig {
//!     capacity: 2,
//!     max_average_frequency: 100,
//! };
//! let cache = LfuCache::init(config, None);
//!
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.get(&"a");
//! cache.put("c", 3);        // evicts "b", it has the lowest frequency
//!
//! assert!(cache.get(&"b").is_none());
//! assert_eq!(cache.frequency(&"a"), Some(3));
//! ```
//!
//! ### ARC (Adaptive Replacement)
//!
//! Keeps a recency partition and a frequency partition and moves capacity
//! between them as evicted keys come back.
//!
//! ```rust
//! use cache_policies::ArcCache;
//! use cache_policies::config::ArcCacheConfig;
//!
//! let config = ArcCacheConfig {
//!     promotion_threshold: 2,
//!     ..ArcCacheConfig::new(4)
//! };
//! let cache = ArcCache::init(config, None);
//!
//! cache.put("session", 42);
//! assert_eq!(cache.get(&"session"), Some(42)); // second access promotes it
//! assert_eq!(cache.partition_sizes(), (2, 2));
//! ```
//!
//! ### LRU-K
//!
//! ```rust
//! use cache_policies::LruKCache;
//!
//! let cache = LruKCache::new(8);
//! cache.put("scan", 0);
//! assert!(cache.get(&"scan").is_none()); // one sighting is not enough
//! ```
//!
//! ### Swapping Policies
//!
//! ```rust
//! use cache_policies::{CachePolicy, LfuCache, LruCache};
//!
//! fn warm(cache: &dyn CachePolicy<u64, u64>) {
//!     for i in 0..10 {
//!         cache.put(i, i * i);
//!     }
//! }
//!
//! let lru = LruCache::<u64, u64>::new(5);
//! let lfu = LfuCache::<u64, u64>::new(5);
//! warm(&lru);
//! warm(&lfu);
//! assert_eq!(lru.len(), 5);
//! assert_eq!(lfu.len(), 5);
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`lfu`]: Least Frequently Used cache implementation with aging
//! - [`arc`]: Adaptive Replacement Cache implementation
//! - [`lru_k`]: LRU-K cache implementation
//! - [`policy`]: The [`CachePolicy`] trait shared by every engine
//! - [`config`]: Configuration structures for all cache engines
//! - [`metrics`]: Metrics collection for cache performance monitoring
//! - [`error`]: Structural invariant violations reported by `check_invariants`
//! - `concurrent`: Sharded cache implementations (requires `concurrent` feature)

/// The key/value record stored by every engine.
///
/// Carries the per-entry access count that the frequency-based engines order by.
pub mod entry;

/// Doubly linked list over an index arena.
///
/// Internal infrastructure for the engines. Nodes are addressed by stable
/// handles, so entries can be unlinked and relinked in O(1) without raw pointers.
pub(crate) mod list;

/// Bounded key-only history used by the adaptive engine.
pub(crate) mod ghost;

/// Structural invariant violations.
pub mod error;

/// The capability contract shared by every cache engine.
pub mod policy;

/// Cache configuration structures.
///
/// Provides configuration structures for all cache engine implementations.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used entries when
/// the capacity is reached.
pub mod lru;

/// Least Frequently Used (LFU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least frequently used entries
/// when capacity is reached. Frequencies are periodically aged so that stale
/// popularity does not pin entries forever.
pub mod lfu;

/// Adaptive Replacement Cache (ARC) implementation.
///
/// Splits capacity between a recency partition and a frequency partition and
/// rebalances the split using histories of recently evicted keys.
pub mod arc;

/// LRU-K cache implementation.
///
/// An LRU cache that only admits keys after they have been seen `k` times.
pub mod lru_k;

/// Cache metrics system.
///
/// Provides a flexible metrics collection and reporting system for all cache engines.
/// Each engine can track engine-specific metrics while implementing a common interface.
pub mod metrics;

/// Sharded cache implementations.
///
/// Partitions the key space across several independently locked engines for
/// high-throughput multi-threaded access.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

// Re-export cache types
pub use arc::ArcCache;
pub use lfu::LfuCache;
pub use lru::LruCache;
pub use lru_k::LruKCache;

pub use entry::CacheEntry;
pub use error::InvariantError;
pub use metrics::CacheMetrics;
pub use policy::CachePolicy;

#[cfg(feature = "concurrent")]
pub use concurrent::{ConcurrentLfuCache, ConcurrentLruCache};
