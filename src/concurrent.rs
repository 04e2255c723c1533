//! Sharded Cache Implementations
//!
//! Every engine in this crate already locks internally, so a single instance
//! is safe to share. Under heavy contention that one lock becomes the
//! bottleneck. The sharded caches here spread the key space over several
//! independent engines, each with its own lock:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │              ConcurrentLruCache (N shards)                         │
//! │                                                                    │
//! │  ┌─────────┐ ┌─────────┐ ┌─────────┐     ┌─────────┐               │
//! │  │ Shard 0 │ │ Shard 1 │ │ Shard 2 │ ... │Shard N-1│               │
//! │  │LruCache │ │LruCache │ │LruCache │     │LruCache │               │
//! │  └─────────┘ └─────────┘ └─────────┘     └─────────┘               │
//! │       ▲           ▲           ▲               ▲                    │
//! │  hash(k1)%N  hash(k2)%N  hash(k3)%N      hash(kN)%N                │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operations lock only the shard that owns the key, so threads touching
//! different shards never wait on each other.
//!
//! ## Why Mutex Instead of RwLock?
//!
//! A cache `get` is a write: LRU moves the entry to the front, LFU moves it to
//! the next frequency bucket. Every access would need the exclusive side of an
//! `RwLock` anyway, so the shards use the cheaper `parking_lot::Mutex`.
//!
//! # Capacity
//!
//! The configured capacity covers the whole cache. Each shard gets
//! `ceil(capacity / shards)`, so the real total can exceed the configured one
//! by up to `shards - 1` entries. Eviction order is per shard, not global.
//!
//! # Available Sharded Caches
//!
//! | Type | Shard engine |
//! |------|--------------|
//! | [`ConcurrentLruCache`] | [`LruCache`](crate::LruCache) |
//! | [`ConcurrentLfuCache`] | [`LfuCache`](crate::LfuCache), aging threshold 10 by default |
//!
//! # Example
//!
//! ```
//! use cache_policies::concurrent::ConcurrentLruCache;
//! use cache_policies::config::{ConcurrentCacheConfig, LruCacheConfig};
//! use std::sync::Arc;
//! use std::thread;
//!
//! // one shard keeps eviction order exact
//! let config = ConcurrentCacheConfig {
//!     base: LruCacheConfig { capacity: 1000 },
//!     segments: 1,
//! };
//! let cache = Arc::new(ConcurrentLruCache::init(config, None));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 let key = format!("key_{}_{}", t, i);
//!                 cache.put(key.clone(), i);
//!                 let _ = cache.get(&key);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(cache.len(), 400);
//! assert!(cache.len() <= cache.capacity());
//! ```

mod lfu;
mod lru;

pub use self::lfu::ConcurrentLfuCache;
pub use self::lru::ConcurrentLruCache;

/// Default shard count: the machine's available parallelism, or 1 if it
/// cannot be determined.
#[inline]
pub fn default_segment_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Capacity of each shard when `capacity` is spread over `shards`.
#[inline]
pub(crate) fn shard_capacity(capacity: usize, shards: usize) -> usize {
    capacity.div_ceil(shards.max(1))
}
