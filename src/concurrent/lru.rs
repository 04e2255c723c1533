//! Sharded LRU Cache Implementation
//!
//! Spreads keys over several [`LruCache`] shards, each with its own lock.
//! Recency is tracked per shard: an entry in shard A can be evicted while
//! shard B holds entries that were used less recently in wall-clock time.
//! With a reasonable key distribution the approximation is close to a global
//! LRU and contention drops roughly in proportion to the shard count.
//!
//! # Example
//!
//! ```
//! use cache_policies::concurrent::ConcurrentLruCache;
//! use cache_policies::config::{ConcurrentCacheConfig, LruCacheConfig};
//!
//! let config = ConcurrentCacheConfig {
//!     base: LruCacheConfig { capacity: 1000 },
//!     segments: 8,
//! };
//! let cache: ConcurrentLruCache<String, u32> = ConcurrentLruCache::init(config, None);
//! assert_eq!(cache.segment_count(), 8);
//! assert_eq!(cache.capacity(), 1000);
//! ```

use crate::concurrent::shard_capacity;
use crate::config::{ConcurrentLruCacheConfig, LruCacheConfig};
use crate::error::InvariantError;
use crate::lru::LruCache;
use crate::metrics::CacheMetrics;
use crate::policy::CachePolicy;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use std::collections::BTreeMap;
use std::string::String;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A sharded LRU cache.
///
/// # Type Parameters
///
/// - `K`: Key type. Must implement `Hash + Eq + Clone`.
/// - `V`: Value type. Must implement `Clone`.
/// - `S`: Hash builder used both for routing and inside each shard.
pub struct ConcurrentLruCache<K, V, S = DefaultHashBuilder> {
    segments: Box<[LruCache<K, V, S>]>,
    hash_builder: S,
}

impl<K, V> ConcurrentLruCache<K, V, DefaultHashBuilder>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Creates a sharded LRU cache with `capacity` total entries and one shard
    /// per available CPU.
    pub fn new(capacity: usize) -> Self {
        Self::init(
            ConcurrentLruCacheConfig {
                base: LruCacheConfig { capacity },
                segments: 0,
            },
            None,
        )
    }

    /// Creates a sharded LRU cache from a configuration with an optional hasher.
    pub fn init(config: ConcurrentLruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::init_with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K, V, S> ConcurrentLruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    /// Creates a sharded LRU cache with a custom hash builder.
    ///
    /// The hash builder is cloned into every shard.
    pub fn init_with_hasher(config: ConcurrentLruCacheConfig, hash_builder: S) -> Self {
        let segment_count = config.effective_segments();
        let segment_cap = shard_capacity(config.base.capacity, segment_count);

        let segments: Vec<_> = (0..segment_count)
            .map(|_| LruCache::with_hasher(segment_cap, hash_builder.clone()))
            .collect();

        Self {
            segments: segments.into_boxed_slice(),
            hash_builder,
        }
    }

    #[inline]
    fn segment<Q>(&self, key: &Q) -> &LruCache<K, V, S>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash,
    {
        let idx = (self.hash_builder.hash_one(key) as usize) % self.segments.len();
        &self.segments[idx]
    }

    /// Total capacity across all shards.
    pub fn capacity(&self) -> usize {
        self.segments.iter().map(LruCache::cap).sum()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Total entries across all shards.
    ///
    /// Shards are locked one after another, so under concurrent writes the
    /// result may be slightly stale.
    pub fn len(&self) -> usize {
        self.segments.iter().map(LruCache::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(LruCache::is_empty)
    }

    /// Retrieves a clone of the value and marks it most recently used in its shard.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment(key).get(key)
    }

    /// Applies `f` to the value in place while the shard is locked.
    ///
    /// ```
    /// use cache_policies::concurrent::ConcurrentLruCache;
    ///
    /// let cache = ConcurrentLruCache::new(16);
    /// cache.put("counter".to_string(), 0);
    /// cache.get_mut_with("counter", |v| *v += 1);
    /// assert_eq!(cache.get("counter"), Some(1));
    /// ```
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        self.segment(key).get_mut_with(key, f)
    }

    /// Inserts or updates `key`, returning the entry its shard evicted.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.segment(&key).put(key, value)
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment(key).remove(key)
    }

    /// Returns `true` if `key` is resident. Does not update recency.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment(key).contains(key)
    }

    /// Removes every entry from every shard.
    pub fn purge(&self) {
        for segment in self.segments.iter() {
            segment.clear();
        }
    }

    /// Checks every shard's invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.segments
            .iter()
            .try_for_each(LruCache::check_invariants)
    }
}

impl<K, V, S> CachePolicy<K, V> for ConcurrentLruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn put(&self, key: K, value: V) {
        self.segment(&key).put(key, value);
    }

    fn get(&self, key: &K) -> Option<V> {
        self.segment(key).get(key)
    }

    fn len(&self) -> usize {
        ConcurrentLruCache::len(self)
    }

    fn capacity(&self) -> usize {
        ConcurrentLruCache::capacity(self)
    }
}

impl<K, V, S> CacheMetrics for ConcurrentLruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        let mut aggregated: BTreeMap<String, f64> = BTreeMap::new();

        for segment in self.segments.iter() {
            for (key, value) in segment.metrics() {
                *aggregated.entry(key).or_insert(0.0) += value;
            }
        }

        // rates do not add up across shards; recompute them from the totals
        let requests = aggregated.get("requests").copied().unwrap_or(0.0);
        if requests > 0.0 {
            let hits = aggregated.get("cache_hits").copied().unwrap_or(0.0);
            let evictions = aggregated.get("evictions").copied().unwrap_or(0.0);
            aggregated.insert("hit_rate".into(), hits / requests);
            aggregated.insert("miss_rate".into(), (requests - hits) / requests);
            aggregated.insert("eviction_rate".into(), evictions / requests);
        }

        aggregated
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLRU"
    }
}

impl<K, V, S> core::fmt::Debug for ConcurrentLruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentLruCache")
            .field("segment_count", &self.segments.len())
            .field("total_len", &self.len())
            .finish()
    }
}
