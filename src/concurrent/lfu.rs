//! Sharded LFU Cache Implementation
//!
//! Spreads keys over several [`LfuCache`] shards. Frequencies, aging and the
//! eviction choice are all per shard. The least frequently used entry of the
//! shard a new key lands in is evicted, which is not necessarily the least
//! frequently used entry overall.
//!
//! Shards built through [`ConcurrentLfuCache::new`] age much earlier than a
//! standalone [`LfuCache`]: the average-frequency threshold defaults to
//! [`DEFAULT_SHARDED_MAX_AVERAGE_FREQUENCY`].
//!
//! # Example
//!
//! ```
//! use cache_policies::concurrent::ConcurrentLfuCache;
//!
//! let cache = ConcurrentLfuCache::new(100);
//! cache.put("hot", 1);
//! for _ in 0..5 {
//!     cache.get(&"hot");
//! }
//! assert_eq!(cache.frequency(&"hot"), Some(6));
//! ```

use crate::concurrent::shard_capacity;
use crate::config::lfu::DEFAULT_SHARDED_MAX_AVERAGE_FREQUENCY;
use crate::config::{ConcurrentLfuCacheConfig, LfuCacheConfig};
use crate::error::InvariantError;
use crate::lfu::LfuCache;
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

/// A sharded LFU cache.
pub struct ConcurrentLfuCache<K, V, S = DefaultHashBuilder> {
    segments: Box<[LfuCache<K, V, S>]>,
    hash_builder: S,
}

impl<K, V> ConcurrentLfuCache<K, V, DefaultHashBuilder>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Creates a sharded LFU cache with `capacity` total entries, one shard per
    /// available CPU, and the sharded aging threshold.
    pub fn new(capacity: usize) -> Self {
        Self::init(
            ConcurrentLfuCacheConfig {
                base: LfuCacheConfig {
                    capacity,
                    max_average_frequency: DEFAULT_SHARDED_MAX_AVERAGE_FREQUENCY,
                },
                segments: 0,
            },
            None,
        )
    }

    pub fn init(config: ConcurrentLfuCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self::init_with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K, V, S> ConcurrentLfuCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    /// Creates a sharded LFU cache with a custom hash builder.
    ///
    /// `config.base.capacity` is the total; every shard gets the same
    /// `max_average_frequency`.
    pub fn init_with_hasher(config: ConcurrentLfuCacheConfig, hash_builder: S) -> Self {
        let segment_count = config.effective_segments();
        let segment_config = LfuCacheConfig {
            capacity: shard_capacity(config.base.capacity, segment_count),
            max_average_frequency: config.base.max_average_frequency,
        };

        let segments: Vec<_> = (0..segment_count)
            .map(|_| LfuCache::init_with_hasher(segment_config, hash_builder.clone()))
            .collect();

        Self {
            segments: segments.into_boxed_slice(),
            hash_builder,
        }
    }

    #[inline]
    fn segment<Q>(&self, key: &Q) -> &LfuCache<K, V, S>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash,
    {
        let idx = (self.hash_builder.hash_one(key) as usize) % self.segments.len();
        &self.segments[idx]
    }

    pub fn capacity(&self) -> usize {
        self.segments.iter().map(LfuCache::cap).sum()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn len(&self) -> usize {
        self.segments.iter().map(LfuCache::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(LfuCache::is_empty)
    }

    /// Retrieves a clone of the value and bumps its frequency.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment(key).get(key)
    }

    /// Current frequency of `key` without counting an access.
    pub fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment(key).frequency(key)
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

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.segments
            .iter()
            .try_for_each(LfuCache::check_invariants)
    }
}

impl<K, V, S> CachePolicy<K, V> for ConcurrentLfuCache<K, V, S>
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
        ConcurrentLfuCache::len(self)
    }

    fn capacity(&self) -> usize {
        ConcurrentLfuCache::capacity(self)
    }
}

impl<K, V, S> CacheMetrics for ConcurrentLfuCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        let mut aggregated: BTreeMap<String, f64> = BTreeMap::new();

        for segment in self.segments.iter() {
            for (key, value) in segment.metrics() {
                let slot = aggregated.entry(key.clone()).or_insert(0.0);
                match key.as_str() {
                    // empty shards report 0
                    "min_frequency" => {
                        if value > 0.0 && (*slot == 0.0 || value < *slot) {
                            *slot = value;
                        }
                    }
                    "max_frequency" => *slot = slot.max(value),
                    _ => *slot += value,
                }
            }
        }

        let requests = aggregated.get("requests").copied().unwrap_or(0.0);
        if requests > 0.0 {
            let hits = aggregated.get("cache_hits").copied().unwrap_or(0.0);
            let evictions = aggregated.get("evictions").copied().unwrap_or(0.0);
            aggregated.insert("hit_rate".into(), hits / requests);
            aggregated.insert("miss_rate".into(), (requests - hits) / requests);
            aggregated.insert("eviction_rate".into(), evictions / requests);
            let increments = aggregated
                .get("total_frequency_increments")
                .copied()
                .unwrap_or(0.0);
            aggregated.insert("frequency_increment_rate".into(), increments / requests);
        }
        let min = aggregated.get("min_frequency").copied().unwrap_or(0.0);
        let max = aggregated.get("max_frequency").copied().unwrap_or(0.0);
        aggregated.insert("frequency_range".into(), max - min);

        aggregated
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLFU"
    }
}

impl<K, V, S> core::fmt::Debug for ConcurrentLfuCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentLfuCache")
            .field("segment_count", &self.segments.len())
            .field("total_len", &self.len())
            .finish()
    }
}
