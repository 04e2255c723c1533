//! LRU-K: LRU with history-gated admission.
//!
//! A plain LRU admits every key it sees, so a single scan over cold data can
//! flush the whole cache. LRU-K keeps a second LRU of access counts (no
//! values) and only admits a key into the main cache once it has been seen
//! `k` times.
//!
//! ```text
//!   put(k, v) ──► resident? ──yes──► update in place
//!                    │ no
//!                    ▼
//!           history[k] += 1 ──► count ≥ k? ──yes──► drop history record,
//!                                  │ no             insert into main LRU
//!                                  ▼
//!                               (not cached)
//! ```
//!
//! A `get` miss also counts toward admission. The history is itself an LRU,
//! so keys that are seen rarely fall out of it before they reach `k`.

use crate::config::LruKCacheConfig;
use crate::error::InvariantError;
use crate::lru::LruSegment;
use crate::metrics::CacheMetrics;
use crate::policy::CachePolicy;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::string::{String, ToString};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

pub(crate) struct LruKSegment<K, V, S = DefaultHashBuilder> {
    k: u64,
    main: LruSegment<K, V, S>,
    history: LruSegment<K, u64, S>,
    admissions: u64,
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher + Clone> LruKSegment<K, V, S> {
    pub(crate) fn init(config: LruKCacheConfig, hash_builder: S) -> Self {
        LruKSegment {
            k: config.k.max(1),
            main: LruSegment::with_hasher(config.capacity, hash_builder.clone()),
            history: LruSegment::with_hasher(config.history_capacity, hash_builder),
            admissions: 0,
        }
    }

    /// Records one more sighting of `key` and returns its count.
    fn bump_history(&mut self, key: &K) -> u64 {
        match self.history.get_mut(key) {
            Some(count) => {
                *count += 1;
                *count
            }
            None => {
                self.history.put(key.clone(), 1);
                1
            }
        }
    }

    pub(crate) fn get(&mut self, key: &K) -> Option<&V> {
        if self.main.contains(key) {
            return self.main.get(key);
        }
        self.main.record_miss();
        self.bump_history(key);
        None
    }

    pub(crate) fn put(&mut self, key: K, value: V) {
        if self.main.cap() == 0 {
            return;
        }
        if self.main.contains(&key) {
            self.main.put(key, value);
            return;
        }

        if self.bump_history(&key) >= self.k {
            self.history.remove(&key);
            if self.main.put(key, value).is_some() {
                log::trace!("lru-k evicted least recently used admitted entry");
            }
            self.admissions += 1;
        }
    }

    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        self.history.remove(key);
        self.main.remove(key)
    }

    pub(crate) fn clear(&mut self) {
        self.main.clear();
        self.history.clear();
    }

    pub(crate) fn history_count(&self, key: &K) -> Option<u64> {
        self.history.peek(key).copied()
    }

    pub(crate) fn metrics(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.main.metrics().to_btreemap();
        metrics.insert("admissions".to_string(), self.admissions as f64);
        metrics.insert("history_entries".to_string(), self.history.len() as f64);
        metrics
    }

    pub(crate) fn check_invariants(&self) -> Result<(), InvariantError> {
        self.main.check_invariants("lru-k main")?;
        self.history.check_invariants("lru-k history")
    }
}

impl<K, V, S> core::fmt::Debug for LruKSegment<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruKSegment")
            .field("k", &self.k)
            .field("main", &self.main)
            .field("history", &self.history)
            .finish()
    }
}

/// A thread-safe LRU cache that admits a key only after `k` sightings.
///
/// # Examples
///
/// ```
/// use cache_policies::LruKCache;
///
/// let cache = LruKCache::new(10);
/// cache.put("a", 1);
/// assert_eq!(cache.get(&"a"), None); // seen once, still only in the history
///
/// cache.put("a", 1);
/// assert_eq!(cache.get(&"a"), Some(1));
/// ```
#[derive(Debug)]
pub struct LruKCache<K, V, S = DefaultHashBuilder> {
    segment: Mutex<LruKSegment<K, V, S>>,
}

impl<K: Hash + Eq + Clone, V: Clone> LruKCache<K, V> {
    /// Creates an LRU-2 cache whose history is as large as the cache.
    pub fn new(capacity: usize) -> LruKCache<K, V, DefaultHashBuilder> {
        LruKCache::init(LruKCacheConfig::new(capacity), None)
    }

    pub fn init(config: LruKCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        LruKCache::init_with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> LruKCache<K, V, S> {
    /// Creates an LRU-2 cache with the given hash builder.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        Self::init_with_hasher(LruKCacheConfig::new(capacity), hash_builder)
    }

    pub fn init_with_hasher(config: LruKCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: Mutex::new(LruKSegment::init(config, hash_builder)),
        }
    }

    /// Inserts `key` if it is resident or has now been seen `k` times.
    pub fn put(&self, key: K, value: V) {
        self.segment.lock().put(key, value)
    }

    /// Returns the value of an admitted key. A miss counts as a sighting.
    pub fn get(&self, key: &K) -> Option<V> {
        self.segment.lock().get(key).cloned()
    }

    /// Removes `key` from the cache and forgets its history.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.segment.lock().remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.segment.lock().main.contains(key)
    }

    /// Sightings recorded for a key that has not been admitted yet.
    pub fn history_count(&self, key: &K) -> Option<u64> {
        self.segment.lock().history_count(key)
    }

    pub fn clear(&self) {
        self.segment.lock().clear()
    }

    /// Number of admitted entries.
    pub fn len(&self) -> usize {
        self.segment.lock().main.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.segment.lock().main.cap()
    }

    /// Sightings needed for admission.
    pub fn k(&self) -> u64 {
        self.segment.lock().k
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.segment.lock().check_invariants()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> CachePolicy<K, V>
    for LruKCache<K, V, S>
{
    fn put(&self, key: K, value: V) {
        self.segment.lock().put(key, value)
    }

    fn get(&self, key: &K) -> Option<V> {
        self.segment.lock().get(key).cloned()
    }

    fn len(&self) -> usize {
        self.segment.lock().main.len()
    }

    fn capacity(&self) -> usize {
        self.segment.lock().main.cap()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> CacheMetrics for LruKCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.lock().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU-K"
    }
}
