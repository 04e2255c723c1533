//! Least Recently Used (LRU) Cache Implementation
//!
//! LRU keeps entries ordered by recency of use and evicts the least recently
//! used entry when a new key arrives at capacity. It relies on temporal
//! locality: what was touched a moment ago is likely to be touched again.
//!
//! # Layout
//!
//! ```text
//!   map: HashMap<K, NodeId>
//!          │
//!          ▼
//!   list: front ─► [MRU] ◄──► [..] ◄──► [..] ◄──► [LRU] ◄── back
//!                                                   │
//!                                          evicted first
//! ```
//!
//! Every entry carries an access counter (see [`CacheEntry`]). The counter
//! starts at 1 on insertion and is bumped by every hit and every in-place
//! update. The adaptive engine reads it to decide when a recent key has
//! become frequent.
//!
//! # Performance Characteristics
//!
//! - Get / Put / Remove: O(1) average
//! - `decrease_capacity(n)`: O(k) for the k entries it evicts
//!
//! # Thread Safety
//!
//! [`LruCache`] locks internally, so every method takes `&self` and an
//! `LruCache` can be shared across threads through an `Arc`. For lower
//! contention use [`ConcurrentLruCache`](crate::ConcurrentLruCache), which
//! spreads keys over several independently locked caches.
//!
//! # Capacity
//!
//! A capacity of `0` disables the cache: `put` does nothing and `get` always
//! misses. Capacity can be changed at run time with `increase_capacity` and
//! `decrease_capacity`; shrinking evicts from the LRU end until the cache fits.

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::error::InvariantError;
use crate::list::{List, NodeId};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use crate::policy::CachePolicy;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::string::String;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Internal LRU segment containing the actual cache algorithm.
///
/// The segment is unlocked. [`LruCache`] wraps it in a mutex, and the
/// adaptive and LRU-K engines embed it inside their own locked state.
pub(crate) struct LruSegment<K, V, S = DefaultHashBuilder> {
    capacity: usize,
    list: List<CacheEntry<K, V>>,
    map: HashMap<K, NodeId, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> LruSegment<K, V, S> {
    pub(crate) fn with_hasher(cap: usize, hash_builder: S) -> Self {
        LruSegment {
            capacity: cap,
            list: List::with_capacity(cap),
            map: HashMap::with_capacity_and_hasher(cap, hash_builder),
            metrics: LruCacheMetrics::new(),
        }
    }

    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub(crate) fn metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Counts a lookup that was answered without consulting this segment.
    #[inline]
    pub(crate) fn record_miss(&mut self) {
        self.metrics.core.record_miss();
    }

    #[inline]
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the entry for `key` without touching recency or counters.
    pub(crate) fn peek_entry<Q>(&self, key: &Q) -> Option<&CacheEntry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = *self.map.get(key)?;
        self.list.get(id)
    }

    #[inline]
    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.peek_entry(key).map(|entry| &entry.value)
    }

    /// Looks `key` up as an access: the entry becomes MRU and its counter is
    /// bumped. A miss changes nothing but the miss counter.
    pub(crate) fn get_entry<Q>(&mut self, key: &Q) -> Option<&CacheEntry<K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = match self.map.get(key) {
            Some(&id) => id,
            None => {
                self.metrics.core.record_miss();
                return None;
            }
        };
        self.list.move_to_front(id);
        let entry = self.list.get_mut(id)?;
        entry.touch();
        self.metrics.core.record_hit();
        Some(&*entry)
    }

    #[inline]
    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_entry(key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value, counting the lookup as an access.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = *self.map.get(key)?;
        self.list.move_to_front(id);
        let entry = self.list.get_mut(id)?;
        entry.touch();
        self.metrics.core.record_hit();
        Some(&mut entry.value)
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let id = self.map.remove(key)?;
        let entry = self.list.remove(id)?;
        self.metrics.core.record_removal();
        Some(entry.value)
    }

    /// Drops the least recently used entry and hands it back.
    pub(crate) fn evict(&mut self) -> Option<(K, V)> {
        let entry = self.list.remove_last()?;
        self.map.remove(&entry.key);
        self.metrics.core.record_eviction();
        Some((entry.key, entry.value))
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }

    /// Grows the capacity by `n`. Never evicts.
    pub(crate) fn increase_capacity(&mut self, n: usize) {
        self.capacity = self.capacity.saturating_add(n);
        self.metrics.record_resize();
    }

    /// Shrinks the capacity by `n` (stopping at zero) and evicts LRU entries
    /// until the contents fit. The evicted pairs are returned oldest first.
    pub(crate) fn decrease_capacity(&mut self, n: usize) -> Vec<(K, V)> {
        self.capacity = self.capacity.saturating_sub(n);
        self.metrics.record_resize();
        let mut evicted = Vec::new();
        while self.map.len() > self.capacity {
            match self.evict() {
                Some(pair) => evicted.push(pair),
                None => break,
            }
        }
        evicted
    }

    /// Keys from most to least recently used.
    pub(crate) fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.list.iter().map(|entry| &entry.key)
    }

    pub(crate) fn check_invariants(&self, structure: &'static str) -> Result<(), InvariantError> {
        if self.map.len() > self.capacity {
            return Err(InvariantError::CapacityExceeded {
                structure,
                len: self.map.len(),
                capacity: self.capacity,
            });
        }
        let bijective = self.map.len() == self.list.len()
            && self.map.iter().all(|(key, &id)| {
                self.list
                    .get(id)
                    .map_or(false, |entry| &entry.key == key)
            });
        if !bijective {
            return Err(InvariantError::IndexMismatch {
                structure,
                indexed: self.map.len(),
                stored: self.list.len(),
            });
        }
        Ok(())
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruSegment<K, V, S> {
    /// Inserts or updates `key` and marks it most recently used.
    ///
    /// Updating bumps the access counter like a hit. Inserting a new key into
    /// a full segment evicts the LRU entry and returns it. With a capacity of
    /// zero nothing is stored.
    pub(crate) fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.capacity == 0 {
            return None;
        }

        if let Some(&id) = self.map.get(&key) {
            self.list.move_to_front(id);
            if let Some(entry) = self.list.get_mut(id) {
                entry.value = value;
                entry.touch();
            }
            self.metrics.core.record_insertion();
            return None;
        }

        let mut evicted = None;
        if self.map.len() >= self.capacity {
            evicted = self.evict();
            if evicted.is_some() {
                log::trace!("lru evicted least recently used entry at capacity {}", self.capacity);
            }
        }

        let id = self.list.add(CacheEntry::new(key.clone(), value));
        self.map.insert(key, id);
        self.metrics.core.record_insertion();

        evicted
    }
}

impl<K, V, S> core::fmt::Debug for LruSegment<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruSegment")
            .field("capacity", &self.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}

/// A thread-safe Least Recently Used (LRU) cache.
///
/// The cache holds at most `cap()` entries. When a new key arrives at
/// capacity, the entry that was used least recently is evicted. All methods
/// take `&self`; values are returned as clones because the lock is released
/// before the call returns.
///
/// # Examples
///
/// ```
/// use cache_policies::LruCache;
///
/// let cache = LruCache::new(2);
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(1));
/// assert_eq!(cache.get(&"cherry"), Some(3));
/// ```
#[derive(Debug)]
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    segment: Mutex<LruSegment<K, V, S>>,
}

impl<K: Hash + Eq, V: Clone> LruCache<K, V> {
    /// Creates an LRU cache holding at most `cap` entries.
    pub fn new(cap: usize) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::with_hasher(cap, DefaultHashBuilder::default())
    }

    /// Creates an LRU cache from a configuration and an optional hasher.
    ///
    /// ```
    /// use cache_policies::config::LruCacheConfig;
    /// use cache_policies::LruCache;
    ///
    /// let cache: LruCache<u64, u64> = LruCache::init(LruCacheConfig { capacity: 64 }, None);
    /// assert_eq!(cache.cap(), 64);
    /// ```
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        LruCache::with_hasher(config.capacity, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V: Clone, S: BuildHasher> LruCache<K, V, S> {
    /// Creates an LRU cache with the given capacity and hash builder.
    pub fn with_hasher(cap: usize, hash_builder: S) -> Self {
        Self {
            segment: Mutex::new(LruSegment::with_hasher(cap, hash_builder)),
        }
    }

    /// Maximum number of resident entries.
    #[inline]
    pub fn cap(&self) -> usize {
        self.segment.lock().cap()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segment.lock().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.lock().is_empty()
    }

    /// Looks `key` up, making it most recently used on a hit.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().get(key).cloned()
    }

    /// Applies `f` to the value in place, counting the lookup as an access.
    ///
    /// ```
    /// use cache_policies::LruCache;
    ///
    /// let cache = LruCache::new(4);
    /// cache.put("visits", 1);
    /// cache.get_mut_with(&"visits", |v| *v += 1);
    /// assert_eq!(cache.peek(&"visits"), Some(2));
    /// ```
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        self.segment.lock().get_mut(key).map(f)
    }

    /// Returns the value without updating recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().peek(key).cloned()
    }

    /// Returns the number of recorded accesses to `key` without updating recency.
    pub fn access_count<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment
            .lock()
            .peek_entry(key)
            .map(|entry| entry.access_count)
    }

    /// Returns `true` if `key` is resident. Does not update recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().contains(key)
    }

    /// Removes `key`, returning its value if it was resident.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().remove(key)
    }

    pub fn clear(&self) {
        self.segment.lock().clear()
    }

    /// Grows the capacity by `n` without evicting anything.
    pub fn increase_capacity(&self, n: usize) {
        self.segment.lock().increase_capacity(n)
    }

    /// Verifies that the index and the recency list agree and that the
    /// capacity bound holds.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.segment.lock().check_invariants("lru")
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts or updates `key`, returning the entry evicted to make room.
    #[inline]
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.segment.lock().put(key, value)
    }

    /// Shrinks the capacity by `n` and returns the entries evicted to fit,
    /// least recently used first.
    pub fn decrease_capacity(&self, n: usize) -> Vec<(K, V)> {
        self.segment.lock().decrease_capacity(n)
    }

    /// Resident keys from most to least recently used.
    pub fn keys(&self) -> Vec<K> {
        self.segment.lock().keys().cloned().collect()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> CachePolicy<K, V> for LruCache<K, V, S> {
    fn put(&self, key: K, value: V) {
        self.segment.lock().put(key, value);
    }

    fn get(&self, key: &K) -> Option<V> {
        self.segment.lock().get(key).cloned()
    }

    fn len(&self) -> usize {
        self.segment.lock().len()
    }

    fn capacity(&self) -> usize {
        self.segment.lock().cap()
    }
}

impl<K: Hash + Eq, V: Clone, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.lock().metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;

    fn make_segment(cap: usize) -> LruSegment<&'static str, i32> {
        LruSegment::with_hasher(cap, DefaultHashBuilder::default())
    }

    #[test]
    fn test_lru_get_put() {
        let cache = LruCache::new(2);
        assert_eq!(cache.put("apple", 1), None);
        assert_eq!(cache.put("banana", 2), None);
        assert_eq!(cache.get(&"apple"), Some(1));
        assert_eq!(cache.get(&"banana"), Some(2));
        assert_eq!(cache.get(&"cherry"), None);
        assert_eq!(cache.put("apple", 3), None);
        assert_eq!(cache.get(&"apple"), Some(3));
        assert_eq!(cache.put("cherry", 4), Some(("banana", 2)));
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(3));
        assert_eq!(cache.get(&"cherry"), Some(4));
    }

    #[test]
    fn test_lru_get_mut_with() {
        let cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.get_mut_with(&"apple", |v| *v = 3), Some(()));
        cache.put("cherry", 4);
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(3));
        assert_eq!(cache.get_mut_with(&"banana", |v| *v), None);
    }

    #[test]
    fn test_lru_remove() {
        let cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.remove(&"apple"), Some(1));
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.remove(&"cherry"), None);
        assert_eq!(cache.put("cherry", 3), None);
        assert_eq!(cache.get(&"banana"), Some(2));
        assert_eq!(cache.get(&"cherry"), Some(3));
    }

    #[test]
    fn test_lru_clear() {
        let cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        cache.put("cherry", 3);
        assert_eq!(cache.get(&"cherry"), Some(3));
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn test_lru_capacity_limits() {
        let cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&"a"));
        assert!(cache.contains(&"b"));
        assert!(cache.contains(&"c"));
    }

    #[test]
    fn test_lru_recency_order() {
        let cache = LruCache::new(3);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        cache.get(&"a");
        assert_eq!(cache.keys(), vec!["a", "c", "b"]);
        // peek and contains leave the order alone
        cache.peek(&"b");
        cache.contains(&"b");
        assert_eq!(cache.keys(), vec!["a", "c", "b"]);
        cache.put("d", 4);
        assert!(!cache.contains(&"b"));
    }

    #[test]
    fn test_lru_access_count() {
        let cache = LruCache::new(2);
        cache.put("a", 1);
        assert_eq!(cache.access_count(&"a"), Some(1));
        cache.get(&"a");
        assert_eq!(cache.access_count(&"a"), Some(2));
        cache.put("a", 10);
        assert_eq!(cache.access_count(&"a"), Some(3));
        cache.get(&"missing");
        assert_eq!(cache.access_count(&"missing"), None);
    }

    #[test]
    fn test_lru_zero_capacity() {
        let cache = LruCache::new(0);
        assert_eq!(cache.put("a", 1), None);
        assert_eq!(cache.get(&"a"), None);
        assert!(cache.is_empty());
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn test_lru_resize() {
        let cache = LruCache::new(3);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);

        let evicted = cache.decrease_capacity(2);
        assert_eq!(evicted, vec![("a", 1), ("b", 2)]);
        assert_eq!(cache.cap(), 1);
        assert_eq!(cache.keys(), vec!["c"]);

        // Never goes below zero
        let evicted = cache.decrease_capacity(5);
        assert_eq!(evicted, vec![("c", 3)]);
        assert_eq!(cache.cap(), 0);

        cache.increase_capacity(2);
        cache.put("d", 4);
        cache.put("e", 5);
        assert_eq!(cache.len(), 2);
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn test_lru_string_keys() {
        let cache = LruCache::new(2);
        let key1 = String::from("apple");
        let key2 = String::from("banana");
        cache.put(key1.clone(), 1);
        cache.put(key2.clone(), 2);
        assert_eq!(cache.get(&key1), Some(1));
        assert_eq!(cache.get("apple"), Some(1));
        assert_eq!(cache.get("banana"), Some(2));
    }

    #[test]
    fn test_lru_metrics() {
        let cache = LruCache::new(2);
        let metrics = cache.metrics();
        assert_eq!(metrics.get("requests").unwrap(), &0.0);
        assert_eq!(metrics.get("cache_hits").unwrap(), &0.0);
        cache.put("apple", 1);
        cache.put("banana", 2);
        cache.get(&"apple");
        cache.get(&"banana");
        cache.get(&"cherry");
        let metrics = cache.metrics();
        assert_eq!(metrics.get("cache_hits").unwrap(), &2.0);
        assert_eq!(metrics.get("cache_misses").unwrap(), &1.0);
        assert_eq!(metrics.get("requests").unwrap(), &3.0);
        cache.put("cherry", 3);
        let metrics = cache.metrics();
        assert_eq!(metrics.get("evictions").unwrap(), &1.0);
        assert_eq!(cache.algorithm_name(), "LRU");
    }

    #[test]
    fn test_lru_segment_directly() {
        let mut segment = make_segment(2);
        assert!(segment.is_empty());
        assert_eq!(segment.cap(), 2);
        segment.put("a", 1);
        segment.put("b", 2);
        assert_eq!(segment.get_entry(&"a").map(|e| e.access_count), Some(2));
        assert_eq!(segment.evict(), Some(("b", 2)));
        assert_eq!(segment.keys().copied().collect::<Vec<_>>(), vec!["a"]);
        assert!(segment.check_invariants("lru").is_ok());
    }

    #[test]
    fn test_lru_policy_trait() {
        let cache: LruCache<u32, String> = LruCache::new(1);
        let policy: &dyn CachePolicy<u32, String> = &cache;
        policy.put(1, "one".to_string());
        assert_eq!(policy.get(&1), Some("one".to_string()));
        assert_eq!(policy.get_or_default(&2), String::new());
        assert_eq!(policy.len(), 1);
        assert_eq!(policy.capacity(), 1);
    }

    #[test]
    fn test_lru_concurrent_access() {
        use std::sync::Arc;
        use std::thread;

        let cache = Arc::new(LruCache::new(100));
        let num_threads = 4;
        let ops_per_thread = 100;

        let mut handles = Vec::new();

        for t in 0..num_threads {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = format!("thread_{}_key_{}", t, i);
                    cache.put(key.clone(), t * 1000 + i);
                    let _ = cache.get(&key);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= 100);
        assert!(!cache.is_empty());
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn test_lru_concurrent_mixed_operations() {
        use std::sync::Arc;
        use std::thread;

        let cache = Arc::new(LruCache::new(50));
        let mut handles = Vec::new();

        for t in 0..8 {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..1000 {
                    let key = format!("key_{}", i % 200);
                    match i % 4 {
                        0 => {
                            cache.put(key, i);
                        }
                        1 => {
                            let _ = cache.get(&key);
                        }
                        2 => {
                            let _ = cache.get_mut_with(&key, |v| *v += 1);
                        }
                        _ => {
                            let _ = cache.remove(&key);
                        }
                    }
                    if i == 500 && t == 0 {
                        cache.clear();
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= 50);
        assert!(cache.check_invariants().is_ok());
    }
}
