//! Least Frequently Used Cache Implementation.
//!
//! The LFU (Least Frequently Used) cache evicts the least frequently accessed
//! entry when the cache reaches capacity. Entries with the same frequency are
//! evicted in arrival order: the one that reached that frequency first goes
//! first.
//!
//! # Layout
//!
//! ```text
//!   map: HashMap<K, (frequency, NodeId)>
//!
//!   frequency_lists: BTreeMap<u64, List<CacheEntry>>
//!     1 ─► [newest] ◄──► ... ◄──► [oldest]   ◄── evicted first (min_frequency)
//!     2 ─► [..] ◄──► [..]
//!     7 ─► [..]
//! ```
//!
//! A hit removes the entry from bucket `f` and pushes it to the front of
//! bucket `f + 1`. Empty buckets are dropped right away so the first bucket
//! is always the eviction candidate.
//!
//! # Aging
//!
//! Plain LFU never forgets: an entry that was hot an hour ago keeps its high
//! count and outlives everything that arrives later. This cache keeps a
//! running total of all frequencies. When `total / len` climbs above
//! `max_average_frequency`, every entry loses `max_average_frequency / 2`
//! (at least 1, never dropping below 1) and the buckets are rebuilt with
//! arrival order preserved. The pass repeats until the average is back under
//! the threshold.

use crate::config::LfuCacheConfig;
use crate::entry::CacheEntry;
use crate::error::InvariantError;
use crate::list::{List, NodeId};
use crate::metrics::{CacheMetrics, LfuCacheMetrics};
use crate::policy::CachePolicy;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::mem;
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

/// Frequency bucket plus slot of an entry.
type FrequencySlot = (u64, NodeId);

/// Internal LFU segment containing the actual cache algorithm.
///
/// Unlocked. [`LfuCache`] wraps it in a mutex and the adaptive engine embeds
/// it as its frequency partition.
pub(crate) struct LfuSegment<K, V, S = DefaultHashBuilder> {
    capacity: usize,

    /// Average frequency above which an aging pass runs
    max_average_frequency: u64,

    /// Lowest frequency with at least one entry
    min_frequency: u64,

    /// Sum of the frequencies of all resident entries
    total_frequency: u64,

    map: HashMap<K, FrequencySlot, S>,

    /// Frequency buckets; each list is ordered newest arrival first
    frequency_lists: BTreeMap<u64, List<CacheEntry<K, V>>>,

    metrics: LfuCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuSegment<K, V, S> {
    /// Creates a segment. A `max_average_frequency` of zero is treated as one.
    pub(crate) fn with_hasher(cap: usize, max_average_frequency: u64, hash_builder: S) -> Self {
        LfuSegment {
            capacity: cap,
            max_average_frequency: max_average_frequency.max(1),
            min_frequency: 1,
            total_frequency: 0,
            map: HashMap::with_capacity_and_hasher(cap, hash_builder),
            frequency_lists: BTreeMap::new(),
            metrics: LfuCacheMetrics::new(),
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
    pub(crate) fn max_average_frequency(&self) -> u64 {
        self.max_average_frequency
    }

    #[inline]
    pub(crate) fn metrics(&self) -> &LfuCacheMetrics {
        &self.metrics
    }

    #[inline]
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Current frequency of `key`, without counting as an access.
    #[inline]
    pub(crate) fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key).map(|&(frequency, _)| frequency)
    }

    pub(crate) fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (frequency, id) = *self.map.get(key)?;
        self.frequency_lists
            .get(&frequency)?
            .get(id)
            .map(|entry| &entry.value)
    }

    fn peek_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (frequency, id) = *self.map.get(key)?;
        self.frequency_lists
            .get_mut(&frequency)?
            .get_mut(id)
            .map(|entry| &mut entry.value)
    }

    /// Moves the entry for `key` from its bucket to the next one up.
    fn increment_frequency<Q>(&mut self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (frequency, id) = *self.map.get(key)?;
        let bucket = self.frequency_lists.get_mut(&frequency)?;
        let mut entry = bucket.remove(id)?;
        if bucket.is_empty() {
            self.frequency_lists.remove(&frequency);
        }

        let new_frequency = entry.touch();
        let new_id = self
            .frequency_lists
            .entry(new_frequency)
            .or_default()
            .add(entry);
        if let Some(slot) = self.map.get_mut(key) {
            *slot = (new_frequency, new_id);
        }

        if self.min_frequency == frequency && !self.frequency_lists.contains_key(&frequency) {
            self.min_frequency = new_frequency;
        }
        self.total_frequency += new_frequency - frequency;
        self.metrics.record_frequency_increment(new_frequency);
        Some(new_frequency)
    }

    fn refresh_min_frequency(&mut self) {
        self.min_frequency = self.frequency_lists.keys().next().copied().unwrap_or(1);
    }

    fn sync_frequency_levels(&mut self) {
        self.metrics.update_frequency_levels(&self.frequency_lists);
    }

    /// Looks `key` up as an access. A hit moves the entry one bucket up and
    /// may trigger aging.
    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if self.increment_frequency(key).is_none() {
            self.metrics.core.record_miss();
            return None;
        }
        self.metrics.core.record_hit();
        self.age_if_needed();
        self.sync_frequency_levels();
        // aging rebuilds the buckets, so look the slot up again
        self.peek(key)
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (frequency, id) = self.map.remove(key)?;
        let bucket = self.frequency_lists.get_mut(&frequency)?;
        let entry = bucket.remove(id)?;
        if bucket.is_empty() {
            self.frequency_lists.remove(&frequency);
            if frequency == self.min_frequency {
                self.refresh_min_frequency();
            }
        }
        self.total_frequency = self.total_frequency.saturating_sub(entry.access_count);
        self.metrics.core.record_removal();
        // dropping a cold entry raises the average
        self.age_if_needed();
        self.sync_frequency_levels();
        Some(entry.value)
    }

    /// Drops the oldest arrival of the lowest frequency bucket.
    pub(crate) fn evict(&mut self) -> Option<(K, V)> {
        let frequency = self.min_frequency;
        let bucket = self.frequency_lists.get_mut(&frequency)?;
        let entry = bucket.remove_last()?;
        if bucket.is_empty() {
            self.frequency_lists.remove(&frequency);
            self.refresh_min_frequency();
        }
        self.map.remove(&entry.key);
        self.total_frequency = self.total_frequency.saturating_sub(entry.access_count);
        self.metrics.core.record_eviction();
        log::trace!("lfu evicted entry with frequency {}", frequency);
        Some((entry.key, entry.value))
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.frequency_lists.clear();
        self.min_frequency = 1;
        self.total_frequency = 0;
        self.sync_frequency_levels();
    }

    /// Grows the capacity by `n`. Never evicts.
    pub(crate) fn increase_capacity(&mut self, n: usize) {
        self.capacity = self.capacity.saturating_add(n);
    }

    /// Shrinks the capacity by `n` (stopping at zero), evicting from the
    /// lowest buckets until the contents fit.
    pub(crate) fn decrease_capacity(&mut self, n: usize) -> Vec<(K, V)> {
        self.capacity = self.capacity.saturating_sub(n);
        let mut evicted = Vec::new();
        while self.map.len() > self.capacity {
            match self.evict() {
                Some(pair) => evicted.push(pair),
                None => break,
            }
        }
        self.age_if_needed();
        self.sync_frequency_levels();
        evicted
    }

    /// Runs aging passes while the average frequency is above the threshold.
    ///
    /// Returns `true` if at least one pass ran. Calling it again without an
    /// intervening access is a no-op.
    pub(crate) fn age_if_needed(&mut self) -> bool {
        let mut aged = false;
        while !self.map.is_empty()
            && self.total_frequency / self.map.len() as u64 > self.max_average_frequency
        {
            self.age();
            aged = true;
        }
        aged
    }

    /// Lowers every frequency by `max_average_frequency / 2`, floored at 1.
    ///
    /// Buckets are drained in ascending order, oldest arrival first, so
    /// entries that merge into the same bucket keep their relative order and
    /// the ones from lower buckets end up older.
    fn age(&mut self) {
        let decrement = (self.max_average_frequency / 2).max(1);
        let buckets = mem::take(&mut self.frequency_lists);
        self.total_frequency = 0;

        for (frequency, mut bucket) in buckets {
            let new_frequency = frequency.saturating_sub(decrement).max(1);
            while let Some(mut entry) = bucket.remove_last() {
                entry.access_count = new_frequency;
                let slot = self.map.get_mut(&entry.key);
                let id = self
                    .frequency_lists
                    .entry(new_frequency)
                    .or_default()
                    .add(entry);
                if let Some(slot) = slot {
                    *slot = (new_frequency, id);
                }
                self.total_frequency += new_frequency;
            }
        }

        self.refresh_min_frequency();
        self.metrics.record_aging_pass();
        log::debug!(
            "lfu aging pass: decrement {}, total frequency now {} over {} entries",
            decrement,
            self.total_frequency,
            self.map.len()
        );
    }

    pub(crate) fn check_invariants(&self, structure: &'static str) -> Result<(), InvariantError> {
        if self.map.len() > self.capacity {
            return Err(InvariantError::CapacityExceeded {
                structure,
                len: self.map.len(),
                capacity: self.capacity,
            });
        }

        let stored: usize = self.frequency_lists.values().map(List::len).sum();
        let no_empty_bucket = self.frequency_lists.values().all(|bucket| !bucket.is_empty());
        if stored != self.map.len() || !no_empty_bucket {
            return Err(InvariantError::IndexMismatch {
                structure,
                indexed: self.map.len(),
                stored,
            });
        }

        for (key, &(frequency, id)) in self.map.iter() {
            let entry = self
                .frequency_lists
                .get(&frequency)
                .and_then(|bucket| bucket.get(id))
                .filter(|entry| &entry.key == key);
            match entry {
                None => {
                    return Err(InvariantError::IndexMismatch {
                        structure,
                        indexed: self.map.len(),
                        stored,
                    })
                }
                Some(entry) if entry.access_count != frequency => {
                    return Err(InvariantError::FrequencyMismatch {
                        bucket: frequency,
                        counter: entry.access_count,
                    })
                }
                Some(_) => {}
            }
        }

        let actual: u64 = self
            .frequency_lists
            .iter()
            .map(|(&frequency, bucket)| frequency * bucket.len() as u64)
            .sum();
        if actual != self.total_frequency {
            return Err(InvariantError::FrequencyTotalMismatch {
                running: self.total_frequency,
                actual,
            });
        }

        if let Some(&lowest) = self.frequency_lists.keys().next() {
            if lowest != self.min_frequency {
                return Err(InvariantError::FrequencyMismatch {
                    bucket: lowest,
                    counter: self.min_frequency,
                });
            }
        }

        Ok(())
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LfuSegment<K, V, S> {
    /// Inserts or updates `key`.
    ///
    /// An update replaces the value and counts as an access. A new key starts
    /// at frequency 1; if the segment is full the oldest entry of the lowest
    /// bucket is evicted and returned first.
    pub(crate) fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.capacity == 0 {
            return None;
        }

        if self.map.contains_key(&key) {
            self.increment_frequency(&key);
            if let Some(slot) = self.peek_mut(&key) {
                *slot = value;
            }
            self.metrics.core.record_insertion();
            self.age_if_needed();
            self.sync_frequency_levels();
            return None;
        }

        let mut evicted = None;
        if self.map.len() >= self.capacity {
            evicted = self.evict();
        }

        let id = self
            .frequency_lists
            .entry(1)
            .or_default()
            .add(CacheEntry::new(key.clone(), value));
        self.map.insert(key, (1, id));
        self.min_frequency = 1;
        self.total_frequency += 1;
        self.metrics.core.record_insertion();
        self.age_if_needed();
        self.sync_frequency_levels();

        evicted
    }
}

impl<K, V, S> core::fmt::Debug for LfuSegment<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LfuSegment")
            .field("capacity", &self.capacity)
            .field("len", &self.map.len())
            .field("min_frequency", &self.min_frequency)
            .field("total_frequency", &self.total_frequency)
            .field("max_average_frequency", &self.max_average_frequency)
            .finish()
    }
}

/// A thread-safe Least Frequently Used (LFU) cache with frequency aging.
///
/// Each entry counts its accesses. When the cache is full, the entry with the
/// lowest count is evicted; ties go to the entry that reached that count
/// first. Counts are aged down when their average exceeds the configured
/// threshold, see the [module docs](self).
///
/// # Examples
///
/// ```
/// use cache_policies::LfuCache;
///
/// let cache = LfuCache::new(2);
/// cache.put("rare", 1);
/// cache.put("popular", 2);
///
/// for _ in 0..10 {
///     cache.get(&"popular");
/// }
///
/// cache.put("new", 3); // "rare" evicted (lowest frequency)
/// assert!(cache.get(&"rare").is_none());
/// assert_eq!(cache.get(&"popular"), Some(2));
/// ```
#[derive(Debug)]
pub struct LfuCache<K, V, S = DefaultHashBuilder> {
    segment: Mutex<LfuSegment<K, V, S>>,
}

impl<K: Hash + Eq, V: Clone> LfuCache<K, V> {
    /// Creates an LFU cache holding at most `cap` entries, with the default
    /// aging threshold.
    pub fn new(cap: usize) -> LfuCache<K, V, DefaultHashBuilder> {
        LfuCache::with_hasher(cap, DefaultHashBuilder::default())
    }

    /// Creates an LFU cache from a configuration and an optional hasher.
    ///
    /// ```
    /// use cache_policies::config::LfuCacheConfig;
    /// use cache_policies::LfuCache;
    ///
    /// let config = LfuCacheConfig { capacity: 8, max_average_frequency: 4 };
    /// let cache: LfuCache<&str, i32> = LfuCache::init(config, None);
    /// assert_eq!(cache.max_average_frequency(), 4);
    /// ```
    pub fn init(config: LfuCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        LfuCache::init_with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V: Clone, S: BuildHasher> LfuCache<K, V, S> {
    /// Creates an LFU cache with the given capacity and hash builder.
    pub fn with_hasher(cap: usize, hash_builder: S) -> Self {
        Self::init_with_hasher(LfuCacheConfig::new(cap), hash_builder)
    }

    /// Creates an LFU cache from a configuration and a hash builder.
    pub fn init_with_hasher(config: LfuCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: Mutex::new(LfuSegment::with_hasher(
                config.capacity,
                config.max_average_frequency,
                hash_builder,
            )),
        }
    }

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

    /// Average frequency that triggers aging.
    pub fn max_average_frequency(&self) -> u64 {
        self.segment.lock().max_average_frequency()
    }

    /// Looks `key` up, bumping its frequency on a hit.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().get(key).cloned()
    }

    /// Returns the value without counting an access.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().peek(key).cloned()
    }

    /// Returns `true` if `key` is resident. Does not count an access.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().contains(key)
    }

    /// Returns the current frequency of `key`.
    pub fn frequency<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().frequency(key)
    }

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

    /// Shrinks the capacity by `n` and returns the entries evicted to fit.
    pub fn decrease_capacity(&self, n: usize) -> Vec<(K, V)> {
        self.segment.lock().decrease_capacity(n)
    }

    /// Runs aging if the average frequency is over the threshold. Returns
    /// `true` if anything was aged.
    pub fn age_if_needed(&self) -> bool {
        self.segment.lock().age_if_needed()
    }

    /// Verifies the bucket, index and running-total invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.segment.lock().check_invariants("lfu")
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LfuCache<K, V, S> {
    /// Inserts or updates `key`, returning the entry evicted to make room.
    #[inline]
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.segment.lock().put(key, value)
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> CachePolicy<K, V> for LfuCache<K, V, S> {
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

impl<K: Hash + Eq, V: Clone, S: BuildHasher> CacheMetrics for LfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.lock().metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}
