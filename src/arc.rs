//! Adaptive Replacement Cache (ARC) Implementation
//!
//! The adaptive cache runs a recency partition (LRU) and a frequency partition
//! (LFU) side by side and moves capacity between them at run time, following
//! whichever kind of locality the workload currently shows.
//!
//! # Algorithm
//!
//! ```text
//!            total capacity = pR + pF
//!   ┌──────────────────────────┬───────────────────────────┐
//!   │  recent (LRU, cap pR)    │  frequent (LFU, cap pF)   │
//!   └────────────┬─────────────┴─────────────┬─────────────┘
//!        evicted │                           │ evicted
//!                ▼                           ▼
//!        recent ghost (keys)         frequent ghost (keys)
//! ```
//!
//! - Every key enters through the recency partition.
//! - Once a recent entry has been accessed `promotion_threshold` times, a copy
//!   is propagated into the frequency partition. The recent copy stays.
//! - A lookup or insert of a key found in the **recent ghost** means the
//!   recency partition was too small: the frequency partition gives up one
//!   slot (its evictions go to the frequent ghost) and recency grows by one.
//! - A hit in the **frequent ghost** moves one slot the other way.
//! - Neither partition shrinks below `min_partition_capacity`, so `pR + pF`
//!   always equals the total capacity.
//!
//! Ghost check, rebalance and partition dispatch all happen under one lock.
//!
//! # Examples
//!
//! ```
//! use cache_policies::ArcCache;
//!
//! let cache = ArcCache::new(4);
//! assert_eq!(cache.partition_sizes(), (2, 2));
//!
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3); // "a" falls out of the recency partition into its ghost
//!
//! cache.put("a", 1); // recent ghost hit: recency grows, frequency shrinks
//! assert_eq!(cache.partition_sizes(), (3, 1));
//! assert_eq!(cache.get(&"a"), Some(1));
//! ```

use crate::config::ArcCacheConfig;
use crate::error::InvariantError;
use crate::ghost::GhostList;
use crate::lfu::LfuSegment;
use crate::lru::LruSegment;
use crate::metrics::{ArcCacheMetrics, CacheMetrics};
use crate::policy::CachePolicy;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::string::String;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// Internal ARC segment: both partitions, both ghosts and the split.
pub(crate) struct ArcSegment<K, V, S = DefaultHashBuilder> {
    capacity: usize,
    promotion_threshold: u64,
    min_partition: usize,
    initial_recent: usize,
    recent: LruSegment<K, V, S>,
    frequent: LfuSegment<K, V, S>,
    recent_ghost: GhostList<K, S>,
    frequent_ghost: GhostList<K, S>,
    metrics: ArcCacheMetrics,
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> ArcSegment<K, V, S> {
    pub(crate) fn init(config: ArcCacheConfig, hash_builder: S) -> Self {
        let (recent_cap, frequent_cap) = config.initial_partitions();
        ArcSegment {
            capacity: config.capacity,
            promotion_threshold: config.effective_promotion_threshold(),
            min_partition: config.effective_min_partition(),
            initial_recent: recent_cap,
            recent: LruSegment::with_hasher(recent_cap, hash_builder.clone()),
            frequent: LfuSegment::with_hasher(
                frequent_cap,
                config.max_average_frequency,
                hash_builder.clone(),
            ),
            recent_ghost: GhostList::with_hasher(config.ghost_capacity, hash_builder.clone()),
            frequent_ghost: GhostList::with_hasher(config.ghost_capacity, hash_builder),
            metrics: ArcCacheMetrics::new(recent_cap, frequent_cap),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stored entries in both partitions. A key promoted while still recent
    /// has a copy in each and counts twice.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.recent.len() + self.frequent.len()
    }

    #[inline]
    pub(crate) fn partition_sizes(&self) -> (usize, usize) {
        (self.recent.cap(), self.frequent.cap())
    }

    #[inline]
    pub(crate) fn metrics(&self) -> &ArcCacheMetrics {
        &self.metrics
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.recent.contains(key) || self.frequent.contains(key)
    }

    /// Consumes a ghost record of `key`, shifting one slot toward the
    /// partition that evicted it. Returns true on a ghost hit.
    fn check_ghosts<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if self.recent_ghost.take(key) {
            self.metrics.record_recent_ghost_hit();
            if self.frequent.cap() > self.min_partition {
                for (evicted, _) in self.frequent.decrease_capacity(1) {
                    self.frequent_ghost.record(evicted);
                }
                self.recent.increase_capacity(1);
                self.record_rebalance("recent");
            }
            return true;
        }

        if self.frequent_ghost.take(key) {
            self.metrics.record_frequent_ghost_hit();
            if self.recent.cap() > self.min_partition {
                for (evicted, _) in self.recent.decrease_capacity(1) {
                    self.recent_ghost.record(evicted);
                }
                self.frequent.increase_capacity(1);
                self.record_rebalance("frequent");
            }
            return true;
        }

        false
    }

    fn record_rebalance(&mut self, grown: &str) {
        let (recent, frequent) = self.partition_sizes();
        self.metrics.record_rebalance(recent, frequent);
        log::debug!(
            "arc ghost hit grew {} partition: recent={} frequent={}",
            grown,
            recent,
            frequent
        );
    }

    fn put_frequent(&mut self, key: K, value: V) {
        if let Some((evicted, _)) = self.frequent.put(key, value) {
            log::trace!("arc frequent partition evicted a key into its ghost");
            self.frequent_ghost.record(evicted);
        }
    }

    fn debug_check_partitions(&self) {
        debug_assert_eq!(
            self.recent.cap() + self.frequent.cap(),
            self.capacity,
            "partition capacities must add up to the total"
        );
    }

    pub(crate) fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

        let ghost_hit = self.check_ghosts(&key);
        let in_frequent = self.frequent.contains(&key);

        if let Some((evicted, _)) = self.recent.put(key.clone(), value.clone()) {
            log::trace!("arc recent partition evicted a key into its ghost");
            self.recent_ghost.record(evicted);
        }
        self.metrics.core.record_insertion();

        let promote = !ghost_hit
            && self
                .recent
                .peek_entry(&key)
                .map_or(false, |entry| entry.access_count >= self.promotion_threshold);
        if promote {
            log::trace!("arc promoted a recent key on put");
            self.metrics.record_promotion();
        }
        if promote || in_frequent {
            self.put_frequent(key, value);
        }

        self.debug_check_partitions();
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if self.capacity == 0 {
            self.metrics.core.record_miss();
            return None;
        }

        self.check_ghosts(key);

        let recent_hit = self
            .recent
            .get_entry(key)
            .map(|entry| (entry.value.clone(), entry.access_count));
        if let Some((value, access_count)) = recent_hit {
            self.metrics.record_recent_hit();
            if access_count >= self.promotion_threshold {
                if let Some(owned_key) = self.recent.peek_entry(key).map(|e| e.key.clone()) {
                    log::trace!("arc promoted a recent key after {} accesses", access_count);
                    self.metrics.record_promotion();
                    self.put_frequent(owned_key, value.clone());
                }
            }
            self.debug_check_partitions();
            return Some(value);
        }

        let frequent_hit = self.frequent.get(key).cloned();
        match frequent_hit {
            Some(_) => self.metrics.record_frequent_hit(),
            None => self.metrics.core.record_miss(),
        }
        self.debug_check_partitions();
        frequent_hit
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let recent = self.recent.remove(key);
        let frequent = self.frequent.remove(key);
        if recent.is_some() || frequent.is_some() {
            self.metrics.core.record_removal();
        }
        recent.or(frequent)
    }

    /// Drops all entries and ghosts and restores the initial split.
    pub(crate) fn clear(&mut self) {
        self.recent.clear();
        self.frequent.clear();
        self.recent_ghost.clear();
        self.frequent_ghost.clear();

        let recent = self.recent.cap();
        if recent > self.initial_recent {
            let delta = recent - self.initial_recent;
            self.recent.decrease_capacity(delta);
            self.frequent.increase_capacity(delta);
        } else if recent < self.initial_recent {
            let delta = self.initial_recent - recent;
            self.frequent.decrease_capacity(delta);
            self.recent.increase_capacity(delta);
        }
        let (recent, frequent) = self.partition_sizes();
        self.metrics.recent_capacity = recent as u64;
        self.metrics.frequent_capacity = frequent as u64;
        self.debug_check_partitions();
    }

    pub(crate) fn check_invariants(&self) -> Result<(), InvariantError> {
        let (recent, frequent) = self.partition_sizes();
        let min = self.min_partition;
        if recent + frequent != self.capacity || recent < min || frequent < min {
            return Err(InvariantError::PartitionImbalance {
                recent,
                frequent,
                total: self.capacity,
                min,
            });
        }
        self.recent.check_invariants("arc recent")?;
        self.frequent.check_invariants("arc frequent")?;
        self.recent_ghost.check_invariants("arc recent ghost")?;
        self.frequent_ghost.check_invariants("arc frequent ghost")?;
        Ok(())
    }
}

impl<K, V, S> core::fmt::Debug for ArcSegment<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArcSegment")
            .field("capacity", &self.capacity)
            .field("promotion_threshold", &self.promotion_threshold)
            .field("min_partition", &self.min_partition)
            .field("recent", &self.recent)
            .field("frequent", &self.frequent)
            .field("recent_ghost", &self.recent_ghost)
            .field("frequent_ghost", &self.frequent_ghost)
            .finish()
    }
}

/// A thread-safe adaptive replacement cache.
///
/// See the [module docs](self) for how capacity moves between the recency
/// and frequency partitions.
#[derive(Debug)]
pub struct ArcCache<K, V, S = DefaultHashBuilder> {
    segment: Mutex<ArcSegment<K, V, S>>,
}

impl<K: Hash + Eq + Clone, V: Clone> ArcCache<K, V> {
    /// Creates an adaptive cache with `capacity` total entries and default
    /// tuning.
    pub fn new(capacity: usize) -> ArcCache<K, V, DefaultHashBuilder> {
        ArcCache::with_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates an adaptive cache from a configuration and an optional hasher.
    pub fn init(config: ArcCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        ArcCache::init_with_hasher(config, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> ArcCache<K, V, S> {
    /// Creates an adaptive cache with default tuning and the given hash builder.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        Self::init_with_hasher(ArcCacheConfig::new(capacity), hash_builder)
    }

    /// Creates an adaptive cache from a configuration and a hash builder.
    pub fn init_with_hasher(config: ArcCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: Mutex::new(ArcSegment::init(config, hash_builder)),
        }
    }

    /// Inserts or updates `key`.
    pub fn put(&self, key: K, value: V) {
        self.segment.lock().put(key, value)
    }

    /// Looks `key` up in the recency partition, then the frequency partition.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().get(key)
    }

    /// Returns `true` if either partition holds `key`. Changes no state.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().contains(key)
    }

    /// Removes `key` from both partitions. Ghost records are left alone.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().remove(key)
    }

    /// Drops everything, including ghost histories, and restores the initial split.
    pub fn clear(&self) {
        self.segment.lock().clear()
    }

    /// Number of stored entries across both partitions.
    pub fn len(&self) -> usize {
        self.segment.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total capacity (`pR + pF`).
    pub fn capacity(&self) -> usize {
        self.segment.lock().capacity()
    }

    /// Current `(recent, frequent)` partition capacities, read atomically.
    pub fn partition_sizes(&self) -> (usize, usize) {
        self.segment.lock().partition_sizes()
    }

    /// Checks the partition split, both partitions and both ghost histories.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.segment.lock().check_invariants()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> CachePolicy<K, V>
    for ArcCache<K, V, S>
{
    fn put(&self, key: K, value: V) {
        self.segment.lock().put(key, value)
    }

    fn get(&self, key: &K) -> Option<V> {
        self.segment.lock().get(key)
    }

    fn len(&self) -> usize {
        self.segment.lock().len()
    }

    fn capacity(&self) -> usize {
        self.segment.lock().capacity()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> CacheMetrics for ArcCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.lock().metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ARC"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cache(capacity: usize) -> ArcCache<&'static str, i32> {
        ArcCache::new(capacity)
    }

    #[test]
    fn test_arc_round_trip() {
        let cache = make_cache(8);
        cache.put("a", 1);
        assert_eq!(cache.get(&"a"), Some(1));
        assert_eq!(cache.get(&"missing"), None);
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn test_arc_promotion_at_threshold() {
        let cache = make_cache(8);
        cache.put("a", 1);
        assert!(!cache.segment.lock().frequent.contains(&"a"));

        // second access reaches the default threshold of 2
        assert_eq!(cache.get(&"a"), Some(1));
        let segment = cache.segment.lock();
        assert!(segment.frequent.contains(&"a"));
        assert!(segment.recent.contains(&"a"));
        assert_eq!(segment.metrics.promotions, 1);
    }

    #[test]
    fn test_arc_put_refreshes_frequent_copy() {
        let cache = make_cache(8);
        cache.put("a", 1);
        cache.get(&"a");
        cache.put("a", 2);
        assert_eq!(cache.get(&"a"), Some(2));
        assert_eq!(cache.segment.lock().frequent.peek(&"a"), Some(&2));
    }

    #[test]
    fn test_arc_recent_ghost_rebalance_is_clamped() {
        let cache = make_cache(4);
        assert_eq!(cache.partition_sizes(), (2, 2));

        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        assert!(!cache.contains(&"a"));

        cache.put("a", 1);
        assert_eq!(cache.partition_sizes(), (3, 1));

        // recent now holds b, c, a; push b out and bring it back
        cache.put("d", 4);
        assert!(!cache.contains(&"b"));
        cache.put("b", 2);
        // frequent is already at the minimum of 1
        assert_eq!(cache.partition_sizes(), (3, 1));
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn test_arc_frequent_ghost_rebalance() {
        let cache = make_cache(4);
        {
            let mut segment = cache.segment.lock();
            segment.frequent_ghost.record("g");
            segment.frequent_ghost.record("h");
        }

        assert_eq!(cache.get(&"g"), None);
        assert_eq!(cache.partition_sizes(), (1, 3));

        // recency is at the minimum, so the second hit only consumes the ghost
        assert_eq!(cache.get(&"h"), None);
        assert_eq!(cache.partition_sizes(), (1, 3));
        assert!(cache.check_invariants().is_ok());

        let metrics = cache.metrics();
        assert_eq!(metrics.get("frequent_ghost_hits"), Some(&2.0));
    }

    #[test]
    fn test_arc_disabled_cache() {
        let cache = make_cache(0);
        cache.put("a", 1);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.partition_sizes(), (0, 0));
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn test_arc_capacity_one() {
        let cache = make_cache(1);
        assert_eq!(cache.partition_sizes(), (1, 0));
        cache.put("a", 1);
        cache.put("b", 2);
        // ghost hit, but the frequency partition has nothing to give up
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.partition_sizes(), (1, 0));
        cache.put("a", 1);
        assert_eq!(cache.partition_sizes(), (1, 0));
        assert_eq!(cache.get(&"a"), Some(1));
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn test_arc_threshold_zero_behaves_as_one() {
        let config = ArcCacheConfig {
            promotion_threshold: 0,
            ..ArcCacheConfig::new(4)
        };
        let cache: ArcCache<&str, i32> = ArcCache::init(config, None);
        cache.put("a", 1);
        assert!(cache.segment.lock().frequent.contains(&"a"));
    }

    #[test]
    fn test_arc_remove_and_clear() {
        let cache = make_cache(4);
        cache.put("a", 1);
        cache.get(&"a");
        assert_eq!(cache.remove(&"a"), Some(1));
        assert!(!cache.contains(&"a"));

        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        cache.put("a", 1);
        assert_eq!(cache.partition_sizes(), (3, 1));

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.partition_sizes(), (2, 2));
        assert!(cache.check_invariants().is_ok());

        // restoring the split is not a rebalance
        let metrics = cache.metrics();
        assert_eq!(metrics.get("rebalances"), Some(&1.0));
        assert_eq!(metrics.get("recent_capacity"), Some(&2.0));

        cache.clear();
        assert_eq!(cache.metrics().get("rebalances"), Some(&1.0));
    }

    #[test]
    fn test_arc_frequent_partition_ages() {
        let config = ArcCacheConfig {
            max_average_frequency: 4,
            ..ArcCacheConfig::new(8)
        };
        let cache: ArcCache<&str, i32> = ArcCache::init(config, None);
        cache.put("a", 1);
        for _ in 0..10 {
            assert_eq!(cache.get(&"a"), Some(1));
        }

        let segment = cache.segment.lock();
        let frequency = segment.frequent.frequency(&"a");
        assert!(matches!(frequency, Some(f) if f <= 4));
        assert!(segment.metrics.promotions >= 1);
        assert!(segment.check_invariants().is_ok());
    }

    #[test]
    fn test_arc_capacity_bound_under_churn() {
        let cache: ArcCache<u32, u32> = ArcCache::new(16);
        for round in 0..4u32 {
            for key in 0..64u32 {
                cache.put(key, key + round);
                if key % 3 == 0 {
                    cache.get(&(key / 2));
                }
                assert!(cache.len() <= cache.capacity());
            }
        }
        let (recent, frequent) = cache.partition_sizes();
        assert_eq!(recent + frequent, 16);
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn test_arc_policy_trait_default() {
        let cache: ArcCache<u32, String> = ArcCache::new(4);
        let policy: &dyn CachePolicy<u32, String> = &cache;
        policy.put(1, "one".to_string());
        assert_eq!(policy.get_or_default(&1), "one");
        assert_eq!(policy.get_or_default(&2), "");
        assert_eq!(cache.algorithm_name(), "ARC");
    }

    #[test]
    fn test_arc_concurrent_access() {
        use std::sync::Arc;
        use std::thread;

        let cache = Arc::new(ArcCache::new(64));
        let mut handles = Vec::new();

        for t in 0..8u64 {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..2000u64 {
                    let key = (i * 7 + t) % 256;
                    if i % 2 == 0 {
                        cache.put(key, i);
                    } else {
                        let _ = cache.get(&key);
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let (recent, frequent) = cache.partition_sizes();
        assert_eq!(recent + frequent, 64);
        assert!(cache.len() <= 64);
        assert!(cache.check_invariants().is_ok());
    }
}
