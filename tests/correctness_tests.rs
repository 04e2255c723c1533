//! Correctness Tests for Cache Engines
//!
//! This module validates the fundamental correctness of each cache engine
//! using simple, predictable access patterns. Each test explicitly validates
//! which specific key gets evicted when a put causes an eviction.
//!
//! ## Test Strategy
//! - Small cache sizes (2-5 entries) for predictable behavior
//! - Simple, deterministic access patterns
//! - Each test validates the core eviction policy of the engine
//! - Seeded random workloads for the structural invariants

use cache_policies::config::{ArcCacheConfig, LfuCacheConfig, LruCacheConfig, LruKCacheConfig};
use cache_policies::{ArcCache, CachePolicy, LfuCache, LruCache, LruKCache};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// HELPER FUNCTIONS FOR CACHE CREATION
// ============================================================================

fn make_lru<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> LruCache<K, V> {
    LruCache::init(LruCacheConfig { capacity: cap }, None)
}

fn make_lfu<K: std::hash::Hash + Eq + Clone, V: Clone>(
    cap: usize,
    max_average_frequency: u64,
) -> LfuCache<K, V> {
    let config = LfuCacheConfig {
        capacity: cap,
        max_average_frequency,
    };
    LfuCache::init(config, None)
}

fn make_arc<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> ArcCache<K, V> {
    ArcCache::init(ArcCacheConfig::new(cap), None)
}

// ============================================================================
// LRU
// ============================================================================

#[test]
fn test_lru_evicts_least_recent() {
    let cache = make_lru(2);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);

    assert_eq!(cache.get(&"a"), None);
    assert_eq!(cache.len(), 2);
    assert!(cache.contains(&"b"));
    assert!(cache.contains(&"c"));
}

#[test]
fn test_lru_get_refreshes_recency() {
    let cache = make_lru(3);
    cache.put(1, "one");
    cache.put(2, "two");
    cache.put(3, "three");

    cache.get(&1);
    assert_eq!(cache.put(4, "four"), Some((2, "two")));
    assert_eq!(cache.put(5, "five"), Some((3, "three")));
    assert_eq!(cache.put(6, "six"), Some((1, "one")));
}

#[test]
fn test_lru_update_refreshes_recency() {
    let cache = make_lru(2);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("a", 10);
    assert_eq!(cache.put("c", 3), Some(("b", 2)));
    assert_eq!(cache.get(&"a"), Some(10));
}

#[test]
fn test_lru_miss_leaves_order_unchanged() {
    let cache = make_lru(2);
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.get(&"zzz"), None);
    assert_eq!(cache.keys(), vec!["b", "a"]);
}

#[test]
fn test_lru_resize() {
    let cache = make_lru(4);
    for i in 0..4 {
        cache.put(i, i);
    }
    let evicted = cache.decrease_capacity(2);
    assert_eq!(evicted, vec![(0, 0), (1, 1)]);
    assert_eq!(cache.cap(), 2);

    cache.increase_capacity(3);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.cap(), 5);
    assert!(cache.check_invariants().is_ok());
}

// ============================================================================
// LFU
// ============================================================================

#[test]
fn test_lfu_evicts_least_frequent() {
    let cache = make_lfu(3, 1_000);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);

    cache.get(&"a");
    cache.get(&"a");
    cache.get(&"c");

    assert_eq!(cache.put("d", 4), Some(("b", 2)));
    assert_eq!(cache.frequency(&"a"), Some(3));
    assert_eq!(cache.frequency(&"c"), Some(2));
    assert_eq!(cache.frequency(&"d"), Some(1));
}

#[test]
fn test_lfu_tie_break_is_oldest_first() {
    let cache = make_lfu(2, 1_000);
    cache.put("first", 1);
    cache.put("second", 2);

    assert_eq!(cache.put("third", 3), Some(("first", 1)));
    assert_eq!(cache.put("fourth", 4), Some(("second", 2)));
}

#[test]
fn test_lfu_update_counts_as_access() {
    let cache = make_lfu(2, 1_000);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("a", 11);

    assert_eq!(cache.frequency(&"a"), Some(2));
    assert_eq!(cache.put("c", 3), Some(("b", 2)));
    assert_eq!(cache.peek(&"a"), Some(11));
}

#[test]
fn test_lfu_aging_lets_new_entries_compete() {
    let cache = make_lfu(2, 4);
    cache.put("old", 0);
    for _ in 0..50 {
        cache.get(&"old");
    }
    assert!(cache.frequency(&"old").unwrap() <= 8);

    cache.put("new", 1);
    cache.get(&"new");
    assert!(cache.check_invariants().is_ok());
}

#[test]
fn test_lfu_aging_idempotent_without_access() {
    let cache = make_lfu(8, 3);
    for i in 0..4 {
        cache.put(i, i);
        for _ in 0..=i {
            cache.get(&i);
        }
    }
    let before: Vec<_> = (0..4).map(|i| cache.frequency(&i)).collect();

    assert!(!cache.age_if_needed());
    assert!(!cache.age_if_needed());

    let after: Vec<_> = (0..4).map(|i| cache.frequency(&i)).collect();
    assert_eq!(before, after);
}

#[test]
fn test_lfu_shrink_evicts_lowest_buckets() {
    let cache = make_lfu(4, 1_000);
    for i in 0..4 {
        cache.put(i, i);
    }
    cache.get(&2);
    cache.get(&3);

    let evicted = cache.decrease_capacity(2);
    assert_eq!(evicted, vec![(0, 0), (1, 1)]);
    assert!(cache.contains(&2));
    assert!(cache.contains(&3));
}

// ============================================================================
// ARC
// ============================================================================

#[test]
fn test_arc_promoted_key_survives_recent_eviction() {
    let cache = make_arc(4);
    cache.put("x", 1);
    assert_eq!(cache.get(&"x"), Some(1));

    // push "x" out of the two-slot recency partition
    cache.put("a", 2);
    cache.put("b", 3);

    assert_eq!(cache.get(&"x"), Some(1));
    assert!(cache.check_invariants().is_ok());
}

#[test]
fn test_arc_ghost_hit_grows_recent_partition() {
    let cache = make_arc(4);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);
    let (recent, frequent) = cache.partition_sizes();

    cache.put("a", 1);
    assert_eq!(cache.partition_sizes(), (recent + 1, frequent - 1));
}

#[test]
fn test_arc_rebalance_is_clamped() {
    let cache = make_arc(4);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);
    cache.put("a", 1);
    assert_eq!(cache.partition_sizes(), (3, 1));

    // another recent ghost hit, but the frequency partition is at its minimum
    cache.put("d", 4);
    cache.put("b", 2);
    assert_eq!(cache.partition_sizes(), (3, 1));
    assert!(cache.check_invariants().is_ok());
}

#[test]
fn test_arc_partitions_always_sum_to_capacity() {
    let cache = make_arc(16);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..5_000 {
        let key: u32 = rng.gen_range(0..64);
        if rng.gen_bool(0.5) {
            cache.put(key, key);
        } else {
            cache.get(&key);
        }
        let (recent, frequent) = cache.partition_sizes();
        assert_eq!(recent + frequent, 16);
    }
    assert!(cache.check_invariants().is_ok());
}

// ============================================================================
// LRU-K
// ============================================================================

#[test]
fn test_lru_k_scan_does_not_flush_hot_keys() {
    let cache = LruKCache::init(
        LruKCacheConfig {
            capacity: 2,
            history_capacity: 8,
            k: 2,
        },
        None,
    );
    for key in ["hot1", "hot2"] {
        cache.put(key, 1);
        cache.put(key, 1);
    }
    assert_eq!(cache.len(), 2);

    for key in ["s1", "s2", "s3", "s4", "s5"] {
        cache.put(key, 0);
    }
    assert!(cache.contains(&"hot1"));
    assert!(cache.contains(&"hot2"));
}

// ============================================================================
// PROPERTIES SHARED BY EVERY ENGINE
// ============================================================================

fn all_engines(capacity: usize) -> Vec<(&'static str, Box<dyn CachePolicy<u32, u64>>)> {
    let lru: Box<dyn CachePolicy<u32, u64>> = Box::new(make_lru::<u32, u64>(capacity));
    let lfu: Box<dyn CachePolicy<u32, u64>> = Box::new(make_lfu::<u32, u64>(capacity, 10));
    let arc: Box<dyn CachePolicy<u32, u64>> = Box::new(make_arc::<u32, u64>(capacity));
    let lru_k: Box<dyn CachePolicy<u32, u64>> = Box::new(LruKCache::<u32, u64>::new(capacity));
    vec![("lru", lru), ("lfu", lfu), ("arc", arc), ("lru-k", lru_k)]
}

#[test]
fn test_capacity_bound_under_random_workload() {
    for (name, cache) in all_engines(8) {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2_000 {
            let key = rng.gen_range(0..40);
            if rng.gen_bool(0.6) {
                cache.put(key, u64::from(key) * 3);
            } else if let Some(value) = cache.get(&key) {
                assert_eq!(value, u64::from(key) * 3, "{} returned a stale value", name);
            }
            assert!(cache.len() <= cache.capacity(), "{} exceeded capacity", name);
        }
    }
}

#[test]
fn test_disabled_cache() {
    for (name, cache) in all_engines(0) {
        for key in 0..10 {
            cache.put(key, 1);
            cache.put(key, 1);
        }
        for key in 0..10 {
            assert_eq!(cache.get(&key), None, "{} returned a value", name);
            assert_eq!(cache.get_or_default(&key), 0);
        }
        assert!(cache.is_empty(), "{} stored an entry", name);
    }
}

#[test]
fn test_round_trip() {
    // LRU-K needs two sightings before it stores anything, so it is left out
    for (name, cache) in all_engines(4).into_iter().filter(|(name, _)| *name != "lru-k") {
        cache.put(1, 100);
        assert_eq!(cache.get(&1), Some(100), "{}", name);
        cache.put(1, 200);
        assert_eq!(cache.get(&1), Some(200), "{}", name);
    }
}
