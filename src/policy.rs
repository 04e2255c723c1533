//! The capability contract shared by every cache engine.
//!
//! Callers that only need "put a value, get it back later" can hold any engine
//! behind [`CachePolicy`] and swap eviction policies without touching call
//! sites:
//!
//! ```
//! use cache_policies::{ArcCache, CachePolicy, LfuCache, LruCache};
//!
//! let caches: Vec<Box<dyn CachePolicy<u32, String>>> = vec![
//!     Box::new(LruCache::<u32, String>::new(16)),
//!     Box::new(LfuCache::<u32, String>::new(16)),
//!     Box::new(ArcCache::<u32, String>::new(16)),
//! ];
//!
//! for cache in &caches {
//!     cache.put(7, "seven".to_string());
//!     assert_eq!(cache.get(&7).as_deref(), Some("seven"));
//!     assert_eq!(cache.get_or_default(&8), String::new());
//! }
//! ```
//!
//! Every implementation locks internally, so all methods take `&self` and an
//! engine can be shared across threads through an `Arc`.

/// Uniform cache interface implemented by every engine in this crate.
pub trait CachePolicy<K, V> {
    /// Inserts or updates `key`. May evict other entries.
    fn put(&self, key: K, value: V);

    /// Looks `key` up, returning a clone of its value on a hit.
    ///
    /// A hit counts as an access and updates the engine's ordering state.
    /// `None` is the "not found" signal; no lookup ever fails otherwise.
    fn get(&self, key: &K) -> Option<V>;

    /// Looks `key` up, returning `V::default()` on a miss.
    fn get_or_default(&self, key: &K) -> V
    where
        V: Default,
    {
        self.get(key).unwrap_or_default()
    }

    /// Number of resident entries.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of resident entries.
    fn capacity(&self) -> usize;
}
