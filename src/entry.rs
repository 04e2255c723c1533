//! Cache entry type shared by the recency and frequency engines.
//!
//! An entry carries the key, the value and an access counter. The counter
//! starts at 1 when the entry is created and is bumped on every hit or
//! in-place update. The LRU engine uses it to decide promotion in the
//! adaptive engine; the LFU engine files entries into buckets by it.

use core::fmt;

/// A resident key-value pair plus its access counter.
///
/// # Examples
///
/// ```
/// use cache_policies::entry::CacheEntry;
///
/// let mut entry = CacheEntry::new("key", 42);
/// assert_eq!(entry.access_count, 1);
/// entry.touch();
/// assert_eq!(entry.access_count, 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    /// The cached key.
    pub key: K,
    /// The cached value.
    pub value: V,
    /// Number of recorded accesses, never below 1 while resident.
    pub access_count: u64,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates an entry that has been accessed once.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            access_count: 1,
        }
    }

    /// Records one access and returns the new count.
    #[inline]
    pub fn touch(&mut self) -> u64 {
        self.access_count = self.access_count.saturating_add(1);
        self.access_count
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("access_count", &self.access_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_starts_at_one() {
        let entry = CacheEntry::new(1, "one");
        assert_eq!(entry.access_count, 1);
        assert_eq!(entry.key, 1);
        assert_eq!(entry.value, "one");
    }

    #[test]
    fn test_entry_touch_saturates() {
        let mut entry = CacheEntry::new(1, 1);
        entry.access_count = u64::MAX;
        assert_eq!(entry.touch(), u64::MAX);
    }
}
