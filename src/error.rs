//! Error types for internal consistency checks.
//!
//! Cache operations themselves are total: a miss is `None`, a zero capacity
//! disables the cache. The only error surfaced by this crate is
//! [`InvariantError`], returned by the `check_invariants` methods on each
//! engine when its internal structures disagree with each other. A correct
//! engine never produces one; they exist for tests and debugging.
//!
//! ```
//! use cache_policies::LruCache;
//!
//! let cache = LruCache::new(2);
//! cache.put("a", 1);
//! assert!(cache.check_invariants().is_ok());
//! ```

use thiserror::Error;

/// Error returned when internal cache invariants are violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// More entries are resident than the current capacity allows.
    #[error("{structure} holds {len} entries but its capacity is {capacity}")]
    CapacityExceeded {
        /// Which structure overflowed.
        structure: &'static str,
        /// Number of resident entries.
        len: usize,
        /// Configured capacity.
        capacity: usize,
    },

    /// The key index and the ordering structure disagree.
    #[error("{structure} index tracks {indexed} keys but {stored} are stored")]
    IndexMismatch {
        /// Which structure is inconsistent.
        structure: &'static str,
        /// Number of keys in the lookup index.
        indexed: usize,
        /// Number of entries in the ordering structure.
        stored: usize,
    },

    /// An entry's counter does not match the frequency bucket it is filed under.
    #[error("entry filed under frequency {bucket} has counter {counter}")]
    FrequencyMismatch {
        /// Bucket the entry is filed under.
        bucket: u64,
        /// Counter stored on the entry.
        counter: u64,
    },

    /// The running frequency total drifted from the sum of entry counters.
    #[error("running frequency total is {running} but entries sum to {actual}")]
    FrequencyTotalMismatch {
        /// Tracked running total.
        running: u64,
        /// Recomputed sum.
        actual: u64,
    },

    /// A ghost history grew past its bound.
    #[error("ghost history holds {len} keys but its capacity is {capacity}")]
    GhostOverflow {
        /// Number of remembered keys.
        len: usize,
        /// Configured ghost capacity.
        capacity: usize,
    },

    /// The adaptive partitions no longer add up to the total capacity, or one
    /// of them left its allowed range.
    #[error(
        "partitions recent={recent} frequent={frequent} violate total={total} min={min}"
    )]
    PartitionImbalance {
        /// Recency partition capacity.
        recent: usize,
        /// Frequency partition capacity.
        frequent: usize,
        /// Configured total capacity.
        total: usize,
        /// Minimum capacity of either partition.
        min: usize,
    },
}
