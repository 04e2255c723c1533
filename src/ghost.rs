//! Bounded ghost history of evicted keys.
//!
//! A ghost history remembers which keys were recently evicted from one
//! partition of the adaptive engine, without keeping their values. It answers
//! a single question cheaply: "was this key evicted from me a moment ago?"
//!
//! Keys are kept in FIFO order in an arena list plus a hash index:
//!
//! ```text
//!   index: HashMap<K, NodeId>        list: List<K>
//!                                    front ─► [newest] ◄──► ... ◄──► [oldest] ◄── back
//! ```
//!
//! - `record(k)`: appends `k` as newest, dropping the oldest key when full
//! - `take(k)`: consumes `k` if present (a ghost hit)
//!
//! All operations are O(1) average.

use crate::error::InvariantError;
use crate::list::{List, NodeId};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Bounded FIFO set of keys with no values attached.
pub(crate) struct GhostList<K, S = DefaultHashBuilder> {
    list: List<K>,
    index: HashMap<K, NodeId, S>,
    capacity: usize,
}

impl<K: Hash + Eq + Clone, S: BuildHasher> GhostList<K, S> {
    /// Creates a ghost history holding at most `capacity` keys.
    pub(crate) fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        GhostList {
            list: List::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            capacity,
        }
    }

    #[cfg(test)]
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[cfg(test)]
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.list.len()
    }

    #[cfg(test)]
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns true if `key` is remembered. Does not consume it.
    #[cfg(test)]
    #[inline]
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index.contains_key(key)
    }

    /// Records an evicted key as the newest ghost.
    ///
    /// A key that is already remembered is refreshed to the newest position
    /// instead of being stored twice.
    pub(crate) fn record(&mut self, key: K) {
        if self.capacity == 0 {
            return;
        }

        if let Some(&id) = self.index.get(&key) {
            self.list.move_to_front(id);
            return;
        }

        if self.list.len() >= self.capacity {
            if let Some(oldest) = self.list.remove_last() {
                self.index.remove(&oldest);
            }
        }

        let id = self.list.add(key.clone());
        self.index.insert(key, id);
    }

    /// Consumes `key` if it is remembered. Returns true on a ghost hit.
    pub(crate) fn take<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.index.remove(key) {
            Some(id) => {
                self.list.remove(id);
                true
            }
            None => false,
        }
    }

    /// Forgets every key.
    pub(crate) fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
    }

    /// Checks the bound and that the index and the FIFO agree.
    pub(crate) fn check_invariants(&self, structure: &'static str) -> Result<(), InvariantError> {
        if self.list.len() > self.capacity {
            return Err(InvariantError::GhostOverflow {
                len: self.list.len(),
                capacity: self.capacity,
            });
        }
        let agree = self.list.len() == self.index.len()
            && self
                .index
                .iter()
                .all(|(key, &id)| self.list.get(id) == Some(key));
        if !agree {
            return Err(InvariantError::IndexMismatch {
                structure,
                indexed: self.index.len(),
                stored: self.list.len(),
            });
        }
        Ok(())
    }
}

impl<K, S> fmt::Debug for GhostList<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GhostList")
            .field("capacity", &self.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}
