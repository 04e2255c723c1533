//! Doubly linked list stored in a slot arena.
//!
//! Nodes live in a `Vec` of slots and link to each other by slot index, so
//! `prev`/`next` are plain integers rather than pointers. Freed slots go on a
//! free list and are reused by the next insertion. This keeps every relink
//! O(1) without any `unsafe`.
//!
//! ```text
//!   slots: [ Some(B) | None | Some(A) | Some(C) ]     free: [1]
//!
//!   head ─► [2:A] ◄──► [0:B] ◄──► [3:C] ◄── tail
//!           front                   back
//! ```
//!
//! The front holds the newest / most recently used element and the back the
//! oldest / least recently used one. `NodeId`s stay valid until the node is
//! removed; after that the slot may be handed out again, so callers must drop
//! ids they no longer own.

use core::fmt;

/// Handle to a node in a [`List`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// Returns the slot index behind this handle.
    #[inline]
    #[cfg(test)]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

struct Node<T> {
    val: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Arena-backed doubly linked list.
pub(crate) struct List<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub(crate) fn new() -> Self {
        List {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        List {
            slots: Vec::with_capacity(capacity),
            ..List::new()
        }
    }

    /// Returns the current number of items in the list.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no items.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if `id` refers to a live node.
    #[inline]
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    #[inline]
    fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Returns a reference to the value stored at `id`.
    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|node| &node.val)
    }

    /// Returns a mutable reference to the value stored at `id`.
    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.node_mut(id).map(|node| &mut node.val)
    }

    /// Returns the value at the back (oldest) of the list.
    #[inline]
    #[cfg(test)]
    pub(crate) fn last(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Adds a value at the front of the list and returns its handle.
    pub(crate) fn add(&mut self, val: T) -> NodeId {
        let node = Node {
            val,
            prev: None,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        let id = NodeId(idx);
        self.len += 1;
        self.attach_front(id);
        id
    }

    /// Moves the node to the front of the list. Returns false for a dead handle.
    pub(crate) fn move_to_front(&mut self, id: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.head != Some(id) {
            self.detach(id);
            self.attach_front(id);
        }
        true
    }

    /// Unlinks the node, frees its slot and returns the value.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<T> {
        if !self.contains(id) {
            return None;
        }
        self.detach(id);
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(node.val)
    }

    /// Removes the last (oldest / least recently used) item from the list.
    pub(crate) fn remove_last(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Removes the first (newest / most recently used) item from the list.
    #[cfg(test)]
    pub(crate) fn remove_first(&mut self) -> Option<T> {
        let id = self.head?;
        self.remove(id)
    }

    /// Drops every node and releases all slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates from the front (newest) to the back (oldest).
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    fn detach(&mut self, id: NodeId) {
        let (prev, next) = match self.node(id) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = None;
        }
    }

    fn attach_front(&mut self, id: NodeId) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(id) {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(h) => {
                if let Some(node) = self.node_mut(h) {
                    node.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Front-to-back iterator over a [`List`].
pub(crate) struct Iter<'a, T> {
    list: &'a List<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.next?)?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
