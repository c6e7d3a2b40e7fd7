//! Doubly-linked list backed by a node arena.
//!
//! Nodes live in a [`slab::Slab`] owned by the list and link to each other by
//! [`Key`] rather than by pointer. The backward link is just another index,
//! so there is no ownership cycle to break and no `unsafe` in the list.
//!
//! # Invariants
//!
//! - `len == 0` iff `head` and `tail` are both `K::NONE`.
//! - Walking `next` from `head` visits exactly `len` nodes, `tail` last.
//! - `prev` mirrors `next` for every node.
//! - `head.prev` and `tail.next` are `K::NONE`.
//! - The arena holds exactly the `len` nodes reachable from `head`.
//!
//! Every mutator locates its targets before touching a link, so an
//! operation that finds nothing to do leaves the list exactly as it was.
//!
//! # Example
//!
//! ```
//! use nexus_sequence::LinkedList;
//!
//! let mut list: LinkedList<u64> = LinkedList::new();
//! list.append(1);
//! list.append(2);
//! list.append(3);
//!
//! assert_eq!(list.to_sequence(), vec![1, 2, 3]);
//! assert_eq!(list.to_text(", "), "1, 2, 3");
//!
//! // Swap is by value, not by position
//! assert!(list.swap(&1, &3));
//! assert_eq!(list.to_sequence(), vec![3, 2, 1]);
//!
//! // Misses are no-ops that report what happened
//! assert_eq!(list.remove(&9), None);
//! assert_eq!(list.remove_at(10), None);
//! assert_eq!(list.len(), 3);
//! ```

use core::fmt;

use slab::Slab;

use crate::{Cursor, IndexOutOfBounds, Iter, Key};

/// Separator used by `Display` and the usual argument to [`LinkedList::to_text`].
pub const DEFAULT_SEPARATOR: &str = ", ";

/// A node in the list: one value plus its two neighbor links.
///
/// Callers see `&T` through the list, its iterators and [`Cursor`].
#[derive(Debug)]
pub(crate) struct ListNode<T, K: Key = u32> {
    pub(crate) value: T,
    pub(crate) prev: K,
    pub(crate) next: K,
}

impl<T, K: Key> ListNode<T, K> {
    #[inline]
    fn new(value: T) -> Self {
        Self {
            value,
            prev: K::NONE,
            next: K::NONE,
        }
    }
}

/// A doubly-linked list that owns its nodes.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `K`: Node key type (default `u32`, see [`Key`])
pub struct LinkedList<T, K: Key = u32> {
    nodes: Slab<ListNode<T, K>>,
    head: K,
    tail: K,
    len: usize,
}

impl<T, K: Key> Default for LinkedList<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> LinkedList<T, K> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: K::NONE,
            tail: K::NONE,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the
    /// arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: K::NONE,
            tail: K::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Appends a value to the back of the list. O(1).
    ///
    /// Returns the key of the new node.
    ///
    /// # Panics
    ///
    /// Panics if the arena outgrows the key type (more than `K::NONE` live
    /// nodes, e.g. 2^32 - 1 for the default `u32`).
    #[inline]
    pub fn append(&mut self, value: T) -> K {
        let key = self.alloc(value);
        self.link_back(key);
        key
    }

    /// Appends a value, or hands it back if the key type has no room left.
    ///
    /// # Errors
    ///
    /// Returns `Err(value)` when the next arena slot cannot be represented
    /// in `K` without aliasing `K::NONE`.
    pub fn try_append(&mut self, value: T) -> Result<K, T> {
        let key = self.try_alloc(value)?;
        self.link_back(key);
        Ok(key)
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `index == len()` appends. O(min(index, len - index)).
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`. Use [`try_insert_at`](Self::try_insert_at)
    /// when the index comes from untrusted input.
    #[track_caller]
    pub fn insert_at(&mut self, value: T, index: usize) -> K {
        match self.try_insert_at(value, index) {
            Ok(key) => key,
            Err(err) => panic!("{err}"),
        }
    }

    /// Inserts `value` at position `index`, or hands it back if `index`
    /// is past the end.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] carrying `value` if `index > len()`.
    pub fn try_insert_at(&mut self, value: T, index: usize) -> Result<K, IndexOutOfBounds<T>> {
        if index > self.len {
            tracing::debug!(index, len = self.len, "insert position past end of list");
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
                value,
            });
        }

        if index == self.len {
            return Ok(self.append(value));
        }

        let before = self.key_at(index).expect("index < len resolves to a node");
        let key = self.alloc(value);
        self.link_before(before, key);
        Ok(key)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the first element equal to `value`, in forward order. O(n).
    ///
    /// Returns the removed element, or `None` (leaving the list untouched)
    /// if no element matches.
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let Some(key) = self.find(value) else {
            tracing::trace!(len = self.len, "remove: value not present");
            return None;
        };
        Some(self.release(key))
    }

    /// Removes the element at position `index`. O(n).
    ///
    /// Returns `None` without touching the list if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let Some(key) = self.key_at(index) else {
            tracing::trace!(index, len = self.len, "remove_at: index out of range");
            return None;
        };
        Some(self.release(key))
    }

    /// Removes and returns the front element.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        let key = self.head.to_option()?;
        Some(self.release(key))
    }

    /// Removes and returns the back element.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        let key = self.tail.to_option()?;
        Some(self.release(key))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Reordering
    // ========================================================================

    /// Exchanges the positions of the first node holding `x` and the first
    /// node holding `y`. O(n).
    ///
    /// This is a swap **by value**: both arguments are searched for from the
    /// front, and the two nodes trade places by relinking. Values never move
    /// between nodes, so keys and [`Cursor`]s keep pointing at the same
    /// values. Only the first occurrence of each value takes part.
    ///
    /// Returns `true` if the order changed. Equal arguments, or either
    /// value missing, leave the list untouched and return `false`.
    ///
    /// ```
    /// use nexus_sequence::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = [1, 2, 3].into();
    /// assert!(list.swap(&1, &3));
    /// assert_eq!(list.to_sequence(), vec![3, 2, 1]);
    ///
    /// assert!(!list.swap(&2, &2));
    /// assert!(!list.swap(&2, &7));
    /// assert_eq!(list.to_sequence(), vec![3, 2, 1]);
    /// ```
    pub fn swap(&mut self, x: &T, y: &T) -> bool
    where
        T: PartialEq,
    {
        if x == y {
            return false;
        }

        let (Some(a), Some(b)) = (self.find(x), self.find(y)) else {
            tracing::trace!(len = self.len, "swap: value not present");
            return false;
        };
        if a == b {
            return false;
        }

        self.exchange(a, b);
        true
    }

    /// Trades the positions of two distinct linked nodes.
    fn exchange(&mut self, a: K, b: K) {
        let a_next = self.node(a).next;
        let b_next = self.node(b).next;

        if a_next == b {
            self.unlink(a);
            self.link_after(b, a);
        } else if b_next == a {
            self.unlink(b);
            self.link_after(a, b);
        } else {
            // Not adjacent: a_next can be neither a nor b, so it stays a
            // valid anchor for b after both moves.
            self.unlink(a);
            self.link_before(b, a);
            self.unlink(b);
            if a_next.is_some() {
                self.link_before(a_next, b);
            } else {
                self.link_back(b);
            }
        }
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a read-only position at the front of the list.
    #[inline]
    pub fn front(&self) -> Option<Cursor<'_, T, K>> {
        self.head.to_option().map(|key| Cursor::new(self, key))
    }

    /// Returns a read-only position at the back of the list.
    #[inline]
    pub fn back(&self) -> Option<Cursor<'_, T, K>> {
        self.tail.to_option().map(|key| Cursor::new(self, key))
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front_value(&self) -> Option<&T> {
        self.head.to_option().map(|key| &self.node(key).value)
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back_value(&self) -> Option<&T> {
        self.tail.to_option().map(|key| &self.node(key).value)
    }

    /// Returns the element at position `index`. O(n).
    pub fn get(&self, index: usize) -> Option<&T> {
        self.key_at(index).map(|key| &self.node(key).value)
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value).is_some()
    }

    /// Returns the position of the first element equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, K> {
        Iter::new(self)
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Copies the elements into a fresh `Vec`, front to back.
    pub fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter().cloned());
        out
    }

    /// Renders the elements with `Display`, joined by `separator`.
    ///
    /// An empty list renders as `""`; there is no trailing separator.
    /// `list.to_string()` is `list.to_text(DEFAULT_SEPARATOR)`.
    pub fn to_text(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        let _ = self.write_text(&mut out, separator);
        out
    }

    fn write_text<W: fmt::Write>(&self, out: &mut W, separator: &str) -> fmt::Result
    where
        T: fmt::Display,
    {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                out.write_str(separator)?;
            }
            write!(out, "{value}")?;
        }
        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[inline]
    pub(crate) fn node(&self, key: K) -> &ListNode<T, K> {
        &self.nodes[key.as_usize()]
    }

    #[inline]
    fn node_mut(&mut self, key: K) -> &mut ListNode<T, K> {
        &mut self.nodes[key.as_usize()]
    }

    #[inline]
    pub(crate) fn head_key(&self) -> K {
        self.head
    }

    fn alloc(&mut self, value: T) -> K {
        match self.try_alloc(value) {
            Ok(key) => key,
            Err(_) => panic!("list node count exceeds key capacity ({:?})", K::NONE),
        }
    }

    fn try_alloc(&mut self, value: T) -> Result<K, T> {
        let entry = self.nodes.vacant_entry();
        let Some(key) = K::try_from_usize(entry.key()) else {
            return Err(value);
        };
        entry.insert(ListNode::new(value));
        Ok(key)
    }

    /// Unlinks a node and frees its slot.
    fn release(&mut self, key: K) -> T {
        self.unlink(key);
        self.nodes.remove(key.as_usize()).value
    }

    fn find(&self, value: &T) -> Option<K>
    where
        T: PartialEq,
    {
        let mut key = self.head;
        while key.is_some() {
            let node = self.node(key);
            if node.value == *value {
                return Some(key);
            }
            key = node.next;
        }
        None
    }

    /// Resolves a position to a node key, walking from whichever end is
    /// closer.
    fn key_at(&self, index: usize) -> Option<K> {
        if index >= self.len {
            return None;
        }

        if index <= self.len / 2 {
            let mut key = self.head;
            for _ in 0..index {
                key = self.node(key).next;
            }
            Some(key)
        } else {
            let mut key = self.tail;
            for _ in index + 1..self.len {
                key = self.node(key).prev;
            }
            Some(key)
        }
    }

    // Link primitives. Each keeps head/tail/len consistent on its own, so
    // compound moves are sequences of unlink + link.

    fn link_back(&mut self, key: K) {
        let tail = self.tail;
        let node = self.node_mut(key);
        node.prev = tail;
        node.next = K::NONE;

        if tail.is_some() {
            self.node_mut(tail).next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
    }

    fn link_after(&mut self, after: K, key: K) {
        let next = self.node(after).next;
        let node = self.node_mut(key);
        node.prev = after;
        node.next = next;

        self.node_mut(after).next = key;

        if next.is_some() {
            self.node_mut(next).prev = key;
        } else {
            self.tail = key;
        }

        self.len += 1;
    }

    fn link_before(&mut self, before: K, key: K) {
        let prev = self.node(before).prev;
        let node = self.node_mut(key);
        node.next = before;
        node.prev = prev;

        self.node_mut(before).prev = key;

        if prev.is_some() {
            self.node_mut(prev).next = key;
        } else {
            self.head = key;
        }

        self.len += 1;
    }

    fn unlink(&mut self, key: K) {
        let node = self.node(key);
        let prev = node.prev;
        let next = node.next;

        if prev.is_some() {
            self.node_mut(prev).next = next;
        } else {
            self.head = next;
        }

        if next.is_some() {
            self.node_mut(next).prev = prev;
        } else {
            self.tail = prev;
        }

        let node = self.node_mut(key);
        node.prev = K::NONE;
        node.next = K::NONE;

        self.len -= 1;
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<T: fmt::Debug, K: Key> fmt::Debug for LinkedList<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, K: Key> fmt::Display for LinkedList<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f, DEFAULT_SEPARATOR)
    }
}

impl<T: Clone, K: Key> Clone for LinkedList<T, K> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len);
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: PartialEq, K: Key> PartialEq for LinkedList<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, K: Key> Eq for LinkedList<T, K> {}

impl<T, K: Key> Extend<T> for LinkedList<T, K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T, K: Key> FromIterator<T> for LinkedList<T, K> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T, K: Key> From<Vec<T>> for LinkedList<T, K> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, K: Key, const N: usize> From<[T; N]> for LinkedList<T, K> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, K: Key> From<LinkedList<T, K>> for Vec<T> {
    fn from(list: LinkedList<T, K>) -> Self {
        list.into_iter().collect()
    }
}
