//! Read-only node positions.

use core::fmt;

use crate::{Key, LinkedList};

/// A read-only position on a node of a [`LinkedList`].
///
/// Returned by [`LinkedList::front`] and [`LinkedList::back`] as an entry
/// point for walking the chain by hand in either direction. A cursor
/// borrows the list, so the list cannot change while one is alive.
///
/// # Example
///
/// ```
/// use nexus_sequence::LinkedList;
///
/// let list: LinkedList<u32> = [1, 2, 3].into();
///
/// // Walk backwards from the tail
/// let mut values = Vec::new();
/// let mut cursor = list.back();
/// while let Some(c) = cursor {
///     values.push(*c.value());
///     cursor = c.prev();
/// }
/// assert_eq!(values, vec![3, 2, 1]);
/// ```
pub struct Cursor<'a, T, K: Key = u32> {
    list: &'a LinkedList<T, K>,
    key: K,
}

impl<'a, T, K: Key> Cursor<'a, T, K> {
    /// `key` must be linked into `list`.
    #[inline]
    pub(crate) fn new(list: &'a LinkedList<T, K>, key: K) -> Self {
        debug_assert!(key.is_some());
        Self { list, key }
    }

    /// Returns the value stored at this position.
    #[inline]
    pub fn value(&self) -> &'a T {
        &self.list.node(self.key).value
    }

    /// Returns the node key at this position.
    #[inline]
    pub fn key(&self) -> K {
        self.key
    }

    /// Moves one node towards the back. `None` past the tail.
    #[inline]
    pub fn next(&self) -> Option<Self> {
        let next = self.list.node(self.key).next;
        next.to_option().map(|key| Self::new(self.list, key))
    }

    /// Moves one node towards the front. `None` past the head.
    #[inline]
    pub fn prev(&self) -> Option<Self> {
        let prev = self.list.node(self.key).prev;
        prev.to_option().map(|key| Self::new(self.list, key))
    }

    /// Returns `true` if this position is the head.
    #[inline]
    pub fn is_front(&self) -> bool {
        self.list.node(self.key).prev.is_none()
    }

    /// Returns `true` if this position is the tail.
    #[inline]
    pub fn is_back(&self) -> bool {
        self.list.node(self.key).next.is_none()
    }
}

impl<T, K: Key> Clone for Cursor<'_, T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, K: Key> Copy for Cursor<'_, T, K> {}

impl<T: fmt::Debug, K: Key> fmt::Debug for Cursor<'_, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("key", &self.key)
            .field("value", self.value())
            .finish()
    }
}
