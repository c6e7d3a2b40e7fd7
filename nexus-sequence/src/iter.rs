//! Forward iterators over a [`LinkedList`].

use core::iter::FusedIterator;

use crate::{Key, LinkedList};

/// Iterator over references to list elements, front to back.
pub struct Iter<'a, T, K: Key = u32> {
    list: &'a LinkedList<T, K>,
    current: K,
    remaining: usize,
}

impl<'a, T, K: Key> Iter<'a, T, K> {
    #[inline]
    pub(crate) fn new(list: &'a LinkedList<T, K>) -> Self {
        Self {
            list,
            current: list.head_key(),
            remaining: list.len(),
        }
    }
}

impl<'a, T, K: Key> Iterator for Iter<'a, T, K> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }

        let list = self.list;
        let node = list.node(self.current);
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, K: Key> ExactSizeIterator for Iter<'_, T, K> {}

impl<T, K: Key> FusedIterator for Iter<'_, T, K> {}

impl<T, K: Key> Clone for Iter<'_, T, K> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, K: Key> IntoIterator for &'a LinkedList<T, K> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that drains a list front to back.
pub struct IntoIter<T, K: Key = u32> {
    list: LinkedList<T, K>,
}

impl<T, K: Key> Iterator for IntoIter<T, K> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, K: Key> ExactSizeIterator for IntoIter<T, K> {}

impl<T, K: Key> FusedIterator for IntoIter<T, K> {}

impl<T, K: Key> IntoIterator for LinkedList<T, K> {
    type Item = T;
    type IntoIter = IntoIter<T, K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
