//! Error types for positional insertion.

use core::fmt;

/// Insertion index lies past the end of the list.
///
/// Returned by [`LinkedList::try_insert_at`](crate::LinkedList::try_insert_at).
/// Carries the rejected value so the caller gets it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds<T> {
    /// Requested position.
    pub index: usize,
    /// List length at the time of the call.
    pub len: usize,
    /// The value that was not inserted.
    pub value: T,
}

impl<T> IndexOutOfBounds<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> fmt::Display for IndexOutOfBounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insertion index {} out of bounds for list of length {}",
            self.index, self.len
        )
    }
}

impl<T: fmt::Debug> std::error::Error for IndexOutOfBounds<T> {}
