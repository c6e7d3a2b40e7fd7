//! A doubly-linked sequence container with arena-backed nodes.
//!
//! [`LinkedList`] keeps its nodes in a [`slab::Slab`] and links them by
//! small integer [`Key`]s instead of pointers:
//!
//! ```text
//! std::collections::LinkedList<T> - boxed nodes, raw prev/next pointers
//! LinkedList<T, K>                - slab slots, K-sized prev/next indices
//! ```
//!
//! Benefits:
//! - **No ownership cycles**: the backward link is an index, not a second owner
//! - **No unsafe**: every link is a bounds-checked slab lookup
//! - **Compact nodes**: `u32` links by default
//! - **Slot reuse**: freed nodes are recycled by later inserts
//!
//! # Quick Start
//!
//! ```
//! use nexus_sequence::LinkedList;
//!
//! let mut list: LinkedList<u64> = LinkedList::new();
//! list.append(1);
//! list.append(2);
//! list.append(4);
//! list.insert_at(3, 2);
//!
//! assert_eq!(list.to_sequence(), vec![1, 2, 3, 4]);
//!
//! // Value-based removal, position-based removal
//! assert_eq!(list.remove(&3), Some(3));
//! assert_eq!(list.remove_at(0), Some(1));
//! assert_eq!(list.to_string(), "2, 4");
//! ```
//!
//! # No-op Contract
//!
//! [`LinkedList::remove`], [`LinkedList::remove_at`] and [`LinkedList::swap`]
//! treat a missing value or an out-of-range index as nothing to do: the list
//! is left untouched and the return value (`None` / `false`) says so.
//! [`LinkedList::insert_at`] is different: an index past the end is a caller
//! bug and panics. [`LinkedList::try_insert_at`] is the fallible form.
//!
//! # Operations
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `append` | O(1) | |
//! | `insert_at` | O(n) | walks from the nearer end |
//! | `remove` | O(n) | first match, forward order |
//! | `remove_at` | O(n) | walks from the nearer end |
//! | `swap` | O(n) | by value, relinks nodes |
//! | `pop_front` / `pop_back` | O(1) | |
//! | `to_sequence` / `to_text` | O(n) | non-mutating |
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`LinkedList`] as a plain sequence

#![warn(missing_docs)]

pub mod cursor;
pub mod error;
pub mod iter;
pub mod key;
pub mod list;

#[cfg(feature = "serde")]
mod serde_impl;

pub use cursor::Cursor;
pub use error::IndexOutOfBounds;
pub use iter::{IntoIter, Iter};
pub use key::Key;
pub use list::{DEFAULT_SEPARATOR, LinkedList};
