//! Sequence containers with checked position handles.
//!
//! This crate provides two containers behind one contract, [`Sequence`]:
//!
//! ```text
//! LinkedList<T> - sentinel-bracketed doubly-linked list, nodes in an arena
//! Vector<T>     - contiguous buffer, doubling growth
//! ```
//!
//! Both are addressed through `Copy` position handles rather than borrowing
//! iterators, so a position can be obtained and then passed to a mutating
//! call. Every handle is re-validated on use: misuse returns an [`Error`]
//! instead of reading freed or shifted memory.
//!
//! # Quick Start
//!
//! ```
//! use nexus_linear::{Error, LinkedList, Sequence, Vector};
//!
//! let mut list: LinkedList<&str> = LinkedList::new();
//! list.append("a");
//! list.append("b");
//! list.prepend("c");
//! list.erase(list.begin()).unwrap();
//! assert_eq!(list.pop_last(), Ok("b"));
//!
//! let mut vec: Vector<u64> = (0..11).collect();
//! assert_eq!(vec.capacity(), 22);
//! vec.erase_range(vec.begin(), vec.end()).unwrap();
//! assert!(vec.is_empty());
//! assert_eq!(vec.pop_first(), Err(Error::EmptyContainer));
//! ```
//!
//! # Choosing a Container
//!
//! | Operation | [`LinkedList`] | [`Vector`] |
//! |-----------|----------------|------------|
//! | `append` | O(1) | O(1) amortized |
//! | `prepend` | O(1) | O(n) |
//! | `insert` / `erase` at a position | O(1) | O(n) |
//! | `pop_first` | O(1) | O(n) |
//! | `pop_last` | O(1) | O(1) |
//! | `offset` by `k` | O(k) | O(1) |
//! | Position survives unrelated edits | yes | no (offsets shift) |
//!
//! # Cursors
//!
//! [`Cursor`] and [`CursorMut`] bind a position to a borrowed container for
//! iterator-style stepping with bounds checks. Use them through
//! [`Sequence::cursor`], [`Sequence::cursor_front`], and
//! [`Sequence::cursor_mut`].

#![warn(missing_docs)]

mod arena;
pub mod cursor;
pub mod error;
pub mod index;
#[cfg(test)]
mod latency;
pub mod list;
pub mod sequence;
pub mod vector;

pub use cursor::{Cursor, CursorMut};
pub use error::{Error, Result};
pub use index::Index;
pub use list::{LinkedList, ListPosition};
pub use sequence::Sequence;
pub use vector::{Vector, DEFAULT_CAPACITY};
