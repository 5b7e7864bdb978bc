//! The sequential container contract shared by [`LinkedList`] and [`Vector`].
//!
//! A [`Sequence`] is addressed through `Copy` position handles. Handles do not
//! borrow the container, so a position taken from `begin()` can be handed
//! straight to a mutating call:
//!
//! ```
//! use nexus_linear::{LinkedList, Sequence, Vector};
//!
//! fn drop_front<S: Sequence>(seq: &mut S) -> nexus_linear::Result<S::Item> {
//!     let first = seq.begin();
//!     seq.erase(first)
//! }
//!
//! let mut list: LinkedList<u32> = [1, 2, 3].into();
//! let mut vec: Vector<u32> = [1, 2, 3].into();
//!
//! assert_eq!(drop_front(&mut list), Ok(1));
//! assert_eq!(drop_front(&mut vec), Ok(1));
//! ```
//!
//! Every operation that takes a position re-validates it, so a stale or
//! foreign-looking handle produces an [`Error`] rather than touching storage.
//!
//! [`LinkedList`]: crate::LinkedList
//! [`Vector`]: crate::Vector

use core::fmt::Debug;

use crate::{Cursor, CursorMut, Error, Result};

/// A sequential container with bidirectional position handles.
pub trait Sequence {
    /// Element type.
    type Item;

    /// Position handle: identifies an element slot or the end marker.
    type Position: Copy + Eq + Debug;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds an element after the last one.
    fn append(&mut self, item: Self::Item);

    /// Adds an element before the first one.
    fn prepend(&mut self, item: Self::Item);

    /// Inserts `item` directly before `position`, returning the position of
    /// the new element.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `position` does not belong to the
    /// container's current `[begin, end]` range.
    fn insert(&mut self, position: Self::Position, item: Self::Item) -> Result<Self::Position>;

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if there is nothing to remove.
    fn pop_first(&mut self) -> Result<Self::Item>;

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if there is nothing to remove.
    fn pop_last(&mut self) -> Result<Self::Item>;

    /// Removes the element at `position`, returning it together with the
    /// position of the element that followed it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the container is empty, otherwise
    /// [`Error::InvalidPosition`] if `position` is the end marker or invalid.
    fn remove(&mut self, position: Self::Position) -> Result<(Self::Item, Self::Position)>;

    /// Removes and returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::remove`].
    #[inline]
    fn erase(&mut self, position: Self::Position) -> Result<Self::Item> {
        self.remove(position).map(|(item, _)| item)
    }

    /// Removes the half-open range `[first, last)`.
    ///
    /// A no-op when `first == last`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the range is non-empty but the container
    /// is, otherwise [`Error::InvalidPosition`] if either bound is invalid or
    /// `last` does not follow `first`. Nothing is removed on error.
    fn erase_range(&mut self, first: Self::Position, last: Self::Position) -> Result<()>;

    /// Position of the first element, or `end()` when empty.
    fn begin(&self) -> Self::Position;

    /// One-past-last position.
    fn end(&self) -> Self::Position;

    /// Dereferences `position`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] at or beyond the end marker.
    fn get(&self, position: Self::Position) -> Result<&Self::Item>;

    /// Mutably dereferences `position`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] at or beyond the end marker.
    fn get_mut(&mut self, position: Self::Position) -> Result<&mut Self::Item>;

    /// Position one step toward the end.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `position` is already the end marker.
    fn next_position(&self, position: Self::Position) -> Result<Self::Position>;

    /// Position one step toward the beginning.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `position` is already `begin()`.
    fn prev_position(&self, position: Self::Position) -> Result<Self::Position>;

    /// Position `delta` steps away from `position` (negative moves back).
    ///
    /// The default walks one step at a time.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if the walk would leave `[begin, end]`.
    fn offset(&self, position: Self::Position, delta: isize) -> Result<Self::Position> {
        let mut current = position;
        if delta >= 0 {
            for _ in 0..delta {
                current = self.next_position(current)?;
            }
        } else {
            for _ in 0..delta.unsigned_abs() {
                current = self.prev_position(current)?;
            }
        }
        Ok(current)
    }

    /// Returns a read-only cursor at `position`.
    #[inline]
    fn cursor(&self, position: Self::Position) -> Cursor<'_, Self>
    where
        Self: Sized,
    {
        Cursor::new(self, position)
    }

    /// Returns a read-only cursor at `begin()`.
    #[inline]
    fn cursor_front(&self) -> Cursor<'_, Self>
    where
        Self: Sized,
    {
        Cursor::new(self, self.begin())
    }

    /// Returns a read-only cursor at `end()`.
    #[inline]
    fn cursor_end(&self) -> Cursor<'_, Self>
    where
        Self: Sized,
    {
        Cursor::new(self, self.end())
    }

    /// Returns an exclusive cursor at `position`.
    #[inline]
    fn cursor_mut(&mut self, position: Self::Position) -> CursorMut<'_, Self>
    where
        Self: Sized,
    {
        CursorMut::new(self, position)
    }
}

/// Converts a step count into a signed offset.
#[inline]
pub(crate) fn signed(steps: usize, forward: bool) -> Result<isize> {
    let delta = isize::try_from(steps).map_err(|_| Error::OutOfRange)?;
    Ok(if forward { delta } else { -delta })
}
