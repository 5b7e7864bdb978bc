//! Bidirectional cursors over any [`Sequence`].
//!
//! [`Cursor`] borrows the container shared and can be copied freely.
//! [`CursorMut`] borrows it exclusively and adds in-place mutation,
//! insertion, and removal.
//!
//! Both compare equal by position only. The borrow exists to validate
//! bounds on every step, and ties the cursor's lifetime to the container.
//!
//! ```
//! use nexus_linear::{Error, LinkedList, Sequence};
//!
//! let list: LinkedList<&str> = ["a", "b", "c"].into();
//!
//! let mut cursor = list.cursor_front();
//! assert_eq!(cursor.get(), Ok(&"a"));
//! cursor.move_next().unwrap();
//! assert_eq!(cursor.get(), Ok(&"b"));
//!
//! let end = list.cursor_end();
//! assert_eq!(end.get(), Err(Error::OutOfRange));
//! assert_eq!(end.backward(1).unwrap().get(), Ok(&"c"));
//! ```

use core::fmt;

use crate::sequence::signed;
use crate::{Result, Sequence};

/// Read-only position handle bound to a container.
pub struct Cursor<'a, S: Sequence> {
    seq: &'a S,
    position: S::Position,
}

impl<'a, S: Sequence> Cursor<'a, S> {
    #[inline]
    pub(crate) fn new(seq: &'a S, position: S::Position) -> Self {
        Self { seq, position }
    }

    /// Returns the underlying position handle.
    #[inline]
    pub fn position(&self) -> S::Position {
        self.position
    }

    /// Returns `true` if the cursor sits on the end marker.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.position == self.seq.end()
    }

    /// Dereferences the cursor.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) on the end marker.
    #[inline]
    pub fn get(&self) -> Result<&'a S::Item> {
        self.seq.get(self.position)
    }

    /// Steps toward the end.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) if already at the end.
    /// The cursor does not move on error.
    #[inline]
    pub fn move_next(&mut self) -> Result<()> {
        self.position = self.seq.next_position(self.position)?;
        Ok(())
    }

    /// Steps toward the beginning.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) if already at
    /// `begin()`. The cursor does not move on error.
    #[inline]
    pub fn move_prev(&mut self) -> Result<()> {
        self.position = self.seq.prev_position(self.position)?;
        Ok(())
    }

    /// Returns a cursor `steps` positions toward the end.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) if that passes `end()`.
    #[inline]
    pub fn forward(&self, steps: usize) -> Result<Self> {
        let position = self.seq.offset(self.position, signed(steps, true)?)?;
        Ok(Self::new(self.seq, position))
    }

    /// Returns a cursor `steps` positions toward the beginning.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) if that passes
    /// `begin()`.
    #[inline]
    pub fn backward(&self, steps: usize) -> Result<Self> {
        let position = self.seq.offset(self.position, signed(steps, false)?)?;
        Ok(Self::new(self.seq, position))
    }
}

impl<S: Sequence> Clone for Cursor<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Sequence> Copy for Cursor<'_, S> {}

impl<S: Sequence> PartialEq for Cursor<'_, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<S: Sequence> Eq for Cursor<'_, S> {}

impl<S: Sequence> fmt::Debug for Cursor<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .finish()
    }
}

/// Exclusive position handle bound to a container.
///
/// ```
/// use nexus_linear::{Sequence, Vector};
///
/// let mut vec: Vector<u32> = [1, 2, 4].into();
/// let mut cursor = vec.cursor_mut(2);
///
/// cursor.insert_before(3).unwrap();
/// assert_eq!(cursor.get(), Ok(&4));
///
/// *cursor.get_mut().unwrap() = 40;
/// assert_eq!(vec.as_slice(), &[1, 2, 3, 40]);
/// ```
pub struct CursorMut<'a, S: Sequence> {
    seq: &'a mut S,
    position: S::Position,
}

impl<'a, S: Sequence> CursorMut<'a, S> {
    #[inline]
    pub(crate) fn new(seq: &'a mut S, position: S::Position) -> Self {
        Self { seq, position }
    }

    /// Returns the underlying position handle.
    #[inline]
    pub fn position(&self) -> S::Position {
        self.position
    }

    /// Returns `true` if the cursor sits on the end marker.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.position == self.seq.end()
    }

    /// Dereferences the cursor.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) on the end marker.
    #[inline]
    pub fn get(&self) -> Result<&S::Item> {
        self.seq.get(self.position)
    }

    /// Mutably dereferences the cursor.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) on the end marker.
    #[inline]
    pub fn get_mut(&mut self) -> Result<&mut S::Item> {
        self.seq.get_mut(self.position)
    }

    /// Steps toward the end.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) if already at the end.
    #[inline]
    pub fn move_next(&mut self) -> Result<()> {
        self.position = self.seq.next_position(self.position)?;
        Ok(())
    }

    /// Steps toward the beginning.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) if already at
    /// `begin()`.
    #[inline]
    pub fn move_prev(&mut self) -> Result<()> {
        self.position = self.seq.prev_position(self.position)?;
        Ok(())
    }

    /// Moves `delta` steps (negative moves toward the beginning).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) if the target lies
    /// outside `[begin, end]`. The cursor does not move on error.
    #[inline]
    pub fn seek(&mut self, delta: isize) -> Result<()> {
        self.position = self.seq.offset(self.position, delta)?;
        Ok(())
    }

    /// Inserts `item` before the current element. The cursor keeps pointing
    /// at the element it pointed at before the call.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`](crate::Error::InvalidPosition) if the
    /// cursor's position is no longer valid.
    pub fn insert_before(&mut self, item: S::Item) -> Result<()> {
        let inserted = self.seq.insert(self.position, item)?;
        self.position = self.seq.next_position(inserted)?;
        Ok(())
    }

    /// Removes the current element and moves to the one that followed it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`](crate::Error::EmptyContainer) on an empty
    /// container, [`Error::InvalidPosition`](crate::Error::InvalidPosition)
    /// on the end marker.
    pub fn remove_current(&mut self) -> Result<S::Item> {
        let (item, next) = self.seq.remove(self.position)?;
        self.position = next;
        Ok(item)
    }

    /// Reborrows as a read-only cursor at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, S> {
        Cursor::new(&*self.seq, self.position)
    }
}

impl<S: Sequence> fmt::Debug for CursorMut<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .finish()
    }
}
