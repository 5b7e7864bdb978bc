//! Contiguous growable vector with checked positions.
//!
//! Elements occupy `[0, len)` of a single boxed buffer of `capacity` slots.
//! The buffer is replaced, never resized in place, when an insertion would
//! overflow it:
//!
//! ```text
//! new capacity = 2 * (len after the insertion)
//! ```
//!
//! Growth is sized from the post-insertion length rather than the current
//! capacity, so capacity thresholds are a pure function of the insertion
//! history. Capacity never shrinks on removal.
//!
//! # Positions
//!
//! A vector position is an element offset in `[0, len]`, where `len` is the
//! end marker. Offsets are re-checked against the live length on every use.
//! Any insertion or removal shifts which value an offset names; a
//! reallocation does not otherwise invalidate offsets.
//!
//! ```
//! use nexus_linear::{Error, Vector};
//!
//! let mut vec: Vector<&str> = Vector::new();
//! assert_eq!(vec.capacity(), 10);
//!
//! for _ in 0..11 {
//!     vec.prepend("x");
//! }
//! assert_eq!(vec.len(), 11);
//! assert_eq!(vec.capacity(), 22);
//!
//! assert_eq!(vec.get(vec.end()), Err(Error::OutOfRange));
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::mem::{ManuallyDrop, MaybeUninit};
use core::ops::{Deref, DerefMut};
use core::ptr;

use tracing::trace;

use crate::{Error, Result, Sequence};

/// Initial capacity of [`Vector::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A contiguous growable array.
///
/// # Complexity
///
/// | Operation | Cost |
/// |-----------|------|
/// | `append` | O(1) amortized |
/// | `pop_last`, erasing the last element | O(1) |
/// | `prepend` / `insert` / `pop_first` / `erase` | O(n) |
/// | `erase_range` | O(n), one shift |
/// | `offset` | O(1) |
pub struct Vector<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
}

fn allocate<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    let mut buf = Vec::with_capacity(capacity);
    buf.resize_with(capacity, MaybeUninit::uninit);
    buf.into_boxed_slice()
}

impl<T> Vector<T> {
    /// Creates an empty vector with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty vector with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: allocate(capacity),
            len: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the current buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: slots [0, len) are initialized.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: slots [0, len) are initialized.
        unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    #[inline]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast::<T>()
    }

    // ========================================================================
    // Storage management
    // ========================================================================

    /// Returns `true` if one more element does not fit in the buffer.
    #[inline]
    fn needs_growth(&self) -> bool {
        self.len + 1 > self.capacity()
    }

    /// Moves every element into a buffer sized for `len + 1`, leaving slot
    /// `gap` free for the caller to fill. Elements at or after `gap` land
    /// one slot further toward the tail.
    fn grow_with_gap(&mut self, gap: usize) {
        debug_assert!(gap <= self.len);
        let new_capacity = 2 * (self.len + 1);
        trace!(
            len = self.len,
            old_capacity = self.capacity(),
            new_capacity,
            "vector reallocating"
        );

        let mut next = allocate::<T>(new_capacity);
        let src = self.as_mut_ptr();
        let dst = next.as_mut_ptr().cast::<T>();
        // Safety: both buffers are distinct, `dst` holds len + 1 slots, and
        // the moved-from slots in `src` are treated as uninitialized after
        // the swap because `MaybeUninit` never drops.
        unsafe {
            ptr::copy_nonoverlapping(src, dst, gap);
            ptr::copy_nonoverlapping(src.add(gap), dst.add(gap + 1), self.len - gap);
        }
        self.buf = next;
    }

    /// Opens slot `at` by moving `[at, len)` one slot toward the tail,
    /// reallocating first if the buffer is full.
    fn open_gap(&mut self, at: usize) {
        if self.needs_growth() {
            self.grow_with_gap(at);
        } else {
            let base = self.as_mut_ptr();
            // Safety: len < capacity, so [at + 1, len + 1) is in bounds.
            unsafe { ptr::copy(base.add(at), base.add(at + 1), self.len - at) };
        }
    }

    /// Writes `item` into slot `at` opened by `open_gap`.
    #[inline]
    fn fill_gap(&mut self, at: usize, item: T) {
        self.buf[at] = MaybeUninit::new(item);
        self.len += 1;
    }

    /// Moves out the element at `at` and closes the hole.
    fn take(&mut self, at: usize) -> T {
        debug_assert!(at < self.len);
        let base = self.as_mut_ptr();
        // Safety: `at` is initialized; the tail shift stays within [0, len).
        unsafe {
            let item = ptr::read(base.add(at));
            ptr::copy(base.add(at + 1), base.add(at), self.len - at - 1);
            self.len -= 1;
            item
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Appends an element. O(1) amortized.
    ///
    /// Reallocates when the buffer is full.
    pub fn append(&mut self, item: T) {
        if self.needs_growth() {
            self.grow_with_gap(self.len);
        }
        let at = self.len;
        self.fill_gap(at, item);
    }

    /// Prepends an element, shifting every existing element one slot. O(n).
    pub fn prepend(&mut self, item: T) {
        self.open_gap(0);
        self.fill_gap(0, item);
    }

    /// Inserts `item` before `position`, returning the position of the new
    /// element. Inserting at `end()` appends.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `position > len()`.
    pub fn insert(&mut self, position: usize, item: T) -> Result<usize> {
        if position > self.len {
            return Err(Error::InvalidPosition);
        }
        if position == self.len {
            self.append(item);
        } else {
            self.open_gap(position);
            self.fill_gap(position, item);
        }
        Ok(position)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes and returns the first element, shifting the rest. O(n).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the vector is empty.
    pub fn pop_first(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        Ok(self.take(0))
    }

    /// Removes and returns the last element. O(1).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the vector is empty.
    pub fn pop_last(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.len -= 1;
        // Safety: the slot at the old last index is initialized and is no
        // longer counted by `len`.
        Ok(unsafe { self.buf[self.len].assume_init_read() })
    }

    /// Removes the element at `position`, returning it and the position of
    /// its successor (the same offset, now holding the next element).
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the vector is empty,
    /// [`Error::InvalidPosition`] if `position >= len()`.
    pub fn remove(&mut self, position: usize) -> Result<(T, usize)> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        if position >= self.len {
            return Err(Error::InvalidPosition);
        }
        if position + 1 == self.len {
            return self.pop_last().map(|item| (item, position));
        }
        Ok((self.take(position), position))
    }

    /// Removes and returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::remove`].
    #[inline]
    pub fn erase(&mut self, position: usize) -> Result<T> {
        self.remove(position).map(|(item, _)| item)
    }

    /// Removes `[first, last)` with a single shift of the remaining tail.
    ///
    /// A no-op when `first == last`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] for a non-empty range on an empty vector,
    /// otherwise [`Error::InvalidPosition`] unless `first <= last <= len()`.
    pub fn erase_range(&mut self, first: usize, last: usize) -> Result<()> {
        if first == last {
            return Ok(());
        }
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        if first > last || last > self.len {
            return Err(Error::InvalidPosition);
        }

        let tail = self.len - last;
        let base = self.as_mut_ptr();
        // A panicking destructor leaks the tail instead of double-dropping.
        self.len = first;
        // Safety: [first, last) is initialized and dropped exactly once, then
        // [last, old len) moves down over it.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(first), last - first));
            ptr::copy(base.add(last), base.add(first), tail);
        }
        self.len = first + tail;
        Ok(())
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        // Safety: [0, len) was initialized and is no longer counted.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), len)) }
    }

    // ========================================================================
    // Positions
    // ========================================================================

    /// Position of the first element (always `0`).
    #[inline]
    pub const fn begin(&self) -> usize {
        0
    }

    /// One-past-last position (`len()`).
    #[inline]
    pub const fn end(&self) -> usize {
        self.len
    }

    /// Dereferences `position`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `position >= len()`.
    #[inline]
    pub fn get(&self, position: usize) -> Result<&T> {
        self.as_slice().get(position).ok_or(Error::OutOfRange)
    }

    /// Mutably dereferences `position`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `position >= len()`.
    #[inline]
    pub fn get_mut(&mut self, position: usize) -> Result<&mut T> {
        self.as_mut_slice()
            .get_mut(position)
            .ok_or(Error::OutOfRange)
    }

    /// `position + 1`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `position >= len()`.
    #[inline]
    pub fn next_position(&self, position: usize) -> Result<usize> {
        if position >= self.len {
            return Err(Error::OutOfRange);
        }
        Ok(position + 1)
    }

    /// `position - 1`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `position == 0` or `position > len()`.
    #[inline]
    pub fn prev_position(&self, position: usize) -> Result<usize> {
        if position == 0 || position > self.len {
            return Err(Error::OutOfRange);
        }
        Ok(position - 1)
    }

    /// `position + delta`, in O(1).
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if the result lies outside `[0, len()]`.
    #[inline]
    pub fn offset(&self, position: usize, delta: isize) -> Result<usize> {
        if position > self.len {
            return Err(Error::OutOfRange);
        }
        position
            .checked_add_signed(delta)
            .filter(|&target| target <= self.len)
            .ok_or(Error::OutOfRange)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the first element mutably.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the last element mutably.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns an iterator over references to elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Safety: [0, len) is initialized; the boxed buffer frees itself.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Sequence for Vector<T> {
    type Item = T;
    type Position = usize;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn append(&mut self, item: T) {
        Vector::append(self, item);
    }

    #[inline]
    fn prepend(&mut self, item: T) {
        Vector::prepend(self, item);
    }

    #[inline]
    fn insert(&mut self, position: usize, item: T) -> Result<usize> {
        Vector::insert(self, position, item)
    }

    #[inline]
    fn pop_first(&mut self) -> Result<T> {
        Vector::pop_first(self)
    }

    #[inline]
    fn pop_last(&mut self) -> Result<T> {
        Vector::pop_last(self)
    }

    #[inline]
    fn remove(&mut self, position: usize) -> Result<(T, usize)> {
        Vector::remove(self, position)
    }

    #[inline]
    fn erase_range(&mut self, first: usize, last: usize) -> Result<()> {
        Vector::erase_range(self, first, last)
    }

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, position: usize) -> Result<&T> {
        Vector::get(self, position)
    }

    #[inline]
    fn get_mut(&mut self, position: usize) -> Result<&mut T> {
        Vector::get_mut(self, position)
    }

    #[inline]
    fn next_position(&self, position: usize) -> Result<usize> {
        Vector::next_position(self, position)
    }

    #[inline]
    fn prev_position(&self, position: usize) -> Result<usize> {
        Vector::prev_position(self, position)
    }

    #[inline]
    fn offset(&self, position: usize, delta: isize) -> Result<usize> {
        Vector::offset(self, position, delta)
    }
}

// =============================================================================
// Standard traits
// =============================================================================

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::new();
        vec.extend(self.iter().cloned());
        vec
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let vec = ManuallyDrop::new(self);
        let len = vec.len;
        // Safety: `vec` is never dropped, so ownership of the buffer and its
        // `len` initialized slots moves into the iterator exactly once.
        let buf = unsafe { ptr::read(&vec.buf) };
        IntoIter {
            buf,
            front: 0,
            back: len,
        }
    }
}

/// Owning iterator over vector elements.
pub struct IntoIter<T> {
    buf: Box<[MaybeUninit<T>]>,
    /// Slots [front, back) are still initialized.
    front: usize,
    back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let at = self.front;
        self.front += 1;
        // Safety: `at` was in [front, back) and is now excluded.
        Some(unsafe { self.buf[at].assume_init_read() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // Safety: the old `back - 1` was in [front, back) and is now excluded.
        Some(unsafe { self.buf[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[self.front..self.back] {
            // Safety: slots in [front, back) are initialized and never read again.
            unsafe { slot.assume_init_drop() };
        }
    }
}
