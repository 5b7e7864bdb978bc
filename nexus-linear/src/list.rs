//! Doubly-linked list with permanent sentinel nodes.
//!
//! Nodes live in an internal generational arena and link to each other by
//! index. Two sentinel nodes bracket the chain: the head sentinel sits
//! before the first element and the tail sentinel is the `end()` marker.
//! Both are created with the list and never removed, so every element node
//! always has a live `prev` and `next`.
//!
//! ```text
//!  HEAD <-> a <-> b <-> c <-> TAIL
//!  (0)                        (1) = end()
//! ```
//!
//! # Position Stability
//!
//! A [`ListPosition`] names a node, not an offset. Inserting or erasing
//! other elements never invalidates it. Erasing its own node does: the
//! arena slot's generation changes and every later use returns
//! [`Error::InvalidPosition`]. A slot is retired instead of reused once its
//! generation counter is exhausted, so a stale handle never matches again.
//!
//! ```
//! use nexus_linear::{Error, LinkedList};
//!
//! let mut list: LinkedList<&str> = LinkedList::new();
//! let a = list.append("a");
//! let b = list.append("b");
//! list.prepend("c");
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["c", "a", "b"]);
//!
//! // Removing `a` leaves `b` addressable.
//! assert_eq!(list.erase(a), Ok("a"));
//! assert_eq!(list.get(b), Ok(&"b"));
//! assert_eq!(list.get(a), Err(Error::InvalidPosition));
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::arena::Arena;
use crate::{Error, Index, Result, Sequence};

/// Slot number of the head sentinel.
const HEAD: usize = 0;
/// Slot number of the tail sentinel.
const TAIL: usize = 1;

enum Payload<T> {
    Sentinel,
    Value(T),
}

struct Node<T, Idx> {
    payload: Payload<T>,
    prev: Idx,
    next: Idx,
}

/// Position handle into a [`LinkedList`].
///
/// Compares by node identity. Obtained from [`LinkedList::begin`],
/// [`LinkedList::end`], the insertion methods, or navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListPosition<Idx: Index = u32> {
    index: Idx,
    generation: u32,
}

/// A doubly-linked list that owns its nodes.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `Idx`: Arena index type (default `u32`). Bounds the number of elements
///   the list can hold to `Idx::MAX - 2`, since the two sentinels
///   occupy slots and `Idx::MAX` is reserved.
///
/// # Complexity
///
/// | Operation | Cost |
/// |-----------|------|
/// | `append` / `prepend` / `pop_first` / `pop_last` | O(1) |
/// | `insert` / `erase` at a known position | O(1) |
/// | `erase_range` | O(k) in the range length |
/// | `offset` by `k` | O(k) |
pub struct LinkedList<T, Idx: Index = u32> {
    nodes: Arena<Node<T, Idx>, Idx>,
    len: usize,
}

impl<T, Idx: Index> LinkedList<T, Idx> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// node arena reallocates.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` plus the two sentinels exceeds the index type.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes: Arena<Node<T, Idx>, Idx> = Arena::with_capacity(capacity.saturating_add(2));
        let (head, _) = nodes.insert(Node {
            payload: Payload::Sentinel,
            prev: Idx::NONE,
            next: Idx::from_slot(TAIL),
        });
        let (tail, _) = nodes.insert(Node {
            payload: Payload::Sentinel,
            prev: Idx::from_slot(HEAD),
            next: Idx::NONE,
        });
        debug_assert_eq!(head.slot(), HEAD);
        debug_assert_eq!(tail.slot(), TAIL);

        Self { nodes, len: 0 }
    }

    #[inline]
    fn head() -> Idx {
        Idx::from_slot(HEAD)
    }

    #[inline]
    fn tail() -> Idx {
        Idx::from_slot(TAIL)
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

    /// Returns the number of elements the list can hold before the node
    /// arena reallocates.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity().saturating_sub(2)
    }

    // ========================================================================
    // Node access
    // ========================================================================

    #[inline]
    fn node(&self, idx: Idx) -> &Node<T, Idx> {
        &self.nodes[idx]
    }

    #[inline]
    fn node_mut(&mut self, idx: Idx) -> &mut Node<T, Idx> {
        &mut self.nodes[idx]
    }

    /// Handle for a node currently linked into the chain.
    #[inline]
    fn position_of(&self, index: Idx) -> ListPosition<Idx> {
        let generation = self.nodes.generation(index);
        debug_assert!(generation.is_some(), "linked node missing from arena");
        ListPosition {
            index,
            generation: generation.unwrap_or_default(),
        }
    }

    /// Rejects stale handles and the head sentinel, which is never exposed.
    #[inline]
    fn validate(&self, position: ListPosition<Idx>) -> Result<Idx> {
        if position.index.slot() == HEAD
            || !self.nodes.contains(position.index, position.generation)
        {
            return Err(Error::InvalidPosition);
        }
        Ok(position.index)
    }

    // ========================================================================
    // Splicing
    // ========================================================================

    /// Links a new node directly before `at`.
    fn splice_before(&mut self, at: Idx, value: T) -> ListPosition<Idx> {
        let prev = self.node(at).prev;
        let (idx, generation) = self.nodes.insert(Node {
            payload: Payload::Value(value),
            prev,
            next: at,
        });

        self.node_mut(prev).next = idx;
        self.node_mut(at).prev = idx;
        self.len += 1;

        ListPosition {
            index: idx,
            generation,
        }
    }

    /// Unlinks and frees an element node. `idx` must not be a sentinel.
    fn unlink(&mut self, idx: Idx) -> T {
        let (prev, next) = {
            let node = self.node(idx);
            (node.prev, node.next)
        };

        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
        self.len -= 1;
        debug_assert_eq!(self.nodes.len(), self.len + 3);

        match self.nodes.remove(idx).map(|node| node.payload) {
            Some(Payload::Value(value)) => value,
            _ => unreachable!("unlinked a sentinel or vacant node"),
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Appends an element, returning its position. O(1).
    ///
    /// Never invalidates existing positions.
    #[inline]
    pub fn append(&mut self, item: T) -> ListPosition<Idx> {
        self.splice_before(Self::tail(), item)
    }

    /// Prepends an element, returning its position. O(1).
    ///
    /// Never invalidates existing positions.
    #[inline]
    pub fn prepend(&mut self, item: T) -> ListPosition<Idx> {
        let first = self.node(Self::head()).next;
        self.splice_before(first, item)
    }

    /// Inserts `item` directly before `position`. O(1).
    ///
    /// Inserting before `begin()` prepends, before `end()` appends.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `position` was erased.
    pub fn insert(&mut self, position: ListPosition<Idx>, item: T) -> Result<ListPosition<Idx>> {
        let at = self.validate(position)?;
        Ok(self.splice_before(at, item))
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the list is empty.
    pub fn pop_first(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let first = self.node(Self::head()).next;
        Ok(self.unlink(first))
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the list is empty.
    pub fn pop_last(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let last = self.node(Self::tail()).prev;
        Ok(self.unlink(last))
    }

    /// Removes the element at `position`, returning it and the position of
    /// its successor.
    ///
    /// Only `position` itself is invalidated.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the list is empty,
    /// [`Error::InvalidPosition`] if `position` is `end()` or was erased.
    pub fn remove(&mut self, position: ListPosition<Idx>) -> Result<(T, ListPosition<Idx>)> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let idx = self.validate(position)?;
        if idx.slot() == TAIL {
            return Err(Error::InvalidPosition);
        }

        let next = self.node(idx).next;
        let value = self.unlink(idx);
        Ok((value, self.position_of(next)))
    }

    /// Removes and returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Same as [`LinkedList::remove`].
    #[inline]
    pub fn erase(&mut self, position: ListPosition<Idx>) -> Result<T> {
        self.remove(position).map(|(value, _)| value)
    }

    /// Removes the half-open range `[first, last)`.
    ///
    /// The range is walked once to confirm `last` is reachable from `first`,
    /// then erased node by node. The links stay consistent after every
    /// single unlink.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] for a non-empty range on an empty list,
    /// [`Error::InvalidPosition`] if either bound was erased or `last` does
    /// not follow `first`. Nothing is removed on error.
    pub fn erase_range(&mut self, first: ListPosition<Idx>, last: ListPosition<Idx>) -> Result<()> {
        if first == last {
            return Ok(());
        }
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let start = self.validate(first)?;
        let stop = self.validate(last)?;

        let mut count = 0usize;
        let mut cursor = start;
        while cursor != stop {
            if cursor.slot() == TAIL {
                return Err(Error::InvalidPosition);
            }
            cursor = self.node(cursor).next;
            count += 1;
        }

        let mut cursor = start;
        for _ in 0..count {
            let next = self.node(cursor).next;
            self.unlink(cursor);
            cursor = next;
        }
        Ok(())
    }

    /// Removes every element. Capacity is kept.
    pub fn clear(&mut self) {
        while self.pop_first().is_ok() {}
    }

    // ========================================================================
    // Positions
    // ========================================================================

    /// Position of the first element, or `end()` when empty.
    #[inline]
    pub fn begin(&self) -> ListPosition<Idx> {
        self.position_of(self.node(Self::head()).next)
    }

    /// Position of the tail sentinel.
    #[inline]
    pub fn end(&self) -> ListPosition<Idx> {
        self.position_of(Self::tail())
    }

    /// Dereferences `position`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] at `end()`, [`Error::InvalidPosition`] if the
    /// node was erased.
    pub fn get(&self, position: ListPosition<Idx>) -> Result<&T> {
        let idx = self.validate(position)?;
        match &self.node(idx).payload {
            Payload::Value(value) => Ok(value),
            Payload::Sentinel => Err(Error::OutOfRange),
        }
    }

    /// Mutably dereferences `position`.
    ///
    /// # Errors
    ///
    /// Same as [`LinkedList::get`].
    pub fn get_mut(&mut self, position: ListPosition<Idx>) -> Result<&mut T> {
        let idx = self.validate(position)?;
        match &mut self.node_mut(idx).payload {
            Payload::Value(value) => Ok(value),
            Payload::Sentinel => Err(Error::OutOfRange),
        }
    }

    /// Position of the node after `position`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] at `end()`.
    pub fn next_position(&self, position: ListPosition<Idx>) -> Result<ListPosition<Idx>> {
        let idx = self.validate(position)?;
        let next = self.node(idx).next;
        if next.is_none() {
            return Err(Error::OutOfRange);
        }
        Ok(self.position_of(next))
    }

    /// Position of the node before `position`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] at `begin()`.
    pub fn prev_position(&self, position: ListPosition<Idx>) -> Result<ListPosition<Idx>> {
        let idx = self.validate(position)?;
        let prev = self.node(idx).prev;
        if prev.is_none() || prev.slot() == HEAD {
            return Err(Error::OutOfRange);
        }
        Ok(self.position_of(prev))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(self.begin()).ok()
    }

    /// Returns the first element mutably.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let first = self.begin();
        self.get_mut(first).ok()
    }

    /// Returns the last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        match &self.node(self.node(Self::tail()).prev).payload {
            Payload::Value(value) => Some(value),
            Payload::Sentinel => None,
        }
    }

    /// Returns the last element mutably.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.node(Self::tail()).prev;
        match &mut self.node_mut(last).payload {
            Payload::Value(value) => Some(value),
            Payload::Sentinel => None,
        }
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, Idx> {
        Iter {
            nodes: &self.nodes,
            front: self.node(Self::head()).next,
            back: self.node(Self::tail()).prev,
            remaining: self.len,
        }
    }

    /// Returns an iterator over mutable references to elements, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, Idx> {
        let front = self.node(Self::head()).next;
        let back = self.node(Self::tail()).prev;
        IterMut {
            remaining: self.len,
            nodes: &mut self.nodes,
            front,
            back,
        }
    }

    /// Removes every element, yielding them front to back.
    ///
    /// Elements not consumed are dropped with the iterator.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T, Idx> {
        Drain { list: self }
    }
}

impl<T, Idx: Index> Default for LinkedList<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Idx: Index> Sequence for LinkedList<T, Idx> {
    type Item = T;
    type Position = ListPosition<Idx>;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn append(&mut self, item: T) {
        LinkedList::append(self, item);
    }

    #[inline]
    fn prepend(&mut self, item: T) {
        LinkedList::prepend(self, item);
    }

    #[inline]
    fn insert(&mut self, position: Self::Position, item: T) -> Result<Self::Position> {
        LinkedList::insert(self, position, item)
    }

    #[inline]
    fn pop_first(&mut self) -> Result<T> {
        LinkedList::pop_first(self)
    }

    #[inline]
    fn pop_last(&mut self) -> Result<T> {
        LinkedList::pop_last(self)
    }

    #[inline]
    fn remove(&mut self, position: Self::Position) -> Result<(T, Self::Position)> {
        LinkedList::remove(self, position)
    }

    #[inline]
    fn erase_range(&mut self, first: Self::Position, last: Self::Position) -> Result<()> {
        LinkedList::erase_range(self, first, last)
    }

    #[inline]
    fn begin(&self) -> Self::Position {
        LinkedList::begin(self)
    }

    #[inline]
    fn end(&self) -> Self::Position {
        LinkedList::end(self)
    }

    #[inline]
    fn get(&self, position: Self::Position) -> Result<&T> {
        LinkedList::get(self, position)
    }

    #[inline]
    fn get_mut(&mut self, position: Self::Position) -> Result<&mut T> {
        LinkedList::get_mut(self, position)
    }

    #[inline]
    fn next_position(&self, position: Self::Position) -> Result<Self::Position> {
        LinkedList::next_position(self, position)
    }

    #[inline]
    fn prev_position(&self, position: Self::Position) -> Result<Self::Position> {
        LinkedList::prev_position(self, position)
    }
}

// =============================================================================
// Standard traits
// =============================================================================

impl<T: Clone, Idx: Index> Clone for LinkedList<T, Idx> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len);
        list.extend(self.iter().cloned());
        list
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T: fmt::Debug, Idx: Index> fmt::Debug for LinkedList<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, Idx: Index> PartialEq for LinkedList<T, Idx> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, Idx: Index> Eq for LinkedList<T, Idx> {}

impl<T: Hash, Idx: Index> Hash for LinkedList<T, Idx> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T, Idx: Index> Extend<T> for LinkedList<T, Idx> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T, Idx: Index> FromIterator<T> for LinkedList<T, Idx> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, Idx: Index, const N: usize> From<[T; N]> for LinkedList<T, Idx> {
    fn from(items: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        list.extend(items);
        list
    }
}

impl<'a, T, Idx: Index> IntoIterator for &'a LinkedList<T, Idx> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, Idx: Index> IntoIterator for &'a mut LinkedList<T, Idx> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, Idx: Index> IntoIterator for LinkedList<T, Idx> {
    type Item = T;
    type IntoIter = IntoIter<T, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements.
pub struct Iter<'a, T, Idx: Index> {
    nodes: &'a Arena<Node<T, Idx>, Idx>,
    front: Idx,
    back: Idx,
    remaining: usize,
}

impl<'a, T, Idx: Index> Iterator for Iter<'a, T, Idx> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        match &node.payload {
            Payload::Value(value) => Some(value),
            Payload::Sentinel => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, Idx: Index> DoubleEndedIterator for Iter<'_, T, Idx> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        match &node.payload {
            Payload::Value(value) => Some(value),
            Payload::Sentinel => None,
        }
    }
}

impl<T, Idx: Index> ExactSizeIterator for Iter<'_, T, Idx> {}

impl<T, Idx: Index> FusedIterator for Iter<'_, T, Idx> {}

impl<T, Idx: Index> Clone for Iter<'_, T, Idx> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Iterator over mutable references to list elements.
pub struct IterMut<'a, T, Idx: Index> {
    nodes: &'a mut Arena<Node<T, Idx>, Idx>,
    front: Idx,
    back: Idx,
    remaining: usize,
}

impl<'a, T, Idx: Index> Iterator for IterMut<'a, T, Idx> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &mut self.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        match &mut node.payload {
            // Safety: `remaining` stops the walk before front and back cross,
            // so each node is handed out at most once.
            Payload::Value(value) => Some(unsafe { &mut *(value as *mut T) }),
            Payload::Sentinel => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, Idx: Index> DoubleEndedIterator for IterMut<'_, T, Idx> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &mut self.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        match &mut node.payload {
            // Safety: see `next`.
            Payload::Value(value) => Some(unsafe { &mut *(value as *mut T) }),
            Payload::Sentinel => None,
        }
    }
}

impl<T, Idx: Index> ExactSizeIterator for IterMut<'_, T, Idx> {}

impl<T, Idx: Index> FusedIterator for IterMut<'_, T, Idx> {}

/// Owning iterator over list elements.
pub struct IntoIter<T, Idx: Index = u32> {
    list: LinkedList<T, Idx>,
}

impl<T, Idx: Index> Iterator for IntoIter<T, Idx> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_first().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, Idx: Index> DoubleEndedIterator for IntoIter<T, Idx> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_last().ok()
    }
}

impl<T, Idx: Index> ExactSizeIterator for IntoIter<T, Idx> {}

impl<T, Idx: Index> FusedIterator for IntoIter<T, Idx> {}

/// Draining iterator returned by [`LinkedList::drain`].
pub struct Drain<'a, T, Idx: Index> {
    list: &'a mut LinkedList<T, Idx>,
}

impl<T, Idx: Index> Iterator for Drain<'_, T, Idx> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_first().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, Idx: Index> DoubleEndedIterator for Drain<'_, T, Idx> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_last().ok()
    }
}

impl<T, Idx: Index> ExactSizeIterator for Drain<'_, T, Idx> {}

impl<T, Idx: Index> Drop for Drain<'_, T, Idx> {
    fn drop(&mut self) {
        self.list.clear();
    }
}


#[cfg(test)]
mod bench_list {
    use super::*;
    use crate::latency::{histogram, measure, print_histogram};

    const WARMUP: usize = 10_000;
    const ITERATIONS: usize = 100_000;

    #[test]
    #[ignore]
    fn bench_list_append() {
        let mut list: LinkedList<u64> = LinkedList::with_capacity(ITERATIONS + WARMUP);
        let mut hist = histogram();

        for i in 0..WARMUP {
            list.append(i as u64);
            let _ = list.pop_last();
        }

        for i in 0..ITERATIONS {
            hist.record(measure(|| list.append(i as u64))).unwrap();
            let _ = list.pop_last();
        }

        print_histogram("append", &hist);
    }

    #[test]
    #[ignore]
    fn bench_list_erase_begin() {
        let mut list: LinkedList<u64> = LinkedList::with_capacity(ITERATIONS);
        let mut hist = histogram();

        for i in 0..ITERATIONS {
            list.append(i as u64);
        }

        for _ in 0..ITERATIONS {
            let first = list.begin();
            hist.record(measure(|| list.erase(first))).unwrap();
        }

        print_histogram("erase(begin)", &hist);
    }
}
