//! Generational slot arena with stable indices.
//!
//! Slots live in a single growable buffer. Removed slots are threaded onto a
//! free stack and reused by later inserts. Every removal bumps the slot's
//! generation, so an `(index, generation)` pair taken before the removal no
//! longer matches. Generations never wrap: a slot that has used up its
//! generations is left vacant for good.

use tracing::trace;

use crate::Index;

enum Entry<T, Idx> {
    Occupied(T),
    Vacant { next_free: Idx },
}

struct Slot<T, Idx> {
    generation: u32,
    entry: Entry<T, Idx>,
}

/// Growable slab storage addressed by `Idx`.
pub(crate) struct Arena<T, Idx: Index> {
    slots: Vec<Slot<T, Idx>>,
    /// Top of the free stack, or `Idx::NONE`.
    free_head: Idx,
    len: usize,
}

impl<T, Idx: Index> Arena<T, Idx> {
    /// Creates an arena with room for `capacity` values before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= Idx::SLOTS,
            "capacity exceeds index type maximum"
        );
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: Idx::NONE,
            len: 0,
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of slots the arena can hold without reallocating.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Inserts a value, returning its index and current generation.
    ///
    /// # Panics
    ///
    /// Panics if every non-sentinel value of `Idx` is already in use.
    pub(crate) fn insert(&mut self, value: T) -> (Idx, u32) {
        if self.free_head.is_some() {
            let idx = self.free_head;
            let slot = &mut self.slots[idx.slot()];
            match slot.entry {
                Entry::Vacant { next_free } => self.free_head = next_free,
                Entry::Occupied(_) => unreachable!("free stack points at occupied slot"),
            }
            slot.entry = Entry::Occupied(value);
            self.len += 1;
            return (idx, slot.generation);
        }

        let raw = self.slots.len();
        let Some(idx) = Idx::try_from_slot(raw) else {
            panic!("arena exhausted index type");
        };

        if raw == self.slots.capacity() {
            trace!(len = raw, capacity = self.slots.capacity(), "arena growing");
        }

        self.slots.push(Slot {
            generation: 0,
            entry: Entry::Occupied(value),
        });
        self.len += 1;
        (idx, 0)
    }

    /// Removes and returns the value at `idx`, if occupied.
    pub(crate) fn remove(&mut self, idx: Idx) -> Option<T> {
        let slot = self.slots.get_mut(idx.slot())?;
        if !matches!(slot.entry, Entry::Occupied(_)) {
            return None;
        }

        // A slot whose generation reaches `u32::MAX` is retired: it stays
        // vacant and off the free stack, so no old handle can match it again.
        slot.generation += 1;
        let retired = slot.generation == u32::MAX;
        let next_free = if retired { Idx::NONE } else { self.free_head };
        let entry = core::mem::replace(&mut slot.entry, Entry::Vacant { next_free });
        if retired {
            trace!(slot = idx.slot(), "arena slot retired");
        } else {
            self.free_head = idx;
        }
        self.len -= 1;

        match entry {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant { .. } => None,
        }
    }

    /// Returns a reference to the value at `idx`, if occupied.
    #[inline]
    pub(crate) fn get(&self, idx: Idx) -> Option<&T> {
        match self.slots.get(idx.slot()) {
            Some(Slot {
                entry: Entry::Occupied(value),
                ..
            }) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value at `idx`, if occupied.
    #[inline]
    pub(crate) fn get_mut(&mut self, idx: Idx) -> Option<&mut T> {
        match self.slots.get_mut(idx.slot()) {
            Some(Slot {
                entry: Entry::Occupied(value),
                ..
            }) => Some(value),
            _ => None,
        }
    }

    /// Returns the generation of the occupied slot at `idx`.
    #[inline]
    pub(crate) fn generation(&self, idx: Idx) -> Option<u32> {
        match self.slots.get(idx.slot()) {
            Some(Slot {
                generation,
                entry: Entry::Occupied(_),
            }) => Some(*generation),
            _ => None,
        }
    }

    /// Returns `true` if `idx` is occupied and still at `generation`.
    #[inline]
    pub(crate) fn contains(&self, idx: Idx, generation: u32) -> bool {
        self.generation(idx) == Some(generation)
    }
}

impl<T, Idx: Index> core::ops::Index<Idx> for Arena<T, Idx> {
    type Output = T;

    #[inline]
    fn index(&self, idx: Idx) -> &T {
        self.get(idx).expect("vacant arena slot")
    }
}

impl<T, Idx: Index> core::ops::IndexMut<Idx> for Arena<T, Idx> {
    #[inline]
    fn index_mut(&mut self, idx: Idx) -> &mut T {
        self.get_mut(idx).expect("vacant arena slot")
    }
}
