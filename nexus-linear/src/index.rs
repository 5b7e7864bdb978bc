//! Arena slot numbers and the link sentinel.
//!
//! The list links nodes by arena slot number. A link is stored as the
//! narrowest integer the caller picks, with `MAX` reserved to mean "no
//! link", so a `LinkedList<T, u16>` spends four bytes per node on links.
//!
//! The index type also bounds the arena: `SLOTS` values are addressable,
//! and inserting past that panics.

use core::fmt::Debug;
use core::hash::Hash;

/// An integer type usable as an arena slot number.
///
/// # Example
///
/// ```
/// use nexus_linear::Index;
///
/// assert_eq!(<u8 as Index>::SLOTS, 255);
/// assert_eq!(u8::try_from_slot(254), Some(254));
/// assert_eq!(u8::try_from_slot(255), None);
/// assert!(u8::NONE.is_none());
/// ```
pub trait Index: Copy + Eq + Debug + Hash {
    /// Reserved "no link" value.
    const NONE: Self;

    /// Number of slot numbers below `NONE`.
    const SLOTS: usize;

    /// Slot number as `usize`.
    fn slot(self) -> usize;

    /// Converts a slot number, or `None` if it does not fit below `NONE`.
    fn try_from_slot(slot: usize) -> Option<Self>;

    /// Converts a slot number already known to be below `SLOTS`.
    #[inline]
    fn from_slot(slot: usize) -> Self {
        debug_assert!(slot < Self::SLOTS, "slot {slot} exceeds index type");
        Self::try_from_slot(slot).unwrap_or(Self::NONE)
    }

    /// Returns `true` for the "no link" value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` for a real slot number.
    #[inline]
    fn is_some(self) -> bool {
        self != Self::NONE
    }
}

macro_rules! slot_index {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                const NONE: Self = <$ty>::MAX;

                const SLOTS: usize = if (<$ty>::MAX as u128) < usize::MAX as u128 {
                    <$ty>::MAX as usize
                } else {
                    usize::MAX
                };

                #[inline]
                fn slot(self) -> usize {
                    self as usize
                }

                #[inline]
                fn try_from_slot(slot: usize) -> Option<Self> {
                    <$ty>::try_from(slot).ok().filter(|&idx| idx != Self::NONE)
                }
            }
        )*
    };
}

slot_index!(u8, u16, u32, u64, usize);
