use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

mod private {
    pub trait Sealed {}
}

/// Traversal direction of a [`Cursor`].
pub trait Direction: private::Sealed + Copy {
    /// Slot delta of a single `next` step.
    const STEP: isize;
}

/// Walks the buffer from the first slot towards the last.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Forward;

/// Walks the buffer from the last slot towards the first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reverse;

impl private::Sealed for Forward {}
impl private::Sealed for Reverse {}

impl Direction for Forward {
    const STEP: isize = 1;
}

impl Direction for Reverse {
    const STEP: isize = -1;
}

/// A position inside a [`DynamicArray`](crate::DynamicArray).
///
/// Cursors do not borrow the array. They are dereferenced through the array
/// (`get_at` / `get_at_mut`), which decides between shared and exclusive access and checks the
/// slot against the live length, so a cursor left stale by growth or truncation yields `None`
/// instead of reading freed memory. `rend` sits one slot before the buffer, hence the signed slot.
pub struct Cursor<D: Direction> {
    slot: isize,
    _direction: PhantomData<D>,
}

impl<D: Direction> Cursor<D> {
    #[inline]
    pub(crate) fn at_slot(slot: isize) -> Self {
        Self {
            slot,
            _direction: PhantomData,
        }
    }

    /// Underlying buffer slot. Ordering between cursors compares this value.
    #[inline]
    pub fn slot(self) -> isize {
        self.slot
    }

    /// Buffer index of the referenced element, `None` for the slot before the buffer.
    #[inline]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.slot).ok()
    }

    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(self) -> Self {
        self + 1
    }

    #[inline]
    pub fn prev(self) -> Self {
        self - 1
    }

    /// Signed number of `next` steps from `self` to `other`.
    #[inline]
    pub fn distance_to(self, other: Self) -> isize {
        (other.slot - self.slot) * D::STEP
    }
}

impl<D: Direction> Clone for Cursor<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Direction> Copy for Cursor<D> {}

impl<D: Direction> fmt::Debug for Cursor<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("slot", &self.slot)
            .field("step", &D::STEP)
            .finish()
    }
}

impl<D: Direction> PartialEq for Cursor<D> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<D: Direction> Eq for Cursor<D> {}

impl<D: Direction> PartialOrd for Cursor<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Direction> Ord for Cursor<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.slot.cmp(&other.slot)
    }
}

impl<D: Direction> Hash for Cursor<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.hash(state);
    }
}

impl<D: Direction> Add<isize> for Cursor<D> {
    type Output = Self;

    #[inline]
    fn add(self, n: isize) -> Self {
        Self::at_slot(self.slot + n * D::STEP)
    }
}

impl<D: Direction> Sub<isize> for Cursor<D> {
    type Output = Self;

    #[inline]
    fn sub(self, n: isize) -> Self {
        Self::at_slot(self.slot - n * D::STEP)
    }
}

impl<D: Direction> AddAssign<isize> for Cursor<D> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        *self = *self + n;
    }
}

impl<D: Direction> SubAssign<isize> for Cursor<D> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        *self = *self - n;
    }
}

impl<D: Direction> Sub for Cursor<D> {
    type Output = isize;

    /// Number of `next` steps that lead from `rhs` to `self`.
    #[inline]
    fn sub(self, rhs: Self) -> isize {
        rhs.distance_to(self)
    }
}
