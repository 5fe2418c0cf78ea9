//! `DynamicArray<T>`, a growable contiguous sequence with explicit capacity tracking.
//!
//! Growth doubles the capacity (0 -> 1 -> 2 -> 4 ...) unless a bulk insertion needs more, then
//! the capacity grows to exactly fit. Shrinking operations only lower the length, the buffer is
//! released once, when the array is dropped.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

mod cursor;
mod raw;

pub use cursor::{Cursor, Direction, Forward, Reverse};

use crate::error::ArrayError;
use crate::range::Rev;
use raw::{handle_reserve, RawBuf};

/// Creates a [`DynamicArray`] with the same syntax as `vec!`.
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::array::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::array::DynamicArray::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::array::DynamicArray::from([$($x),+])
    };
}

/// Growable, contiguous, exclusively owned sequence of `T`.
///
/// Invariants: `len <= capacity`, the buffer pointer is non-null whenever `capacity > 0`, and the
/// array is the only owner of its buffer. Cloning produces an independent buffer sized to the
/// length, [`take`](Self::take) moves the buffer out and leaves an empty array behind.
pub struct DynamicArray<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates an empty array with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut array = Self::new();
        array.reserve(capacity);
        array
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        let mut array = Self::new();
        array.try_reserve(capacity)?;
        Ok(array)
    }

    /// Creates an array of `len` default values, allocating exactly `len` slots.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut array = Self::with_capacity(len);
        array.fill_to(len, T::default);
        array
    }

    pub fn try_with_len(len: usize) -> Result<Self, ArrayError>
    where
        T: Default,
    {
        let mut array = Self::try_with_capacity(len)?;
        array.fill_to(len, T::default);
        Ok(array)
    }

    /// Creates an array of `len` copies of `value`, allocating exactly `len` slots.
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(len);
        array.fill_to(len, || value.clone());
        array
    }

    pub fn try_from_elem(len: usize, value: T) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let mut array = Self::try_with_capacity(len)?;
        array.fill_to(len, || value.clone());
        Ok(array)
    }

    // --- Accessors ---

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw buffer address, null while no buffer is held.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        if self.capacity() == 0 {
            ptr::null()
        } else {
            self.buf.ptr()
        }
    }

    /// Raw buffer address, null while no buffer is held.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        if self.capacity() == 0 {
            ptr::null_mut()
        } else {
            self.buf.ptr()
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized, the pointer is dangling but aligned
        // when `len == 0`.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`, `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Checked access.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    // --- Growth ---

    /// Grows the capacity to exactly `capacity` if it is currently smaller.
    pub fn reserve(&mut self, capacity: usize) {
        handle_reserve(self.try_reserve(capacity));
    }

    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), ArrayError> {
        self.buf.try_grow_exact(self.len, capacity)
    }

    #[inline]
    fn grow_for(&mut self, additional: usize) {
        handle_reserve(self.buf.try_grow_amortized(self.len, additional));
    }

    pub fn push_back(&mut self, value: T) {
        self.grow_for(1);

        // SAFETY: `grow_for` made room for one more element.
        unsafe {
            ptr::write(self.buf.ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Appends all `values` in order. A single growth step covers the whole batch.
    pub fn push_back_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let count = values.len();
        self.grow_for(count);

        for value in values.take(count) {
            // SAFETY: room for `count` elements was made above, `take` stops there.
            unsafe {
                ptr::write(self.buf.ptr().add(self.len), value);
            }
            self.len += 1;
        }
    }

    /// Appends the value produced by `make` once room for it exists.
    pub fn emplace_back<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        self.grow_for(1);
        let value = make();

        // SAFETY: `grow_for` made room for one more element.
        unsafe {
            ptr::write(self.buf.ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Inserts `value` before every other element. Shifts the whole array.
    pub fn push_front(&mut self, value: T) {
        self.grow_for(1);

        // SAFETY: room for one more element exists, `ptr::copy` handles the overlap.
        unsafe {
            let base = self.buf.ptr();
            ptr::copy(base, base.add(1), self.len);
            ptr::write(base, value);
        }
        self.len += 1;
    }

    /// Inserts all `values` before every other element, keeping their order.
    pub fn push_front_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let count = values.len();
        if count == 0 {
            return;
        }

        self.grow_for(count);

        let old_len = self.len;
        // Leak rather than double drop should `values` panic while the gap is open.
        self.len = 0;

        let mut written = 0;

        // SAFETY: room for `count` more elements exists. The live elements are moved up by
        // `count` to open a gap at the front, which is filled from `values`. If the iterator
        // yields fewer than promised, the live elements are moved back down to close the gap.
        unsafe {
            let base = self.buf.ptr();
            ptr::copy(base, base.add(count), old_len);

            for value in values.take(count) {
                ptr::write(base.add(written), value);
                written += 1;
            }

            if written < count {
                ptr::copy(base.add(count), base.add(written), old_len);
            }
        }

        self.len = old_len + written;
    }

    /// Inserts the value produced by `make` before every other element once room for it exists.
    pub fn emplace_front<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        self.grow_for(1);
        let value = make();

        // SAFETY: see `push_front`.
        unsafe {
            let base = self.buf.ptr();
            ptr::copy(base, base.add(1), self.len);
            ptr::write(base, value);
        }
        self.len += 1;
    }

    // --- Shrinking ---

    /// Removes the last element. Does nothing on an empty array.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` is initialized and no longer counted as live.
        unsafe { Some(ptr::read(self.buf.ptr().add(self.len))) }
    }

    /// Removes the first element, shifting the rest down. Does nothing on an empty array.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: slot 0 is initialized, the remaining `len - 1` elements are moved down over it.
        unsafe {
            let base = self.buf.ptr();
            let value = ptr::read(base);
            ptr::copy(base.add(1), base, self.len - 1);
            self.len -= 1;
            Some(value)
        }
    }

    /// Drops every element past `len`. Keeps the buffer.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let tail_len = self.len - len;
        // Lower the length first, a panicking destructor must not lead to a double drop.
        self.len = len;

        // SAFETY: the slots `[len, len + tail_len)` were live and are no longer reachable.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(len), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element. Keeps the buffer.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Sets the length to `new_len`. Past the current capacity the buffer is reallocated to
    /// exactly `new_len`, otherwise it is truncated or filled in place. New slots hold clones of
    /// `value`.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        if new_len > self.capacity() {
            handle_reserve(self.buf.try_grow_exact(self.len, new_len));
        }

        if new_len <= self.len {
            self.truncate(new_len);
        } else {
            self.fill_to(new_len, || value.clone());
        }
    }

    /// Moves the contents out, leaving an empty array without a buffer.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Writes values from `make` until `len == new_len`.
    ///
    /// The capacity must already cover `new_len`.
    fn fill_to<F>(&mut self, new_len: usize, mut make: F)
    where
        F: FnMut() -> T,
    {
        assert!(new_len <= self.capacity());

        while self.len < new_len {
            let value = make();
            // SAFETY: `len < new_len <= capacity`.
            unsafe {
                ptr::write(self.buf.ptr().add(self.len), value);
            }
            self.len += 1;
        }
    }

    // --- Positions ---

    /// Cursor at the first element.
    #[inline]
    pub fn begin(&self) -> Cursor<Forward> {
        Cursor::at_slot(0)
    }

    /// Cursor one past the last element.
    #[inline]
    pub fn end(&self) -> Cursor<Forward> {
        Cursor::at_slot(self.len as isize)
    }

    /// Reverse cursor at the last element.
    #[inline]
    pub fn rbegin(&self) -> Cursor<Reverse> {
        Cursor::at_slot(self.len as isize - 1)
    }

    /// Reverse cursor one before the first element.
    #[inline]
    pub fn rend(&self) -> Cursor<Reverse> {
        Cursor::at_slot(-1)
    }

    /// Element under `cursor`, `None` if the cursor does not point at a live element.
    pub fn get_at<D: Direction>(&self, cursor: Cursor<D>) -> Option<&T> {
        self.as_slice().get(cursor.index()?)
    }

    pub fn get_at_mut<D: Direction>(&mut self, cursor: Cursor<D>) -> Option<&mut T> {
        self.as_mut_slice().get_mut(cursor.index()?)
    }

    /// Elements in `[begin, end)`.
    pub fn range_mut(
        &mut self,
        begin: Cursor<Forward>,
        end: Cursor<Forward>,
    ) -> Result<&mut [T], ArrayError> {
        let len = self.len;
        let invalid = ArrayError::InvalidRange {
            begin: begin.slot(),
            end: end.slot(),
            len,
        };

        match (begin.index(), end.index()) {
            (Some(start), Some(stop)) if start <= stop && stop <= len => {
                Ok(&mut self.as_mut_slice()[start..stop])
            }
            _ => Err(invalid),
        }
    }

    /// Elements in `[rbegin, rend)`, seen back to front.
    pub fn rev_range_mut(
        &mut self,
        rbegin: Cursor<Reverse>,
        rend: Cursor<Reverse>,
    ) -> Result<Rev<'_, T>, ArrayError> {
        let len = self.len;
        let invalid = ArrayError::InvalidRange {
            begin: rbegin.slot(),
            end: rend.slot(),
            len,
        };

        // A reverse pair covers the slots `(rend, rbegin]`.
        let start = usize::try_from(rend.slot() + 1).ok();
        let stop = usize::try_from(rbegin.slot() + 1).ok();

        match (start, stop) {
            (Some(start), Some(stop)) if start <= stop && stop <= len => {
                Ok(Rev::new(&mut self.as_mut_slice()[start..stop]))
            }
            _ => Err(invalid),
        }
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: the first `len` slots are initialized. `RawBuf` releases the buffer afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len));
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut array = Self::with_capacity(self.len);
        array.push_back_all(self.iter().cloned());
        array
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, U> PartialEq<DynamicArray<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T, U> PartialEq<[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<Vec<U>> for DynamicArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    /// Allocates exactly `N` slots.
    fn from(values: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        array.push_back_all(values);
        array
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        let mut array = Self::with_capacity(values.len());
        array.push_back_all(values);
        array
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(values: &[T]) -> Self {
        let mut array = Self::with_capacity(values.len());
        array.push_back_all(values.iter().cloned());
        array
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
