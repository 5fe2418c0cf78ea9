//! The random-access contract the sorts are written against.

/// A random-access range of elements that can be reordered in place.
///
/// Indices are logical positions `0..len()`. Implementors decide how they map onto storage, e.g.
/// [`Rev`] maps index 0 onto the last slot of its slice.
pub trait SortRange {
    type Item;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Panics if `index >= len()`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Panics if either index is out of bounds.
    fn swap(&mut self, a: usize, b: usize);

    /// Moves the element at `from` to `to` (`to <= from`), the elements in `[to, from)` move up
    /// by one position.
    fn shift_into(&mut self, from: usize, to: usize) {
        debug_assert!(to <= from);

        let mut pos = from;
        while pos > to {
            self.swap(pos - 1, pos);
            pos -= 1;
        }
    }
}

impl<T> SortRange for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }

    #[inline]
    fn shift_into(&mut self, from: usize, to: usize) {
        self[to..=from].rotate_right(1);
    }
}

/// Reverse view over a mutable slice. Logical index `i` is slot `len - 1 - i`, so sorting the
/// view ascending leaves the underlying slice in descending order.
pub struct Rev<'a, T> {
    slice: &'a mut [T],
}

impl<'a, T> Rev<'a, T> {
    #[inline]
    pub fn new(slice: &'a mut [T]) -> Self {
        Self { slice }
    }

    /// The underlying slice, in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.slice
    }

    #[inline]
    pub fn into_inner(self) -> &'a mut [T] {
        self.slice
    }

    #[inline]
    fn slot(&self, index: usize) -> usize {
        let len = self.slice.len();
        assert!(index < len, "index {index} out of range for reverse view of len {len}");
        len - 1 - index
    }
}

impl<T> SortRange for Rev<'_, T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.slice.len()
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self.slice[self.slot(index)]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        let (a, b) = (self.slot(a), self.slot(b));
        self.slice.swap(a, b);
    }

    #[inline]
    fn shift_into(&mut self, from: usize, to: usize) {
        // Logical `[to, from]` is storage `[slot(from), slot(to)]`, read back to front.
        let (lo, hi) = (self.slot(from), self.slot(to));
        self.slice[lo..=hi].rotate_left(1);
    }
}
