use std::cmp::Ordering;

use crate::range::SortRange;

sort_impl!("quick_middle_pivot_unstable");

/// Sorts the slice with quicksort.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// *O*(*n* \* log(*n*)) on average and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// The pivot is always the middle element of the current sub-range, no sampling and no
/// randomization, so results and comparison counts are reproducible. Inputs that keep placing
/// extreme values in the middle, and inputs with many equal elements, degrade to quadratic time.
/// The smaller partition is sorted recursively and the larger one in a loop, which bounds the
/// stack depth to *O*(log(*n*)) even then.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// sort_toolkit_rs::sort::quick::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_range(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, see [`sort`].
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` so that no adjacent pair violates `is_less`.
pub fn sort_range<R, F>(v: &mut R, mut is_less: F)
where
    R: SortRange + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> bool,
{
    let len = v.len();
    quicksort(v, 0, len, &mut is_less);
}

/// Re-arranges `v` around its middle element and returns the final position of that element.
///
/// When the call returns all elements left of the returned position compare true for
/// `is_less(elem, pivot)` and none of the elements right of it do. Returns 0 for an empty range.
pub fn partition<R, F>(v: &mut R, is_less: &mut F) -> usize
where
    R: SortRange + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    partition_range(v, 0, len, is_less)
}

/// Sorts `v[lo..hi]`.
fn quicksort<R, F>(v: &mut R, mut lo: usize, mut hi: usize, is_less: &mut F)
where
    R: SortRange + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> bool,
{
    while hi - lo > 1 {
        let pivot_pos = partition_range(v, lo, hi, is_less);

        // Recurse into the shorter side, continue with the longer one.
        if pivot_pos - lo < hi - (pivot_pos + 1) {
            quicksort(v, lo, pivot_pos, is_less);
            lo = pivot_pos + 1;
        } else {
            quicksort(v, pivot_pos + 1, hi, is_less);
            hi = pivot_pos;
        }
    }
}

/// See [`partition`]. Requires `lo < hi`.
fn partition_range<R, F>(v: &mut R, lo: usize, hi: usize, is_less: &mut F) -> usize
where
    R: SortRange + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> bool,
{
    debug_assert!(lo < hi && hi <= v.len());

    // Park the pivot at the end of the range. Swaps below only touch `[lo, last)`, so it stays
    // there until it is moved between the two partitions.
    let last = hi - 1;
    let mid = lo + (hi - lo) / 2;
    v.swap(mid, last);

    let mut low = lo;
    let mut high = last;

    while low < high {
        // Find the first element that does not precede the pivot.
        while low != last && is_less(v.get(low), v.get(last)) {
            low += 1;
        }

        // Find the last element that precedes the pivot.
        while high != lo && !is_less(v.get(high), v.get(last)) {
            high -= 1;
        }

        if low < high {
            v.swap(low, high);
        }
    }

    // Place the pivot between the two partitions.
    v.swap(low, last);

    low
}
