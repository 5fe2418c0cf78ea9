use std::cmp::Ordering;

use crate::range::SortRange;

sort_impl!("insertion_binary_stable");

/// Sorts the slice with binary insertion sort.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place (i.e., does not
/// allocate) and *O*(*n*^2) worst-case because of the element shifts, but only does
/// *O*(*n* \* log(*n*)) comparisons. Prefer it over classic insertion sort when comparisons are
/// expensive compared to moves.
///
/// # Examples
///
/// ```
/// let mut v = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
///
/// sort_toolkit_rs::sort::insertion_binary::sort(&mut v);
/// assert!(v == [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_range(v, |a, b| a.lt(b));
}

/// Sorts the slice with a three-way comparator function, see [`sort`].
///
/// Only `Ordering::Less` is distinguished, `Equal` and `Greater` both mean "does not precede".
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
    if len < 2 {
        return;
    }

    for tail in 1..len {
        let pos = insertion_point(&*v, tail, v.get(tail), &mut is_less);
        if pos < tail {
            v.shift_into(tail, pos);
        }
    }
}

/// Searches the sorted prefix `v[..sorted_len]` for the position `target` has to be inserted at.
///
/// Returns the first index whose element `target` strictly precedes, or `sorted_len` if there is
/// none. Elements equal to `target` stay in front of it, which keeps the sort stable.
pub fn insertion_point<R, F>(v: &R, sorted_len: usize, target: &R::Item, is_less: &mut F) -> usize
where
    R: SortRange + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> bool,
{
    debug_assert!(sorted_len <= v.len());

    let mut lo = 0;
    let mut hi = sorted_len;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;

        if is_less(target, v.get(mid)) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    lo
}
