use std::cmp::Ordering;

use crate::range::SortRange;

sort_impl!("insertion_classic_stable");

/// Sorts the slice with classic insertion sort.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place (i.e., does not
/// allocate), and *O*(*n*^2) worst-case. Already sorted input takes *O*(*n*).
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// sort_toolkit_rs::sort::insertion_classic::sort(&mut v);
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
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` so that no adjacent pair violates `is_less`.
///
/// Each element walks backwards through the sorted prefix, swapping with its predecessor for as
/// long as it strictly precedes it.
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
        insert_tail(v, tail, &mut is_less);
    }
}

/// Moves `v[tail]` left until `v[..=tail]` is sorted, assuming `v[..tail]` already is.
fn insert_tail<R, F>(v: &mut R, tail: usize, is_less: &mut F)
where
    R: SortRange + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> bool,
{
    let mut pos = tail;
    while pos > 0 && is_less(v.get(pos), v.get(pos - 1)) {
        v.swap(pos - 1, pos);
        pos -= 1;
    }
}
