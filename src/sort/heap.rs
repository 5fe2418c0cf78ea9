use std::cmp::Ordering;

use crate::range::SortRange;

sort_impl!("heap_unstable");

/// Sorts the slice with heap sort.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) worst-case.
///
/// # Examples
///
/// ```
/// let mut v = [5, 3, 8, 1, 9, 2];
///
/// sort_toolkit_rs::sort::heap::sort(&mut v);
/// assert!(v == [1, 2, 3, 5, 8, 9]);
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
///
/// Builds a heap over the whole range, then repeatedly swaps the root behind the shrinking heap
/// and repairs it. Between extractions the unsorted prefix is always a valid heap.
pub fn sort_range<R, F>(v: &mut R, mut is_less: F)
where
    R: SortRange + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    build_heap(v, &mut is_less);

    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, 0, end, &mut is_less);
    }
}

// This binary heap respects the invariant `!is_less(parent, child)`. The children of node `i` are
// `2 * i + 1` and `2 * i + 2`.

/// Turns `v` into a heap by sifting every element up as it joins the heap.
pub fn build_heap<R, F>(v: &mut R, is_less: &mut F)
where
    R: SortRange + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> bool,
{
    for leaf in 1..v.len() {
        sift_up(v, leaf, is_less);
    }
}

/// Returns `true` if no parent in `v[..end]` strictly precedes one of its children.
pub fn is_heap<R, F>(v: &R, end: usize, is_less: &mut F) -> bool
where
    R: SortRange + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> bool,
{
    (1..end.min(v.len())).all(|child| !is_less(v.get((child - 1) / 2), v.get(child)))
}

fn sift_up<R, F>(v: &mut R, mut node: usize, is_less: &mut F)
where
    R: SortRange + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> bool,
{
    while node > 0 {
        let parent = (node - 1) / 2;

        // Stop if the invariant holds at `parent`.
        if !is_less(v.get(parent), v.get(node)) {
            break;
        }

        v.swap(parent, node);
        node = parent;
    }
}

/// Repairs the heap `v[..end]` whose only violation may be at `node`.
fn sift_down<R, F>(v: &mut R, mut node: usize, end: usize, is_less: &mut F)
where
    R: SortRange + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> bool,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= end {
            break;
        }

        // Choose the greater child.
        if child + 1 < end && is_less(v.get(child), v.get(child + 1)) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(v.get(node), v.get(child)) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
