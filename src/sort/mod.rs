//! In-place comparison sorts.
//!
//! Every module exposes `sort`, `sort_by` and `sort_range`, plus a `SortImpl` for the shared test
//! and measurement harness. `sort_range` takes a strict-less predicate `is_less(a, b)` meaning "a
//! has to end up before b", and works on any [`SortRange`](crate::range::SortRange), e.g. a
//! reverse view.

// Classic insertion sort, adjacent swaps only. Stable.
pub mod insertion_classic;

// Insertion sort with a binary search for the insertion point. Stable.
pub mod insertion_binary;

// Heap sort on an implicit binary max-heap.
pub mod heap;

// Recursive quicksort with a fixed middle-element pivot.
pub mod quick;
