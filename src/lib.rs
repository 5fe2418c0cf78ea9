//! Growable contiguous array plus the classic in-place comparison sorts that operate on it.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod array;
pub mod error;
pub mod measure;
pub mod range;
pub mod reader;
pub mod sort;

pub use array::{Cursor, DynamicArray, Forward, Reverse};
pub use error::{ArrayError, ReadError};
pub use range::{Rev, SortRange};
