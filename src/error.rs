//! Error types for the array and the array reader.
//!
//! Index errors are signaled, never clamped. Allocation failure during infallible growth aborts
//! through `handle_alloc_error`, the `try_*` entry points surface it as [`ArrayError`] instead.

use std::alloc::Layout;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

/// Errors raised by [`DynamicArray`](crate::DynamicArray) and its cursors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Checked access outside `[0, len)`.
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of live elements.
        len: usize,
    },

    /// A cursor pair that does not describe a live sub-range.
    InvalidRange {
        /// Slot of the first cursor.
        begin: isize,
        /// Slot of the second cursor.
        end: isize,
        /// Number of live elements.
        len: usize,
    },

    /// The requested capacity does not fit in the address space.
    CapacityOverflow,

    /// The allocator could not provide the requested buffer.
    AllocFailed {
        /// Layout of the refused allocation.
        layout: Layout,
    },
}

impl Display for ArrayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::OutOfRange { index, len } => {
                write!(f, "Index out of range: index {index}, len {len}")
            }
            ArrayError::InvalidRange { begin, end, len } => {
                write!(f, "Invalid range: [{begin}, {end}) over len {len}")
            }
            ArrayError::CapacityOverflow => write!(f, "Capacity overflow"),
            ArrayError::AllocFailed { layout } => write!(
                f,
                "Allocation of {} bytes (align {}) failed",
                layout.size(),
                layout.align()
            ),
        }
    }
}

impl Error for ArrayError {}

/// Errors raised by [`ArrayReader`](crate::reader::ArrayReader).
#[derive(Debug)]
pub enum ReadError {
    /// The reader was already used on its current source.
    Exhausted,

    /// The underlying source failed.
    Io(io::Error),

    /// The source held no length token.
    MissingLength,

    /// The length token is not a non-negative integer.
    InvalidLength(String),

    /// An element token could not be parsed.
    InvalidElement {
        /// Position of the element, starting at 0.
        index: usize,
        /// The offending token.
        token: String,
    },

    /// The source ended before all announced elements were read.
    Truncated {
        /// Number of elements announced by the length token.
        expected: usize,
        /// Number of elements actually present.
        found: usize,
    },

    /// Storage for the announced elements could not be allocated.
    Array(ArrayError),
}

impl Display for ReadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Exhausted => write!(f, "Reader doesn't have valid source"),
            ReadError::Io(err) => write!(f, "Read failed: {err}"),
            ReadError::MissingLength => write!(f, "Missing length token"),
            ReadError::InvalidLength(token) => write!(f, "Invalid length token: {token:?}"),
            ReadError::InvalidElement { index, token } => {
                write!(f, "Invalid element {index}: {token:?}")
            }
            ReadError::Truncated { expected, found } => {
                write!(f, "Expected {expected} elements, found {found}")
            }
            ReadError::Array(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReadError::Io(err) => Some(err),
            ReadError::Array(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        ReadError::Io(err)
    }
}

impl From<ArrayError> for ReadError {
    fn from(err: ArrayError) -> Self {
        ReadError::Array(err)
    }
}
