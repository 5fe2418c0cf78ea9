use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::error::ArrayError;

/// Owning handle to an uninitialized buffer of `cap` slots. It knows nothing about which slots
/// are initialized; the caller passes the number of live leading elements whenever the buffer is
/// moved.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawBuf` uniquely owns its allocation, same as `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Makes room for `additional` more elements behind `len` live ones. The capacity doubles
    /// (starting at 1) unless that is still too small, then it grows to exactly what is needed.
    pub(crate) fn try_grow_amortized(
        &mut self,
        len: usize,
        additional: usize,
    ) -> Result<(), ArrayError> {
        let required = len
            .checked_add(additional)
            .ok_or(ArrayError::CapacityOverflow)?;
        if required <= self.cap {
            return Ok(());
        }

        let doubled = if self.cap == 0 {
            1
        } else {
            self.cap.saturating_mul(2)
        };

        self.reallocate(len, doubled.max(required))
    }

    /// Grows the capacity to exactly `new_cap`. Never shrinks.
    pub(crate) fn try_grow_exact(&mut self, len: usize, new_cap: usize) -> Result<(), ArrayError> {
        if new_cap <= self.cap {
            return Ok(());
        }

        self.reallocate(len, new_cap)
    }

    /// Moves the first `len` elements into a fresh buffer of `new_cap` slots, then releases the
    /// old buffer. On failure the current buffer is left untouched.
    fn reallocate(&mut self, len: usize, new_cap: usize) -> Result<(), ArrayError> {
        debug_assert!(len <= self.cap && self.cap < new_cap);

        if Self::IS_ZST {
            self.cap = new_cap;
            return Ok(());
        }

        let layout = Layout::array::<T>(new_cap).map_err(|_| ArrayError::CapacityOverflow)?;

        // SAFETY: `new_cap > self.cap >= 0` and `T` is not zero-sized, so `layout` has a non-zero
        // size.
        let new_ptr = unsafe { alloc::alloc(layout) } as *mut T;
        let new_ptr = NonNull::new(new_ptr).ok_or(ArrayError::AllocFailed { layout })?;

        // SAFETY: the old buffer holds `len` initialized elements and the new one has room for
        // `new_cap >= len`. Two distinct allocations never overlap. After the copy the old slots
        // are logically moved-from, releasing them does not drop anything.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len);
            self.release();
        }

        self.ptr = new_ptr;
        self.cap = new_cap;

        Ok(())
    }

    /// SAFETY: the caller must not use the buffer afterwards without resetting `ptr` and `cap`.
    unsafe fn release(&mut self) {
        if Self::IS_ZST || self.cap == 0 {
            return;
        }

        if let Ok(layout) = Layout::array::<T>(self.cap) {
            alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout);
        }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        // SAFETY: the buffer is never touched again.
        unsafe {
            self.release();
        }
    }
}

/// Turns a failed growth into the same outcome as `Vec`: panic on overflow, abort on allocation
/// failure.
pub(crate) fn handle_reserve(result: Result<(), ArrayError>) {
    match result {
        Ok(()) => {}
        Err(ArrayError::AllocFailed { layout }) => alloc::handle_alloc_error(layout),
        Err(err) => panic!("{err}"),
    }
}
