use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::util::error::{AllocError, AllocFailure, CapacityOverflow};
use crate::util::option::OptionExtension;

/// An owned block of uninitialized storage with room for exactly `cap` values of `T`.
///
/// A RawBuf never reads, writes or drops the values it has room for. Tracking which slots are
/// initialized is the responsibility of the owner; dropping a RawBuf only frees the memory.
pub(crate) struct RawBuf<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// Creates a RawBuf with capacity 0, without allocating.
    pub const fn new() -> RawBuf<T> {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a new RawBuf with room for exactly `cap` values. Zero-sized layouts don't
    /// allocate.
    pub fn try_with_cap(cap: usize) -> Result<RawBuf<T>, AllocError> {
        let layout = RawBuf::<T>::make_layout(cap)?;
        let ptr = RawBuf::<T>::make_ptr(layout)?;

        Ok(RawBuf {
            ptr,
            cap,
            _phantom: PhantomData,
        })
    }

    /// Moves the first `live` values into a new allocation with room for `new_cap` values, then
    /// frees the old one.
    ///
    /// The new allocation is acquired before anything is moved, so on an [`Err`] self is left
    /// completely untouched.
    ///
    /// # Safety
    /// The first `live` slots of self must be initialized, and `live` must be no greater than
    /// either the current or the new capacity.
    pub unsafe fn try_relocate(&mut self, new_cap: usize, live: usize) -> Result<(), AllocError> {
        debug_assert!(live <= self.cap && live <= new_cap);

        if new_cap == self.cap {
            return Ok(());
        }

        let mut new_buf = RawBuf::<T>::try_with_cap(new_cap)?;

        // SAFETY: Both buffers are valid for live values, as guaranteed by the caller, and are
        // separate allocations (or dangling for zero-sized layouts, where no bytes are copied).
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_buf.ptr.as_ptr(), live);
        }

        // The old buffer now only holds bitwise copies of moved values, which are forgotten by
        // freeing it without dropping anything.
        mem::swap(self, &mut new_buf);
        Ok(())
    }

    /// Returns a raw pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be no greater than the capacity of self.
    pub const unsafe fn slot(&self, index: usize) -> *mut T {
        // SAFETY: The caller guarantees that the offset stays within (or one past the end of) the
        // allocation.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Creates a [`Layout`] for `cap` values of `T`, failing if its size would exceed
    /// [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }

    /// Allocates memory for the provided layout. Returns a dangling pointer for a zero-sized
    /// layout.
    pub(crate) fn make_ptr(layout: Layout) -> Result<NonNull<T>, AllocFailure> {
        if layout.size() == 0 {
            Ok(NonNull::dangling())
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).ok_or(AllocFailure { layout })
        }
    }
}

impl<T> Default for RawBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        // SAFETY: A RawBuf only ever exists with a capacity that produced a valid layout.
        let layout = unsafe { RawBuf::<T>::make_layout(self.cap).ok().unreachable() };

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}
