use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::util::error::AllocFailure;

/// Moves `node` into a new allocation of its own, returning [`AllocFailure`] (and dropping `node`)
/// if the allocator can't provide one.
pub(crate) fn try_alloc<N>(node: N) -> Result<NonNull<N>, AllocFailure> {
    let layout = Layout::new::<N>();

    let ptr = if layout.size() == 0 {
        NonNull::dangling()
    } else {
        NonNull::new(
            // SAFETY: Zero-sized layouts have been guarded against.
            unsafe { alloc::alloc(layout).cast::<N>() }
        ).ok_or(AllocFailure { layout })?
    };

    // SAFETY: ptr is either freshly allocated with the layout of N, or dangling for a zero-sized N,
    // which is valid for writes.
    unsafe { ptr.write(node); }
    Ok(ptr)
}

/// Moves the node out of its allocation and frees it.
///
/// # Safety
/// `ptr` must have been produced by [`try_alloc`] and must not have been freed already. No other
/// handle to the node may be used afterwards.
pub(crate) unsafe fn dealloc<N>(ptr: NonNull<N>) -> N {
    let layout = Layout::new::<N>();

    // SAFETY: The caller guarantees that ptr refers to a live node allocated by try_alloc.
    let node = unsafe { ptr.read() };

    if layout.size() != 0 {
        // SAFETY: ptr was allocated in the global allocator with this same layout, and its
        // contents have just been moved out.
        unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) }
    }

    node
}
