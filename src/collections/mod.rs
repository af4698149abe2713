//! Generic sequence containers and the trait that unifies them.
//!
//! # Method
//! [`Vector`](contiguous::Vector) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which saves writing a lot of the more repetitive slice functionality. The linked
//! lists hand out [`NonNull`](std::ptr::NonNull) based node handles internally and are the sole
//! owners of every node they allocate.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;

/// Errors returned by the `try_` methods of each container.
pub mod error {
    #[doc(inline)]
    pub use crate::util::error::*;
}
