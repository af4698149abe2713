//! A small family of generic sequence containers, written by hand on top of raw allocations.
//!
//! # Contents
//! - [`Vector`](collections::contiguous::Vector): a contiguous, growable array that manages its own
//!   buffer.
//! - [`SinglyLinkedList`](collections::linked::SinglyLinkedList): a forward-only chain of nodes
//!   with a tail handle for constant time appends.
//! - [`DoublyLinkedList`](collections::linked::DoublyLinkedList): a chain of nodes linked in both
//!   directions, seeking from whichever end is closer.
//!
//! All of them implement [`Container`](collections::traits::Container), so the same code can drive
//! any of the three.
//!
//! # Error Handling
//! Every operation that can fail exists in two forms. The `try_` form returns a strongly typed
//! [`Result`], using enums of small error structs for static dispatch. The plain form panics with
//! the message of the error instead, because it is rarely helpful to force a caller to handle an
//! out of bounds index they have already checked.
//!
//! Operations that need more memory never leave a container half modified. If the allocation (or
//! the layout calculation) fails, the container is left exactly as it was and the error is
//! returned.
//!
//! # Dependencies
//! This crate doesn't use [`Vec`] or any of the [`std::collections`] types for storage. The only
//! dependency is `derive_more`, which removes some very repetitive error boilerplate.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
