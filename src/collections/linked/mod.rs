//! Linked collection types: [`SinglyLinkedList`], a forward-only chain, and [`DoublyLinkedList`],
//! a chain with links in both directions.
//!
//! Both lists allocate each node individually and are the only owners of their nodes. Every other
//! handle, (the tail handle, back links and iterators) is used purely for navigation and never
//! frees anything.

pub mod doubly;
pub mod singly;

mod length;
mod node_alloc;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;

pub(crate) use length::*;
