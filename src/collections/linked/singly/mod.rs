//! A module containing [`SinglyLinkedList`] and its iterators.

mod iter;
mod node;
mod singly_linked_list;

pub use iter::*;
pub(crate) use node::*;
pub use singly_linked_list::*;
