use std::ptr::NonNull;

use crate::collections::linked::node_alloc;
use crate::util::error::AllocFailure;

pub(crate) type Link<T> = Option<NodeRef<T>>;

/// A copyable handle to a node owned by a [`DoublyLinkedList`](super::DoublyLinkedList).
///
/// The accessors hand out references with unbounded lifetimes. It is up to the list to tie them to
/// a borrow of itself, and to only use a NodeRef while its node is still allocated.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: The list only holds NodeRefs to live nodes.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: The list only holds NodeRefs to live nodes, and only hands out a mutable
        // reference while it is mutably borrowed itself.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: The list only holds NodeRefs to live nodes.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: Links are only rewritten while the list is mutably borrowed, and no other
        // reference to this link is held at the same time.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub const fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The list only holds NodeRefs to live nodes.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: Links are only rewritten while the list is mutably borrowed, and no other
        // reference to this link is held at the same time.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Moves `node` onto the heap, returning an [`Err`] if the allocation fails.
    pub fn try_from_node(node: Node<T>) -> Result<NodeRef<T>, AllocFailure> {
        Ok(NodeRef(node_alloc::try_alloc(node)?))
    }

    /// Moves the node off of the heap, freeing its allocation.
    ///
    /// # Safety
    /// The node must still be allocated, and no copy of this NodeRef may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The caller guarantees that the node is live and that this is the last use.
        unsafe { node_alloc::dealloc(self.0) }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    // Navigation only, the previous node is owned by the list like every other.
    pub prev: Link<T>,
    pub next: Link<T>,
}
