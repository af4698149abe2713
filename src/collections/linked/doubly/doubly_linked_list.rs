use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, IterMut, Link, Node, NodeRef};
use crate::collections::linked::{Length, ONE};
use crate::collections::traits::Container;
use crate::util::error::{AllocError, ContainerError, IndexOutOfBounds};
use crate::util::fmt::{DebugEntries, SpaceSeparated};
use crate::util::option::OptionExtension;
use crate::util::result::{AllocResultExtension, ResultExtension};

/// A list with links in both directions. Values can be added or removed at either end in constant
/// time, and positional operations walk from whichever end of the list is closer.
///
/// # Time Complexity
/// With `n` as the length of the list and `i` as the position being accessed:
///
/// | Method | Complexity |
/// |-|-|
/// | `len`, `front`, `back` | `O(1)` |
/// | `push_front`, `push_back`, `pop_front`, `pop_back` | `O(1)` |
/// | `get`, `insert`, `erase` | `O(min(i, n-i))` |
/// | `clear` | `O(n)` |
///
/// Every step of a seek is a dependent pointer load, usually a cache miss. Unless most of the
/// work happens at the ends, [`Vector`](crate::collections::contiguous::Vector) will be faster.
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty DoublyLinkedList. No nodes are allocated until a value is added.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of nodes in the list.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the value at the head, or [`None`] when the list is empty.
    pub const fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Mutable version of [`front`](DoublyLinkedList::front).
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns the value at the tail, or [`None`] when the list is empty.
    pub const fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Mutable version of [`back`](DoublyLinkedList::back).
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Add the provided element to the front of the DoublyLinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow. Allocation failures are reported through
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error).
    pub fn push_front(&mut self, value: T) {
        self.try_push_front(value).throw_alloc()
    }

    /// Add the provided element to the front of the DoublyLinkedList, returning an [`Err`] if the
    /// node can't be allocated. The list is unchanged on failure.
    pub fn try_push_front(&mut self, value: T) -> Result<(), AllocError> {
        match &mut self.state {
            Empty => self.state = ListState::try_single(value)?,
            Full(contents) => contents.try_push_front(value)?,
        }
        Ok(())
    }

    /// Add the provided element to the back of the DoublyLinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow. Allocation failures are reported through
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error).
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).throw_alloc()
    }

    /// Add the provided element to the back of the DoublyLinkedList, returning an [`Err`] if the
    /// node can't be allocated. The list is unchanged on failure.
    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        match &mut self.state {
            Empty => self.state = ListState::try_single(value)?,
            Full(contents) => contents.try_push_back(value)?,
        }
        Ok(())
    }

    /// Unlinks the head node and returns its value.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: head is live and is about to be replaced, so it won't be used again.
                let node = unsafe { head.take_node() };

                match len.decremented() {
                    Some(new_len) => {
                        // SAFETY: The list still has a node left, which must follow the old head.
                        let new_head = unsafe { node.next.unreachable() };
                        *new_head.prev_mut() = None;
                        *head = new_head;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Unlinks the tail node and returns its value.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                // SAFETY: tail is live and is about to be replaced, so it won't be used again.
                let node = unsafe { tail.take_node() };

                match len.decremented() {
                    Some(new_len) => {
                        // SAFETY: The list still has a node left, which must precede the old tail.
                        let new_tail = unsafe { node.prev.unreachable() };
                        *new_tail.next_mut() = None;
                        *tail = new_tail;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Returns a reference to the value at `index`, also available through the [`Index`]
    /// operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the value at `index`, or an [`Err`] if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the value at `index`, also available through the
    /// [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the value at `index`, or an [`Err`] if `index >= len`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` so that it ends up at `index`. An index equal to the length of the list
    /// appends the value.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list.
    ///
    /// # Examples
    /// ```
    /// # use sequence_containers::collections::linked::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::from([0, 1, 2, 3]);
    /// list.insert(1, 100);
    /// list.insert(4, 200);
    /// assert_eq!(list, DoublyLinkedList::from([0, 100, 1, 2, 200, 3]));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw_alloc()
    }

    /// Inserts `value` so that it ends up at `index`, returning an [`Err`] if the index is greater
    /// than the length or the node can't be allocated. The list is unchanged on failure.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len }.into());
        }

        if index == 0 {
            return Ok(self.try_push_front(value)?);
        }
        if index == len {
            return Ok(self.try_push_back(value)?);
        }

        // The index is strictly between the front and back, so the list can't be empty and the
        // node currently at index has a predecessor.
        let contents = self.checked_contents_for_index_mut(index)?;
        let new_len = contents.len.incremented()?;
        let next_node = contents.seek(index);
        // SAFETY: index > 0, so the node at index isn't the head.
        let prev_node = unsafe { (*next_node.prev()).unreachable() };

        let node = NodeRef::try_from_node(Node {
            value,
            prev: Some(prev_node),
            next: Some(next_node),
        })?;

        *prev_node.next_mut() = Some(node);
        *next_node.prev_mut() = Some(node);
        contents.len = new_len;
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the DoublyLinkedList.
    pub fn erase(&mut self, index: usize) -> T {
        self.try_erase(index).throw()
    }

    /// Removes the element at `index` and returns it, returning an [`Err`] if the index is out of
    /// bounds.
    pub fn try_erase(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let contents = self.checked_contents_for_index_mut(index)?;

        if index == 0 {
            // SAFETY: index 0 passed the bounds check, so there is a head.
            return Ok(unsafe { self.pop_front().unreachable() });
        }
        if index == contents.last_index() {
            // SAFETY: The last index passed the bounds check, so there is a tail.
            return Ok(unsafe { self.pop_back().unreachable() });
        }

        // SAFETY: The node is live, and is unlinked from both neighbours below.
        let node = unsafe { contents.seek(index).take_node() };

        // SAFETY: For this branch, both prev and next must be defined. Head and tail versions are
        // handled with the pop front / back branches.
        unsafe {
            *node.prev.unreachable().next_mut() = node.next;
            *node.next.unreachable().prev_mut() = node.prev;
        }
        // SAFETY: A node strictly between the head and the tail means len >= 3.
        contents.len = unsafe { contents.len.decremented().unreachable() };

        Ok(node.value)
    }

    /// Drops every element in the list.
    pub fn clear(&mut self) {
        drop(mem::take(self));
    }

    /// Returns an iterator over references to every element, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to every element, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    /// Creates an element-wise copy of the list, returning an [`Err`] if any node can't be
    /// allocated. Nodes created before a failure (or a panicking clone) are freed again, and self
    /// is never modified.
    pub fn try_clone(&self) -> Result<DoublyLinkedList<T>, AllocError> {
        let mut list = DoublyLinkedList::new();
        for value in self.iter() {
            list.try_push_back(value.clone())?;
        }
        Ok(list)
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        Ok(self.checked_contents_for_index(index)?.seek(index))
    }

    pub(crate) const fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    pub(crate) const fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents<T>, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    /// Walks the whole chain, asserting that both link directions agree, that the ends have no
    /// outer links and that exactly `len` nodes are reachable.
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none(), "The head shouldn't have a previous node.");

                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    assert!(
                        *next.prev() == Some(curr),
                        "Each node should link back to its predecessor."
                    );
                    curr = *next;
                    count += 1;
                }
                assert!(*tail == curr, "The last node should be the tail.");
                assert_eq!(count, len.get(), "The chain should hold len nodes.");
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Returns the node at `index`, walking from whichever end of the list is closer.
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        if index < self.len.get() / 2 {
            self.seek_fwd(index)
        } else {
            self.seek_bwd(self.last_index() - index)
        }
    }

    /// Returns the node `count` steps after the head. `count` must be less than the length.
    pub fn seek_fwd(&self, count: usize) -> NodeRef<T> {
        let mut node = self.head;
        for _ in 0..count {
            // SAFETY: count < len, so every node passed over is followed by another.
            node = unsafe { (*node.next()).unreachable() };
        }
        node
    }

    /// Returns the node `count` steps before the tail. `count` must be less than the length.
    pub fn seek_bwd(&self, count: usize) -> NodeRef<T> {
        let mut node = self.tail;
        for _ in 0..count {
            // SAFETY: count < len, so every node passed over is preceded by another.
            node = unsafe { (*node.prev()).unreachable() };
        }
        node
    }

    pub fn try_push_front(&mut self, value: T) -> Result<(), AllocError> {
        let new_len = self.len.incremented()?;

        let node = NodeRef::try_from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        })?;

        *self.head.prev_mut() = Some(node);
        self.head = node;
        self.len = new_len;
        Ok(())
    }

    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        let new_len = self.len.incremented()?;

        let node = NodeRef::try_from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        })?;

        *self.tail.next_mut() = Some(node);
        self.tail = node;
        self.len = new_len;
        Ok(())
    }

    pub fn try_wrap_one(value: T) -> Result<ListContents<T>, AllocError> {
        let node = NodeRef::try_from_node(Node {
            value,
            prev: None,
            next: None,
        })?;

        Ok(ListContents {
            len: ONE,
            head: node,
            tail: node,
        })
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn try_single(value: T) -> Result<ListState<T>, AllocError> {
        Ok(Full(ListContents::try_wrap_one(value)?))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub const fn head(&self) -> Link<T> {
        match self {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        }
    }

    pub const fn tail(&self) -> Link<T> {
        match self {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(*tail),
        }
    }
}

impl<T> Container<T> for DoublyLinkedList<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        DoublyLinkedList::len(self)
    }

    fn clear(&mut self) {
        DoublyLinkedList::clear(self)
    }

    fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        DoublyLinkedList::try_push_back(self, value)
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        DoublyLinkedList::try_insert(self, index, value)
    }

    fn try_erase(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        DoublyLinkedList::try_erase(self, index)
    }

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        DoublyLinkedList::try_get(self, index)
    }

    fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        DoublyLinkedList::try_get_mut(self, index)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        DoublyLinkedList::iter(self)
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, .. }) => {
                let mut curr = Some(head);
                while let Some(ptr) = curr {
                    // SAFETY: Every node is reachable exactly once following next links from the
                    // head, and the list is never used again after being dropped.
                    let node = unsafe { ptr.take_node() };
                    curr = node.next;
                }
            },
        }
    }
}

// SAFETY: The list uniquely owns all of its nodes, so it is safe to send when T: Send.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: Shared access to the list only hands out shared references to values.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.try_clone().throw_alloc()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SpaceSeparated::new(self.iter()))
    }
}
