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

/// A list with links in the forward direction only. A handle to the last node is kept, so values
/// can be added at either end in constant time, but only removed from the front.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `erase` | `O(i)` |
/// | `clear` | `O(n)` |
pub struct SinglyLinkedList<T> {
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

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Add the provided element to the front of the SinglyLinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow. Allocation failures are reported through
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error).
    ///
    /// # Examples
    /// ```
    /// # use sequence_containers::collections::linked::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.try_push_front(value).throw_alloc()
    }

    /// Add the provided element to the front of the SinglyLinkedList, returning an [`Err`] if the
    /// node can't be allocated. The list is unchanged on failure.
    pub fn try_push_front(&mut self, value: T) -> Result<(), AllocError> {
        match &mut self.state {
            Empty => self.state = ListState::try_single(value)?,
            Full(contents) => contents.try_push_front(value)?,
        }
        Ok(())
    }

    /// Add the provided element to the back of the SinglyLinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow. Allocation failures are reported through
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error).
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).throw_alloc()
    }

    /// Add the provided element to the back of the SinglyLinkedList, returning an [`Err`] if the
    /// node can't be allocated. The list is unchanged on failure.
    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        match &mut self.state {
            Empty => self.state = ListState::try_single(value)?,
            Full(contents) => contents.try_push_back(value)?,
        }
        Ok(())
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: head is live and is about to be replaced, so it won't be used again.
                let node = unsafe { head.take_node() };

                match len.decremented() {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        *head = unsafe { node.next.unreachable() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
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
    /// # use sequence_containers::collections::linked::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::from([0, 1, 2]);
    /// list.insert(1, 100);
    /// list.insert(0, 200);
    /// list.insert(5, 300);
    /// assert_eq!(list, SinglyLinkedList::from([200, 0, 100, 1, 2, 300]));
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

        // The index is strictly between the front and back, so the list can't be empty.
        let contents = self.checked_contents_for_index_mut(index)?;
        let new_len = contents.len.incremented()?;
        let prev_node = contents.seek(index - 1);

        let node = NodeRef::try_from_node(Node {
            value,
            next: *prev_node.next(),
        })?;

        *prev_node.next_mut() = Some(node);
        contents.len = new_len;
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SinglyLinkedList.
    ///
    /// # Examples
    /// ```
    /// # use sequence_containers::collections::linked::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::from([0, 1, 2, 3]);
    /// assert_eq!(list.erase(3), 3);
    /// assert_eq!(list.erase(1), 1);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn erase(&mut self, index: usize) -> T {
        self.try_erase(index).throw()
    }

    /// Removes the element at `index` and returns it, returning an [`Err`] if the index is out of
    /// bounds.
    pub fn try_erase(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index == 0 {
            return self.pop_front().ok_or(IndexOutOfBounds { index, len: 0 });
        }

        let contents = self.checked_contents_for_index_mut(index)?;
        let prev_node = contents.seek(index - 1);
        // SAFETY: index < len, so the node before it is followed by the node being erased. Once it
        // is unlinked below, no handle to it remains.
        let node = unsafe { prev_node.next().unreachable().take_node() };

        *prev_node.next_mut() = node.next;
        if node.next.is_none() {
            contents.tail = prev_node;
        }
        // SAFETY: index > 0 so the length was at least 2.
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

impl<T: Clone> SinglyLinkedList<T> {
    /// Creates an element-wise copy of the list, returning an [`Err`] if any node can't be
    /// allocated. Nodes created before a failure (or a panicking clone) are freed again, and self
    /// is never modified.
    pub fn try_clone(&self) -> Result<SinglyLinkedList<T>, AllocError> {
        let mut list = SinglyLinkedList::new();
        for value in self.iter() {
            list.try_push_back(value.clone())?;
        }
        Ok(list)
    }
}

impl<T> SinglyLinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        match &self.state {
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            state => Err(IndexOutOfBounds { index, len: state.len() }),
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

    /// Walks the whole chain, asserting that it holds exactly `len` nodes and ends at `tail`.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
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
    /// Returns the node at `index`, walking forward from the head.
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        let mut node = self.head;
        for _ in 0..index {
            // SAFETY: Callers only seek to indices < len, so every node passed over has a next.
            node = unsafe { node.next().unreachable() };
        }
        node
    }

    pub fn try_push_front(&mut self, value: T) -> Result<(), AllocError> {
        let new_len = self.len.incremented()?;

        self.head = NodeRef::try_from_node(Node {
            value,
            next: Some(self.head),
        })?;
        self.len = new_len;
        Ok(())
    }

    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        let new_len = self.len.incremented()?;

        let node = NodeRef::try_from_node(Node {
            value,
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
            next: None,
        })?;

        Ok(ListContents {
            len: ONE,
            head: node,
            tail: node,
        })
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

    pub(crate) const fn head(&self) -> Link<T> {
        match self {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        }
    }
}

impl<T> Container<T> for SinglyLinkedList<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        SinglyLinkedList::len(self)
    }

    fn clear(&mut self) {
        SinglyLinkedList::clear(self)
    }

    fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        SinglyLinkedList::try_push_back(self, value)
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        SinglyLinkedList::try_insert(self, index, value)
    }

    fn try_erase(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        SinglyLinkedList::try_erase(self, index)
    }

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        SinglyLinkedList::try_get(self, index)
    }

    fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        SinglyLinkedList::try_get_mut(self, index)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        SinglyLinkedList::iter(self)
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for SinglyLinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.state.head();
        while let Some(ptr) = curr {
            // SAFETY: Every node is reachable exactly once from the head, and the list is never
            // used again after being dropped.
            let node = unsafe { ptr.take_node() };
            curr = node.next;
        }
    }
}

// SAFETY: The list uniquely owns all of its nodes, so it is safe to send when T: Send.
unsafe impl<T: Send> Send for SinglyLinkedList<T> {}
// SAFETY: Shared access to the list only hands out shared references to values.
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.try_clone().throw_alloc()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hashing the length first terminates the variable length sequence.
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &DebugEntries(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SpaceSeparated::new(self.iter()))
    }
}
