use std::fmt::Display;
use std::io::{self, Write};

use crate::util::error::{AllocError, ContainerError, IndexOutOfBounds};
use crate::util::fmt::SpaceSeparated;
use crate::util::result::{AllocResultExtension, ResultExtension};

/// The capabilities shared by every sequence container in this crate: an ordered collection of
/// values addressed by position `0..len`.
///
/// Implementors only need to provide the `try_` methods, the panicking variants are defined in
/// terms of them.
///
/// # Examples
/// ```
/// # use sequence_containers::collections::contiguous::Vector;
/// # use sequence_containers::collections::linked::DoublyLinkedList;
/// # use sequence_containers::collections::traits::Container;
/// fn fill<C: Container<u8> + Default>() -> C {
///     let mut c = C::default();
///     for i in 0..3 {
///         c.push_back(i);
///     }
///     c.insert(1, 100);
///     c
/// }
///
/// let mut out = Vec::new();
/// fill::<Vector<u8>>().print(&mut out).unwrap();
/// fill::<DoublyLinkedList<u8>>().print(&mut out).unwrap();
/// assert_eq!(out, b"0 100 1 20 100 1 2");
/// ```
pub trait Container<T> {
    /// A borrowing iterator over the elements in order. It must be cloneable so that the elements
    /// can be walked more than once, as `print` and `Display` do.
    type Iter<'a>: Iterator<Item = &'a T> + Clone where Self: 'a, T: 'a;

    /// Returns the number of elements in the container.
    fn len(&self) -> usize;

    /// Returns true if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every element in the container, leaving it with length 0. Whether any storage is kept
    /// for later use is up to the implementation.
    fn clear(&mut self);

    /// Appends `value` to the end of the container, returning an [`Err`] if the storage required
    /// couldn't be acquired. The container is unchanged on failure.
    fn try_push_back(&mut self, value: T) -> Result<(), AllocError>;

    /// Inserts `value` so that it ends up at `index`, moving all following elements back by one.
    /// An `index` equal to the length of the container appends the value.
    fn try_insert(&mut self, index: usize, value: T) -> Result<(), ContainerError>;

    /// Removes and returns the element at `index`, moving all following elements forward by one.
    fn try_erase(&mut self, index: usize) -> Result<T, IndexOutOfBounds>;

    /// Returns a reference to the element at `index`.
    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds>;

    /// Returns a mutable reference to the element at `index`.
    fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds>;

    /// Returns an iterator over references to every element, in order.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Appends `value` to the end of the container.
    ///
    /// # Panics
    /// Panics if the required storage can't be represented. Allocation failures are reported
    /// through [`handle_alloc_error`](std::alloc::handle_alloc_error).
    fn push_back(&mut self, value: T) {
        self.try_push_back(value).throw_alloc()
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// # Panics
    /// Panics if `index > len`, or if the required storage can't be represented.
    fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw_alloc()
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn erase(&mut self, index: usize) -> T {
        self.try_erase(index).throw()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Writes every element to `sink`, in order, separated by a single space. No separator is
    /// written after the last element.
    fn print<W: Write>(&self, sink: &mut W) -> io::Result<()>
    where
        T: Display,
    {
        write!(sink, "{}", SpaceSeparated::new(self.iter()))
    }

    /// Writes every element to standard output, as done by [`print`](Container::print).
    fn print_stdout(&self) -> io::Result<()>
    where
        T: Display,
    {
        self.print(&mut io::stdout().lock())
    }
}
