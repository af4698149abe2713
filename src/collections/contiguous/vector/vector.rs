use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::RawBuf;
use crate::collections::traits::Container;
use crate::util::error::{AllocError, CapacityOverflow, ContainerError, IndexOutOfBounds};
use crate::util::fmt::SpaceSeparated;
use crate::util::result::{AllocResultExtension, ResultExtension};

/// The capacity used for the first allocation of an empty Vector.
const MIN_CAP: usize = 1;

/// Each time a Vector grows, its capacity increases by `cap / GROWTH_DIVISOR`, (rounded down).
const GROWTH_DIVISOR: usize = 2;

/// A variable size contiguous collection, which owns a manually managed buffer.
///
/// The buffer has room for `cap` elements, of which the first `len` are initialized. It is only
/// reallocated when an insertion would exceed the capacity, and is never shrunk implicitly.
///
/// # Time Complexity
/// With `n` as the length of the Vector and `i` as the position being accessed:
///
/// | Method | Complexity |
/// |-|-|
/// | `len`, `get`, `pop_back` | `O(1)` |
/// | `push_back` | amortized `O(1)`*, `O(n)` |
/// | `insert`, `erase` | `O(n-i)` |
/// | `clear` | `O(n)` |
/// | `reserve`, `shrink_to_fit` | `O(n)`** |
///
/// \* A push that runs out of capacity relocates every element. Because the capacity grows by
/// half of itself each time, this cost is spread evenly over the pushes that follow.
///
/// \** Reserving space that is already available doesn't touch the buffer and is `O(1)`.
pub struct Vector<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates an empty Vector. Nothing is allocated until the first element is added.
    ///
    /// # Examples
    /// ```
    /// # use sequence_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates an empty Vector with room for exactly `cap` elements, so that the first `cap` pushes
    /// never relocate anything.
    ///
    /// # Panics
    /// Panics if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use sequence_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(4);
    /// vec.extend([7, 8, 9, 10]);
    /// assert_eq!((vec.len(), vec.cap()), (4, 4));
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector::try_with_cap(cap).throw_alloc()
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, returning an [`Err`]
    /// if the buffer can't be allocated.
    pub fn try_with_cap(cap: usize) -> Result<Vector<T>, AllocError> {
        Ok(Vector {
            buf: RawBuf::try_with_cap(cap)?,
            len: 0,
        })
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector has a length of 0, regardless of its capacity.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is always at least the length.
    pub const fn cap(&self) -> usize {
        self.buf.cap
    }

    /// Appends `value` after the last element, growing the buffer first when it is full.
    ///
    /// # Panics
    /// Panics if the grown buffer would need more than [`isize::MAX`] bytes. Allocation failures
    /// are reported through [`handle_alloc_error`](std::alloc::handle_alloc_error).
    ///
    /// # Examples
    /// ```
    /// # use sequence_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// vec.push_back('a');
    /// vec.push_back('b');
    /// assert_eq!(vec.to_string(), "a b");
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).throw_alloc()
    }

    /// Appends `value`, returning an [`Err`] if the buffer was full and couldn't be grown. The
    /// Vector is unchanged on failure.
    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        self.try_grow_for(1)?;
        // SAFETY: try_grow_for(1) succeeded, so len < cap.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Appends `value` without checking the capacity.
    ///
    /// # Safety
    /// `len < cap` must hold beforehand, for example after a call to [`reserve`](Vector::reserve)
    /// or [`with_cap`](Vector::with_cap).
    pub const unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees a free slot at len, which is uninitialized.
        unsafe { self.buf.slot(self.len).write(value); }
        self.len += 1;
    }

    /// Removes the last element and returns it, or [`None`] if the Vector is empty.
    ///
    /// # Examples
    /// ```
    /// # use sequence_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// assert_eq!(vec.pop_back(), Some(2));
    /// assert_eq!(vec.pop_back(), Some(1));
    /// assert_eq!(vec.pop_back(), Some(0));
    /// assert_eq!(vec.pop_back(), None);
    /// ```
    pub const fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, the slot is no longer considered initialized.
            self.len -= 1;

            // SAFETY: The old last slot is initialized and is outside of [0, len) from here on, so
            // the value is moved out exactly once.
            Some(unsafe { self.buf.slot(self.len).read() })
        }
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary. An
    /// index equal to the length of the Vector appends the value.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use sequence_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(3, 300);
    /// vec.insert(6, 400);
    /// assert_eq!(&*vec, &[0, 200, 100, 300, 1, 2, 400]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw_alloc()
    }

    /// Inserts the provided value at the given index, returning an [`Err`] if the index is greater
    /// than the length or if the Vector needed to grow and couldn't. The Vector is unchanged on
    /// failure.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        self.check_position(index)?;
        self.try_grow_for(1)?;

        // SAFETY: index <= len < cap, so both the source range [index, len) and the destination
        // range [index + 1, len + 1) are within the allocation. ptr::copy handles the overlap.
        // Once shifted, the slot at index is logically uninitialized and is overwritten without
        // dropping.
        unsafe {
            let gap = self.buf.slot(index);
            ptr::copy(gap, gap.add(1), self.len - index);
            gap.write(value);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting every later element forward by one.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use sequence_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from(['s', 'p', 'a', 'r', 'e']);
    /// assert_eq!(vec.erase(1), 'p');
    /// assert_eq!(vec.erase(3), 'e');
    /// assert_eq!(vec.to_string(), "s a r");
    /// ```
    pub fn erase(&mut self, index: usize) -> T {
        self.try_erase(index).throw()
    }

    /// Removes the element at the provided index, returning an [`Err`] if the index is out of
    /// bounds.
    pub fn try_erase(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the slot is initialized. After reading it out, the following
        // len - index - 1 initialized values are shifted forward by one, all within the
        // allocation. The now duplicated last slot is forgotten by decrementing len.
        let value = unsafe {
            let gap = self.buf.slot(index);
            let value = gap.read();
            ptr::copy(gap.add(1), gap, self.len - index - 1);
            value
        };

        self.len -= 1;
        Ok(value)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, or an [`Err`] if it is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the value is initialized. The borrow is tied to &self.
        Ok(unsafe { &*self.buf.slot(index) })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, or an [`Err`] if it is out of
    /// bounds.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the value is initialized. The borrow is tied to &mut self.
        Ok(unsafe { &mut *self.buf.slot(index) })
    }

    /// Drops every element of the Vector, keeping the allocated buffer for reuse.
    ///
    /// # Examples
    /// ```
    /// # use sequence_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn clear(&mut self) {
        let len = self.len;
        // Forget the values before dropping them, so a panicking drop can only leak.
        self.len = 0;

        // SAFETY: The first len values were initialized and are no longer reachable through self.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr.as_ptr(), len));
        }
    }

    /// Makes room for at least `extra` more elements. If the buffer has to grow, it grows to
    /// exactly `len + extra`.
    ///
    /// # Panics
    /// Panics if `len + extra` elements would need more than [`isize::MAX`] bytes.
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw_alloc()
    }

    /// Makes room for at least `extra` more elements, returning an [`Err`] if the buffer can't be
    /// grown. The Vector is unchanged on failure.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), AllocError> {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if required <= self.cap() { return Ok(()); }

        self.try_realloc_with_cap(required)
    }

    /// Relocates the elements into a buffer that fits them exactly, freeing any spare capacity.
    ///
    /// # Panics
    /// Panics if the smaller buffer can't be allocated.
    pub fn shrink_to_fit(&mut self) {
        self.try_shrink_to_fit().throw_alloc()
    }

    /// Shrinks the Vector so that its capacity is equal to its length, returning an [`Err`] if the
    /// smaller buffer can't be allocated. The Vector is unchanged on failure.
    pub fn try_shrink_to_fit(&mut self) -> Result<(), AllocError> {
        self.try_realloc_with_cap(self.len)
    }

    /// Returns an iterator over references to every element.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.deref().iter()
    }

    /// Returns an iterator over mutable references to every element.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.deref_mut().iter_mut()
    }

    /// Grows the buffer, if required, so that `extra` more elements fit.
    ///
    /// The new capacity is the larger of the required capacity and the current capacity grown by
    /// half of itself, with [`MIN_CAP`] used as the first step from empty.
    pub(crate) fn try_grow_for(&mut self, extra: usize) -> Result<(), AllocError> {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if required <= self.cap() { return Ok(()); }

        let grown = match self.cap() {
            0 => MIN_CAP,
            cap => cap.saturating_add(cap / GROWTH_DIVISOR),
        };

        self.try_realloc_with_cap(cmp::max(required, grown))
    }

    /// Moves all elements into a new buffer with the provided capacity.
    pub(crate) fn try_realloc_with_cap(&mut self, new_cap: usize) -> Result<(), AllocError> {
        debug_assert!(new_cap >= self.len);
        // SAFETY: The first len values are initialized and len <= both capacities.
        unsafe { self.buf.try_relocate(new_cap, self.len) }
    }

    /// Checks that the provided index refers to an element of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds { index, len: self.len })
        } else {
            Ok(())
        }
    }

    /// Checks that the provided index is a valid insertion position, (including one past the end).
    pub(crate) const fn check_position(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            Err(IndexOutOfBounds { index, len: self.len })
        } else {
            Ok(())
        }
    }
}

impl<T: Clone> Vector<T> {
    /// Creates an element-wise copy of the Vector, with capacity equal to its length. Returns an
    /// [`Err`] if the new buffer can't be allocated.
    ///
    /// If cloning an element panics, every element copied so far is dropped and the new buffer is
    /// freed before unwinding continues. self is never modified.
    pub fn try_clone(&self) -> Result<Vector<T>, AllocError> {
        let mut vec = Vector::try_with_cap(self.len)?;

        for value in self.iter() {
            // SAFETY: vec has been created with enough capacity for every element of self.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        Ok(vec)
    }
}

impl<T> Container<T> for Vector<T> {
    type Iter<'a> = slice::Iter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        Vector::len(self)
    }

    fn clear(&mut self) {
        Vector::clear(self)
    }

    fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        Vector::try_push_back(self, value)
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), ContainerError> {
        Vector::try_insert(self, index, value)
    }

    fn try_erase(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        Vector::try_erase(self, index)
    }

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Vector::try_get(self, index)
    }

    fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Vector::try_get_mut(self, index)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        Vector::iter(self)
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        // Grows by the usual policy, so repeated small extends stay amortized.
        self.try_grow_for(iter.size_hint().0).throw_alloc();

        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push_back(item);
        }

        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    /// Creates a Vector with length and capacity `N`, containing the items of the array in order.
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: Slots [0, len) are initialized and are never touched again. The buffer itself
        // is freed afterwards when self.buf is dropped.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr.as_ptr(), self.len));
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: ptr is aligned and non-null (dangling only when nothing is read through it), the
        // first len slots are initialized, and the layout of the buffer already fits in isize::MAX
        // bytes. The slice borrows self, so it can't outlive or race a mutation.
        unsafe {
            slice::from_raw_parts(self.buf.ptr.as_ptr(), self.len)
        }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the exclusive borrow of self making the slice unique.
        unsafe {
            slice::from_raw_parts_mut(self.buf.ptr.as_ptr(), self.len)
        }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: A Vector is the only owner of its buffer, so moving it moves the elements with it.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: &Vector only gives out &T, and has no interior mutability of its own.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        self.try_clone().throw_alloc()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SpaceSeparated::new(self.iter()))
    }
}
