use std::iter::FusedIterator;
use std::mem;
use std::ptr;
use std::slice;

use super::Vector;
use crate::collections::contiguous::RawBuf;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // SAFETY: The buffer is read out of self, which is then forgotten, so ownership of the
        // allocation and all len initialized values passes to the iterator.
        let buf = unsafe { ptr::read(&self.buf) };
        let end = self.len;
        mem::forget(self);

        IntoIter {
            buf,
            start: 0,
            end,
        }
    }
}

/// An owned type for owned iteration over a [`Vector`]. See [`Vector::into_iter`].
pub struct IntoIter<T> {
    pub(crate) buf: RawBuf<T>,
    // Values in [start, end) are initialized and yet to be yielded.
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end, so the slot is initialized and hasn't been yielded yet. The
            // increment below means it will never be read again.
            let value = unsafe { self.buf.slot(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: end has just been decremented, so the slot is initialized and won't be read
            // again.
            Some(unsafe { self.buf.slot(self.end).read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Values in [start, end) are initialized and haven't been yielded, so they are
        // still owned by the iterator. The buffer itself is freed when self.buf is dropped.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.slot(self.start),
                self.end - self.start,
            ));
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
