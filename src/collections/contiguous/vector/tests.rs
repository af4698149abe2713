#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;
use std::mem;

use super::*;
use crate::util::alloc::{CountedDrop, PanicOnClone, ZeroSizedType};
use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::SpaceSeparated;
use crate::util::panic::assert_panics;

#[test]
fn test_growth_policy() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    let mut caps = Vector::new();
    for i in 0..10 {
        vec.push_back(i);
        caps.push_back(vec.cap());
    }

    assert_eq!(
        *caps,
        [1, 2, 3, 4, 6, 6, 9, 9, 9, 13],
        "Capacity should start at 1 and grow by half of itself, or to the required size."
    );

    vec.reserve(10);
    assert_eq!(vec.cap(), 20, "Reserving should grow to exactly the required capacity.");

    vec.reserve(5);
    assert_eq!(vec.cap(), 20, "Reserving within the current capacity shouldn't reallocate.");
}

#[test]
fn test_extend_growth_policy() {
    let mut vec = Vector::from([0, 1, 2, 3]);
    assert_eq!(vec.cap(), 4);

    let mut caps = Vector::new();
    for i in 4..10 {
        vec.extend([i]);
        caps.push_back(vec.cap());
    }

    assert_eq!(
        *caps,
        [6, 6, 9, 9, 9, 13],
        "Extending one element at a time should grow like push_back, not to an exact fit."
    );
    assert_eq!(*vec, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    vec.extend(10..30);
    assert_eq!(vec.cap(), 30, "A hint larger than the grown capacity should be used as is.");
}

#[test]
fn test_insert_and_erase() {
    let mut vec = Vector::from([0, 1, 2, 3]);

    vec.insert(0, 10);
    vec.insert(3, 20);
    vec.insert(vec.len(), 30);
    assert_eq!(*vec, [10, 0, 1, 20, 2, 3, 30]);

    assert_eq!(vec.erase(3), 20, "Erase should return the removed element.");
    assert_eq!(vec.erase(0), 10);
    assert_eq!(vec.erase(vec.len() - 1), 30);
    assert_eq!(
        *vec,
        [0, 1, 2, 3],
        "Inserting then erasing at the same positions should restore the sequence."
    );
}

#[test]
fn test_bounds() {
    let mut vec: Vector<u8> = Vector::new();

    assert_eq!(vec.try_get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(vec.try_erase(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert!(
        vec.try_insert(1, 0).is_err_and(|e| e.is_index_out_of_bounds()),
        "Inserting past the end should fail."
    );
    assert!(vec.try_insert(0, 0).is_ok(), "Inserting at the end should append.");

    assert_eq!(vec.try_erase(1), Err(IndexOutOfBounds { index: 1, len: 1 }));
    assert_eq!(vec.len(), 1, "A failed erase shouldn't change the length.");

    assert_panics!({
        let vec = Vector::from([1, 2, 3]);
        let _ = vec[3];
    });
    assert_panics!({
        let mut vec = Vector::from([1, 2, 3]);
        vec.insert(4, 4);
    });
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new(0);
    let mut vec = Vector::from_iter(iter::repeat_with(|| counter.clone()).take(10));
    let cap = vec.cap();

    vec.clear();
    assert_eq!(counter.take(), 10, "Clearing should drop every element.");
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), cap, "Clearing should keep the buffer.");

    vec.clear();
    assert_eq!(counter.take(), 0, "Clearing an empty Vector should drop nothing.");
    assert!(vec.is_empty(), "Clearing twice should leave the Vector empty.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut vec = Vector::from_iter(iter::repeat_with(|| counter.clone()).take(10));

    drop(vec.erase(4));
    assert_eq!(counter.take(), 1, "Only the erased element should have been dropped.");

    drop(vec);
    assert_eq!(counter.take(), 9, "9 elements should have been dropped.");
}

#[test]
fn test_reserve_failure_preserves_state() {
    let mut vec = Vector::<u16>::from([1, 2, 3]);
    let ptr = vec.buf.ptr;

    assert!(
        vec.try_reserve(usize::MAX).is_err_and(|e| e.is_capacity_overflow()),
        "A length overflow should be reported as a capacity overflow."
    );
    assert!(
        vec.try_reserve(isize::MAX as usize).is_err_and(|e| e.is_capacity_overflow()),
        "A layout larger than isize::MAX bytes should be reported as a capacity overflow."
    );

    assert_eq!(*vec, [1, 2, 3], "A failed reservation shouldn't touch the elements.");
    assert_eq!(vec.cap(), 3, "A failed reservation shouldn't change the capacity.");
    assert_eq!(vec.buf.ptr, ptr, "A failed reservation shouldn't replace the buffer.");

    let mut vec = Vector::<u8>::from([1, 2, 3]);
    assert!(
        vec.try_reserve(isize::MAX as usize - 3).is_err_and(|e| e.is_alloc_failure()),
        "The allocator can't provide isize::MAX bytes."
    );
    assert_eq!(*vec, [1, 2, 3]);
    assert_eq!(vec.cap(), 3);
}

#[test]
fn test_clone() {
    let mut a = Vector::from([1, 2, 3]);
    a.reserve(10);

    let mut b = a.clone();
    assert_eq!(a, b, "A clone should be equal to the original.");
    assert_eq!(b.cap(), 3, "A clone should have capacity equal to its length.");

    a.push_back(4);
    b[0] = 100;
    assert_eq!(*a, [1, 2, 3, 4], "Mutating a clone shouldn't change the original.");
    assert_eq!(*b, [100, 2, 3], "Mutating the original shouldn't change a clone.");
}

#[test]
fn test_clone_panic() {
    let counter = CountedDrop::new(0);
    let vec = Vector::from([
        PanicOnClone::new(false, &counter),
        PanicOnClone::new(false, &counter),
        PanicOnClone::new(true, &counter),
        PanicOnClone::new(false, &counter),
    ]);

    assert_panics!({
        let _ = vec.clone();
    });

    assert_eq!(
        counter.take(),
        2,
        "Elements cloned before the panic should be dropped during unwinding."
    );
    assert_eq!(vec.len(), 4, "The original should be unchanged.");
    assert!(vec[2].poisoned);

    drop(vec);
    assert_eq!(counter.take(), 4);
}

#[test]
fn test_take() {
    let mut a = Vector::from([1, 2, 3]);
    let b = mem::take(&mut a);

    assert_eq!(*b, [1, 2, 3]);
    assert!(a.is_empty(), "A taken Vector should be left empty.");
    assert_eq!(a.cap(), 0);
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push_back(ZeroSizedType);
    }

    assert_eq!(vec.len(), 10);
    assert_eq!(vec[9], ZeroSizedType, "Indexing should work for ZSTs.");
    assert_eq!(vec.erase(3), ZeroSizedType);
    assert_eq!(vec.iter().count(), 9, "Should iterate over the right number of ZST instances.");
}

#[test]
fn test_shrink_to_fit() {
    let mut vec = Vector::with_cap(10);
    vec.extend(0..4);

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 4);
    assert_eq!(*vec, [0, 1, 2, 3], "Shrinking shouldn't change the contents.");

    vec.clear();
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 0, "Shrinking an empty Vector should free the buffer.");
}

#[test]
fn test_iterators() {
    let mut vec = Vector::from([0_usize, 1, 2, 3, 4]);

    for i in vec.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*vec, [0, 2, 4, 6, 8], "Vector mutated by iterator should equal this slice.");

    let mut iter = vec.clone().into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new(0);
    let vec = Vector::from_iter(iter::repeat_with(|| counter.clone()).take(10));

    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.take(), 2);

    drop(iter);
    assert_eq!(counter.take(), 8, "Dropping an owned iterator should drop the remaining elements.");
}

#[test]
fn test_equality_and_hash() {
    let vec = Vector::from([0_usize, 1, 2, 3, 4]);

    assert_eq!(vec, (0..5).collect(), "Different construction methods should produce equal results.");
    assert_ne!(vec, Vector::from([0, 1, 2, 5, 4]));

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&vec),
        state.hash_one([0_usize, 1, 2, 3, 4].as_slice()),
        "Vectors should hash the same as the equivalent slice."
    );
}

#[test]
fn test_display() {
    assert_eq!(Vector::from([0, 1, 2]).to_string(), "0 1 2");
    assert_eq!(Vector::from([7]).to_string(), "7");
    assert_eq!(Vector::<u8>::new().to_string(), "");

    let vec = Vector::from([3, 4, 5]);
    let shown = SpaceSeparated::new(vec.iter());
    assert_eq!(shown.to_string(), "3 4 5");
    assert_eq!(shown.to_string(), "3 4 5", "Formatting the same value twice should render it twice.");
    assert_eq!(format!("{vec} | {vec}"), "3 4 5 | 3 4 5");
}
