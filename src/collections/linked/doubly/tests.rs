#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;
use std::mem;

use super::*;
use crate::util::alloc::{CountedDrop, PanicOnClone, ZeroSizedType};
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop() {
    let mut list = DoublyLinkedList::new();
    list.push_back(1);
    list.push_back(2);
    list.push_front(0);
    list.verify_double_links();

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&0));
    assert_eq!(list.back(), Some(&2));

    assert_eq!(list.pop_back(), Some(2));
    list.verify_double_links();
    assert_eq!(list.pop_front(), Some(0));
    list.verify_double_links();
    assert_eq!(list.front(), list.back(), "A single node should be both the head and the tail.");

    assert_eq!(list.pop_back(), Some(1));
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());

    list.push_front(5);
    list.verify_double_links();
    assert_eq!(list.back(), Some(&5), "Pushing to the front of an empty list should set the tail.");
}

#[test]
fn test_insert_and_erase() {
    let mut list = DoublyLinkedList::from([0, 1, 2, 3]);

    list.insert(2, 20);
    list.verify_double_links();
    list.insert(0, 10);
    list.verify_double_links();
    list.insert(list.len(), 30);
    list.verify_double_links();
    assert_eq!(list, DoublyLinkedList::from([10, 0, 1, 20, 2, 3, 30]));

    assert_eq!(list.erase(3), 20);
    list.verify_double_links();
    assert_eq!(list.erase(0), 10);
    list.verify_double_links();
    assert_eq!(list.erase(list.len() - 1), 30);
    list.verify_double_links();
    assert_eq!(
        list,
        DoublyLinkedList::from([0, 1, 2, 3]),
        "Inserting then erasing at the same positions should restore the sequence."
    );
    assert_eq!(list.back(), Some(&3));
}

#[test]
fn test_seek_from_both_ends() {
    let mut list: DoublyLinkedList<_> = (0..11).collect();

    for i in 0..11 {
        assert_eq!(list[i], i, "Seeking from either end should reach the same node.");
    }

    // Positions in the back half are reached from the tail.
    list.insert(8, 80);
    list.verify_double_links();
    assert_eq!(list.erase(9), 8);
    list.verify_double_links();
    assert_eq!(list.erase(2), 2);
    list.verify_double_links();

    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [0, 1, 3, 4, 5, 6, 7, 80, 9, 10]
    );
    assert_eq!(
        list.iter().rev().copied().collect::<Vec<_>>(),
        [10, 9, 80, 7, 6, 5, 4, 3, 1, 0],
        "The back links should mirror the forward links."
    );
}

#[test]
fn test_seek_fwd_and_bwd() {
    let list: DoublyLinkedList<_> = (0..7).collect();
    let ListState::Full(contents) = &list.state else {
        panic!("A list with elements should be full.");
    };

    for i in 0..7 {
        assert_eq!(contents.seek_fwd(i).value(), &i, "Walking forward should start at the head.");
        assert_eq!(contents.seek_bwd(i).value(), &(6 - i), "Walking backward should start at the tail.");
        assert!(contents.seek(i) == contents.seek_fwd(i), "Both walks should reach the same node.");
    }
}

#[test]
fn test_bounds() {
    let mut list: DoublyLinkedList<u8> = DoublyLinkedList::new();

    assert_eq!(list.try_get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(list.try_erase(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert!(list.try_insert(1, 0).is_err_and(|e| e.is_index_out_of_bounds()));
    assert!(list.try_insert(0, 0).is_ok(), "Inserting at the end should append.");

    assert_eq!(list.try_erase(1), Err(IndexOutOfBounds { index: 1, len: 1 }));
    assert_eq!(list.len(), 1, "A failed erase shouldn't change the length.");

    assert_panics!({
        let list = DoublyLinkedList::from([1, 2, 3]);
        let _ = list[3];
    });
    assert_panics!({
        let mut list = DoublyLinkedList::from([1, 2, 3]);
        list.erase(3);
    });
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new(0);
    let mut list: DoublyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(list.erase(5));
    assert_eq!(counter.take(), 1, "Only the erased element should have been dropped.");

    list.clear();
    assert_eq!(counter.take(), 9, "Clearing should drop every element.");
    list.clear();
    assert!(list.is_empty(), "Clearing twice should leave the list empty.");

    let list: DoublyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = list.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.take(), 2);

    drop(iter);
    assert_eq!(counter.take(), 8, "Dropping an owned iterator should drop the remaining elements.");
}

#[test]
fn test_clone() {
    let mut a = DoublyLinkedList::from([1, 2, 3]);
    let mut b = a.clone();
    assert_eq!(a, b);
    b.verify_double_links();

    a.push_front(0);
    b.erase(1);
    assert_eq!(a, DoublyLinkedList::from([0, 1, 2, 3]), "Mutating a clone shouldn't change the original.");
    assert_eq!(b, DoublyLinkedList::from([1, 3]), "Mutating the original shouldn't change a clone.");

    let counter = CountedDrop::new(0);
    let list = DoublyLinkedList::from([
        PanicOnClone::new(false, &counter),
        PanicOnClone::new(false, &counter),
        PanicOnClone::new(true, &counter),
    ]);

    assert_panics!({
        let _ = list.clone();
    });
    assert_eq!(counter.take(), 2, "The partial clone should be dropped during unwinding.");
    assert_eq!(list.len(), 3);
    list.verify_double_links();
}

#[test]
fn test_take() {
    let mut a = DoublyLinkedList::from([1, 2, 3]);
    let b = mem::take(&mut a);

    assert_eq!(b, DoublyLinkedList::from([1, 2, 3]));
    assert!(a.is_empty(), "A taken list should be left empty.");
    assert_eq!(a.back(), None);

    a.push_back(4);
    a.verify_double_links();
    assert_eq!(a.len(), 1, "A taken list should still be usable.");
}

#[test]
fn test_iterators() {
    let mut list = DoublyLinkedList::from([1, 2, 3, 4]);

    for i in list.iter_mut() {
        *i *= 10;
    }

    let mut iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&10));
    assert_eq!(iter.next_back(), Some(&40));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next_back(), Some(&30));
    assert_eq!(iter.next(), Some(&20));
    assert_eq!(iter.next(), None, "The two ends shouldn't cross over.");
    assert_eq!(iter.next_back(), None);

    let mut iter = list.iter_mut();
    *iter.next_back().unwrap() = 0;
    assert_eq!(list.back(), Some(&0));

    assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), [0, 30, 20, 10]);
}

#[test]
fn test_zst_support() {
    let mut list = DoublyLinkedList::new();
    for _ in 0..10 {
        list.push_back(ZeroSizedType);
    }
    list.verify_double_links();

    assert_eq!(list.len(), 10);
    assert_eq!(list.erase(4), ZeroSizedType);
    assert_eq!(list.iter().count(), 9, "Should iterate over the right number of ZST instances.");
}

#[test]
fn test_equality_and_hash() {
    let list = DoublyLinkedList::from([0_usize, 1, 2]);
    let state = RandomState::new();

    assert_eq!(list, (0..3).collect());
    assert_ne!(list, DoublyLinkedList::from([0, 1]));
    assert_eq!(
        state.hash_one(&list),
        state.hash_one(list.clone()),
        "Equal lists should hash equally."
    );
}

#[test]
fn test_display() {
    assert_eq!(DoublyLinkedList::from([0, 1, 2]).to_string(), "0 1 2");
    assert_eq!(DoublyLinkedList::<u8>::new().to_string(), "");
    assert_eq!(
        format!("{:?}", DoublyLinkedList::from([1, 2])),
        "DoublyLinkedList { contents: [1, 2], len: 2 }"
    );
}
