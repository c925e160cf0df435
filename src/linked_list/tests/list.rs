extern crate std;

use std::panic::{self, AssertUnwindSafe};
use std::vec;
use std::vec::Vec;

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::alloc::Layout;

use crate::linked_list::{
    error::ListError,
    list::SList,
    traits::{Link, NodeWithData},
};

fn values(list: &SList<&i32>) -> Vec<i32> {
    list.iter().map(|v| **v).collect()
}

#[test]
fn test_append_size_nth_last() {
    let (one, two, three) = (1, 2, 3);
    let mut list = SList::new();
    assert!(list.is_empty());
    assert_eq!(list.size(), 0);
    assert!(list.last().is_none());

    list.append(&one).unwrap();
    list.append(&two).unwrap();
    list.append(&three).unwrap();

    assert_eq!(list.size(), 3);
    assert_eq!(list.nth_data(1), Some(&&2));
    assert_eq!(**list.last().unwrap().data(), 3);
    assert!(list.last().unwrap().next_node().is_none());
    assert!(list.nth(3).is_none());
    assert!(list.nth_data(7).is_none());
    assert_eq!(values(&list), vec![1, 2, 3]);
}

#[test]
fn test_prepend_becomes_head() {
    let (a, b) = (10, 20);
    let mut list = SList::new();
    list.prepend(&a).unwrap();
    list.prepend(&b).unwrap();

    assert_eq!(**list.head().unwrap().data(), 20);
    assert_eq!(**list.head().unwrap().next_node().unwrap().data(), 10);
    assert_eq!(values(&list), vec![20, 10]);
}

#[test]
fn test_index_uses_identity() {
    let first = Box::new(7);
    let second = Box::new(7);
    let other = Box::new(7);

    let mut list = SList::new();
    list.append(&*first).unwrap();
    list.append(&*second).unwrap();

    assert_eq!(list.index(&&*second), Some(1));
    assert_eq!(list.index(&&*first), Some(0));
    assert_eq!(list.index(&&*other), None);
    assert!(!list.contains(&&*other));
    assert_eq!(list.nth_data(list.index(&&*second).unwrap()), Some(&&*second));
}

#[test]
fn test_remove_by_data() {
    let (a, b, c) = (1, 2, 3);
    let other = 3;
    let mut list = SList::new();
    list.append(&a).unwrap();
    list.append(&b).unwrap();
    list.append(&c).unwrap();

    // Remove middle
    let removed = list.remove_by_data(&&b);
    assert!(core::ptr::eq(removed.unwrap(), &b));
    assert_eq!(values(&list), vec![1, 3]);

    // Remove head
    assert!(list.remove_by_data(&&a).is_some());
    assert_eq!(values(&list), vec![3]);

    // Not found is a no-op
    assert!(list.remove_by_data(&&other).is_none());
    assert_eq!(values(&list), vec![3]);

    // Remove tail
    assert!(list.remove_by_data(&&c).is_some());
    assert!(list.is_empty());
    assert!(list.remove_by_data(&&c).is_none());
}

#[test]
fn test_remove_by_data_x_releases() {
    let a = Rc::new("a");
    let b = Rc::new("b");
    let mut list = SList::new();
    list.append(Rc::clone(&a)).unwrap();
    list.append(Rc::clone(&b)).unwrap();
    assert_eq!(Rc::strong_count(&b), 2);

    let mut released = vec![];
    assert!(list.remove_by_data_x(&b, |p: Rc<&'static str>| released.push(*p)));
    assert_eq!(released, vec!["b"]);
    assert_eq!(Rc::strong_count(&b), 1);

    assert!(!list.remove_by_data_x(&b, |p: Rc<&'static str>| released.push(*p)));
    assert_eq!(released, vec!["b"]);
    assert_eq!(list.size(), 1);
}

#[test]
fn test_remove_by_index() {
    let (a, b, c) = (1, 2, 3);
    let mut list = SList::new();
    list.append(&a).unwrap();
    list.append(&b).unwrap();
    list.append(&c).unwrap();

    assert_eq!(list.remove_by_index(1), Some(&b));
    assert_eq!(values(&list), vec![1, 3]);

    // Out of range is a no-op
    assert_eq!(list.remove_by_index(2), None);
    assert_eq!(list.remove_by_index(usize::MAX), None);
    assert_eq!(values(&list), vec![1, 3]);

    assert_eq!(list.remove_by_index(0), Some(&a));
    assert_eq!(values(&list), vec![3]);
}

#[test]
fn test_remove_by_index_x() {
    let mut list: SList<Box<u32>> = (0..4).map(Box::new).collect();
    let mut released = vec![];

    assert!(list.remove_by_index_x(3, |p: Box<u32>| released.push(*p)));
    assert!(list.remove_by_index_x(0, |p: Box<u32>| released.push(*p)));
    assert!(!list.remove_by_index_x(2, |p: Box<u32>| released.push(*p)));

    assert_eq!(released, vec![3, 0]);
    assert_eq!(list.iter().map(|b| **b).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_delete_all() {
    let nums = [5, 6, 7];
    let mut list: SList<&i32> = nums.iter().collect();
    assert_eq!(list.size(), 3);

    list.delete_all();
    assert!(list.is_empty());
    assert_eq!(list.size(), 0);

    // Deleting an empty list is fine, and the list is reusable afterwards
    list.delete_all();
    list.append(&nums[0]).unwrap();
    assert_eq!(list.size(), 1);
}

#[test]
fn test_delete_all_x_head_to_tail() {
    let mut list: SList<Box<u32>> = (1..=5).map(Box::new).collect();
    let mut released = vec![];
    list.delete_all_x(|p: Box<u32>| released.push(*p));
    assert_eq!(released, vec![1, 2, 3, 4, 5]);
    assert!(list.is_empty());
}

#[test]
fn test_delete_all_x_panicking_release_keeps_the_rest() {
    let items: Vec<Rc<u32>> = (0..5).map(Rc::new).collect();
    let mut list: SList<Rc<u32>> = items.iter().cloned().collect();

    let mut released = vec![];
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        list.delete_all_x(|p: Rc<u32>| {
            if *p == 2 {
                panic!("release failed");
            }
            released.push(*p);
        });
    }));

    assert!(result.is_err());
    assert_eq!(released, vec![0, 1]);
    // The payload handed to the panicking release was dropped by the unwind,
    // and its node freed; later nodes are untouched.
    assert_eq!(Rc::strong_count(&items[2]), 1);
    assert_eq!(list.iter().map(|p| **p).collect::<Vec<_>>(), vec![3, 4]);
}

#[test]
fn test_concat() {
    let nums = [1, 2, 3, 4];
    let mut first: SList<&i32> = nums[..2].iter().collect();
    let second: SList<&i32> = nums[2..].iter().collect();
    let (first_len, second_len) = (first.size(), second.size());

    first.concat(second);
    assert_eq!(first.size(), first_len + second_len);
    assert_eq!(values(&first), vec![1, 2, 3, 4]);
    assert!(first.last().unwrap().next().is_none());
}

#[test]
fn test_concat_with_empty_lists() {
    let nums = [1, 2];
    let mut empty = SList::new();
    empty.concat(nums.iter().collect());
    assert_eq!(values(&empty), vec![1, 2]);

    empty.concat(SList::new());
    assert_eq!(values(&empty), vec![1, 2]);
}

#[test]
fn test_insert_index() {
    let nums = [0, 1, 2, 3];
    let tail = 9;
    let mut list = SList::new();
    list.insert_index(&nums[1], 0).unwrap();
    list.insert_index(&nums[0], 0).unwrap();
    list.insert_index(&nums[3], 2).unwrap();
    list.insert_index(&nums[2], 2).unwrap();
    assert_eq!(values(&list), vec![0, 1, 2, 3]);

    // Past the end clamps to an append
    list.insert_index(&tail, 100).unwrap();
    assert_eq!(values(&list), vec![0, 1, 2, 3, 9]);
    assert_eq!(list.index(&&tail), Some(4));
}

#[test]
fn test_pop_front_and_drop() {
    let counter = Rc::new(());
    let mut list = SList::new();
    for _ in 0..3 {
        list.append(Rc::clone(&counter)).unwrap();
    }
    assert_eq!(Rc::strong_count(&counter), 4);

    assert!(list.pop_front().is_some());
    assert_eq!(Rc::strong_count(&counter), 3);

    drop(list);
    assert_eq!(Rc::strong_count(&counter), 1);
}

#[test]
fn test_error_display() {
    let layout = Layout::from_size_align(16, 8).unwrap();
    let err = ListError::AllocFailed(layout);
    assert_eq!(
        std::format!("{}", err),
        "failed to allocate a list node of 16 bytes (align 8)"
    );
    #[cfg(feature = "locked")]
    assert_eq!(std::format!("{}", ListError::Busy), "list is locked");
}

#[test]
fn test_debug_format() {
    let list: SList<u8> = [1u8, 2, 3].into_iter().collect();
    assert_eq!(std::format!("{:?}", list), "[1, 2, 3]");
}
