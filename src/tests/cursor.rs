extern crate std;

use std::vec;
use std::vec::Vec;

use core::ptr::NonNull;

use crate::entry::EntryLinkAnchor;
use crate::{Entry, List};

#[test]
fn cursor_walks_slot_by_slot() {
    let mut list: List<EntryLinkAnchor<i32>> = List::new();
    let mut entries: Vec<Entry<i32>> = (1..=3).map(Entry::new).collect();
    for entry in entries.iter_mut() {
        list.push_back(NonNull::from(entry));
    }

    unsafe {
        let mut cursor = list.cursor();
        for expected in 1..=3 {
            let record = cursor.value().unwrap();
            assert_eq!(*record.as_ref().data(), expected);
            cursor.advance();
        }
        assert!(cursor.value().is_none());
    }
}

#[test]
fn cursor_on_an_empty_list() {
    let list: List<EntryLinkAnchor<i32>> = List::new();
    unsafe {
        let cursor = list.cursor();
        assert!(cursor.value().is_none());
    }
}

#[test]
fn iter_visits_every_record_once() {
    let mut list: List<EntryLinkAnchor<i32>> = List::new();
    let mut node1 = Entry::new(1);
    let mut node2 = Entry::new(2);
    let mut node3 = Entry::new(3);

    list.push(NonNull::from(&mut node1));
    list.push(NonNull::from(&mut node2));
    list.push(NonNull::from(&mut node3));

    let mut values = vec![];
    unsafe {
        for entry in list.iter() {
            values.push(*entry.as_ref().data());
        }
    }
    assert_eq!(values, vec![3, 2, 1]);
}

#[test]
fn for_each_visits_in_order_and_can_mutate() {
    let mut list: List<EntryLinkAnchor<i32>> = List::new();
    let mut entries: Vec<Entry<i32>> = (1..=4).map(Entry::new).collect();
    for entry in entries.iter_mut() {
        list.push_back(NonNull::from(entry));
    }

    let mut seen = vec![];
    list.for_each(|entry| {
        seen.push(*entry.data());
        *entry.data_mut() *= 10;
    });
    assert_eq!(seen, vec![1, 2, 3, 4]);

    let mut after = vec![];
    unsafe {
        for entry in list.iter() {
            after.push(*entry.as_ref().data());
        }
    }
    assert_eq!(after, vec![10, 20, 30, 40]);
}
