extern crate std;

use std::vec;

use super::values;
use crate::linked_list::single::SingleLinkedList;

#[test]
fn test_front_and_after_edits() {
    let mut list = SingleLinkedList::from([1, 2, 3]);

    list.push_front(0);
    assert_eq!(values(&list), vec![0, 1, 2, 3]);

    list.pop_front();
    assert_eq!(values(&list), vec![1, 2, 3]);

    let inserted = list.begin_mut().insert_after(99).unwrap();
    assert_eq!(inserted.current(), Some(&99));
    assert_eq!(inserted.peek_next(), Some(&2));
    assert_eq!(values(&list), vec![1, 99, 2, 3]);
    assert_eq!(list.len(), 4);

    let after = list.begin_mut().erase_after().unwrap();
    assert_eq!(after.current(), Some(&2));
    assert_eq!(values(&list), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_insert_after_before_begin() {
    let mut list = SingleLinkedList::from([2, 3]);

    let inserted = list.before_begin_mut().insert_after(1).unwrap();
    assert!(!inserted.is_before_begin());
    assert_eq!(inserted.current(), Some(&1));

    assert_eq!(list.begin().current(), Some(&1));
    assert_eq!(values(&list), vec![1, 2, 3]);

    let mut empty = SingleLinkedList::new();
    empty.before_begin_mut().insert_after("only").unwrap();
    assert_eq!(empty.begin().current(), Some(&"only"));
    assert_eq!(empty.len(), 1);
}

#[test]
fn test_insert_after_end_is_rejected() {
    let mut list = SingleLinkedList::from([1]);

    let mut cursor = list.begin_mut();
    cursor.move_next();
    assert!(cursor.is_end());
    assert!(cursor.insert_after(5).is_none());

    assert_eq!(values(&list), vec![1]);
    assert_eq!(list.len(), 1);

    let mut empty = SingleLinkedList::<i32>::new();
    assert!(empty.begin_mut().is_end());
    assert!(empty.begin_mut().insert_after(1).is_none());
    assert!(empty.is_empty());
}

#[test]
fn test_try_insert_after() {
    let mut list = SingleLinkedList::from([1, 3]);

    let inserted = list.begin_mut().try_insert_after(2).unwrap().unwrap();
    assert_eq!(inserted.current(), Some(&2));
    assert_eq!(values(&list), vec![1, 2, 3]);

    let mut cursor = list.begin_mut();
    cursor.advance_by(3);
    assert_eq!(cursor.try_insert_after(4).map(|cursor| cursor.is_some()), Ok(false));
    assert_eq!(list.len(), 3);
}

#[test]
fn test_build_by_chaining_inserts() {
    let mut list = SingleLinkedList::new();

    let mut cursor = list.before_begin_mut();
    for value in 1..=4 {
        cursor = cursor.insert_after(value).unwrap();
    }
    assert_eq!(cursor.current(), Some(&4));
    assert_eq!(cursor.peek_next(), None);

    assert_eq!(values(&list), vec![1, 2, 3, 4]);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_erase_before_last_returns_end() {
    let mut list = SingleLinkedList::from([1, 2, 3]);

    let mut cursor = list.begin_mut();
    cursor.move_next();
    assert_eq!(cursor.current(), Some(&2));

    let after = cursor.erase_after().unwrap();
    assert!(after.is_end());
    assert_eq!(after.current(), None);
    assert!(after.as_cursor().is_end());

    assert_eq!(values(&list), vec![1, 2]);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_erase_after_without_successor() {
    let mut list = SingleLinkedList::from([1, 2]);

    let mut last = list.begin_mut();
    last.move_next();
    assert!(last.erase_after().is_none());

    let mut end = list.begin_mut();
    end.advance_by(2);
    assert!(end.is_end());
    assert!(end.erase_after().is_none());

    assert_eq!(values(&list), vec![1, 2]);
    assert_eq!(list.len(), 2);

    let mut empty = SingleLinkedList::<i32>::new();
    assert!(empty.before_begin_mut().erase_after().is_none());
    assert!(empty.is_empty());
}

#[test]
fn test_erase_after_before_begin() {
    let mut list = SingleLinkedList::from([1, 2]);

    let head = list.before_begin_mut().erase_after().unwrap();
    assert_eq!(head.current(), Some(&2));
    assert_eq!(values(&list), vec![2]);

    let end = list.before_begin_mut().erase_after().unwrap();
    assert!(end.is_end());
    assert!(list.is_empty());
}

#[test]
fn test_remove_after_keeps_position() {
    let mut list = SingleLinkedList::from([1, 2, 3, 4]);

    let mut cursor = list.begin_mut();
    assert_eq!(cursor.remove_after(), Some(2));
    assert_eq!(cursor.current(), Some(&1));
    assert_eq!(cursor.remove_after(), Some(3));
    assert_eq!(cursor.peek_next(), Some(&4));
    assert_eq!(cursor.remove_after(), Some(4));
    assert_eq!(cursor.remove_after(), None);

    assert_eq!(values(&list), vec![1]);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_cursor_mut_edits_values() {
    let mut list = SingleLinkedList::from([1, 2, 3]);

    let mut cursor = list.begin_mut();
    *cursor.current_mut().unwrap() = 10;
    *cursor.peek_next_mut().unwrap() = 20;
    cursor.move_next();
    cursor.move_next();
    if let Some(value) = cursor.into_current() {
        *value = 30;
    }

    assert_eq!(values(&list), vec![10, 20, 30]);
}

#[test]
fn test_cursor_positions() {
    let list = SingleLinkedList::from([1, 2, 3]);

    let before = list.before_begin();
    assert!(before.is_before_begin());
    assert_eq!(before.current(), None);
    assert_eq!(before.peek_next(), Some(&1));

    assert_eq!(list.begin(), list.begin());
    assert_ne!(before, list.begin());
    assert_eq!(before + 1, list.begin());
    assert_eq!(list.begin() + 3, list.end());
    assert_ne!(list.begin() + 2, list.end());

    let mut cursor = list.begin();
    cursor += 2;
    assert_eq!(cursor.current(), Some(&3));
    assert_eq!(cursor.peek_next(), None);
    assert!(!cursor.is_end());

    // Advancing returns a new position and leaves the original alone.
    let begin = list.begin();
    let third = begin + 2;
    assert_eq!(begin.current(), Some(&1));
    assert_eq!(third.current(), Some(&3));

    let end = list.end();
    assert!(end.is_end());
    assert!(!end.is_before_begin());
    assert_eq!(end.current(), None);
}

#[test]
fn test_cursor_identity_across_lists() {
    let lhs = SingleLinkedList::from([1]);
    let rhs = SingleLinkedList::from([1]);
    assert_ne!(lhs.begin(), rhs.begin());
    assert_eq!(lhs.end(), rhs.end());

    let empty = SingleLinkedList::<i32>::new();
    assert_eq!(empty.begin(), empty.end());
    assert_ne!(empty.before_begin(), empty.end());
}

#[test]
#[should_panic(expected = "past the end")]
fn test_cursor_cannot_advance_past_end() {
    let list = SingleLinkedList::from([1]);
    let _ = list.begin() + 2;
}

#[test]
#[should_panic(expected = "past the end")]
fn test_cursor_mut_cannot_advance_past_end() {
    let mut list = SingleLinkedList::<i32>::new();
    let mut cursor = list.begin_mut();
    cursor.move_next();
}
