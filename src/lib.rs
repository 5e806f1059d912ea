//! A singly linked list with a sentinel "before-begin" position, forward
//! iterators and cursors for O(1) insertion and removal after a position.
#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;

pub use error::AllocError;
pub use linked_list::single::{
    Cursor, CursorMut, IntoIter, Iter, IterMut, SingleLinkedList, swap,
};
