//! # Singly Linked List
//!
//! ## Core Components
//!
//! - [`list::SingleLinkedList`]: the owning list and its O(1) front operations.
//! - [`cursor::Cursor`] and [`cursor::CursorMut`]: positions in a list, including
//!   the before-begin position. `CursorMut` carries `insert_after` and
//!   `erase_after`.
//! - [`iter`]: borrowing and owning forward iterators.
//!
//! ## Positions
//!
//! A cursor is at one of three kinds of position:
//!
//! - before-begin: has no value, its successor is the head of the list;
//! - an element;
//! - end: one past the last element, has neither a value nor a successor.
//!
//! Cursors borrow the list, so a position can never outlive a structural
//! change made through another handle.

pub mod cursor;
pub mod iter;
pub mod list;
mod node;

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::{SingleLinkedList, swap};

#[cfg(test)]
mod tests;
