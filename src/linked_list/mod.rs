//! Owning linked lists.
//!
//! The list owns every node through a chain of `Box` links. The list itself
//! stands in for a sentinel node placed before the first element, so inserting
//! or erasing after the front goes through the same code path as anywhere
//! else in the list.
//!
//! # Examples
//!
//! ```
//! use single_linked_list::SingleLinkedList;
//!
//! let mut list = SingleLinkedList::from([1, 2, 3]);
//!
//! list.push_front(0);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//!
//! assert_eq!(list.pop_front(), Some(0));
//! assert_eq!(list.len(), 3);
//!
//! let inserted = list.begin_mut().insert_after(99).unwrap();
//! assert_eq!(inserted.current(), Some(&99));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 99, 2, 3]);
//!
//! let after = list.begin_mut().erase_after().unwrap();
//! assert_eq!(after.current(), Some(&2));
//! assert_eq!(list, SingleLinkedList::from([1, 2, 3]));
//!
//! assert!(SingleLinkedList::from([1, 2]) < list);
//! ```
pub mod single;
