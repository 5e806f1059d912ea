use alloc::boxed::Box;
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem,
};

use super::{
    cursor::{Cursor, CursorMut},
    iter::{IntoIter, Iter, IterMut},
    node::{Link, Node},
};
use crate::error::AllocError;

/// An owning singly linked list.
///
/// The list acts as the sentinel node that precedes the first element: its
/// `head` slot is the successor of the before-begin position.
pub struct SingleLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SingleLinkedList<T> {
    /// Creates a new, empty list. Does not allocate.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements in the list. `O(1)`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` as the new first element. `O(1)`.
    pub fn push_front(&mut self, value: T) {
        self.link_front(Node::boxed(value));
    }

    /// Like [`push_front`](Self::push_front), but returns an error instead of
    /// aborting when the node cannot be allocated. On error the list is
    /// unchanged.
    pub fn try_push_front(&mut self, value: T) -> Result<(), AllocError> {
        self.link_front(Node::try_boxed(value)?);
        Ok(())
    }

    fn link_front(&mut self, mut node: Box<Node<T>>) {
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty. `O(1)`.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let (value, next) = (*node).into_parts();
            self.head = next;
            self.len -= 1;
            value
        })
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Removes every element. `O(n)`.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Exchanges the contents of two lists. `O(1)`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.len, &mut other.len);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.head, self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.head, self.len)
    }

    /// The position before the first element. It has no value and is only
    /// useful as an anchor for looking at or advancing to the head.
    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::before_begin(&self.head)
    }

    /// The position of the first element, or [`end`](Self::end) if the list is
    /// empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        self.before_begin() + 1
    }

    /// The position one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::end()
    }

    /// Mutable counterpart of [`before_begin`](Self::before_begin). Inserting
    /// after this position pushes to the front of the list.
    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::before_begin(&mut self.head, &mut self.len)
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let mut cursor = self.before_begin_mut();
        cursor.move_next();
        cursor
    }
}

/// Exchanges the contents of two lists. `O(1)`.
#[inline]
pub fn swap<T>(lhs: &mut SingleLinkedList<T>, rhs: &mut SingleLinkedList<T>) {
    lhs.swap(rhs);
}

impl<T> Drop for SingleLinkedList<T> {
    fn drop(&mut self) {
        // Unlink nodes one at a time; dropping the head box directly would
        // recurse once per node.
        self.clear();
    }
}

impl<T> Default for SingleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SingleLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        // `self` is only touched once every element has been cloned.
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T, const N: usize> From<[T; N]> for SingleLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = Self::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

impl<T> FromIterator<T> for SingleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SingleLinkedList<T> {
    /// Appends the items at the back of the list, in order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.before_begin_mut();
        tail.move_to_last();
        for value in iter {
            tail.link_after(Node::boxed(value));
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SingleLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for SingleLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SingleLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SingleLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for SingleLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SingleLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for SingleLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for SingleLinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for SingleLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SingleLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
