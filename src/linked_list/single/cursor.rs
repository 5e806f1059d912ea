use alloc::boxed::Box;
use core::{
    fmt,
    ops::{Add, AddAssign},
    ptr,
};

use log::trace;

use super::node::{Link, Node};
use crate::error::AllocError;

/// A read-only position in a [`SingleLinkedList`](super::SingleLinkedList).
///
/// Both cursor types store the same two things: the value at the position,
/// if there is one, and the link to the next node. The end position has
/// neither.
///
/// Two cursors are equal when they refer to the same position of the same
/// list, or when both are at the end.
pub struct Cursor<'a, T> {
    current: Option<&'a T>,
    next: Option<&'a Link<T>>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn before_begin(head: &'a Link<T>) -> Self {
        Self {
            current: None,
            next: Some(head),
        }
    }

    pub(crate) const fn end() -> Self {
        Self {
            current: None,
            next: None,
        }
    }

    /// The element at this position, or `None` at before-begin and end.
    #[inline]
    pub fn current(&self) -> Option<&'a T> {
        self.current
    }

    /// The element after this position, without moving.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.next
            .and_then(|link| link.as_deref())
            .map(|node| &node.value)
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.next.is_none()
    }

    #[inline]
    pub fn is_before_begin(&self) -> bool {
        self.current.is_none() && self.next.is_some()
    }

    /// Moves to the next position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn move_next(&mut self) {
        let Some(link) = self.next else {
            panic!("cannot advance a cursor past the end of the list");
        };
        match link.as_deref() {
            Some(node) => {
                self.current = Some(&node.value);
                self.next = Some(&node.next);
            }
            None => {
                self.current = None;
                self.next = None;
            }
        }
    }

    /// Moves `n` positions forward.
    ///
    /// # Panics
    ///
    /// Panics if that would go past the end.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.move_next();
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.next, other.next) {
            (Some(lhs), Some(rhs)) => ptr::eq(lhs, rhs),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> Add<usize> for Cursor<'_, T> {
    type Output = Self;

    /// Returns the position `n` steps further on.
    fn add(mut self, n: usize) -> Self {
        self.advance_by(n);
        self
    }
}

impl<T> AddAssign<usize> for Cursor<'_, T> {
    fn add_assign(&mut self, n: usize) {
        self.advance_by(n);
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.current).finish()
    }
}

/// A position in a [`SingleLinkedList`](super::SingleLinkedList) that can
/// edit the list after itself.
///
/// The structural operations consume the cursor and hand back the cursor at
/// the resulting position, or `None` when the position has nothing after it
/// to work with.
pub struct CursorMut<'a, T> {
    current: Option<&'a mut T>,
    next: Option<&'a mut Link<T>>,
    len: &'a mut usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn before_begin(head: &'a mut Link<T>, len: &'a mut usize) -> Self {
        Self {
            current: None,
            next: Some(head),
            len,
        }
    }

    #[inline]
    pub fn current(&self) -> Option<&T> {
        self.current.as_deref()
    }

    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.current.as_deref_mut()
    }

    /// Turns the cursor into a reference to its element, for the lifetime of
    /// the list borrow.
    pub fn into_current(self) -> Option<&'a mut T> {
        self.current
    }

    pub fn peek_next(&self) -> Option<&T> {
        self.next
            .as_deref()
            .and_then(|link| link.as_deref())
            .map(|node| &node.value)
    }

    pub fn peek_next_mut(&mut self) -> Option<&mut T> {
        self.next
            .as_deref_mut()
            .and_then(|link| link.as_deref_mut())
            .map(|node| &mut node.value)
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.next.is_none()
    }

    #[inline]
    pub fn is_before_begin(&self) -> bool {
        self.current.is_none() && self.next.is_some()
    }

    /// A read-only view of this position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            current: self.current.as_deref(),
            next: self.next.as_deref(),
        }
    }

    /// Moves to the next position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn move_next(&mut self) {
        let Some(link) = self.next.take() else {
            panic!("cannot advance a cursor past the end of the list");
        };
        match link.as_deref_mut() {
            Some(Node { value, next }) => {
                self.current = Some(value);
                self.next = Some(next);
            }
            None => self.current = None,
        }
    }

    /// Moves `n` positions forward.
    ///
    /// # Panics
    ///
    /// Panics if that would go past the end.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.move_next();
        }
    }

    /// Inserts `value` after this position and returns the cursor at the new
    /// element. `O(1)`.
    ///
    /// At the end position nothing is inserted, `value` is dropped and `None`
    /// is returned.
    pub fn insert_after(mut self, value: T) -> Option<Self> {
        if self.is_end() {
            trace!("insert_after rejected: cursor is at the end of the list");
            return None;
        }
        self.link_after(Node::boxed(value));
        Some(self)
    }

    /// Like [`insert_after`](Self::insert_after), but returns an error instead
    /// of aborting when the node cannot be allocated. On error the list is
    /// unchanged.
    pub fn try_insert_after(mut self, value: T) -> Result<Option<Self>, AllocError> {
        if self.is_end() {
            trace!("try_insert_after rejected: cursor is at the end of the list");
            return Ok(None);
        }
        self.link_after(Node::try_boxed(value)?);
        Ok(Some(self))
    }

    /// Removes the element after this position and returns the cursor at the
    /// element that now follows, which is the end position if the removed
    /// element was the last one. `O(1)`.
    ///
    /// Returns `None` at the end position and at the last element.
    pub fn erase_after(mut self) -> Option<Self> {
        self.remove_after()?;
        self.move_next();
        Some(self)
    }

    /// Unlinks the element after this position and returns it, leaving the
    /// cursor where it is. `O(1)`.
    pub fn remove_after(&mut self) -> Option<T> {
        let Some(link) = self.next.as_deref_mut() else {
            trace!("remove_after rejected: cursor is at the end of the list");
            return None;
        };
        let Some(node) = link.take() else {
            trace!("remove_after rejected: cursor is at the last element");
            return None;
        };
        let (value, next) = (*node).into_parts();
        *link = next;
        *self.len -= 1;
        Some(value)
    }

    /// Links a detached node after this position and moves onto it.
    pub(crate) fn link_after(&mut self, mut node: Box<Node<T>>) {
        let Some(link) = self.next.take() else {
            unreachable!("cannot link a node after the end of the list");
        };
        node.next = link.take();
        let node = link.insert(node);
        let Node { value, next } = &mut **node;
        self.current = Some(value);
        self.next = Some(next);
        *self.len += 1;
    }

    /// Moves to the last element, or stays put if there is nothing after this
    /// position.
    pub(crate) fn move_to_last(&mut self) {
        while self.peek_next().is_some() {
            self.move_next();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.current).finish()
    }
}
