use alloc::{alloc::alloc, boxed::Box};
use core::{alloc::Layout, ptr::NonNull};

use log::warn;

use crate::error::AllocError;

/// The owning link from one position to the next node.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A node in a singly linked list.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn boxed(value: T) -> Box<Self> {
        Box::new(Self { value, next: None })
    }

    /// Allocates a detached node, reporting failure instead of aborting.
    pub(crate) fn try_boxed(value: T) -> Result<Box<Self>, AllocError> {
        // A node always holds a link, so the layout is never zero-sized.
        let layout = Layout::new::<Self>();
        let Some(ptr) = NonNull::new(unsafe { alloc(layout) }.cast::<Self>()) else {
            warn!("list node allocation of {} bytes failed", layout.size());
            return Err(AllocError::new(layout));
        };

        unsafe {
            ptr.as_ptr().write(Self { value, next: None });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    #[inline]
    pub(crate) fn into_parts(self) -> (T, Link<T>) {
        let Self { value, next } = self;
        (value, next)
    }
}
