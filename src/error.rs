use core::alloc::Layout;

use thiserror::Error;

/// The global allocator could not provide memory for a new node.
///
/// Returned by the `try_*` insertion methods. The list is left exactly as it
/// was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to allocate a list node of {} bytes", .layout.size())]
pub struct AllocError {
    layout: Layout,
}

impl AllocError {
    pub(crate) fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// The layout of the allocation that failed.
    pub fn layout(&self) -> Layout {
        self.layout
    }
}
