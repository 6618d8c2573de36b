use core::ptr::NonNull;
use std::alloc::{self, Layout};

use tracing::warn;

use super::traits::Link;
use crate::error::QueueError;

/// A heap node owning one string value and a forward link.
///
/// Nodes are created by [`Node::alloc`] and destroyed by [`Node::release`];
/// in between, exactly one link (the queue's head slot or one predecessor)
/// points at each node.
pub(crate) struct Node {
    next: Option<NonNull<Node>>,
    value: String,
}

impl Node {
    /// Allocates a detached node holding a copy of `value`.
    ///
    /// Both allocations are fallible. When the node itself cannot be
    /// allocated, the value copy made before it is released on return.
    pub(crate) fn alloc(value: &str) -> Result<NonNull<Node>, QueueError> {
        let mut owned = String::new();
        if owned.try_reserve_exact(value.len()).is_err() {
            warn!(len = value.len(), "failed to allocate value copy");
            return Err(QueueError::OutOfMemory);
        }
        owned.push_str(value);

        // SAFETY: `Node` is not zero sized.
        let raw = unsafe { alloc::alloc(Layout::new::<Node>()) }.cast::<Node>();
        let Some(node) = NonNull::new(raw) else {
            warn!("failed to allocate queue node");
            return Err(QueueError::OutOfMemory);
        };
        unsafe {
            node.as_ptr().write(Node {
                next: None,
                value: owned,
            });
        }
        Ok(node)
    }

    /// Frees a detached node and hands its value back to the caller.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`], must no longer be reachable
    /// from any chain, and must not be used afterwards.
    pub(crate) unsafe fn release(node: NonNull<Node>) -> String {
        // The global allocator and `Layout::new::<Node>()` are exactly what
        // `Box<Node>` uses, so the box may take the allocation back.
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        node.value
    }

    #[inline]
    pub(crate) fn value(&self) -> &str {
        &self.value
    }
}

impl Link for Node {
    #[inline]
    fn next(&self) -> Option<NonNull<Node>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Node>>) {
        self.next = next;
    }
}

/// Reads the link of `node`.
///
/// # Safety
///
/// `node` must point to a live node.
#[inline]
pub(crate) unsafe fn next_of(node: NonNull<Node>) -> Option<NonNull<Node>> {
    unsafe { node.as_ref().next() }
}

/// Rewrites the link of `node`.
///
/// # Safety
///
/// `node` must point to a live node that nobody else is reading.
#[inline]
pub(crate) unsafe fn set_next_of(mut node: NonNull<Node>, next: Option<NonNull<Node>>) {
    unsafe { node.as_mut().set_next(next) }
}

/// Borrows the value of `node` for as long as the caller keeps it alive.
///
/// # Safety
///
/// `node` must point to a live node that outlives `'a`. Only the link of
/// the node may be rewritten while the borrow is held.
#[inline]
pub(crate) unsafe fn value_of<'a>(node: NonNull<Node>) -> &'a str {
    unsafe { (*node.as_ptr()).value() }
}
