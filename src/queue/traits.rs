use core::ptr::NonNull;

use super::{chain::Chain, node::Node};

/// A trait for anything holding a forward link into a node chain.
///
/// Both nodes and the queue itself implement it; the queue's link is its
/// head slot, which lets head updates be written the same way as node
/// updates.
pub(crate) trait Link {
    /// Get the next pointer in the chain
    fn next(&self) -> Option<NonNull<Node>>;

    /// Set the next pointer in the chain
    fn set_next(&mut self, next: Option<NonNull<Node>>);
}

/// A trait for an algorithm that orders a detached chain by value.
pub(crate) trait Sorter {
    /// Reorders the chain into non-decreasing byte order of its values and
    /// returns the same nodes with `head`, `tail` and `len` describing the
    /// new order. The last node's link is `None`.
    ///
    /// # Safety
    ///
    /// `chain` must be well formed: exactly `len` live nodes are reachable
    /// from `head`, `tail` is the last of them, its link is `None`, and
    /// nothing else refers to any of the nodes while sorting.
    unsafe fn sort(chain: Chain) -> Chain;
}
