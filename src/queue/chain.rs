use core::ptr::NonNull;

use super::node::{Node, next_of, set_next_of};

/// A detached run of nodes, tracked by both ends and its length.
///
/// This is the unit the queue hands to a sort strategy and gets back from
/// it. A chain owns its nodes while it exists; moving a node between chains
/// is a link rewrite, never a copy.
#[derive(Debug)]
pub(crate) struct Chain {
    pub(crate) head: Option<NonNull<Node>>,
    pub(crate) tail: Option<NonNull<Node>>,
    pub(crate) len: usize,
}

impl Chain {
    /// Creates an empty chain.
    pub(crate) const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Moves the nodes out, leaving this chain empty.
    #[inline]
    pub(crate) fn take(&mut self) -> Chain {
        core::mem::replace(self, Chain::new())
    }

    /// Links `node` after the current tail and terminates the chain there.
    ///
    /// # Safety
    ///
    /// `node` must be live and must not already belong to this chain. Its
    /// old link is overwritten, so the caller must have read it first if the
    /// rest of its former chain is still needed.
    #[inline]
    pub(crate) unsafe fn push_back(&mut self, node: NonNull<Node>) {
        unsafe {
            set_next_of(node, None);
            match self.tail {
                Some(tail) => set_next_of(tail, Some(node)),
                None => self.head = Some(node),
            }
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Moves every node of `other` onto the end of this chain.
    ///
    /// # Safety
    ///
    /// Both chains must be well formed and disjoint.
    #[inline]
    pub(crate) unsafe fn append(&mut self, other: Chain) {
        let Some(head) = other.head else {
            return;
        };
        match self.tail {
            Some(tail) => unsafe { set_next_of(tail, Some(head)) },
            None => self.head = Some(head),
        }
        self.tail = other.tail;
        self.len += other.len;
    }

    /// Detaches up to `max` nodes from the front of `rest`, advancing `rest`
    /// past them.
    ///
    /// # Safety
    ///
    /// `rest` must be the head of a terminated run of live nodes that is
    /// owned by the caller.
    pub(crate) unsafe fn take_front(rest: &mut Option<NonNull<Node>>, max: usize) -> Chain {
        let mut run = Chain::new();
        while run.len < max {
            let Some(node) = *rest else {
                break;
            };
            unsafe {
                *rest = next_of(node);
                run.push_back(node);
            }
        }
        run
    }
}
