use core::{fmt, marker::PhantomData, ptr::NonNull};

use tracing::{debug, trace, warn};

use super::{
    chain::Chain,
    iter::Iter,
    node::{Node, next_of, set_next_of, value_of},
    strategy::SortStrategy,
    traits::Link,
};
use crate::error::QueueError;

/// A singly linked queue of owned strings.
///
/// The queue keeps a head pointer, a tail pointer and a live element count.
/// Values are copied into nodes on insertion and released on removal or
/// when the queue is dropped. [`Queue::sort`] and [`Queue::reverse`] only
/// rewrite links; they never allocate or free a node.
pub struct Queue {
    head: Option<NonNull<Node>>,
    tail: Option<NonNull<Node>>,
    count: usize,
    strategy: SortStrategy,
    _owns: PhantomData<Box<Node>>,
}

impl Queue {
    /// Creates a new, empty queue sorted with the default strategy.
    pub const fn new() -> Self {
        Self::with_strategy(SortStrategy::BottomUpMerge)
    }

    /// Creates a new, empty queue sorted with `strategy`.
    pub const fn with_strategy(strategy: SortStrategy) -> Self {
        Queue {
            head: None,
            tail: None,
            count: 0,
            strategy,
            _owns: PhantomData,
        }
    }

    /// The strategy used by [`Queue::sort`].
    pub fn strategy(&self) -> SortStrategy {
        self.strategy
    }

    /// Changes the strategy used by later sorts.
    pub fn set_strategy(&mut self, strategy: SortStrategy) {
        self.strategy = strategy;
    }

    /// Copies `value` into a new node at the front of the queue.
    ///
    /// On [`QueueError::OutOfMemory`] the queue is unchanged.
    pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
        let node = Node::alloc(value)?;
        unsafe { set_next_of(node, self.next()) };
        self.set_next(Some(node));
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.count += 1;
        trace!(count = self.count, "inserted at head");
        Ok(())
    }

    /// Copies `value` into a new node at the back of the queue.
    ///
    /// On [`QueueError::OutOfMemory`] the queue is unchanged.
    pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
        let node = Node::alloc(value)?;
        match self.tail {
            Some(tail) => unsafe { set_next_of(tail, Some(node)) },
            None => self.set_next(Some(node)),
        }
        self.tail = Some(node);
        self.count += 1;
        trace!(count = self.count, "inserted at tail");
        Ok(())
    }

    /// Removes the head node and returns its value.
    ///
    /// Fails with [`QueueError::InvalidOperation`] when the queue is empty.
    pub fn remove_head(&mut self) -> Result<String, QueueError> {
        let node = self.detach_head().ok_or(QueueError::InvalidOperation)?;
        trace!(count = self.count, "removed head");
        Ok(unsafe { Node::release(node) })
    }

    /// Removes the head node, copying its value into `buf` first.
    ///
    /// At most `buf.len() - 1` bytes are copied, followed by a `0`
    /// terminator; longer values are truncated silently. An empty buffer
    /// receives nothing. Returns the number of value bytes copied.
    pub fn remove_head_into(&mut self, buf: Option<&mut [u8]>) -> Result<usize, QueueError> {
        let head = self.head.ok_or(QueueError::InvalidOperation)?;
        let copied = match buf {
            Some(buf) if !buf.is_empty() => {
                let bytes = unsafe { value_of(head) }.as_bytes();
                let n = bytes.len().min(buf.len() - 1);
                buf[..n].copy_from_slice(&bytes[..n]);
                buf[n] = 0;
                n
            }
            _ => 0,
        };
        self.remove_head()?;
        Ok(copied)
    }

    /// Number of elements. Never walks the chain.
    pub fn size(&self) -> usize {
        self.count
    }

    /// Same as [`Queue::size`].
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Reverses the queue in place.
    ///
    /// Each node is taken off the front of the unreversed suffix (which
    /// starts after the old head) and pushed in front of the reversed
    /// prefix. The old head ends up as the tail.
    pub fn reverse(&mut self) {
        let Some(first) = self.head else {
            return;
        };
        debug!(count = self.count, "reversing queue");
        unsafe {
            while let Some(target) = next_of(first) {
                set_next_of(first, next_of(target));
                set_next_of(target, self.next());
                self.set_next(Some(target));
            }
        }
        self.tail = Some(first);
    }

    /// Sorts the queue into non-decreasing byte order with the configured
    /// [`SortStrategy`].
    ///
    /// Nodes keep their values; only links, head and tail move. Whether equal
    /// values keep their relative order depends on
    /// [`SortStrategy::is_stable`].
    pub fn sort(&mut self) {
        if self.count <= 1 {
            return;
        }
        debug!(strategy = %self.strategy, count = self.count, "sorting queue");
        let chain = self.take_chain();
        let sorted = unsafe { self.strategy.sort(chain) };
        self.restore_chain(sorted);
    }

    /// Sorts like [`Queue::sort`], but first checks that the strategy
    /// accepts every value.
    ///
    /// Fails with [`QueueError::InvalidOperation`] and leaves the queue
    /// untouched when a value is outside what the strategy can order, such
    /// as an uppercase letter under [`SortStrategy::Radix`].
    pub fn try_sort(&mut self) -> Result<(), QueueError> {
        let strategy = self.strategy;
        if let Some(value) = self.iter().find(|value| !strategy.accepts(value)) {
            warn!(%strategy, value, "value cannot be sorted by strategy");
            return Err(QueueError::InvalidOperation);
        }
        self.sort();
        Ok(())
    }

    /// Removes and releases every element.
    pub fn clear(&mut self) {
        while let Some(node) = self.detach_head() {
            drop(unsafe { Node::release(node) });
        }
    }

    /// Returns an iterator over the values, head first.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.head, self.count)
    }

    fn detach_head(&mut self) -> Option<NonNull<Node>> {
        let head = self.head?;
        self.set_next(unsafe { next_of(head) });
        if self.head.is_none() {
            self.tail = None;
        }
        self.count -= 1;
        Some(head)
    }

    /// Hands the whole node chain out, leaving the queue empty.
    fn take_chain(&mut self) -> Chain {
        let chain = Chain {
            head: self.head.take(),
            tail: self.tail.take(),
            len: self.count,
        };
        self.count = 0;
        chain
    }

    fn restore_chain(&mut self, chain: Chain) {
        debug_assert!(self.head.is_none(), "restoring over a live chain");
        self.head = chain.head;
        self.tail = chain.tail;
        self.count = chain.len;
    }

    /// Walks the chain and checks every structural invariant.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.count == 0, self.head.is_none());
        assert_eq!(self.count == 0, self.tail.is_none());

        let mut steps = 0;
        let mut last = None;
        let mut current = self.head;
        while let Some(node) = current {
            steps += 1;
            assert!(steps <= self.count, "chain is longer than count");
            last = Some(node);
            current = unsafe { next_of(node) };
        }
        assert_eq!(steps, self.count);
        assert_eq!(last, self.tail);
    }
}

impl Link for Queue {
    fn next(&self) -> Option<NonNull<Node>> {
        self.head
    }

    fn set_next(&mut self, next: Option<NonNull<Node>>) {
        self.head = next;
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

unsafe impl Send for Queue {}
unsafe impl Sync for Queue {}
