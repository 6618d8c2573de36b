use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{list::Queue, node::Node, traits::Link};

/// An iterator over the values of a [`Queue`], head first.
///
/// The shared borrow of the queue keeps it from being modified while the
/// iterator is alive.
pub struct Iter<'a> {
    current: Option<NonNull<Node>>,
    remaining: usize,
    _queue: PhantomData<&'a Queue>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(head: Option<NonNull<Node>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
            _queue: PhantomData,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            let node: &'a Node = unsafe { &*current.as_ptr() };
            self.current = node.next();
            self.remaining -= 1;
            node.value()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
