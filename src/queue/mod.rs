//! # Linked string queue
//!
//! This module provides a singly linked queue of owned strings together with
//! the algorithms that sort it by relinking nodes.
//!
//! ## Core Components
//!
//! - [`Queue`]: the queue itself, tracking head, tail and element count.
//! - [`SortStrategy`]: the interchangeable sort algorithms.
//! - [`Iter`]: a borrowing iterator over the values.
//!
//! ## Ownership
//!
//! Nodes live behind raw pointers, but each node has exactly one incoming
//! link at any time: the queue's head slot or a single predecessor. Sorting
//! hands the whole chain to a strategy and takes it back; moving a node
//! between sub-chains is a link rewrite, never a copy. Nodes are allocated
//! only by insertion and freed only by removal or by dropping the queue.

mod chain;
mod iter;
mod list;
mod node;
mod strategy;
mod traits;

#[cfg(test)]
mod tests;

pub use iter::Iter;
pub use list::Queue;
pub use strategy::SortStrategy;
