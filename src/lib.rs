//! A singly linked string queue with in-place, link-rewiring sort strategies.
//!
//! ```
//! use link_queue::{Queue, SortStrategy};
//!
//! let mut queue = Queue::with_strategy(SortStrategy::TopDownMerge);
//! queue.insert_tail("b").unwrap();
//! queue.insert_tail("a").unwrap();
//! queue.insert_tail("c").unwrap();
//! queue.sort();
//!
//! assert_eq!(queue.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
//! assert_eq!(queue.size(), 3);
//! ```

pub mod error;
pub mod queue;
pub mod trace;

pub use error::{QueueError, TraceError, UnknownStrategy};
pub use queue::{Iter, Queue, SortStrategy};
