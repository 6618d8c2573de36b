//! The line-oriented command protocol used to drive a [`Queue`](crate::Queue)
//! from trace files, and a generator for sort stress traces.
//!
//! ```text
//! new
//! it b
//! it a
//! sort
//! rh a
//! size
//! free
//! ```

mod command;
mod generate;
mod session;


pub use command::Command;
pub use generate::{ALPHABET_LEN, permutation, write_sort_trace};
pub use session::{Outcome, REMOVE_BUFFER_LEN, Session, TraceReport, run_trace};
