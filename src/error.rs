//! Error types for queue and trace operations.

use thiserror::Error;

/// Errors reported by [`Queue`](crate::Queue) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// A node or the copy of its value could not be allocated.
    /// The queue is left exactly as it was before the call.
    #[error("out of memory while allocating a queue node")]
    OutOfMemory,

    /// The operation needs a queue (or an element) that is not there.
    #[error("invalid operation on an absent or empty queue")]
    InvalidOperation,
}

/// Errors reported while parsing or replaying a command trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The first word of a line is not a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// `ih` or `it` was given without a value.
    #[error("command `{0}` requires an argument")]
    MissingArgument(&'static str),

    /// `rh <s>` removed a different value than expected.
    #[error("removed {actual:?}, expected {expected:?}")]
    Mismatch { expected: String, actual: String },

    /// The generator was asked for zero-length strings, or for more
    /// strings than fit in a `u64`.
    #[error("cannot generate a trace of strings with length {0}")]
    InvalidLength(u32),

    /// The queue rejected the command.
    #[error(transparent)]
    Queue(#[from] QueueError),

    /// Reading a trace or writing a generated one failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Wraps an error with the 1-based trace line it occurred on.
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<TraceError>,
    },
}

/// Returned when a sort strategy name cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown sort strategy `{0}` (expected partition, radix, bottom-up-merge or top-down-merge)")]
pub struct UnknownStrategy(pub String);
