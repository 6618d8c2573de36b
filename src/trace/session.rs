use std::io::BufRead;

use tracing::{debug, info};

use super::command::Command;
use crate::{
    error::{QueueError, TraceError},
    queue::{Queue, SortStrategy},
};

/// Size of the buffer removed values are copied into. Longer values are
/// truncated to `REMOVE_BUFFER_LEN - 1` bytes.
pub const REMOVE_BUFFER_LEN: usize = 1024;

/// What a successfully executed command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command had no result to report.
    Done,
    /// `rh` removed this value, truncated to the removal buffer.
    Removed(String),
    /// `size` reported this count.
    Size(usize),
}

/// Replays commands against a queue that may or may not exist.
///
/// Before `new` and after `free` there is no queue: inserting or removing
/// fails with [`QueueError::InvalidOperation`], `size` reports 0, and the
/// other commands do nothing. `sort` fails with
/// [`QueueError::InvalidOperation`] when the strategy cannot order one of the
/// values, leaving the queue as it was.
#[derive(Debug, Default)]
pub struct Session {
    queue: Option<Queue>,
    strategy: SortStrategy,
}

impl Session {
    /// Creates a session whose queues sort with `strategy`.
    pub fn new(strategy: SortStrategy) -> Self {
        Self {
            queue: None,
            strategy,
        }
    }

    /// The live queue, if any.
    pub fn queue(&self) -> Option<&Queue> {
        self.queue.as_ref()
    }

    pub fn execute(&mut self, command: &Command) -> Result<Outcome, TraceError> {
        match command {
            Command::New => {
                self.queue = Some(Queue::with_strategy(self.strategy));
            }
            Command::InsertHead(value) => self.live_queue()?.insert_head(value)?,
            Command::InsertTail(value) => self.live_queue()?.insert_tail(value)?,
            Command::RemoveHead(expected) => {
                let mut buf = [0u8; REMOVE_BUFFER_LEN];
                let copied = self.live_queue()?.remove_head_into(Some(&mut buf))?;
                let actual = String::from_utf8_lossy(&buf[..copied]).into_owned();
                if let Some(expected) = expected {
                    if *expected != actual {
                        return Err(TraceError::Mismatch {
                            expected: expected.clone(),
                            actual,
                        });
                    }
                }
                return Ok(Outcome::Removed(actual));
            }
            Command::Size => {
                return Ok(Outcome::Size(self.queue.as_ref().map_or(0, Queue::size)));
            }
            Command::Reverse => {
                if let Some(queue) = self.queue.as_mut() {
                    queue.reverse();
                }
            }
            Command::Sort => {
                if let Some(queue) = self.queue.as_mut() {
                    queue.try_sort()?;
                }
            }
            Command::Free => {
                self.queue = None;
            }
        }
        Ok(Outcome::Done)
    }

    fn live_queue(&mut self) -> Result<&mut Queue, QueueError> {
        self.queue.as_mut().ok_or(QueueError::InvalidOperation)
    }
}

/// Summary of a replayed trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceReport {
    /// Commands executed, not counting blank and comment lines.
    pub commands: usize,
    /// Values removed with `rh`.
    pub removed: usize,
    /// The value reported by the last `size` command.
    pub last_size: Option<usize>,
}

/// Parses and executes every line of `reader`, stopping at the first error.
///
/// Blank lines and lines starting with `#` are skipped. Errors are wrapped
/// in [`TraceError::AtLine`] with the 1-based line number.
pub fn run_trace<R: BufRead>(reader: R, strategy: SortStrategy) -> Result<TraceReport, TraceError> {
    let mut session = Session::new(strategy);
    let mut report = TraceReport::default();

    for (index, line) in reader.lines().enumerate() {
        let at_line = |source: TraceError| TraceError::AtLine {
            line: index + 1,
            source: Box::new(source),
        };
        let line = line.map_err(|e| at_line(e.into()))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command: Command = line.parse().map_err(at_line)?;
        debug!(line = index + 1, %command, "executing");
        match session.execute(&command).map_err(at_line)? {
            Outcome::Done => {}
            Outcome::Removed(_) => report.removed += 1,
            Outcome::Size(size) => report.last_size = Some(size),
        }
        report.commands += 1;
    }

    info!(
        commands = report.commands,
        removed = report.removed,
        %strategy,
        "trace finished"
    );
    Ok(report)
}
