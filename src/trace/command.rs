use core::{fmt, str::FromStr};

use crate::error::TraceError;

/// One line of a trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new`: create a queue, replacing any live one.
    New,
    /// `ih <s>`
    InsertHead(String),
    /// `it <s>`
    InsertTail(String),
    /// `rh [<s>]`: remove the head, optionally checking its value.
    RemoveHead(Option<String>),
    /// `size`
    Size,
    /// `reverse`
    Reverse,
    /// `sort`
    Sort,
    /// `free`: destroy the queue.
    Free,
}

impl FromStr for Command {
    type Err = TraceError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words
            .next()
            .ok_or_else(|| TraceError::UnknownCommand(String::new()))?;
        let argument = words.next().map(str::to_owned);

        let command = match name {
            "new" => Command::New,
            "ih" => Command::InsertHead(argument.ok_or(TraceError::MissingArgument("ih"))?),
            "it" => Command::InsertTail(argument.ok_or(TraceError::MissingArgument("it"))?),
            "rh" => Command::RemoveHead(argument),
            "size" => Command::Size,
            "reverse" => Command::Reverse,
            "sort" => Command::Sort,
            "free" => Command::Free,
            other => return Err(TraceError::UnknownCommand(other.to_owned())),
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::New => f.write_str("new"),
            Command::InsertHead(value) => write!(f, "ih {value}"),
            Command::InsertTail(value) => write!(f, "it {value}"),
            Command::RemoveHead(Some(value)) => write!(f, "rh {value}"),
            Command::RemoveHead(None) => f.write_str("rh"),
            Command::Size => f.write_str("size"),
            Command::Reverse => f.write_str("reverse"),
            Command::Sort => f.write_str("sort"),
            Command::Free => f.write_str("free"),
        }
    }
}
