//! Interchangeable algorithms behind [`Queue::sort`](crate::Queue::sort).
//!
//! Every strategy receives the queue's detached [`Chain`] and returns the
//! same nodes in ascending order, with the tail and length tracked. None of
//! them allocates or frees a node.

use core::{fmt, str::FromStr};

use super::{
    chain::Chain,
    node::{next_of, value_of},
    traits::Sorter,
};
use crate::error::UnknownStrategy;

mod bottom_up;
mod partition;
mod radix;
mod top_down;

use bottom_up::BottomUpMergeSort;
use partition::PartitionSort;
use radix::RadixSort;
use top_down::TopDownMergeSort;

/// The algorithm a [`Queue`](crate::Queue) uses to sort itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortStrategy {
    /// Quicksort on links, pivoting on the current head. Not stable;
    /// quadratic time on sorted or reverse-sorted input.
    Partition,
    /// Bucket sort by character position. Stable.
    ///
    /// Values must consist of lowercase ASCII letters only; the order of
    /// values containing any other byte is unspecified. See
    /// [`Queue::try_sort`](crate::Queue::try_sort).
    Radix,
    /// Iterative merge of runs of width 1, 2, 4, ... Stable, O(n log n) and
    /// no recursion.
    #[default]
    BottomUpMerge,
    /// Recursive merge sort splitting at the midpoint. Stable, O(n log n),
    /// recursion depth O(log n).
    TopDownMerge,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 4] = [
        SortStrategy::Partition,
        SortStrategy::Radix,
        SortStrategy::BottomUpMerge,
        SortStrategy::TopDownMerge,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SortStrategy::Partition => "partition",
            SortStrategy::Radix => "radix",
            SortStrategy::BottomUpMerge => "bottom-up-merge",
            SortStrategy::TopDownMerge => "top-down-merge",
        }
    }

    /// Whether equal values keep their relative order through a sort.
    pub const fn is_stable(self) -> bool {
        !matches!(self, SortStrategy::Partition)
    }

    /// Whether this strategy places `value` correctly. Only
    /// [`SortStrategy::Radix`] restricts its input, to lowercase ASCII.
    pub fn accepts(self, value: &str) -> bool {
        match self {
            SortStrategy::Radix => radix::is_sortable(value),
            _ => true,
        }
    }

    /// Sorts `chain` with this strategy.
    ///
    /// # Safety
    ///
    /// Same contract as [`Sorter::sort`].
    pub(crate) unsafe fn sort(self, chain: Chain) -> Chain {
        unsafe {
            match self {
                SortStrategy::Partition => PartitionSort::sort(chain),
                SortStrategy::Radix => RadixSort::sort(chain),
                SortStrategy::BottomUpMerge => BottomUpMergeSort::sort(chain),
                SortStrategy::TopDownMerge => TopDownMergeSort::sort(chain),
            }
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "partition" | "quick" | "quicksort" => Ok(SortStrategy::Partition),
            "radix" | "bucket" => Ok(SortStrategy::Radix),
            "bottom-up-merge" | "bottom-up" | "merge" => Ok(SortStrategy::BottomUpMerge),
            "top-down-merge" | "top-down" | "recursive-merge" => Ok(SortStrategy::TopDownMerge),
            _ => Err(UnknownStrategy(s.to_owned())),
        }
    }
}

/// Merges two sorted chains into one.
///
/// On equal values the node from `a` goes first, so the merge is stable as
/// long as `a` held the earlier nodes.
///
/// # Safety
///
/// `a` and `b` must be well formed, disjoint and owned by the caller.
pub(super) unsafe fn merge(a: Chain, b: Chain) -> Chain {
    let len = a.len + b.len;
    let (mut left, mut right) = (a.head, b.head);
    let mut out = Chain::new();
    unsafe {
        while let (Some(l), Some(r)) = (left, right) {
            if value_of(l) <= value_of(r) {
                left = next_of(l);
                out.push_back(l);
            } else {
                right = next_of(r);
                out.push_back(r);
            }
        }
        let (rest, rest_tail) = match left {
            Some(_) => (left, a.tail),
            None => (right, b.tail),
        };
        if rest.is_some() {
            let rest_len = len - out.len;
            out.append(Chain {
                head: rest,
                tail: rest_tail,
                len: rest_len,
            });
        }
    }
    out
}
