use core::ptr::NonNull;

use crate::queue::{
    chain::Chain,
    node::{Node, next_of, set_next_of, value_of},
    traits::Sorter,
};

/// Quicksort on links.
///
/// The head of the pending chain is the pivot. One walk splits the rest
/// into a less-or-equal chain and a greater chain; the sorted result is
/// `sorted(lower) ++ pivot ++ sorted(upper)`.
///
/// Only the smaller partition is sorted recursively. The larger one becomes
/// the next pending chain, with finished pieces collected in a sorted
/// prefix and a sorted suffix, so the stack depth stays logarithmic even
/// when the time degrades to quadratic on presorted input.
pub(crate) struct PartitionSort;

impl Sorter for PartitionSort {
    unsafe fn sort(chain: Chain) -> Chain {
        let mut front = Chain::new();
        let mut back = Chain::new();
        let mut pending = chain;

        while let Some(pivot) = pending.head {
            let (lower, upper) = unsafe { partition(pivot) };
            unsafe {
                if lower.len <= upper.len {
                    front.append(Self::sort(lower));
                    front.push_back(pivot);
                    pending = upper;
                } else {
                    let mut suffix = Chain::new();
                    suffix.push_back(pivot);
                    suffix.append(Self::sort(upper));
                    suffix.append(back);
                    back = suffix;
                    pending = lower;
                }
            }
        }

        unsafe { front.append(back) };
        front
    }
}

/// Splits the nodes after `pivot` by comparison with its value. The pivot
/// is left detached.
unsafe fn partition(pivot: NonNull<Node>) -> (Chain, Chain) {
    let mut lower = Chain::new();
    let mut upper = Chain::new();
    unsafe {
        let key = value_of(pivot);
        let mut rest = next_of(pivot);
        set_next_of(pivot, None);
        while let Some(node) = rest {
            rest = next_of(node);
            if value_of(node) <= key {
                lower.push_back(node);
            } else {
                upper.push_back(node);
            }
        }
    }
    (lower, upper)
}
