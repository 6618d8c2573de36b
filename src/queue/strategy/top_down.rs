use super::merge;
use crate::queue::{
    chain::Chain,
    node::{next_of, set_next_of},
    traits::Sorter,
};

/// Recursive merge sort: split at the midpoint, sort both halves, merge.
pub(crate) struct TopDownMergeSort;

impl Sorter for TopDownMergeSort {
    unsafe fn sort(chain: Chain) -> Chain {
        if chain.len <= 1 {
            return chain;
        }
        unsafe {
            let (front, back) = split_midpoint(chain);
            merge(Self::sort(front), Self::sort(back))
        }
    }
}

/// Cuts `chain` in two with a slow/fast walk. The slow pointer advances one
/// link for every two of the fast pointer, so it stops on the last node of
/// the front half. The front half gets the extra node on odd lengths.
unsafe fn split_midpoint(chain: Chain) -> (Chain, Chain) {
    let Some(head) = chain.head else {
        return (chain, Chain::new());
    };

    let mut slow = head;
    let mut front_len = 1;
    unsafe {
        let mut fast = next_of(head);
        while let Some(step) = fast {
            fast = next_of(step);
            if let (Some(step), Some(mid)) = (fast, next_of(slow)) {
                slow = mid;
                front_len += 1;
                fast = next_of(step);
            }
        }

        let back_head = next_of(slow);
        set_next_of(slow, None);
        let back = Chain {
            head: back_head,
            tail: if back_head.is_some() { chain.tail } else { None },
            len: chain.len - front_len,
        };
        let front = Chain {
            head: Some(head),
            tail: Some(slow),
            len: front_len,
        };
        (front, back)
    }
}
