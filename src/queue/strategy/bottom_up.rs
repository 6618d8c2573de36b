use super::merge;
use crate::queue::{chain::Chain, traits::Sorter};

/// Iterative merge sort.
///
/// Each pass walks the chain, cuts it into consecutive pairs of runs of the
/// current width, merges every pair and relinks the results into the chain
/// for the next pass. The width doubles until one run covers the whole
/// chain. The tail of the final pass is the new tail.
pub(crate) struct BottomUpMergeSort;

impl Sorter for BottomUpMergeSort {
    unsafe fn sort(chain: Chain) -> Chain {
        let total = chain.len;
        let mut list = chain;
        let mut width = 1;

        while width < total {
            let mut merged = Chain::new();
            let mut rest = list.head;
            while rest.is_some() {
                unsafe {
                    let a = Chain::take_front(&mut rest, width);
                    let b = Chain::take_front(&mut rest, width);
                    merged.append(merge(a, b));
                }
            }
            list = merged;
            width *= 2;
        }

        list
    }
}
