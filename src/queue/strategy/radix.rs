use crate::queue::{
    chain::Chain,
    node::{next_of, value_of},
    traits::Sorter,
};

/// One bucket for "string ended here" plus one per lowercase letter.
const BUCKETS: usize = 27;

/// Bucket sort by character position.
///
/// Nodes are distributed by the byte at the current index, each bucket with
/// more than one node is sorted again at the next index, and the buckets are
/// concatenated with the terminator bucket first. Nodes keep their relative
/// order inside a bucket, which makes the sort stable.
///
/// Only buckets smaller than the largest one are sorted recursively; the
/// largest is carried to the next index by the loop, so shared prefixes of
/// any length cost no stack and the depth stays logarithmic in the number
/// of nodes.
///
/// Values are expected to hold lowercase ASCII letters only. Other bytes
/// land in the first or last letter bucket and their order is unspecified.
pub(crate) struct RadixSort;

impl Sorter for RadixSort {
    unsafe fn sort(chain: Chain) -> Chain {
        unsafe { sort_at(chain, 0) }
    }
}

unsafe fn sort_at(chain: Chain, mut index: usize) -> Chain {
    let mut front = Chain::new();
    let mut back = Chain::new();
    let mut pending = chain;
    let mut buckets = [const { Chain::new() }; BUCKETS];

    while pending.len > 1 {
        let mut rest = pending.head;
        unsafe {
            while let Some(node) = rest {
                rest = next_of(node);
                buckets[bucket_of(value_of(node), index)].push_back(node);
            }
        }

        let largest = (1..BUCKETS)
            .max_by_key(|&bucket| buckets[bucket].len)
            .unwrap_or(1);
        let next = index + 1;
        unsafe {
            for bucket in &mut buckets[..largest] {
                front.append(sorted_bucket(bucket.take(), next));
            }
            let mut suffix = Chain::new();
            for bucket in &mut buckets[largest + 1..] {
                suffix.append(sorted_bucket(bucket.take(), next));
            }
            suffix.append(back);
            back = suffix;
        }
        pending = buckets[largest].take();
        index = next;
    }

    unsafe {
        front.append(pending);
        front.append(back);
    }
    front
}

/// Sorts a bucket that is not the largest one at its level.
unsafe fn sorted_bucket(run: Chain, index: usize) -> Chain {
    // Terminator buckets (and singletons) only hold equal strings.
    if run.len <= 1 || run.head.is_some_and(|head| unsafe { value_of(head) }.len() < index) {
        run
    } else {
        unsafe { sort_at(run, index) }
    }
}

#[inline]
fn bucket_of(value: &str, index: usize) -> usize {
    match value.as_bytes().get(index) {
        None => 0,
        Some(&byte) => 1 + usize::from(byte.saturating_sub(b'a')).min(BUCKETS - 2),
    }
}

/// Whether every byte of `value` is one the radix buckets order correctly.
#[inline]
pub(crate) fn is_sortable(value: &str) -> bool {
    value.bytes().all(|byte| byte.is_ascii_lowercase())
}
