use core::ptr::NonNull;
use std::thread;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    error::QueueError,
    queue::{
        Queue, SortStrategy,
        chain::Chain,
        node::{Node, next_of, value_of},
    },
};

const SMALL_STACK: usize = 256 * 1024;

fn on_small_stack<F: FnOnce() + Send + 'static>(f: F) {
    thread::Builder::new()
        .stack_size(SMALL_STACK)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap();
}

fn random_word(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| char::from(rng.random_range(b'a'..=b'z')))
        .collect()
}

fn queue_of(strategy: SortStrategy, values: &[String]) -> Queue {
    let mut queue = Queue::with_strategy(strategy);
    for value in values {
        queue.insert_tail(value).unwrap();
    }
    queue
}

fn sorted_values(strategy: SortStrategy, values: &[String]) -> Vec<String> {
    let mut queue = queue_of(strategy, values);
    queue.sort();
    queue.assert_invariants();
    assert_eq!(queue.size(), values.len());
    queue.iter().map(str::to_owned).collect()
}

fn build_chain(values: &[&str]) -> Chain {
    let mut chain = Chain::new();
    for value in values {
        unsafe { chain.push_back(Node::alloc(value).unwrap()) };
    }
    chain
}

fn chain_nodes(chain: &Chain) -> Vec<NonNull<Node>> {
    let mut nodes = Vec::new();
    let mut current = chain.head;
    while let Some(node) = current {
        nodes.push(node);
        current = unsafe { next_of(node) };
    }
    assert_eq!(nodes.len(), chain.len);
    assert_eq!(nodes.last().copied(), chain.tail);
    nodes
}

fn release_chain(chain: Chain) {
    for node in chain_nodes(&chain) {
        drop(unsafe { Node::release(node) });
    }
}

#[test]
fn test_sort_concrete_scenario() {
    for strategy in SortStrategy::ALL {
        let mut queue = Queue::with_strategy(strategy);
        queue.insert_tail("b").unwrap();
        queue.insert_tail("a").unwrap();
        queue.insert_tail("c").unwrap();
        queue.sort();
        queue.assert_invariants();
        assert_eq!(queue.iter().collect::<Vec<_>>(), ["a", "b", "c"], "{strategy}");
        assert_eq!(queue.size(), 3);
    }
}

#[test]
fn test_sort_alphabet_descending() {
    let alphabet: Vec<String> = (b'a'..=b'z').rev().map(|b| char::from(b).to_string()).collect();
    let mut expected = alphabet.clone();
    expected.sort();
    for strategy in SortStrategy::ALL {
        assert_eq!(sorted_values(strategy, &alphabet), expected, "{strategy}");
    }
}

#[test]
fn test_sort_empty_and_single() {
    for strategy in SortStrategy::ALL {
        let mut queue = Queue::with_strategy(strategy);
        queue.sort();
        queue.assert_invariants();

        queue.insert_head("solo").unwrap();
        queue.sort();
        queue.assert_invariants();
        assert_eq!(queue.iter().collect::<Vec<_>>(), ["solo"]);
    }
}

#[test]
fn test_sort_random_words() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for strategy in SortStrategy::ALL {
        for len in [2, 3, 7, 64, 1000] {
            let words: Vec<String> = (0..len).map(|_| random_word(&mut rng, 6)).collect();
            let mut expected = words.clone();
            expected.sort();
            assert_eq!(sorted_values(strategy, &words), expected, "{strategy} n={len}");
        }
    }
}

#[test]
fn test_sort_adversarial_orders() {
    const N: usize = 2000;
    let mut rng = StdRng::seed_from_u64(7);
    let mut words: Vec<String> = (0..N).map(|_| random_word(&mut rng, 5)).collect();
    words.sort();
    words.dedup();
    let descending: Vec<String> = words.iter().rev().cloned().collect();
    let equal = vec!["same".to_owned(); N];

    for strategy in SortStrategy::ALL {
        assert_eq!(sorted_values(strategy, &words), words, "{strategy} sorted");
        assert_eq!(sorted_values(strategy, &descending), words, "{strategy} reversed");
        assert_eq!(sorted_values(strategy, &equal), equal, "{strategy} all equal");
    }
}

#[test]
fn test_sort_keeps_node_identity() {
    for strategy in SortStrategy::ALL {
        let chain = build_chain(&["delta", "alpha", "charlie", "bravo", "alpha"]);
        let mut before: Vec<(usize, String)> = chain_nodes(&chain)
            .into_iter()
            .map(|node| (node.as_ptr() as usize, unsafe { value_of(node) }.to_owned()))
            .collect();

        let sorted = unsafe { strategy.sort(chain) };
        let mut after: Vec<(usize, String)> = chain_nodes(&sorted)
            .into_iter()
            .map(|node| (node.as_ptr() as usize, unsafe { value_of(node) }.to_owned()))
            .collect();

        let order: Vec<&str> = after.iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(order, ["alpha", "alpha", "bravo", "charlie", "delta"], "{strategy}");

        before.sort();
        after.sort();
        assert_eq!(before, after, "{strategy} moved a value between nodes");
        release_chain(sorted);
    }
}

#[test]
fn test_stable_strategies_keep_equal_order() {
    let values = ["b", "a", "b", "a", "c", "a", "b"];
    for strategy in SortStrategy::ALL.into_iter().filter(|s| s.is_stable()) {
        let chain = build_chain(&values);
        let original = chain_nodes(&chain);
        let sorted = unsafe { strategy.sort(chain) };
        let nodes = chain_nodes(&sorted);

        for key in ["a", "b", "c"] {
            let in_input: Vec<_> = original
                .iter()
                .filter(|n| unsafe { value_of(**n) } == key)
                .collect();
            let in_output: Vec<_> = nodes
                .iter()
                .filter(|n| unsafe { value_of(**n) } == key)
                .collect();
            assert_eq!(in_input, in_output, "{strategy} reordered {key:?}");
        }
        release_chain(sorted);
    }
}

#[test]
fn test_sort_then_insert_tail() {
    for strategy in SortStrategy::ALL {
        let values: Vec<String> = ["m", "z", "a", "q"].map(String::from).to_vec();
        let mut queue = queue_of(strategy, &values);
        queue.sort();
        queue.insert_tail("b").unwrap();
        queue.assert_invariants();
        assert_eq!(
            queue.iter().collect::<Vec<_>>(),
            ["a", "m", "q", "z", "b"],
            "{strategy} lost track of the tail"
        );
    }
}

#[test]
fn test_radix_handles_prefixes() {
    let words: Vec<String> = ["abc", "ab", "a", "", "abcd", "b", "ab"]
        .map(String::from)
        .to_vec();
    assert_eq!(
        sorted_values(SortStrategy::Radix, &words),
        ["", "a", "ab", "ab", "abc", "abcd", "b"]
    );
}

#[test]
fn test_sort_shuffled_permutations() {
    let mut words: Vec<String> = (0..26u32 * 26)
        .map(|i| crate::trace::permutation(i as u64, 2))
        .collect();
    let expected = words.clone();
    words.shuffle(&mut StdRng::seed_from_u64(42));

    for strategy in SortStrategy::ALL {
        assert_eq!(sorted_values(strategy, &words), expected, "{strategy}");
    }
}

#[test]
fn test_partition_presorted_on_small_stack() {
    on_small_stack(|| {
        let ascending: Vec<String> = (0..5_000u64).map(|i| crate::trace::permutation(i, 3)).collect();
        let descending: Vec<String> = ascending.iter().rev().cloned().collect();
        assert_eq!(sorted_values(SortStrategy::Partition, &ascending), ascending);
        assert_eq!(sorted_values(SortStrategy::Partition, &descending), ascending);
    });
}

#[test]
fn test_top_down_large_input_on_small_stack() {
    on_small_stack(|| {
        let mut words: Vec<String> = (0..200_000u64).map(|i| crate::trace::permutation(i, 4)).collect();
        let expected = words.clone();
        words.shuffle(&mut StdRng::seed_from_u64(3));
        assert_eq!(sorted_values(SortStrategy::TopDownMerge, &words), expected);
    });
}

#[test]
fn test_radix_long_values_on_small_stack() {
    on_small_stack(|| {
        let long = "a".repeat(10_000);
        let words = vec![long.clone(), long.clone()];
        assert_eq!(sorted_values(SortStrategy::Radix, &words), words);

        let mut mixed = vec![format!("{long}b"), long.clone(), format!("{long}a"), long.clone()];
        let expected = vec![long.clone(), long.clone(), format!("{long}a"), format!("{long}b")];
        assert_eq!(sorted_values(SortStrategy::Radix, &mixed), expected);

        // Every level splits off a single node: "b", "ab", "aab", ...
        mixed = (0..2_000).map(|i| format!("{}b", "a".repeat(i))).collect();
        let mut expected = mixed.clone();
        expected.sort();
        assert_eq!(sorted_values(SortStrategy::Radix, &mixed), expected);
    });
}

#[test]
fn test_radix_out_of_range_values_keep_every_node() {
    let words: Vec<String> = ["b", "Apple", "a", "zeta~", "a"].map(String::from).to_vec();
    let mut queue = queue_of(SortStrategy::Radix, &words);
    queue.sort();
    queue.assert_invariants();

    let mut after: Vec<&str> = queue.iter().collect();
    after.sort();
    let mut before: Vec<&str> = words.iter().map(String::as_str).collect();
    before.sort();
    assert_eq!(after, before);
}

#[test]
fn test_try_sort_rejects_unsortable_values() {
    let words: Vec<String> = ["b", "Apple", "a"].map(String::from).to_vec();
    let mut queue = queue_of(SortStrategy::Radix, &words);
    assert_eq!(queue.try_sort(), Err(QueueError::InvalidOperation));
    queue.assert_invariants();
    assert_eq!(queue.iter().collect::<Vec<_>>(), ["b", "Apple", "a"]);

    queue.set_strategy(SortStrategy::BottomUpMerge);
    assert_eq!(queue.try_sort(), Ok(()));
    assert_eq!(queue.iter().collect::<Vec<_>>(), ["Apple", "a", "b"]);
}
