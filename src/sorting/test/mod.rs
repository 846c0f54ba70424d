use super::code::*;
use super::SortAlgorithm;
use crate::error::{ConfigError, SortError};
use crate::integrity::{check, tabulate};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::cmp::Ordering;

/// Record ordered by `key` only, carrying its input position.
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: i32,
    index: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

fn tagged(keys: &[i32]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(index, &key)| Tagged { key, index })
        .collect()
}

/// Equal keys must appear in increasing input position.
fn assert_stable(output: &[Tagged], name: &str) {
    for pair in output.windows(2) {
        assert!(pair[0].key <= pair[1].key, "{} is not sorted", name);
        if pair[0].key == pair[1].key {
            assert!(
                pair[0].index < pair[1].index,
                "{} reordered equal keys {:?} and {:?}",
                name,
                pair[0],
                pair[1]
            );
        }
    }
}

/// RNG wrapper remembering every value it hands out.
struct Recording<R> {
    inner: R,
    draws: Vec<u64>,
}

impl<R: RngCore> RngCore for Recording<R> {
    fn next_u32(&mut self) -> u32 {
        let value = self.inner.next_u32();
        self.draws.push(u64::from(value));
        value
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.inner.next_u64();
        self.draws.push(value);
        value
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst);
        self.draws.extend(dst.iter().map(|&b| u64::from(b)));
    }
}

fn recording(seed: u64) -> Recording<StdRng> {
    Recording {
        inner: StdRng::seed_from_u64(seed),
        draws: Vec::new(),
    }
}

fn random_data(seed: u64, len: usize, lo: i32, hi: i32) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(lo..=hi)).collect()
}

fn assert_sorted_permutation(input: &[i32], output: &[i32], algorithm: SortAlgorithm) {
    assert_eq!(output.len(), input.len(), "{} changed the length", algorithm);
    if input.is_empty() {
        return;
    }
    let baseline = tabulate(input).unwrap();
    if let Err(e) = check(output, &baseline) {
        panic!("{} produced a bad result: {}", algorithm, e);
    }
}

#[test]
fn test_example_dataset_all_algorithms() {
    let data = [5, 3, 3, 1, 4];
    for algorithm in SortAlgorithm::ALL {
        assert_eq!(algorithm.sort(&data).unwrap(), vec![1, 3, 3, 4, 5], "{}", algorithm);
    }
}

#[test]
fn test_random_datasets_all_algorithms() {
    let shapes = [(0, 1000), (-50, 50), (7, 7), (-1_000_000, 1_000_000)];
    for (seed, &(lo, hi)) in shapes.iter().enumerate() {
        let data = random_data(seed as u64, 300, lo, hi);
        for algorithm in SortAlgorithm::ALL {
            let output = algorithm.sort(&data).unwrap();
            assert_sorted_permutation(&data, &output, algorithm);
        }
    }
}

#[test]
fn test_idempotent() {
    let data = random_data(11, 200, 0, 20);
    for algorithm in SortAlgorithm::ALL {
        let once = algorithm.sort(&data).unwrap();
        let twice = algorithm.sort(&once).unwrap();
        assert_eq!(once, twice, "{}", algorithm);
    }
}

#[test]
fn test_input_not_mutated() {
    let data = vec![4, 1, 3, 1];
    let copy = data.clone();
    for algorithm in SortAlgorithm::ALL {
        algorithm.sort(&data).unwrap();
        assert_eq!(data, copy);
    }
}

#[test]
fn test_empty_and_single() {
    for algorithm in SortAlgorithm::ALL {
        if algorithm == SortAlgorithm::Counting {
            continue;
        }
        assert_eq!(algorithm.sort(&[]).unwrap(), Vec::<i32>::new(), "{}", algorithm);
        assert_eq!(algorithm.sort(&[7]).unwrap(), vec![7], "{}", algorithm);
    }
}

#[test]
fn test_reverse_and_sorted_inputs() {
    let ascending: Vec<i32> = (0..100).collect();
    let descending: Vec<i32> = (0..100).rev().collect();
    for algorithm in SortAlgorithm::ALL {
        assert_eq!(algorithm.sort(&ascending).unwrap(), ascending, "{}", algorithm);
        assert_eq!(algorithm.sort(&descending).unwrap(), ascending, "{}", algorithm);
    }
}

#[test]
fn test_counting_sort_constant() {
    assert_eq!(counting_sort(&[2, 2, 2]).unwrap(), vec![2, 2, 2]);
}

#[test]
fn test_counting_sort_empty_is_error() {
    assert_eq!(
        counting_sort(&[]),
        Err(SortError::EmptyInput {
            algorithm: "counting sort"
        })
    );
}

#[test]
fn test_counting_sort_negative_values() {
    assert_eq!(counting_sort(&[3, -2, 0, -2, 1]).unwrap(), vec![-2, -2, 0, 1, 3]);
}

#[test]
fn test_counting_sort_range_limit() {
    let err = counting_sort(&[i32::MIN, i32::MAX]).unwrap_err();
    assert_eq!(
        err,
        SortError::RangeTooLarge {
            range: 1 << 32,
            limit: MAX_COUNTING_RANGE
        }
    );
}

#[test]
fn test_bubble_sort_sorted_input_single_pass() {
    let (output, stats) = bubble_sort_with_stats(&[1, 2, 3]);
    assert_eq!(output, vec![1, 2, 3]);
    assert_eq!(stats, BubbleStats { passes: 1, swaps: 0 });
}

#[test]
fn test_bubble_sort_counts_swaps() {
    // Every pair is inverted: n(n-1)/2 swaps.
    let (output, stats) = bubble_sort_with_stats(&[4, 3, 2, 1]);
    assert_eq!(output, vec![1, 2, 3, 4]);
    assert_eq!(stats.swaps, 6);
    assert_eq!(stats.passes, 3);
}

#[test]
fn test_bubble_sort_short_inputs() {
    assert_eq!(bubble_sort_with_stats::<i32>(&[]).1.passes, 0);
    assert_eq!(bubble_sort_with_stats(&[9]).1.passes, 0);
}

#[test]
fn test_quick_sort_single() {
    assert_eq!(quick_sort(&[7]), vec![7]);
}

#[test]
fn test_quick_sort_duplicates_and_seeds() {
    let data = random_data(5, 500, 0, 3);
    let mut expected = data.clone();
    expected.sort_unstable();
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(quick_sort_with_rng(&data, &mut rng), expected);
    }
}

#[test]
fn test_quick_sort_large_constant_input() {
    // Every pivot choice is a worst case here; must not overflow the stack.
    let data = vec![1; 5_000];
    assert_eq!(quick_sort(&data), data);
}

#[test]
fn test_seeded_quick_sort_repeats_pivot_sequence() {
    let data = random_data(21, 400, 0, 50);

    let mut first = recording(8);
    let mut second = recording(8);
    let a = SortAlgorithm::Quick.sort_with_rng(&data, &mut first).unwrap();
    let b = SortAlgorithm::Quick.sort_with_rng(&data, &mut second).unwrap();

    assert_eq!(a, b);
    assert!(!first.draws.is_empty());
    assert_eq!(first.draws, second.draws);

    let mut other = recording(9);
    SortAlgorithm::Quick.sort_with_rng(&data, &mut other).unwrap();
    assert_ne!(first.draws, other.draws);
}

#[test]
fn test_only_quick_sort_draws_pivots() {
    let data = random_data(2, 50, 0, 9);
    for algorithm in SortAlgorithm::ALL {
        let mut rng = recording(1);
        algorithm.sort_with_rng(&data, &mut rng).unwrap();
        assert_eq!(rng.draws.is_empty(), algorithm != SortAlgorithm::Quick, "{}", algorithm);
    }
}

#[test]
fn test_stable_sorts_keep_equal_keys_in_order() {
    let keys = random_data(17, 300, 0, 9);
    let input = tagged(&keys);

    assert_stable(&merge_sort(&input), "merge sort");
    assert_stable(&bubble_sort(&input), "bubble sort");
    assert_stable(&insertion_sort(&input), "insertion sort");
    assert_stable(
        &counting_sort_by_key(&input, |item| item.key).unwrap(),
        "counting sort",
    );
}

#[test]
fn test_merge_sort_tie_takes_first_half() {
    // Split is [a, b] | [c, d]; equal keys across halves.
    let input = tagged(&[2, 1, 1, 2]);
    let output = merge_sort(&input);
    let order: Vec<usize> = output.iter().map(|t| t.index).collect();
    assert_eq!(order, vec![1, 2, 0, 3]);
}

#[test]
fn test_quick_sort_groups_duplicates_with_pivot() {
    let data = [3, 1, 3, 2, 3, 0, 3];
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(quick_sort_with_rng(&data, &mut rng), vec![0, 1, 2, 3, 3, 3, 3]);
    }
}

#[test]
fn test_insertion_and_merge_small() {
    assert_eq!(insertion_sort(&[2, 1]), vec![1, 2]);
    assert_eq!(merge_sort(&[2, 1, 2, 0]), vec![0, 1, 2, 2]);
}

#[test]
fn test_algorithm_lookup() {
    assert_eq!("counting sort".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Counting);
    assert_eq!("Merge-Sort".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Merge);
    assert_eq!("quick".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Quick);
    assert_eq!("bubble_sort".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Bubble);
    assert_eq!("5".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Insertion);
    assert!(matches!(
        "0".parse::<SortAlgorithm>(),
        Err(ConfigError::UnknownAlgorithm(_))
    ));
    assert!(matches!(
        "heap".parse::<SortAlgorithm>(),
        Err(ConfigError::UnknownAlgorithm(_))
    ));
}

#[test]
fn test_algorithm_metadata() {
    for (i, algorithm) in SortAlgorithm::ALL.iter().enumerate() {
        assert_eq!(algorithm.menu_index(), i + 1);
        assert_eq!(algorithm.to_string(), algorithm.name());
    }
    assert!(!SortAlgorithm::Quick.is_stable());
    assert!(SortAlgorithm::Merge.is_stable());
}
