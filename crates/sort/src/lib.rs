//! In-place, unstable sorting of swappable sequences.
//!
//! The default engine is a pattern-defeating quicksort: median-of-three or
//! ninther pivots, insertion sort for short ranges, a three-way split when a
//! range starts with copies of its left neighbour, and a heap sort fallback
//! once too many partitions come out lopsided.

mod algorithms;

use std::cmp::Ordering;

use sequence::SwappableSequence;

use algorithms::common::Engine;
pub use algorithms::heap::{
    heap_sort, heap_sort_by, make_heap, make_heap_by, pop_heap, pop_heap_by, push_heap,
    push_heap_by, sort_heap, sort_heap_by,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    Pdqsort,
    HeapSort,
    InsertionSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::Pdqsort,
    SortAlgorithm::HeapSort,
    SortAlgorithm::InsertionSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::Pdqsort => "pdqsort",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Ranges shorter than this are insertion sorted.
    pub insertion_threshold: usize,
    /// Ranges longer than this pick the pivot as a ninther.
    pub ninther_threshold: usize,
    /// Element moves allowed before a partial insertion sort gives up.
    pub partial_insertion_limit: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 24,
    ninther_threshold: 128,
    partial_insertion_limit: 8,
};

/// Sort ascending.
pub fn sort<S>(seq: S)
where
    S: SwappableSequence<Value: Ord>,
{
    sort_by(seq, |a, b| a < b);
}

/// Sort so that no element is `is_less` than its predecessor.
///
/// `is_less` must be a strict weak ordering. If it is not, the resulting
/// order is unspecified, but every element is still present exactly once.
pub fn sort_by<S, F>(seq: S, is_less: F)
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    sort_with(SortAlgorithm::Pdqsort, seq, is_less);
}

pub fn sort_by_key<S, K, F>(seq: S, mut key: F)
where
    S: SwappableSequence,
    K: Ord,
    F: FnMut(&S::Value) -> K,
{
    sort_by(seq, |a, b| key(a) < key(b));
}

pub fn sort_by_ordering<S, F>(seq: S, mut cmp: F)
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> Ordering,
{
    sort_by(seq, |a, b| cmp(a, b) == Ordering::Less);
}

#[track_caller]
pub fn sort_with<S, F>(algo: SortAlgorithm, mut seq: S, is_less: F)
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut engine = Engine::new(&mut seq, is_less);
    let len = engine.len();
    match algo {
        SortAlgorithm::Pdqsort => algorithms::pdqsort::sort(&mut engine),
        SortAlgorithm::HeapSort => engine.heap_sort(0, len),
        SortAlgorithm::InsertionSort => engine.insertion_sort(0, len),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use sequence::{SequenceExt, from_slice_mut, from_vec};

    use super::*;

    fn assert_sorts_like_std(data: &[u64]) {
        for &algo in all_algorithms() {
            let mut actual = data.to_vec();
            sort_with(algo, from_slice_mut(&mut actual), |a, b| a < b);

            let mut expected = data.to_vec();
            expected.sort_unstable();

            assert_eq!(
                actual,
                expected,
                "algorithm={} input_len={}",
                algorithm_name(algo),
                data.len(),
            );
        }
    }

    #[test]
    fn algorithm_names_are_unique() {
        let mut seen = HashSet::new();
        for &algo in all_algorithms() {
            assert!(seen.insert(algorithm_name(algo)));
        }
    }

    #[test]
    fn documented_example() {
        let mut data = [5, 3, 3, 1, 4, 1, 5, 9, 2, 6];
        sort(from_slice_mut(&mut data));
        assert_eq!(data, [1, 1, 2, 3, 3, 4, 5, 5, 6, 9]);
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![u64::MIN, 1, u64::MAX, 0, u64::MAX - 1, 2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 32, 63, 64, 127, 128, 129, 511, 2048] {
            let data: Vec<u64> = (0..size).map(|_| rng.random::<u64>()).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let data: Vec<u64> = (0..size).map(|_| (rng.random::<u64>() % 16) * 17).collect();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(0x1D3E_2026);
        let mut data: Vec<i32> = (0..3000).map(|_| rng.random_range(-500..500)).collect();
        sort(from_slice_mut(&mut data));
        let once = data.clone();
        sort(from_slice_mut(&mut data));
        assert_eq!(data, once);
    }

    #[test]
    fn sorts_through_adaptors() {
        let mut data: Vec<i32> = (0..100).collect();
        sort(from_slice_mut(&mut data).reverse());
        assert!(data.iter().rev().is_sorted());

        let mut data = vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        sort(from_slice_mut(&mut data).slice(2, 7));
        assert_eq!(data, [9, 8, 3, 4, 5, 6, 7, 2, 1, 0]);

        let mut data = vec![4, 3, 2, 1, 0];
        sort(from_slice_mut(&mut data).drop(1).take(3));
        assert_eq!(data, [4, 1, 2, 3, 0]);
    }

    #[test]
    fn key_and_ordering_forms() {
        let mut words = from_vec(vec!["delta", "alpha", "charlie", "bravo", "echo"]);
        sort_by_key(&mut words, |w| w.len());
        let lens: Vec<usize> = (&mut words).to_vec().iter().map(|w| w.len()).collect();
        assert!(lens.is_sorted());

        sort_by_ordering(&mut words, |a, b| b.cmp(a));
        assert_eq!(
            words.into_inner(),
            ["echo", "delta", "charlie", "bravo", "alpha"]
        );
    }

    #[test]
    fn inconsistent_comparator_keeps_every_element() {
        let mut rng = StdRng::seed_from_u64(0xBAD_C0DE);
        let data: Vec<u32> = (0..2000).collect();
        let mut shuffled = data.clone();
        for i in (1..shuffled.len()).rev() {
            shuffled.swap(i, rng.random_range(0..=i));
        }
        let mut coin = StdRng::seed_from_u64(7);
        sort_by(from_slice_mut(&mut shuffled), |_, _| coin.random_bool(0.5));
        shuffled.sort_unstable();
        assert_eq!(shuffled, data);
    }
}
