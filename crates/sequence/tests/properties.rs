use std::collections::BTreeSet;

use proptest::prelude::*;
use sequence::{Distance, SequenceExt, from_iter, from_slice, ints, repeat};

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-8..8_i32, 0..60)
}

proptest! {
    #[test]
    fn all_is_not_any_not(data in small_vec(), pivot in -8..8_i32) {
        let all = from_slice(&data).all(|x| **x < pivot);
        let any_not = from_slice(&data).any(|x| !(**x < pivot));
        prop_assert_eq!(all, !any_not);
        prop_assert_eq!(all, data.iter().all(|x| *x < pivot));
    }

    #[test]
    fn count_after_drop(data in small_vec(), n in 0..80_usize) {
        let expected = (data.len() as Distance - n as Distance).max(0);
        prop_assert_eq!(from_slice(&data).drop(n).count(), expected);
        prop_assert_eq!(from_iter(data.clone()).drop(n).count(), expected);
    }

    #[test]
    fn chunk_by_partitions_input(data in small_vec()) {
        let groups: Vec<Vec<i32>> = from_slice(&data)
            .chunk_by(|a, b| a <= b)
            .map(|g| g.copied().to_vec())
            .to_vec();
        for group in &groups {
            prop_assert!(!group.is_empty());
            prop_assert!(group.windows(2).all(|w| w[0] <= w[1]));
        }
        for pair in groups.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            prop_assert!(left[left.len() - 1] > right[0]);
        }
        prop_assert_eq!(groups.concat(), data);
    }

    #[test]
    fn dedup_keeps_run_heads(data in small_vec()) {
        let got = from_slice(&data).dedup().copied().to_vec();
        let mut expected = data.clone();
        expected.dedup();
        prop_assert!(got.windows(2).all(|w| w[0] != w[1]));
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn zip_and_product_lengths(m in 0..30_i32, n in 0..30_i32) {
        prop_assert_eq!(ints(0, m).zip(ints(0, n)).count(), m.min(n) as Distance);
        prop_assert_eq!(
            ints(0, m).cartesian_product(ints(0, n)).count(),
            (m * n) as Distance
        );
        prop_assert_eq!(
            from_iter(0..m).zip(ints(0, n)).to_vec().len(),
            m.min(n) as usize
        );
    }

    #[test]
    fn reverse_matches_std(data in small_vec()) {
        let got = from_slice(&data).reverse().copied().to_vec();
        let expected: Vec<i32> = data.iter().rev().copied().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn chunk_and_stride_match_std(data in small_vec(), width in 1..9_usize) {
        let chunks: Vec<Vec<i32>> = from_slice(&data)
            .chunk(width)
            .map(|c| c.copied().to_vec())
            .to_vec();
        let expected: Vec<Vec<i32>> = data.chunks(width).map(<[i32]>::to_vec).collect();
        prop_assert_eq!(chunks, expected);

        let strided = from_slice(&data).stride(width).copied().to_vec();
        let expected: Vec<i32> = data.iter().step_by(width).copied().collect();
        prop_assert_eq!(strided, expected);
    }

    #[test]
    fn set_operations_on_sorted_unique(
        a in prop::collection::btree_set(0..40_i32, 0..20),
        b in prop::collection::btree_set(0..40_i32, 0..20),
    ) {
        let (va, vb): (Vec<i32>, Vec<i32>) = (a.iter().copied().collect(), b.iter().copied().collect());
        let run = |kind: u8| -> Vec<i32> {
            let (x, y) = (from_slice(&va).copied(), from_slice(&vb).copied());
            let cmp = |p: &i32, q: &i32| p.cmp(q);
            match kind {
                0 => x.set_union(y, cmp).to_vec(),
                1 => x.set_intersection(y, cmp).to_vec(),
                2 => x.set_difference(y, cmp).to_vec(),
                _ => x.set_symmetric_difference(y, cmp).to_vec(),
            }
        };
        let collect = |s: BTreeSet<&i32>| s.into_iter().copied().collect::<Vec<i32>>();
        prop_assert_eq!(run(0), collect(a.union(&b).collect()));
        prop_assert_eq!(run(1), collect(a.intersection(&b).collect()));
        prop_assert_eq!(run(2), collect(a.difference(&b).collect()));
        prop_assert_eq!(run(3), collect(a.symmetric_difference(&b).collect()));
    }

    #[test]
    fn repeat_take(value in any::<u16>(), n in 0..50_usize) {
        prop_assert_eq!(repeat(value).take(n).to_vec(), vec![value; n]);
    }
}
