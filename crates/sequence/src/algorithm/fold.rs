use std::borrow::Borrow;
use std::iter::{Product, Sum};

use crate::iter::iter;
use crate::traits::{Distance, Sequence};
use crate::util;

pub fn for_each<S, F>(mut seq: S, mut func: F)
where
    S: Sequence,
    F: FnMut(S::Element),
{
    seq.for_each_while(|value| {
        func(value);
        true
    });
}

pub fn fold<S, A, F>(mut seq: S, init: A, mut func: F) -> A
where
    S: Sequence,
    F: FnMut(A, S::Element) -> A,
{
    let mut acc = init;
    let mut cur = seq.first();
    while !seq.is_last(&cur) {
        acc = func(acc, seq.read_at(&cur));
        seq.inc(&mut cur);
    }
    acc
}

/// Fold seeded with the first element; `None` when the sequence is empty.
pub fn fold_first<S, F>(mut seq: S, mut func: F) -> Option<S::Element>
where
    S: Sequence,
    F: FnMut(S::Element, S::Element) -> S::Element,
{
    let mut acc: Option<S::Element> = None;
    seq.for_each_while(|value| {
        acc = Some(match acc.take() {
            Some(a) => func(a, value),
            None => value,
        });
        true
    });
    acc
}

pub fn sum<S, T>(seq: S) -> T
where
    S: Sequence,
    T: Sum<S::Element>,
{
    iter(seq).sum()
}

pub fn product<S, T>(seq: S) -> T
where
    S: Sequence,
    T: Product<S::Element>,
{
    iter(seq).product()
}

/// Whether `pred` holds for every element; `true` when empty.
pub fn all<S, P>(mut seq: S, mut pred: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Element) -> bool,
{
    let stop = seq.for_each_while(|value| pred(&value));
    seq.is_last(&stop)
}

pub fn any<S, P>(seq: S, mut pred: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Element) -> bool,
{
    !all(seq, |value| !pred(value))
}

pub fn none<S, P>(seq: S, pred: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Element) -> bool,
{
    !any(seq, pred)
}

#[track_caller]
pub fn count_if<S, P>(seq: S, mut pred: P) -> Distance
where
    S: Sequence,
    P: FnMut(&S::Element) -> bool,
{
    fold(seq, 0, |n, value| {
        if pred(&value) {
            util::checked_add(n, 1, "count_if")
        } else {
            n
        }
    })
}

#[track_caller]
pub fn count_eq<S, V>(seq: S, value: &V) -> Distance
where
    S: Sequence<Element: Borrow<V>>,
    V: PartialEq + ?Sized,
{
    count_if(seq, |e| e.borrow() == value)
}

pub fn to_vec<S: Sequence>(seq: S) -> Vec<S::Element> {
    let mut out = Vec::new();
    for_each(seq, |value| out.push(value));
    out
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::source::{from_iter, from_slice, ints};

    #[test]
    fn all_and_any_are_duals() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let len = rng.random_range(0..10);
            let data: Vec<i32> = (0..len).map(|_| rng.random_range(0..4)).collect();
            let pred = |x: &&i32| **x != 0;
            let all_of = all(from_slice(&data), pred);
            assert_eq!(all_of, !any(from_slice(&data), |x| !pred(x)));
            assert_eq!(all_of, data.iter().all(|x| *x != 0));
            assert_eq!(none(from_slice(&data), pred), !data.iter().any(|x| *x != 0));
        }
        assert!(all(from_slice::<i32>(&[]), |_| false));
        assert!(!any(from_slice::<i32>(&[]), |_| true));
    }

    #[test]
    fn folds() {
        assert_eq!(fold(ints(1, 5), 0, |a, x| a + x), 10);
        assert_eq!(fold_first(ints(1, 5), |a, x| a * x), Some(24));
        assert_eq!(fold_first(ints(0, 0), |a, x| a + x), None);
        assert_eq!(sum::<_, i64>(ints(1i64, 101)), 5050);
        assert_eq!(product::<_, u64>(ints(1u64, 6)), 120);
    }

    #[test]
    fn counting() {
        let data = [1, 2, 2, 3, 2];
        assert_eq!(count_eq(from_slice(&data), &2), 3);
        assert_eq!(count_if(from_iter(data), |x| *x > 1), 4);
        assert_eq!(to_vec(from_iter(data)), data.to_vec());
    }
}
