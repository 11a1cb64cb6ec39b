use std::borrow::Borrow;

use crate::derive;
use crate::traits::{Distance, MultipassSequence, Sequence};

/// Bounds of the first occurrence of `needle` inside `haystack`.
///
/// An empty needle matches at the start.
pub fn search<H, N>(haystack: &mut H, mut needle: N) -> Option<(H::Cursor, H::Cursor)>
where
    H: MultipassSequence<Element: PartialEq<N::Element>>,
    N: MultipassSequence,
{
    let mut start = haystack.first();
    let n0 = needle.first();
    loop {
        let mut h = start.clone();
        let mut n = n0.clone();
        loop {
            if needle.is_last(&n) {
                return Some((start, h));
            }
            if haystack.is_last(&h) {
                return None;
            }
            if haystack.read_at(&h) != needle.read_at(&n) {
                break;
            }
            haystack.inc(&mut h);
            needle.inc(&mut n);
        }
        haystack.inc(&mut start);
    }
}

/// First position at which `pred` stops holding, for a sequence
/// partitioned so that `pred` holds on a prefix.
///
/// Halves the range with derived `next`/`distance`, so the number of
/// predicate calls is logarithmic even when cursor movement is not.
#[track_caller]
pub fn partition_point<S, P>(seq: &mut S, mut pred: P) -> S::Cursor
where
    S: MultipassSequence,
    P: FnMut(&S::Element) -> bool,
{
    let mut lo = seq.first();
    let end = derive::last(seq);
    let mut len: Distance = derive::distance(seq, &lo, &end);
    while len > 0 {
        let half = len / 2;
        let mid = derive::next(seq, lo.clone(), half);
        if pred(&seq.read_at(&mid)) {
            lo = derive::next(seq, mid, 1);
            len -= half + 1;
        } else {
            len = half;
        }
    }
    lo
}

/// First element not less than `value`.
#[track_caller]
pub fn lower_bound<S, V>(seq: &mut S, value: &V) -> S::Cursor
where
    S: MultipassSequence<Element: Borrow<V>>,
    V: Ord + ?Sized,
{
    partition_point(seq, |e| e.borrow() < value)
}

/// First element greater than `value`.
#[track_caller]
pub fn upper_bound<S, V>(seq: &mut S, value: &V) -> S::Cursor
where
    S: MultipassSequence<Element: Borrow<V>>,
    V: Ord + ?Sized,
{
    partition_point(seq, |e| e.borrow() <= value)
}
