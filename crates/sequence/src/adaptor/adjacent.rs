//! Fixed-width windows over a multi-pass base.

use std::cmp::Ordering;

use super::subsequence::{Subsequence, subsequence};
use crate::error;
use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Distance, MultipassSequence,
    RandomAccessSequence, Sequence, SizedSequence,
};
use crate::util;

/// Every run of `N` consecutive elements, as an array.
#[derive(Clone, Debug)]
pub struct Adjacent<B, const N: usize> {
    base: B,
}

#[track_caller]
pub fn adjacent<B: MultipassSequence, const N: usize>(base: B) -> Adjacent<B, N> {
    if N == 0 {
        error::precondition("adjacent window of width zero");
    }
    Adjacent { base }
}

/// Consecutive pairs; `adjacent::<2>`.
pub fn pairwise<B: MultipassSequence>(base: B) -> Adjacent<B, 2> {
    adjacent(base)
}

/// Cursor of [`Adjacent`]: one base cursor per window slot.
///
/// Compares by the trailing slot.
#[derive(Clone, Debug)]
pub struct AdjacentCursor<C, const N: usize>([C; N]);

impl<C: PartialEq, const N: usize> PartialEq for AdjacentCursor<C, N> {
    fn eq(&self, other: &Self) -> bool {
        self.0[N - 1] == other.0[N - 1]
    }
}

impl<C: Eq, const N: usize> Eq for AdjacentCursor<C, N> {}

impl<C: PartialOrd, const N: usize> PartialOrd for AdjacentCursor<C, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0[N - 1].partial_cmp(&other.0[N - 1])
    }
}

impl<C: Ord, const N: usize> Ord for AdjacentCursor<C, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0[N - 1].cmp(&other.0[N - 1])
    }
}

impl<B: MultipassSequence, const N: usize> Sequence for Adjacent<B, N> {
    type Cursor = AdjacentCursor<B::Cursor, N>;
    type Element = [B::Element; N];

    const CAPABILITIES: Capabilities = {
        let base = B::CAPABILITIES;
        base.bounded(base.bounded && base.is_bidirectional())
            .contiguous(false)
            .read_only(true)
    };

    fn first(&mut self) -> Self::Cursor {
        let base = &mut self.base;
        let mut cur = base.first();
        AdjacentCursor(std::array::from_fn(|i| {
            if i > 0 && !base.is_last(&cur) {
                base.inc(&mut cur);
            }
            cur.clone()
        }))
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        self.base.is_last(&cur.0[N - 1])
    }

    #[track_caller]
    fn read_at(&mut self, cur: &Self::Cursor) -> Self::Element {
        std::array::from_fn(|i| self.base.read_at(&cur.0[i]))
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        for c in &mut cur.0 {
            self.base.inc(c);
        }
    }

    fn dec(&mut self, cur: &mut Self::Cursor) {
        for c in &mut cur.0 {
            self.base.dec(c);
        }
    }

    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        for c in &mut cur.0 {
            self.base.inc_by(c, offset);
        }
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        self.base.distance(&from.0[N - 1], &to.0[N - 1])
    }

    fn last(&mut self) -> Self::Cursor {
        let base = &mut self.base;
        let first = base.first();
        let mut cur = base.last();
        let mut slots: [B::Cursor; N] = std::array::from_fn(|i| {
            if i > 0 && cur != first {
                base.dec(&mut cur);
            }
            cur.clone()
        });
        slots.reverse();
        AdjacentCursor(slots)
    }

    fn size(&mut self) -> Distance {
        (self.base.size() - util::to_distance(N - 1, "adjacent width")).max(0)
    }
}

impl<B: MultipassSequence, const N: usize> MultipassSequence for Adjacent<B, N> {}
impl<B: BidirectionalSequence, const N: usize> BidirectionalSequence for Adjacent<B, N> {}
impl<B: RandomAccessSequence, const N: usize> RandomAccessSequence for Adjacent<B, N> {}
impl<B: BidirectionalSequence + BoundedSequence, const N: usize> BoundedSequence
    for Adjacent<B, N>
{
}
impl<B: MultipassSequence + SizedSequence, const N: usize> SizedSequence for Adjacent<B, N> {}

/// Overlapping windows of `width` elements, each a [`Subsequence`].
#[derive(Clone, Debug)]
pub struct Slide<B> {
    base: B,
    width: Distance,
}

#[track_caller]
pub fn slide<B: MultipassSequence + Clone>(base: B, width: usize) -> Slide<B> {
    if width == 0 {
        error::precondition("slide window of width zero");
    }
    Slide {
        base,
        width: util::to_distance(width, "slide width"),
    }
}

/// Cursor of [`Slide`]: the window's first and last element positions.
///
/// Compares by the trailing position.
#[derive(Clone, Debug)]
pub struct SlideCursor<C> {
    from: C,
    to: C,
}

impl<C: PartialEq> PartialEq for SlideCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.to == other.to
    }
}

impl<C: Eq> Eq for SlideCursor<C> {}

impl<C: PartialOrd> PartialOrd for SlideCursor<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to.partial_cmp(&other.to)
    }
}

impl<C: Ord> Ord for SlideCursor<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to.cmp(&other.to)
    }
}

impl<B: MultipassSequence + Clone> Sequence for Slide<B> {
    type Cursor = SlideCursor<B::Cursor>;
    type Element = Subsequence<B>;

    const CAPABILITIES: Capabilities = {
        let base = B::CAPABILITIES;
        base.bounded(base.bounded && base.is_bidirectional())
            .contiguous(false)
            .read_only(true)
    };

    fn first(&mut self) -> Self::Cursor {
        let from = self.base.first();
        let mut to = from.clone();
        let steps = util::to_index(self.width - 1, "slide width");
        crate::derive::advance(&mut self.base, &mut to, steps);
        SlideCursor { from, to }
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        self.base.is_last(&cur.to)
    }

    #[track_caller]
    fn read_at(&mut self, cur: &Self::Cursor) -> Subsequence<B> {
        let mut end = cur.to.clone();
        self.base.inc(&mut end);
        subsequence(self.base.clone(), cur.from.clone(), end)
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        self.base.inc(&mut cur.from);
        self.base.inc(&mut cur.to);
    }

    fn dec(&mut self, cur: &mut Self::Cursor) {
        self.base.dec(&mut cur.from);
        self.base.dec(&mut cur.to);
    }

    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        self.base.inc_by(&mut cur.from, offset);
        self.base.inc_by(&mut cur.to, offset);
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        self.base.distance(&from.to, &to.to)
    }

    fn last(&mut self) -> Self::Cursor {
        let first = self.base.first();
        let to = self.base.last();
        let mut from = to.clone();
        for _ in 1..self.width {
            if from == first {
                break;
            }
            self.base.dec(&mut from);
        }
        SlideCursor { from, to }
    }

    fn size(&mut self) -> Distance {
        (self.base.size() - (self.width - 1)).max(0)
    }
}

impl<B: MultipassSequence + Clone> MultipassSequence for Slide<B> {}
impl<B: BidirectionalSequence + Clone> BidirectionalSequence for Slide<B> {}
impl<B: RandomAccessSequence + Clone> RandomAccessSequence for Slide<B> {}
impl<B: BidirectionalSequence + BoundedSequence + Clone> BoundedSequence for Slide<B> {}
impl<B: MultipassSequence + SizedSequence + Clone> SizedSequence for Slide<B> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{from_slice, ints};
    use crate::SequenceExt;

    #[test]
    fn pairs_of_neighbours() {
        let data = [1, 2, 4, 7];
        let diffs = from_slice(&data)
            .pairwise()
            .map(|[a, b]| b - a)
            .collect::<Vec<_>>();
        assert_eq!(diffs, vec![1, 2, 3]);
        assert_eq!(from_slice(&data).adjacent::<5>().count(), 0);
        assert_eq!(from_slice(&data).adjacent::<1>().count(), 4);
    }

    #[test]
    fn adjacent_size_and_last_agree_with_traversal() {
        for len in 0..6 {
            let mut seq = ints(0, len).adjacent::<3>();
            let expected = (len as isize - 2).max(0);
            assert_eq!(seq.size(), expected, "len={len}");
            let first = seq.first();
            let last = seq.last();
            assert_eq!(seq.distance(&first, &last), expected, "len={len}");
            assert!(seq.is_last(&last));
        }
    }

    #[test]
    fn adjacent_reversed() {
        let got = ints(0, 5).adjacent::<3>().reverse().collect::<Vec<_>>();
        assert_eq!(got, vec![[2, 3, 4], [1, 2, 3], [0, 1, 2]]);
    }

    #[test]
    fn sliding_windows() {
        let data = [1, 2, 3, 4, 5];
        let sums = from_slice(&data)
            .slide(3)
            .map(|w| w.copied().sum())
            .collect::<Vec<i32>>();
        assert_eq!(sums, vec![6, 9, 12]);
        assert_eq!(from_slice(&data).slide(6).count(), 0);

        let mut seq = from_slice(&data).slide(2);
        let last = seq.last();
        let mut back = last.clone();
        seq.dec(&mut back);
        let window = seq.read_at(&back).copied().collect::<Vec<_>>();
        assert_eq!(window, vec![4, 5]);
    }
}
