use std::cmp::Ordering;

use super::filter::FirstCache;
use crate::derive;
use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, ContiguousSequence, Distance,
    MultipassSequence, RandomAccessSequence, Sequence, SizedSequence, SwappableSequence,
};
use crate::util;

/// At most `count` leading elements.
#[derive(Clone, Debug)]
pub struct Take<B> {
    base: B,
    count: Distance,
}

#[track_caller]
pub fn take<B: Sequence>(base: B, count: usize) -> Take<B> {
    Take {
        base,
        count: util::to_distance(count, "take count"),
    }
}

/// Cursor of [`Take`]; compares by the base position only.
#[derive(Clone, Debug)]
pub struct TakeCursor<C> {
    base: C,
    remaining: Distance,
}

impl<C> TakeCursor<C> {
    pub fn base(&self) -> &C {
        &self.base
    }
}

impl<C: PartialEq> PartialEq for TakeCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<C: Eq> Eq for TakeCursor<C> {}

impl<C: PartialOrd> PartialOrd for TakeCursor<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base.partial_cmp(&other.base)
    }
}

impl<C: Ord> Ord for TakeCursor<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.base.cmp(&other.base)
    }
}

impl<B: Sequence> Take<B> {
    /// Number of elements, when the base makes it known in constant time.
    fn known_len(&mut self) -> Distance {
        if B::CAPABILITIES.sized {
            self.base.size().min(self.count)
        } else {
            self.count
        }
    }
}

impl<B: Sequence> Sequence for Take<B> {
    type Cursor = TakeCursor<B::Cursor>;
    type Element = B::Element;

    const CAPABILITIES: Capabilities = {
        let base = B::CAPABILITIES;
        let sized = base.sized || base.infinite;
        base.sized(sized)
            .bounded(base.is_random_access() && sized)
            .infinite(false)
    };

    fn first(&mut self) -> Self::Cursor {
        TakeCursor {
            base: self.base.first(),
            remaining: self.count,
        }
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        cur.remaining <= 0 || self.base.is_last(&cur.base)
    }

    #[track_caller]
    fn read_at(&mut self, cur: &Self::Cursor) -> B::Element {
        self.base.read_at(&cur.base)
    }

    unsafe fn read_at_unchecked(&mut self, cur: &Self::Cursor) -> B::Element {
        // SAFETY: forwarded contract.
        unsafe { self.base.read_at_unchecked(&cur.base) }
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        self.base.inc(&mut cur.base);
        cur.remaining -= 1;
    }

    fn dec(&mut self, cur: &mut Self::Cursor) {
        self.base.dec(&mut cur.base);
        cur.remaining += 1;
    }

    #[track_caller]
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        self.base.inc_by(&mut cur.base, offset);
        cur.remaining = util::checked_add(cur.remaining, -offset, "take cursor");
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        self.base.distance(&from.base, &to.base)
    }

    fn last(&mut self) -> Self::Cursor {
        let len = self.known_len();
        let mut cur = self.first();
        self.inc_by(&mut cur, len);
        cur
    }

    fn size(&mut self) -> Distance {
        self.known_len()
    }
}

impl<B: MultipassSequence> MultipassSequence for Take<B> {}
impl<B: BidirectionalSequence> BidirectionalSequence for Take<B> {}
impl<B: RandomAccessSequence> RandomAccessSequence for Take<B> {}
impl<B: RandomAccessSequence + SizedSequence> BoundedSequence for Take<B> {}
impl<B: SizedSequence> SizedSequence for Take<B> {}

impl<B: ContiguousSequence> ContiguousSequence for Take<B> {
    type Value = B::Value;

    fn as_slice(&self) -> &[B::Value] {
        let all = self.base.as_slice();
        let len = usize::try_from(self.count).unwrap_or(0).min(all.len());
        &all[..len]
    }
}

impl<B: SwappableSequence + SizedSequence> SwappableSequence for Take<B> {
    type Value = B::Value;

    fn with_pair<R>(
        &mut self,
        a: &Self::Cursor,
        b: &Self::Cursor,
        f: impl FnOnce(&B::Value, &B::Value) -> R,
    ) -> R {
        self.base.with_pair(&a.base, &b.base, f)
    }

    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        self.base.swap_at(&a.base, &b.base)
    }

    unsafe fn with_pair_unchecked<R>(
        &mut self,
        a: &Self::Cursor,
        b: &Self::Cursor,
        f: impl FnOnce(&B::Value, &B::Value) -> R,
    ) -> R {
        // SAFETY: forwarded contract.
        unsafe { self.base.with_pair_unchecked(&a.base, &b.base, f) }
    }

    unsafe fn swap_at_unchecked(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        // SAFETY: forwarded contract.
        unsafe { self.base.swap_at_unchecked(&a.base, &b.base) }
    }
}

/// Everything after the first `count` elements.
#[derive(Clone, Debug)]
pub struct Drop<B: Sequence> {
    base: B,
    count: Distance,
    cache: FirstCache<B::Cursor>,
}

#[track_caller]
pub fn drop<B: Sequence>(base: B, count: usize) -> Drop<B> {
    Drop {
        base,
        count: util::to_distance(count, "drop count"),
        cache: FirstCache::Empty,
    }
}

impl<B: Sequence<Cursor: Clone>> Sequence for Drop<B> {
    type Cursor = B::Cursor;
    type Element = B::Element;

    const CAPABILITIES: Capabilities = B::CAPABILITIES;

    #[track_caller]
    fn first(&mut self) -> B::Cursor {
        let mut cache = std::mem::replace(&mut self.cache, FirstCache::Empty);
        let base = &mut self.base;
        let count = self.count;
        let cur = cache.get_or_scan(B::CAPABILITIES.is_multipass(), || {
            let mut cur = base.first();
            if B::CAPABILITIES.is_random_access() && B::CAPABILITIES.sized {
                let skip = count.min(base.size());
                base.inc_by(&mut cur, skip);
            } else {
                derive::advance(base, &mut cur, util::to_index(count, "drop count"));
            }
            cur
        });
        self.cache = cache;
        cur
    }

    fn is_last(&mut self, cur: &B::Cursor) -> bool {
        self.base.is_last(cur)
    }

    #[track_caller]
    fn read_at(&mut self, cur: &B::Cursor) -> B::Element {
        self.base.read_at(cur)
    }

    unsafe fn read_at_unchecked(&mut self, cur: &B::Cursor) -> B::Element {
        // SAFETY: forwarded contract.
        unsafe { self.base.read_at_unchecked(cur) }
    }

    fn inc(&mut self, cur: &mut B::Cursor) {
        self.base.inc(cur)
    }

    fn dec(&mut self, cur: &mut B::Cursor) {
        self.base.dec(cur)
    }

    fn inc_by(&mut self, cur: &mut B::Cursor, offset: Distance) {
        self.base.inc_by(cur, offset)
    }

    fn distance(&mut self, from: &B::Cursor, to: &B::Cursor) -> Distance {
        self.base.distance(from, to)
    }

    fn last(&mut self) -> B::Cursor {
        self.base.last()
    }

    fn size(&mut self) -> Distance {
        (self.base.size() - self.count).max(0)
    }
}

impl<B: MultipassSequence> MultipassSequence for Drop<B> {}
impl<B: BidirectionalSequence> BidirectionalSequence for Drop<B> {}
impl<B: RandomAccessSequence> RandomAccessSequence for Drop<B> {}
impl<B: BoundedSequence<Cursor: Clone>> BoundedSequence for Drop<B> {}
impl<B: SizedSequence<Cursor: Clone>> SizedSequence for Drop<B> {}

impl<B: ContiguousSequence> ContiguousSequence for Drop<B> {
    type Value = B::Value;

    fn as_slice(&self) -> &[B::Value] {
        let all = self.base.as_slice();
        let skip = usize::try_from(self.count).unwrap_or(0).min(all.len());
        &all[skip..]
    }
}

impl<B: SwappableSequence> SwappableSequence for Drop<B> {
    type Value = B::Value;

    fn with_pair<R>(
        &mut self,
        a: &B::Cursor,
        b: &B::Cursor,
        f: impl FnOnce(&B::Value, &B::Value) -> R,
    ) -> R {
        self.base.with_pair(a, b, f)
    }

    fn swap_at(&mut self, a: &B::Cursor, b: &B::Cursor) {
        self.base.swap_at(a, b)
    }

    unsafe fn with_pair_unchecked<R>(
        &mut self,
        a: &B::Cursor,
        b: &B::Cursor,
        f: impl FnOnce(&B::Value, &B::Value) -> R,
    ) -> R {
        // SAFETY: forwarded contract.
        unsafe { self.base.with_pair_unchecked(a, b, f) }
    }

    unsafe fn swap_at_unchecked(&mut self, a: &B::Cursor, b: &B::Cursor) {
        // SAFETY: forwarded contract.
        unsafe { self.base.swap_at_unchecked(a, b) }
    }
}

#[cfg(test)]
mod tests {
    use crate::source::{from_iter, from_slice, from_slice_mut, iota, repeat};
    use crate::{ContiguousSequence, SequenceExt, Sequence};

    #[test]
    fn take_bounds_an_infinite_sequence() {
        let mut seq = repeat(7).take(5);
        assert_eq!(seq.size(), 5);
        let caps = seq_caps(&seq);
        assert!(caps.bounded && caps.sized && !caps.infinite);
        assert_eq!(seq.collect::<Vec<_>>(), vec![7; 5]);
    }

    fn seq_caps<S: Sequence>(_: &S) -> crate::Capabilities {
        S::CAPABILITIES
    }

    #[test]
    fn take_more_than_available() {
        let data = [1, 2, 3];
        let mut seq = from_slice(&data).take(10);
        assert_eq!(seq.size(), 3);
        let last = seq.last();
        assert!(seq.is_last(&last));
        assert_eq!(seq.as_slice(), &data);
        assert_eq!(seq.copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn take_cursor_equality_ignores_counter() {
        let mut seq = iota(0u32).take(4);
        let mut a = seq.first();
        seq.inc_by(&mut a, 4);
        let b = seq.last();
        assert_eq!(a, b);
        assert!(seq.is_last(&a));
    }

    #[test]
    fn drop_counts_match_saturating_subtraction() {
        let data = [1, 2, 3, 4, 5];
        for n in 0..8 {
            let expected = (data.len() as isize - n as isize).max(0);
            assert_eq!(from_slice(&data).drop(n).count(), expected, "n={n}");
            assert_eq!(from_iter(data).drop(n).count(), expected, "n={n}");
            assert_eq!(
                from_slice(&data).filter(|_| true).drop(n).count(),
                expected,
                "n={n}"
            );
        }
    }

    #[test]
    fn drop_then_take_is_a_window() {
        let data = [0, 1, 2, 3, 4, 5, 6];
        let seq = from_slice(&data).drop(2).take(3);
        assert_eq!(seq.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn swapping_through_drop_and_take() {
        let mut data = [9, 8, 7, 6, 5];
        {
            let mut seq = from_slice_mut(&mut data).drop(1).take(3);
            let first = seq.first();
            let last = {
                let mut c = first.clone();
                seq.inc_by(&mut c, 2);
                c
            };
            crate::SwappableSequence::swap_at(&mut seq, &first, &last);
        }
        assert_eq!(data, [9, 6, 7, 8, 5]);
    }
}
