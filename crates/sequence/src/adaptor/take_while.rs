use super::filter::FirstCache;
use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Distance, MultipassSequence,
    RandomAccessSequence, Sequence,
};

/// Skips the leading elements for which `pred` holds.
#[derive(Clone, Debug)]
pub struct DropWhile<B: Sequence, P> {
    base: B,
    pred: P,
    cache: FirstCache<B::Cursor>,
}

pub fn drop_while<B, P>(base: B, pred: P) -> DropWhile<B, P>
where
    B: Sequence,
    P: FnMut(&B::Element) -> bool,
{
    DropWhile {
        base,
        pred,
        cache: FirstCache::Empty,
    }
}

impl<B, P> Sequence for DropWhile<B, P>
where
    B: Sequence<Cursor: Clone>,
    P: FnMut(&B::Element) -> bool,
{
    type Cursor = B::Cursor;
    type Element = B::Element;

    const CAPABILITIES: Capabilities = B::CAPABILITIES.sized(false).contiguous(false);

    #[track_caller]
    fn first(&mut self) -> B::Cursor {
        let mut cache = std::mem::replace(&mut self.cache, FirstCache::Empty);
        let base = &mut self.base;
        let pred = &mut self.pred;
        let cur = cache.get_or_scan(B::CAPABILITIES.is_multipass(), || {
            let mut cur = base.first();
            while !base.is_last(&cur) && pred(&base.read_at(&cur)) {
                base.inc(&mut cur);
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
}

impl<B: MultipassSequence, P: FnMut(&B::Element) -> bool> MultipassSequence for DropWhile<B, P> {}
impl<B: BidirectionalSequence, P: FnMut(&B::Element) -> bool> BidirectionalSequence
    for DropWhile<B, P>
{
}
impl<B: RandomAccessSequence, P: FnMut(&B::Element) -> bool> RandomAccessSequence
    for DropWhile<B, P>
{
}
impl<B: BoundedSequence<Cursor: Clone>, P: FnMut(&B::Element) -> bool> BoundedSequence
    for DropWhile<B, P>
{
}

/// The leading elements for which `pred` holds.
///
/// The end is the first position where `pred` fails, so the adaptor is never
/// bounded, sized or infinite.
#[derive(Clone, Debug)]
pub struct TakeWhile<B, P> {
    base: B,
    pred: P,
}

pub fn take_while<B, P>(base: B, pred: P) -> TakeWhile<B, P>
where
    B: Sequence,
    P: FnMut(&B::Element) -> bool,
{
    TakeWhile { base, pred }
}

impl<B, P> Sequence for TakeWhile<B, P>
where
    B: Sequence,
    P: FnMut(&B::Element) -> bool,
{
    type Cursor = B::Cursor;
    type Element = B::Element;

    const CAPABILITIES: Capabilities = B::CAPABILITIES
        .bounded(false)
        .sized(false)
        .contiguous(false)
        .infinite(false);

    fn first(&mut self) -> B::Cursor {
        self.base.first()
    }

    fn is_last(&mut self, cur: &B::Cursor) -> bool {
        if self.base.is_last(cur) {
            return true;
        }
        let value = self.base.read_at(cur);
        !(self.pred)(&value)
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
}

impl<B: MultipassSequence, P: FnMut(&B::Element) -> bool> MultipassSequence for TakeWhile<B, P> {}
impl<B: BidirectionalSequence, P: FnMut(&B::Element) -> bool> BidirectionalSequence
    for TakeWhile<B, P>
{
}
impl<B: RandomAccessSequence, P: FnMut(&B::Element) -> bool> RandomAccessSequence
    for TakeWhile<B, P>
{
}

#[cfg(test)]
mod tests {
    use crate::source::{from_slice, iota};
    use crate::{SequenceExt, Sequence};

    #[test]
    fn drop_while_skips_prefix_only() {
        let data = [1, 2, 5, 1, 2];
        let got = from_slice(&data).drop_while(|x| **x < 3).copied().collect::<Vec<_>>();
        assert_eq!(got, vec![5, 1, 2]);
        assert_eq!(from_slice(&data).drop_while(|_| true).count(), 0);
    }

    #[test]
    fn drop_while_keeps_random_access() {
        let data = [0, 0, 7, 8, 9];
        let mut seq = from_slice(&data).drop_while(|x| **x == 0);
        let mut cur = seq.first();
        seq.inc_by(&mut cur, 2);
        assert_eq!(*seq.read_at(&cur), 9);
        let first = seq.first();
        assert_eq!(seq.distance(&first, &cur), 2);
    }

    #[test]
    fn take_while_stops_an_infinite_sequence() {
        let got = iota(1u64).take_while(|x| x * x < 50).collect::<Vec<_>>();
        assert_eq!(got, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
