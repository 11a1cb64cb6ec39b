use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Distance, MultipassSequence,
    RandomAccessSequence, Sequence, SizedSequence,
};

/// Applies `func` to every element read from the base.
///
/// The function runs on every read; nothing is cached.
#[derive(Clone, Debug)]
pub struct Map<B, F> {
    base: B,
    func: F,
}

pub fn map<B, F, R>(base: B, func: F) -> Map<B, F>
where
    B: Sequence,
    F: FnMut(B::Element) -> R,
{
    Map { base, func }
}

impl<B, F> Map<B, F> {
    pub fn into_base(self) -> B {
        self.base
    }
}

impl<B, F, R> Sequence for Map<B, F>
where
    B: Sequence,
    F: FnMut(B::Element) -> R,
{
    type Cursor = B::Cursor;
    type Element = R;

    const CAPABILITIES: Capabilities = B::CAPABILITIES.contiguous(false).read_only(true);

    #[inline]
    fn first(&mut self) -> B::Cursor {
        self.base.first()
    }

    #[inline]
    fn is_last(&mut self, cur: &B::Cursor) -> bool {
        self.base.is_last(cur)
    }

    #[inline]
    #[track_caller]
    fn read_at(&mut self, cur: &B::Cursor) -> R {
        (self.func)(self.base.read_at(cur))
    }

    #[inline]
    unsafe fn read_at_unchecked(&mut self, cur: &B::Cursor) -> R {
        // SAFETY: forwarded contract.
        let value = unsafe { self.base.read_at_unchecked(cur) };
        (self.func)(value)
    }

    #[inline]
    fn inc(&mut self, cur: &mut B::Cursor) {
        self.base.inc(cur)
    }

    #[inline]
    fn dec(&mut self, cur: &mut B::Cursor) {
        self.base.dec(cur)
    }

    #[inline]
    fn inc_by(&mut self, cur: &mut B::Cursor, offset: Distance) {
        self.base.inc_by(cur, offset)
    }

    #[inline]
    fn distance(&mut self, from: &B::Cursor, to: &B::Cursor) -> Distance {
        self.base.distance(from, to)
    }

    #[inline]
    fn last(&mut self) -> B::Cursor {
        self.base.last()
    }

    #[inline]
    fn size(&mut self) -> Distance {
        self.base.size()
    }
}

impl<B: MultipassSequence, F: FnMut(B::Element) -> R, R> MultipassSequence for Map<B, F> {}
impl<B: BidirectionalSequence, F: FnMut(B::Element) -> R, R> BidirectionalSequence for Map<B, F> {}
impl<B: RandomAccessSequence, F: FnMut(B::Element) -> R, R> RandomAccessSequence for Map<B, F> {}
impl<B: BoundedSequence, F: FnMut(B::Element) -> R, R> BoundedSequence for Map<B, F> {}
impl<B: SizedSequence, F: FnMut(B::Element) -> R, R> SizedSequence for Map<B, F> {}
