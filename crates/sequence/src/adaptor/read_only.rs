use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, ContiguousSequence, Distance,
    MultipassSequence, RandomAccessSequence, Sequence, SizedSequence,
};

/// The base with its write access removed.
///
/// Not [`SwappableSequence`](crate::SwappableSequence) even when the base is.
#[derive(Clone, Debug)]
pub struct ReadOnly<B> {
    base: B,
}

pub fn read_only<B: Sequence>(base: B) -> ReadOnly<B> {
    ReadOnly { base }
}

impl<B: Sequence> Sequence for ReadOnly<B> {
    type Cursor = B::Cursor;
    type Element = B::Element;

    const CAPABILITIES: Capabilities = B::CAPABILITIES.read_only(true);

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
    fn read_at(&mut self, cur: &B::Cursor) -> B::Element {
        self.base.read_at(cur)
    }

    #[inline]
    unsafe fn read_at_unchecked(&mut self, cur: &B::Cursor) -> B::Element {
        // SAFETY: forwarded contract.
        unsafe { self.base.read_at_unchecked(cur) }
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

impl<B: MultipassSequence> MultipassSequence for ReadOnly<B> {}
impl<B: BidirectionalSequence> BidirectionalSequence for ReadOnly<B> {}
impl<B: RandomAccessSequence> RandomAccessSequence for ReadOnly<B> {}
impl<B: BoundedSequence> BoundedSequence for ReadOnly<B> {}
impl<B: SizedSequence> SizedSequence for ReadOnly<B> {}

impl<B: ContiguousSequence> ContiguousSequence for ReadOnly<B> {
    type Value = B::Value;

    fn as_slice(&self) -> &[B::Value] {
        self.base.as_slice()
    }
}
