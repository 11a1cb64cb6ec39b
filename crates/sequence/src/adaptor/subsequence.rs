use crate::error;
use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Distance, MultipassSequence,
    RandomAccessSequence, Sequence, SizedSequence, SwappableSequence,
};
use crate::util;

/// The part of a multi-pass base between two of its cursors.
///
/// Also the element type of the windowing adaptors (`slide`, `chunk`,
/// `chunk_by`), each window holding its own copy of the base handle.
#[derive(Clone, Debug)]
pub struct Subsequence<B: Sequence> {
    base: B,
    from: B::Cursor,
    to: B::Cursor,
}

/// `[from, to)` of `base`; `to` must be reachable from `from`.
pub fn subsequence<B: MultipassSequence>(base: B, from: B::Cursor, to: B::Cursor) -> Subsequence<B> {
    Subsequence { base, from, to }
}

/// Index range `[from, to)` of a random-access base.
#[track_caller]
pub fn slice<B: RandomAccessSequence>(mut base: B, from: usize, to: usize) -> Subsequence<B> {
    if from > to {
        error::precondition("slice start after its end");
    }
    if B::CAPABILITIES.sized && util::to_distance(to, "slice end") > base.size() {
        error::out_of_bounds("slice end past the end of the sequence");
    }
    let mut start = base.first();
    base.inc_by(&mut start, util::to_distance(from, "slice start"));
    let mut end = start.clone();
    base.inc_by(&mut end, util::to_distance(to - from, "slice length"));
    Subsequence {
        base,
        from: start,
        to: end,
    }
}

impl<B: Sequence> Subsequence<B> {
    pub fn bounds(&self) -> (&B::Cursor, &B::Cursor) {
        (&self.from, &self.to)
    }

    pub fn into_base(self) -> B {
        self.base
    }
}

impl<B: MultipassSequence> Sequence for Subsequence<B> {
    type Cursor = B::Cursor;
    type Element = B::Element;

    const CAPABILITIES: Capabilities = {
        let base = B::CAPABILITIES;
        base.bounded(true)
            .sized(base.is_random_access())
            .contiguous(false)
            .infinite(false)
    };

    fn first(&mut self) -> B::Cursor {
        self.from.clone()
    }

    fn is_last(&mut self, cur: &B::Cursor) -> bool {
        *cur == self.to
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
        self.to.clone()
    }

    fn size(&mut self) -> Distance {
        self.base.distance(&self.from, &self.to)
    }
}

impl<B: MultipassSequence> MultipassSequence for Subsequence<B> {}
impl<B: BidirectionalSequence> BidirectionalSequence for Subsequence<B> {}
impl<B: RandomAccessSequence> RandomAccessSequence for Subsequence<B> {}
impl<B: MultipassSequence> BoundedSequence for Subsequence<B> {}
impl<B: RandomAccessSequence> SizedSequence for Subsequence<B> {}

impl<B: SwappableSequence> SwappableSequence for Subsequence<B> {
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
