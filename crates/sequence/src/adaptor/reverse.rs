use std::cmp::Ordering;

use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Category, Distance, MultipassSequence,
    RandomAccessSequence, Sequence, SizedSequence, SwappableSequence,
};

/// The base traversed from its end towards its start.
#[derive(Clone, Debug)]
pub struct Reverse<B> {
    base: B,
}

pub fn reverse<B: BidirectionalSequence + BoundedSequence>(base: B) -> Reverse<B> {
    Reverse { base }
}

impl<B> Reverse<B> {
    pub fn into_base(self) -> B {
        self.base
    }
}

/// Holds the base position one past the element it denotes, so the base's
/// `first` doubles as the reversed end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReverseCursor<C>(C);

impl<C: PartialOrd> PartialOrd for ReverseCursor<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.0.partial_cmp(&self.0)
    }
}

impl<C: Ord> Ord for ReverseCursor<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl<B: BidirectionalSequence> Reverse<B> {
    fn element_cursor(&mut self, cur: &ReverseCursor<B::Cursor>) -> B::Cursor {
        let mut inner = cur.0.clone();
        self.base.dec(&mut inner);
        inner
    }
}

impl<B: BidirectionalSequence + BoundedSequence> Sequence for Reverse<B> {
    type Cursor = ReverseCursor<B::Cursor>;
    type Element = B::Element;

    const CAPABILITIES: Capabilities = {
        let base = B::CAPABILITIES;
        let category = if base.is_random_access() {
            Category::RandomAccess
        } else {
            Category::Bidirectional
        };
        base.category(category).contiguous(false).infinite(false)
    };

    fn first(&mut self) -> Self::Cursor {
        ReverseCursor(self.base.last())
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        cur.0 == self.base.first()
    }

    #[track_caller]
    fn read_at(&mut self, cur: &Self::Cursor) -> B::Element {
        let inner = self.element_cursor(cur);
        self.base.read_at(&inner)
    }

    unsafe fn read_at_unchecked(&mut self, cur: &Self::Cursor) -> B::Element {
        let inner = self.element_cursor(cur);
        // SAFETY: a readable reversed position maps to a readable base one.
        unsafe { self.base.read_at_unchecked(&inner) }
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        self.base.dec(&mut cur.0)
    }

    fn dec(&mut self, cur: &mut Self::Cursor) {
        self.base.inc(&mut cur.0)
    }

    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        self.base.inc_by(&mut cur.0, -offset)
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        self.base.distance(&to.0, &from.0)
    }

    fn last(&mut self) -> Self::Cursor {
        ReverseCursor(self.base.first())
    }

    fn size(&mut self) -> Distance {
        self.base.size()
    }
}

impl<B: BidirectionalSequence + BoundedSequence> MultipassSequence for Reverse<B> {}
impl<B: BidirectionalSequence + BoundedSequence> BidirectionalSequence for Reverse<B> {}
impl<B: RandomAccessSequence + BoundedSequence> RandomAccessSequence for Reverse<B> {}
impl<B: BidirectionalSequence + BoundedSequence> BoundedSequence for Reverse<B> {}
impl<B: BidirectionalSequence + BoundedSequence + SizedSequence> SizedSequence for Reverse<B> {}

impl<B: SwappableSequence> SwappableSequence for Reverse<B> {
    type Value = B::Value;

    fn with_pair<R>(
        &mut self,
        a: &Self::Cursor,
        b: &Self::Cursor,
        f: impl FnOnce(&B::Value, &B::Value) -> R,
    ) -> R {
        let (a, b) = (self.element_cursor(a), self.element_cursor(b));
        self.base.with_pair(&a, &b, f)
    }

    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        let (a, b) = (self.element_cursor(a), self.element_cursor(b));
        self.base.swap_at(&a, &b)
    }

    unsafe fn with_pair_unchecked<R>(
        &mut self,
        a: &Self::Cursor,
        b: &Self::Cursor,
        f: impl FnOnce(&B::Value, &B::Value) -> R,
    ) -> R {
        let (a, b) = (self.element_cursor(a), self.element_cursor(b));
        // SAFETY: forwarded contract.
        unsafe { self.base.with_pair_unchecked(&a, &b, f) }
    }

    unsafe fn swap_at_unchecked(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        let (a, b) = (self.element_cursor(a), self.element_cursor(b));
        // SAFETY: forwarded contract.
        unsafe { self.base.swap_at_unchecked(&a, &b) }
    }
}
