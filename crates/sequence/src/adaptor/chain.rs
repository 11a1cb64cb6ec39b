use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Category, Distance, MultipassSequence,
    Sequence, SizedSequence,
};
use crate::util;

/// All elements of `a` followed by all elements of `b`.
#[derive(Clone, Debug)]
pub struct Chain<A, B> {
    a: A,
    b: B,
}

pub fn chain<A, B>(a: A, b: B) -> Chain<A, B>
where
    A: Sequence,
    B: Sequence<Element = A::Element, Cursor: PartialEq>,
{
    Chain { a, b }
}

/// Cursor of [`Chain`]. A `Front` cursor is never at the end of `a`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChainCursor<CA, CB> {
    Front(CA),
    Back(CB),
}

impl<A, B> Chain<A, B>
where
    A: Sequence,
    B: Sequence<Element = A::Element, Cursor: PartialEq>,
{
    fn settle(&mut self, front: A::Cursor) -> ChainCursor<A::Cursor, B::Cursor> {
        if self.a.is_last(&front) {
            ChainCursor::Back(self.b.first())
        } else {
            ChainCursor::Front(front)
        }
    }
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Element = A::Element, Cursor: PartialEq>,
{
    type Cursor = ChainCursor<A::Cursor, B::Cursor>;
    type Element = A::Element;

    const CAPABILITIES: Capabilities = {
        let (a, b) = (A::CAPABILITIES, B::CAPABILITIES);
        let mut category = a.category.meet(b.category).meet(Category::Bidirectional);
        if !a.bounded {
            category = category.meet(Category::Multipass);
        }
        Capabilities {
            category,
            bounded: b.bounded,
            sized: a.sized && b.sized,
            contiguous: false,
            infinite: a.infinite || b.infinite,
            read_only: a.read_only || b.read_only,
        }
    };

    fn first(&mut self) -> Self::Cursor {
        let front = self.a.first();
        self.settle(front)
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        match cur {
            ChainCursor::Front(_) => false,
            ChainCursor::Back(c) => self.b.is_last(c),
        }
    }

    #[track_caller]
    fn read_at(&mut self, cur: &Self::Cursor) -> A::Element {
        match cur {
            ChainCursor::Front(c) => self.a.read_at(c),
            ChainCursor::Back(c) => self.b.read_at(c),
        }
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        match cur {
            ChainCursor::Front(c) => {
                self.a.inc(c);
                if self.a.is_last(c) {
                    *cur = ChainCursor::Back(self.b.first());
                }
            }
            ChainCursor::Back(c) => self.b.inc(c),
        }
    }

    fn dec(&mut self, cur: &mut Self::Cursor) {
        match cur {
            ChainCursor::Front(c) => self.a.dec(c),
            ChainCursor::Back(c) => {
                let b0 = self.b.first();
                if *c == b0 {
                    let mut front = self.a.last();
                    self.a.dec(&mut front);
                    *cur = ChainCursor::Front(front);
                } else {
                    self.b.dec(c);
                }
            }
        }
    }

    fn last(&mut self) -> Self::Cursor {
        ChainCursor::Back(self.b.last())
    }

    fn size(&mut self) -> Distance {
        util::checked_add(self.a.size(), self.b.size(), "chain size")
    }
}

impl<A, B> MultipassSequence for Chain<A, B>
where
    A: MultipassSequence,
    B: MultipassSequence<Element = A::Element>,
{
}

impl<A, B> BidirectionalSequence for Chain<A, B>
where
    A: BidirectionalSequence + BoundedSequence,
    B: BidirectionalSequence<Element = A::Element>,
{
}

impl<A, B> BoundedSequence for Chain<A, B>
where
    A: Sequence,
    B: BoundedSequence<Element = A::Element, Cursor: PartialEq>,
{
}

impl<A, B> SizedSequence for Chain<A, B>
where
    A: SizedSequence,
    B: SizedSequence<Element = A::Element, Cursor: PartialEq>,
{
}
