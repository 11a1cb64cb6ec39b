//! Lock-step pairing and the odometer product.

use crate::error;
use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Category, Distance, MultipassSequence,
    RandomAccessSequence, Sequence, SizedSequence,
};
use crate::util;

const fn meet(a: Capabilities, b: Capabilities) -> Capabilities {
    Capabilities {
        category: a.category.meet(b.category),
        bounded: a.bounded && b.bounded,
        sized: a.sized && b.sized,
        contiguous: false,
        infinite: a.infinite && b.infinite,
        read_only: true,
    }
}

/// Elements of two sequences paired by position; ends with the shorter one.
#[derive(Clone, Debug)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

pub fn zip<A: Sequence, B: Sequence>(a: A, b: B) -> Zip<A, B> {
    Zip { a, b }
}

/// Zips any number of sequences by nesting [`zip`]: `zip!(a, b, c)` yields
/// `((x, y), z)`.
#[macro_export]
macro_rules! zip {
    ($a:expr $(,)?) => { $a };
    ($a:expr, $b:expr $(, $rest:expr)* $(,)?) => {
        $crate::zip!($crate::adaptor::zip($a, $b) $(, $rest)*)
    };
}

impl<A: Sequence, B: Sequence> Sequence for Zip<A, B> {
    type Cursor = (A::Cursor, B::Cursor);
    type Element = (A::Element, B::Element);

    const CAPABILITIES: Capabilities = {
        let caps = meet(A::CAPABILITIES, B::CAPABILITIES);
        // `last` aligns both ends through `size`.
        caps.bounded(caps.is_random_access() && caps.sized)
    };

    fn first(&mut self) -> Self::Cursor {
        (self.a.first(), self.b.first())
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        self.a.is_last(&cur.0) || self.b.is_last(&cur.1)
    }

    #[track_caller]
    fn read_at(&mut self, cur: &Self::Cursor) -> Self::Element {
        (self.a.read_at(&cur.0), self.b.read_at(&cur.1))
    }

    unsafe fn read_at_unchecked(&mut self, cur: &Self::Cursor) -> Self::Element {
        // SAFETY: a readable pair is readable in both components.
        unsafe { (self.a.read_at_unchecked(&cur.0), self.b.read_at_unchecked(&cur.1)) }
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        self.a.inc(&mut cur.0);
        self.b.inc(&mut cur.1);
    }

    fn dec(&mut self, cur: &mut Self::Cursor) {
        self.a.dec(&mut cur.0);
        self.b.dec(&mut cur.1);
    }

    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        self.a.inc_by(&mut cur.0, offset);
        self.b.inc_by(&mut cur.1, offset);
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        self.a.distance(&from.0, &to.0)
    }

    fn last(&mut self) -> Self::Cursor {
        let len = self.size();
        let mut cur = self.first();
        self.inc_by(&mut cur, len);
        cur
    }

    fn size(&mut self) -> Distance {
        self.a.size().min(self.b.size())
    }
}

impl<A: MultipassSequence, B: MultipassSequence> MultipassSequence for Zip<A, B> {}
impl<A: BidirectionalSequence, B: BidirectionalSequence> BidirectionalSequence for Zip<A, B> {}
impl<A: RandomAccessSequence, B: RandomAccessSequence> RandomAccessSequence for Zip<A, B> {}
impl<A, B> BoundedSequence for Zip<A, B>
where
    A: RandomAccessSequence + SizedSequence,
    B: RandomAccessSequence + SizedSequence,
{
}
impl<A: SizedSequence, B: SizedSequence> SizedSequence for Zip<A, B> {}

/// Every pair `(x, y)` with `x` from `a` and `y` from `b`, `b` varying
/// fastest.
///
/// The inner sequence is restarted from `first` on every rollover, so it
/// must be multi-pass. An empty inner sequence makes the product empty.
#[derive(Clone, Debug)]
pub struct CartesianProduct<A, B> {
    a: A,
    b: B,
}

pub fn cartesian_product<A: Sequence, B: MultipassSequence>(a: A, b: B) -> CartesianProduct<A, B> {
    CartesianProduct { a, b }
}

impl<A: Sequence, B: MultipassSequence> CartesianProduct<A, B> {
    /// Flat index of `cur` when both components are random access.
    fn index(&mut self, cur: &(A::Cursor, B::Cursor), inner: Distance) -> Distance {
        let a0 = self.a.first();
        let b0 = self.b.first();
        let outer = self.a.distance(&a0, &cur.0);
        let pos = self.b.distance(&b0, &cur.1);
        let row = util::checked_mul(outer, inner, "product index");
        util::checked_add(row, pos, "product index")
    }
}

impl<A: Sequence, B: MultipassSequence> Sequence for CartesianProduct<A, B> {
    type Cursor = (A::Cursor, B::Cursor);
    type Element = (A::Element, B::Element);

    const CAPABILITIES: Capabilities = {
        let (a, b) = (A::CAPABILITIES, B::CAPABILITIES);
        let category = if a.is_random_access() && b.is_random_access() && b.sized {
            Category::RandomAccess
        } else if a.is_bidirectional() && b.is_bidirectional() && b.bounded {
            Category::Bidirectional
        } else {
            a.category.meet(b.category).meet(Category::Multipass)
        };
        let caps = meet(a, b).category(category).bounded(a.bounded);
        caps.infinite(a.infinite || b.infinite)
    };

    fn first(&mut self) -> Self::Cursor {
        (self.a.first(), self.b.first())
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        self.a.is_last(&cur.0) || self.b.is_last(&cur.1)
    }

    #[track_caller]
    fn read_at(&mut self, cur: &Self::Cursor) -> Self::Element {
        (self.a.read_at(&cur.0), self.b.read_at(&cur.1))
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        self.b.inc(&mut cur.1);
        if self.b.is_last(&cur.1) {
            self.a.inc(&mut cur.0);
            cur.1 = self.b.first();
        }
    }

    fn dec(&mut self, cur: &mut Self::Cursor) {
        if cur.1 == self.b.first() {
            self.a.dec(&mut cur.0);
            cur.1 = self.b.last();
        }
        self.b.dec(&mut cur.1);
    }

    #[track_caller]
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        let inner = self.b.size();
        if inner == 0 {
            return;
        }
        let target = util::checked_add(self.index(cur, inner), offset, "product index");
        if target < 0 {
            error::out_of_bounds("cursor moved before the first pair");
        }
        let mut a = self.a.first();
        self.a.inc_by(&mut a, target / inner);
        let mut b = self.b.first();
        self.b.inc_by(&mut b, target % inner);
        *cur = (a, b);
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        let inner = self.b.size();
        self.index(to, inner) - self.index(from, inner)
    }

    fn last(&mut self) -> Self::Cursor {
        let b0 = self.b.first();
        if self.b.is_last(&b0) {
            return self.first();
        }
        (self.a.last(), b0)
    }

    fn size(&mut self) -> Distance {
        util::checked_mul(self.a.size(), self.b.size(), "product size")
    }
}

impl<A: MultipassSequence, B: MultipassSequence> MultipassSequence for CartesianProduct<A, B> {}
impl<A, B> BidirectionalSequence for CartesianProduct<A, B>
where
    A: BidirectionalSequence,
    B: BidirectionalSequence + BoundedSequence,
{
}
impl<A, B> RandomAccessSequence for CartesianProduct<A, B>
where
    A: RandomAccessSequence,
    B: RandomAccessSequence + BoundedSequence + SizedSequence,
{
}
impl<A: BoundedSequence, B: MultipassSequence> BoundedSequence for CartesianProduct<A, B> {}
impl<A: SizedSequence, B: MultipassSequence + SizedSequence> SizedSequence
    for CartesianProduct<A, B>
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceExt;
    use crate::source::{empty, from_iter, from_slice, ints, iota};

    #[test]
    fn zip_ends_with_shorter() {
        let a = [1, 2, 3];
        let b = ["x", "y"];
        let got = zip(from_slice(&a), from_slice(&b)).map(|(x, y)| (*x, *y)).collect::<Vec<_>>();
        assert_eq!(got, vec![(1, "x"), (2, "y")]);
        assert_eq!(zip(from_slice(&a), iota(10u8)).count(), 3);
        assert_eq!(zip(from_slice(&a), from_slice(&b)).size(), 2);
    }

    #[test]
    fn zip_macro_nests() {
        let got = crate::zip!(ints(0, 3), ints(10, 20), from_iter("abc".chars()))
            .map(|((a, b), c)| format!("{a}{b}{c}"))
            .collect::<Vec<_>>();
        assert_eq!(got, vec!["010a", "111b", "212c"]);
    }

    #[test]
    fn zip_reversed_aligns_ends() {
        let got = zip(ints(0, 5), ints(0, 3)).reverse().collect::<Vec<_>>();
        assert_eq!(got, vec![(2, 2), (1, 1), (0, 0)]);
    }

    #[test]
    fn product_is_an_odometer() {
        let got = cartesian_product(ints(0, 2), ints(0, 3)).collect::<Vec<_>>();
        assert_eq!(got, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(cartesian_product(ints(0, 4), ints(0, 5)).count(), 20);
        assert_eq!(cartesian_product(ints(0, 4), empty::<i32>()).count(), 0);
        assert_eq!(cartesian_product(empty::<i32>(), ints(0, 4)).count(), 0);
    }

    #[test]
    fn product_random_access() {
        let mut seq = cartesian_product(ints(0, 3), ints(0, 4));
        let first = seq.first();
        let mut cur = first.clone();
        seq.inc_by(&mut cur, 6);
        assert_eq!(seq.read_at(&cur), (1, 2));
        assert_eq!(seq.distance(&first, &cur), 6);
        let last = seq.last();
        assert_eq!(seq.distance(&first, &last), 12);
        let back = cartesian_product(ints(0, 2), ints(0, 2)).reverse().collect::<Vec<_>>();
        assert_eq!(back, vec![(1, 1), (1, 0), (0, 1), (0, 0)]);
    }
}
