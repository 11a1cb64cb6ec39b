//! Merges of two sequences sorted by the same comparator.
//!
//! Inputs are treated as multisets, matching `std`'s sorted-range semantics:
//! an element occurring `m` times in `a` and `n` times in `b` appears
//! `max(m, n)` times in the union, `min(m, n)` in the intersection,
//! `m - n` (saturating) in the difference and `|m - n|` in the symmetric
//! difference.

use std::cmp::Ordering;

use crate::traits::{Capabilities, Category, MultipassSequence, Sequence};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetKind {
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Side {
    A,
    B,
}

#[derive(Clone, Debug)]
pub struct SetMerge<A, B, C> {
    a: A,
    b: B,
    cmp: C,
    kind: SetKind,
}

/// Cursor of [`SetMerge`]: both input positions plus the side the current
/// element is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetCursor<CA, CB> {
    a: CA,
    b: CB,
    side: Side,
}

fn merge<A, B, C>(a: A, b: B, cmp: C, kind: SetKind) -> SetMerge<A, B, C>
where
    A: Sequence,
    B: Sequence<Element = A::Element>,
    C: FnMut(&A::Element, &A::Element) -> Ordering,
{
    SetMerge { a, b, cmp, kind }
}

pub fn set_union<A, B, C>(a: A, b: B, cmp: C) -> SetMerge<A, B, C>
where
    A: Sequence,
    B: Sequence<Element = A::Element>,
    C: FnMut(&A::Element, &A::Element) -> Ordering,
{
    merge(a, b, cmp, SetKind::Union)
}

pub fn set_intersection<A, B, C>(a: A, b: B, cmp: C) -> SetMerge<A, B, C>
where
    A: Sequence,
    B: Sequence<Element = A::Element>,
    C: FnMut(&A::Element, &A::Element) -> Ordering,
{
    merge(a, b, cmp, SetKind::Intersection)
}

pub fn set_difference<A, B, C>(a: A, b: B, cmp: C) -> SetMerge<A, B, C>
where
    A: Sequence,
    B: Sequence<Element = A::Element>,
    C: FnMut(&A::Element, &A::Element) -> Ordering,
{
    merge(a, b, cmp, SetKind::Difference)
}

pub fn set_symmetric_difference<A, B, C>(a: A, b: B, cmp: C) -> SetMerge<A, B, C>
where
    A: Sequence,
    B: Sequence<Element = A::Element>,
    C: FnMut(&A::Element, &A::Element) -> Ordering,
{
    merge(a, b, cmp, SetKind::SymmetricDifference)
}

impl<A, B, C> SetMerge<A, B, C>
where
    A: Sequence,
    B: Sequence<Element = A::Element>,
    C: FnMut(&A::Element, &A::Element) -> Ordering,
{
    pub fn kind(&self) -> SetKind {
        self.kind
    }

    fn compare(&mut self, a: &A::Cursor, b: &B::Cursor) -> Ordering {
        let x = self.a.read_at(a);
        let y = self.b.read_at(b);
        (self.cmp)(&x, &y)
    }

    /// Move forward to the next element this merge emits and record which
    /// side it comes from.
    fn settle(&mut self, cur: &mut SetCursor<A::Cursor, B::Cursor>) {
        loop {
            let a_done = self.a.is_last(&cur.a);
            let b_done = self.b.is_last(&cur.b);
            if a_done || b_done {
                cur.side = if a_done && self.kind != SetKind::Difference {
                    Side::B
                } else {
                    Side::A
                };
                return;
            }
            let order = self.compare(&cur.a, &cur.b);
            match (self.kind, order) {
                (SetKind::Union, Ordering::Greater) => {
                    cur.side = Side::B;
                    return;
                }
                (SetKind::Union, _) => {
                    cur.side = Side::A;
                    return;
                }
                (SetKind::Intersection, Ordering::Less) => self.a.inc(&mut cur.a),
                (SetKind::Intersection, Ordering::Greater) => self.b.inc(&mut cur.b),
                (SetKind::Intersection, Ordering::Equal) => {
                    cur.side = Side::A;
                    return;
                }
                (SetKind::Difference, Ordering::Less) => {
                    cur.side = Side::A;
                    return;
                }
                (SetKind::Difference, Ordering::Greater) => self.b.inc(&mut cur.b),
                (SetKind::SymmetricDifference, Ordering::Less) => {
                    cur.side = Side::A;
                    return;
                }
                (SetKind::SymmetricDifference, Ordering::Greater) => {
                    cur.side = Side::B;
                    return;
                }
                (SetKind::Difference | SetKind::SymmetricDifference, Ordering::Equal) => {
                    self.a.inc(&mut cur.a);
                    self.b.inc(&mut cur.b);
                }
            }
        }
    }
}

impl<A, B, C> Sequence for SetMerge<A, B, C>
where
    A: Sequence,
    B: Sequence<Element = A::Element>,
    C: FnMut(&A::Element, &A::Element) -> Ordering,
{
    type Cursor = SetCursor<A::Cursor, B::Cursor>;
    type Element = A::Element;

    const CAPABILITIES: Capabilities = {
        let (a, b) = (A::CAPABILITIES, B::CAPABILITIES);
        Capabilities::SINGLE_PASS.category(a.category.meet(b.category).meet(Category::Multipass))
    };

    fn first(&mut self) -> Self::Cursor {
        let mut cur = SetCursor {
            a: self.a.first(),
            b: self.b.first(),
            side: Side::A,
        };
        self.settle(&mut cur);
        cur
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        let a_done = self.a.is_last(&cur.a);
        let b_done = self.b.is_last(&cur.b);
        match self.kind {
            SetKind::Union | SetKind::SymmetricDifference => a_done && b_done,
            SetKind::Intersection => a_done || b_done,
            SetKind::Difference => a_done,
        }
    }

    #[track_caller]
    fn read_at(&mut self, cur: &Self::Cursor) -> A::Element {
        match cur.side {
            Side::A => self.a.read_at(&cur.a),
            Side::B => self.b.read_at(&cur.b),
        }
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        match (self.kind, cur.side) {
            (SetKind::Union, Side::A) => {
                if !self.b.is_last(&cur.b) && self.compare(&cur.a, &cur.b) == Ordering::Equal {
                    self.b.inc(&mut cur.b);
                }
                self.a.inc(&mut cur.a);
            }
            (SetKind::Intersection, _) => {
                self.a.inc(&mut cur.a);
                self.b.inc(&mut cur.b);
            }
            (_, Side::A) => self.a.inc(&mut cur.a),
            (_, Side::B) => self.b.inc(&mut cur.b),
        }
        self.settle(cur);
    }
}

impl<A, B, C> MultipassSequence for SetMerge<A, B, C>
where
    A: MultipassSequence,
    B: MultipassSequence<Element = A::Element>,
    C: FnMut(&A::Element, &A::Element) -> Ordering,
{
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::SequenceExt;
    use crate::source::{from_iter, from_slice};

    fn run(kind: SetKind, a: &[u8], b: &[u8]) -> Vec<u8> {
        merge(from_slice(a), from_slice(b), |x: &&u8, y: &&u8| x.cmp(y), kind)
            .copied()
            .collect()
    }

    fn counts(v: &[u8]) -> BTreeMap<u8, usize> {
        let mut m = BTreeMap::new();
        for &x in v {
            *m.entry(x).or_default() += 1;
        }
        m
    }

    fn expected(kind: SetKind, a: &[u8], b: &[u8]) -> Vec<u8> {
        let (ca, cb) = (counts(a), counts(b));
        let mut out = Vec::new();
        for k in 0..=u8::MAX {
            let m = ca.get(&k).copied().unwrap_or(0);
            let n = cb.get(&k).copied().unwrap_or(0);
            let times = match kind {
                SetKind::Union => m.max(n),
                SetKind::Intersection => m.min(n),
                SetKind::Difference => m.saturating_sub(n),
                SetKind::SymmetricDifference => m.abs_diff(n),
            };
            out.extend(std::iter::repeat_n(k, times));
        }
        out
    }

    #[test]
    fn small_examples() {
        let a = [1, 2, 2, 4, 6];
        let b = [2, 3, 4, 4];
        assert_eq!(run(SetKind::Union, &a, &b), vec![1, 2, 2, 3, 4, 4, 6]);
        assert_eq!(run(SetKind::Intersection, &a, &b), vec![2, 4]);
        assert_eq!(run(SetKind::Difference, &a, &b), vec![1, 2, 6]);
        assert_eq!(run(SetKind::SymmetricDifference, &a, &b), vec![1, 2, 3, 4, 6]);
    }

    #[test]
    fn multiset_counts_match_oracle() {
        let mut rng = StdRng::seed_from_u64(3);
        let kinds = [
            SetKind::Union,
            SetKind::Intersection,
            SetKind::Difference,
            SetKind::SymmetricDifference,
        ];
        for _ in 0..200 {
            let mut a: Vec<u8> = (0..rng.random_range(0..12)).map(|_| rng.random_range(0..6)).collect();
            let mut b: Vec<u8> = (0..rng.random_range(0..12)).map(|_| rng.random_range(0..6)).collect();
            a.sort();
            b.sort();
            for kind in kinds {
                assert_eq!(run(kind, &a, &b), expected(kind, &a, &b), "{kind:?} {a:?} {b:?}");
            }
        }
    }

    #[test]
    fn union_of_single_pass_inputs() {
        let got = set_union(from_iter([1, 3, 5]), from_iter([2, 3, 6]), |x: &i32, y: &i32| x.cmp(y))
            .collect::<Vec<_>>();
        assert_eq!(got, vec![1, 2, 3, 5, 6]);
    }
}
