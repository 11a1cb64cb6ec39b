//! Non-overlapping steps of a fixed width: `chunk` and `stride`.
//!
//! Both are random access over a random-access bounded base: every reachable
//! cursor is a multiple of the width from the start, or the end itself.

use std::cmp::Ordering;

use super::subsequence::{Subsequence, subsequence};
use crate::derive;
use crate::error;
use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Category, Distance, MultipassSequence,
    RandomAccessSequence, Sequence, SizedSequence,
};
use crate::util;

const fn stepped(base: Capabilities) -> Capabilities {
    let category = if base.is_random_access() && base.bounded {
        Category::RandomAccess
    } else {
        base.category.meet(Category::Multipass)
    };
    base.category(category).contiguous(false)
}

/// Number of width-sized steps covering `len` positions.
fn steps(len: Distance, width: Distance) -> Distance {
    if len >= 0 {
        (len + width - 1) / width
    } else {
        -((-len + width - 1) / width)
    }
}

/// Groups of `width` elements; the final group may be shorter.
#[derive(Clone, Debug)]
pub struct Chunk<B> {
    base: B,
    width: Distance,
}

#[track_caller]
pub fn chunk<B: MultipassSequence + Clone>(base: B, width: usize) -> Chunk<B> {
    if width == 0 {
        error::precondition("chunk width of zero");
    }
    Chunk {
        base,
        width: util::to_distance(width, "chunk width"),
    }
}

/// Cursor of [`Chunk`]: the group's bounds. Compares by the start.
#[derive(Clone, Debug)]
pub struct ChunkCursor<C> {
    from: C,
    to: C,
}

impl<C: PartialEq> PartialEq for ChunkCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
    }
}

impl<C: Eq> Eq for ChunkCursor<C> {}

impl<C: PartialOrd> PartialOrd for ChunkCursor<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.from.partial_cmp(&other.from)
    }
}

impl<C: Ord> Ord for ChunkCursor<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.from.cmp(&other.from)
    }
}

impl<B: MultipassSequence> Chunk<B> {
    fn group_end(&mut self, from: &B::Cursor) -> B::Cursor {
        let mut to = from.clone();
        derive::advance(&mut self.base, &mut to, util::to_index(self.width, "chunk width"));
        to
    }
}

impl<B: MultipassSequence + Clone> Sequence for Chunk<B> {
    type Cursor = ChunkCursor<B::Cursor>;
    type Element = Subsequence<B>;

    const CAPABILITIES: Capabilities = stepped(B::CAPABILITIES).read_only(true);

    fn first(&mut self) -> Self::Cursor {
        let from = self.base.first();
        let to = self.group_end(&from);
        ChunkCursor { from, to }
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        self.base.is_last(&cur.from)
    }

    #[track_caller]
    fn read_at(&mut self, cur: &Self::Cursor) -> Subsequence<B> {
        subsequence(self.base.clone(), cur.from.clone(), cur.to.clone())
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        let to = self.group_end(&cur.to);
        cur.from = std::mem::replace(&mut cur.to, to);
    }

    fn dec(&mut self, cur: &mut Self::Cursor) {
        self.inc_by(cur, -1)
    }

    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        let mut from = cur.from.clone();
        jump(&mut self.base, &mut from, offset, self.width);
        let to = self.group_end(&from);
        *cur = ChunkCursor { from, to };
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        steps(self.base.distance(&from.from, &to.from), self.width)
    }

    fn last(&mut self) -> Self::Cursor {
        let end = self.base.last();
        ChunkCursor {
            from: end.clone(),
            to: end,
        }
    }

    fn size(&mut self) -> Distance {
        steps(self.base.size(), self.width)
    }
}

impl<B: MultipassSequence + Clone> MultipassSequence for Chunk<B> {}
impl<B: RandomAccessSequence + BoundedSequence + Clone> BidirectionalSequence for Chunk<B> {}
impl<B: RandomAccessSequence + BoundedSequence + Clone> RandomAccessSequence for Chunk<B> {}
impl<B: BoundedSequence + MultipassSequence + Clone> BoundedSequence for Chunk<B> {}
impl<B: SizedSequence + MultipassSequence + Clone> SizedSequence for Chunk<B> {}

/// Every `width`-th element, starting with the first.
#[derive(Clone, Debug)]
pub struct Stride<B> {
    base: B,
    width: Distance,
}

#[track_caller]
pub fn stride<B: Sequence>(base: B, width: usize) -> Stride<B> {
    if width == 0 {
        error::precondition("stride of zero");
    }
    Stride {
        base,
        width: util::to_distance(width, "stride"),
    }
}

impl<B: Sequence> Sequence for Stride<B> {
    type Cursor = B::Cursor;
    type Element = B::Element;

    const CAPABILITIES: Capabilities = stepped(B::CAPABILITIES);

    fn first(&mut self) -> B::Cursor {
        self.base.first()
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
        if B::CAPABILITIES.is_random_access() && B::CAPABILITIES.bounded {
            jump(&mut self.base, cur, 1, self.width);
        } else {
            derive::advance(&mut self.base, cur, util::to_index(self.width, "stride"));
        }
    }

    fn dec(&mut self, cur: &mut B::Cursor) {
        jump(&mut self.base, cur, -1, self.width)
    }

    fn inc_by(&mut self, cur: &mut B::Cursor, offset: Distance) {
        jump(&mut self.base, cur, offset, self.width)
    }

    fn distance(&mut self, from: &B::Cursor, to: &B::Cursor) -> Distance {
        steps(self.base.distance(from, to), self.width)
    }

    fn last(&mut self) -> B::Cursor {
        self.base.last()
    }

    fn size(&mut self) -> Distance {
        steps(self.base.size(), self.width)
    }
}

impl<B: MultipassSequence> MultipassSequence for Stride<B> {}
impl<B: RandomAccessSequence + BoundedSequence> BidirectionalSequence for Stride<B> {}
impl<B: RandomAccessSequence + BoundedSequence> RandomAccessSequence for Stride<B> {}
impl<B: BoundedSequence> BoundedSequence for Stride<B> {}
impl<B: SizedSequence> SizedSequence for Stride<B> {}

/// Move `cur` by `offset` steps, clamping to the end of the base.
///
/// Only reached when the profile grants random access, which requires a
/// random-access bounded base.
#[track_caller]
fn jump<B: Sequence>(base: &mut B, cur: &mut B::Cursor, offset: Distance, width: Distance) {
    let first = base.first();
    let last = base.last();
    let len = base.distance(&first, &last);
    let pos = base.distance(&first, cur);
    let target = if offset < 0 && pos == len {
        let tail = match len % width {
            0 => width,
            rem => rem,
        };
        util::checked_add(pos - tail, util::checked_mul(offset + 1, width, "step"), "step")
    } else {
        util::checked_add(pos, util::checked_mul(offset, width, "step"), "step")
    };
    if target < 0 {
        error::out_of_bounds("cursor moved before the first step");
    }
    let mut out = first;
    base.inc_by(&mut out, target.min(len));
    *cur = out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceExt;
    use crate::source::{from_iter, from_slice, ints};

    #[test]
    fn chunks_with_partial_tail() {
        let data = [1, 2, 3, 4, 5];
        let groups = from_slice(&data)
            .chunk(2)
            .map(|c| c.copied().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert_eq!(from_slice(&data).chunk(2).count(), 3);
        assert_eq!(from_slice::<u8>(&[]).chunk(3).count(), 0);
    }

    #[test]
    fn chunk_random_access() {
        let mut seq = ints(0, 7).chunk(3);
        let first = seq.first();
        let last = seq.last();
        assert_eq!(seq.distance(&first, &last), 3);
        let mut back = last.clone();
        seq.dec(&mut back);
        assert_eq!(seq.read_at(&back).collect::<Vec<_>>(), vec![6]);
        seq.dec(&mut back);
        assert_eq!(seq.read_at(&back).collect::<Vec<_>>(), vec![3, 4, 5]);
        let mut cur = first.clone();
        seq.inc_by(&mut cur, 1);
        assert_eq!(cur, back);
    }

    #[test]
    fn stride_forward_and_back() {
        let got = ints(0, 10).stride(3).collect::<Vec<_>>();
        assert_eq!(got, vec![0, 3, 6, 9]);
        let rev = ints(0, 10).stride(3).reverse().collect::<Vec<_>>();
        assert_eq!(rev, vec![9, 6, 3, 0]);
        let rev = ints(0, 9).stride(3).reverse().collect::<Vec<_>>();
        assert_eq!(rev, vec![6, 3, 0]);
        assert_eq!(ints(0, 10).stride(3).size(), 4);
    }

    #[test]
    fn stride_over_single_pass() {
        let got = from_iter(0..10).stride(4).collect::<Vec<_>>();
        assert_eq!(got, vec![0, 4, 8]);
    }
}
