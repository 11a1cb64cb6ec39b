//! Cursor protocol and capability model.
//!
//! A source implements the four required primitives of [`Sequence`]. The
//! optional primitives (`dec`, `inc_by`, `distance`, `last`, `size`) have
//! default bodies that report [`Error::Unsupported`](crate::Error); a source
//! that overrides one of them declares it in [`Sequence::CAPABILITIES`] and
//! implements the matching marker trait, so generic code can demand it
//! statically.

use crate::error;

/// Signed offset and distance type.
pub type Distance = isize;

/// Traversal tier, ordered from weakest to strongest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    SinglePass,
    Multipass,
    Bidirectional,
    RandomAccess,
}

impl Category {
    /// The weaker of two tiers.
    pub const fn meet(self, other: Self) -> Self {
        if (self as u8) <= (other as u8) {
            self
        } else {
            other
        }
    }

    pub const fn at_least(self, other: Self) -> bool {
        self as u8 >= other as u8
    }
}

/// Capability profile of a sequence type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capabilities {
    pub category: Category,
    /// `last` is available without traversal.
    pub bounded: bool,
    /// `size` is available in constant time.
    pub sized: bool,
    /// Elements occupy one flat block (see [`ContiguousSequence`]).
    pub contiguous: bool,
    /// `is_last` never holds.
    pub infinite: bool,
    /// Elements cannot be written or exchanged through this sequence.
    pub read_only: bool,
}

impl Capabilities {
    pub const SINGLE_PASS: Self = Self {
        category: Category::SinglePass,
        bounded: false,
        sized: false,
        contiguous: false,
        infinite: false,
        read_only: true,
    };

    /// Profile of a mutable slice: every capability present.
    pub const CONTIGUOUS: Self = Self {
        category: Category::RandomAccess,
        bounded: true,
        sized: true,
        contiguous: true,
        infinite: false,
        read_only: false,
    };

    pub const fn category(self, category: Category) -> Self {
        Self { category, ..self }
    }

    pub const fn bounded(self, bounded: bool) -> Self {
        Self { bounded, ..self }
    }

    pub const fn sized(self, sized: bool) -> Self {
        Self { sized, ..self }
    }

    pub const fn contiguous(self, contiguous: bool) -> Self {
        Self { contiguous, ..self }
    }

    pub const fn infinite(self, infinite: bool) -> Self {
        Self { infinite, ..self }
    }

    pub const fn read_only(self, read_only: bool) -> Self {
        Self { read_only, ..self }
    }

    pub const fn is_multipass(self) -> bool {
        self.category.at_least(Category::Multipass)
    }

    pub const fn is_bidirectional(self) -> bool {
        self.category.at_least(Category::Bidirectional)
    }

    pub const fn is_random_access(self) -> bool {
        self.category.at_least(Category::RandomAccess)
    }
}

/// A traversable data source.
///
/// Cursors are only meaningful for the sequence instance that produced them.
/// `is_last` is monotone under `inc`: once it holds it keeps holding.
pub trait Sequence {
    type Cursor;
    type Element;

    const CAPABILITIES: Capabilities = Capabilities::SINGLE_PASS;

    fn first(&mut self) -> Self::Cursor;
    fn is_last(&mut self, cur: &Self::Cursor) -> bool;
    fn read_at(&mut self, cur: &Self::Cursor) -> Self::Element;
    fn inc(&mut self, cur: &mut Self::Cursor);

    /// Read without validating `cur`.
    ///
    /// # Safety
    ///
    /// `cur` must be a readable position of this sequence: produced by it and
    /// not yet at the end.
    unsafe fn read_at_unchecked(&mut self, cur: &Self::Cursor) -> Self::Element {
        self.read_at(cur)
    }

    fn dec(&mut self, cur: &mut Self::Cursor) {
        let _ = cur;
        error::unsupported("dec")
    }

    /// Move `cur` by `offset` positions in constant time.
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        let _ = (cur, offset);
        error::unsupported("inc_by")
    }

    /// Constant-time signed distance from `from` to `to`.
    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        let _ = (from, to);
        error::unsupported("distance")
    }

    /// The terminal cursor, without traversal.
    fn last(&mut self) -> Self::Cursor {
        error::unsupported("last")
    }

    /// Number of elements, in constant time.
    fn size(&mut self) -> Distance {
        error::unsupported("size")
    }

    /// Feed elements to `pred` until it returns `false` or the end is hit.
    ///
    /// Returns the cursor where the traversal stopped.
    fn for_each_while<P>(&mut self, mut pred: P) -> Self::Cursor
    where
        P: FnMut(Self::Element) -> bool,
    {
        let mut cur = self.first();
        while !self.is_last(&cur) {
            if !pred(self.read_at(&cur)) {
                break;
            }
            self.inc(&mut cur);
        }
        cur
    }
}

/// Cursors can be copied and compared; traversal may be replayed.
pub trait MultipassSequence: Sequence<Cursor: Clone + PartialEq> {}

/// `dec` is provided and `dec(inc(c)) == c`.
pub trait BidirectionalSequence: MultipassSequence {}

/// `inc_by` and `distance` are provided in constant time and cursors are
/// totally ordered.
pub trait RandomAccessSequence: BidirectionalSequence<Cursor: Ord> {}

/// `last` is provided.
pub trait BoundedSequence: Sequence {}

/// `size` is provided.
pub trait SizedSequence: Sequence {}

/// Elements are laid out in one flat block.
pub trait ContiguousSequence: RandomAccessSequence + BoundedSequence + SizedSequence {
    type Value;

    fn as_slice(&self) -> &[Self::Value];
}

/// Elements live in place and can be exchanged.
pub trait SwappableSequence: RandomAccessSequence + BoundedSequence {
    type Value;

    /// Borrow the elements at `a` and `b` for the duration of `f`.
    fn with_pair<R>(
        &mut self,
        a: &Self::Cursor,
        b: &Self::Cursor,
        f: impl FnOnce(&Self::Value, &Self::Value) -> R,
    ) -> R;

    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor);

    /// # Safety
    ///
    /// `a` and `b` must be readable positions of this sequence.
    unsafe fn with_pair_unchecked<R>(
        &mut self,
        a: &Self::Cursor,
        b: &Self::Cursor,
        f: impl FnOnce(&Self::Value, &Self::Value) -> R,
    ) -> R {
        self.with_pair(a, b, f)
    }

    /// # Safety
    ///
    /// `a` and `b` must be readable positions of this sequence.
    unsafe fn swap_at_unchecked(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        self.swap_at(a, b)
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Cursor = S::Cursor;
    type Element = S::Element;

    const CAPABILITIES: Capabilities = S::CAPABILITIES;

    #[inline]
    fn first(&mut self) -> Self::Cursor {
        (**self).first()
    }

    #[inline]
    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        (**self).is_last(cur)
    }

    #[inline]
    #[track_caller]
    fn read_at(&mut self, cur: &Self::Cursor) -> Self::Element {
        (**self).read_at(cur)
    }

    #[inline]
    fn inc(&mut self, cur: &mut Self::Cursor) {
        (**self).inc(cur)
    }

    #[inline]
    unsafe fn read_at_unchecked(&mut self, cur: &Self::Cursor) -> Self::Element {
        unsafe { (**self).read_at_unchecked(cur) }
    }

    #[inline]
    fn dec(&mut self, cur: &mut Self::Cursor) {
        (**self).dec(cur)
    }

    #[inline]
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        (**self).inc_by(cur, offset)
    }

    #[inline]
    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        (**self).distance(from, to)
    }

    #[inline]
    fn last(&mut self) -> Self::Cursor {
        (**self).last()
    }

    #[inline]
    fn size(&mut self) -> Distance {
        (**self).size()
    }
}

impl<S: MultipassSequence + ?Sized> MultipassSequence for &mut S {}
impl<S: BidirectionalSequence + ?Sized> BidirectionalSequence for &mut S {}
impl<S: RandomAccessSequence + ?Sized> RandomAccessSequence for &mut S {}
impl<S: BoundedSequence + ?Sized> BoundedSequence for &mut S {}
impl<S: SizedSequence + ?Sized> SizedSequence for &mut S {}

impl<S: ContiguousSequence + ?Sized> ContiguousSequence for &mut S {
    type Value = S::Value;

    fn as_slice(&self) -> &[Self::Value] {
        (**self).as_slice()
    }
}

impl<S: SwappableSequence + ?Sized> SwappableSequence for &mut S {
    type Value = S::Value;

    #[inline]
    fn with_pair<R>(
        &mut self,
        a: &Self::Cursor,
        b: &Self::Cursor,
        f: impl FnOnce(&Self::Value, &Self::Value) -> R,
    ) -> R {
        (**self).with_pair(a, b, f)
    }

    #[inline]
    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        (**self).swap_at(a, b)
    }

    #[inline]
    unsafe fn with_pair_unchecked<R>(
        &mut self,
        a: &Self::Cursor,
        b: &Self::Cursor,
        f: impl FnOnce(&Self::Value, &Self::Value) -> R,
    ) -> R {
        unsafe { (**self).with_pair_unchecked(a, b, f) }
    }

    #[inline]
    unsafe fn swap_at_unchecked(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        unsafe { (**self).swap_at_unchecked(a, b) }
    }
}
