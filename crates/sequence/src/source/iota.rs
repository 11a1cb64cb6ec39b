use crate::error;
use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Distance, MultipassSequence,
    RandomAccessSequence, Sequence, SizedSequence,
};
use crate::util::Step;

/// Unbounded count upwards from `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Iota<T> {
    start: T,
}

pub fn iota<T: Step>(start: T) -> Iota<T> {
    Iota { start }
}

/// Half-open integer range `[from, to)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ints<T> {
    from: T,
    to: T,
}

/// `[from, to)`; an inverted range is empty.
pub fn ints<T: Step>(from: T, to: T) -> Ints<T> {
    Ints {
        from,
        to: if to < from { from } else { to },
    }
}

#[inline]
#[track_caller]
fn step<T: Step>(value: T, offset: Distance) -> T {
    value
        .offset(offset)
        .unwrap_or_else(|| error::overflow("integer sequence cursor"))
}

#[inline]
#[track_caller]
fn span<T: Step>(from: T, to: T) -> Distance {
    T::steps_between(from, to).unwrap_or_else(|| error::overflow("integer sequence distance"))
}

impl<T: Step> Sequence for Iota<T> {
    type Cursor = T;
    type Element = T;

    const CAPABILITIES: Capabilities = Capabilities::SINGLE_PASS
        .category(crate::Category::RandomAccess)
        .infinite(true);

    fn first(&mut self) -> T {
        self.start
    }

    fn is_last(&mut self, _cur: &T) -> bool {
        false
    }

    fn read_at(&mut self, cur: &T) -> T {
        *cur
    }

    #[track_caller]
    fn inc(&mut self, cur: &mut T) {
        *cur = step(*cur, 1);
    }

    #[track_caller]
    fn dec(&mut self, cur: &mut T) {
        if *cur <= self.start {
            error::out_of_bounds("dec before the first element");
        }
        *cur = step(*cur, -1);
    }

    #[track_caller]
    fn inc_by(&mut self, cur: &mut T, offset: Distance) {
        let moved = step(*cur, offset);
        if moved < self.start {
            error::out_of_bounds("cursor moved before the first element");
        }
        *cur = moved;
    }

    #[track_caller]
    fn distance(&mut self, from: &T, to: &T) -> Distance {
        span(*from, *to)
    }
}

impl<T: Step> MultipassSequence for Iota<T> {}
impl<T: Step> BidirectionalSequence for Iota<T> {}
impl<T: Step> RandomAccessSequence for Iota<T> {}

impl<T: Step> Sequence for Ints<T> {
    type Cursor = T;
    type Element = T;

    const CAPABILITIES: Capabilities = Capabilities::SINGLE_PASS
        .category(crate::Category::RandomAccess)
        .bounded(true)
        .sized(true);

    fn first(&mut self) -> T {
        self.from
    }

    fn is_last(&mut self, cur: &T) -> bool {
        *cur >= self.to
    }

    #[track_caller]
    fn read_at(&mut self, cur: &T) -> T {
        if *cur < self.from || *cur >= self.to {
            error::out_of_bounds("integer range read outside [from, to)");
        }
        *cur
    }

    #[track_caller]
    fn inc(&mut self, cur: &mut T) {
        *cur = step(*cur, 1);
    }

    #[track_caller]
    fn dec(&mut self, cur: &mut T) {
        if *cur <= self.from {
            error::out_of_bounds("dec before the first element");
        }
        *cur = step(*cur, -1);
    }

    #[track_caller]
    fn inc_by(&mut self, cur: &mut T, offset: Distance) {
        let moved = step(*cur, offset);
        if moved < self.from || moved > self.to {
            error::out_of_bounds("cursor moved outside [first, last]");
        }
        *cur = moved;
    }

    #[track_caller]
    fn distance(&mut self, from: &T, to: &T) -> Distance {
        span(*from, *to)
    }

    fn last(&mut self) -> T {
        self.to
    }

    #[track_caller]
    fn size(&mut self) -> Distance {
        span(self.from, self.to)
    }
}

impl<T: Step> MultipassSequence for Ints<T> {}
impl<T: Step> BidirectionalSequence for Ints<T> {}
impl<T: Step> RandomAccessSequence for Ints<T> {}
impl<T: Step> BoundedSequence for Ints<T> {}
impl<T: Step> SizedSequence for Ints<T> {}
