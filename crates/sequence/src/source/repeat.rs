use crate::error;
use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Category, Distance, MultipassSequence,
    RandomAccessSequence, Sequence, SizedSequence,
};
use crate::util;

/// The same value forever.
#[derive(Clone, Debug)]
pub struct Repeat<T> {
    value: T,
}

pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

/// The same value `count` times.
#[derive(Clone, Debug)]
pub struct RepeatN<T> {
    value: T,
    count: Distance,
}

#[track_caller]
pub fn repeat_n<T: Clone>(value: T, count: usize) -> RepeatN<T> {
    RepeatN {
        value,
        count: util::to_distance(count, "repeat count"),
    }
}

pub fn single<T: Clone>(value: T) -> RepeatN<T> {
    RepeatN { value, count: 1 }
}

/// No elements of type `T`.
#[derive(Clone, Copy, Debug)]
pub struct Empty<T> {
    _marker: std::marker::PhantomData<fn() -> T>,
}

pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: std::marker::PhantomData,
    }
}

impl<T: Clone> Sequence for Repeat<T> {
    type Cursor = Distance;
    type Element = T;

    const CAPABILITIES: Capabilities = Capabilities::SINGLE_PASS
        .category(Category::RandomAccess)
        .infinite(true);

    fn first(&mut self) -> Distance {
        0
    }

    fn is_last(&mut self, _cur: &Distance) -> bool {
        false
    }

    fn read_at(&mut self, _cur: &Distance) -> T {
        self.value.clone()
    }

    #[track_caller]
    fn inc(&mut self, cur: &mut Distance) {
        *cur = util::checked_add(*cur, 1, "repeat cursor");
    }

    #[track_caller]
    fn dec(&mut self, cur: &mut Distance) {
        if *cur <= 0 {
            error::out_of_bounds("dec before the first element");
        }
        *cur -= 1;
    }

    #[track_caller]
    fn inc_by(&mut self, cur: &mut Distance, offset: Distance) {
        let moved = util::checked_add(*cur, offset, "repeat cursor");
        if moved < 0 {
            error::out_of_bounds("cursor moved before the first element");
        }
        *cur = moved;
    }

    fn distance(&mut self, from: &Distance, to: &Distance) -> Distance {
        *to - *from
    }
}

impl<T: Clone> MultipassSequence for Repeat<T> {}
impl<T: Clone> BidirectionalSequence for Repeat<T> {}
impl<T: Clone> RandomAccessSequence for Repeat<T> {}

impl<T: Clone> Sequence for RepeatN<T> {
    type Cursor = Distance;
    type Element = T;

    const CAPABILITIES: Capabilities = Capabilities::SINGLE_PASS
        .category(Category::RandomAccess)
        .bounded(true)
        .sized(true);

    fn first(&mut self) -> Distance {
        0
    }

    fn is_last(&mut self, cur: &Distance) -> bool {
        *cur >= self.count
    }

    #[track_caller]
    fn read_at(&mut self, cur: &Distance) -> T {
        if *cur < 0 || *cur >= self.count {
            error::out_of_bounds("repeat_n read past the end");
        }
        self.value.clone()
    }

    fn inc(&mut self, cur: &mut Distance) {
        *cur += 1;
    }

    #[track_caller]
    fn dec(&mut self, cur: &mut Distance) {
        if *cur <= 0 {
            error::out_of_bounds("dec before the first element");
        }
        *cur -= 1;
    }

    #[track_caller]
    fn inc_by(&mut self, cur: &mut Distance, offset: Distance) {
        let moved = util::checked_add(*cur, offset, "repeat cursor");
        if moved < 0 || moved > self.count {
            error::out_of_bounds("cursor moved outside [first, last]");
        }
        *cur = moved;
    }

    fn distance(&mut self, from: &Distance, to: &Distance) -> Distance {
        *to - *from
    }

    fn last(&mut self) -> Distance {
        self.count
    }

    fn size(&mut self) -> Distance {
        self.count
    }
}

impl<T: Clone> MultipassSequence for RepeatN<T> {}
impl<T: Clone> BidirectionalSequence for RepeatN<T> {}
impl<T: Clone> RandomAccessSequence for RepeatN<T> {}
impl<T: Clone> BoundedSequence for RepeatN<T> {}
impl<T: Clone> SizedSequence for RepeatN<T> {}

impl<T> Sequence for Empty<T> {
    type Cursor = ();
    type Element = T;

    const CAPABILITIES: Capabilities = Capabilities::SINGLE_PASS
        .category(Category::RandomAccess)
        .bounded(true)
        .sized(true);

    fn first(&mut self) {}

    fn is_last(&mut self, _cur: &()) -> bool {
        true
    }

    #[track_caller]
    fn read_at(&mut self, _cur: &()) -> T {
        error::out_of_bounds("read from an empty sequence")
    }

    fn inc(&mut self, _cur: &mut ()) {}

    #[track_caller]
    fn dec(&mut self, _cur: &mut ()) {
        error::out_of_bounds("dec before the first element")
    }

    #[track_caller]
    fn inc_by(&mut self, _cur: &mut (), offset: Distance) {
        if offset != 0 {
            error::out_of_bounds("cursor moved outside an empty sequence");
        }
    }

    fn distance(&mut self, _from: &(), _to: &()) -> Distance {
        0
    }

    fn last(&mut self) {}

    fn size(&mut self) -> Distance {
        0
    }
}

impl<T> MultipassSequence for Empty<T> {}
impl<T> BidirectionalSequence for Empty<T> {}
impl<T> RandomAccessSequence for Empty<T> {}
impl<T> BoundedSequence for Empty<T> {}
impl<T> SizedSequence for Empty<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceExt;

    #[test]
    fn bounded_repeat_of_infinite_constant() {
        assert_eq!(repeat(7).take(5).collect::<Vec<_>>(), vec![7, 7, 7, 7, 7]);
    }

    #[test]
    fn repeat_n_and_single() {
        assert_eq!(repeat_n('x', 3).collect::<String>(), "xxx");
        assert_eq!(repeat_n(1, 0).count(), 0);
        assert_eq!(single(9).collect::<Vec<_>>(), vec![9]);
    }

    #[test]
    fn empty_has_no_elements() {
        let mut e = empty::<String>();
        let first = e.first();
        assert!(e.is_last(&first));
        assert_eq!(e.count(), 0);
    }
}
