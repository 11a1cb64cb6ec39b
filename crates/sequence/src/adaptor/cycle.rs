use crate::error;
use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Category, Distance, MultipassSequence,
    RandomAccessSequence, Sequence, SizedSequence,
};
use crate::util;

/// A non-empty multi-pass base repeated without end.
#[derive(Clone, Debug)]
pub struct Cycle<B> {
    base: B,
}

pub fn cycle<B: MultipassSequence>(base: B) -> Cycle<B> {
    Cycle { base }
}

/// Cursor of [`Cycle`]: how many times the base was wrapped, then the
/// position inside it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CycleCursor<C> {
    lap: Distance,
    base: C,
}

impl<B: MultipassSequence> Cycle<B> {
    fn period(&mut self) -> Distance {
        self.base.size()
    }
}

impl<B: MultipassSequence> Sequence for Cycle<B> {
    type Cursor = CycleCursor<B::Cursor>;
    type Element = B::Element;

    const CAPABILITIES: Capabilities = {
        let base = B::CAPABILITIES;
        let category = if base.is_random_access() && base.sized {
            Category::RandomAccess
        } else if base.is_bidirectional() && base.bounded {
            Category::Bidirectional
        } else {
            Category::Multipass
        };
        Capabilities {
            category,
            bounded: false,
            sized: false,
            contiguous: false,
            infinite: true,
            read_only: base.read_only,
        }
    };

    #[track_caller]
    fn first(&mut self) -> Self::Cursor {
        let base = self.base.first();
        if self.base.is_last(&base) {
            error::precondition("cycle of an empty sequence");
        }
        CycleCursor { lap: 0, base }
    }

    fn is_last(&mut self, _cur: &Self::Cursor) -> bool {
        false
    }

    #[track_caller]
    fn read_at(&mut self, cur: &Self::Cursor) -> B::Element {
        self.base.read_at(&cur.base)
    }

    unsafe fn read_at_unchecked(&mut self, cur: &Self::Cursor) -> B::Element {
        // SAFETY: the inner cursor of a cycle is never at the base's end.
        unsafe { self.base.read_at_unchecked(&cur.base) }
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        self.base.inc(&mut cur.base);
        if self.base.is_last(&cur.base) {
            cur.base = self.base.first();
            cur.lap += 1;
        }
    }

    fn dec(&mut self, cur: &mut Self::Cursor) {
        if cur.base == self.base.first() {
            cur.base = self.base.last();
            cur.lap -= 1;
        }
        self.base.dec(&mut cur.base);
    }

    #[track_caller]
    fn inc_by(&mut self, cur: &mut Self::Cursor, offset: Distance) {
        let period = self.period();
        let first = self.base.first();
        let pos = self.base.distance(&first, &cur.base);
        let flat = util::checked_add(
            util::checked_add(util::checked_mul(cur.lap, period, "cycle index"), pos, "cycle index"),
            offset,
            "cycle index",
        );
        let mut base = first;
        self.base.inc_by(&mut base, flat.rem_euclid(period));
        *cur = CycleCursor {
            lap: flat.div_euclid(period),
            base,
        };
    }

    fn distance(&mut self, from: &Self::Cursor, to: &Self::Cursor) -> Distance {
        let period = self.period();
        let laps = util::checked_mul(to.lap - from.lap, period, "cycle distance");
        util::checked_add(laps, self.base.distance(&from.base, &to.base), "cycle distance")
    }
}

impl<B: MultipassSequence> MultipassSequence for Cycle<B> {}
impl<B: BidirectionalSequence + BoundedSequence> BidirectionalSequence for Cycle<B> {}
impl<B: RandomAccessSequence + BoundedSequence + SizedSequence> RandomAccessSequence for Cycle<B> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{empty, from_slice, ints};
    use crate::{SequenceExt, policy};

    #[test]
    fn cycle_repeats_forever() {
        let data = [1, 2, 3];
        let got = from_slice(&data).cycle().take(7).copied().collect::<Vec<_>>();
        assert_eq!(got, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn cycle_jumps_across_laps() {
        let mut seq = ints(0, 3).cycle();
        let first = seq.first();
        let mut cur = first.clone();
        seq.inc_by(&mut cur, 8);
        assert_eq!(seq.read_at(&cur), 2);
        assert_eq!(seq.distance(&first, &cur), 8);
        seq.inc_by(&mut cur, -7);
        assert_eq!(seq.read_at(&cur), 1);
        seq.dec(&mut cur);
        seq.dec(&mut cur);
        assert_eq!(seq.read_at(&cur), 2);
        assert!(cur < first);
    }

    #[test]
    fn empty_cycle_is_rejected() {
        policy::use_panic_policy();
        let err = policy::catch(|| {
            let mut seq = empty::<u8>().cycle();
            let _ = seq.first();
        })
        .unwrap_err();
        assert!(matches!(err.error, crate::Error::Precondition(_)));
    }
}
