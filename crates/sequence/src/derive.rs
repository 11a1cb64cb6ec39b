//! Operations derived from the primitive set.
//!
//! Each derived operation resolves to the cheapest implementation the
//! sequence's declared [`Capabilities`] permit. The resolution functions on
//! [`Capabilities`] spell the order out so it can be checked directly.

use crate::error;
use crate::traits::{Capabilities, Distance, MultipassSequence, Sequence};
use crate::util;

/// How a derived operation is carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// One call to a constant-time primitive.
    Primitive,
    /// Computed from two constant-time primitives (`distance(first, last)`).
    Composed,
    /// Linear traversal with `inc`.
    Traversal,
}

impl Capabilities {
    pub const fn resolve_next(self) -> Resolution {
        if self.is_random_access() {
            Resolution::Primitive
        } else {
            Resolution::Traversal
        }
    }

    pub const fn resolve_distance(self) -> Resolution {
        self.resolve_next()
    }

    pub const fn resolve_count(self) -> Resolution {
        if self.sized {
            Resolution::Primitive
        } else if self.is_random_access() && self.bounded {
            Resolution::Composed
        } else {
            Resolution::Traversal
        }
    }

    pub const fn resolve_last(self) -> Resolution {
        if self.bounded {
            Resolution::Primitive
        } else {
            Resolution::Traversal
        }
    }
}

/// Advance `cur` by `n` positions.
///
/// Negative `n` walks backwards and needs a bidirectional sequence.
#[track_caller]
pub fn next<S: Sequence>(seq: &mut S, mut cur: S::Cursor, n: Distance) -> S::Cursor {
    match S::CAPABILITIES.resolve_next() {
        Resolution::Primitive => seq.inc_by(&mut cur, n),
        _ if n >= 0 => {
            for _ in 0..n {
                seq.inc(&mut cur);
            }
        }
        _ => {
            if !S::CAPABILITIES.is_bidirectional() {
                error::precondition("negative offset on a forward-only sequence");
            }
            for _ in n..0 {
                seq.dec(&mut cur);
            }
        }
    }
    cur
}

/// Advance `cur` by at most `n` positions, stopping at the end.
///
/// Returns how many positions were actually skipped.
pub fn advance<S: Sequence>(seq: &mut S, cur: &mut S::Cursor, n: usize) -> usize {
    let mut moved = 0;
    while moved < n && !seq.is_last(cur) {
        seq.inc(cur);
        moved += 1;
    }
    moved
}

/// Step `cur` back by one position.
pub fn prev<S: Sequence>(seq: &mut S, mut cur: S::Cursor) -> S::Cursor {
    seq.dec(&mut cur);
    cur
}

/// Number of `inc` calls needed to get from `from` to `to`.
#[track_caller]
pub fn distance<S: MultipassSequence>(seq: &mut S, from: &S::Cursor, to: &S::Cursor) -> Distance {
    match S::CAPABILITIES.resolve_distance() {
        Resolution::Primitive => seq.distance(from, to),
        _ => {
            let mut cur = from.clone();
            let mut n: Distance = 0;
            while cur != *to {
                if seq.is_last(&cur) {
                    error::precondition("`to` is not reachable from `from`");
                }
                seq.inc(&mut cur);
                n = util::checked_add(n, 1, "distance");
            }
            n
        }
    }
}

/// Number of elements.
#[track_caller]
pub fn count<S: Sequence>(seq: &mut S) -> Distance {
    match S::CAPABILITIES.resolve_count() {
        Resolution::Primitive => seq.size(),
        Resolution::Composed => {
            let first = seq.first();
            let last = seq.last();
            seq.distance(&first, &last)
        }
        Resolution::Traversal => {
            if S::CAPABILITIES.infinite {
                error::precondition("count of an infinite sequence");
            }
            let mut n: Distance = 0;
            seq.for_each_while(|_| {
                n = util::checked_add(n, 1, "count");
                true
            });
            n
        }
    }
}

/// The terminal cursor.
#[track_caller]
pub fn last<S: Sequence>(seq: &mut S) -> S::Cursor {
    match S::CAPABILITIES.resolve_last() {
        Resolution::Primitive => seq.last(),
        _ => {
            if S::CAPABILITIES.infinite {
                error::precondition("last of an infinite sequence");
            }
            let mut cur = seq.first();
            while !seq.is_last(&cur) {
                seq.inc(&mut cur);
            }
            cur
        }
    }
}

/// Constant-time size, when the profile allows one.
pub fn size_of<S: Sequence>(seq: &mut S) -> Option<Distance> {
    match S::CAPABILITIES.resolve_count() {
        Resolution::Traversal => None,
        _ => Some(count(seq)),
    }
}

/// Whether the sequence has no elements.
pub fn is_empty<S: Sequence>(seq: &mut S) -> bool {
    let first = seq.first();
    seq.is_last(&first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{from_iter, from_slice, iota};
    use crate::traits::Category;
    use crate::{SequenceExt, policy};

    #[test]
    fn resolution_order_prefers_cheapest() {
        let ra = Capabilities::CONTIGUOUS;
        assert_eq!(ra.resolve_next(), Resolution::Primitive);
        assert_eq!(ra.resolve_distance(), Resolution::Primitive);
        assert_eq!(ra.resolve_count(), Resolution::Primitive);
        assert_eq!(ra.resolve_last(), Resolution::Primitive);

        let ra_bounded_unsized = ra.sized(false);
        assert_eq!(ra_bounded_unsized.resolve_count(), Resolution::Composed);

        let forward = Capabilities::SINGLE_PASS.category(Category::Multipass);
        assert_eq!(forward.resolve_next(), Resolution::Traversal);
        assert_eq!(forward.resolve_count(), Resolution::Traversal);
        assert_eq!(forward.resolve_last(), Resolution::Traversal);
        assert_eq!(forward.sized(true).resolve_count(), Resolution::Primitive);
    }

    #[test]
    fn next_and_distance_agree_across_tiers() {
        let data = [10, 20, 30, 40, 50];
        let mut ra = from_slice(&data);
        let first = ra.first();
        let c = next(&mut ra, first, 3);
        assert_eq!(c, 3);
        assert_eq!(distance(&mut ra, &0, &c), 3);

        // filter over a slice is bidirectional, not random access.
        let mut fwd = from_slice(&data).filter(|_| true);
        let first = fwd.first();
        let c = next(&mut fwd, first.clone(), 3);
        assert_eq!(*fwd.read_at(&c), 40);
        assert_eq!(distance(&mut fwd, &first, &c), 3);
        let back = next(&mut fwd, c, -2);
        assert_eq!(*fwd.read_at(&back), 20);
    }

    #[test]
    fn count_uses_size_or_traversal() {
        let data = [1, 2, 3, 4];
        assert_eq!(count(&mut from_slice(&data)), 4);
        assert_eq!(count(&mut from_slice(&data).filter(|x| **x % 2 == 0)), 2);
        assert_eq!(count(&mut from_iter(data.iter().copied())), 4);
        assert_eq!(size_of(&mut from_slice(&data).filter(|_| true)), None);
        assert_eq!(size_of(&mut from_slice(&data)), Some(4));
    }

    #[test]
    fn last_scans_when_unbounded() {
        let data = [1, 2, 3];
        let mut seq = from_slice(&data).take_while(|x| **x < 3);
        let end = last(&mut seq);
        assert!(seq.is_last(&end));
        assert_eq!(end, 2);
    }

    #[test]
    fn advance_stops_at_end() {
        let data = [1, 2, 3];
        let mut seq = from_slice(&data);
        let mut cur = seq.first();
        assert_eq!(advance(&mut seq, &mut cur, 10), 3);
        assert!(seq.is_last(&cur));
        assert!(is_empty(&mut from_slice::<u8>(&[])));
    }

    #[test]
    fn count_of_infinite_is_a_violation() {
        policy::use_panic_policy();
        let err = policy::catch(|| count(&mut iota(0u32))).unwrap_err();
        assert!(matches!(err.error, crate::Error::Precondition(_)));
    }
}
