//! Slice-backed sources: the only contiguous sequences in the crate.

use crate::error;
use crate::policy;
use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, ContiguousSequence, Distance,
    MultipassSequence, RandomAccessSequence, Sequence, SizedSequence, SwappableSequence,
};
use crate::util;

/// Read-only view of a slice. Elements are read as `&'a T`.
#[derive(Debug)]
pub struct Slice<'a, T> {
    data: &'a [T],
}

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

pub fn from_slice<T>(data: &[T]) -> Slice<'_, T> {
    Slice { data }
}

/// Mutable view of a slice. Elements are read by cloning and can be swapped.
#[derive(Debug)]
pub struct SliceMut<'a, T> {
    data: &'a mut [T],
}

pub fn from_slice_mut<T>(data: &mut [T]) -> SliceMut<'_, T> {
    SliceMut { data }
}

impl<'a, T> SliceMut<'a, T> {
    pub fn into_inner(self) -> &'a mut [T] {
        self.data
    }
}

/// Owning vector source. Elements are read by cloning and can be swapped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecSequence<T> {
    data: Vec<T>,
}

pub fn from_vec<T>(data: Vec<T>) -> VecSequence<T> {
    VecSequence { data }
}

impl<T> VecSequence<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

#[inline]
#[track_caller]
fn check_read(len: usize, index: usize) {
    if index >= len {
        error::out_of_bounds("slice read past the end");
    }
}

#[inline]
#[track_caller]
fn offset_index(len: usize, index: usize, offset: Distance) -> usize {
    let target = util::checked_add(util::to_distance(index, "slice cursor"), offset, "inc_by");
    match usize::try_from(target) {
        Ok(t) if t <= len => t,
        _ => error::out_of_bounds("slice cursor moved outside [first, last]"),
    }
}

macro_rules! slice_sequence_impl {
    ($ty:ident<$($lt:lifetime,)? $t:ident>, $elem:ty, $caps:expr, $read:expr, $($bound:tt)*) => {
        impl<$($lt,)? $t $($bound)*> Sequence for $ty<$($lt,)? $t> {
            type Cursor = usize;
            type Element = $elem;

            const CAPABILITIES: Capabilities = $caps;

            #[inline]
            fn first(&mut self) -> usize {
                0
            }

            #[inline]
            fn is_last(&mut self, cur: &usize) -> bool {
                *cur >= self.data.len()
            }

            #[inline]
            #[track_caller]
            fn read_at(&mut self, cur: &usize) -> Self::Element {
                check_read(self.data.len(), *cur);
                let read: fn(&Self, usize) -> Self::Element = $read;
                read(self, *cur)
            }

            #[inline]
            unsafe fn read_at_unchecked(&mut self, cur: &usize) -> Self::Element {
                if policy::config().debug_checks {
                    check_read(self.data.len(), *cur);
                }
                let read: fn(&Self, usize) -> Self::Element = $read;
                read(self, *cur)
            }

            #[inline]
            fn inc(&mut self, cur: &mut usize) {
                *cur += 1;
            }

            #[inline]
            #[track_caller]
            fn dec(&mut self, cur: &mut usize) {
                if *cur == 0 {
                    error::out_of_bounds("dec before the first element");
                }
                *cur -= 1;
            }

            #[inline]
            #[track_caller]
            fn inc_by(&mut self, cur: &mut usize, offset: Distance) {
                *cur = offset_index(self.data.len(), *cur, offset);
            }

            #[inline]
            fn distance(&mut self, from: &usize, to: &usize) -> Distance {
                util::to_distance(*to, "distance") - util::to_distance(*from, "distance")
            }

            #[inline]
            fn last(&mut self) -> usize {
                self.data.len()
            }

            #[inline]
            fn size(&mut self) -> Distance {
                util::to_distance(self.data.len(), "size")
            }
        }

        impl<$($lt,)? $t $($bound)*> MultipassSequence for $ty<$($lt,)? $t> {}
        impl<$($lt,)? $t $($bound)*> BidirectionalSequence for $ty<$($lt,)? $t> {}
        impl<$($lt,)? $t $($bound)*> RandomAccessSequence for $ty<$($lt,)? $t> {}
        impl<$($lt,)? $t $($bound)*> BoundedSequence for $ty<$($lt,)? $t> {}
        impl<$($lt,)? $t $($bound)*> SizedSequence for $ty<$($lt,)? $t> {}

        impl<$($lt,)? $t $($bound)*> ContiguousSequence for $ty<$($lt,)? $t> {
            type Value = $t;

            fn as_slice(&self) -> &[$t] {
                &self.data[..]
            }
        }
    };
}

slice_sequence_impl!(
    Slice<'a, T>,
    &'a T,
    Capabilities::CONTIGUOUS.read_only(true),
    |s, i| &s.data[i],
);
slice_sequence_impl!(
    SliceMut<'a, T>,
    T,
    Capabilities::CONTIGUOUS,
    |s, i| s.data[i].clone(),
    : Clone
);
slice_sequence_impl!(
    VecSequence<T>,
    T,
    Capabilities::CONTIGUOUS,
    |s, i| s.data[i].clone(),
    : Clone
);

macro_rules! swappable_impl {
    ($ty:ident<$($lt:lifetime,)? $t:ident>) => {
        impl<$($lt,)? $t: Clone> SwappableSequence for $ty<$($lt,)? $t> {
            type Value = $t;

            #[inline]
            #[track_caller]
            fn with_pair<R>(
                &mut self,
                a: &usize,
                b: &usize,
                f: impl FnOnce(&$t, &$t) -> R,
            ) -> R {
                check_read(self.data.len(), *a);
                check_read(self.data.len(), *b);
                f(&self.data[*a], &self.data[*b])
            }

            #[inline]
            #[track_caller]
            fn swap_at(&mut self, a: &usize, b: &usize) {
                check_read(self.data.len(), *a);
                check_read(self.data.len(), *b);
                self.data.swap(*a, *b);
            }

            #[inline]
            unsafe fn with_pair_unchecked<R>(
                &mut self,
                a: &usize,
                b: &usize,
                f: impl FnOnce(&$t, &$t) -> R,
            ) -> R {
                if policy::config().debug_checks {
                    check_read(self.data.len(), *a);
                    check_read(self.data.len(), *b);
                }
                // SAFETY: the caller guarantees both cursors are readable.
                unsafe { f(self.data.get_unchecked(*a), self.data.get_unchecked(*b)) }
            }

            #[inline]
            unsafe fn swap_at_unchecked(&mut self, a: &usize, b: &usize) {
                if policy::config().debug_checks {
                    check_read(self.data.len(), *a);
                    check_read(self.data.len(), *b);
                }
                let ptr = self.data.as_mut_ptr();
                // SAFETY: the caller guarantees both cursors are readable;
                // `ptr::swap` tolerates `a == b`.
                unsafe { std::ptr::swap(ptr.add(*a), ptr.add(*b)) }
            }
        }
    };
}

swappable_impl!(SliceMut<'a, T>);
swappable_impl!(VecSequence<T>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy;

    #[test]
    fn slice_profile_is_fully_capable() {
        let caps = <Slice<'_, i32> as Sequence>::CAPABILITIES;
        assert!(caps.is_random_access());
        assert!(caps.bounded && caps.sized && caps.contiguous);
        assert!(caps.read_only);
        assert!(!<SliceMut<'_, i32> as Sequence>::CAPABILITIES.read_only);
    }

    #[test]
    fn cursor_arithmetic() {
        let data = [1, 2, 3, 4, 5];
        let mut seq = from_slice(&data);
        let mut cur = seq.first();
        seq.inc_by(&mut cur, 4);
        assert_eq!(*seq.read_at(&cur), 5);
        seq.inc(&mut cur);
        assert!(seq.is_last(&cur));
        assert_eq!(cur, seq.last());
        seq.dec(&mut cur);
        seq.inc_by(&mut cur, -2);
        assert_eq!(*seq.read_at(&cur), 3);
        assert_eq!(seq.distance(&4, &1), -3);
        assert_eq!(seq.size(), 5);
        assert_eq!(seq.as_slice(), &data);
    }

    #[test]
    fn unchecked_read_matches_checked() {
        let data = [7u8, 8, 9];
        let mut seq = from_slice(&data);
        for i in 0..3 {
            // SAFETY: every index below the length is readable.
            let unchecked = unsafe { seq.read_at_unchecked(&i) };
            assert_eq!(unchecked, seq.read_at(&i));
        }
    }

    #[test]
    fn swap_and_pair_access() {
        let mut data = vec![3, 1, 2];
        let mut seq = from_slice_mut(&mut data);
        assert!(seq.with_pair(&1, &2, |a, b| a < b));
        seq.swap_at(&0, &2);
        // SAFETY: both cursors are below the length.
        unsafe { seq.swap_at_unchecked(&0, &1) };
        assert_eq!(seq.read_at(&0), 1);
        assert_eq!(data, vec![1, 2, 3]);

        let mut owned = from_vec(vec!["b".to_string(), "a".to_string()]);
        owned.swap_at(&0, &1);
        assert_eq!(owned.into_inner(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn out_of_bounds_read_is_reported() {
        policy::use_panic_policy();
        let data = [1, 2];
        let err = policy::catch(|| {
            let mut seq = from_slice(&data);
            *seq.read_at(&2)
        })
        .unwrap_err();
        assert!(matches!(err.error, crate::Error::OutOfBounds(_)));
        assert!(err.file.ends_with("slice.rs"));
    }

    #[test]
    fn cursor_moved_past_end_is_reported() {
        policy::use_panic_policy();
        let data = [1, 2];
        let err = policy::catch(|| {
            let mut seq = from_slice(&data);
            let mut cur = seq.first();
            seq.inc_by(&mut cur, 3);
        })
        .unwrap_err();
        assert!(matches!(err.error, crate::Error::OutOfBounds(_)));
    }
}
