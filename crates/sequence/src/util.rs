use crate::error;
use crate::traits::Distance;

/// `usize` to [`Distance`], reporting overflow.
#[inline]
#[track_caller]
pub(crate) fn to_distance(n: usize, what: &'static str) -> Distance {
    match Distance::try_from(n) {
        Ok(d) => d,
        Err(_) => error::overflow(what),
    }
}

/// Non-negative [`Distance`] to `usize`, reporting a negative value.
#[inline]
#[track_caller]
pub(crate) fn to_index(d: Distance, what: &'static str) -> usize {
    match usize::try_from(d) {
        Ok(n) => n,
        Err(_) => error::precondition(what),
    }
}

#[inline]
#[track_caller]
pub(crate) fn checked_add(a: Distance, b: Distance, what: &'static str) -> Distance {
    a.checked_add(b).unwrap_or_else(|| error::overflow(what))
}

#[inline]
#[track_caller]
pub(crate) fn checked_mul(a: Distance, b: Distance, what: &'static str) -> Distance {
    a.checked_mul(b).unwrap_or_else(|| error::overflow(what))
}

/// Integer types usable as counting cursors.
pub trait Step: Copy + Ord {
    /// `self + offset`, or `None` when the result is not representable.
    fn offset(self, offset: Distance) -> Option<Self>;

    /// `to - from`, or `None` when the result does not fit a [`Distance`].
    fn steps_between(from: Self, to: Self) -> Option<Distance>;
}

macro_rules! impl_step {
    ($($t:ty),* $(,)?) => {$(
        impl Step for $t {
            #[inline]
            fn offset(self, offset: Distance) -> Option<Self> {
                let wide = i128::try_from(self).ok()? + offset as i128;
                <$t>::try_from(wide).ok()
            }

            #[inline]
            fn steps_between(from: Self, to: Self) -> Option<Distance> {
                let wide = i128::try_from(to).ok()? - i128::try_from(from).ok()?;
                Distance::try_from(wide).ok()
            }
        }
    )*};
}

impl_step!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Largest `k` with `2^k <= n`, `0` for `n <= 1`.
#[inline]
pub fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_offsets_respect_type_range() {
        assert_eq!(5u8.offset(3), Some(8));
        assert_eq!(5u8.offset(-5), Some(0));
        assert_eq!(5u8.offset(-6), None);
        assert_eq!(250u8.offset(6), None);
        assert_eq!(i64::MAX.offset(1), None);
        assert_eq!((-3i32).offset(10), Some(7));
    }

    #[test]
    fn steps_between_is_signed() {
        assert_eq!(u32::steps_between(10, 4), Some(-6));
        assert_eq!(i8::steps_between(-128, 127), Some(255));
        assert_eq!(u64::steps_between(0, u64::MAX), None);
    }

    #[test]
    fn floor_log2_small_values() {
        assert_eq!(floor_log2(0), 0);
        assert_eq!(floor_log2(1), 0);
        assert_eq!(floor_log2(2), 1);
        assert_eq!(floor_log2(3), 1);
        assert_eq!(floor_log2(1024), 10);
        assert_eq!(floor_log2(1025), 10);
    }
}
