use std::cmp::Ordering;

use super::fold::fold_first;
use crate::traits::Sequence;

/// Smallest element under `cmp`; the first of several equal minima.
pub fn min_by<S, F>(seq: S, mut cmp: F) -> Option<S::Element>
where
    S: Sequence,
    F: FnMut(&S::Element, &S::Element) -> Ordering,
{
    fold_first(seq, |best, x| if cmp(&x, &best) == Ordering::Less { x } else { best })
}

/// Largest element under `cmp`; the last of several equal maxima.
pub fn max_by<S, F>(seq: S, mut cmp: F) -> Option<S::Element>
where
    S: Sequence,
    F: FnMut(&S::Element, &S::Element) -> Ordering,
{
    fold_first(seq, |best, x| if cmp(&x, &best) == Ordering::Less { best } else { x })
}

pub fn min<S>(seq: S) -> Option<S::Element>
where
    S: Sequence<Element: Ord>,
{
    min_by(seq, Ord::cmp)
}

pub fn max<S>(seq: S) -> Option<S::Element>
where
    S: Sequence<Element: Ord>,
{
    max_by(seq, Ord::cmp)
}

/// Minimum and maximum in one pass, with the same tie rules as [`min`]
/// and [`max`].
pub fn minmax<S>(mut seq: S) -> Option<(S::Element, S::Element)>
where
    S: Sequence<Element: Ord + Clone>,
{
    let mut acc: Option<(S::Element, S::Element)> = None;
    seq.for_each_while(|x| {
        acc = Some(match acc.take() {
            None => (x.clone(), x),
            Some((lo, hi)) => {
                let lo = if x < lo { x.clone() } else { lo };
                let hi = if x >= hi { x } else { hi };
                (lo, hi)
            }
        });
        true
    });
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceExt;
    use crate::source::{from_iter, from_slice, ints};

    #[test]
    fn ties_follow_std() {
        let data = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let key = |x: &&(i32, char), y: &&(i32, char)| x.0.cmp(&y.0);
        assert_eq!(min_by(from_slice(&data), key), data.iter().min_by(key));
        assert_eq!(max_by(from_slice(&data), key), data.iter().max_by(key));
    }

    #[test]
    fn extremes() {
        assert_eq!(min(from_iter([4, 2, 8])), Some(2));
        assert_eq!(max(ints(0, 10).map(|x| (x * 7) % 10)), Some(9));
        assert_eq!(minmax(from_iter([3, 9, 1, 7])), Some((1, 9)));
        assert_eq!(minmax(from_iter([5])), Some((5, 5)));
        assert_eq!(minmax(ints(0, 0)), None);
        assert_eq!(min(from_slice::<u8>(&[])), None);
    }
}
