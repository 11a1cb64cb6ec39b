use crate::traits::{Sequence, SwappableSequence};

/// Whether no element is less than its predecessor under `is_less`.
pub fn is_sorted_by<S, F>(mut seq: S, mut is_less: F) -> bool
where
    S: Sequence,
    F: FnMut(&S::Element, &S::Element) -> bool,
{
    let mut prev: Option<S::Element> = None;
    let stop = seq.for_each_while(|x| {
        if let Some(p) = &prev {
            if is_less(&x, p) {
                return false;
            }
        }
        prev = Some(x);
        true
    });
    seq.is_last(&stop)
}

pub fn is_sorted<S>(seq: S) -> bool
where
    S: Sequence<Element: PartialOrd>,
{
    is_sorted_by(seq, |a, b| a < b)
}

/// Reverse the elements of `seq` in place.
pub fn inplace_reverse<S: SwappableSequence>(seq: &mut S) {
    let mut lo = seq.first();
    let mut hi = seq.last();
    while lo < hi {
        seq.dec(&mut hi);
        if lo == hi {
            break;
        }
        // SAFETY: `first <= lo < hi < last`, so both are readable.
        unsafe { seq.swap_at_unchecked(&lo, &hi) };
        seq.inc(&mut lo);
    }
}
