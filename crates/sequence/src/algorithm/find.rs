use std::borrow::Borrow;

use crate::traits::{Distance, Sequence};

/// Cursor of the first element satisfying `pred`, or the end cursor.
pub fn find_if<S, P>(seq: &mut S, mut pred: P) -> S::Cursor
where
    S: Sequence,
    P: FnMut(&S::Element) -> bool,
{
    seq.for_each_while(|value| !pred(&value))
}

pub fn find_if_not<S, P>(seq: &mut S, mut pred: P) -> S::Cursor
where
    S: Sequence,
    P: FnMut(&S::Element) -> bool,
{
    find_if(seq, |value| !pred(value))
}

/// Cursor of the first element equal to `value`, or the end cursor.
pub fn find<S, V>(seq: &mut S, value: &V) -> S::Cursor
where
    S: Sequence<Element: Borrow<V>>,
    V: PartialEq + ?Sized,
{
    find_if(seq, |e| e.borrow() == value)
}

/// The first element satisfying `pred`, by value.
pub fn find_element<S, P>(mut seq: S, pred: P) -> Option<S::Element>
where
    S: Sequence,
    P: FnMut(&S::Element) -> bool,
{
    let cur = find_if(&mut seq, pred);
    if seq.is_last(&cur) {
        None
    } else {
        Some(seq.read_at(&cur))
    }
}

/// Index of the first element satisfying `pred`.
pub fn position<S, P>(mut seq: S, mut pred: P) -> Option<Distance>
where
    S: Sequence,
    P: FnMut(&S::Element) -> bool,
{
    let mut index: Distance = 0;
    let cur = seq.for_each_while(|value| {
        if pred(&value) {
            return false;
        }
        index += 1;
        true
    });
    (!seq.is_last(&cur)).then_some(index)
}

pub fn contains<S, V>(mut seq: S, value: &V) -> bool
where
    S: Sequence<Element: Borrow<V>>,
    V: PartialEq + ?Sized,
{
    let cur = find(&mut seq, value);
    !seq.is_last(&cur)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceExt;
    use crate::source::{from_iter, from_slice, from_vec, iota};

    #[test]
    fn find_returns_end_when_missing() {
        let data = [3, 1, 4, 1, 5];
        let mut seq = from_slice(&data);
        assert_eq!(find(&mut seq, &1), 1);
        assert_eq!(find(&mut seq, &9), 5);
        assert_eq!(find_if_not(&mut seq, |x| **x < 4), 2);
        assert!(contains(from_slice(&data), &5));
        assert!(!contains(from_vec(vec![String::from("a")]), "b"));
    }

    #[test]
    fn position_and_element() {
        assert_eq!(position(iota(0u32), |x| x * x > 50), Some(8));
        assert_eq!(position(from_iter([1, 2, 3]), |x| *x > 3), None);
        assert_eq!(find_element(from_iter(["x", "yy", "zzz"]), |s| s.len() == 2), Some("yy"));
        assert_eq!(from_slice(&[2, 4, 5]).find_element(|x| **x % 2 == 1), Some(&5));
    }
}
