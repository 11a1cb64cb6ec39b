use std::cmp::Ordering;

use crate::traits::{ContiguousSequence, Sequence};

/// Lexicographic comparison under `cmp`.
pub fn compare_by<A, B, F>(mut a: A, mut b: B, mut cmp: F) -> Ordering
where
    A: Sequence,
    B: Sequence,
    F: FnMut(&A::Element, &B::Element) -> Ordering,
{
    let mut x = a.first();
    let mut y = b.first();
    loop {
        match (a.is_last(&x), b.is_last(&y)) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        let order = cmp(&a.read_at(&x), &b.read_at(&y));
        if order != Ordering::Equal {
            return order;
        }
        a.inc(&mut x);
        b.inc(&mut y);
    }
}

pub fn compare<A, B>(a: A, b: B) -> Ordering
where
    A: Sequence<Element: Ord>,
    B: Sequence<Element = A::Element>,
{
    compare_by(a, b, Ord::cmp)
}

/// Element-wise equality under `eq`; sequences of different lengths are
/// unequal.
pub fn equal_by<A, B, F>(mut a: A, mut b: B, mut eq: F) -> bool
where
    A: Sequence,
    B: Sequence,
    F: FnMut(&A::Element, &B::Element) -> bool,
{
    if A::CAPABILITIES.sized && B::CAPABILITIES.sized && a.size() != b.size() {
        return false;
    }
    let mut x = a.first();
    let mut y = b.first();
    loop {
        match (a.is_last(&x), b.is_last(&y)) {
            (true, true) => return true,
            (false, false) => {}
            _ => return false,
        }
        if !eq(&a.read_at(&x), &b.read_at(&y)) {
            return false;
        }
        a.inc(&mut x);
        b.inc(&mut y);
    }
}

pub fn equal<A, B>(a: A, b: B) -> bool
where
    A: Sequence<Element: PartialEq<B::Element>>,
    B: Sequence,
{
    equal_by(a, b, |x, y| x == y)
}

/// Whether `prefix` is a prefix of `seq`.
pub fn starts_with<A, B>(mut seq: A, mut prefix: B) -> bool
where
    A: Sequence<Element: PartialEq<B::Element>>,
    B: Sequence,
{
    let mut x = seq.first();
    let mut y = prefix.first();
    while !prefix.is_last(&y) {
        if seq.is_last(&x) || seq.read_at(&x) != prefix.read_at(&y) {
            return false;
        }
        seq.inc(&mut x);
        prefix.inc(&mut y);
    }
    true
}

/// [`equal`] over flat storage: one slice comparison, which `std`
/// lowers to a memory comparison for plain integer types.
pub fn equal_contiguous<A, B>(a: &A, b: &B) -> bool
where
    A: ContiguousSequence,
    B: ContiguousSequence,
    A::Value: PartialEq<B::Value>,
{
    a.as_slice() == b.as_slice()
}

/// [`compare`] over flat storage.
pub fn compare_contiguous<A, B>(a: &A, b: &B) -> Ordering
where
    A: ContiguousSequence<Value: Ord>,
    B: ContiguousSequence<Value = A::Value>,
{
    a.as_slice().cmp(b.as_slice())
}
