//! Bridge from the cursor protocol to [`Iterator`].

use std::iter::FusedIterator;

use crate::traits::Sequence;

/// Iterator over the elements of a sequence, from `first` to the end.
///
/// The sequence's `first` is called lazily on the first `next`.
#[derive(Clone, Debug)]
pub struct Iter<S: Sequence> {
    seq: S,
    cur: Option<S::Cursor>,
}

pub fn iter<S: Sequence>(seq: S) -> Iter<S> {
    Iter { seq, cur: None }
}

impl<S: Sequence> Iter<S> {
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for Iter<S> {
    type Item = S::Element;

    fn next(&mut self) -> Option<S::Element> {
        let seq = &mut self.seq;
        let cur = self.cur.get_or_insert_with(|| seq.first());
        if seq.is_last(cur) {
            return None;
        }
        let value = seq.read_at(cur);
        seq.inc(cur);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if S::CAPABILITIES.infinite {
            (usize::MAX, None)
        } else {
            (0, None)
        }
    }
}

impl<S: Sequence> FusedIterator for Iter<S> {}
