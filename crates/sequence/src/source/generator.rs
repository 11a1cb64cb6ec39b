//! Pull-based generators and the bridge from native iterators.
//!
//! A [`Generator`] owns its paused state. The body runs only while the
//! sequence is being advanced (from `first` or `inc`), produces at most one
//! element per run and returns `None` once it is finished. The sequence is
//! single-pass: `first` may be called once, and advancing after the body has
//! finished is a precondition violation.

use crate::error;
use crate::traits::Sequence;

/// Position token of a single-pass generator; carries no state of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorCursor(());

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Fresh,
    Running,
    Done,
}

pub struct Generator<S, F, T> {
    state: S,
    body: F,
    current: Option<T>,
    stage: Stage,
}

/// Generator driven by `body(&mut state)`.
pub fn generator<S, F, T>(state: S, body: F) -> Generator<S, F, T>
where
    F: FnMut(&mut S) -> Option<T>,
{
    Generator {
        state,
        body,
        current: None,
        stage: Stage::Fresh,
    }
}

pub type FromIter<I> = Generator<I, fn(&mut I) -> Option<<I as Iterator>::Item>, <I as Iterator>::Item>;

/// Single-pass sequence over a native iterator.
pub fn from_iter<I: IntoIterator>(iter: I) -> FromIter<I::IntoIter> {
    generator(
        iter.into_iter(),
        <I::IntoIter as Iterator>::next as fn(&mut I::IntoIter) -> Option<I::Item>,
    )
}

impl<S, F, T> Generator<S, F, T>
where
    F: FnMut(&mut S) -> Option<T>,
{
    fn resume(&mut self) {
        self.current = (self.body)(&mut self.state);
        self.stage = if self.current.is_some() {
            Stage::Running
        } else {
            Stage::Done
        };
    }

    pub fn is_done(&self) -> bool {
        self.stage == Stage::Done
    }
}

impl<S, F, T> Sequence for Generator<S, F, T>
where
    F: FnMut(&mut S) -> Option<T>,
    T: Clone,
{
    type Cursor = GeneratorCursor;
    type Element = T;

    #[track_caller]
    fn first(&mut self) -> GeneratorCursor {
        if self.stage != Stage::Fresh {
            error::precondition("first called twice on a single-pass generator");
        }
        self.resume();
        GeneratorCursor(())
    }

    fn is_last(&mut self, _cur: &GeneratorCursor) -> bool {
        self.stage == Stage::Done
    }

    #[track_caller]
    fn read_at(&mut self, _cur: &GeneratorCursor) -> T {
        match &self.current {
            Some(value) => value.clone(),
            None => error::out_of_bounds("read from a finished generator"),
        }
    }

    #[track_caller]
    fn inc(&mut self, _cur: &mut GeneratorCursor) {
        match self.stage {
            Stage::Running => self.resume(),
            Stage::Done => error::precondition("generator resumed after completion"),
            Stage::Fresh => error::precondition("generator advanced before first"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SequenceExt, policy};

    fn fibonacci() -> impl Sequence<Element = u64, Cursor = GeneratorCursor> {
        generator((0u64, 1u64), |(a, b)| {
            let out = *a;
            let next = a.checked_add(*b)?;
            *a = *b;
            *b = next;
            Some(out)
        })
    }

    #[test]
    fn generator_suspends_between_elements() {
        let mut calls = 0;
        let mut seq = generator(0u32, |n| {
            calls += 1;
            *n += 1;
            (*n <= 3).then_some(*n * 10)
        });
        let mut cur = seq.first();
        assert_eq!(seq.read_at(&cur), 10);
        assert_eq!(seq.read_at(&cur), 10);
        seq.inc(&mut cur);
        assert_eq!(seq.read_at(&cur), 20);
        seq.inc(&mut cur);
        seq.inc(&mut cur);
        assert!(seq.is_last(&cur));
        assert!(seq.is_done());
        drop(seq);
        assert_eq!(calls, 4);
    }

    #[test]
    fn generator_composes_with_adaptors() {
        let got = fibonacci()
            .filter(|x| x % 2 == 0)
            .take(5)
            .collect::<Vec<_>>();
        assert_eq!(got, vec![0, 2, 8, 34, 144]);
    }

    #[test]
    fn native_iterator_bridge() {
        let words = vec!["a", "bb", "ccc"];
        let lens = from_iter(words).map(str::len).collect::<Vec<_>>();
        assert_eq!(lens, vec![1, 2, 3]);
    }

    #[test]
    fn resuming_after_completion_is_reported() {
        policy::use_panic_policy();
        let err = policy::catch(|| {
            let mut seq = from_iter(std::iter::empty::<u8>());
            let mut cur = seq.first();
            seq.inc(&mut cur);
        })
        .unwrap_err();
        assert_eq!(
            err.error,
            crate::Error::Precondition("generator resumed after completion")
        );
    }

    #[test]
    fn second_first_is_reported() {
        policy::use_panic_policy();
        let err = policy::catch(|| {
            let mut seq = from_iter(0..3);
            let _ = seq.first();
            let _ = seq.first();
        })
        .unwrap_err();
        assert!(matches!(err.error, crate::Error::Precondition(_)));
    }
}
