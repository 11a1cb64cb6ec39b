//! Binary max-heaps laid out over a swappable sequence.
//!
//! The `_by` forms take a strict weak ordering `is_less`; the root of the
//! heap is then a greatest element under it.

use sequence::{Error, SwappableSequence, report};

use super::common::Engine;

/// Arrange the whole sequence into a heap.
pub fn make_heap<S>(seq: S)
where
    S: SwappableSequence<Value: Ord>,
{
    make_heap_by(seq, |a, b| a < b);
}

pub fn make_heap_by<S, F>(mut seq: S, is_less: F)
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut engine = Engine::new(&mut seq, is_less);
    let len = engine.len();
    engine.make_heap(0, len);
}

/// Sift the last element into the heap formed by the ones before it.
pub fn push_heap<S>(seq: S)
where
    S: SwappableSequence<Value: Ord>,
{
    push_heap_by(seq, |a, b| a < b);
}

#[track_caller]
pub fn push_heap_by<S, F>(mut seq: S, is_less: F)
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut engine = Engine::new(&mut seq, is_less);
    let len = engine.len();
    if len == 0 {
        report(Error::Precondition("push_heap on an empty sequence"));
    }
    engine.sift_up(0, len - 1);
}

/// Move the root to the back and restore the heap over the rest.
pub fn pop_heap<S>(seq: S)
where
    S: SwappableSequence<Value: Ord>,
{
    pop_heap_by(seq, |a, b| a < b);
}

#[track_caller]
pub fn pop_heap_by<S, F>(mut seq: S, is_less: F)
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut engine = Engine::new(&mut seq, is_less);
    let len = engine.len();
    if len == 0 {
        report(Error::Precondition("pop_heap on an empty sequence"));
    }
    engine.swap(0, len - 1);
    engine.sift_down(0, 0, len - 1);
}

/// Turn a heap into ascending order.
pub fn sort_heap<S>(seq: S)
where
    S: SwappableSequence<Value: Ord>,
{
    sort_heap_by(seq, |a, b| a < b);
}

pub fn sort_heap_by<S, F>(mut seq: S, is_less: F)
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut engine = Engine::new(&mut seq, is_less);
    let len = engine.len();
    engine.sort_heap(0, len);
}

pub fn heap_sort<S>(seq: S)
where
    S: SwappableSequence<Value: Ord>,
{
    heap_sort_by(seq, |a, b| a < b);
}

pub fn heap_sort_by<S, F>(mut seq: S, is_less: F)
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut engine = Engine::new(&mut seq, is_less);
    let len = engine.len();
    engine.heap_sort(0, len);
}
