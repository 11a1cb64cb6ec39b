use crate::traits::{Capabilities, Sequence};

/// Running fold: each element is the accumulator after folding in one more
/// base element.
///
/// The accumulator lives in the adaptor, so the result is single-pass
/// whatever the base.
#[derive(Clone, Debug)]
pub struct Scan<B, F, A> {
    base: B,
    func: F,
    acc: Option<A>,
}

pub fn scan<B, F, A>(base: B, init: A, func: F) -> Scan<B, F, A>
where
    B: Sequence,
    F: FnMut(A, B::Element) -> A,
    A: Clone,
{
    Scan {
        base,
        func,
        acc: Some(init),
    }
}

impl<B, F, A> Scan<B, F, A>
where
    B: Sequence,
    F: FnMut(A, B::Element) -> A,
{
    fn step(&mut self, cur: &B::Cursor) {
        if self.base.is_last(cur) {
            return;
        }
        let value = self.base.read_at(cur);
        if let Some(acc) = self.acc.take() {
            self.acc = Some((self.func)(acc, value));
        }
    }
}

impl<B, F, A> Sequence for Scan<B, F, A>
where
    B: Sequence,
    F: FnMut(A, B::Element) -> A,
    A: Clone,
{
    type Cursor = B::Cursor;
    type Element = A;

    const CAPABILITIES: Capabilities = Capabilities::SINGLE_PASS.infinite(B::CAPABILITIES.infinite);

    fn first(&mut self) -> B::Cursor {
        let cur = self.base.first();
        self.step(&cur);
        cur
    }

    fn is_last(&mut self, cur: &B::Cursor) -> bool {
        self.base.is_last(cur)
    }

    #[track_caller]
    fn read_at(&mut self, cur: &B::Cursor) -> A {
        match &self.acc {
            Some(acc) if !self.base.is_last(cur) => acc.clone(),
            _ => crate::error::out_of_bounds("scan read past the end"),
        }
    }

    fn inc(&mut self, cur: &mut B::Cursor) {
        self.base.inc(cur);
        self.step(cur);
    }
}
