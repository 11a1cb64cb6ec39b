use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Distance, MultipassSequence,
    RandomAccessSequence, Sequence, SizedSequence,
};

/// Makes a finite multi-pass base bounded by remembering its end.
///
/// The first call to `last` walks the base once; later calls are free.
#[derive(Clone, Debug)]
pub struct CacheLast<B: Sequence> {
    base: B,
    last: Option<B::Cursor>,
}

pub fn cache_last<B: MultipassSequence>(base: B) -> CacheLast<B> {
    CacheLast { base, last: None }
}

impl<B: MultipassSequence> Sequence for CacheLast<B> {
    type Cursor = B::Cursor;
    type Element = B::Element;

    const CAPABILITIES: Capabilities = B::CAPABILITIES.bounded(true).infinite(false);

    fn first(&mut self) -> B::Cursor {
        self.base.first()
    }

    fn is_last(&mut self, cur: &B::Cursor) -> bool {
        match &self.last {
            Some(last) => cur == last,
            None => self.base.is_last(cur),
        }
    }

    #[track_caller]
    fn read_at(&mut self, cur: &B::Cursor) -> B::Element {
        self.base.read_at(cur)
    }

    unsafe fn read_at_unchecked(&mut self, cur: &B::Cursor) -> B::Element {
        // SAFETY: forwarded contract.
        unsafe { self.base.read_at_unchecked(cur) }
    }

    fn inc(&mut self, cur: &mut B::Cursor) {
        self.base.inc(cur)
    }

    fn dec(&mut self, cur: &mut B::Cursor) {
        self.base.dec(cur)
    }

    fn inc_by(&mut self, cur: &mut B::Cursor, offset: Distance) {
        self.base.inc_by(cur, offset)
    }

    fn distance(&mut self, from: &B::Cursor, to: &B::Cursor) -> Distance {
        self.base.distance(from, to)
    }

    #[track_caller]
    fn last(&mut self) -> B::Cursor {
        if let Some(last) = &self.last {
            return last.clone();
        }
        let last = crate::derive::last(&mut self.base);
        self.last = Some(last.clone());
        last
    }

    fn size(&mut self) -> Distance {
        self.base.size()
    }
}

impl<B: MultipassSequence> MultipassSequence for CacheLast<B> {}
impl<B: BidirectionalSequence> BidirectionalSequence for CacheLast<B> {}
impl<B: RandomAccessSequence> RandomAccessSequence for CacheLast<B> {}
impl<B: MultipassSequence> BoundedSequence for CacheLast<B> {}
impl<B: SizedSequence + MultipassSequence> SizedSequence for CacheLast<B> {}
