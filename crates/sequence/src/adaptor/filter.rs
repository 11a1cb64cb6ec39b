use crate::error;
use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Category, MultipassSequence, Sequence,
};

/// Cache for the result of an adaptor's initial forward scan.
///
/// Multi-pass bases keep the scanned cursor; single-pass bases keep nothing
/// and only allow one call to `first`.
#[derive(Clone, Debug)]
pub(crate) enum FirstCache<C> {
    Empty,
    Cached(C),
    Consumed,
}

impl<C: Clone> FirstCache<C> {
    #[track_caller]
    pub(crate) fn get_or_scan(&mut self, multipass: bool, scan: impl FnOnce() -> C) -> C {
        match self {
            FirstCache::Cached(cur) => cur.clone(),
            FirstCache::Consumed => error::precondition("first called twice on a single-pass sequence"),
            FirstCache::Empty => {
                let cur = scan();
                *self = if multipass {
                    FirstCache::Cached(cur.clone())
                } else {
                    FirstCache::Consumed
                };
                cur
            }
        }
    }
}

/// Elements of the base for which `pred` holds.
#[derive(Clone, Debug)]
pub struct Filter<B: Sequence, P> {
    base: B,
    pred: P,
    cache: FirstCache<B::Cursor>,
}

pub fn filter<B, P>(base: B, pred: P) -> Filter<B, P>
where
    B: Sequence,
    P: FnMut(&B::Element) -> bool,
{
    Filter {
        base,
        pred,
        cache: FirstCache::Empty,
    }
}

impl<B, P> Filter<B, P>
where
    B: Sequence,
    P: FnMut(&B::Element) -> bool,
{
    fn skip_rejected(&mut self, cur: &mut B::Cursor) {
        while !self.base.is_last(cur) {
            let value = self.base.read_at(cur);
            if (self.pred)(&value) {
                break;
            }
            self.base.inc(cur);
        }
    }
}

impl<B, P> Sequence for Filter<B, P>
where
    B: Sequence<Cursor: Clone>,
    P: FnMut(&B::Element) -> bool,
{
    type Cursor = B::Cursor;
    type Element = B::Element;

    const CAPABILITIES: Capabilities = B::CAPABILITIES
        .category(B::CAPABILITIES.category.meet(Category::Bidirectional))
        .sized(false)
        .contiguous(false);

    #[track_caller]
    fn first(&mut self) -> B::Cursor {
        let mut cache = std::mem::replace(&mut self.cache, FirstCache::Empty);
        let cur = cache.get_or_scan(B::CAPABILITIES.is_multipass(), || {
            let mut cur = self.base.first();
            self.skip_rejected(&mut cur);
            cur
        });
        self.cache = cache;
        cur
    }

    fn is_last(&mut self, cur: &B::Cursor) -> bool {
        self.base.is_last(cur)
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
        self.base.inc(cur);
        self.skip_rejected(cur);
    }

    /// Walks back to the nearest accepted element.
    #[track_caller]
    fn dec(&mut self, cur: &mut B::Cursor) {
        loop {
            self.base.dec(cur);
            let value = self.base.read_at(cur);
            if (self.pred)(&value) {
                return;
            }
        }
    }

    fn last(&mut self) -> B::Cursor {
        self.base.last()
    }
}

impl<B, P> MultipassSequence for Filter<B, P>
where
    B: MultipassSequence,
    P: FnMut(&B::Element) -> bool,
{
}

impl<B, P> BidirectionalSequence for Filter<B, P>
where
    B: BidirectionalSequence,
    P: FnMut(&B::Element) -> bool,
{
}

impl<B, P> BoundedSequence for Filter<B, P>
where
    B: BoundedSequence<Cursor: Clone>,
    P: FnMut(&B::Element) -> bool,
{
}
