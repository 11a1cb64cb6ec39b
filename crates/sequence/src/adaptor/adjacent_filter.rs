use super::filter::FirstCache;
use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Category, MultipassSequence, Sequence,
};

/// Keeps the first element, then every element `e` for which
/// `pred(kept, e)` holds, `kept` being the last element retained.
///
/// Walking backwards compares neighbours, so it visits the same elements as
/// the forward walk whenever `pred` is an inequality test such as in `dedup`.
#[derive(Clone, Debug)]
pub struct AdjacentFilter<B: Sequence, P> {
    base: B,
    pred: P,
    cache: FirstCache<B::Cursor>,
}

pub fn adjacent_filter<B, P>(base: B, pred: P) -> AdjacentFilter<B, P>
where
    B: MultipassSequence,
    P: FnMut(&B::Element, &B::Element) -> bool,
{
    AdjacentFilter {
        base,
        pred,
        cache: FirstCache::Empty,
    }
}

pub type Dedup<B> = AdjacentFilter<B, fn(&<B as Sequence>::Element, &<B as Sequence>::Element) -> bool>;

fn not_equal<E: PartialEq>(a: &E, b: &E) -> bool {
    a != b
}

/// Collapses every run of equal elements to its first element.
pub fn dedup<B>(base: B) -> Dedup<B>
where
    B: MultipassSequence<Element: PartialEq>,
{
    let pred: fn(&B::Element, &B::Element) -> bool = not_equal::<B::Element>;
    adjacent_filter(base, pred)
}

impl<B, P> Sequence for AdjacentFilter<B, P>
where
    B: MultipassSequence,
    P: FnMut(&B::Element, &B::Element) -> bool,
{
    type Cursor = B::Cursor;
    type Element = B::Element;

    const CAPABILITIES: Capabilities = B::CAPABILITIES
        .category(B::CAPABILITIES.category.meet(Category::Bidirectional))
        .sized(false)
        .contiguous(false);

    fn first(&mut self) -> B::Cursor {
        let mut cache = std::mem::replace(&mut self.cache, FirstCache::Empty);
        let cur = cache.get_or_scan(true, || self.base.first());
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
        let kept = self.base.read_at(cur);
        self.base.inc(cur);
        while !self.base.is_last(cur) {
            let next = self.base.read_at(cur);
            if (self.pred)(&kept, &next) {
                break;
            }
            self.base.inc(cur);
        }
    }

    /// Steps back to the start of the run that precedes `cur`.
    fn dec(&mut self, cur: &mut B::Cursor) {
        let first = self.first();
        self.base.dec(cur);
        while *cur != first {
            let mut before = cur.clone();
            self.base.dec(&mut before);
            let prev = self.base.read_at(&before);
            let here = self.base.read_at(cur);
            if (self.pred)(&prev, &here) {
                break;
            }
            *cur = before;
        }
    }

    fn last(&mut self) -> B::Cursor {
        self.base.last()
    }
}

impl<B, P> MultipassSequence for AdjacentFilter<B, P>
where
    B: MultipassSequence,
    P: FnMut(&B::Element, &B::Element) -> bool,
{
}

impl<B, P> BidirectionalSequence for AdjacentFilter<B, P>
where
    B: BidirectionalSequence,
    P: FnMut(&B::Element, &B::Element) -> bool,
{
}

impl<B, P> BoundedSequence for AdjacentFilter<B, P>
where
    B: BoundedSequence + MultipassSequence,
    P: FnMut(&B::Element, &B::Element) -> bool,
{
}
