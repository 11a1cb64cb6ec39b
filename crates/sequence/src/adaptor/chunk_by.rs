use std::cmp::Ordering;

use super::filter::FirstCache;
use super::subsequence::{Subsequence, subsequence};
use crate::traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Category, MultipassSequence, Sequence,
};

/// Maximal runs in which `pred` holds between every pair of neighbours.
///
/// A group ends exactly where `pred(prev, next)` fails. An empty base has no
/// groups and a lone trailing element forms its own group.
#[derive(Clone, Debug)]
pub struct ChunkBy<B: Sequence, P> {
    base: B,
    pred: P,
    cache: FirstCache<ChunkByCursor<B::Cursor>>,
}

pub fn chunk_by<B, P>(base: B, pred: P) -> ChunkBy<B, P>
where
    B: MultipassSequence + Clone,
    P: FnMut(&B::Element, &B::Element) -> bool,
{
    ChunkBy {
        base,
        pred,
        cache: FirstCache::Empty,
    }
}

/// Cursor of [`ChunkBy`]: the group's bounds. Compares by the start.
#[derive(Clone, Debug)]
pub struct ChunkByCursor<C> {
    from: C,
    to: C,
}

impl<C: PartialEq> PartialEq for ChunkByCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
    }
}

impl<C: Eq> Eq for ChunkByCursor<C> {}

impl<C: PartialOrd> PartialOrd for ChunkByCursor<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.from.partial_cmp(&other.from)
    }
}

impl<B, P> ChunkBy<B, P>
where
    B: MultipassSequence,
    P: FnMut(&B::Element, &B::Element) -> bool,
{
    fn group_end(&mut self, from: &B::Cursor) -> B::Cursor {
        let mut cur = from.clone();
        if self.base.is_last(&cur) {
            return cur;
        }
        let mut prev = self.base.read_at(&cur);
        self.base.inc(&mut cur);
        while !self.base.is_last(&cur) {
            let next = self.base.read_at(&cur);
            if !(self.pred)(&prev, &next) {
                break;
            }
            prev = next;
            self.base.inc(&mut cur);
        }
        cur
    }

    fn group_start(&mut self, to: &B::Cursor) -> B::Cursor {
        let first = self.base.first();
        let mut cur = to.clone();
        self.base.dec(&mut cur);
        let mut next = self.base.read_at(&cur);
        while cur != first {
            let mut before = cur.clone();
            self.base.dec(&mut before);
            let prev = self.base.read_at(&before);
            if !(self.pred)(&prev, &next) {
                break;
            }
            next = prev;
            cur = before;
        }
        cur
    }
}

impl<B, P> Sequence for ChunkBy<B, P>
where
    B: MultipassSequence + Clone,
    P: FnMut(&B::Element, &B::Element) -> bool,
{
    type Cursor = ChunkByCursor<B::Cursor>;
    type Element = Subsequence<B>;

    const CAPABILITIES: Capabilities = B::CAPABILITIES
        .category(B::CAPABILITIES.category.meet(Category::Bidirectional))
        .sized(false)
        .contiguous(false)
        .read_only(true);

    fn first(&mut self) -> Self::Cursor {
        let mut cache = std::mem::replace(&mut self.cache, FirstCache::Empty);
        let cur = cache.get_or_scan(true, || {
            let from = self.base.first();
            let to = self.group_end(&from);
            ChunkByCursor { from, to }
        });
        self.cache = cache;
        cur
    }

    fn is_last(&mut self, cur: &Self::Cursor) -> bool {
        self.base.is_last(&cur.from)
    }

    #[track_caller]
    fn read_at(&mut self, cur: &Self::Cursor) -> Subsequence<B> {
        subsequence(self.base.clone(), cur.from.clone(), cur.to.clone())
    }

    fn inc(&mut self, cur: &mut Self::Cursor) {
        let to = self.group_end(&cur.to);
        cur.from = std::mem::replace(&mut cur.to, to);
    }

    fn dec(&mut self, cur: &mut Self::Cursor) {
        let from = self.group_start(&cur.from);
        cur.to = std::mem::replace(&mut cur.from, from);
    }

    fn last(&mut self) -> Self::Cursor {
        let end = self.base.last();
        ChunkByCursor {
            from: end.clone(),
            to: end,
        }
    }
}

impl<B, P> MultipassSequence for ChunkBy<B, P>
where
    B: MultipassSequence + Clone,
    P: FnMut(&B::Element, &B::Element) -> bool,
{
}

impl<B, P> BidirectionalSequence for ChunkBy<B, P>
where
    B: BidirectionalSequence + Clone,
    P: FnMut(&B::Element, &B::Element) -> bool,
{
}

impl<B, P> BoundedSequence for ChunkBy<B, P>
where
    B: BoundedSequence + MultipassSequence + Clone,
    P: FnMut(&B::Element, &B::Element) -> bool,
{
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::SequenceExt;
    use crate::source::from_slice;

    fn groups(data: &[i32]) -> Vec<Vec<i32>> {
        from_slice(data)
            .chunk_by(|a, b| a <= b)
            .map(|g| g.copied().collect::<Vec<_>>())
            .collect()
    }

    #[test]
    fn ascending_runs() {
        assert_eq!(groups(&[1, 1, 2, 3, 3, 2, 2]), vec![vec![1, 1, 2, 3, 3], vec![2, 2]]);
        assert_eq!(groups(&[]), Vec::<Vec<i32>>::new());
        assert_eq!(groups(&[5, 4]), vec![vec![5], vec![4]]);
    }

    #[test]
    fn groups_partition_the_input() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let len = rng.random_range(0..30);
            let data: Vec<i32> = (0..len).map(|_| rng.random_range(0..5)).collect();
            let out = groups(&data);
            assert_eq!(out.concat(), data);
            for g in &out {
                assert!(!g.is_empty());
                assert!(g.windows(2).all(|w| w[0] <= w[1]));
            }
            for pair in out.windows(2) {
                assert!(pair[0].last() > pair[1].first());
            }
        }
    }

    #[test]
    fn walking_groups_backwards() {
        let data = [3, 1, 2, 2, 0];
        let got = from_slice(&data)
            .chunk_by(|a, b| a <= b)
            .reverse()
            .map(|g| g.copied().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(got, vec![vec![0], vec![1, 2, 2], vec![3]]);
    }
}
