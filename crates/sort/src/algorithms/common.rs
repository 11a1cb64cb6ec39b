use sequence::{Distance, Error, SwappableSequence, report};

/// Index view over a swappable sequence.
///
/// Positions are offsets from the first cursor. The range is validated once
/// in [`Engine::new`]; every access afterwards goes through the unchecked
/// primitives, so callers must keep indices below `len`.
pub(crate) struct Engine<'a, S: SwappableSequence, F> {
    seq: &'a mut S,
    origin: S::Cursor,
    len: usize,
    is_less: F,
}

impl<'a, S, F> Engine<'a, S, F>
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    #[track_caller]
    pub fn new(seq: &'a mut S, is_less: F) -> Self {
        let origin = seq.first();
        let end = seq.last();
        let len = seq.distance(&origin, &end);
        let Ok(len) = usize::try_from(len) else {
            report(Error::Precondition("sort range ends before it starts"))
        };
        Self {
            seq,
            origin,
            len,
            is_less,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn cursor(&mut self, i: usize) -> S::Cursor {
        debug_assert!(i < self.len);
        let mut cur = self.origin.clone();
        self.seq.inc_by(&mut cur, i as Distance);
        cur
    }

    /// `is_less(v[i], v[j])`.
    #[inline]
    pub fn less(&mut self, i: usize, j: usize) -> bool {
        let a = self.cursor(i);
        let b = self.cursor(j);
        let is_less = &mut self.is_less;
        // SAFETY: indices below `len` map to readable positions.
        unsafe { self.seq.with_pair_unchecked(&a, &b, |x, y| is_less(x, y)) }
    }

    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let a = self.cursor(i);
        let b = self.cursor(j);
        // SAFETY: as in `less`.
        unsafe { self.seq.swap_at_unchecked(&a, &b) }
    }

    /// Order `v[a] <= v[b] <= v[c]`.
    #[inline]
    pub fn sort3(&mut self, a: usize, b: usize, c: usize) {
        self.sort2(a, b);
        self.sort2(b, c);
        self.sort2(a, b);
    }

    #[inline]
    fn sort2(&mut self, a: usize, b: usize) {
        if self.less(b, a) {
            self.swap(a, b);
        }
    }

    pub fn reverse(&mut self, lo: usize, hi: usize) {
        let (mut i, mut j) = (lo, hi);
        while i + 1 < j {
            j -= 1;
            self.swap(i, j);
            i += 1;
        }
    }

    pub fn insertion_sort(&mut self, lo: usize, hi: usize) {
        for i in (lo + 1)..hi {
            let mut j = i;
            while j > lo && self.less(j, j - 1) {
                self.swap(j, j - 1);
                j -= 1;
            }
        }
    }

    /// Insertion sort that gives up after `limit` element moves. Returns
    /// whether `[lo, hi)` ended up sorted.
    pub fn partial_insertion_sort(&mut self, lo: usize, hi: usize, limit: usize) -> bool {
        let mut moves = 0;
        for i in (lo + 1)..hi {
            if moves > limit {
                return false;
            }
            let mut j = i;
            while j > lo && self.less(j, j - 1) {
                self.swap(j, j - 1);
                j -= 1;
            }
            moves += i - j;
        }
        true
    }

    pub fn sift_down(&mut self, lo: usize, mut root: usize, end: usize) {
        loop {
            let child = root * 2 + 1;
            if child >= end {
                break;
            }
            let mut pick = child;
            if child + 1 < end && self.less(lo + child, lo + child + 1) {
                pick = child + 1;
            }
            if !self.less(lo + root, lo + pick) {
                break;
            }
            self.swap(lo + root, lo + pick);
            root = pick;
        }
    }

    pub fn sift_up(&mut self, lo: usize, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if !self.less(lo + parent, lo + node) {
                break;
            }
            self.swap(lo + parent, lo + node);
            node = parent;
        }
    }

    pub fn make_heap(&mut self, lo: usize, hi: usize) {
        let len = hi - lo;
        if len < 2 {
            return;
        }
        for root in (0..len / 2).rev() {
            self.sift_down(lo, root, len);
        }
    }

    pub fn sort_heap(&mut self, lo: usize, hi: usize) {
        for end in ((lo + 1)..hi).rev() {
            self.swap(lo, end);
            self.sift_down(lo, 0, end - lo);
        }
    }

    pub fn heap_sort(&mut self, lo: usize, hi: usize) {
        self.make_heap(lo, hi);
        self.sort_heap(lo, hi);
    }
}
