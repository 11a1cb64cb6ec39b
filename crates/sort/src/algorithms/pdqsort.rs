use sequence::{SwappableSequence, floor_log2};
use tracing::{debug, trace};

use super::common::Engine;
use crate::TUNED_PARAMS;

pub(crate) fn sort<S, F>(engine: &mut Engine<'_, S, F>)
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let len = engine.len();
    if len < 2 {
        return;
    }
    if sorted_or_reversed(engine, len) {
        return;
    }
    let bad_allowed = floor_log2(len);
    pdqsort(engine, 0, len, bad_allowed, true);
}

/// Settle inputs that are already monotone with a single scan.
fn sorted_or_reversed<S, F>(engine: &mut Engine<'_, S, F>, len: usize) -> bool
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut i = 1;
    while i < len && !engine.less(i, i - 1) {
        i += 1;
    }
    if i == len {
        return true;
    }
    // Anything before `i` is non-decreasing; a descending run must start at 0.
    if i > 1 && engine.less(0, i - 1) {
        return false;
    }
    let mut j = 1;
    while j < len && !engine.less(j - 1, j) {
        j += 1;
    }
    if j == len {
        debug!(len, "reversing non-ascending input");
        engine.reverse(0, len);
        return true;
    }
    false
}

fn pdqsort<S, F>(
    engine: &mut Engine<'_, S, F>,
    mut lo: usize,
    mut hi: usize,
    mut bad_allowed: usize,
    mut leftmost: bool,
) where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    loop {
        let len = hi - lo;
        if len < TUNED_PARAMS.insertion_threshold {
            engine.insertion_sort(lo, hi);
            return;
        }

        choose_pivot(engine, lo, hi);

        // Equal to the pivot that bounds this range from the left: everything
        // equal goes left and is never looked at again.
        if !leftmost && !engine.less(lo - 1, lo) {
            lo = partition_left(engine, lo, hi) + 1;
            continue;
        }

        let (mid, already_partitioned) = partition_right(engine, lo, hi);
        let left_len = mid - lo;
        let right_len = hi - mid - 1;
        let unbalanced = left_len < len / 8 || right_len < len / 8;

        if unbalanced {
            bad_allowed = bad_allowed.saturating_sub(1);
            if bad_allowed == 0 {
                debug!(len, "falling back to heap sort");
                engine.heap_sort(lo, hi);
                return;
            }
            break_patterns(engine, lo, mid, hi);
        } else if already_partitioned
            && engine.partial_insertion_sort(lo, mid, TUNED_PARAMS.partial_insertion_limit)
            && engine.partial_insertion_sort(mid + 1, hi, TUNED_PARAMS.partial_insertion_limit)
        {
            return;
        }

        if left_len < right_len {
            pdqsort(engine, lo, mid, bad_allowed, leftmost);
            lo = mid + 1;
            leftmost = false;
        } else {
            pdqsort(engine, mid + 1, hi, bad_allowed, false);
            hi = mid;
        }
    }
}

/// Move the chosen pivot to `lo`.
fn choose_pivot<S, F>(engine: &mut Engine<'_, S, F>, lo: usize, hi: usize)
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let len = hi - lo;
    let half = lo + len / 2;
    if len > TUNED_PARAMS.ninther_threshold {
        engine.sort3(lo, half, hi - 1);
        engine.sort3(lo + 1, half - 1, hi - 2);
        engine.sort3(lo + 2, half + 1, hi - 3);
        engine.sort3(half - 1, half, half + 1);
        engine.swap(lo, half);
    } else {
        engine.sort3(half, lo, hi - 1);
    }
}

/// Partition `[lo, hi)` around the pivot at `lo` into `< pivot` and
/// `>= pivot`. Returns the pivot's final position and whether no element had
/// to move.
fn partition_right<S, F>(engine: &mut Engine<'_, S, F>, lo: usize, hi: usize) -> (usize, bool)
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut i = lo + 1;
    let mut j = hi;
    while i < j && engine.less(i, lo) {
        i += 1;
    }
    while i < j && !engine.less(j - 1, lo) {
        j -= 1;
    }
    let already_partitioned = i >= j;

    while i < j {
        engine.swap(i, j - 1);
        i += 1;
        j -= 1;
        while i < j && engine.less(i, lo) {
            i += 1;
        }
        while i < j && !engine.less(j - 1, lo) {
            j -= 1;
        }
    }

    let mid = i - 1;
    engine.swap(lo, mid);
    (mid, already_partitioned)
}

/// Partition `[lo, hi)` around the pivot at `lo` into `<= pivot` and
/// `> pivot`. Returns the pivot's final position.
fn partition_left<S, F>(engine: &mut Engine<'_, S, F>, lo: usize, hi: usize) -> usize
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let mut i = lo + 1;
    let mut j = hi;
    while i < j && !engine.less(lo, i) {
        i += 1;
    }
    while i < j && engine.less(lo, j - 1) {
        j -= 1;
    }
    while i < j {
        engine.swap(i, j - 1);
        i += 1;
        j -= 1;
        while i < j && !engine.less(lo, i) {
            i += 1;
        }
        while i < j && engine.less(lo, j - 1) {
            j -= 1;
        }
    }

    let mid = i - 1;
    engine.swap(lo, mid);
    mid
}

/// Scatter a few elements of each side so that adversarial layouts do not
/// keep producing the same bad pivots.
fn break_patterns<S, F>(engine: &mut Engine<'_, S, F>, lo: usize, mid: usize, hi: usize)
where
    S: SwappableSequence,
    F: FnMut(&S::Value, &S::Value) -> bool,
{
    let threshold = TUNED_PARAMS.insertion_threshold;
    let ninther = TUNED_PARAMS.ninther_threshold;
    let left_len = mid - lo;
    let right_len = hi - mid - 1;
    trace!(left_len, right_len, "breaking patterns");

    if left_len >= threshold {
        let q = left_len / 4;
        engine.swap(lo, lo + q);
        engine.swap(mid - 1, mid - q);
        if left_len > ninther {
            engine.swap(lo + 1, lo + q + 1);
            engine.swap(lo + 2, lo + q + 2);
            engine.swap(mid - 2, mid - q - 1);
            engine.swap(mid - 3, mid - q - 2);
        }
    }

    if right_len >= threshold {
        let q = right_len / 4;
        engine.swap(mid + 1, mid + 1 + q);
        engine.swap(hi - 1, hi - q);
        if right_len > ninther {
            engine.swap(mid + 2, mid + 2 + q);
            engine.swap(mid + 3, mid + 3 + q);
            engine.swap(hi - 2, hi - q - 1);
            engine.swap(hi - 3, hi - q - 2);
        }
    }
}
