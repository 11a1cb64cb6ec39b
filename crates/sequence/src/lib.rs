//! Lazy, cursor-based sequences.
//!
//! A [`Sequence`] hands out cursors and reads elements through them. Adaptors
//! in [`adaptor`] wrap sequences without materialising anything, and the
//! capability profile of every composition ([`Capabilities`]) is computed at
//! compile time from its parts. Consumers live in [`algorithm`]; the fluent
//! forms of both are on [`SequenceExt`].

pub mod adaptor;
pub mod algorithm;
pub mod derive;
pub mod error;
mod ext;
pub mod iter;
pub mod policy;
pub mod source;
mod traits;
mod util;

pub use error::{Error, Violation, report};
pub use ext::SequenceExt;
pub use iter::Iter;
pub use policy::{Config, Policy};
pub use source::{
    Slice, SliceMut, VecSequence, empty, from_iter, from_slice, from_slice_mut, from_vec,
    generator, ints, iota, repeat, repeat_n, single,
};
pub use traits::{
    BidirectionalSequence, BoundedSequence, Capabilities, Category, ContiguousSequence, Distance,
    MultipassSequence, RandomAccessSequence, Sequence, SizedSequence, SwappableSequence,
};
pub use util::{Step, floor_log2};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_dedup_runs() {
        let data = [1, 1, 2, 3, 3, 2, 2];
        assert_eq!(from_slice(&data).dedup().copied().to_vec(), vec![1, 2, 3, 2]);
    }

    #[test]
    fn scenario_chunk_by_ascending() {
        let data = [1, 1, 2, 3, 3, 2, 2];
        let groups = from_slice(&data)
            .chunk_by(|a, b| a <= b)
            .map(|g| g.copied().to_vec())
            .to_vec();
        assert_eq!(groups, vec![vec![1, 1, 2, 3, 3], vec![2, 2]]);
    }

    #[test]
    fn scenario_repeat_take() {
        assert_eq!(repeat(7).take(5).to_vec(), vec![7; 5]);
    }

    #[test]
    fn zip_and_product_lengths() {
        for (m, n) in [(0, 3), (3, 0), (2, 5), (4, 4)] {
            assert_eq!(ints(0, m).zip(ints(0, n)).count(), m.min(n) as Distance);
            assert_eq!(
                ints(0, m).cartesian_product(ints(0, n)).count(),
                (m * n) as Distance
            );
        }
    }

    #[test]
    fn capability_profiles_compose() {
        fn caps<S: Sequence>(_: &S) -> Capabilities {
            S::CAPABILITIES
        }
        let data = [1, 2, 3];
        let seq = from_slice(&data).map(|x| x + 1).reverse().take(2);
        let c = caps(&seq);
        assert_eq!(c.category, Category::RandomAccess);
        assert!(c.bounded && c.sized && !c.contiguous);

        let seq = from_iter(data).filter(|x| *x > 1);
        assert_eq!(caps(&seq).category, Category::SinglePass);

        let seq = iota(0u8).zip(from_slice(&data));
        let c = caps(&seq);
        assert!(!c.infinite);
        assert!(c.is_random_access());
    }
}
