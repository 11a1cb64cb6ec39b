//! Lazy adaptors. Each one owns its bases and recomputes its capability
//! profile from theirs at compile time; nothing is materialised.

mod adjacent;
mod adjacent_filter;
mod cache_last;
mod chain;
mod chunk;
mod chunk_by;
mod cycle;
mod filter;
mod map;
mod read_only;
mod reverse;
mod scan;
mod set_ops;
mod subsequence;
mod take;
mod take_while;
mod zip;

pub use adjacent::{Adjacent, AdjacentCursor, Slide, SlideCursor, adjacent, pairwise, slide};
pub use adjacent_filter::{AdjacentFilter, Dedup, adjacent_filter, dedup};
pub use cache_last::{CacheLast, cache_last};
pub use chain::{Chain, ChainCursor, chain};
pub use chunk::{Chunk, ChunkCursor, Stride, chunk, stride};
pub use chunk_by::{ChunkBy, ChunkByCursor, chunk_by};
pub use cycle::{Cycle, CycleCursor, cycle};
pub use filter::{Filter, filter};
pub use map::{Map, map};
pub use read_only::{ReadOnly, read_only};
pub use reverse::{Reverse, ReverseCursor, reverse};
pub use scan::{Scan, scan};
pub use set_ops::{
    SetCursor, SetKind, SetMerge, set_difference, set_intersection, set_symmetric_difference,
    set_union,
};
pub use subsequence::{Subsequence, slice, subsequence};
pub use take::{Drop, Take, TakeCursor, drop, take};
pub use take_while::{DropWhile, TakeWhile, drop_while, take_while};
pub use zip::{CartesianProduct, Zip, cartesian_product, zip};
