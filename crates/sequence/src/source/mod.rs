mod generator;
mod iota;
mod repeat;
mod slice;

pub use generator::{FromIter, Generator, GeneratorCursor, from_iter, generator};
pub use iota::{Iota, Ints, iota, ints};
pub use repeat::{Empty, Repeat, RepeatN, empty, repeat, repeat_n, single};
pub use slice::{Slice, SliceMut, VecSequence, from_slice, from_slice_mut, from_vec};
