//! Consumers built on the cursor protocol.
//!
//! Algorithms that return a cursor borrow the sequence (`&mut S`) so the
//! cursor stays usable; the rest take the sequence by value, and a
//! `&mut S` can be passed where the caller wants to keep it.

mod compare;
mod find;
mod fold;
mod minmax;
mod search;
mod sorted;

pub use compare::{
    compare, compare_by, compare_contiguous, equal, equal_by, equal_contiguous, starts_with,
};
pub use find::{contains, find, find_element, find_if, find_if_not, position};
pub use fold::{
    all, any, count_eq, count_if, fold, fold_first, for_each, none, product, sum, to_vec,
};
pub use minmax::{max, max_by, min, min_by, minmax};
pub use search::{lower_bound, partition_point, search, upper_bound};
pub use sorted::{inplace_reverse, is_sorted, is_sorted_by};
