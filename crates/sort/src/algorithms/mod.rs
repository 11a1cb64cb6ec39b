pub(crate) mod common;
pub(crate) mod heap;
pub(crate) mod pdqsort;
