//! Method-call forms of the adaptors, derived operations and algorithms.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::iter::{Product, Sum};

use crate::adaptor::{
    self, Adjacent, AdjacentFilter, CacheLast, CartesianProduct, Chain, Chunk, ChunkBy, Cycle,
    Dedup, Drop, DropWhile, Filter, Map, ReadOnly, Reverse, Scan, SetMerge, Slide, Stride,
    Subsequence, Take, TakeWhile, Zip,
};
use crate::algorithm;
use crate::derive;
use crate::iter::{Iter, iter};
use crate::traits::{
    BidirectionalSequence, BoundedSequence, Distance, MultipassSequence, RandomAccessSequence,
    Sequence, SwappableSequence,
};

/// Fluent chaining for every [`Sequence`].
pub trait SequenceExt: Sequence + Sized {
    fn map<F, R>(self, func: F) -> Map<Self, F>
    where
        F: FnMut(Self::Element) -> R,
    {
        adaptor::map(self, func)
    }

    /// Dereference `&T` elements by copy.
    fn copied<'a, T>(self) -> Map<Self, fn(&'a T) -> T>
    where
        Self: Sequence<Element = &'a T>,
        T: Copy + 'a,
    {
        let copy: fn(&'a T) -> T = |x| *x;
        adaptor::map(self, copy)
    }

    fn cloned<'a, T>(self) -> Map<Self, fn(&'a T) -> T>
    where
        Self: Sequence<Element = &'a T>,
        T: Clone + 'a,
    {
        let clone: fn(&'a T) -> T = T::clone;
        adaptor::map(self, clone)
    }

    fn read_only(self) -> ReadOnly<Self> {
        adaptor::read_only(self)
    }

    fn reverse(self) -> Reverse<Self>
    where
        Self: BidirectionalSequence + BoundedSequence,
    {
        adaptor::reverse(self)
    }

    fn cache_last(self) -> CacheLast<Self>
    where
        Self: MultipassSequence,
    {
        adaptor::cache_last(self)
    }

    #[track_caller]
    fn drop(self, count: usize) -> Drop<Self> {
        adaptor::drop(self, count)
    }

    #[track_caller]
    fn take(self, count: usize) -> Take<Self> {
        adaptor::take(self, count)
    }

    #[track_caller]
    fn slice(self, from: usize, to: usize) -> Subsequence<Self>
    where
        Self: RandomAccessSequence,
    {
        adaptor::slice(self, from, to)
    }

    fn subsequence(self, from: Self::Cursor, to: Self::Cursor) -> Subsequence<Self>
    where
        Self: MultipassSequence,
    {
        adaptor::subsequence(self, from, to)
    }

    fn chain<O>(self, other: O) -> Chain<Self, O>
    where
        O: Sequence<Element = Self::Element, Cursor: PartialEq>,
    {
        adaptor::chain(self, other)
    }

    #[track_caller]
    fn adjacent<const N: usize>(self) -> Adjacent<Self, N>
    where
        Self: MultipassSequence,
    {
        adaptor::adjacent(self)
    }

    fn pairwise(self) -> Adjacent<Self, 2>
    where
        Self: MultipassSequence,
    {
        adaptor::pairwise(self)
    }

    #[track_caller]
    fn slide(self, width: usize) -> Slide<Self>
    where
        Self: MultipassSequence + Clone,
    {
        adaptor::slide(self, width)
    }

    #[track_caller]
    fn chunk(self, width: usize) -> Chunk<Self>
    where
        Self: MultipassSequence + Clone,
    {
        adaptor::chunk(self, width)
    }

    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        adaptor::filter(self, pred)
    }

    fn drop_while<P>(self, pred: P) -> DropWhile<Self, P>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        adaptor::drop_while(self, pred)
    }

    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Element) -> bool,
    {
        adaptor::take_while(self, pred)
    }

    fn adjacent_filter<P>(self, pred: P) -> AdjacentFilter<Self, P>
    where
        Self: MultipassSequence,
        P: FnMut(&Self::Element, &Self::Element) -> bool,
    {
        adaptor::adjacent_filter(self, pred)
    }

    fn dedup(self) -> Dedup<Self>
    where
        Self: MultipassSequence<Element: PartialEq>,
    {
        adaptor::dedup(self)
    }

    fn chunk_by<P>(self, pred: P) -> ChunkBy<Self, P>
    where
        Self: MultipassSequence + Clone,
        P: FnMut(&Self::Element, &Self::Element) -> bool,
    {
        adaptor::chunk_by(self, pred)
    }

    #[track_caller]
    fn stride(self, width: usize) -> Stride<Self> {
        adaptor::stride(self, width)
    }

    fn zip<O: Sequence>(self, other: O) -> Zip<Self, O> {
        adaptor::zip(self, other)
    }

    fn cartesian_product<O: MultipassSequence>(self, other: O) -> CartesianProduct<Self, O> {
        adaptor::cartesian_product(self, other)
    }

    fn set_union<O, C>(self, other: O, cmp: C) -> SetMerge<Self, O, C>
    where
        O: Sequence<Element = Self::Element>,
        C: FnMut(&Self::Element, &Self::Element) -> Ordering,
    {
        adaptor::set_union(self, other, cmp)
    }

    fn set_intersection<O, C>(self, other: O, cmp: C) -> SetMerge<Self, O, C>
    where
        O: Sequence<Element = Self::Element>,
        C: FnMut(&Self::Element, &Self::Element) -> Ordering,
    {
        adaptor::set_intersection(self, other, cmp)
    }

    fn set_difference<O, C>(self, other: O, cmp: C) -> SetMerge<Self, O, C>
    where
        O: Sequence<Element = Self::Element>,
        C: FnMut(&Self::Element, &Self::Element) -> Ordering,
    {
        adaptor::set_difference(self, other, cmp)
    }

    fn set_symmetric_difference<O, C>(self, other: O, cmp: C) -> SetMerge<Self, O, C>
    where
        O: Sequence<Element = Self::Element>,
        C: FnMut(&Self::Element, &Self::Element) -> Ordering,
    {
        adaptor::set_symmetric_difference(self, other, cmp)
    }

    fn cycle(self) -> Cycle<Self>
    where
        Self: MultipassSequence,
    {
        adaptor::cycle(self)
    }

    fn scan<A, F>(self, init: A, func: F) -> Scan<Self, F, A>
    where
        F: FnMut(A, Self::Element) -> A,
        A: Clone,
    {
        adaptor::scan(self, init, func)
    }

    fn iter(self) -> Iter<Self> {
        iter(self)
    }

    fn collect<C: FromIterator<Self::Element>>(self) -> C {
        iter(self).collect()
    }

    /// Number of elements, by the cheapest means the profile allows.
    #[track_caller]
    fn count(&mut self) -> Distance {
        derive::count(self)
    }

    fn is_empty(&mut self) -> bool {
        derive::is_empty(self)
    }

    /// The end cursor, scanning for it when the sequence is not bounded.
    #[track_caller]
    fn end(&mut self) -> Self::Cursor {
        derive::last(self)
    }

    fn known_size(&mut self) -> Option<Distance> {
        derive::size_of(self)
    }

    fn for_each<F: FnMut(Self::Element)>(self, func: F) {
        algorithm::for_each(self, func)
    }

    fn fold<A, F: FnMut(A, Self::Element) -> A>(self, init: A, func: F) -> A {
        algorithm::fold(self, init, func)
    }

    fn fold_first<F>(self, func: F) -> Option<Self::Element>
    where
        F: FnMut(Self::Element, Self::Element) -> Self::Element,
    {
        algorithm::fold_first(self, func)
    }

    fn sum<T: Sum<Self::Element>>(self) -> T {
        algorithm::sum(self)
    }

    fn product<T: Product<Self::Element>>(self) -> T {
        algorithm::product(self)
    }

    fn all<P: FnMut(&Self::Element) -> bool>(self, pred: P) -> bool {
        algorithm::all(self, pred)
    }

    fn any<P: FnMut(&Self::Element) -> bool>(self, pred: P) -> bool {
        algorithm::any(self, pred)
    }

    fn none<P: FnMut(&Self::Element) -> bool>(self, pred: P) -> bool {
        algorithm::none(self, pred)
    }

    fn find<V>(&mut self, value: &V) -> Self::Cursor
    where
        Self::Element: Borrow<V>,
        V: PartialEq + ?Sized,
    {
        algorithm::find(self, value)
    }

    fn find_if<P: FnMut(&Self::Element) -> bool>(&mut self, pred: P) -> Self::Cursor {
        algorithm::find_if(self, pred)
    }

    fn find_if_not<P: FnMut(&Self::Element) -> bool>(&mut self, pred: P) -> Self::Cursor {
        algorithm::find_if_not(self, pred)
    }

    fn find_element<P: FnMut(&Self::Element) -> bool>(self, pred: P) -> Option<Self::Element> {
        algorithm::find_element(self, pred)
    }

    fn position<P: FnMut(&Self::Element) -> bool>(self, pred: P) -> Option<Distance> {
        algorithm::position(self, pred)
    }

    #[track_caller]
    fn count_if<P: FnMut(&Self::Element) -> bool>(self, pred: P) -> Distance {
        algorithm::count_if(self, pred)
    }

    #[track_caller]
    fn count_eq<V>(self, value: &V) -> Distance
    where
        Self::Element: Borrow<V>,
        V: PartialEq + ?Sized,
    {
        algorithm::count_eq(self, value)
    }

    fn contains<V>(self, value: &V) -> bool
    where
        Self::Element: Borrow<V>,
        V: PartialEq + ?Sized,
    {
        algorithm::contains(self, value)
    }

    fn compare<O>(self, other: O) -> Ordering
    where
        Self::Element: Ord,
        O: Sequence<Element = Self::Element>,
    {
        algorithm::compare(self, other)
    }

    fn compare_by<O, F>(self, other: O, cmp: F) -> Ordering
    where
        O: Sequence,
        F: FnMut(&Self::Element, &O::Element) -> Ordering,
    {
        algorithm::compare_by(self, other, cmp)
    }

    fn equal<O>(self, other: O) -> bool
    where
        O: Sequence,
        Self::Element: PartialEq<O::Element>,
    {
        algorithm::equal(self, other)
    }

    fn equal_by<O, F>(self, other: O, eq: F) -> bool
    where
        O: Sequence,
        F: FnMut(&Self::Element, &O::Element) -> bool,
    {
        algorithm::equal_by(self, other, eq)
    }

    fn starts_with<O>(self, prefix: O) -> bool
    where
        O: Sequence,
        Self::Element: PartialEq<O::Element>,
    {
        algorithm::starts_with(self, prefix)
    }

    fn search<N>(&mut self, needle: N) -> Option<(Self::Cursor, Self::Cursor)>
    where
        Self: MultipassSequence<Element: PartialEq<N::Element>>,
        N: MultipassSequence,
    {
        algorithm::search(self, needle)
    }

    #[track_caller]
    fn partition_point<P>(&mut self, pred: P) -> Self::Cursor
    where
        Self: MultipassSequence,
        P: FnMut(&Self::Element) -> bool,
    {
        algorithm::partition_point(self, pred)
    }

    #[track_caller]
    fn lower_bound<V>(&mut self, value: &V) -> Self::Cursor
    where
        Self: MultipassSequence<Element: Borrow<V>>,
        V: Ord + ?Sized,
    {
        algorithm::lower_bound(self, value)
    }

    #[track_caller]
    fn upper_bound<V>(&mut self, value: &V) -> Self::Cursor
    where
        Self: MultipassSequence<Element: Borrow<V>>,
        V: Ord + ?Sized,
    {
        algorithm::upper_bound(self, value)
    }

    fn min(self) -> Option<Self::Element>
    where
        Self::Element: Ord,
    {
        algorithm::min(self)
    }

    fn max(self) -> Option<Self::Element>
    where
        Self::Element: Ord,
    {
        algorithm::max(self)
    }

    fn minmax(self) -> Option<(Self::Element, Self::Element)>
    where
        Self::Element: Ord + Clone,
    {
        algorithm::minmax(self)
    }

    fn min_by<F>(self, cmp: F) -> Option<Self::Element>
    where
        F: FnMut(&Self::Element, &Self::Element) -> Ordering,
    {
        algorithm::min_by(self, cmp)
    }

    fn max_by<F>(self, cmp: F) -> Option<Self::Element>
    where
        F: FnMut(&Self::Element, &Self::Element) -> Ordering,
    {
        algorithm::max_by(self, cmp)
    }

    fn is_sorted(self) -> bool
    where
        Self::Element: PartialOrd,
    {
        algorithm::is_sorted(self)
    }

    fn is_sorted_by<F>(self, is_less: F) -> bool
    where
        F: FnMut(&Self::Element, &Self::Element) -> bool,
    {
        algorithm::is_sorted_by(self, is_less)
    }

    fn inplace_reverse(&mut self)
    where
        Self: SwappableSequence,
    {
        algorithm::inplace_reverse(self)
    }

    fn to_vec(self) -> Vec<Self::Element> {
        algorithm::to_vec(self)
    }
}

impl<S: Sequence> SequenceExt for S {}
