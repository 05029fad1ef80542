//! Core trait for pull-based lazy sequences.
//!
//! This module defines the [`Sequence`] trait, the fundamental building block of this
//! library. A [`Sequence`] is a forward-only, single-pass source of values: every call to
//! [`pull`](Sequence::pull) either produces the next element or reports exhaustion.
//!
//! # The Sequence Trait
//!
//! [`Sequence`] represents a computation that:
//! - Produces elements of type `Item`, one per call to `pull()`
//! - Returns `None` once it is exhausted, and keeps returning `None` forever after
//! - Does no work until it is pulled
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut seq = from_vec(vec![1, 2, 3]).map(|x| x * 10);
//! assert_eq!(seq.pull(), Some(10));
//! assert_eq!(seq.pull(), Some(20));
//! assert_eq!(seq.pull(), Some(30));
//! assert_eq!(seq.pull(), None);
//! assert_eq!(seq.pull(), None); // exhaustion is sticky
//! ```

use crate::{
    compose::{
        Filter, FilterMap, FlatMap, Flatten, Map, Take, filter, filter_map, flat_map, map, take,
    },
    counted::{Counted, count},
    iter::SeqIter,
    sink::reduce,
};

/// Core trait for forward-only, single-pass, pull-based sources of values.
///
/// Each call to `pull()` either yields the next element or signals exhaustion with
/// `None`. Once `None` has been returned, every later call must return `None` as well and
/// must stay cheap, so callers may keep polling defensively.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = once(7);
/// assert_eq!(seq.pull(), Some(7));
/// assert_eq!(seq.pull(), None);
/// ```
pub trait Sequence {
    /// Type of the elements produced by this sequence
    type Item;

    /// Pull the next element, or `None` when the sequence is exhausted.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Probe for the fast-count capability.
    ///
    /// Sequences that can report how many elements remain without pulling them one by
    /// one return `Some(self)`. The default is `None`; use [`count`](crate::count) rather
    /// than calling this directly.
    fn as_counted(&mut self) -> Option<&mut dyn Counted<Item = Self::Item>> {
        None
    }

    /// Transform every element with `f`.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let doubled = from_vec(vec![1, 2, 3]).map(|x| x * 2).collect::<Vec<_>>();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    fn map<O, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> O,
    {
        map(self, f)
    }

    /// Keep only the elements for which `predicate` returns `true`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        filter(self, predicate)
    }

    /// Transform and filter in one step: elements mapped to `None` are discarded.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let small = from_vec(vec![1, 2, 3, 4])
    ///     .filter_map(|i| {
    ///         let j = i * 2;
    ///         (j < 5).then_some(j)
    ///     })
    ///     .collect::<Vec<_>>();
    /// assert_eq!(small, vec![2, 4]);
    /// ```
    fn filter_map<O, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<O>,
    {
        filter_map(self, f)
    }

    /// Convert every element into an inner sequence and yield their elements in order.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let flat = from_vec(vec![vec![0, 1, 2], vec![10, 11, 12]])
    ///     .flat_map(from_vec)
    ///     .collect::<Vec<_>>();
    /// assert_eq!(flat, vec![0, 1, 2, 10, 11, 12]);
    /// ```
    fn flat_map<I, F>(self, f: F) -> FlatMap<Self, F, I>
    where
        Self: Sized,
        I: Sequence,
        F: FnMut(Self::Item) -> I,
    {
        flat_map(self, f)
    }

    /// Flatten a sequence whose elements are already sequences.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Sequence,
    {
        flat_map(self, std::convert::identity as fn(Self::Item) -> Self::Item)
    }

    /// Yield at most `n` elements.
    ///
    /// `take(0)` never pulls from the upstream sequence.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        take(self, n)
    }

    /// Combine every element into an accumulator, in encounter order.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let total = range(1, 5, 1).fold(0, |acc, x| acc + x);
    /// assert_eq!(total, 10);
    /// ```
    fn fold<A, F>(self, init: A, f: F) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        reduce(self, init, f)
    }

    /// Count the remaining elements, exhausting the sequence.
    ///
    /// Uses the fast-count capability when present.
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        count(&mut self)
    }

    /// Drain the sequence into any collection.
    fn collect<C>(self) -> C
    where
        Self: Sized,
        C: FromIterator<Self::Item>,
    {
        self.into_iter().collect()
    }

    /// Erase the concrete type behind a box.
    fn boxed<'a>(self) -> Box<dyn Sequence<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Borrow this sequence so an adapter can consume part of it.
    ///
    /// The borrow does not expose [`as_counted`](Sequence::as_counted), so counting an
    /// adapter built on it pulls only what the adapter itself yields.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Adapt into a standard [`Iterator`].
    #[allow(clippy::wrong_self_convention)]
    fn into_iter(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter::new(self)
    }
}

// A fast count exhausts the whole sequence, so a borrow never exposes it: the caller still
// owns whatever an adapter like `take` leaves behind.
impl<S> Sequence for &'_ mut S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        (**self).pull()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        (**self).pull()
    }

    fn as_counted(&mut self) -> Option<&mut dyn Counted<Item = Self::Item>> {
        (**self).as_counted()
    }
}

impl<L, R> Sequence for either::Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        match self {
            either::Either::Left(l) => l.pull(),
            either::Either::Right(r) => r.pull(),
        }
    }

    fn as_counted(&mut self) -> Option<&mut dyn Counted<Item = Self::Item>> {
        match self {
            either::Either::Left(l) => l.as_counted(),
            either::Either::Right(r) => r.as_counted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, from_vec, once, range, repeat};
    use either::Either;

    #[test]
    fn test_adapters_compose_into_a_pipeline() {
        let result: Vec<String> = range(0, 10, 1)
            .filter(|i| i % 2 == 0)
            .map(|i| i * i)
            .take(3)
            .map(|i| format!("#{i}"))
            .collect();

        assert_eq!(result, vec!["#0", "#4", "#16"]);
    }

    #[test]
    fn test_mut_ref_lets_caller_resume_after_partial_take() {
        let mut seq = from_vec(vec![1, 2, 3, 4, 5]);

        let head: Vec<_> = seq.by_ref().take(2).collect();
        let tail: Vec<_> = seq.collect();

        assert_eq!(head, vec![1, 2]);
        assert_eq!(tail, vec![3, 4, 5]);
    }

    #[test]
    fn test_count_through_borrow_leaves_rest_to_owner() {
        let mut seq = from_vec(vec![1, 2, 3, 4, 5]);
        assert_eq!(seq.by_ref().take(2).count(), 2);
        assert_eq!(seq.by_ref().map(|x| x * 10).take(1).count(), 1);
        assert_eq!(seq.collect::<Vec<_>>(), vec![4, 5]);
    }

    #[test]
    fn test_boxed_sequence_forwards_fast_count() {
        let mut seq = from_vec(vec!['a', 'b', 'c']).boxed();
        assert!(seq.as_counted().is_some());
        assert_eq!(seq.count(), 3);

        let mut plain = repeat(1).boxed();
        assert!(plain.as_counted().is_none());
    }

    #[test]
    fn test_either_dispatches_to_active_side() {
        let pick = |left: bool| -> Either<_, _> {
            if left {
                Either::Left(from_vec(vec![1, 2]))
            } else {
                Either::Right(once(9))
            }
        };

        assert_eq!(pick(true).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(pick(false).collect::<Vec<_>>(), vec![9]);
        assert_eq!(pick(true).count(), 2);
    }

    #[test]
    fn test_flatten_sequence_of_sequences() {
        let groups = from_vec(vec![from_vec(vec![1]), from_vec(vec![]), from_vec(vec![2, 3])]);
        assert_eq!(groups.flatten().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_fold_visits_in_encounter_order() {
        let mut n = 0;
        let seq = from_fn(move || {
            n += 1;
            (n <= 4).then_some(n)
        });
        let order = seq.fold(String::new(), |mut acc, x| {
            acc.push_str(&x.to_string());
            acc
        });
        assert_eq!(order, "1234");
    }
}
