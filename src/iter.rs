//! Bridges between [`Sequence`] and the standard [`Iterator`].
//!
//! [`SeqIter`] lets any sequence be used with `for` loops and iterator adapters;
//! [`from_iter`] goes the other way.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut total = 0;
//! for x in range(1, 4, 1).into_iter() {
//!     total += x;
//! }
//! assert_eq!(total, 6);
//!
//! let squares = from_iter((1..=3).map(|x| x * x)).collect::<Vec<_>>();
//! assert_eq!(squares, vec![1, 4, 9]);
//! ```

use std::iter::{Fuse, FusedIterator};

use crate::{Counted, Sequence};

/// Iterator adapter for a [`Sequence`].
///
/// Both `SeqIter` and `&mut SeqIter` implement `Iterator`, so a caller can iterate part
/// of the sequence and later recover it with [`into_inner`](SeqIter::into_inner).
pub struct SeqIter<S> {
    seq: S,
}

impl<S> SeqIter<S>
where
    S: Sequence,
{
    /// Create a new iterator from a sequence.
    pub fn new(seq: S) -> Self {
        Self { seq }
    }

    /// Give back the wrapped sequence.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S> Iterator for SeqIter<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.pull()
    }

    fn count(mut self) -> usize {
        crate::count(&mut self.seq)
    }
}

impl<S> FusedIterator for SeqIter<S> where S: Sequence {}

/// Sequence adapter for a standard [`Iterator`].
///
/// The iterator is fused, so exhaustion is sticky even for iterators that resume.
pub struct FromIter<I> {
    iter: Fuse<I>,
}

/// Create a sequence over the items of any iterable.
pub fn from_iter<I>(iterable: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
{
    FromIter {
        iter: iterable.into_iter().fuse(),
    }
}

impl<I> Sequence for FromIter<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}

/// Counts remaining elements through an [`ExactSizeIterator`].
///
/// Wrap with [`from_exact_iter`] when the iterator knows its length.
pub struct FromExactIter<I> {
    iter: Fuse<I>,
}

/// Create a sequence with fast counting from an exact-size iterable.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = from_exact_iter(0..1_000_000);
/// seq.pull();
/// assert_eq!(count(&mut seq), 999_999);
/// ```
pub fn from_exact_iter<I>(iterable: I) -> FromExactIter<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    FromExactIter {
        iter: iterable.into_iter().fuse(),
    }
}

impl<I> Sequence for FromExactIter<I>
where
    I: ExactSizeIterator,
{
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    fn as_counted(&mut self) -> Option<&mut dyn Counted<Item = I::Item>> {
        Some(self)
    }
}

impl<I> Counted for FromExactIter<I>
where
    I: ExactSizeIterator,
{
    fn count_remaining(&mut self) -> usize {
        let remaining = self.iter.len();
        if remaining > 0 {
            // `nth` lets the iterator skip in bulk where it can
            self.iter.nth(remaining - 1);
        }
        remaining
    }
}
