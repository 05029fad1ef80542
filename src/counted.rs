//! Fast counting for sequences that know their remaining length.
//!
//! Counting a sequence naively means pulling every element. Some sequences can do much
//! better: an array-backed source already knows how many elements are left, and adapters
//! such as [`Map`](crate::compose::Map) or [`Take`](crate::compose::Take) can derive their
//! count from their upstream. Those sequences implement [`Counted`] and advertise it through
//! [`Sequence::as_counted`].

use crate::{Sequence, sink::reduce};

/// Optional capability: report the remaining length and exhaust the sequence.
///
/// `count_remaining` must return exactly the number of elements that pulling to
/// exhaustion would have produced from the current position, and must leave the sequence
/// exhausted. A second call therefore returns `0`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = from_vec(vec![1, 2, 3, 4]);
/// seq.pull();
/// assert_eq!(count(&mut seq), 3);
/// assert_eq!(seq.pull(), None);
/// assert_eq!(count(&mut seq), 0);
/// ```
pub trait Counted: Sequence {
    /// Count the remaining elements and exhaust the sequence.
    fn count_remaining(&mut self) -> usize;
}

/// Count the remaining elements of `seq`, leaving it exhausted.
///
/// Delegates to [`Counted::count_remaining`] when `seq` exposes it and pulls one element
/// at a time otherwise.
pub fn count<S>(seq: &mut S) -> usize
where
    S: Sequence + ?Sized,
{
    if let Some(counted) = seq.as_counted() {
        return counted.count_remaining();
    }
    reduce(seq, 0, |n, _| n + 1)
}
