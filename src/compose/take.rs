use crate::{Counted, Sequence};

/// Yields at most a fixed number of elements from the wrapped sequence.
///
/// Created by [`take`] or [`Sequence::take`]. Once the allowance is used up, or the
/// upstream runs dry, the upstream is never pulled again.
pub struct Take<S> {
    seq: S,
    remaining: usize,
}

/// Create a sequence that yields at most `n` elements of `seq`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = take(range(0, 100, 1), 2);
/// assert_eq!(seq.pull(), Some(0));
/// assert_eq!(seq.pull(), Some(1));
/// assert_eq!(seq.pull(), None);
/// ```
pub fn take<S>(seq: S, n: usize) -> Take<S> {
    Take { seq, remaining: n }
}

impl<S> Take<S> {
    /// How many more elements this sequence may still yield.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<S> Sequence for Take<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.seq.pull() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn as_counted(&mut self) -> Option<&mut dyn Counted<Item = S::Item>> {
        Some(self)
    }
}

impl<S> Counted for Take<S>
where
    S: Sequence,
{
    fn count_remaining(&mut self) -> usize {
        let allowance = std::mem::take(&mut self.remaining);
        if allowance == 0 {
            return 0;
        }
        if let Some(counted) = self.seq.as_counted() {
            return counted.count_remaining().min(allowance);
        }
        let mut n = 0;
        while n < allowance && self.seq.pull().is_some() {
            n += 1;
        }
        n
    }
}
