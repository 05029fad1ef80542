use std::marker::PhantomData;

use crate::{Counted, Sequence};

/// A sequence that never yields anything.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create a sequence that is exhausted from the start.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = empty::<i32>();
/// assert_eq!(seq.pull(), None);
/// ```
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        None
    }

    fn as_counted(&mut self) -> Option<&mut dyn Counted<Item = T>> {
        Some(self)
    }
}

impl<T> Counted for Empty<T> {
    fn count_remaining(&mut self) -> usize {
        0
    }
}

/// Yields a single value, then is exhausted.
pub struct Once<T>(Option<T>);

/// Create a sequence that yields `item` exactly once.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = once(1337);
/// assert_eq!(seq.pull(), Some(1337));
/// assert_eq!(seq.pull(), None);
/// ```
pub fn once<T>(item: T) -> Once<T> {
    Once(Some(item))
}

impl<T> Sequence for Once<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        self.0.take()
    }

    fn as_counted(&mut self) -> Option<&mut dyn Counted<Item = T>> {
        Some(self)
    }
}

impl<T> Counted for Once<T> {
    fn count_remaining(&mut self) -> usize {
        usize::from(self.0.take().is_some())
    }
}

/// Yields clones of one value forever.
///
/// Never exhausts on its own; bound it with [`take`](Sequence::take).
pub struct Repeat<T>(T);

/// Create a sequence that yields copies of `item` indefinitely.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let four = repeat(1337).take(4).collect::<Vec<_>>();
/// assert_eq!(four, vec![1337; 4]);
/// ```
pub fn repeat<T: Clone>(item: T) -> Repeat<T> {
    Repeat(item)
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        Some(self.0.clone())
    }
}

/// Sequence backed by a closure.
///
/// The closure is not called again once it has returned `None`.
pub struct FromFn<F> {
    f: F,
    done: bool,
}

/// Create a sequence from a closure returning the next element.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = 0;
/// let mut seq = from_fn(move || {
///     n += 1;
///     (n <= 2).then_some(n)
/// });
/// assert_eq!(seq.pull(), Some(1));
/// assert_eq!(seq.pull(), Some(2));
/// assert_eq!(seq.pull(), None);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { f, done: false }
}

impl<T, F> Sequence for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let next = (self.f)();
        self.done = next.is_none();
        next
    }
}
