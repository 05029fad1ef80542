use crate::{Counted, Sequence, count};

/// Yields the elements of a sequence of groups, one group after the other.
///
/// Each group pulled from the outer sequence is converted into an inner sequence by the
/// supplied function. The active inner sequence is drained before the next group is
/// pulled; empty groups are skipped.
pub struct FlatMap<S, F, I> {
    outer: S,
    f: F,
    inner: Option<I>,
}

/// Create a sequence that converts every group of `outer` with `f` and yields the
/// elements of the resulting inner sequences in order.
pub fn flat_map<S, F, I>(outer: S, f: F) -> FlatMap<S, F, I>
where
    S: Sequence,
    I: Sequence,
    F: FnMut(S::Item) -> I,
{
    FlatMap {
        outer,
        f,
        inner: None,
    }
}

impl<S, F, I> Sequence for FlatMap<S, F, I>
where
    S: Sequence,
    I: Sequence,
    F: FnMut(S::Item) -> I,
{
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.pull() {
                    return Some(item);
                }
                self.inner = None; // drop the spent group before pulling the next one
            }
            let group = self.outer.pull()?;
            self.inner = Some((self.f)(group));
        }
    }

    fn as_counted(&mut self) -> Option<&mut dyn Counted<Item = I::Item>> {
        Some(self)
    }
}

impl<S, F, I> Counted for FlatMap<S, F, I>
where
    S: Sequence,
    I: Sequence,
    F: FnMut(S::Item) -> I,
{
    fn count_remaining(&mut self) -> usize {
        let mut total = self.inner.take().map_or(0, |mut inner| count(&mut inner));
        while let Some(group) = self.outer.pull() {
            total += count(&mut (self.f)(group));
        }
        total
    }
}
