use crate::{Counted, Sequence, count};

/// Transforms every element of the wrapped sequence.
///
/// Map is 1:1, so it can count as fast as its upstream can.
pub struct Map<S, F> {
    f: F,
    seq: S,
}

/// Create a sequence that applies `f` to every element of `seq`.
///
/// `f` should not have side effects the rest of the pipeline depends on: a fast count
/// skips it entirely.
pub fn map<O, S, F>(seq: S, f: F) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> O,
{
    Map { f, seq }
}

impl<O, S, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> O,
{
    type Item = O;

    fn pull(&mut self) -> Option<O> {
        self.seq.pull().map(&mut self.f)
    }

    fn as_counted(&mut self) -> Option<&mut dyn Counted<Item = O>> {
        if self.seq.as_counted().is_some() {
            Some(self)
        } else {
            None
        }
    }
}

impl<O, S, F> Counted for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> O,
{
    fn count_remaining(&mut self) -> usize {
        count(&mut self.seq)
    }
}

/// Drops elements that fail a predicate.
pub struct Filter<S, P> {
    predicate: P,
    seq: S,
}

/// Create a sequence that yields only the elements of `seq` accepted by `predicate`.
pub fn filter<S, P>(seq: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    Filter { predicate, seq }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn pull(&mut self) -> Option<S::Item> {
        while let Some(item) = self.seq.pull() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}

/// Transforms elements and drops the ones mapped to `None`.
pub struct FilterMap<S, F> {
    f: F,
    seq: S,
}

/// Create a sequence that applies `f` to every element and keeps the `Some` results.
pub fn filter_map<O, S, F>(seq: S, f: F) -> FilterMap<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Option<O>,
{
    FilterMap { f, seq }
}

impl<O, S, F> Sequence for FilterMap<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> Option<O>,
{
    type Item = O;

    fn pull(&mut self) -> Option<O> {
        while let Some(item) = self.seq.pull() {
            if let Some(mapped) = (self.f)(item) {
                return Some(mapped);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_vec, once, range};

    #[test]
    fn test_map() {
        let seq = map(from_vec(vec![1, 2, 3]), |i| i * 2);
        assert_eq!(seq.collect::<Vec<_>>(), vec![2, 4, 6]);
    }

    #[test]
    fn test_map_counts_through_upstream() {
        let mut seq = map(from_vec(vec![1, 2, 3]), |i| i * 2);
        assert!(seq.as_counted().is_some());
        assert_eq!(count(&mut seq), 3);
        assert_eq!(seq.pull(), None);
        assert_eq!(count(&mut seq), 0);
    }

    #[test]
    fn test_map_count_after_partial_pull() {
        let mut seq = map(from_vec(vec![1, 2, 3, 4]), |i| i + 1);
        assert_eq!(seq.pull(), Some(2));
        assert_eq!(count(&mut seq), 3);
    }

    #[test]
    fn test_map_without_counted_upstream() {
        let mut seq = map(range(0, 3, 1), |i| i * 2);
        assert!(seq.as_counted().is_none());
        assert_eq!(count(&mut seq), 3);
    }

    #[test]
    fn test_filter() {
        let seq = filter(from_vec(vec![1, 2, 3, 4, 5, 6]), |i| i % 2 == 0);
        assert_eq!(seq.collect::<Vec<_>>(), vec![2, 4, 6]);
    }

    #[test]
    fn test_filter_rejecting_everything_is_exhausted() {
        let mut seq = filter(once(1), |_| false);
        assert_eq!(seq.pull(), None);
        assert_eq!(seq.pull(), None);
    }

    #[test]
    fn test_filter_map() {
        let seq = filter_map(from_vec(vec![1, 2, 3, 4]), |i| {
            let j = i * 2;
            (j < 5).then_some(j)
        });
        assert_eq!(seq.collect::<Vec<_>>(), vec![2, 4]);
    }
}
