use std::vec;

use crate::{Counted, Sequence};

/// Array-backed sequence.
///
/// Owns its elements and hands them out front to back. Knows its remaining length, so
/// counting it is O(1) apart from dropping the leftovers.
pub struct FromVec<T> {
    items: vec::IntoIter<T>,
}

/// Create a sequence over the elements of `items`, starting at index 0.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut seq = from_vec(vec!["a", "b"]);
/// assert_eq!(seq.pull(), Some("a"));
/// assert_eq!(seq.pull(), Some("b"));
/// assert_eq!(seq.pull(), None);
/// ```
pub fn from_vec<T>(items: Vec<T>) -> FromVec<T> {
    FromVec {
        items: items.into_iter(),
    }
}

/// Create a sequence over clones of the elements of `items`.
pub fn from_slice<T: Clone>(items: &[T]) -> FromVec<T> {
    from_vec(items.to_vec())
}

/// Create a sequence over the entries of a keyed collection.
///
/// Entries are snapshotted up front, so the sequence does not borrow the collection.
/// The order is whatever order the collection iterates in; for a `HashMap` that is
/// unspecified.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use lazyseq::prelude::*;
///
/// let map = BTreeMap::from([("x", 1), ("y", 2)]);
/// assert_eq!(from_map(map).collect::<Vec<_>>(), vec![("x", 1), ("y", 2)]);
/// ```
pub fn from_map<K, V, M>(map: M) -> FromVec<(K, V)>
where
    M: IntoIterator<Item = (K, V)>,
{
    from_vec(map.into_iter().collect())
}

impl<T> FromVec<T> {
    /// Elements not yet pulled.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }
}

impl<T> From<Vec<T>> for FromVec<T> {
    fn from(items: Vec<T>) -> Self {
        from_vec(items)
    }
}

impl<T> Sequence for FromVec<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        self.items.next()
    }

    fn as_counted(&mut self) -> Option<&mut dyn Counted<Item = T>> {
        Some(self)
    }
}

impl<T> Counted for FromVec<T> {
    fn count_remaining(&mut self) -> usize {
        let remaining = self.items.len();
        self.items = Vec::new().into_iter();
        remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count;
    use std::collections::HashMap;

    #[test]
    fn test_from_vec_items() {
        let seq = from_vec(vec![1, 2, 3, 4]);
        assert_eq!(seq.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_from_vec_empty() {
        let mut seq = from_vec(Vec::<i32>::new());
        assert_eq!(seq.pull(), None);
        assert_eq!(seq.pull(), None);
    }

    #[test]
    fn test_count_after_partial_pull() {
        let mut seq = from_slice(&[10, 20, 30]);
        assert_eq!(seq.pull(), Some(10));
        assert_eq!(seq.as_slice(), &[20, 30]);
        assert_eq!(count(&mut seq), 2);
        assert!(seq.as_slice().is_empty());
        assert_eq!(seq.pull(), None);
    }

    #[test]
    fn test_from_map_yields_every_entry() {
        let map = HashMap::from([("x", 1), ("y", 2), ("z", 3)]);
        let mut entries: Vec<_> = from_map(map).collect();
        entries.sort();
        assert_eq!(entries, vec![("x", 1), ("y", 2), ("z", 3)]);
    }
}
