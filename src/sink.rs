//! Functions for driving sequences to exhaustion.
//!
//! Everything here is built on one primitive, [`reduce`], which pulls every element and
//! folds it into an accumulator. The other sinks only pick a seed and a combining
//! function.

use std::{collections::HashMap, hash::Hash, ops::Add};

use num_traits::Zero;

use crate::Sequence;

/// Fold every element of `seq` into `init` with `f`, in encounter order.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let product = reduce(range(1, 5, 1), 1, |acc, x| acc * x);
/// assert_eq!(product, 24);
/// ```
pub fn reduce<S, A, F>(mut seq: S, init: A, mut f: F) -> A
where
    S: Sequence,
    F: FnMut(A, S::Item) -> A,
{
    let mut acc = init;
    while let Some(item) = seq.pull() {
        acc = f(acc, item);
    }
    acc
}

/// Add up all elements. An empty sequence sums to zero.
pub fn sum<S>(seq: S) -> S::Item
where
    S: Sequence,
    S::Item: Zero + Add<Output = S::Item>,
{
    reduce(seq, <S::Item as Zero>::zero(), Add::add)
}

/// Smallest element, or `None` for an empty sequence.
///
/// When several elements compare equal, the first one wins.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(min(from_vec(vec![4, 5, 1, 2, 3])), Some(1));
/// assert_eq!(min(empty::<i32>()), None);
/// ```
pub fn min<S>(mut seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    let first = seq.pull()?;
    Some(reduce(seq, first, |acc, item| if item < acc { item } else { acc }))
}

/// Largest element, or `None` for an empty sequence.
///
/// When several elements compare equal, the first one wins.
pub fn max<S>(mut seq: S) -> Option<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    let first = seq.pull()?;
    Some(reduce(seq, first, |acc, item| if item > acc { item } else { acc }))
}

/// Concatenate string-like elements, separated by `sep`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let joined = join(from_vec(vec!["foo", "bar", "baz", "qux"]), ", ");
/// assert_eq!(joined, "foo, bar, baz, qux");
/// ```
pub fn join<S>(seq: S, sep: &str) -> String
where
    S: Sequence,
    S::Item: AsRef<str>,
{
    reduce(seq, None, |acc: Option<String>, item| {
        let mut out = match acc {
            Some(mut out) => {
                out.push_str(sep);
                out
            }
            None => String::new(),
        };
        out.push_str(item.as_ref());
        Some(out)
    })
    .unwrap_or_default()
}

/// Collect every element into a `Vec`, in order.
pub fn to_vec<S>(seq: S) -> Vec<S::Item>
where
    S: Sequence,
{
    reduce(seq, Vec::new(), |mut out, item| {
        out.push(item);
        out
    })
}

/// Collect key/value pairs into a `HashMap`.
///
/// Duplicate keys are overwritten: the last pair pulled wins.
pub fn to_map<S, K, V>(seq: S) -> HashMap<K, V>
where
    S: Sequence<Item = (K, V)>,
    K: Eq + Hash,
{
    reduce(seq, HashMap::new(), |mut out, (key, val)| {
        out.insert(key, val);
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_vec, range};

    #[test]
    fn test_sum() {
        assert_eq!(sum(from_vec(vec![1, 2, 3])), 6);
        assert_eq!(sum(empty::<i64>()), 0);
        assert_eq!(sum(range(0.0, 1.0, 0.5)), 0.5);
    }

    #[test]
    fn test_min() {
        assert_eq!(min(empty::<i32>()), None);
        assert_eq!(min(from_vec(vec![4, 5, 1, 2, 3])), Some(1));
    }

    #[test]
    fn test_max() {
        assert_eq!(max(empty::<i32>()), None);
        assert_eq!(max(from_vec(vec![4, 5, 1, 2, 3])), Some(5));
    }

    #[test]
    fn test_min_max_keep_first_of_equals() {
        let pairs = vec![(1, 'a'), (0, 'b'), (0, 'c'), (1, 'd')];
        let key_min = min(from_vec(pairs.clone()).map(|(k, tag)| Keyed(k, tag)));
        let key_max = max(from_vec(pairs).map(|(k, tag)| Keyed(k, tag)));
        assert_eq!(key_min.map(|k| k.1), Some('b'));
        assert_eq!(key_max.map(|k| k.1), Some('a'));
    }

    #[test]
    fn test_join() {
        assert_eq!(join(empty::<String>(), ", "), "");
        assert_eq!(join(from_vec(vec!["foo", "bar", "baz", "qux"]), ", "), "foo, bar, baz, qux");
        assert_eq!(join(from_vec(vec!["", "x", ""]), "-"), "-x-");
    }

    #[test]
    fn test_to_vec_round_trip() {
        let items = to_vec(range(0, 6, 2));
        assert_eq!(to_vec(from_vec(items.clone())), items);
    }

    #[test]
    fn test_to_map_last_wins() {
        let map = to_map(from_vec(vec![("x", 1), ("y", 2), ("x", 3)]));
        assert_eq!(map, HashMap::from([("x", 3), ("y", 2)]));
    }

    struct Keyed(i32, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }
}
