//! Adapters that wrap sequences
//!
//! Every adapter owns its upstream and is itself a [`Sequence`](crate::Sequence), so
//! adapters nest freely. None of them pull ahead of demand.

use crate::Sequence;

mod flatten;
mod map;
mod take;

// Re-export adapters
pub use flatten::{FlatMap, flat_map};
pub use map::{Filter, FilterMap, Map, filter, filter_map, map};
pub use take::{Take, take};

/// [`FlatMap`] over a sequence whose elements are already sequences.
pub type Flatten<S> = FlatMap<
    S,
    fn(<S as Sequence>::Item) -> <S as Sequence>::Item,
    <S as Sequence>::Item,
>;
