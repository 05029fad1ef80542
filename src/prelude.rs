//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core traits
pub use crate::{Counted, Sequence, count};

// Sources
pub use crate::build::{empty, from_fn, from_map, from_slice, from_vec, once, range, repeat, try_range};
pub use crate::iter::{from_exact_iter, from_iter};

// Adapters
pub use crate::compose::{filter, filter_map, flat_map, map, take};

// Sinks
pub use crate::sink::{join, max, min, reduce, sum, to_map, to_vec};

// Concurrency
pub use crate::concurrent::{Bridge, Cancellation, ProducerExit, from_channel, go, to_channel};
