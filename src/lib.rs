//! # lazyseq: Pull-Based Lazy Sequences
//!
//! Build pipelines of lazily evaluated values that do no work until a consumer pulls
//! from them.
//!
//! ## Core Traits
//!
//! - **[`Sequence`]**: Forward-only, single-pass sources that yield one element per pull
//! - **[`Counted`]**: Optional capability to count the remaining elements without
//!   pulling them one at a time
//!
//! ## Key Features
//!
//! - **Composable**: Wrap sequences with `.map()`, `.filter()`, `.filter_map()`,
//!   `.flat_map()` and `.take()`
//! - **Fast counting**: [`count`] skips per-element work wherever the pipeline allows it
//! - **Concurrent**: Move any stage onto its own thread with [`go`] and stop it with a
//!   [`Cancellation`] token
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! // Nothing runs until `collect` starts pulling
//! let evens = range(0, 100, 1)
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * x)
//!     .take(4)
//!     .collect::<Vec<_>>();
//! assert_eq!(evens, vec![0, 4, 16, 36]);
//!
//! // Array-backed pipelines count without calling `map`
//! let mut words = from_vec(vec!["a", "b", "c"]).map(str::len);
//! assert_eq!(count(&mut words), 3);
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`from_vec(items)`] - Yield the elements of a vector in order
//! - [`range(start, end, step)`] - Yield numbers from `start` up to `end`
//! - [`from_fn(f)`] - Call a closure until it returns `None`
//! - [`from_iter(iter)`] - Adapt any [`Iterator`]
//!
//! **Consuming:**
//! - [`reduce(seq, init, f)`] - Fold every element into an accumulator
//! - [`sum`], [`min`], [`max`], [`join`], [`to_vec`], [`to_map`] - Common folds
//!
//! **Concurrency:**
//! - [`go(seq, cancel)`] - Run `seq` on a producer thread one element ahead
//! - [`to_channel`] / [`from_channel`] - Cross a bounded queue explicitly
//!
//! [`from_vec(items)`]: from_vec
//! [`range(start, end, step)`]: range
//! [`from_fn(f)`]: from_fn
//! [`from_iter(iter)`]: from_iter
//! [`reduce(seq, init, f)`]: reduce
//! [`go(seq, cancel)`]: go

pub mod build;
pub mod compose;
pub mod concurrent;
mod counted;
mod error;
mod iter;
pub mod prelude;
mod sequence;
mod sink;

pub use build::*;
pub use compose::*;
pub use concurrent::*;
pub use counted::{Counted, count};
pub use error::{BridgeError, RangeError};
pub use iter::{FromExactIter, FromIter, SeqIter, from_exact_iter, from_iter};
pub use sequence::Sequence;
pub use sink::*;
