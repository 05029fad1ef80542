//! Building sequences from scratch
//!
//! This module provides the source constructors every pipeline starts from.

mod func;
mod range;
mod vec;

// Re-export building blocks
pub use func::{Empty, FromFn, Once, Repeat, empty, from_fn, once, repeat};
pub use range::{Number, Range, range, try_range};
pub use vec::{FromVec, from_map, from_slice, from_vec};
