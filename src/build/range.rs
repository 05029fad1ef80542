use std::cmp::Ordering;

use num_traits::Num;

use crate::{Sequence, error::RangeError};

/// Numeric element types accepted by [`range`].
pub trait Number: Num + PartialOrd + Copy {
    /// `self + step`, or `None` when the sum is not representable.
    fn advance(self, step: Self) -> Option<Self>;
}

macro_rules! impl_number_checked {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! impl_number_float {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }
            }
        )*
    };
}

impl_number_checked!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number_float!(f32, f64);

/// Numeric range from `start` (inclusive) to `end` (exclusive) by `step`.
#[derive(Debug, Clone)]
pub struct Range<T> {
    next: Option<T>,
    end: T,
    step: T,
}

/// Create a numeric range, or report why the arguments are invalid.
///
/// Requires `start <= end` and `step > 0`.
pub fn try_range<T: Number>(start: T, end: T, step: T) -> Result<Range<T>, RangeError> {
    match start.partial_cmp(&end) {
        Some(Ordering::Less | Ordering::Equal) => {}
        Some(Ordering::Greater) => return Err(RangeError::EndBeforeStart),
        None => return Err(RangeError::Unordered),
    }
    if step.partial_cmp(&T::zero()) != Some(Ordering::Greater) {
        return Err(RangeError::NonPositiveStep);
    }
    Ok(Range {
        next: Some(start),
        end,
        step,
    })
}

/// Create a numeric range from `start` (inclusive) to `end` (exclusive) by `step`.
///
/// # Panics
///
/// Panics if `end < start`, if the bounds cannot be compared (NaN), or if `step` is not
/// strictly positive. Use [`try_range`] to get a [`RangeError`] instead.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(range(0, 5, 1).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(range(0.0, 1.0, 0.25).collect::<Vec<_>>(), vec![0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn range<T: Number>(start: T, end: T, step: T) -> Range<T> {
    match try_range(start, end, step) {
        Ok(range) => range,
        Err(err) => panic!("invalid range: {err}"),
    }
}

impl<T: Number> Sequence for Range<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let current = self.next.filter(|n| *n < self.end)?;
        self.next = current.advance(self.step);
        Some(current)
    }
}
