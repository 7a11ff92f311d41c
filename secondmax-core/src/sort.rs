//! Sort-based second-largest finder, used as the correctness oracle.
//!
//! Sorts a copy ascending (stable) and returns the second-to-last element.
//! Ties are handled naturally: `[5, 5]` yields `5`. Inputs shorter than two
//! elements fail with [`FinderError::IndexOutOfRange`].
//!
//! Values that do not compare with themselves (NaN) sort below every other
//! value, so they are only returned when fewer than two comparable values
//! exist.

use std::cmp::Ordering;

use crate::error::FinderError;

/// Sort-based finder. O(n log n); allocates one sorted copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSecondFinder;

impl SortSecondFinder {
    pub fn new() -> Self {
        Self
    }

    /// Second-to-last element of the ascending sort of `values`.
    ///
    /// NaN ranks below everything; NaNs keep their input order among themselves.
    pub fn find<T: PartialOrd + Copy>(&self, values: &[T]) -> Result<T, FinderError> {
        let len = values.len();
        if len < 2 {
            tracing::trace!(len, "sort finder: input too short for second-to-last");
            return Err(FinderError::IndexOutOfRange { len });
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(total_cmp);
        Ok(sorted[len - 2])
    }
}

/// Total order over any `PartialOrd`: non-self-comparable values first.
fn total_cmp<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    match (a.partial_cmp(a).is_some(), b.partial_cmp(b).is_some()) {
        (true, true) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Sort-based second-largest.
///
/// ```
/// use secondmax_core::{second_sort, FinderError};
/// assert_eq!(second_sort(&[5, 5]), Ok(5));
/// assert_eq!(second_sort(&[7]), Err(FinderError::IndexOutOfRange { len: 1 }));
/// ```
pub fn second_sort<T: PartialOrd + Copy>(values: &[T]) -> Result<T, FinderError> {
    SortSecondFinder.find(values)
}
