//! Sentinel values for the linear scan.
//!
//! The reference scan seeds both slots with the literal `-1`, which silently
//! assumes a non-negative domain. `FLOOR` is the type minimum and removes
//! that assumption.

/// Element types the sentinel-based scan can run over.
///
/// Only signed integers and floats implement this: the reference literal
/// `-1` has no unsigned representation.
pub trait Sentinel: PartialOrd + Copy {
    /// The reference sentinel, `-1`.
    const REFERENCE: Self;
    /// Lowest value of the type (`MIN`, or `NEG_INFINITY` for floats).
    const FLOOR: Self;
}

macro_rules! impl_sentinel_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sentinel for $t {
                const REFERENCE: Self = -1;
                const FLOOR: Self = <$t>::MIN;
            }
        )*
    };
}

macro_rules! impl_sentinel_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sentinel for $t {
                const REFERENCE: Self = -1.0;
                const FLOOR: Self = <$t>::NEG_INFINITY;
            }
        )*
    };
}

impl_sentinel_int!(i8, i16, i32, i64, i128, isize);
impl_sentinel_float!(f32, f64);
