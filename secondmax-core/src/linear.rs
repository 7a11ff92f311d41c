//! Single-pass linear-scan second-largest finder.
//!
//! Tracks the two highest running values in rank order. For each value `v`:
//! - `v > first`: shift, `second = first`, `first = v`
//! - else `v > second` (and, under [`TiePolicy::Distinct`], `v != first`):
//!   `second = v`
//! - otherwise nothing changes
//!
//! Time O(n), auxiliary space O(1). The result does not depend on input
//! order, only the intermediate slot states do.
//!
//! Two entry points:
//! - [`LinearSecondFinder::find`] has no sentinel; `None` means no second value.
//! - [`LinearSecondFinder::find_or_sentinel`] seeds the slots with a sentinel
//!   and returns it when nothing qualifies. Under
//!   [`FinderConfig::reference`] this reproduces the reference scan exactly,
//!   including its conflation of "not found" with "found `-1`" and its
//!   blindness to values at or below `-1`.

use crate::config::{FinderConfig, SentinelMode, TiePolicy};
use crate::sentinel::Sentinel;

/// Linear-scan finder with a selectable tie policy and sentinel mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearSecondFinder {
    config: FinderConfig,
}

impl LinearSecondFinder {
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    /// Finder with the reference configuration (positional ties, `-1`).
    pub fn reference() -> Self {
        Self::new(FinderConfig::reference())
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Second-largest value, or `None` when fewer than two values qualify.
    ///
    /// The configured [`SentinelMode`] is ignored: the slots start empty, so
    /// every comparable value is a candidate. NaN is never selected.
    pub fn find<T: PartialOrd + Copy>(&self, values: &[T]) -> Option<T> {
        let mut top = TopTwo::empty(self.config.ties);
        for &v in values {
            top.push(v);
        }
        top.second
    }

    /// Second-largest value, or the configured sentinel when none qualifies.
    pub fn find_or_sentinel<T: Sentinel>(&self, values: &[T]) -> T {
        let seed = match self.config.sentinel {
            SentinelMode::Reference => T::REFERENCE,
            SentinelMode::Floor => T::FLOOR,
        };
        let mut top = TopTwo::seeded(seed, self.config.ties);
        for &v in values {
            top.push(v);
        }
        top.second.unwrap_or(seed)
    }
}

/// Reference linear scan: positional ties, `-1` sentinel.
///
/// ```
/// use secondmax_core::second_for;
/// assert_eq!(second_for(&[3, 1, 4, 1, 5, 9, 2, 6]), 6);
/// assert_eq!(second_for::<i32>(&[]), -1);
/// ```
pub fn second_for<T: Sentinel>(values: &[T]) -> T {
    LinearSecondFinder::reference().find_or_sentinel(values)
}

/// Sentinel-free linear scan with the given tie policy.
///
/// ```
/// use secondmax_core::{second_largest, TiePolicy};
/// assert_eq!(second_largest(&[-5, -3], TiePolicy::Positional), Some(-5));
/// assert_eq!(second_largest(&[5, 5], TiePolicy::Distinct), None);
/// ```
pub fn second_largest<T: PartialOrd + Copy>(values: &[T], ties: TiePolicy) -> Option<T> {
    LinearSecondFinder::new(FinderConfig::default().with_ties(ties)).find(values)
}

/// The two running slots. An empty slot ranks below every comparable value.
#[derive(Debug, Clone, Copy)]
struct TopTwo<T> {
    first: Option<T>,
    second: Option<T>,
    ties: TiePolicy,
}

impl<T: PartialOrd + Copy> TopTwo<T> {
    fn empty(ties: TiePolicy) -> Self {
        Self {
            first: None,
            second: None,
            ties,
        }
    }

    fn seeded(seed: T, ties: TiePolicy) -> Self {
        Self {
            first: Some(seed),
            second: Some(seed),
            ties,
        }
    }

    fn push(&mut self, v: T) {
        if outranks(v, self.first) {
            self.second = self.first;
            self.first = Some(v);
        } else if outranks(v, self.second) && self.admits_second(v) {
            self.second = Some(v);
        }
    }

    fn admits_second(&self, v: T) -> bool {
        match self.ties {
            TiePolicy::Positional => true,
            TiePolicy::Distinct => self.first != Some(v),
        }
    }
}

/// Strict `v > slot`; an empty slot is outranked by any self-comparable value.
fn outranks<T: PartialOrd>(v: T, slot: Option<T>) -> bool {
    match slot {
        Some(s) => v > s,
        None => v.partial_cmp(&v).is_some(),
    }
}
