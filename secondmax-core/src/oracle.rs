//! Oracle check: run the linear scan and the sort-based finder side by side.
//!
//! The two finders are not equivalent on every input. The sort fails on
//! inputs shorter than two, the sentinel hides values at or below it, and
//! [`TiePolicy::Distinct`](crate::TiePolicy::Distinct) disagrees with the sort
//! on a repeated maximum. [`OracleCheck`] reports which case an input falls
//! into instead of asserting equality.

use serde::Serialize;

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::linear::LinearSecondFinder;
use crate::sentinel::Sentinel;
use crate::sort::SortSecondFinder;

/// Outcome of comparing the two finders on one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict<T> {
    /// Both finders returned `value`.
    Agree { value: T },
    /// Both returned a value, and the values differ.
    Diverge { linear: T, oracle: T },
    /// The oracle failed; `linear` is whatever the scan returned (its sentinel).
    OracleFailed { linear: T, error: FinderError },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OracleReport<T> {
    pub len: usize,
    pub config: FinderConfig,
    pub verdict: Verdict<T>,
}

impl<T> OracleReport<T> {
    pub fn agrees(&self) -> bool {
        matches!(self.verdict, Verdict::Agree { .. })
    }

    pub fn diverges(&self) -> bool {
        matches!(self.verdict, Verdict::Diverge { .. })
    }
}

/// Runs [`LinearSecondFinder::find_or_sentinel`] against [`SortSecondFinder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OracleCheck {
    linear: LinearSecondFinder,
    sort: SortSecondFinder,
}

impl OracleCheck {
    pub fn new(config: FinderConfig) -> Self {
        Self {
            linear: LinearSecondFinder::new(config),
            sort: SortSecondFinder::new(),
        }
    }

    pub fn run<T: Sentinel>(&self, values: &[T]) -> OracleReport<T> {
        let linear = self.linear.find_or_sentinel(values);
        let verdict = match self.sort.find(values) {
            Ok(oracle) if oracle == linear => Verdict::Agree { value: linear },
            Ok(oracle) => {
                tracing::trace!(len = values.len(), "linear scan diverges from sort oracle");
                Verdict::Diverge { linear, oracle }
            }
            Err(error) => Verdict::OracleFailed { linear, error },
        };

        OracleReport {
            len: values.len(),
            config: *self.linear.config(),
            verdict,
        }
    }
}
