//! secondmax core: second-largest value finders.
//!
//! This crate contains two ways of answering "which value would sit in the
//! second slot if the sequence were sorted descending":
//! - Single-pass linear scan tracking the top two running values
//! - Sort-based finder used as the correctness oracle
//! - Selectable tie policy and sentinel mode (reference `-1` or type floor)
//! - Oracle check that classifies agreement and divergence between the two

pub mod config;
pub mod error;
pub mod linear;
pub mod oracle;
pub mod sentinel;
pub mod sort;

pub use config::{FinderConfig, SentinelMode, TiePolicy};
pub use error::{ConfigError, FinderError};
pub use linear::{second_for, second_largest, LinearSecondFinder};
pub use oracle::{OracleCheck, OracleReport, Verdict};
pub use sentinel::Sentinel;
pub use sort::{second_sort, SortSecondFinder};
