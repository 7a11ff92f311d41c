//! Error types.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the finders.
///
/// Only the sort-based finder fails; the linear scan signals absence
/// through its sentinel or `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FinderError {
    #[error("index -2 out of range for sequence of length {len}")]
    IndexOutOfRange { len: usize },
}

/// Errors from loading a [`FinderConfig`](crate::FinderConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read finder config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse finder config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
