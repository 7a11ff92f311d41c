//! Finder configuration: tie policy and sentinel mode.
//!
//! Stored as TOML:
//!
//! ```toml
//! ties = "positional"    # or "distinct"
//! sentinel = "reference" # or "floor"
//! ```
//!
//! Missing keys fall back to [`FinderConfig::default`], which is the
//! reference behavior.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// How a repeated maximum is treated by the linear scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Duplicates count by position: `[5, 5]` has second-largest `5`.
    #[default]
    Positional,
    /// A value equal to the current maximum never fills the second slot:
    /// `[5, 5]` has no second-largest.
    Distinct,
}

/// Seed value for the two running slots of the sentinel-based scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentinelMode {
    /// Literal `-1`. Inputs at or below `-1` are never selected.
    #[default]
    Reference,
    /// Type minimum (`MIN` / `NEG_INFINITY`).
    Floor,
}

/// Configuration for [`LinearSecondFinder`](crate::LinearSecondFinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    pub ties: TiePolicy,
    pub sentinel: SentinelMode,
}

impl FinderConfig {
    /// The exact reference configuration: positional ties, `-1` sentinel.
    pub fn reference() -> Self {
        Self {
            ties: TiePolicy::Positional,
            sentinel: SentinelMode::Reference,
        }
    }

    /// Positional ties seeded with the type floor, so negative inputs are safe.
    pub fn floor() -> Self {
        Self {
            ties: TiePolicy::Positional,
            sentinel: SentinelMode::Floor,
        }
    }

    pub fn with_ties(mut self, ties: TiePolicy) -> Self {
        self.ties = ties;
        self
    }

    pub fn with_sentinel(mut self, sentinel: SentinelMode) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded finder config");
        Ok(config)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize the config to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
