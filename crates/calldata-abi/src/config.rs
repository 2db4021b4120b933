//! Encoder configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Encoder configuration
///
/// Defaults reproduce the plain encoding rules: integers are only checked
/// against 256 bits and fixed-point strings are encoded digit for digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Reject integers that overflow the declared `N` of `uintN`/`intN`
    #[serde(default)]
    pub check_declared_width: bool,
    /// Require a `fixedMxN` decimal string to carry exactly `N` fractional digits
    #[serde(default)]
    pub strict_fixed_scale: bool,
    /// Maximum array/tuple nesting
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    64
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            check_declared_width: false,
            strict_fixed_scale: false,
            max_depth: default_max_depth(),
        }
    }
}

impl EncoderConfig {
    /// Strict configuration: both width and scale checks enabled
    pub fn strict() -> Self {
        Self {
            check_declared_width: true,
            strict_fixed_scale: true,
            ..Self::default()
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
