use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// How much of each input is validated before and during comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Check nodes as the traversal reaches them, plus every value carried by
    /// an emitted `add` or `replace`. Subtrees that only appear as removals
    /// are not inspected.
    #[default]
    Lazy,
    /// Check both complete trees before comparing, left first.
    Strict,
}

/// Configuration for a diff call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Merge equal-valued remove/add pairs into `move` operations.
    pub detect_moves: bool,
    /// Validation strategy.
    pub validation: ValidationMode,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            detect_moves: true,
            validation: ValidationMode::Lazy,
        }
    }
}

impl DiffOptions {
    /// Validate both inputs in full before comparing.
    pub fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
            ..Default::default()
        }
    }

    /// Emit plain remove/add pairs instead of moves.
    pub fn without_moves() -> Self {
        Self {
            detect_moves: false,
            ..Default::default()
        }
    }

    /// Load options from a TOML table. Missing keys take their defaults.
    ///
    /// ```
    /// use jdelta_diff::{DiffOptions, ValidationMode};
    ///
    /// let opts = DiffOptions::from_toml_str("validation = \"strict\"").unwrap();
    /// assert_eq!(opts.validation, ValidationMode::Strict);
    /// assert!(opts.detect_moves);
    /// ```
    pub fn from_toml_str(input: &str) -> DiffResult<Self> {
        toml::from_str(input).map_err(|e| DiffError::Config(e.to_string()))
    }
}
