//! Error types for the diff crate.

use std::fmt;

use jdelta_types::ValueKind;

/// Which argument of a diff call an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Errors that can occur during diff operations.
///
/// Every variant aborts the call; no partial patch is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// A top-level argument was a scalar rather than an object or array.
    #[error("{side} document must be an object or an array, got {kind}")]
    InvalidInputKind { side: Side, kind: ValueKind },

    /// An object in either tree carries a prototype member.
    #[error("object at '{path}' in {side} document has a prototype")]
    ProtoPollutedObject { side: Side, path: String },

    /// An argument could not be represented as JSON.
    #[error("{side} document is not a valid JSON value: {reason}")]
    NonSerializableValue { side: Side, reason: String },

    /// Diff options could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl DiffError {
    /// Create a non-serializable error from any displayable cause.
    pub fn non_serializable(side: Side, reason: impl fmt::Display) -> Self {
        Self::NonSerializableValue {
            side,
            reason: reason.to_string(),
        }
    }

    /// The argument the error refers to, if any.
    pub fn side(&self) -> Option<Side> {
        match self {
            Self::InvalidInputKind { side, .. }
            | Self::ProtoPollutedObject { side, .. }
            | Self::NonSerializableValue { side, .. } => Some(*side),
            Self::Config(_) => None,
        }
    }
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
