use thiserror::Error;

/// Errors produced when parsing a JSON Pointer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointerError {
    #[error("json pointer must be empty or start with '/': {0:?}")]
    MissingLeadingSlash(String),

    #[error("invalid escape sequence in json pointer: {0:?}")]
    InvalidEscape(String),
}
