//! Diff engine for jdelta.
//!
//! Compares two JSON documents and produces the RFC 6902 patch that turns the
//! first into the second. Removals and additions of equal values are merged
//! into `move` operations.
//!
//! # Key Items
//!
//! - [`diff`] / [`diff_with_options`] -- Diff two `serde_json::Value` documents
//! - [`diff_serializable`] / [`diff_str`] -- Diff native values or JSON text
//! - [`DiffOptions`] / [`ValidationMode`] -- Tuning knobs
//! - [`DiffError`] / [`Side`] -- Rejection of inputs outside the JSON domain
//!
//! ```
//! use serde_json::json;
//!
//! let patch = jdelta_diff::diff(&json!({"foo": "bar"}), &json!({"baz": "bar"})).unwrap();
//! assert_eq!(
//!     patch.to_value().unwrap(),
//!     json!([{ "op": "move", "from": "/foo", "path": "/baz" }])
//! );
//! ```

pub mod config;
pub mod decode;
pub mod differ;
pub mod error;
mod moves;
mod structural;
pub mod validate;

pub use config::{DiffOptions, ValidationMode};
pub use decode::{diff_serializable, diff_str};
pub use differ::{diff, diff_with_options};
pub use error::{DiffError, DiffResult, Side};
pub use jdelta_types::{JsonPointer, Operation, Patch};
