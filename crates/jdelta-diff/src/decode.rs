//! Decoding boundary: diff values that are not yet `serde_json::Value`s.
//!
//! Anything that fails to become JSON here is reported as
//! [`DiffError::NonSerializableValue`] for the offending side.

use jdelta_types::Patch;
use serde::Serialize;
use serde_json::Value;

use crate::config::DiffOptions;
use crate::differ::diff_with_options;
use crate::error::{DiffError, DiffResult, Side};

/// Diff two native values through their `Serialize` implementations.
///
/// ```
/// use std::collections::BTreeMap;
/// use jdelta_diff::{diff_serializable, DiffOptions};
///
/// let left = BTreeMap::from([("a", 1)]);
/// let right = BTreeMap::from([("a", 2)]);
/// let patch = diff_serializable(&left, &right, &DiffOptions::default()).unwrap();
/// assert_eq!(patch.replacements(), 1);
/// ```
pub fn diff_serializable<L, R>(left: &L, right: &R, options: &DiffOptions) -> DiffResult<Patch>
where
    L: Serialize + ?Sized,
    R: Serialize + ?Sized,
{
    let left = to_json(left, Side::Left)?;
    let right = to_json(right, Side::Right)?;
    diff_with_options(&left, &right, options)
}

/// Diff two JSON texts.
pub fn diff_str(left: &str, right: &str, options: &DiffOptions) -> DiffResult<Patch> {
    let left = parse_json(left, Side::Left)?;
    let right = parse_json(right, Side::Right)?;
    diff_with_options(&left, &right, options)
}

fn to_json<T: Serialize + ?Sized>(value: &T, side: Side) -> DiffResult<Value> {
    serde_json::to_value(value).map_err(|e| DiffError::non_serializable(side, e))
}

fn parse_json(text: &str, side: Side) -> DiffResult<Value> {
    serde_json::from_str(text).map_err(|e| DiffError::non_serializable(side, e))
}
