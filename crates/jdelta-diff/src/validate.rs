//! Input validation: the legal domain of the diff.
//!
//! A `serde_json::Value` is JSON by construction, so the checks that remain
//! at this layer are:
//! - top-level arguments must be documents (objects or arrays)
//! - no object may carry a prototype member (`__proto__`)
//!
//! Values that cannot become JSON at all are rejected earlier, at the
//! decoding boundary in [`crate::decode`].

use jdelta_types::{JsonPointer, ValueKind};
use serde_json::Value;

use crate::error::{DiffError, DiffResult, Side};

/// Member name through which a decoded object expresses a prototype.
pub const PROTOTYPE_KEY: &str = "__proto__";

/// Check that a top-level argument is an object or an array.
pub fn ensure_document(value: &Value, side: Side) -> DiffResult<()> {
    let kind = ValueKind::of(value);
    if kind.is_container() {
        Ok(())
    } else {
        Err(DiffError::InvalidInputKind { side, kind })
    }
}

/// Check a single node without descending into it.
pub fn check_node(value: &Value, path: &JsonPointer, side: Side) -> DiffResult<()> {
    match value {
        Value::Object(map) if map.contains_key(PROTOTYPE_KEY) => {
            Err(DiffError::ProtoPollutedObject {
                side,
                path: path.to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Check a node and everything below it.
pub fn check_tree(value: &Value, path: &JsonPointer, side: Side) -> DiffResult<()> {
    check_node(value, path, side)?;
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                check_tree(child, &path.child(key.as_str()), side)?;
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                check_tree(child, &path.index(index), side)?;
            }
        }
        _ => {}
    }
    Ok(())
}
