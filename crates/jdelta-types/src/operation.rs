//! Patch operations in RFC 6902 form.
//!
//! An [`Operation`] serializes with an `op` tag, so a [`Patch`] is directly a
//! JSON Patch document:
//!
//! ```text
//! { "op": "add",     "path": "/a", "value": 1 }
//! { "op": "remove",  "path": "/a" }
//! { "op": "replace", "path": "/a", "value": 2 }
//! { "op": "move",    "from": "/a", "path": "/b" }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pointer::JsonPointer;

/// A single patch operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    /// Insert `value` at `path`.
    Add { path: JsonPointer, value: Value },
    /// Delete the value at `path`.
    Remove { path: JsonPointer },
    /// Overwrite the value at `path`.
    Replace { path: JsonPointer, value: Value },
    /// Relocate the value at `from` to `path`.
    Move { from: JsonPointer, path: JsonPointer },
}

impl Operation {
    pub fn add(path: JsonPointer, value: Value) -> Self {
        Self::Add { path, value }
    }

    pub fn remove(path: JsonPointer) -> Self {
        Self::Remove { path }
    }

    pub fn replace(path: JsonPointer, value: Value) -> Self {
        Self::Replace { path, value }
    }

    pub fn move_to(from: JsonPointer, path: JsonPointer) -> Self {
        Self::Move { from, path }
    }

    /// The target location of the operation.
    pub fn path(&self) -> &JsonPointer {
        match self {
            Self::Add { path, .. }
            | Self::Remove { path }
            | Self::Replace { path, .. }
            | Self::Move { path, .. } => path,
        }
    }

    /// The source location, for moves.
    pub fn from_path(&self) -> Option<&JsonPointer> {
        match self {
            Self::Move { from, .. } => Some(from),
            _ => None,
        }
    }

    /// The carried value, for adds and replaces.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Add { value, .. } | Self::Replace { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The `op` member as it appears on the wire.
    pub fn op_name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::Replace { .. } => "replace",
            Self::Move { .. } => "move",
        }
    }
}

/// An ordered sequence of operations.
///
/// Serializes as a bare JSON array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch {
    /// The operations, in application order.
    pub operations: Vec<Operation>,
}

impl Patch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Returns `true` if an equal operation is present, at any position.
    pub fn contains(&self, op: &Operation) -> bool {
        self.operations.contains(op)
    }

    /// Number of `add` operations.
    pub fn additions(&self) -> usize {
        self.count(|op| matches!(op, Operation::Add { .. }))
    }

    /// Number of `remove` operations.
    pub fn removals(&self) -> usize {
        self.count(|op| matches!(op, Operation::Remove { .. }))
    }

    /// Number of `replace` operations.
    pub fn replacements(&self) -> usize {
        self.count(|op| matches!(op, Operation::Replace { .. }))
    }

    /// Number of `move` operations.
    pub fn moves(&self) -> usize {
        self.count(|op| matches!(op, Operation::Move { .. }))
    }

    fn count(&self, pred: impl Fn(&Operation) -> bool) -> usize {
        self.operations.iter().filter(|op| pred(op)).count()
    }

    /// Render as a JSON Patch document through the derived serialization.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl From<Vec<Operation>> for Patch {
    fn from(operations: Vec<Operation>) -> Self {
        Self { operations }
    }
}

impl FromIterator<Operation> for Patch {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Patch {
    type Item = Operation;
    type IntoIter = std::vec::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Patch {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
