//! Structural walk: compare two trees and collect raw changes.
//!
//! At each container level, keys only on the left become removals, keys only
//! on the right become additions, and keys on both sides are compared
//! recursively. Removals come first, then additions, then the recursive
//! changes in left key order.
//!
//! Arrays are compared as index-keyed containers. Tail removals are emitted
//! from the highest index down and tail additions from the lowest up, so the
//! resulting patch applies cleanly under RFC 6902 index semantics.

use jdelta_types::{deep_equal, JsonPointer, Operation};
use serde_json::{Map, Value};

use crate::error::{DiffResult, Side};
use crate::validate;

/// A change found by the walk, before move detection.
///
/// Removals keep a reference to the value they drop so the move detector can
/// compare it against added values.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Change<'a> {
    Add {
        path: JsonPointer,
        value: &'a Value,
        indexed: bool,
    },
    Remove {
        path: JsonPointer,
        old: &'a Value,
        indexed: bool,
    },
    Replace {
        path: JsonPointer,
        value: &'a Value,
    },
}

impl Change<'_> {
    pub(crate) fn path(&self) -> &JsonPointer {
        match self {
            Self::Add { path, .. } | Self::Remove { path, .. } | Self::Replace { path, .. } => {
                path
            }
        }
    }

    /// Whether the change addresses an array element.
    pub(crate) fn is_indexed(&self) -> bool {
        match self {
            Self::Add { indexed, .. } | Self::Remove { indexed, .. } => *indexed,
            Self::Replace { .. } => false,
        }
    }

    pub(crate) fn into_operation(self) -> Operation {
        match self {
            Self::Add { path, value, .. } => Operation::add(path, value.clone()),
            Self::Remove { path, .. } => Operation::remove(path),
            Self::Replace { path, value } => Operation::replace(path, value.clone()),
        }
    }
}

/// Collect the changes between two validated documents.
///
/// The root is never addressed, so two documents of different container kinds
/// are compared member by member rather than replaced.
pub(crate) fn diff_documents<'a>(
    left: &'a Value,
    right: &'a Value,
) -> DiffResult<Vec<Change<'a>>> {
    let root = JsonPointer::root();
    let mut changes = Vec::new();
    match (left, right) {
        (Value::Object(_), Value::Object(_)) | (Value::Array(_), Value::Array(_)) => {
            walk(left, right, &root, &mut changes)?;
        }
        _ => {
            validate::check_node(left, &root, Side::Left)?;
            validate::check_node(right, &root, Side::Right)?;
            walk_mixed(left, right, &root, &mut changes)?;
        }
    }
    Ok(changes)
}

fn walk<'a>(
    left: &'a Value,
    right: &'a Value,
    path: &JsonPointer,
    out: &mut Vec<Change<'a>>,
) -> DiffResult<()> {
    validate::check_node(left, path, Side::Left)?;
    validate::check_node(right, path, Side::Right)?;

    match (left, right) {
        (Value::Object(l), Value::Object(r)) => walk_objects(l, r, path, out),
        (Value::Array(l), Value::Array(r)) => walk_arrays(l, r, path, out),
        _ => {
            if !deep_equal(left, right) {
                validate::check_tree(right, path, Side::Right)?;
                out.push(Change::Replace {
                    path: path.clone(),
                    value: right,
                });
            }
            Ok(())
        }
    }
}

fn walk_objects<'a>(
    left: &'a Map<String, Value>,
    right: &'a Map<String, Value>,
    path: &JsonPointer,
    out: &mut Vec<Change<'a>>,
) -> DiffResult<()> {
    for (key, old) in left {
        if !right.contains_key(key) {
            out.push(Change::Remove {
                path: path.child(key.as_str()),
                old,
                indexed: false,
            });
        }
    }

    for (key, value) in right {
        if !left.contains_key(key) {
            let child = path.child(key.as_str());
            validate::check_tree(value, &child, Side::Right)?;
            out.push(Change::Add {
                path: child,
                value,
                indexed: false,
            });
        }
    }

    for (key, old) in left {
        if let Some(new) = right.get(key) {
            walk(old, new, &path.child(key.as_str()), out)?;
        }
    }
    Ok(())
}

fn walk_arrays<'a>(
    left: &'a [Value],
    right: &'a [Value],
    path: &JsonPointer,
    out: &mut Vec<Change<'a>>,
) -> DiffResult<()> {
    let common = left.len().min(right.len());

    for (index, old) in left.iter().enumerate().skip(common).rev() {
        out.push(Change::Remove {
            path: path.index(index),
            old,
            indexed: true,
        });
    }

    for (index, value) in right.iter().enumerate().skip(common) {
        let child = path.index(index);
        validate::check_tree(value, &child, Side::Right)?;
        out.push(Change::Add {
            path: child,
            value,
            indexed: true,
        });
    }

    for (index, (old, new)) in left.iter().zip(right).enumerate() {
        walk(old, new, &path.index(index), out)?;
    }
    Ok(())
}

/// Compare an object with an array as two sets of string-keyed members.
fn walk_mixed<'a>(
    left: &'a Value,
    right: &'a Value,
    path: &JsonPointer,
    out: &mut Vec<Change<'a>>,
) -> DiffResult<()> {
    let left_members = members(left);
    let right_members = members(right);

    for &(ref key, old) in left_members.iter().rev() {
        if lookup(&right_members, key).is_none() {
            out.push(Change::Remove {
                path: path.child(key.as_str()),
                old,
                indexed: left.is_array(),
            });
        }
    }

    for &(ref key, value) in &right_members {
        if lookup(&left_members, key).is_none() {
            let child = path.child(key.as_str());
            validate::check_tree(value, &child, Side::Right)?;
            out.push(Change::Add {
                path: child,
                value,
                indexed: right.is_array(),
            });
        }
    }

    for &(ref key, old) in &left_members {
        if let Some(new) = lookup(&right_members, key) {
            walk(old, new, &path.child(key.as_str()), out)?;
        }
    }
    Ok(())
}

fn lookup<'v>(members: &[(String, &'v Value)], key: &str) -> Option<&'v Value> {
    members.iter().find(|(k, _)| k == key).map(|&(_, v)| v)
}

fn members(value: &Value) -> Vec<(String, &Value)> {
    match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiffError;
    use serde_json::json;

    fn ops(left: &Value, right: &Value) -> Vec<Operation> {
        diff_documents(left, right)
            .unwrap()
            .into_iter()
            .map(Change::into_operation)
            .collect()
    }

    fn ptr(s: &str) -> JsonPointer {
        s.parse().unwrap()
    }

    #[test]
    fn equal_documents_produce_nothing() {
        let doc = json!({"foo": {"bar": "baz"}, "list": [1, {"a": null}]});
        assert!(ops(&doc, &doc.clone()).is_empty());
        assert!(ops(&json!({}), &json!({})).is_empty());
        assert!(ops(&json!([]), &json!([])).is_empty());
    }

    #[test]
    fn removes_then_adds_then_recursion() {
        let left = json!({"gone": 1, "kept": {"x": 1}});
        let right = json!({"kept": {"x": 2}, "new": true});
        assert_eq!(
            ops(&left, &right),
            vec![
                Operation::remove(ptr("/gone")),
                Operation::add(ptr("/new"), json!(true)),
                Operation::replace(ptr("/kept/x"), json!(2)),
            ]
        );
    }

    #[test]
    fn kind_change_is_a_replace() {
        let left = json!({"a": {"b": 1}, "c": "leaf"});
        let right = json!({"a": "flat", "c": ["now", "list"]});
        assert_eq!(
            ops(&left, &right),
            vec![
                Operation::replace(ptr("/a"), json!("flat")),
                Operation::replace(ptr("/c"), json!(["now", "list"])),
            ]
        );
    }

    #[test]
    fn nested_array_object_swap_is_a_replace() {
        let left = json!({"a": []});
        let right = json!({"a": {}});
        assert_eq!(ops(&left, &right), vec![Operation::replace(ptr("/a"), json!({}))]);
    }

    #[test]
    fn numeric_forms_are_not_changes() {
        assert!(ops(&json!({"n": 1}), &json!({"n": 1.0})).is_empty());
    }

    #[test]
    fn array_tail_removals_descend() {
        let left = json!({"list": [0, 1, 2, 3]});
        let right = json!({"list": [0]});
        assert_eq!(
            ops(&left, &right),
            vec![
                Operation::remove(ptr("/list/3")),
                Operation::remove(ptr("/list/2")),
                Operation::remove(ptr("/list/1")),
            ]
        );
    }

    #[test]
    fn array_tail_additions_ascend() {
        let left = json!([{"a": 1}]);
        let right = json!([{"a": 2}, "x", "y"]);
        assert_eq!(
            ops(&left, &right),
            vec![
                Operation::add(ptr("/1"), json!("x")),
                Operation::add(ptr("/2"), json!("y")),
                Operation::replace(ptr("/0/a"), json!(2)),
            ]
        );
    }

    #[test]
    fn keys_are_escaped_in_paths() {
        let left = json!({});
        let right = json!({"a/b": 1, "m~n": 2});
        assert_eq!(
            ops(&left, &right),
            vec![
                Operation::add(ptr("/a~1b"), json!(1)),
                Operation::add(ptr("/m~0n"), json!(2)),
            ]
        );
    }

    #[test]
    fn mixed_roots_compare_members() {
        let left = json!(["a", "b"]);
        let right = json!({"0": "a", "x": 1});
        assert_eq!(
            ops(&left, &right),
            vec![
                Operation::remove(ptr("/1")),
                Operation::add(ptr("/x"), json!(1)),
            ]
        );
        assert!(ops(&json!([]), &json!({})).is_empty());
    }

    #[test]
    fn removal_sites_remember_their_value() {
        let left = json!({"foo": {"bar": "baz"}});
        let empty = json!({});
        let changes = diff_documents(&left, &empty).unwrap();
        assert_eq!(
            changes,
            vec![Change::Remove {
                path: ptr("/foo"),
                old: &left["foo"],
                indexed: false,
            }]
        );
    }

    #[test]
    fn indexed_flag_tracks_array_parents() {
        let left = json!({"list": [1, 2], "k": 1});
        let right = json!({"list": [1]});
        let changes = diff_documents(&left, &right).unwrap();
        let flags: Vec<_> = changes
            .iter()
            .map(|c| (c.path().to_string(), c.is_indexed()))
            .collect();
        assert_eq!(
            flags,
            vec![("/k".to_string(), false), ("/list/1".to_string(), true)]
        );
    }

    #[test]
    fn prototype_on_a_visited_node_is_rejected() {
        let left = json!({"a": {"__proto__": {}}});
        let right = json!({"a": {}});
        let err = diff_documents(&left, &right).unwrap_err();
        assert_eq!(
            err,
            DiffError::ProtoPollutedObject {
                side: Side::Left,
                path: "/a".into()
            }
        );
    }

    #[test]
    fn prototype_inside_added_value_is_rejected() {
        let left = json!({});
        let right = json!({"new": {"deep": {"__proto__": 1}}});
        let err = diff_documents(&left, &right).unwrap_err();
        assert_eq!(
            err,
            DiffError::ProtoPollutedObject {
                side: Side::Right,
                path: "/new/deep".into()
            }
        );
    }

    #[test]
    fn prototype_inside_replacement_value_is_rejected() {
        let left = json!({"a": 1});
        let right = json!({"a": {"b": {"__proto__": 1}}});
        let err = diff_documents(&left, &right).unwrap_err();
        assert_eq!(
            err,
            DiffError::ProtoPollutedObject {
                side: Side::Right,
                path: "/a/b".into()
            }
        );
    }

    #[test]
    fn prototype_inside_removed_value_is_not_visited() {
        let left = json!({"old": {"__proto__": 1}});
        let right = json!({});
        assert_eq!(ops(&left, &right), vec![Operation::remove(ptr("/old"))]);
    }
}
