//! Move detection: merge equal-valued remove/add pairs.
//!
//! Each removal, in emission order, pairs with the first unpaired addition
//! whose value is deeply equal to the removed one. The pair becomes a single
//! `move` placed where the addition was; the removal is dropped.
//!
//! Sites under an array never pair. Removing or inserting an element shifts
//! its siblings, and arrays carry no move semantics here.

use std::collections::{HashMap, HashSet};

use jdelta_types::{deep_equal, Operation};
use tracing::debug;

use crate::structural::Change;

/// Rewrite raw changes into the final operation list.
pub(crate) fn pair_moves(changes: Vec<Change<'_>>) -> Vec<Operation> {
    let removes: Vec<usize> = candidates(&changes, |c| matches!(c, Change::Remove { .. }));
    let adds: Vec<usize> = candidates(&changes, |c| matches!(c, Change::Add { .. }));

    // add index -> remove index
    let mut pairs: HashMap<usize, usize> = HashMap::new();
    let mut matched_removes = HashSet::new();

    for &ri in &removes {
        let Change::Remove { old, .. } = &changes[ri] else {
            continue;
        };
        let found = adds.iter().copied().find(|ai| {
            !pairs.contains_key(ai)
                && matches!(&changes[*ai], Change::Add { value, .. } if deep_equal(old, value))
        });
        if let Some(ai) = found {
            pairs.insert(ai, ri);
            matched_removes.insert(ri);
        }
    }

    if pairs.is_empty() {
        return changes.into_iter().map(Change::into_operation).collect();
    }

    let mut operations = Vec::with_capacity(changes.len() - pairs.len());
    for (index, change) in changes.iter().enumerate() {
        if matched_removes.contains(&index) {
            continue;
        }
        match pairs.get(&index) {
            Some(&ri) => {
                let from = changes[ri].path().clone();
                let path = change.path().clone();
                debug!(from = %from, path = %path, "paired remove/add as move");
                operations.push(Operation::move_to(from, path));
            }
            None => operations.push(change.clone().into_operation()),
        }
    }
    operations
}

fn candidates(changes: &[Change<'_>], kind: impl Fn(&Change<'_>) -> bool) -> Vec<usize> {
    changes
        .iter()
        .enumerate()
        .filter(|(_, c)| kind(c) && !c.is_indexed())
        .map(|(i, _)| i)
        .collect()
}
