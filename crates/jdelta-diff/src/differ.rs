//! Diff entry points.

use jdelta_types::{JsonPointer, Patch};
use serde_json::Value;
use tracing::debug;

use crate::config::{DiffOptions, ValidationMode};
use crate::error::{DiffResult, Side};
use crate::{moves, structural, validate};

/// Compute the patch that turns `left` into `right`, with default options.
///
/// Both arguments must be objects or arrays.
pub fn diff(left: &Value, right: &Value) -> DiffResult<Patch> {
    diff_with_options(left, right, &DiffOptions::default())
}

/// Compute the patch that turns `left` into `right`.
pub fn diff_with_options(left: &Value, right: &Value, options: &DiffOptions) -> DiffResult<Patch> {
    validate::ensure_document(left, Side::Left)?;
    validate::ensure_document(right, Side::Right)?;

    if options.validation == ValidationMode::Strict {
        debug!("validating full documents before diff");
        validate::check_tree(left, &JsonPointer::root(), Side::Left)?;
        validate::check_tree(right, &JsonPointer::root(), Side::Right)?;
    }

    let changes = structural::diff_documents(left, right)?;
    let raw = changes.len();
    let patch: Patch = if options.detect_moves {
        moves::pair_moves(changes).into()
    } else {
        changes.into_iter().map(|c| c.into_operation()).collect()
    };

    debug!(
        raw,
        operations = patch.len(),
        additions = patch.additions(),
        removals = patch.removals(),
        replacements = patch.replacements(),
        moves = patch.moves(),
        "diff complete"
    );
    Ok(patch)
}
