//! Line alignment: computes a minimal edit script between two documents.

pub mod lcs;
pub mod myers;
mod types;
pub use types::*;

use crate::config::{Algorithm, DiffOptions};
use crate::tokenize::Document;

/// Aligns two documents with the LCS algorithm.
///
/// # Examples
///
/// ```
/// use linediff::align::{align, EditOperation};
/// use linediff::tokenize::tokenize;
///
/// let script = align(&tokenize("A\nB\nC"), &tokenize("A\nC"));
/// assert_eq!(script.ops(), &[
///     EditOperation::Keep(0, 0),
///     EditOperation::Delete(1),
///     EditOperation::Keep(2, 1),
/// ]);
/// ```
pub fn align(original: &Document, modified: &Document) -> EditScript {
    align_with(
        original,
        modified,
        &DiffOptions::default().with_algorithm(Algorithm::Lcs),
    )
}

/// Aligns two documents with the algorithm selected by `options`.
///
/// # Panics
///
/// Panics if the aligner produces a script that is not a valid alignment.
/// That is a bug in this crate, never a property of the input.
pub fn align_with(original: &Document, modified: &Document, options: &DiffOptions) -> EditScript {
    let old: Vec<&str> = texts(original);
    let new: Vec<&str> = texts(modified);
    let algorithm = options
        .algorithm
        .resolve(old.len(), new.len(), options.max_table_cells);

    let script = EditScript::new(match algorithm {
        Algorithm::Myers => myers::diff(&old, &new),
        Algorithm::Lcs | Algorithm::Auto => lcs::diff(&old, &new),
    });

    if let Err(violation) = script.validate(old.len(), new.len()) {
        panic!("{algorithm} aligner produced a malformed edit script: {violation}");
    }
    script
}

fn texts(doc: &Document) -> Vec<&str> {
    doc.alignable_lines()
        .iter()
        .map(|l| l.text.as_str())
        .collect()
}
