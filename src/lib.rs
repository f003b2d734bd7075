//! Line-level text diffing.
//!
//! The pipeline has four stages, each depending only on the previous one:
//!
//! ```text
//! text ─► tokenize ─► Document ─► align ─► EditScript ─► build_hunks ─► Hunk ─► Presenter ─► DiffResult
//! ```
//!
//! [`compute_diff`] runs all of them:
//!
//! ```
//! use linediff::{compute_diff, DiffOptions, LineRole};
//!
//! let result = compute_diff("Hello\nWorld", "Hello\nThere", &DiffOptions::default());
//! assert!(!result.identical);
//! let roles: Vec<LineRole> = result.hunks[0].lines.iter().map(|l| l.role).collect();
//! assert_eq!(roles, [LineRole::Removed, LineRole::Added]);
//! ```

pub mod align;
pub mod config;
pub mod error;
pub mod hunk;
pub mod present;
pub mod tokenize;

pub use align::{align, align_with, EditOperation, EditScript};
pub use config::{Algorithm, DiffOptions, Escape};
pub use error::{ContractViolation, OptionsError};
pub use hunk::{build_hunks, Hunk};
pub use present::unified::ToUnified;
pub use present::{DiffResult, DiffStats, LineRole, Presenter, RenderedHunk, RenderedLine};
pub use tokenize::{tokenize, Document, Line, LineEnding};

/// Diffs `original_text` against `modified_text`.
///
/// Never fails: any two strings, empty ones included, give a well-formed
/// result.
///
/// Lines are compared without their terminators, so texts that differ only
/// in `\r\n` versus `\n` endings are reported as identical.
///
/// ```
/// use linediff::{compute_diff, DiffOptions};
///
/// assert!(compute_diff("a\r\nb", "a\nb", &DiffOptions::default()).identical);
/// ```
pub fn compute_diff(original_text: &str, modified_text: &str, options: &DiffOptions) -> DiffResult {
    let original = tokenize(original_text);
    let modified = tokenize(modified_text);
    let script = align_with(&original, &modified, options);
    let hunks = build_hunks(&script, options.context_lines);
    tracing::trace!(
        operations = script.len(),
        edits = script.edit_distance(),
        hunks = hunks.len(),
        "computed diff"
    );
    Presenter::new(&original, &modified)
        .escape(options.escape)
        .present(&hunks)
}
