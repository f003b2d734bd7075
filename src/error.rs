//! Error types for the diff engine.
//!
//! Diffing itself cannot fail. The errors here describe malformed edit
//! scripts (a defect in the aligner) and invalid option input.

/// A way in which an edit script fails to be a valid alignment of two
/// documents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    /// An operation referenced an original line out of order.
    #[error("operation {position} expected original line {expected}, got {found}")]
    OriginalOutOfOrder {
        position: usize,
        expected: usize,
        found: usize,
    },

    /// An operation referenced a modified line out of order.
    #[error("operation {position} expected modified line {expected}, got {found}")]
    ModifiedOutOfOrder {
        position: usize,
        expected: usize,
        found: usize,
    },

    /// An operation referenced an original line past the end of the document.
    #[error("operation {position} references original line {index}, document has {len}")]
    OriginalOutOfRange {
        position: usize,
        index: usize,
        len: usize,
    },

    /// An operation referenced a modified line past the end of the document.
    #[error("operation {position} references modified line {index}, document has {len}")]
    ModifiedOutOfRange {
        position: usize,
        index: usize,
        len: usize,
    },

    /// Some lines were never consumed by the script.
    #[error("script consumed {original}/{original_len} original and {modified}/{modified_len} modified lines")]
    Unconsumed {
        original: usize,
        original_len: usize,
        modified: usize,
        modified_len: usize,
    },
}

/// Invalid option input.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// Unknown name for an enumerated option.
    #[error("unknown {option} `{value}` (expected one of: {expected})")]
    UnknownValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The options document is not valid JSON for `DiffOptions`.
    #[error("invalid options document: {0}")]
    Json(#[from] serde_json::Error),
}
