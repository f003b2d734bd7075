use serde::Serialize;

/// What a rendered line means for the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineRole {
    Unchanged,
    Added,
    Removed,
}

/// A line ready for display. Line numbers are 1-based; `old_number` is
/// absent for added lines and `new_number` for removed ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedLine {
    pub role: LineRole,
    pub text: String,
    pub old_number: Option<usize>,
    pub new_number: Option<usize>,
}

/// A hunk ready for display.
///
/// Starts are 1-based. When a side is empty (`*_len == 0`) its start is the
/// number of the line the hunk follows, 0 at the top of the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedHunk {
    pub old_start: usize,
    pub old_len: usize,
    pub new_start: usize,
    pub new_len: usize,
    pub lines: Vec<RenderedLine>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
}

/// The full output of a diff run, consumed read-only by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DiffResult {
    pub hunks: Vec<RenderedHunk>,
    /// True exactly when `hunks` is empty.
    pub identical: bool,
    pub stats: DiffStats,
}
