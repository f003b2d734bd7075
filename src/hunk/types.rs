use crate::align::EditOperation;

/// A run of changes with its surrounding context.
///
/// `changes` holds at most `context_lines` leading and trailing
/// `EditOperation::Keep`s, and this is reflected in `old_start`/`new_start`
/// (0-based). For a hunk that only inserts, `old_start` is the index of the
/// original line the insertion lands before; likewise for `new_start`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hunk {
    pub old_start: usize,
    pub old_len: usize,
    pub new_start: usize,
    pub new_len: usize,
    pub changes: Vec<EditOperation>,
}

impl Hunk {
    pub(crate) fn new(old_start: usize, new_start: usize, changes: Vec<EditOperation>) -> Self {
        let old_len = changes.iter().filter(|op| op.original().is_some()).count();
        let new_len = changes.iter().filter(|op| op.modified().is_some()).count();
        Hunk {
            old_start,
            old_len,
            new_start,
            new_len,
            changes,
        }
    }
}
