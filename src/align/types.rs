use crate::error::ContractViolation;
use crate::tokenize::Document;
use serde::Serialize;

/// One step of an alignment between an original and a modified document.
/// Indices are 0-based line indices into the respective document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOperation {
    /// Line present in both documents (original index, modified index).
    Keep(usize, usize),
    /// Line only in the modified document.
    Insert(usize),
    /// Line only in the original document.
    Delete(usize),
}

impl EditOperation {
    pub fn is_keep(&self) -> bool {
        matches!(self, EditOperation::Keep(..))
    }

    /// Original line consumed by this operation, if any.
    pub fn original(&self) -> Option<usize> {
        match *self {
            EditOperation::Keep(o, _) | EditOperation::Delete(o) => Some(o),
            EditOperation::Insert(_) => None,
        }
    }

    /// Modified line consumed by this operation, if any.
    pub fn modified(&self) -> Option<usize> {
        match *self {
            EditOperation::Keep(_, m) | EditOperation::Insert(m) => Some(m),
            EditOperation::Delete(_) => None,
        }
    }
}

/// An ordered sequence of [`EditOperation`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EditScript {
    ops: Vec<EditOperation>,
}

impl EditScript {
    pub fn new(ops: Vec<EditOperation>) -> Self {
        EditScript { ops }
    }

    pub fn ops(&self) -> &[EditOperation] {
        &self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOperation> {
        self.ops.iter()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// True when the script contains only `Keep` operations.
    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(EditOperation::is_keep)
    }

    pub fn insertions(&self) -> usize {
        self.count(|op| matches!(op, EditOperation::Insert(_)))
    }

    pub fn deletions(&self) -> usize {
        self.count(|op| matches!(op, EditOperation::Delete(_)))
    }

    /// Total number of insert and delete operations.
    pub fn edit_distance(&self) -> usize {
        self.count(|op| !op.is_keep())
    }

    fn count(&self, pred: impl Fn(&EditOperation) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    /// Checks that the script consumes lines `0..original_len` and
    /// `0..modified_len` each exactly once and in order.
    pub fn validate(
        &self,
        original_len: usize,
        modified_len: usize,
    ) -> Result<(), ContractViolation> {
        let (mut next_original, mut next_modified) = (0, 0);
        for (position, op) in self.ops.iter().enumerate() {
            if let Some(index) = op.original() {
                if index >= original_len {
                    return Err(ContractViolation::OriginalOutOfRange {
                        position,
                        index,
                        len: original_len,
                    });
                }
                if index != next_original {
                    return Err(ContractViolation::OriginalOutOfOrder {
                        position,
                        expected: next_original,
                        found: index,
                    });
                }
                next_original += 1;
            }
            if let Some(index) = op.modified() {
                if index >= modified_len {
                    return Err(ContractViolation::ModifiedOutOfRange {
                        position,
                        index,
                        len: modified_len,
                    });
                }
                if index != next_modified {
                    return Err(ContractViolation::ModifiedOutOfOrder {
                        position,
                        expected: next_modified,
                        found: index,
                    });
                }
                next_modified += 1;
            }
        }
        if next_original != original_len || next_modified != modified_len {
            return Err(ContractViolation::Unconsumed {
                original: next_original,
                original_len,
                modified: next_modified,
                modified_len,
            });
        }
        Ok(())
    }

    /// Replays `Keep`/`Delete` against `original`, skipping `Insert`.
    pub fn replay_original(&self, original: &Document) -> String {
        replay(original, self.ops.iter().filter_map(EditOperation::original))
    }

    /// Replays `Keep`/`Insert` against `modified`, skipping `Delete`.
    pub fn replay_modified(&self, modified: &Document) -> String {
        replay(modified, self.ops.iter().filter_map(EditOperation::modified))
    }
}

fn replay(doc: &Document, indices: impl Iterator<Item = usize>) -> String {
    indices
        .filter_map(|i| doc.line(i))
        .flat_map(|l| [l.text.as_str(), l.ending.as_str()])
        .collect()
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOperation;
    type IntoIter = std::slice::Iter<'a, EditOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl From<Vec<EditOperation>> for EditScript {
    fn from(ops: Vec<EditOperation>) -> Self {
        EditScript::new(ops)
    }
}
