mod types;
pub use types::*;

use crate::align::{EditOperation, EditScript};
use std::collections::VecDeque;

struct OpenHunk {
    old_start: usize,
    new_start: usize,
    changes: Vec<EditOperation>,
}

struct HunkBuilder {
    context: usize,
    old_line: usize,
    new_line: usize,
    current: Option<OpenHunk>,
    // keeps seen since the last change of `current`
    trailing: Vec<EditOperation>,
    // keeps seen while no hunk is open, at most `context` of them
    context_buffer: VecDeque<EditOperation>,
    hunks: Vec<Hunk>,
}

impl HunkBuilder {
    fn new(context: usize) -> Self {
        HunkBuilder {
            context,
            old_line: 0,
            new_line: 0,
            current: None,
            trailing: vec![],
            context_buffer: VecDeque::new(),
            hunks: vec![],
        }
    }

    fn process(&mut self, op: EditOperation) {
        match op {
            EditOperation::Keep(..) => {
                if self.current.is_some() {
                    self.trailing.push(op);
                    // more than two contexts' worth: the next change can't
                    // share this hunk
                    if self.trailing.len() > 2 * self.context {
                        self.close();
                    }
                } else {
                    self.push_context(op);
                }
                self.old_line += 1;
                self.new_line += 1;
            }
            change => {
                if let Some(ref mut c) = self.current {
                    c.changes.append(&mut self.trailing);
                    c.changes.push(change);
                } else {
                    let lead = self.context_buffer.len();
                    let mut changes: Vec<EditOperation> = self.context_buffer.drain(..).collect();
                    changes.push(change);
                    self.current = Some(OpenHunk {
                        old_start: self.old_line - lead,
                        new_start: self.new_line - lead,
                        changes,
                    });
                }

                match change {
                    EditOperation::Insert(_) => self.new_line += 1,
                    _ => self.old_line += 1,
                }
            }
        }
    }

    fn push_context(&mut self, op: EditOperation) {
        self.context_buffer.push_back(op);
        while self.context_buffer.len() > self.context {
            self.context_buffer.pop_front();
        }
    }

    fn close(&mut self) {
        let Some(mut open) = self.current.take() else {
            return;
        };
        let mut trailing = std::mem::take(&mut self.trailing);
        let rest = trailing.split_off(self.context.min(trailing.len()));
        open.changes.extend(trailing);
        self.hunks
            .push(Hunk::new(open.old_start, open.new_start, open.changes));
        for op in rest {
            self.push_context(op);
        }
    }

    fn finish(mut self) -> Vec<Hunk> {
        self.close();
        self.hunks
    }
}

/// Groups an edit script into hunks with up to `context_lines` unchanged
/// lines on each side of every change run.
///
/// Two change runs share a hunk when at most `2 * context_lines` keeps
/// separate them, i.e. when their context regions would overlap or touch.
/// A script without changes yields no hunks.
///
/// # Examples
///
/// ```
/// use linediff::align::{align, EditOperation};
/// use linediff::hunk::build_hunks;
/// use linediff::tokenize::tokenize;
///
/// let script = align(&tokenize("A\nB\nC"), &tokenize("A\nC"));
/// let hunks = build_hunks(&script, 1);
/// assert_eq!(hunks.len(), 1);
/// assert_eq!(hunks[0].changes, vec![
///     EditOperation::Keep(0, 0),
///     EditOperation::Delete(1),
///     EditOperation::Keep(2, 1),
/// ]);
/// ```
pub fn build_hunks(script: &EditScript, context_lines: usize) -> Vec<Hunk> {
    let mut builder = HunkBuilder::new(context_lines);
    for &op in script {
        builder.process(op);
    }
    builder.finish()
}
