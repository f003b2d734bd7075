pub mod unified;
mod types;
pub use types::*;

use crate::align::EditOperation;
use crate::config::Escape;
use crate::hunk::Hunk;
use crate::tokenize::Document;
use std::borrow::Cow;

/// Turns hunks into a [`DiffResult`]. The only stage that knows about
/// display concerns such as escaping.
#[derive(Debug, Clone, Copy)]
pub struct Presenter<'a> {
    original: &'a Document,
    modified: &'a Document,
    escape: Escape,
}

impl<'a> Presenter<'a> {
    /// `original` and `modified` must be the documents the hunks were
    /// computed from.
    pub fn new(original: &'a Document, modified: &'a Document) -> Self {
        Presenter {
            original,
            modified,
            escape: Escape::None,
        }
    }

    pub fn escape(mut self, escape: Escape) -> Self {
        self.escape = escape;
        self
    }

    pub fn present(&self, hunks: &[Hunk]) -> DiffResult {
        let hunks: Vec<RenderedHunk> = hunks.iter().map(|h| self.render_hunk(h)).collect();
        let mut stats = DiffStats::default();
        for line in hunks.iter().flat_map(|h| &h.lines) {
            match line.role {
                LineRole::Added => stats.added += 1,
                LineRole::Removed => stats.removed += 1,
                LineRole::Unchanged => {}
            }
        }
        DiffResult {
            identical: hunks.is_empty(),
            hunks,
            stats,
        }
    }

    fn render_hunk(&self, hunk: &Hunk) -> RenderedHunk {
        RenderedHunk {
            old_start: display_start(hunk.old_start, hunk.old_len),
            old_len: hunk.old_len,
            new_start: display_start(hunk.new_start, hunk.new_len),
            new_len: hunk.new_len,
            lines: hunk.changes.iter().map(|&op| self.render_line(op)).collect(),
        }
    }

    fn render_line(&self, op: EditOperation) -> RenderedLine {
        let (role, text, old_number, new_number) = match op {
            EditOperation::Keep(o, n) => (
                LineRole::Unchanged,
                &self.original.lines()[o].text,
                Some(o + 1),
                Some(n + 1),
            ),
            EditOperation::Delete(o) => (
                LineRole::Removed,
                &self.original.lines()[o].text,
                Some(o + 1),
                None,
            ),
            EditOperation::Insert(n) => (
                LineRole::Added,
                &self.modified.lines()[n].text,
                None,
                Some(n + 1),
            ),
        };
        RenderedLine {
            role,
            text: self.display_text(text).into_owned(),
            old_number,
            new_number,
        }
    }

    fn display_text<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.escape {
            Escape::None => Cow::Borrowed(text),
            Escape::Html => Cow::Owned(html_escape(text)),
        }
    }
}

fn display_start(start: usize, len: usize) -> usize {
    if len == 0 {
        start
    } else {
        start + 1
    }
}

/// Escape HTML special characters for safe embedding in HTML documents.
fn html_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
