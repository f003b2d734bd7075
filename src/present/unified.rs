//! Unified-diff text rendering of a [`DiffResult`].

use super::{DiffResult, LineRole, RenderedHunk, RenderedLine};

pub trait ToUnified {
    fn to_unified(&self, old_name: Option<&str>, new_name: Option<&str>) -> String;
}

impl LineRole {
    /// Prefix character of a line in unified output.
    pub fn marker(self) -> char {
        match self {
            LineRole::Unchanged => ' ',
            LineRole::Added => '+',
            LineRole::Removed => '-',
        }
    }
}

impl RenderedHunk {
    /// The `@@ -a,b +c,d @@` range line.
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_len, self.new_start, self.new_len
        )
    }
}

impl ToUnified for RenderedLine {
    fn to_unified(&self, _: Option<&str>, _: Option<&str>) -> String {
        format!("{}{}", self.role.marker(), self.text)
    }
}

impl ToUnified for RenderedHunk {
    fn to_unified(&self, _old_name: Option<&str>, _new_name: Option<&str>) -> String {
        let body = self
            .lines
            .iter()
            .map(|l| l.to_unified(None, None))
            .collect::<Vec<String>>();

        format!("{}\n{}\n", self.header(), body.join("\n"))
    }
}

impl ToUnified for DiffResult {
    /// Empty for identical documents, otherwise `---`/`+++` headers followed
    /// by every hunk. Each line ends with `\n`.
    fn to_unified(&self, old_name: Option<&str>, new_name: Option<&str>) -> String {
        if self.identical {
            return String::new();
        }

        let header = format!(
            "--- {}\n+++ {}\n",
            old_name.unwrap_or("original"),
            new_name.unwrap_or("modified")
        );
        let hunks = self
            .hunks
            .iter()
            .map(|h| h.to_unified(None, None))
            .collect::<String>();
        format!("{}{}", header, hunks)
    }
}
