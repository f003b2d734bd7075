use serde::Serialize;

/// How a line was terminated in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    CrLf,
    /// Last line of the text, no terminator.
    None,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::None => "",
        }
    }
}

/// One line of a document. `text` never contains the terminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    pub index: usize,
    pub text: String,
    pub ending: LineEnding,
}

/// An immutable, ordered sequence of lines.
///
/// A document always has at least one line: empty text tokenizes to a single
/// empty line with no terminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    pub(crate) lines: Vec<Line>,
}

impl Document {
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the document was built from empty text.
    pub fn is_empty(&self) -> bool {
        matches!(
            self.lines.as_slice(),
            [Line { text, ending: LineEnding::None, .. }] if text.is_empty()
        )
    }

    /// The lines taking part in alignment. The placeholder line of an empty
    /// document is not one of them.
    pub fn alignable_lines(&self) -> &[Line] {
        if self.is_empty() {
            &self.lines[..0]
        } else {
            &self.lines
        }
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Rebuilds the exact source text.
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .flat_map(|l| [l.text.as_str(), l.ending.as_str()])
            .collect()
    }
}
