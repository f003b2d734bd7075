mod types;
pub use types::*;

/// Splits `text` into a [`Document`] of lines.
///
/// Lines are split on `\n`; a `\r` right before it is kept as part of the
/// line ending rather than the text. Like `str::split`, a trailing newline
/// yields a final empty line, and empty text yields one empty line.
///
/// # Examples
///
/// ```
/// use linediff::tokenize::tokenize;
///
/// let doc = tokenize("hello\r\nworld");
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc.lines()[0].text, "hello");
/// assert_eq!(doc.to_text(), "hello\r\nworld");
/// ```
pub fn tokenize(text: &str) -> Document {
    // can't use `.lines()`: it drops the trailing empty line and the `\r`
    // and the round trip back to text would break
    let mut pieces = text.split('\n').peekable();
    let mut lines = Vec::new();
    while let Some(piece) = pieces.next() {
        let last = pieces.peek().is_none();
        let (text, ending) = match piece.strip_suffix('\r') {
            Some(stripped) if !last => (stripped, LineEnding::CrLf),
            _ if !last => (piece, LineEnding::Lf),
            _ => (piece, LineEnding::None),
        };
        lines.push(Line {
            index: lines.len(),
            text: text.to_string(),
            ending,
        });
    }
    Document { lines }
}
