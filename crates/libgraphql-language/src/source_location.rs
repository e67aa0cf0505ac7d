/// A 1-indexed `(line, column)` position within a [`Source`](crate::Source).
///
/// Columns count Unicode codepoints, so `'a'` and `'🎉'` each advance the
/// column by one.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct SourceLocation {
    /// Line number (1-based: first line is 1)
    pub line: usize,

    /// Codepoint column within the line (1-based: first column is 1)
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
