use crate::SourceLocation;

/// The display name given to a [`Source`] when none is provided.
pub const DEFAULT_SOURCE_NAME: &str = "GraphQL request";

/// Errors raised while constructing a [`Source`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SourceError {
    /// Both components of a location offset are 1-indexed, so neither may be
    /// zero.
    #[error(
        "location offset must be 1-indexed (line and column greater than \
        zero), got {line}:{column}"
    )]
    InvalidLocationOffset {
        line: usize,
        column: usize,
    },
}

/// An immutable GraphQL source text.
///
/// Besides the text itself a `Source` carries a display name (used when
/// rendering syntax errors) and a 1-indexed `(line, column)` location offset.
/// The offset is used when `body` is an excerpt of a larger file (e.g. a
/// GraphQL literal embedded in another language) so that reported positions
/// refer to the enclosing file.
///
/// All offsets into a `Source` are measured in Unicode codepoints, not bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    body: String,
    chars: Vec<char>,
    name: String,
    location_offset: SourceLocation,
}

impl Source {
    /// Creates a source with the default name and no location offset.
    pub fn new(body: impl Into<String>) -> Self {
        Self::build(body.into(), DEFAULT_SOURCE_NAME.to_string(), SourceLocation::new(1, 1))
    }

    /// Creates a source with the given display name.
    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self::build(body.into(), name.into(), SourceLocation::new(1, 1))
    }

    /// Creates a source with the given display name and a 1-indexed location
    /// offset.
    pub fn with_location_offset(
        body: impl Into<String>,
        name: impl Into<String>,
        location_offset: SourceLocation,
    ) -> Result<Self, SourceError> {
        if location_offset.line == 0 || location_offset.column == 0 {
            return Err(SourceError::InvalidLocationOffset {
                line: location_offset.line,
                column: location_offset.column,
            });
        }
        Ok(Self::build(body.into(), name.into(), location_offset))
    }

    fn build(body: String, name: String, location_offset: SourceLocation) -> Self {
        let chars = body.chars().collect();
        Self {
            body,
            chars,
            name,
            location_offset,
        }
    }

    /// The source text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The source text as codepoints. Token and location offsets index into
    /// this slice.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length of the body in codepoints.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location_offset(&self) -> &SourceLocation {
        &self.location_offset
    }

    /// Returns the text between two codepoint offsets.
    ///
    /// Offsets past the end of the body are clamped.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Resolves a codepoint offset to a 1-indexed `(line, column)` pair in
    /// the coordinate space of the enclosing file, i.e. with this source's
    /// location offset applied.
    pub fn get_location(&self, offset: usize) -> SourceLocation {
        let raw = self.raw_location(offset);
        let column_offset = if raw.line == 1 {
            self.location_offset.column - 1
        } else {
            0
        };
        SourceLocation::new(
            raw.line + self.location_offset.line - 1,
            raw.column + column_offset,
        )
    }

    /// Resolves a codepoint offset relative to the start of `body`, ignoring
    /// the location offset.
    ///
    /// Line separators are `\r\n`, `\n`, `\r`, U+2028 and U+2029.
    pub(crate) fn raw_location(&self, offset: usize) -> SourceLocation {
        let offset = offset.min(self.chars.len());
        let mut line = 1;
        let mut line_start = 0;
        let mut i = 0;
        while i < offset {
            match self.chars[i] {
                '\r' => {
                    if self.chars.get(i + 1) == Some(&'\n') {
                        i += 1;
                    }
                    line += 1;
                    line_start = i + 1;
                },
                '\n' | '\u{2028}' | '\u{2029}' => {
                    line += 1;
                    line_start = i + 1;
                },
                _ => (),
            }
            i += 1;
        }
        // An offset that points into the middle of a `\r\n` pair still
        // belongs to the line the pair terminates.
        let column = if offset >= line_start {
            offset - line_start + 1
        } else {
            1
        };
        SourceLocation::new(line, column)
    }

    /// Splits the body into lines using the same separators as
    /// [`get_location`](Self::get_location).
    pub(crate) fn lines(&self) -> Vec<String> {
        let mut lines = vec![];
        let mut current = String::new();
        let mut iter = self.chars.iter().peekable();
        while let Some(ch) = iter.next() {
            match ch {
                '\r' => {
                    if iter.peek() == Some(&&'\n') {
                        iter.next();
                    }
                    lines.push(std::mem::take(&mut current));
                },
                '\n' | '\u{2028}' | '\u{2029}' => {
                    lines.push(std::mem::take(&mut current));
                },
                c => current.push(*c),
            }
        }
        lines.push(current);
        lines
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Source::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Source::new(body)
    }
}
