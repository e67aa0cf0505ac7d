use crate::GraphQLErrorNote;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLErrorNotes;
use crate::GraphQLSyntaxErrorKind;
use crate::Source;
use crate::SourceLocation;
use std::sync::Arc;

/// A lexing or parsing error, located at exactly one offending position.
///
/// Constructed from a source, an absolute codepoint offset and a message.
/// Its `Display` rendering is
///
/// ```text
/// Syntax Error GraphQL request (1:2) Invalid number, unexpected digit after 0: "0".
///
/// 1: 00
///     ^
/// ```
///
/// i.e. the source name, the offset-adjusted `line:column`, the message, and
/// up to three lines of context with a caret under the offending column.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_detailed())]
pub struct GraphQLSyntaxError {
    source_text: Arc<Source>,

    /// Codepoint offset of the offending character or token.
    position: usize,

    /// `position` resolved through `Source::get_location()`.
    location: SourceLocation,

    /// Human-readable description, e.g. `Expected Name, found <EOF>`.
    description: String,

    kind: GraphQLSyntaxErrorKind,

    notes: GraphQLErrorNotes,
}

impl GraphQLSyntaxError {
    /// Creates a new syntax error with no notes.
    pub fn new(
        source: Arc<Source>,
        position: usize,
        description: impl Into<String>,
        kind: GraphQLSyntaxErrorKind,
    ) -> Self {
        let location = source.get_location(position);
        Self {
            source_text: source,
            position,
            location,
            description: description.into(),
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Creates a new syntax error with notes.
    pub fn with_notes(
        source: Arc<Source>,
        position: usize,
        description: impl Into<String>,
        kind: GraphQLSyntaxErrorKind,
        notes: GraphQLErrorNotes,
    ) -> Self {
        let mut error = Self::new(source, position, description, kind);
        error.notes = notes;
        error
    }

    /// The source the error was found in.
    pub fn source_text(&self) -> &Arc<Source> {
        &self.source_text
    }

    /// The codepoint offset of the error within the source body.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The 1-indexed line and column of the error, with the source's
    /// location offset applied.
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// The error message without location or context.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &GraphQLSyntaxErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    pub fn add_note(&mut self, note: GraphQLErrorNote) {
        self.notes.push(note);
    }

    /// Adds a help note.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    /// Formats this error as a single-line summary.
    ///
    /// ```text
    /// Syntax Error schema.graphql (5:12) Expected :, found Name "String"
    /// ```
    pub fn format_oneline(&self) -> String {
        format!(
            "Syntax Error {} ({}:{}) {}",
            self.source_text.name(),
            self.location.line,
            self.location.column,
            self.description,
        )
    }

    /// Formats this error with its highlighted source context followed by
    /// any notes.
    pub fn format_detailed(&self) -> String {
        let mut output = self.format_oneline();
        output.push_str("\n\n");
        output.push_str(&self.highlight_source());
        for note in &self.notes {
            let prefix = match note.kind {
                GraphQLErrorNoteKind::General => "note",
                GraphQLErrorNoteKind::Help => "help",
            };
            match note.location {
                Some(loc) => output.push_str(&format!(
                    "= {prefix}: {} ({loc})\n",
                    note.message,
                )),
                None => output.push_str(&format!(
                    "= {prefix}: {}\n",
                    note.message,
                )),
            }
        }
        output
    }

    /// Renders the line containing the error, plus the lines immediately
    /// before and after it, with a `^` under the offending column.
    fn highlight_source(&self) -> String {
        let raw = self.source_text.raw_location(self.position);
        let offset = self.source_text.location_offset();
        let line_offset = offset.line - 1;
        let column_offset = if raw.line == 1 { offset.column - 1 } else { 0 };
        let context_line = raw.line + line_offset;
        let context_column = raw.column + column_offset;

        let prev_line_num = (context_line - 1).to_string();
        let line_num = context_line.to_string();
        let next_line_num = (context_line + 1).to_string();
        let pad_len = next_line_num.len();

        let mut lines = self.source_text.lines();
        if let Some(first) = lines.first_mut() {
            first.insert_str(0, &" ".repeat(offset.column - 1));
        }

        let mut output = String::new();
        if raw.line >= 2 {
            output.push_str(&format!(
                "{prev_line_num:>pad_len$}: {}\n",
                lines[raw.line - 2],
            ));
        }
        output.push_str(&format!(
            "{line_num:>pad_len$}: {}\n",
            lines[raw.line - 1],
        ));
        output.push_str(&" ".repeat(2 + pad_len + context_column - 1));
        output.push_str("^\n");
        if raw.line < lines.len() {
            output.push_str(&format!(
                "{next_line_num:>pad_len$}: {}\n",
                lines[raw.line],
            ));
        }
        output
    }
}
