/// The kind of an error note (determines how the note is rendered).
///
/// Notes provide additional context beyond the primary error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// General context or explanation about the error.
    ///
    /// Rendered as `= note: ...` in CLI output.
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in CLI output.
    /// Example: "Did you mean to use a double quote (`\"`)?"
    Help,
}
