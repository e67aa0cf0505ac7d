/// Categorizes syntax errors for programmatic handling.
///
/// The first group of variants is raised by the lexer for character-level
/// problems; the second by the parser for token-sequence problems. Both are
/// surfaced through the same [`GraphQLSyntaxError`](crate::GraphQLSyntaxError)
/// so callers need a single error path.
///
/// The `#[error(...)]` messages are concise/programmatic. Full human-readable
/// messages are in `GraphQLSyntaxError::description()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphQLSyntaxErrorKind {
    /// A character that cannot begin any token.
    ///
    /// # Example
    /// ```text
    /// { field: ? }
    ///          ^ Cannot parse the unexpected character "?".
    /// ```
    #[error("unexpected character")]
    UnexpectedCharacter,

    /// A control character that is not valid GraphQL source text, either
    /// between tokens or within a string.
    #[error("invalid character")]
    InvalidCharacter,

    /// A malformed `Int` or `Float` literal.
    ///
    /// # Example
    /// ```text
    /// { field(arg: 00) }
    ///               ^ Invalid number, unexpected digit after 0: "0".
    /// ```
    #[error("invalid number")]
    InvalidNumber,

    /// A backslash escape inside a string that is not one of the permitted
    /// escapes.
    #[error("invalid escape sequence")]
    InvalidEscapeSequence,

    /// A string literal that reaches a line break or the end of input before
    /// its closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// The parser required a specific token kind or keyword but found
    /// another token.
    ///
    /// # Example
    /// ```text
    /// union Hello = |
    ///                ^ Expected Name, found <EOF>
    /// ```
    #[error("expected `{expected}`, found `{found}`")]
    UnexpectedToken {
        /// The token kind or quoted keyword that was required.
        expected: String,
        /// Description of the token that was found.
        found: String,
    },

    /// No grammar alternative starts with the token that was found.
    #[error("unexpected `{found}`")]
    Unexpected {
        /// Description of the token that was found.
        found: String,
    },
}

impl GraphQLSyntaxErrorKind {
    /// Returns `true` for errors detected while tokenizing.
    pub fn is_lexer_error(&self) -> bool {
        match self {
            GraphQLSyntaxErrorKind::UnexpectedCharacter
            | GraphQLSyntaxErrorKind::InvalidCharacter
            | GraphQLSyntaxErrorKind::InvalidNumber
            | GraphQLSyntaxErrorKind::InvalidEscapeSequence
            | GraphQLSyntaxErrorKind::UnterminatedString => true,

            GraphQLSyntaxErrorKind::UnexpectedToken { .. }
            | GraphQLSyntaxErrorKind::Unexpected { .. } => false,
        }
    }
}
