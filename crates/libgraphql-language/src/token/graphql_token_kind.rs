/// The kind of a GraphQL token.
///
/// `Sof` and `Eof` are synthetic tokens that bound every token stream.
/// `Comment` tokens are skipped by the grammar but remain linked into the
/// token list so the parser can recover leading-comment descriptions.
///
/// Negative numbers like `-123` are lexed as single `Int`/`Float` tokens,
/// not as a separate minus and number.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum GraphQLTokenKind {
    /// Start of input.
    Sof,
    /// End of input.
    Eof,
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `...`
    Ellipsis,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    SquareBracketOpen,
    /// `]`
    SquareBracketClose,
    /// `{`
    CurlyBraceOpen,
    /// `|`
    Pipe,
    /// `}`
    CurlyBraceClose,
    Name,
    Int,
    Float,
    String,
    /// A `#` comment running to the end of its line.
    Comment,
}

impl GraphQLTokenKind {
    /// Returns the text used for this kind in error messages, e.g. `{` or
    /// `Name`.
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphQLTokenKind::Sof => "<SOF>",
            GraphQLTokenKind::Eof => "<EOF>",
            GraphQLTokenKind::Bang => "!",
            GraphQLTokenKind::Dollar => "$",
            GraphQLTokenKind::ParenOpen => "(",
            GraphQLTokenKind::ParenClose => ")",
            GraphQLTokenKind::Ellipsis => "...",
            GraphQLTokenKind::Colon => ":",
            GraphQLTokenKind::Equals => "=",
            GraphQLTokenKind::At => "@",
            GraphQLTokenKind::SquareBracketOpen => "[",
            GraphQLTokenKind::SquareBracketClose => "]",
            GraphQLTokenKind::CurlyBraceOpen => "{",
            GraphQLTokenKind::Pipe => "|",
            GraphQLTokenKind::CurlyBraceClose => "}",
            GraphQLTokenKind::Name => "Name",
            GraphQLTokenKind::Int => "Int",
            GraphQLTokenKind::Float => "Float",
            GraphQLTokenKind::String => "String",
            GraphQLTokenKind::Comment => "Comment",
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        match self {
            GraphQLTokenKind::Bang
            | GraphQLTokenKind::Dollar
            | GraphQLTokenKind::ParenOpen
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::Ellipsis
            | GraphQLTokenKind::Colon
            | GraphQLTokenKind::Equals
            | GraphQLTokenKind::At
            | GraphQLTokenKind::SquareBracketOpen
            | GraphQLTokenKind::SquareBracketClose
            | GraphQLTokenKind::CurlyBraceOpen
            | GraphQLTokenKind::Pipe
            | GraphQLTokenKind::CurlyBraceClose => true,

            GraphQLTokenKind::Sof
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Name
            | GraphQLTokenKind::Int
            | GraphQLTokenKind::Float
            | GraphQLTokenKind::String
            | GraphQLTokenKind::Comment => false,
        }
    }
}

impl std::fmt::Display for GraphQLTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
