use crate::token::GraphQLTokenKind;

/// Position of a token within the token list owned by a
/// [`GraphQLLexer`](crate::GraphQLLexer).
pub type TokenIndex = usize;

/// A lexical unit of GraphQL source text.
///
/// Tokens form a doubly linked list that starts with a synthetic `Sof` token
/// and ends with `Eof`. Whitespace and commas are never linked, but `Comment`
/// tokens are, so the parser can walk backward from a definition through the
/// comments that precede it. Links are indices into the lexer's token list
/// rather than pointers, so a token is a plain value that can be cloned into
/// a [`Location`](crate::Location).
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken {
    pub kind: GraphQLTokenKind,

    /// Codepoint offset of the first character of this token.
    pub start: usize,

    /// Codepoint offset immediately after the last character of this token.
    pub end: usize,

    /// 1-indexed line of `start`, relative to the start of the source body.
    /// The synthetic `Sof` token sits on line 0.
    pub line: usize,

    /// 1-indexed codepoint column of `start`. The synthetic `Sof` token sits
    /// in column 0.
    pub column: usize,

    /// The interpreted value of `Name`, `Int`, `Float`, `String` and
    /// `Comment` tokens. String escapes are already decoded and comments
    /// exclude the leading `#`.
    pub value: Option<String>,

    pub prev: Option<TokenIndex>,
    pub next: Option<TokenIndex>,
}

impl GraphQLToken {
    pub(crate) fn new(
        kind: GraphQLTokenKind,
        start: usize,
        end: usize,
        line: usize,
        column: usize,
        prev: Option<TokenIndex>,
        value: Option<String>,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            line,
            column,
            value,
            prev,
            next: None,
        }
    }

    /// Describes this token for error messages: its kind, followed by its
    /// quoted value when it has a non-empty one (e.g. `Name "foo"`).
    pub fn description(&self) -> String {
        match self.value.as_deref() {
            Some(value) if !value.is_empty() => {
                format!("{} \"{value}\"", self.kind)
            },
            _ => self.kind.to_string(),
        }
    }
}
