//! A stateful, on-demand GraphQL tokenizer.
//!
//! The lexer scans a [`Source`] one token at a time. Each call to
//! [`advance()`](GraphQLLexer::advance) reads (or reuses, if it was already
//! read by [`lookahead()`](GraphQLLexer::lookahead)) the next significant
//! token and links it to its predecessor.
//!
//! # Features
//!
//! - **Codepoint-exact positions**: offsets and columns count Unicode
//!   codepoints, and line bookkeeping handles `\n`, `\r\n` and bare `\r`
//! - **Linked comments**: `#` comments are skipped by `advance()` but remain
//!   in the token list so the parser can recover descriptions
//! - **Fail fast**: the first lexical problem is returned as a
//!   [`GraphQLSyntaxError`]; there is no recovery
//!
//! # Usage
//!
//! ```rust
//! use libgraphql_language::GraphQLLexer;
//! use libgraphql_language::Source;
//! use libgraphql_language::token::GraphQLTokenKind;
//! use std::sync::Arc;
//!
//! let lexer = GraphQLLexer::new(Arc::new(Source::new("{ name }")));
//! let kinds: Vec<GraphQLTokenKind> = lexer
//!     .map(|token| token.unwrap().kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::Name,
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::TokenIndex;
use crate::GraphQLErrorNote;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;
use crate::Source;
use smallvec::smallvec;
use std::sync::Arc;

/// A stateful scanner turning a [`Source`] into a linked list of
/// [`GraphQLToken`]s on demand.
///
/// Tokens live in a list owned by the lexer and refer to their neighbours by
/// [`TokenIndex`]. Index 0 is always the synthetic `Sof` token.
pub struct GraphQLLexer {
    source: Arc<Source>,

    /// Every token read so far, in source order (including comments).
    tokens: Vec<GraphQLToken>,

    /// The previously focused non-ignored token.
    last_token: TokenIndex,

    /// The currently focused non-ignored token.
    token: TokenIndex,

    /// The (1-indexed) line containing the current token.
    line: usize,

    /// Codepoint offset at which the current line begins.
    line_start: usize,

    /// Set once the iterator has yielded `Eof` or an error.
    finished: bool,
}

impl GraphQLLexer {
    pub fn new(source: Arc<Source>) -> Self {
        let sof = GraphQLToken::new(GraphQLTokenKind::Sof, 0, 0, 0, 0, None, None);
        Self {
            source,
            tokens: vec![sof],
            last_token: 0,
            token: 0,
            line: 1,
            line_start: 0,
            finished: false,
        }
    }

    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    /// The currently focused token.
    pub fn token(&self) -> &GraphQLToken {
        &self.tokens[self.token]
    }

    pub fn token_index(&self) -> TokenIndex {
        self.token
    }

    /// The token focused before the most recent `advance()`.
    pub fn last_token(&self) -> &GraphQLToken {
        &self.tokens[self.last_token]
    }

    pub fn last_token_index(&self) -> TokenIndex {
        self.last_token
    }

    /// Looks up a token (including comment tokens) by index.
    pub fn token_at(&self, index: TokenIndex) -> Option<&GraphQLToken> {
        self.tokens.get(index)
    }

    /// Every token read so far, in source order.
    pub fn tokens(&self) -> &[GraphQLToken] {
        &self.tokens
    }

    /// Advances to the next non-comment token and returns it.
    ///
    /// Once `Eof` is reached, further calls keep returning `Eof`.
    pub fn advance(&mut self) -> Result<&GraphQLToken, GraphQLSyntaxError> {
        self.last_token = self.token;
        self.token = self.lookahead_index()?;
        Ok(&self.tokens[self.token])
    }

    /// Returns the next non-comment token without changing the lexer's
    /// focus.
    pub fn lookahead(&mut self) -> Result<&GraphQLToken, GraphQLSyntaxError> {
        let index = self.lookahead_index()?;
        Ok(&self.tokens[index])
    }

    fn lookahead_index(&mut self) -> Result<TokenIndex, GraphQLSyntaxError> {
        let mut index = self.token;
        if self.tokens[index].kind == GraphQLTokenKind::Eof {
            return Ok(index);
        }
        loop {
            index = match self.tokens[index].next {
                Some(next) => next,
                None => {
                    let next = self.read_token(index)?;
                    self.tokens[index].next = Some(next);
                    next
                },
            };
            if self.tokens[index].kind != GraphQLTokenKind::Comment {
                return Ok(index);
            }
        }
    }

    // =========================================================================
    // Scanning helpers
    // =========================================================================

    fn char_at(&self, position: usize) -> Option<char> {
        self.source.chars().get(position).copied()
    }

    fn error(
        &self,
        position: usize,
        description: impl Into<String>,
        kind: GraphQLSyntaxErrorKind,
    ) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(self.source.clone(), position, description, kind)
    }

    fn push_token(
        &mut self,
        kind: GraphQLTokenKind,
        start: usize,
        end: usize,
        line: usize,
        column: usize,
        prev: TokenIndex,
        value: Option<String>,
    ) -> TokenIndex {
        log::trace!("lexed {kind} at {line}:{column} ({start}..{end})");
        self.tokens.push(GraphQLToken::new(
            kind,
            start,
            end,
            line,
            column,
            Some(prev),
            value,
        ));
        self.tokens.len() - 1
    }

    /// Skips whitespace, commas and byte-order marks starting at `start`,
    /// keeping line bookkeeping current, and returns the offset of the next
    /// significant character.
    fn position_after_whitespace(&mut self, start: usize) -> usize {
        let chars = self.source.clone();
        let chars = chars.chars();
        let mut position = start;
        while position < chars.len() {
            match chars[position] {
                '\u{FEFF}' | '\t' | ' ' | ',' => {
                    position += 1;
                },
                '\n' => {
                    position += 1;
                    self.line += 1;
                    self.line_start = position;
                },
                '\r' => {
                    if chars.get(position + 1) == Some(&'\n') {
                        position += 2;
                    } else {
                        position += 1;
                    }
                    self.line += 1;
                    self.line_start = position;
                },
                _ => break,
            }
        }
        position
    }

    // =========================================================================
    // Lexer main dispatch
    // =========================================================================

    /// Reads the token following `prev`, appending it to the token list.
    fn read_token(&mut self, prev: TokenIndex) -> Result<TokenIndex, GraphQLSyntaxError> {
        let body_len = self.source.len();
        let position = self.position_after_whitespace(self.tokens[prev].end);
        let line = self.line;
        let column = 1 + position - self.line_start;

        let Some(code) = self.char_at(position) else {
            return Ok(self.push_token(
                GraphQLTokenKind::Eof,
                body_len,
                body_len,
                line,
                column,
                prev,
                None,
            ));
        };

        if code < ' ' && code != '\t' && code != '\n' && code != '\r' {
            return Err(self.error(
                position,
                format!("Invalid character {}.", print_char_code(Some(code))),
                GraphQLSyntaxErrorKind::InvalidCharacter,
            ));
        }

        let punctuator = match code {
            '!' => Some(GraphQLTokenKind::Bang),
            '$' => Some(GraphQLTokenKind::Dollar),
            '(' => Some(GraphQLTokenKind::ParenOpen),
            ')' => Some(GraphQLTokenKind::ParenClose),
            ':' => Some(GraphQLTokenKind::Colon),
            '=' => Some(GraphQLTokenKind::Equals),
            '@' => Some(GraphQLTokenKind::At),
            '[' => Some(GraphQLTokenKind::SquareBracketOpen),
            ']' => Some(GraphQLTokenKind::SquareBracketClose),
            '{' => Some(GraphQLTokenKind::CurlyBraceOpen),
            '|' => Some(GraphQLTokenKind::Pipe),
            '}' => Some(GraphQLTokenKind::CurlyBraceClose),
            _ => None,
        };
        if let Some(kind) = punctuator {
            return Ok(self.push_token(kind, position, position + 1, line, column, prev, None));
        }

        match code {
            '#' => Ok(self.read_comment(position, line, column, prev)),
            '.' if self.char_at(position + 1) == Some('.')
                && self.char_at(position + 2) == Some('.') => {
                Ok(self.push_token(
                    GraphQLTokenKind::Ellipsis,
                    position,
                    position + 3,
                    line,
                    column,
                    prev,
                    None,
                ))
            },
            c if is_name_start(c) => Ok(self.read_name(position, line, column, prev)),
            c if c == '-' || c.is_ascii_digit() => {
                self.read_number(position, c, line, column, prev)
            },
            '"' => self.read_string(position, line, column, prev),
            _ => Err(self.unexpected_character(position, code)),
        }
    }

    fn unexpected_character(&self, position: usize, code: char) -> GraphQLSyntaxError {
        let description = format!(
            "Cannot parse the unexpected character {}.",
            print_char_code(Some(code)),
        );
        if code == '\'' {
            GraphQLSyntaxError::with_notes(
                self.source.clone(),
                position,
                description,
                GraphQLSyntaxErrorKind::UnexpectedCharacter,
                smallvec![GraphQLErrorNote::help(
                    "Unexpected single quote character ('), did you mean to \
                    use a double quote (\")?"
                )],
            )
        } else {
            self.error(position, description, GraphQLSyntaxErrorKind::UnexpectedCharacter)
        }
    }

    // =========================================================================
    // Comments and names
    // =========================================================================

    /// Reads a `#` comment up to (not including) the end of its line.
    ///
    /// The comment's value excludes the leading `#`.
    fn read_comment(
        &mut self,
        start: usize,
        line: usize,
        column: usize,
        prev: TokenIndex,
    ) -> TokenIndex {
        let mut position = start;
        loop {
            position += 1;
            match self.char_at(position) {
                Some(c) if c > '\u{001F}' || c == '\t' => (),
                _ => break,
            }
        }
        let value = self.source.slice(start + 1, position);
        self.push_token(
            GraphQLTokenKind::Comment,
            start,
            position,
            line,
            column,
            prev,
            Some(value),
        )
    }

    /// Reads a name matching `/[_A-Za-z][_0-9A-Za-z]*/`.
    fn read_name(
        &mut self,
        start: usize,
        line: usize,
        column: usize,
        prev: TokenIndex,
    ) -> TokenIndex {
        let mut end = start + 1;
        while let Some(c) = self.char_at(end) {
            if !is_name_continue(c) {
                break;
            }
            end += 1;
        }
        let value = self.source.slice(start, end);
        self.push_token(GraphQLTokenKind::Name, start, end, line, column, prev, Some(value))
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Reads an `Int` or `Float` literal.
    ///
    /// ```text
    /// Int:   -?(0|[1-9][0-9]*)
    /// Float: -?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?
    /// ```
    ///
    /// A number with a fractional or exponent part is a `Float`.
    fn read_number(
        &mut self,
        start: usize,
        first_code: char,
        line: usize,
        column: usize,
        prev: TokenIndex,
    ) -> Result<TokenIndex, GraphQLSyntaxError> {
        let mut code = Some(first_code);
        let mut position = start;
        let mut is_float = false;

        if code == Some('-') {
            position += 1;
            code = self.char_at(position);
        }

        if code == Some('0') {
            position += 1;
            code = self.char_at(position);
            if let Some(c) = code
                && c.is_ascii_digit() {
                return Err(self.error(
                    position,
                    format!(
                        "Invalid number, unexpected digit after 0: {}.",
                        print_char_code(code),
                    ),
                    GraphQLSyntaxErrorKind::InvalidNumber,
                ));
            }
        } else {
            position = self.read_digits(position, code)?;
            code = self.char_at(position);
        }

        if code == Some('.') {
            is_float = true;
            position += 1;
            code = self.char_at(position);
            position = self.read_digits(position, code)?;
            code = self.char_at(position);
        }

        if matches!(code, Some('e' | 'E')) {
            is_float = true;
            position += 1;
            code = self.char_at(position);
            if matches!(code, Some('+' | '-')) {
                position += 1;
                code = self.char_at(position);
            }
            position = self.read_digits(position, code)?;
        }

        let kind = if is_float {
            GraphQLTokenKind::Float
        } else {
            GraphQLTokenKind::Int
        };
        let value = self.source.slice(start, position);
        Ok(self.push_token(kind, start, position, line, column, prev, Some(value)))
    }

    /// Consumes a non-empty run of digits beginning at `start` and returns
    /// the offset just past it.
    fn read_digits(
        &self,
        start: usize,
        first_code: Option<char>,
    ) -> Result<usize, GraphQLSyntaxError> {
        match first_code {
            Some(c) if c.is_ascii_digit() => {
                let mut position = start + 1;
                while let Some(c) = self.char_at(position) {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    position += 1;
                }
                Ok(position)
            },
            _ => Err(self.error(
                start,
                format!(
                    "Invalid number, expected digit but got: {}.",
                    print_char_code(first_code),
                ),
                GraphQLSyntaxErrorKind::InvalidNumber,
            )),
        }
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Reads a `"`-delimited string, decoding its escape sequences.
    fn read_string(
        &mut self,
        start: usize,
        line: usize,
        column: usize,
        prev: TokenIndex,
    ) -> Result<TokenIndex, GraphQLSyntaxError> {
        let body_len = self.source.len();
        let mut position = start + 1;
        let mut chunk_start = position;
        let mut code = None;
        let mut value = String::new();

        while position < body_len {
            let c = self.source.chars()[position];
            code = Some(c);
            if c == '\n' || c == '\r' || c == '"' {
                break;
            }
            if c < ' ' && c != '\t' {
                return Err(self.error(
                    position,
                    format!("Invalid character within String: {}.", print_char_code(code)),
                    GraphQLSyntaxErrorKind::InvalidCharacter,
                ));
            }
            position += 1;

            if c == '\\' {
                value.push_str(&self.source.slice(chunk_start, position - 1));
                let Some(escape) = self.char_at(position) else {
                    break;
                };
                match escape {
                    '"' => value.push('"'),
                    '/' => value.push('/'),
                    '\\' => value.push('\\'),
                    'b' => value.push('\u{0008}'),
                    'f' => value.push('\u{000C}'),
                    'n' => value.push('\n'),
                    'r' => value.push('\r'),
                    't' => value.push('\t'),
                    'u' => {
                        let (decoded, width) = self.read_unicode_escape(position)?;
                        value.push(decoded);
                        position += width;
                    },
                    other => {
                        return Err(self.error(
                            position,
                            format!("Invalid character escape sequence: \\{other}."),
                            GraphQLSyntaxErrorKind::InvalidEscapeSequence,
                        ));
                    },
                }
                position += 1;
                chunk_start = position;
            }
        }

        if code != Some('"') {
            let mut error = self.error(
                position,
                "Unterminated string.",
                GraphQLSyntaxErrorKind::UnterminatedString,
            );
            error.add_note(GraphQLErrorNote::general_with_location(
                "String opened here",
                self.source.get_location(start),
            ));
            error.add_help("Add a closing `\"` before the end of the line.");
            return Err(error);
        }

        value.push_str(&self.source.slice(chunk_start, position));
        Ok(self.push_token(
            GraphQLTokenKind::String,
            start,
            position + 1,
            line,
            column,
            prev,
            Some(value),
        ))
    }

    /// Decodes a `\uXXXX` escape whose `u` sits at `u_position`.
    ///
    /// Returns the decoded character and the number of codepoints consumed
    /// after the `u`. A high surrogate must be immediately followed by a
    /// `\uXXXX` low surrogate, and the pair decodes to a single
    /// supplementary-plane character.
    fn read_unicode_escape(
        &self,
        u_position: usize,
    ) -> Result<(char, usize), GraphQLSyntaxError> {
        let invalid = || {
            self.error(
                u_position,
                format!(
                    "Invalid character escape sequence: \\u{}.",
                    self.source.slice(u_position + 1, u_position + 5),
                ),
                GraphQLSyntaxErrorKind::InvalidEscapeSequence,
            )
        };

        let code_unit = self.read_hex4(u_position + 1).ok_or_else(invalid)?;
        match code_unit {
            0xD800..=0xDBFF => {
                let low = if self.char_at(u_position + 5) == Some('\\')
                    && self.char_at(u_position + 6) == Some('u') {
                    self.read_hex4(u_position + 7)
                } else {
                    None
                };
                match low {
                    Some(low @ 0xDC00..=0xDFFF) => {
                        let combined = 0x10000 + ((code_unit - 0xD800) << 10) + (low - 0xDC00);
                        let decoded = char::from_u32(combined).ok_or_else(invalid)?;
                        Ok((decoded, 10))
                    },
                    _ => Err(invalid()),
                }
            },
            _ => {
                let decoded = char::from_u32(code_unit).ok_or_else(invalid)?;
                Ok((decoded, 4))
            },
        }
    }

    /// Reads exactly four hex digits starting at `start`, validating each
    /// digit in turn.
    fn read_hex4(&self, start: usize) -> Option<u32> {
        let mut result = 0;
        for offset in 0..4 {
            let digit = self.char_at(start + offset)?.to_digit(16)?;
            result = (result << 4) | digit;
        }
        Some(result)
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl Iterator for GraphQLLexer {
    type Item = Result<GraphQLToken, GraphQLSyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.advance() {
            Ok(token) => {
                let token = token.clone();
                if token.kind == GraphQLTokenKind::Eof {
                    self.finished = true;
                }
                Some(Ok(token))
            },
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            },
        }
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Returns `true` if `ch` can start a GraphQL name.
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue a GraphQL name.
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Renders a character for an error message.
///
/// ASCII characters are JSON-quoted (`"a"`, `"\""`, `"\n"`); anything else is
/// printed as a quoted `\uXXXX` escape, using a surrogate pair
/// (`"\uD83D\uDE00"`) above U+FFFF. `None` renders as `<EOF>`.
pub(crate) fn print_char_code(code: Option<char>) -> String {
    let Some(c) = code else {
        return "<EOF>".to_string();
    };
    if (c as u32) < 0x007F {
        let escaped = match c {
            '"' => "\\\"".to_string(),
            '\\' => "\\\\".to_string(),
            '\u{0008}' => "\\b".to_string(),
            '\u{000C}' => "\\f".to_string(),
            '\n' => "\\n".to_string(),
            '\r' => "\\r".to_string(),
            '\t' => "\\t".to_string(),
            c if c < ' ' => format!("\\u{:04x}", c as u32),
            c => c.to_string(),
        };
        format!("\"{escaped}\"")
    } else {
        let mut units = [0u16; 2];
        let escaped: String = c
            .encode_utf16(&mut units)
            .iter()
            .map(|unit| format!("\\u{unit:04X}"))
            .collect();
        format!("\"{escaped}\"")
    }
}
