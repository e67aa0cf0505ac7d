//! A GraphQL language front end: turns source text into a located, typed
//! AST and walks and edits that AST.
//!
//! - [`Source`] holds the text, a display name and a location offset
//! - [`GraphQLLexer`] tokenizes a source on demand into a linked token list
//! - [`parse()`], [`parse_value()`] and [`parse_type()`] build [`ast`] trees
//! - [`visitor`] walks trees with copy-on-write editing, parallel
//!   composition of visitors, and type-info tracking
//!
//! Every lexing or parsing problem is reported as a [`GraphQLSyntaxError`]
//! pointing at exactly one position in the source.
//!
//! ```rust
//! use libgraphql_language::parse;
//! use libgraphql_language::ParseOptions;
//!
//! let error = parse("{ field(arg: 00) }", ParseOptions::default()).unwrap_err();
//! assert_eq!(error.location().column, 15);
//! assert!(error.description().contains("unexpected digit after 0"));
//! ```

pub mod ast;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_lexer;
mod graphql_parser;
mod graphql_syntax_error;
mod graphql_syntax_error_kind;
mod location;
mod parse_options;
mod source;
mod source_location;
pub mod token;
pub mod visitor;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_lexer::GraphQLLexer;
pub use graphql_parser::parse;
pub use graphql_parser::parse_type;
pub use graphql_parser::parse_value;
pub use graphql_parser::GraphQLParser;
pub use graphql_syntax_error::GraphQLSyntaxError;
pub use graphql_syntax_error_kind::GraphQLSyntaxErrorKind;
pub use location::Location;
pub use parse_options::ParseOptions;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source::Source;
pub use source::SourceError;
pub use source::DEFAULT_SOURCE_NAME;
pub use source_location::SourceLocation;

#[cfg(test)]
mod tests;
