//! This module provides the token types produced by the
//! [`GraphQLLexer`](crate::GraphQLLexer) and consumed by the parser.

mod graphql_token;
mod graphql_token_kind;

pub use graphql_token::GraphQLToken;
pub use graphql_token::TokenIndex;
pub use graphql_token_kind::GraphQLTokenKind;
