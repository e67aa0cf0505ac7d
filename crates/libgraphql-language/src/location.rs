use crate::token::GraphQLToken;
use crate::Source;
use crate::SourceLocation;
use std::sync::Arc;

/// The span of source text an AST node was parsed from.
///
/// `start` and `end` are codepoint offsets into the source body, with `end`
/// exclusive. A parsed `Location` also refers back to the shared [`Source`]
/// and to the first and last tokens of the node, so callers can walk the
/// surrounding token list (e.g. to find adjacent comments).
///
/// Only `start` and `end` take part in equality and serialization; the
/// source and the bounding tokens are context, not identity, and are absent
/// after deserialization.
#[derive(Clone, serde::Deserialize, serde::Serialize)]
pub struct Location {
    pub start: usize,
    pub end: usize,

    #[serde(skip)]
    pub source: Option<Arc<Source>>,

    #[serde(skip)]
    pub start_token: Option<GraphQLToken>,

    #[serde(skip)]
    pub end_token: Option<GraphQLToken>,
}

impl Location {
    /// Creates a detached location with no source or token references.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            source: None,
            start_token: None,
            end_token: None,
        }
    }

    /// Creates a location spanning from the start of `start_token` to the end
    /// of `end_token`.
    pub(crate) fn from_tokens(
        start_token: &GraphQLToken,
        end_token: &GraphQLToken,
        source: Arc<Source>,
    ) -> Self {
        Self {
            start: start_token.start,
            end: end_token.end,
            source: Some(source),
            start_token: Some(start_token.clone()),
            end_token: Some(end_token.clone()),
        }
    }

    /// Resolves `start` to a `(line, column)` in the enclosing file, if this
    /// location still refers to its source.
    pub fn start_location(&self) -> Option<SourceLocation> {
        self.source.as_ref().map(|source| source.get_location(self.start))
    }

    /// Resolves `end` to a `(line, column)` in the enclosing file, if this
    /// location still refers to its source.
    pub fn end_location(&self) -> Option<SourceLocation> {
        self.source.as_ref().map(|source| source.get_location(self.end))
    }

    /// The source text covered by this location.
    pub fn source_text(&self) -> Option<String> {
        self.source.as_ref().map(|source| source.slice(self.start, self.end))
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Location {}

impl std::fmt::Debug for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Location")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}
