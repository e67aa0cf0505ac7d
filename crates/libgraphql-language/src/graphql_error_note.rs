use crate::GraphQLErrorNoteKind;
use crate::SmallVec;
use crate::SourceLocation;

/// An error note providing additional context about an error.
///
/// Notes augment the primary error message with explanatory context, an
/// actionable suggestion, or a related source location (e.g. where an
/// unterminated string was opened).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    /// The kind of note (determines rendering prefix).
    pub kind: GraphQLErrorNoteKind,

    /// The note message.
    pub message: String,

    /// Optional location of a related position in the source.
    pub location: Option<SourceLocation>,
}

impl GraphQLErrorNote {
    /// Creates a general note without a location.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            location: None,
        }
    }

    /// Creates a general note pointing at a related location.
    pub fn general_with_location(
        message: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            location: Some(location),
        }
    }

    /// Creates a help note.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            location: None,
        }
    }
}

/// Type alias for error notes.
///
/// Uses SmallVec since most errors have 0-1 notes, avoiding heap
/// allocation in the common case.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
