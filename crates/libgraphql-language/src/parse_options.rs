/// Options controlling how a [`GraphQLParser`](crate::GraphQLParser) builds
/// its AST.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// When `true`, no [`Location`](crate::Location) is attached to any node.
    ///
    /// Locations hold a reference to the source and clones of their bounding
    /// tokens, so skipping them makes parsing cheaper and lets trees parsed
    /// from different text compare equal when their structure matches.
    pub no_location: bool,
}

impl ParseOptions {
    pub fn no_location() -> Self {
        Self { no_location: true }
    }
}
