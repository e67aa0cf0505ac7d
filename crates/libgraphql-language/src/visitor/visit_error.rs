use crate::ast::NodeKind;

/// Errors that abort a traversal.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// A key map or an edit named a child key the node kind does not have.
    #[error("`{kind}` nodes have no child named `{key}`")]
    UnknownKey {
        kind: NodeKind,
        key: String,
    },

    /// A hook replaced a child with a node of a kind its slot cannot hold
    /// (e.g. a `Field` where a `Name` belongs).
    #[error("a `{found}` node cannot be placed at `{parent}.{key}`")]
    InvalidReplacement {
        parent: NodeKind,
        key: String,
        found: NodeKind,
    },

    /// A hook removed a child that its parent requires.
    #[error("the required child `{parent}.{key}` cannot be removed")]
    RemovedRequiredChild {
        parent: NodeKind,
        key: String,
    },

    /// An edit put a list where a single node belongs, or vice versa.
    #[error("the edited value does not fit the shape of `{parent}.{key}`")]
    ShapeMismatch {
        parent: NodeKind,
        key: String,
    },

    /// A hook removed the root node of the traversal.
    #[error("the root node cannot be removed")]
    RemovedRoot,

    /// An error raised by a visitor hook.
    #[error(transparent)]
    Hook(Box<dyn std::error::Error + Send + Sync>),
}

impl VisitError {
    /// Wraps an error raised inside a visitor hook.
    pub fn hook(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        VisitError::Hook(error.into())
    }
}
