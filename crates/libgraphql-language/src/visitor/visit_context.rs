use crate::ast::Node;

/// One step of the path from the traversal root to the current node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PathKey {
    /// A child slot of a node, e.g. `"selection_set"`.
    Key(&'static str),

    /// A position within a list slot.
    Index(usize),
}

impl std::fmt::Display for PathKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathKey::Key(key) => f.write_str(key),
            PathKey::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Where the current node sits in the tree being visited.
///
/// The context describes the original tree: `parent()` and `ancestors()`
/// are the nodes as they were before any edits made during this traversal.
#[derive(Clone, Copy, Debug)]
pub struct VisitContext<'a> {
    path: &'a [PathKey],
    ancestors: &'a [Node],
}

impl<'a> VisitContext<'a> {
    pub(crate) fn new(path: &'a [PathKey], ancestors: &'a [Node]) -> Self {
        Self { path, ancestors }
    }

    /// The key under which the current node is held by its parent: a child
    /// key, or a list index for nodes held in a list. `None` for the root.
    pub fn key(&self) -> Option<PathKey> {
        self.path.last().copied()
    }

    /// The nearest ancestor node. Lists are not nodes, so a node held in a
    /// list reports the node owning that list.
    pub fn parent(&self) -> Option<&'a Node> {
        self.ancestors.last()
    }

    /// Keys leading from the root to the current node.
    pub fn path(&self) -> &'a [PathKey] {
        self.path
    }

    /// Nodes enclosing the current node, outermost first.
    pub fn ancestors(&self) -> &'a [Node] {
        self.ancestors
    }

    /// Number of ancestor nodes. The root is at depth 0.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }
}
