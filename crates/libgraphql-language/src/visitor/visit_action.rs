use crate::ast::Node;

/// What a visitor hook asks the traversal to do next.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum VisitAction {
    /// No effect.
    #[default]
    Continue,

    /// Replace the current node. On enter, the traversal descends into the
    /// replacement instead of the original.
    Replace(Node),

    /// Remove the current node from its parent.
    Remove,

    /// Do not descend into the current node's children. Only meaningful on
    /// enter; the node's `leave` hook is not called.
    Skip,

    /// End the traversal. Edits made so far are still applied to the
    /// returned tree, but no further hooks run.
    Stop,
}

impl VisitAction {
    pub fn is_continue(&self) -> bool {
        matches!(self, VisitAction::Continue)
    }
}
