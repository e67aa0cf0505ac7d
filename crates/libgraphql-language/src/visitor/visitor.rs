use crate::ast::Node;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::VisitError;

/// Hooks called by [`visit()`](crate::visitor::visit) as it enters and
/// leaves each node.
///
/// Both hooks default to [`VisitAction::Continue`], so a visitor only needs
/// to implement the ones it cares about. Lists are walked but never passed
/// to a hook; only nodes are.
pub trait Visitor {
    /// Called before a node's children are visited.
    fn enter(
        &mut self,
        _node: &Node,
        _ctx: &VisitContext<'_>,
    ) -> Result<VisitAction, VisitError> {
        Ok(VisitAction::Continue)
    }

    /// Called after a node's children are visited, with the node as edited
    /// by any changes made to its children. Returning
    /// [`VisitAction::Skip`] has no effect here.
    fn leave(
        &mut self,
        _node: &Node,
        _ctx: &VisitContext<'_>,
    ) -> Result<VisitAction, VisitError> {
        Ok(VisitAction::Continue)
    }
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    fn enter(&mut self, node: &Node, ctx: &VisitContext<'_>) -> Result<VisitAction, VisitError> {
        (**self).enter(node, ctx)
    }

    fn leave(&mut self, node: &Node, ctx: &VisitContext<'_>) -> Result<VisitAction, VisitError> {
        (**self).leave(node, ctx)
    }
}

impl<V: Visitor + ?Sized> Visitor for Box<V> {
    fn enter(&mut self, node: &Node, ctx: &VisitContext<'_>) -> Result<VisitAction, VisitError> {
        (**self).enter(node, ctx)
    }

    fn leave(&mut self, node: &Node, ctx: &VisitContext<'_>) -> Result<VisitAction, VisitError> {
        (**self).leave(node, ctx)
    }
}

/// A visitor with no hooks. Visiting with it returns the root unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopVisitor;

impl Visitor for NoopVisitor {}
