use crate::ast::Node;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::VisitError;
use crate::visitor::Visitor;

/// A stateful tracker of type context that follows a traversal, such as a
/// schema-aware "current type / parent type / input type" stack.
///
/// The traversal only calls `enter` and `leave`, always in balanced,
/// depth-first order; what is tracked is up to the implementation.
pub trait TypeInfo {
    fn enter(&mut self, node: &Node);
    fn leave(&mut self, node: &Node);
}

/// A [`Visitor`] that keeps a [`TypeInfo`] in step with the walk before
/// delegating to an inner visitor. Built by [`visit_with_type_info()`].
pub struct TypeInfoVisitor<'t, T: TypeInfo + ?Sized, V: Visitor> {
    type_info: &'t mut T,
    visitor: V,
}

/// Wraps `visitor` so that `type_info` is entered before the inner `enter`
/// hook runs and left after the inner `leave` hook runs.
///
/// When the inner `enter` hook returns anything other than
/// [`VisitAction::Continue`], the walk will not descend into the node as
/// entered, so `type_info` leaves it straight away. If the result is a
/// replacement, `type_info` then enters the replacement, which is what the
/// walk descends into.
pub fn visit_with_type_info<T: TypeInfo + ?Sized, V: Visitor>(
    type_info: &mut T,
    visitor: V,
) -> TypeInfoVisitor<'_, T, V> {
    TypeInfoVisitor { type_info, visitor }
}

impl<T: TypeInfo + ?Sized, V: Visitor> TypeInfoVisitor<'_, T, V> {
    pub fn into_inner(self) -> V {
        self.visitor
    }
}

impl<T: TypeInfo + ?Sized, V: Visitor> Visitor for TypeInfoVisitor<'_, T, V> {
    fn enter(&mut self, node: &Node, ctx: &VisitContext<'_>) -> Result<VisitAction, VisitError> {
        self.type_info.enter(node);
        let action = self.visitor.enter(node, ctx)?;
        if !action.is_continue() {
            self.type_info.leave(node);
            if let VisitAction::Replace(replacement) = &action {
                self.type_info.enter(replacement);
            }
        }
        Ok(action)
    }

    fn leave(&mut self, node: &Node, ctx: &VisitContext<'_>) -> Result<VisitAction, VisitError> {
        let action = self.visitor.leave(node, ctx)?;
        self.type_info.leave(node);
        Ok(action)
    }
}
