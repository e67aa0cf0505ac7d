use crate::ast::AstNode;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::VisitError;
use crate::visitor::Visitor;
use std::collections::HashMap;

/// A boxed hook, as stored in a [`VisitFnTable`].
pub type VisitFn<'a> =
    Box<dyn FnMut(&Node, &VisitContext<'_>) -> Result<VisitAction, VisitError> + 'a>;

#[derive(Default)]
struct KindFns<'a> {
    enter: Option<VisitFn<'a>>,
    leave: Option<VisitFn<'a>>,
}

/// A [`Visitor`] assembled from closures: per-kind `enter`/`leave` hooks
/// plus generic hooks used for kinds without a specific one.
///
/// For each node and phase exactly one hook runs: the kind-specific hook if
/// one is registered, otherwise the generic hook, otherwise none.
///
/// ```rust
/// use libgraphql_language::ast::Node;
/// use libgraphql_language::ast::NodeKind;
/// use libgraphql_language::parse;
/// use libgraphql_language::visitor::visit;
/// use libgraphql_language::visitor::VisitAction;
/// use libgraphql_language::visitor::VisitFnTable;
/// use libgraphql_language::ParseOptions;
///
/// let doc = Node::from(parse("{ a b }", ParseOptions::no_location()).unwrap());
/// let mut names = vec![];
/// {
///     let mut table = VisitFnTable::new().on_enter_kind(NodeKind::Name, |node, _| {
///         if let Node::Name(name) = node {
///             names.push(name.value.clone());
///         }
///         Ok(VisitAction::Continue)
///     });
///     visit(&doc, &mut table).unwrap();
/// }
/// assert_eq!(names, vec!["a", "b"]);
/// ```
#[derive(Default)]
pub struct VisitFnTable<'a> {
    kinds: HashMap<NodeKind, KindFns<'a>>,
    enter: Option<VisitFn<'a>>,
    leave: Option<VisitFn<'a>>,
}

impl<'a> VisitFnTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the generic enter hook.
    pub fn on_enter(
        mut self,
        hook: impl FnMut(&Node, &VisitContext<'_>) -> Result<VisitAction, VisitError> + 'a,
    ) -> Self {
        self.enter = Some(Box::new(hook));
        self
    }

    /// Sets the generic leave hook.
    pub fn on_leave(
        mut self,
        hook: impl FnMut(&Node, &VisitContext<'_>) -> Result<VisitAction, VisitError> + 'a,
    ) -> Self {
        self.leave = Some(Box::new(hook));
        self
    }

    /// Sets the enter hook for nodes of `kind`.
    pub fn on_enter_kind(
        mut self,
        kind: NodeKind,
        hook: impl FnMut(&Node, &VisitContext<'_>) -> Result<VisitAction, VisitError> + 'a,
    ) -> Self {
        self.kinds.entry(kind).or_default().enter = Some(Box::new(hook));
        self
    }

    /// Sets the leave hook for nodes of `kind`.
    pub fn on_leave_kind(
        mut self,
        kind: NodeKind,
        hook: impl FnMut(&Node, &VisitContext<'_>) -> Result<VisitAction, VisitError> + 'a,
    ) -> Self {
        self.kinds.entry(kind).or_default().leave = Some(Box::new(hook));
        self
    }

    /// Resolves the hook to run for a node of `kind` in the given phase.
    pub fn get_visit_fn(&mut self, kind: NodeKind, is_leaving: bool) -> Option<&mut VisitFn<'a>> {
        let specific = self.kinds.get_mut(&kind).and_then(|fns| {
            if is_leaving {
                fns.leave.as_mut()
            } else {
                fns.enter.as_mut()
            }
        });
        match specific {
            Some(hook) => Some(hook),
            None if is_leaving => self.leave.as_mut(),
            None => self.enter.as_mut(),
        }
    }
}

impl Visitor for VisitFnTable<'_> {
    fn enter(&mut self, node: &Node, ctx: &VisitContext<'_>) -> Result<VisitAction, VisitError> {
        match self.get_visit_fn(node.kind(), false) {
            Some(hook) => hook(node, ctx),
            None => Ok(VisitAction::Continue),
        }
    }

    fn leave(&mut self, node: &Node, ctx: &VisitContext<'_>) -> Result<VisitAction, VisitError> {
        match self.get_visit_fn(node.kind(), true) {
            Some(hook) => hook(node, ctx),
            None => Ok(VisitAction::Continue),
        }
    }
}
