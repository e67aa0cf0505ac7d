use crate::ast::Node;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::VisitError;
use crate::visitor::Visitor;

/// Suppression state of one visitor inside a [`ParallelVisitor`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Suppression {
    Active,

    /// Skipping the subtree of the node entered at this depth.
    Skipping(usize),

    /// Stopped for the rest of the traversal.
    Stopped,
}

/// Runs several visitors in a single traversal.
///
/// Each visitor sees the same sequence of nodes it would see if visited on
/// its own, except that a skip or stop requested by one visitor only
/// affects that visitor:
///
/// - [`VisitAction::Skip`] suspends the visitor until the walk leaves the
///   skipped node (whose `leave` hook is not called for that visitor)
/// - [`VisitAction::Stop`] suspends the visitor for the rest of the walk
///
/// A replacement or removal returned by any visitor is returned immediately
/// as the combined result for that node, and later visitors are not called
/// for that node and phase. A visitor that asked to skip a node that another
/// visitor then removes resumes with the removed node's next sibling; one
/// that asked to skip a node that gets replaced skips the replacement.
///
/// Visitors are consulted in order, one after another: "parallel" means
/// co-scheduled in one walk, not multi-threaded.
pub struct ParallelVisitor<'a> {
    visitors: Vec<Box<dyn Visitor + 'a>>,
    suppression: Vec<Suppression>,
}

/// Combines `visitors` into one visitor that fans out to each of them.
pub fn visit_in_parallel<'a>(visitors: Vec<Box<dyn Visitor + 'a>>) -> ParallelVisitor<'a> {
    let suppression = vec![Suppression::Active; visitors.len()];
    ParallelVisitor {
        visitors,
        suppression,
    }
}

impl<'a> ParallelVisitor<'a> {
    /// Gives back the combined visitors, e.g. to inspect their state after
    /// the walk.
    pub fn into_inner(self) -> Vec<Box<dyn Visitor + 'a>> {
        self.visitors
    }
}

impl ParallelVisitor<'_> {
    fn release_skips_at(&mut self, depth: usize) {
        for suppression in &mut self.suppression {
            if *suppression == Suppression::Skipping(depth) {
                *suppression = Suppression::Active;
            }
        }
    }
}

impl Visitor for ParallelVisitor<'_> {
    fn enter(&mut self, node: &Node, ctx: &VisitContext<'_>) -> Result<VisitAction, VisitError> {
        let depth = ctx.depth();
        for index in 0..self.visitors.len() {
            if self.suppression[index] != Suppression::Active {
                continue;
            }
            match self.visitors[index].enter(node, ctx)? {
                VisitAction::Continue => (),
                VisitAction::Skip => self.suppression[index] = Suppression::Skipping(depth),
                VisitAction::Stop => self.suppression[index] = Suppression::Stopped,
                VisitAction::Remove => {
                    // The walk never leaves a removed node, so skips of it end here.
                    self.release_skips_at(depth);
                    return Ok(VisitAction::Remove);
                },
                // Skips of the original carry over to the replacement, which
                // is left at the same depth.
                action @ VisitAction::Replace(_) => return Ok(action),
            }
        }
        Ok(VisitAction::Continue)
    }

    fn leave(&mut self, node: &Node, ctx: &VisitContext<'_>) -> Result<VisitAction, VisitError> {
        for (visitor, suppression) in self.visitors.iter_mut().zip(self.suppression.iter_mut()) {
            match *suppression {
                Suppression::Active => match visitor.leave(node, ctx)? {
                    VisitAction::Continue | VisitAction::Skip => (),
                    VisitAction::Stop => *suppression = Suppression::Stopped,
                    action @ (VisitAction::Replace(_) | VisitAction::Remove) => {
                        return Ok(action);
                    },
                },
                Suppression::Skipping(depth) if depth == ctx.depth() => {
                    *suppression = Suppression::Active;
                },
                Suppression::Skipping(_) | Suppression::Stopped => (),
            }
        }
        Ok(VisitAction::Continue)
    }
}
