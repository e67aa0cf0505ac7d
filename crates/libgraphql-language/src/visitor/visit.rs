//! The traversal engine.
//!
//! The walk is driven by an explicit stack of frames rather than by
//! recursion, so the depth of a tree is bounded only by memory. Each frame
//! owns either a node (whose children are visited in visitor-key order) or
//! the nodes of one list slot, plus the edits queued while inside it.
//!
//! Edits are applied copy-on-write when a frame is left: a node frame
//! shallow-copies its node and sets the edited child slots, a list frame
//! rebuilds its list. The edited value then becomes an edit queued on the
//! parent frame, so only the path from an edit to the root is copied and
//! every other subtree stays shared with the original tree.

use crate::ast::AstNode;
use crate::ast::ChildValue;
use crate::ast::Node;
use crate::visitor::KeyMap;
use crate::visitor::PathKey;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::VisitError;
use crate::visitor::Visitor;

/// Walks the tree rooted at `root` depth-first, calling `visitor`'s hooks,
/// and returns the (possibly edited) root.
///
/// The original tree is never modified. If no hook requested an edit, the
/// returned node is `root` itself (a cheap clone of the same allocation).
///
/// ```rust
/// use libgraphql_language::ast::Node;
/// use libgraphql_language::parse;
/// use libgraphql_language::visitor::visit;
/// use libgraphql_language::visitor::VisitAction;
/// use libgraphql_language::visitor::VisitContext;
/// use libgraphql_language::visitor::VisitError;
/// use libgraphql_language::visitor::Visitor;
/// use libgraphql_language::ParseOptions;
///
/// struct CountFields(usize);
///
/// impl Visitor for CountFields {
///     fn enter(
///         &mut self,
///         node: &Node,
///         _ctx: &VisitContext<'_>,
///     ) -> Result<VisitAction, VisitError> {
///         if let Node::Field(_) = node {
///             self.0 += 1;
///         }
///         Ok(VisitAction::Continue)
///     }
/// }
///
/// let doc = Node::from(parse("{ a b { c } }", ParseOptions::default()).unwrap());
/// let mut counter = CountFields(0);
/// let result = visit(&doc, &mut counter).unwrap();
/// assert_eq!(counter.0, 3);
/// assert!(result.ptr_eq(&doc));
/// ```
pub fn visit<V: Visitor + ?Sized>(root: &Node, visitor: &mut V) -> Result<Node, VisitError> {
    visit_with_keys(root, visitor, &KeyMap::default())
}

/// Like [`visit()`], but descends into the child keys given by `key_map`.
pub fn visit_with_keys<V: Visitor + ?Sized>(
    root: &Node,
    visitor: &mut V,
    key_map: &KeyMap,
) -> Result<Node, VisitError> {
    Walk::new(key_map).run(root, visitor)
}

// =============================================================================
// Traversal state
// =============================================================================

enum Container {
    Node(Node),
    List(Vec<Node>),
}

struct Frame<'k> {
    container: Container,

    /// Child keys of a node frame. Unused for list frames.
    keys: &'k [&'static str],

    /// Next child (or list position) to visit.
    index: usize,

    /// Edits to this frame's children, in visiting order.
    edits: Vec<(PathKey, ChildValue)>,
}

impl Frame<'_> {
    fn len(&self) -> usize {
        match &self.container {
            Container::Node(_) => self.keys.len(),
            Container::List(nodes) => nodes.len(),
        }
    }

    /// Applies this frame's queued edits, returning the edited value, or
    /// `None` if nothing was edited.
    fn into_edited(self) -> Result<Option<ChildValue>, VisitError> {
        if self.edits.is_empty() {
            return Ok(None);
        }
        match self.container {
            Container::Node(node) => {
                let edits = self
                    .edits
                    .into_iter()
                    .filter_map(|(key, value)| match key {
                        PathKey::Key(key) => Some((key, value)),
                        PathKey::Index(_) => None,
                    })
                    .collect();
                Ok(Some(ChildValue::Node(node.with_children(edits)?)))
            },
            Container::List(nodes) => {
                Ok(Some(ChildValue::List(apply_list_edits(nodes, self.edits))))
            },
        }
    }
}

/// The next thing to enter, with its key already on the path.
enum Pending {
    Node(Node),
    List(Vec<Node>),
}

struct Walk<'k> {
    key_map: &'k KeyMap,
    stack: Vec<Frame<'k>>,
    path: Vec<PathKey>,
    ancestors: Vec<Node>,
    new_root: Option<Node>,
}

impl<'k> Walk<'k> {
    fn new(key_map: &'k KeyMap) -> Self {
        Self {
            key_map,
            stack: vec![],
            path: vec![],
            ancestors: vec![],
            new_root: None,
        }
    }

    fn run<V: Visitor + ?Sized>(
        mut self,
        root: &Node,
        visitor: &mut V,
    ) -> Result<Node, VisitError> {
        let mut pending = Some(Pending::Node(root.clone()));

        loop {
            match pending.take() {
                Some(Pending::List(nodes)) => {
                    self.stack.push(Frame {
                        container: Container::List(nodes),
                        keys: &[],
                        index: 0,
                        edits: vec![],
                    });
                    continue;
                },
                Some(Pending::Node(node)) => {
                    let ctx = VisitContext::new(&self.path, &self.ancestors);
                    match visitor.enter(&node, &ctx)? {
                        VisitAction::Continue => self.push_node_frame(node),
                        VisitAction::Replace(replacement) => {
                            self.record(ChildValue::Node(replacement.clone()))?;
                            self.push_node_frame(replacement);
                        },
                        VisitAction::Skip => {
                            self.path.pop();
                        },
                        VisitAction::Remove => {
                            self.record(ChildValue::Null)?;
                            self.path.pop();
                        },
                        VisitAction::Stop => {
                            log::trace!("traversal stopped on enter of {}", node.kind());
                            self.path.pop();
                            return self.unwind(root);
                        },
                    }
                    continue;
                },
                None => (),
            }

            let Some(frame) = self.stack.last_mut() else {
                break;
            };

            if frame.index < frame.len() {
                let index = frame.index;
                frame.index += 1;
                pending = match &frame.container {
                    Container::Node(node) => {
                        let key = frame.keys[index];
                        match node.child(key) {
                            None => {
                                return Err(VisitError::UnknownKey {
                                    kind: node.kind(),
                                    key: key.to_string(),
                                });
                            },
                            Some(ChildValue::Null) => None,
                            Some(ChildValue::Node(child)) => {
                                self.path.push(PathKey::Key(key));
                                Some(Pending::Node(child))
                            },
                            Some(ChildValue::List(children)) => {
                                self.path.push(PathKey::Key(key));
                                Some(Pending::List(children))
                            },
                        }
                    },
                    Container::List(nodes) => {
                        self.path.push(PathKey::Index(index));
                        Some(Pending::Node(nodes[index].clone()))
                    },
                };
                continue;
            }

            let Some(frame) = self.stack.pop() else {
                break;
            };
            let original = match &frame.container {
                Container::Node(node) => Some(node.clone()),
                Container::List(_) => None,
            };
            match original {
                None => {
                    if let Some(edited) = frame.into_edited()? {
                        self.record(edited)?;
                    }
                    self.path.pop();
                },
                Some(original) => {
                    self.ancestors.pop();
                    let edited = frame.into_edited()?;
                    let is_edited = edited.is_some();
                    let node = match edited {
                        Some(ChildValue::Node(node)) => node,
                        _ => original,
                    };
                    let ctx = VisitContext::new(&self.path, &self.ancestors);
                    match visitor.leave(&node, &ctx)? {
                        VisitAction::Continue | VisitAction::Skip => {
                            if is_edited {
                                self.record(ChildValue::Node(node))?;
                            }
                        },
                        VisitAction::Replace(replacement) => {
                            self.record(ChildValue::Node(replacement))?;
                        },
                        VisitAction::Remove => {
                            self.record(ChildValue::Null)?;
                        },
                        VisitAction::Stop => {
                            log::trace!("traversal stopped on leave of {}", node.kind());
                            if is_edited {
                                self.record(ChildValue::Node(node))?;
                            }
                            self.path.pop();
                            return self.unwind(root);
                        },
                    }
                    self.path.pop();
                },
            }
        }

        Ok(self.new_root.unwrap_or_else(|| root.clone()))
    }

    fn push_node_frame(&mut self, node: Node) {
        let keys = self.key_map.keys_for(node.kind());
        self.ancestors.push(node.clone());
        self.stack.push(Frame {
            container: Container::Node(node),
            keys,
            index: 0,
            edits: vec![],
        });
    }

    /// Queues an edit of the current node (the one at the end of the path)
    /// on its parent frame. With no parent frame, the current node is the
    /// root.
    fn record(&mut self, value: ChildValue) -> Result<(), VisitError> {
        match (self.stack.last_mut(), self.path.last()) {
            (Some(parent), Some(key)) => {
                parent.edits.push((*key, value));
                Ok(())
            },
            _ => match value {
                ChildValue::Node(node) => {
                    self.new_root = Some(node);
                    Ok(())
                },
                ChildValue::Null | ChildValue::List(_) => Err(VisitError::RemovedRoot),
            },
        }
    }

    /// Pops every remaining frame without calling `leave` hooks, applying
    /// the edits queued so far on the way up.
    fn unwind(mut self, root: &Node) -> Result<Node, VisitError> {
        while let Some(frame) = self.stack.pop() {
            if let Container::Node(_) = frame.container {
                self.ancestors.pop();
            }
            if let Some(edited) = frame.into_edited()? {
                self.record(edited)?;
            }
            self.path.pop();
        }
        Ok(self.new_root.unwrap_or_else(|| root.clone()))
    }
}

/// Applies queued list edits in order. A removal shifts every later index
/// down by one, so indices recorded against the original list are adjusted
/// by the number of removals already applied.
fn apply_list_edits(mut nodes: Vec<Node>, edits: Vec<(PathKey, ChildValue)>) -> Vec<Node> {
    let mut removed = 0;
    for (key, value) in edits {
        let PathKey::Index(index) = key else {
            continue;
        };
        let Some(index) = index.checked_sub(removed) else {
            continue;
        };
        match value {
            ChildValue::Null => {
                if index < nodes.len() {
                    nodes.remove(index);
                    removed += 1;
                }
            },
            ChildValue::Node(node) => {
                if let Some(slot) = nodes.get_mut(index) {
                    *slot = node;
                }
            },
            ChildValue::List(_) => (),
        }
    }
    nodes
}
