//! Generic, key-based access to the children of AST nodes.
//!
//! Every node kind declares an ordered list of child keys (its "visitor
//! keys"). A child slot holds a single node, nothing, or a list of nodes; the
//! [`ChildValue`] type is the kind-agnostic view of such a slot that the
//! visitor walks and edits.

use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::NodeList;
use crate::visitor::VisitError;

/// The contents of one child slot of an AST node.
#[derive(Clone, Debug, PartialEq)]
pub enum ChildValue {
    Node(Node),
    List(Vec<Node>),

    /// An optional child that is absent.
    Null,
}

impl ChildValue {
    pub(crate) fn required<T: Clone + Into<Node>>(value: &T) -> Self {
        ChildValue::Node(value.clone().into())
    }

    pub(crate) fn optional<T: Clone + Into<Node>>(value: &Option<T>) -> Self {
        match value {
            Some(value) => ChildValue::Node(value.clone().into()),
            None => ChildValue::Null,
        }
    }

    pub(crate) fn list<T: Clone + Into<Node>>(value: &NodeList<T>) -> Self {
        ChildValue::List(value.iter().cloned().map(Into::into).collect())
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            ChildValue::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            ChildValue::List(nodes) => Some(nodes),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ChildValue::Null)
    }
}

// =============================================================================
// Slot conversions
// =============================================================================

fn convert<T: TryFrom<Node, Error = Node>>(
    parent: NodeKind,
    key: &str,
    node: Node,
) -> Result<T, VisitError> {
    T::try_from(node).map_err(|node| VisitError::InvalidReplacement {
        parent,
        key: key.to_string(),
        found: node.kind(),
    })
}

/// Converts an edited value for a slot that must hold exactly one node.
pub(crate) fn required_slot<T: TryFrom<Node, Error = Node>>(
    parent: NodeKind,
    key: &str,
    value: ChildValue,
) -> Result<T, VisitError> {
    match value {
        ChildValue::Node(node) => convert(parent, key, node),
        ChildValue::Null => Err(VisitError::RemovedRequiredChild {
            parent,
            key: key.to_string(),
        }),
        ChildValue::List(_) => Err(VisitError::ShapeMismatch {
            parent,
            key: key.to_string(),
        }),
    }
}

/// Converts an edited value for a slot that may be empty.
pub(crate) fn optional_slot<T: TryFrom<Node, Error = Node>>(
    parent: NodeKind,
    key: &str,
    value: ChildValue,
) -> Result<Option<T>, VisitError> {
    match value {
        ChildValue::Null => Ok(None),
        value => required_slot(parent, key, value).map(Some),
    }
}

/// Converts an edited value for a list slot.
pub(crate) fn list_slot<T: TryFrom<Node, Error = Node>>(
    parent: NodeKind,
    key: &str,
    value: ChildValue,
) -> Result<NodeList<T>, VisitError> {
    match value {
        ChildValue::List(nodes) => nodes
            .into_iter()
            .map(|node| convert(parent, key, node))
            .collect::<Result<Vec<T>, _>>()
            .map(NodeList::from),
        ChildValue::Null => Err(VisitError::RemovedRequiredChild {
            parent,
            key: key.to_string(),
        }),
        ChildValue::Node(_) => Err(VisitError::ShapeMismatch {
            parent,
            key: key.to_string(),
        }),
    }
}

/// Declares the visitor keys of a node struct along with the key-based
/// `child()`/`set_child()` accessors the visitor uses.
///
/// Each entry maps a key to a field and its slot shape (`required`,
/// `optional` or `list`). Keys are listed in traversal order.
macro_rules! node_children {
    ($ty:ident {}) => {
        impl $ty {
            pub(crate) const VISITOR_KEYS: &'static [&'static str] = &[];

            pub(crate) fn child(
                &self,
                _key: &str,
            ) -> Option<$crate::ast::ChildValue> {
                None
            }

            pub(crate) fn set_child(
                &mut self,
                key: &str,
                _value: $crate::ast::ChildValue,
            ) -> Result<(), $crate::visitor::VisitError> {
                Err($crate::visitor::VisitError::UnknownKey {
                    kind: $crate::ast::NodeKind::$ty,
                    key: key.to_string(),
                })
            }
        }
    };

    ($ty:ident { $($key:literal => $field:ident : $shape:ident),+ $(,)? }) => {
        impl $ty {
            pub(crate) const VISITOR_KEYS: &'static [&'static str] = &[$($key),+];

            pub(crate) fn child(
                &self,
                key: &str,
            ) -> Option<$crate::ast::ChildValue> {
                match key {
                    $($key => Some(node_children!(@get $shape, self.$field)),)+
                    _ => None,
                }
            }

            pub(crate) fn set_child(
                &mut self,
                key: &str,
                value: $crate::ast::ChildValue,
            ) -> Result<(), $crate::visitor::VisitError> {
                match key {
                    $($key => {
                        self.$field = node_children!(
                            @set $shape,
                            $crate::ast::NodeKind::$ty,
                            $key,
                            value
                        )?;
                    },)+
                    _ => {
                        return Err($crate::visitor::VisitError::UnknownKey {
                            kind: $crate::ast::NodeKind::$ty,
                            key: key.to_string(),
                        });
                    },
                }
                Ok(())
            }
        }
    };

    (@get required, $value:expr) => {
        $crate::ast::ChildValue::required(&$value)
    };
    (@get optional, $value:expr) => {
        $crate::ast::ChildValue::optional(&$value)
    };
    (@get list, $value:expr) => {
        $crate::ast::ChildValue::list(&$value)
    };

    (@set required, $kind:expr, $key:expr, $value:expr) => {
        $crate::ast::children::required_slot($kind, $key, $value)
    };
    (@set optional, $kind:expr, $key:expr, $value:expr) => {
        $crate::ast::children::optional_slot($kind, $key, $value)
    };
    (@set list, $kind:expr, $key:expr, $value:expr) => {
        $crate::ast::children::list_slot($kind, $key, $value)
    };
}

pub(crate) use node_children;
