use crate::ast::*;
use crate::visitor::VisitError;
use crate::Location;
use inherent::inherent;
use std::sync::Arc;

/// Declares the closed set of AST node kinds.
///
/// For every kind this generates a [`NodeKind`] tag, a [`Node`] variant
/// holding the shared node, `AstNode` for the node struct, and the
/// conversions between `Arc<Struct>` and `Node`.
macro_rules! define_nodes {
    ($($kind:ident),+ $(,)?) => {
        /// The tag identifying which AST variant a node is.
        #[derive(
            Clone,
            Copy,
            Debug,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            serde::Deserialize,
            serde::Serialize,
        )]
        pub enum NodeKind {
            $($kind,)+
        }

        impl NodeKind {
            /// Every node kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$kind,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(NodeKind::$kind => stringify!($kind),)+
                }
            }

            /// The ordered child keys the visitor descends into for this
            /// kind. Leaf kinds (e.g. `Name`, `IntValue`) have none.
            pub fn visitor_keys(&self) -> &'static [&'static str] {
                match self {
                    $(NodeKind::$kind => $kind::VISITOR_KEYS,)+
                }
            }
        }

        /// Any AST node.
        ///
        /// Nodes are immutable and shared: a `Node` is a tagged `Arc` to one
        /// of the node structs, so cloning a node (or a whole subtree) is
        /// cheap and an edited tree can share every unedited subtree with
        /// the original.
        #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(tag = "kind")]
        pub enum Node {
            $($kind(Arc<$kind>),)+
        }

        #[inherent]
        impl AstNode for Node {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$kind(_) => NodeKind::$kind,)+
                }
            }

            pub fn loc(&self) -> Option<&Location> {
                match self {
                    $(Node::$kind(node) => node.loc.as_ref(),)+
                }
            }
        }

        impl Node {
            /// Returns the value of the child slot named `key`, or `None` if
            /// this kind has no such child.
            pub fn child(&self, key: &str) -> Option<ChildValue> {
                match self {
                    $(Node::$kind(node) => node.child(key),)+
                }
            }

            /// Returns `true` if both nodes are the very same shared
            /// allocation.
            pub fn ptr_eq(&self, other: &Node) -> bool {
                match (self, other) {
                    $((Node::$kind(a), Node::$kind(b)) => Arc::ptr_eq(a, b),)+
                    _ => false,
                }
            }

            /// Returns a shallow copy of this node with the given child
            /// slots replaced. The original node is left untouched.
            pub(crate) fn with_children(
                &self,
                edits: Vec<(&'static str, ChildValue)>,
            ) -> Result<Node, VisitError> {
                match self {
                    $(Node::$kind(node) => {
                        let mut copy = (**node).clone();
                        for (key, value) in edits {
                            copy.set_child(key, value)?;
                        }
                        Ok(Node::$kind(Arc::new(copy)))
                    },)+
                }
            }
        }

        $(
            #[inherent]
            impl AstNode for $kind {
                pub fn kind(&self) -> NodeKind {
                    NodeKind::$kind
                }

                pub fn loc(&self) -> Option<&Location> {
                    self.loc.as_ref()
                }
            }

            impl From<Arc<$kind>> for Node {
                fn from(node: Arc<$kind>) -> Self {
                    Node::$kind(node)
                }
            }

            impl From<$kind> for Node {
                fn from(node: $kind) -> Self {
                    Node::$kind(Arc::new(node))
                }
            }

            impl TryFrom<Node> for Arc<$kind> {
                type Error = Node;

                fn try_from(node: Node) -> Result<Self, Node> {
                    match node {
                        Node::$kind(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

define_nodes!(
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    TypeExtensionDefinition,
    DirectiveDefinition,
);

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declares an enum over a subset of node kinds, used for struct fields that
/// accept several kinds (e.g. any value literal).
///
/// The enum is internally tagged with `"kind"` just like [`Node`], converts
/// into a `Node`, and converts back from one when the kind belongs to the
/// subset.
macro_rules! node_union {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident($kind:ident) = $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(tag = "kind")]
        pub enum $name {
            $(
                #[serde(rename = $tag)]
                $variant(std::sync::Arc<$kind>),
            )+
        }

        #[inherent::inherent]
        impl $crate::ast::AstNode for $name {
            pub fn kind(&self) -> $crate::ast::NodeKind {
                match self {
                    $($name::$variant(_) => $crate::ast::NodeKind::$kind,)+
                }
            }

            pub fn loc(&self) -> Option<&$crate::Location> {
                match self {
                    $($name::$variant(node) => node.loc.as_ref(),)+
                }
            }
        }

        impl From<$name> for $crate::ast::Node {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant(node) => $crate::ast::Node::$kind(node),)+
                }
            }
        }

        impl TryFrom<$crate::ast::Node> for $name {
            type Error = $crate::ast::Node;

            fn try_from(node: $crate::ast::Node) -> Result<Self, $crate::ast::Node> {
                match node {
                    $($crate::ast::Node::$kind(inner) => Ok($name::$variant(inner)),)+
                    other => Err(other),
                }
            }
        }

        $(
            impl From<std::sync::Arc<$kind>> for $name {
                fn from(node: std::sync::Arc<$kind>) -> Self {
                    $name::$variant(node)
                }
            }

            impl From<$kind> for $name {
                fn from(node: $kind) -> Self {
                    $name::$variant(std::sync::Arc::new(node))
                }
            }
        )+
    };
}

pub(crate) use node_union;
