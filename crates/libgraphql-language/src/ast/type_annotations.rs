use crate::ast::children::node_children;
use crate::ast::node::node_union;
use crate::ast::Name;
use crate::Location;
use std::sync::Arc;

node_union! {
    /// A type reference such as `String`, `[Int]` or `[ID!]!`.
    ///
    /// Wrapping is right-recursive: `[[T!]]!` is
    /// `NonNull(List(List(NonNull(Named(T)))))` read outside-in.
    Type {
        Named(NamedType) = "NamedType",
        List(ListType) = "ListType",
        NonNull(NonNullType) = "NonNullType",
    }
}

/// A reference to a type by name.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedType {
    pub loc: Option<Location>,
    pub name: Arc<Name>,
}

node_children!(NamedType {
    "name" => name: required,
});

/// `[T]`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListType {
    pub loc: Option<Location>,
    #[serde(rename = "type")]
    pub ty: Type,
}

node_children!(ListType {
    "type" => ty: required,
});

/// `T!`. The parser only ever wraps a named or list type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NonNullType {
    pub loc: Option<Location>,
    #[serde(rename = "type")]
    pub ty: Type,
}

node_children!(NonNullType {
    "type" => ty: required,
});
