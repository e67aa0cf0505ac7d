use crate::ast::children::node_children;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeList;
use crate::ast::OperationType;
use crate::ast::Type;
use crate::ast::Value;
use crate::Location;
use std::sync::Arc;

// Descriptions on the definitions below come from the block of `#`
// comments immediately preceding the definition (see `GraphQLParser`).

// =========================================================
// Schema definitions
// =========================================================

/// `schema @directives { query: Query mutation: Mutation }`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaDefinition {
    pub loc: Option<Location>,
    pub directives: NodeList<Arc<Directive>>,
    pub operation_types: NodeList<Arc<OperationTypeDefinition>>,
}

node_children!(SchemaDefinition {
    "directives" => directives: list,
    "operation_types" => operation_types: list,
});

/// One `operation: Type` entry of a [`SchemaDefinition`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationTypeDefinition {
    pub loc: Option<Location>,
    pub operation: OperationType,
    #[serde(rename = "type")]
    pub ty: Arc<NamedType>,
}

node_children!(OperationTypeDefinition {
    "type" => ty: required,
});

// =========================================================
// Type definitions
// =========================================================

/// `scalar Name @directives`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarTypeDefinition {
    pub loc: Option<Location>,
    pub description: Option<String>,
    pub name: Arc<Name>,
    pub directives: NodeList<Arc<Directive>>,
}

node_children!(ScalarTypeDefinition {
    "name" => name: required,
    "directives" => directives: list,
});

/// `type Name implements A B @directives { fields }`
///
/// The field list may be empty.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectTypeDefinition {
    pub loc: Option<Location>,
    pub description: Option<String>,
    pub name: Arc<Name>,
    pub interfaces: NodeList<Arc<NamedType>>,
    pub directives: NodeList<Arc<Directive>>,
    pub fields: NodeList<Arc<FieldDefinition>>,
}

node_children!(ObjectTypeDefinition {
    "name" => name: required,
    "interfaces" => interfaces: list,
    "directives" => directives: list,
    "fields" => fields: list,
});

/// `name(args): Type @directives` within an object or interface type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub loc: Option<Location>,
    pub description: Option<String>,
    pub name: Arc<Name>,
    pub arguments: NodeList<Arc<InputValueDefinition>>,
    #[serde(rename = "type")]
    pub ty: Type,
    pub directives: NodeList<Arc<Directive>>,
}

node_children!(FieldDefinition {
    "name" => name: required,
    "arguments" => arguments: list,
    "type" => ty: required,
    "directives" => directives: list,
});

/// `name: Type = default @directives`, used for argument definitions and
/// input object fields.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputValueDefinition {
    pub loc: Option<Location>,
    pub description: Option<String>,
    pub name: Arc<Name>,
    #[serde(rename = "type")]
    pub ty: Type,
    pub default_value: Option<Value>,
    pub directives: NodeList<Arc<Directive>>,
}

node_children!(InputValueDefinition {
    "name" => name: required,
    "type" => ty: required,
    "default_value" => default_value: optional,
    "directives" => directives: list,
});

/// `interface Name @directives { fields }`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceTypeDefinition {
    pub loc: Option<Location>,
    pub description: Option<String>,
    pub name: Arc<Name>,
    pub directives: NodeList<Arc<Directive>>,
    pub fields: NodeList<Arc<FieldDefinition>>,
}

node_children!(InterfaceTypeDefinition {
    "name" => name: required,
    "directives" => directives: list,
    "fields" => fields: list,
});

/// `union Name @directives = A | B`
///
/// Always has at least one member.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionTypeDefinition {
    pub loc: Option<Location>,
    pub description: Option<String>,
    pub name: Arc<Name>,
    pub directives: NodeList<Arc<Directive>>,
    pub types: NodeList<Arc<NamedType>>,
}

node_children!(UnionTypeDefinition {
    "name" => name: required,
    "directives" => directives: list,
    "types" => types: list,
});

/// `enum Name @directives { VALUES }`
///
/// Always has at least one value.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeDefinition {
    pub loc: Option<Location>,
    pub description: Option<String>,
    pub name: Arc<Name>,
    pub directives: NodeList<Arc<Directive>>,
    pub values: NodeList<Arc<EnumValueDefinition>>,
}

node_children!(EnumTypeDefinition {
    "name" => name: required,
    "directives" => directives: list,
    "values" => values: list,
});

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValueDefinition {
    pub loc: Option<Location>,
    pub description: Option<String>,
    pub name: Arc<Name>,
    pub directives: NodeList<Arc<Directive>>,
}

node_children!(EnumValueDefinition {
    "name" => name: required,
    "directives" => directives: list,
});

/// `input Name @directives { fields }`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeDefinition {
    pub loc: Option<Location>,
    pub description: Option<String>,
    pub name: Arc<Name>,
    pub directives: NodeList<Arc<Directive>>,
    pub fields: NodeList<Arc<InputValueDefinition>>,
}

node_children!(InputObjectTypeDefinition {
    "name" => name: required,
    "directives" => directives: list,
    "fields" => fields: list,
});

// =========================================================
// Extensions and directives
// =========================================================

/// `extend type Name ...`, wrapping the object type definition that follows
/// the `extend` keyword.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeExtensionDefinition {
    pub loc: Option<Location>,
    pub definition: Arc<ObjectTypeDefinition>,
}

node_children!(TypeExtensionDefinition {
    "definition" => definition: required,
});

/// `directive @name(args) on LOCATION | LOCATION`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveDefinition {
    pub loc: Option<Location>,
    pub description: Option<String>,
    pub name: Arc<Name>,
    pub arguments: NodeList<Arc<InputValueDefinition>>,
    pub locations: NodeList<Arc<Name>>,
}

node_children!(DirectiveDefinition {
    "name" => name: required,
    "arguments" => arguments: list,
    "locations" => locations: list,
});
