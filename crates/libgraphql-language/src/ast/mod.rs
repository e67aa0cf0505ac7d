//! AST types for representing parsed GraphQL documents.
//!
//! The AST is a closed set of node kinds (see [`NodeKind`]). Each kind is an
//! immutable struct carrying an optional [`Location`](crate::Location) and its
//! kind-specific children. Children are held behind `Arc`s and variable-length
//! children in [`NodeList`]s, so trees are cheap to clone and edits made by
//! the [visitor](crate::visitor) share every untouched subtree with the
//! original tree.
//!
//! There are two ways to look at a tree:
//!
//! - **Typed**: struct fields (`field.name`, `field.selection_set`, ...) and
//!   the enums over kinds that share a position ([`Definition`],
//!   [`Selection`], [`Value`], [`Type`]).
//! - **Generic**: [`Node`] wraps any node, and [`Node::child()`] reads any
//!   child slot by its visitor key (e.g. `"selection_set"`). The ordered keys
//!   for each kind come from [`NodeKind::visitor_keys()`].
//!
//! # Example
//!
//! ```rust
//! use libgraphql_language::ast::Definition;
//! use libgraphql_language::ast::Selection;
//! use libgraphql_language::parse;
//! use libgraphql_language::ParseOptions;
//!
//! let doc = parse("{ hello }", ParseOptions::default()).unwrap();
//! let Definition::Operation(op) = &doc.definitions[0] else {
//!     panic!("expected an operation");
//! };
//! let Selection::Field(field) = &op.selection_set.selections[0] else {
//!     panic!("expected a field");
//! };
//! assert_eq!(field.name.value, "hello");
//! ```

mod ast_node;
mod children;
mod document;
mod executable_defs;
mod node;
mod node_list;
mod shared_nodes;
mod type_annotations;
mod type_system_defs;
mod values;

pub use ast_node::AstNode;
pub use children::ChildValue;
pub use document::Definition;
pub use document::Document;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::VariableDefinition;
pub use node::Node;
pub use node::NodeKind;
pub use node_list::NodeList;
pub use shared_nodes::Argument;
pub use shared_nodes::Directive;
pub use shared_nodes::Name;
pub use shared_nodes::OperationType;
pub use type_annotations::ListType;
pub use type_annotations::NamedType;
pub use type_annotations::NonNullType;
pub use type_annotations::Type;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::OperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::TypeExtensionDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::Variable;

#[cfg(test)]
mod tests;
