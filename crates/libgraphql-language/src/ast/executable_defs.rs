use crate::ast::children::node_children;
use crate::ast::node::node_union;
use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeList;
use crate::ast::OperationType;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use crate::Location;
use std::sync::Arc;

// =========================================================
// Operation definitions
// =========================================================

/// An operation definition (query, mutation, or subscription).
///
/// The `{ ... }` shorthand is a nameless `query` with no variable
/// definitions or directives.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationDefinition {
    pub loc: Option<Location>,
    pub operation: OperationType,
    pub name: Option<Arc<Name>>,
    pub variable_definitions: NodeList<Arc<VariableDefinition>>,
    pub directives: NodeList<Arc<Directive>>,
    pub selection_set: Arc<SelectionSet>,
}

node_children!(OperationDefinition {
    "name" => name: optional,
    "variable_definitions" => variable_definitions: list,
    "directives" => directives: list,
    "selection_set" => selection_set: required,
});

/// `$name: Type = default`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    pub loc: Option<Location>,
    pub variable: Arc<Variable>,
    #[serde(rename = "type")]
    pub ty: Type,
    pub default_value: Option<Value>,
}

node_children!(VariableDefinition {
    "variable" => variable: required,
    "type" => ty: required,
    "default_value" => default_value: optional,
});

// =========================================================
// Selections
// =========================================================

/// A `{ ... }` block of selections. Never empty when parsed.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionSet {
    pub loc: Option<Location>,
    pub selections: NodeList<Selection>,
}

node_children!(SelectionSet {
    "selections" => selections: list,
});

node_union! {
    /// One entry of a [`SelectionSet`].
    Selection {
        Field(Field) = "Field",
        FragmentSpread(FragmentSpread) = "FragmentSpread",
        InlineFragment(InlineFragment) = "InlineFragment",
    }
}

/// A field selection, optionally aliased, with arguments, directives, and a
/// nested selection set.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub loc: Option<Location>,
    pub alias: Option<Arc<Name>>,
    pub name: Arc<Name>,
    pub arguments: NodeList<Arc<Argument>>,
    pub directives: NodeList<Arc<Directive>>,
    pub selection_set: Option<Arc<SelectionSet>>,
}

impl Field {
    /// The key this field's result is reported under: the alias if present,
    /// otherwise the field name.
    pub fn response_key(&self) -> &str {
        match &self.alias {
            Some(alias) => &alias.value,
            None => &self.name.value,
        }
    }
}

node_children!(Field {
    "alias" => alias: optional,
    "name" => name: required,
    "arguments" => arguments: list,
    "directives" => directives: list,
    "selection_set" => selection_set: optional,
});

/// `...FragmentName @directives`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentSpread {
    pub loc: Option<Location>,
    pub name: Arc<Name>,
    pub directives: NodeList<Arc<Directive>>,
}

node_children!(FragmentSpread {
    "name" => name: required,
    "directives" => directives: list,
});

/// `... on Type @directives { ... }`, where the type condition is optional.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InlineFragment {
    pub loc: Option<Location>,
    pub type_condition: Option<Arc<NamedType>>,
    pub directives: NodeList<Arc<Directive>>,
    pub selection_set: Arc<SelectionSet>,
}

node_children!(InlineFragment {
    "type_condition" => type_condition: optional,
    "directives" => directives: list,
    "selection_set" => selection_set: required,
});

// =========================================================
// Fragment definitions
// =========================================================

/// `fragment Name on Type @directives { ... }`
///
/// The fragment name is never `on`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentDefinition {
    pub loc: Option<Location>,
    pub name: Arc<Name>,
    pub type_condition: Arc<NamedType>,
    pub directives: NodeList<Arc<Directive>>,
    pub selection_set: Arc<SelectionSet>,
}

node_children!(FragmentDefinition {
    "name" => name: required,
    "type_condition" => type_condition: required,
    "directives" => directives: list,
    "selection_set" => selection_set: required,
});
