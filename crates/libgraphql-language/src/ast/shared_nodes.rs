use crate::ast::children::node_children;
use crate::ast::NodeList;
use crate::ast::Value;
use crate::Location;
use std::sync::Arc;

// =========================================================
// Names
// =========================================================

/// A GraphQL name (identifier) matching `/[_A-Za-z][_0-9A-Za-z]*/`.
///
/// Names are used for type names, field names, argument names, directive
/// names, enum values, and more.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Name {
    pub loc: Option<Location>,
    pub value: String,
}

impl Name {
    /// Creates a name with no location.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            loc: None,
            value: value.into(),
        }
    }
}

node_children!(Name {});

// =========================================================
// Arguments and directives
// =========================================================

/// A `name: value` argument passed to a field or directive.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    pub loc: Option<Location>,
    pub name: Arc<Name>,
    pub value: Value,
}

node_children!(Argument {
    "name" => name: required,
    "value" => value: required,
});

/// A directive annotation such as `@include(if: $flag)`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directive {
    pub loc: Option<Location>,
    pub name: Arc<Name>,
    pub arguments: NodeList<Arc<Argument>>,
}

node_children!(Directive {
    "name" => name: required,
    "arguments" => arguments: list,
});

// =========================================================
// Operation types
// =========================================================

/// The kind of a GraphQL operation.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Mutation,
    Query,
    Subscription,
}

impl OperationType {
    /// Looks up the operation type named by a `query`, `mutation` or
    /// `subscription` keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationType::Query),
            "mutation" => Some(OperationType::Mutation),
            "subscription" => Some(OperationType::Subscription),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Mutation => "mutation",
            OperationType::Query => "query",
            OperationType::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
