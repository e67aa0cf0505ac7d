use crate::ast::children::node_children;
use crate::ast::node::node_union;
use crate::ast::Name;
use crate::ast::NodeList;
use crate::Location;
use std::sync::Arc;

// =========================================================
// Value enum
// =========================================================

node_union! {
    /// A GraphQL input value literal, or a variable reference where one is
    /// permitted.
    ///
    /// Constant contexts (default values) never contain a
    /// [`Value::Variable`] anywhere in their subtree.
    Value {
        Variable(Variable) = "Variable",
        Int(IntValue) = "IntValue",
        Float(FloatValue) = "FloatValue",
        String(StringValue) = "StringValue",
        Boolean(BooleanValue) = "BooleanValue",
        Null(NullValue) = "NullValue",
        Enum(EnumValue) = "EnumValue",
        List(ListValue) = "ListValue",
        Object(ObjectValue) = "ObjectValue",
    }
}

// =========================================================
// Variables
// =========================================================

/// A variable reference, `$name`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Variable {
    pub loc: Option<Location>,
    pub name: Arc<Name>,
}

node_children!(Variable {
    "name" => name: required,
});

// =========================================================
// Scalar literals
// =========================================================

/// An integer literal. The value is kept as written (e.g. `-4`) so no
/// precision is lost before a type is known.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct IntValue {
    pub loc: Option<Location>,
    pub value: String,
}

node_children!(IntValue {});

/// A floating-point literal, kept as written (e.g. `-1.123e-4`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FloatValue {
    pub loc: Option<Location>,
    pub value: String,
}

node_children!(FloatValue {});

/// A string literal. `value` holds the decoded contents, with escape
/// sequences already resolved.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StringValue {
    pub loc: Option<Location>,
    pub value: String,
}

node_children!(StringValue {});

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BooleanValue {
    pub loc: Option<Location>,
    pub value: bool,
}

node_children!(BooleanValue {});

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NullValue {
    pub loc: Option<Location>,
}

node_children!(NullValue {});

/// An enum value literal: any name other than `true`, `false` or `null`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    pub loc: Option<Location>,
    pub value: String,
}

node_children!(EnumValue {});

// =========================================================
// Compound literals
// =========================================================

/// A list literal, `[1, 2, 3]`. May be empty.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListValue {
    pub loc: Option<Location>,
    pub values: NodeList<Value>,
}

node_children!(ListValue {
    "values" => values: list,
});

/// An input object literal, `{ a: 1, b: "two" }`. May be empty.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectValue {
    pub loc: Option<Location>,
    pub fields: NodeList<Arc<ObjectField>>,
}

node_children!(ObjectValue {
    "fields" => fields: list,
});

/// One `name: value` entry of an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectField {
    pub loc: Option<Location>,
    pub name: Arc<Name>,
    pub value: Value,
}

node_children!(ObjectField {
    "name" => name: required,
    "value" => value: required,
});
