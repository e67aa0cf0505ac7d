use crate::ast::children::node_children;
use crate::ast::node::node_union;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::NodeList;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeExtensionDefinition;
use crate::ast::UnionTypeDefinition;
use crate::Location;

// =========================================================
// Document
// =========================================================

/// Root AST node for any GraphQL document.
///
/// A document holds one or more definitions, which may be executable
/// (operations and fragments) or type-system definitions. Which kinds are
/// permitted in a given context is a validation concern, not a parsing one.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub loc: Option<Location>,
    pub definitions: NodeList<Definition>,
}

impl Document {
    /// Iterates the operation and fragment definitions.
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| def.is_executable())
    }

    /// Iterates the type-system definitions.
    pub fn type_system_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| !def.is_executable())
    }
}

node_children!(Document {
    "definitions" => definitions: list,
});

node_union! {
    /// A top-level definition in a [`Document`].
    Definition {
        Operation(OperationDefinition) = "OperationDefinition",
        Fragment(FragmentDefinition) = "FragmentDefinition",
        Schema(SchemaDefinition) = "SchemaDefinition",
        ScalarType(ScalarTypeDefinition) = "ScalarTypeDefinition",
        ObjectType(ObjectTypeDefinition) = "ObjectTypeDefinition",
        InterfaceType(InterfaceTypeDefinition) = "InterfaceTypeDefinition",
        UnionType(UnionTypeDefinition) = "UnionTypeDefinition",
        EnumType(EnumTypeDefinition) = "EnumTypeDefinition",
        InputObjectType(InputObjectTypeDefinition) = "InputObjectTypeDefinition",
        TypeExtension(TypeExtensionDefinition) = "TypeExtensionDefinition",
        Directive(DirectiveDefinition) = "DirectiveDefinition",
    }
}

impl Definition {
    /// Returns `true` for operation and fragment definitions.
    pub fn is_executable(&self) -> bool {
        matches!(self, Definition::Operation(_) | Definition::Fragment(_))
    }

    /// The definition's name, if it has one. Anonymous operations and
    /// `schema` definitions have none.
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            Definition::Operation(def) => return def.name.as_ref().map(|n| n.value.as_str()),
            Definition::Schema(_) => return None,
            Definition::Fragment(def) => &def.name,
            Definition::ScalarType(def) => &def.name,
            Definition::ObjectType(def) => &def.name,
            Definition::InterfaceType(def) => &def.name,
            Definition::UnionType(def) => &def.name,
            Definition::EnumType(def) => &def.name,
            Definition::InputObjectType(def) => &def.name,
            Definition::TypeExtension(def) => &def.definition.name,
            Definition::Directive(def) => &def.name,
        };
        Some(name.value.as_str())
    }
}
