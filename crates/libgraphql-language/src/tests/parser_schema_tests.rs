//! Tests for parsing type-system definitions and their comment
//! descriptions.

use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::OperationType;
use crate::ast::Type;
use crate::ast::Value;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::SourceLocation;

fn only_definition(doc: &Document) -> &Definition {
    assert_eq!(doc.definitions.len(), 1, "expected exactly one definition");
    &doc.definitions[0]
}

// =============================================================================
// Schema and scalar definitions
// =============================================================================

#[test]
fn schema_definition() {
    let doc = parse_ok("schema @d { query: Q mutation: M subscription: S }");
    let Definition::Schema(schema) = only_definition(&doc) else {
        panic!("expected a schema definition");
    };
    assert_eq!(schema.directives.len(), 1);
    let ops: Vec<(OperationType, &str)> = schema
        .operation_types
        .iter()
        .map(|op| (op.operation, op.ty.name.value.as_str()))
        .collect();
    assert_eq!(
        ops,
        vec![
            (OperationType::Query, "Q"),
            (OperationType::Mutation, "M"),
            (OperationType::Subscription, "S"),
        ],
    );
}

#[test]
fn schema_requires_operation_types() {
    let error = parse_err("schema {}");
    assert_eq!(error.description(), "Expected Name, found }");
}

#[test]
fn schema_rejects_unknown_operation_type() {
    let error = parse_err("schema { query: Q other: O }");
    assert_eq!(error.description(), "Unexpected Name \"other\"");
    assert_eq!(error.location(), SourceLocation::new(1, 19));
}

#[test]
fn scalar_definition() {
    let doc = parse_ok("scalar DateTime @format(as: \"iso\")");
    let Definition::ScalarType(scalar) = only_definition(&doc) else {
        panic!("expected a scalar definition");
    };
    assert_eq!(scalar.name.value, "DateTime");
    assert_eq!(scalar.directives[0].name.value, "format");
    assert!(scalar.description.is_none());
}

// =============================================================================
// Object and interface types
// =============================================================================

#[test]
fn simple_type() {
    let doc = parse_ok("type Hello {\n  world: String\n}");
    let Definition::ObjectType(object) = only_definition(&doc) else {
        panic!("expected an object type");
    };
    assert_eq!(object.name.value, "Hello");
    assert!(object.interfaces.is_empty());
    assert_eq!(object.fields.len(), 1);
    let field = &object.fields[0];
    assert_eq!(field.name.value, "world");
    assert!(matches!(&field.ty, Type::Named(named) if named.name.value == "String"));
    assert_eq!(
        object.loc.as_ref().map(|loc| (loc.start, loc.end)),
        Some((0, 30)),
    );
}

#[test]
fn object_type_fields_may_be_empty() {
    let doc = parse_ok("type Empty {}");
    let Definition::ObjectType(object) = only_definition(&doc) else {
        panic!("expected an object type");
    };
    assert!(object.fields.is_empty());
}

#[test]
fn implements_interfaces() {
    let doc = parse_ok("type Hello implements Wo Rld { field: String }");
    let Definition::ObjectType(object) = only_definition(&doc) else {
        panic!("expected an object type");
    };
    let names: Vec<&str> = object.interfaces.iter().map(|i| i.name.value.as_str()).collect();
    assert_eq!(names, vec!["Wo", "Rld"]);
}

#[test]
fn field_arguments_with_defaults() {
    let doc = parse_ok("type Hello { world(flag: Boolean = true, things: [String]): String! }");
    let Definition::ObjectType(object) = only_definition(&doc) else {
        panic!("expected an object type");
    };
    let field = &object.fields[0];
    assert_eq!(field.arguments.len(), 2);
    assert!(matches!(
        &field.arguments[0].default_value,
        Some(Value::Boolean(b)) if b.value
    ));
    assert!(matches!(&field.arguments[1].ty, Type::List(_)));
    assert!(matches!(&field.ty, Type::NonNull(_)));
}

#[test]
fn field_argument_defaults_must_be_constant() {
    let error = parse_err("type Hello { world(flag: Boolean = $v): String }");
    assert_eq!(error.description(), "Unexpected $");
}

#[test]
fn interface_definition() {
    let doc = parse_ok("interface Node { id: ID! }");
    let Definition::InterfaceType(interface) = only_definition(&doc) else {
        panic!("expected an interface");
    };
    assert_eq!(interface.name.value, "Node");
    assert_eq!(interface.fields[0].name.value, "id");
}

#[test]
fn type_extension() {
    let doc = parse_ok("extend type Hello { world: String }");
    let Definition::TypeExtension(extension) = only_definition(&doc) else {
        panic!("expected a type extension");
    };
    assert_eq!(extension.definition.name.value, "Hello");
    assert_eq!(
        extension.loc.as_ref().map(|loc| (loc.start, loc.end)),
        Some((0, 35)),
    );
    assert_eq!(
        extension.definition.loc.as_ref().map(|loc| (loc.start, loc.end)),
        Some((7, 35)),
    );
}

#[test]
fn extend_requires_type_keyword() {
    let error = parse_err("extend Hello { world: String }");
    assert_eq!(error.description(), "Expected \"type\", found Name \"Hello\"");
}

// =============================================================================
// Unions
// =============================================================================

fn union_members(text: &str) -> Vec<String> {
    let doc = parse_ok(text);
    let Definition::UnionType(union) = only_definition(&doc) else {
        panic!("expected a union");
    };
    union.types.iter().map(|t| t.name.value.clone()).collect()
}

#[test]
fn union_members_parse() {
    assert_eq!(union_members("union Hello = World"), vec!["World"]);
    assert_eq!(union_members("union Hello = Wo | Rld"), vec!["Wo", "Rld"]);
    assert_eq!(union_members("union Hello = | Wo | Rld"), vec!["Wo", "Rld"]);
}

#[test]
fn union_member_list_errors() {
    let cases = [
        ("union Hello = |", "Expected Name, found <EOF>", 16),
        ("union Hello = || Wo | Rld", "Expected Name, found |", 16),
        ("union Hello = Wo || Rld", "Expected Name, found |", 19),
        ("union Hello = | Wo | Rld |", "Expected Name, found <EOF>", 27),
        ("union Hello =", "Expected Name, found <EOF>", 14),
    ];
    for (text, message, column) in cases {
        let error = parse_err(text);
        assert_eq!(error.description(), message, "for {text:?}");
        assert_eq!(error.location(), SourceLocation::new(1, column), "for {text:?}");
    }
}

// =============================================================================
// Enums, input objects, directives
// =============================================================================

#[test]
fn enum_definition() {
    let doc = parse_ok("enum Color { RED @deprecated GREEN BLUE }");
    let Definition::EnumType(enum_type) = only_definition(&doc) else {
        panic!("expected an enum");
    };
    let values: Vec<&str> = enum_type.values.iter().map(|v| v.name.value.as_str()).collect();
    assert_eq!(values, vec!["RED", "GREEN", "BLUE"]);
    assert_eq!(enum_type.values[0].directives.len(), 1);
}

#[test]
fn enum_values_must_not_be_empty() {
    let error = parse_err("enum Color {}");
    assert_eq!(error.description(), "Expected Name, found }");
}

#[test]
fn input_object_definition() {
    let doc = parse_ok("input Point { x: Float = 0.5 @d, y: Float! }");
    let Definition::InputObjectType(input) = only_definition(&doc) else {
        panic!("expected an input object");
    };
    assert_eq!(input.fields.len(), 2);
    assert!(matches!(&input.fields[0].default_value, Some(Value::Float(f)) if f.value == "0.5"));
    assert_eq!(input.fields[0].directives.len(), 1);
}

#[test]
fn input_object_fields_have_no_arguments() {
    let error = parse_err("input Hello { world(foo: Int): String }");
    assert_eq!(error.description(), "Expected :, found (");
}

#[test]
fn directive_definition() {
    let doc = parse_ok(
        "directive @include(if: Boolean!) on | FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT",
    );
    let Definition::Directive(directive) = only_definition(&doc) else {
        panic!("expected a directive definition");
    };
    assert_eq!(directive.name.value, "include");
    assert_eq!(directive.arguments[0].name.value, "if");
    let locations: Vec<&str> = directive.locations.iter().map(|l| l.value.as_str()).collect();
    assert_eq!(locations, vec!["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"]);
}

#[test]
fn directive_locations_reject_trailing_pipe() {
    let error = parse_err("directive @d on FIELD |");
    assert_eq!(error.description(), "Expected Name, found <EOF>");
}

// =============================================================================
// Descriptions
// =============================================================================

#[test]
fn leading_comment_becomes_description() {
    let doc = parse_ok("# The hello type\n#   with indentation\ntype Hello { world: String }");
    let Definition::ObjectType(object) = only_definition(&doc) else {
        panic!("expected an object type");
    };
    assert_eq!(
        object.description.as_deref(),
        Some("The hello type\n  with indentation"),
    );
}

#[test]
fn blank_line_separates_comment_from_definition() {
    let doc = parse_ok("# not a description\n\nscalar Hello");
    let Definition::ScalarType(scalar) = only_definition(&doc) else {
        panic!("expected a scalar");
    };
    assert!(scalar.description.is_none());
}

#[test]
fn trailing_comment_is_not_a_description() {
    let doc = parse_ok("scalar A # about A\nscalar B");
    let Definition::ScalarType(b) = &doc.definitions[1] else {
        panic!("expected a scalar");
    };
    assert!(b.description.is_none());
}

#[test]
fn nested_definitions_get_descriptions() {
    let doc = parse_ok(
        "enum Color {\n  # the red one\n  RED\n  GREEN\n}\n\
        type T {\n  # a field\n  f(\n    # an argument\n    a: Int\n  ): Int\n}",
    );
    let Definition::EnumType(color) = &doc.definitions[0] else {
        panic!("expected an enum");
    };
    assert_eq!(color.values[0].description.as_deref(), Some("the red one"));
    assert!(color.values[1].description.is_none());

    let Definition::ObjectType(object) = &doc.definitions[1] else {
        panic!("expected an object type");
    };
    assert_eq!(object.fields[0].description.as_deref(), Some("a field"));
    assert_eq!(
        object.fields[0].arguments[0].description.as_deref(),
        Some("an argument"),
    );
}

#[test]
fn tab_indentation_is_removed_from_descriptions() {
    let doc = parse_ok("#\tThe hello type\n#\t\twith a tab\ntype Hello { world: String }");
    let Definition::ObjectType(object) = only_definition(&doc) else {
        panic!("expected an object type");
    };
    assert_eq!(
        object.description.as_deref(),
        Some("The hello type\n\twith a tab"),
    );
}

#[test]
fn whitespace_only_comments_give_no_description() {
    let doc = parse_ok("#\n#   \nscalar Hello");
    let Definition::ScalarType(scalar) = only_definition(&doc) else {
        panic!("expected a scalar");
    };
    assert!(scalar.description.is_none());
}
