//! Tests for [`crate::ast::Node`] and [`crate::ast::NodeKind`].

use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::ChildValue;
use crate::ast::Definition;
use crate::ast::Field;
use crate::ast::Name;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::Value;
use crate::parse;
use crate::ParseOptions;
use std::collections::HashSet;
use std::sync::Arc;

fn field(text: &str) -> Arc<Field> {
    let doc = parse(text, ParseOptions::default()).unwrap();
    let Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    let Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    Arc::clone(field)
}

/// Every kind has a unique name, and its name round-trips through
/// `Display`.
#[test]
fn node_kind_names_are_unique() {
    let names: HashSet<&str> = NodeKind::ALL.iter().map(NodeKind::as_str).collect();
    assert_eq!(names.len(), NodeKind::ALL.len());
    assert_eq!(NodeKind::ALL.len(), 37);
    assert_eq!(NodeKind::FragmentSpread.to_string(), "FragmentSpread");
}

#[test]
fn visitor_keys_follow_source_order() {
    assert_eq!(NodeKind::Name.visitor_keys(), &[] as &[&str]);
    assert_eq!(NodeKind::IntValue.visitor_keys(), &[] as &[&str]);
    assert_eq!(NodeKind::Document.visitor_keys(), &["definitions"]);
    assert_eq!(
        NodeKind::Field.visitor_keys(),
        &["alias", "name", "arguments", "directives", "selection_set"],
    );
    assert_eq!(
        NodeKind::OperationDefinition.visitor_keys(),
        &["name", "variable_definitions", "directives", "selection_set"],
    );
    assert_eq!(NodeKind::VariableDefinition.visitor_keys(), &[
        "variable",
        "type",
        "default_value",
    ]);
}

/// Every visitor key of every kind resolves to a child slot.
#[test]
fn child_resolves_every_visitor_key() {
    let node = Node::from(field("{ a: b(c: 1) @d { e } }"));
    for key in NodeKind::Field.visitor_keys() {
        assert!(node.child(key).is_some(), "missing child {key:?}");
    }
    assert_eq!(node.child("nope"), None);
}

#[test]
fn child_reports_each_slot_shape() {
    let node = Node::from(field("{ b(c: 1) }"));

    assert!(node.child("alias").unwrap().is_null());
    assert!(node.child("selection_set").unwrap().is_null());

    let name = node.child("name").unwrap();
    let Some(Node::Name(name)) = name.as_node() else {
        panic!("expected a name, got: {name:?}");
    };
    assert_eq!(name.value, "b");

    let arguments = node.child("arguments").unwrap();
    let arguments = arguments.as_list().unwrap();
    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].kind(), NodeKind::Argument);

    assert_eq!(node.child("directives"), Some(ChildValue::List(vec![])));
}

#[test]
fn kind_and_loc_are_available_on_every_view() {
    let field = field("{ abc }");
    assert_eq!(field.kind(), NodeKind::Field);
    assert_eq!(field.loc().map(|loc| (loc.start, loc.end)), Some((2, 5)));
    assert_eq!(field.response_key(), "abc");

    let selection = Selection::from(Arc::clone(&field));
    assert_eq!(selection.kind(), NodeKind::Field);
    assert_eq!(selection.loc(), field.loc());

    let node = Node::from(selection);
    assert_eq!(node.kind(), NodeKind::Field);
    assert_eq!(node.loc(), field.loc());
}

#[test]
fn try_from_node_checks_the_kind() {
    let node = Node::from(Name::new("x"));

    let name: Arc<Name> = node.clone().try_into().unwrap();
    assert_eq!(name.value, "x");

    let as_value: Result<Value, Node> = node.clone().try_into();
    assert_eq!(as_value, Err(node.clone()));

    let as_argument: Result<Arc<Argument>, Node> = node.clone().try_into();
    assert!(as_argument.is_err());
}

#[test]
fn ptr_eq_distinguishes_equal_copies() {
    let shared = Arc::new(SelectionSet {
        loc: None,
        selections: Default::default(),
    });
    let a = Node::from(Arc::clone(&shared));
    let b = Node::from(Arc::clone(&shared));
    let copy = Node::from((*shared).clone());

    assert!(a.ptr_eq(&b));
    assert_eq!(a, copy);
    assert!(!a.ptr_eq(&copy));
}

#[test]
fn definitions_expose_their_names() {
    let doc = parse(
        "query Q { a } { b } fragment F on T { c } schema { query: Q } \
         extend type T { d: Int }",
        ParseOptions::default(),
    )
    .unwrap();
    let names: Vec<Option<&str>> = doc.definitions.iter().map(Definition::name).collect();
    assert_eq!(names, vec![Some("Q"), None, Some("F"), None, Some("T")]);
    assert_eq!(doc.executable_definitions().count(), 3);
    assert_eq!(doc.type_system_definitions().count(), 2);
}

#[test]
fn to_source_slices_the_parsed_text() {
    let field = field("{ user(id: 4) { name } }");
    assert_eq!(field.to_source(), "user(id: 4) { name }");

    let detached = Name::new("x");
    assert_eq!(detached.to_source(), "");
}
