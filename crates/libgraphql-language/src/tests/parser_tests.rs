//! Tests for parsing executable documents, standalone values and types, and
//! node locations.

use crate::ast::AstNode;
use crate::ast::Definition;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::OperationType;
use crate::ast::Selection;
use crate::ast::Type;
use crate::ast::Value;
use crate::parse;
use crate::parse_type;
use crate::parse_value;
use crate::tests::utils::field_at;
use crate::tests::utils::operation;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_no_loc;
use crate::tests::utils::parse_ok;
use crate::visitor::visit;
use crate::visitor::VisitAction;
use crate::visitor::VisitFnTable;
use crate::GraphQLSyntaxErrorKind;
use crate::ParseOptions;
use crate::Source;
use crate::SourceLocation;

fn assert_syntax_error(text: &str, message: &str, line: usize, column: usize) {
    let error = parse_err(text);
    assert_eq!(error.description(), message, "for {text:?}");
    assert_eq!(error.location(), SourceLocation::new(line, column), "for {text:?}");
}

// =============================================================================
// Syntax errors
// =============================================================================

#[test]
fn missing_closing_brace_points_at_eof() {
    assert_syntax_error("{", "Expected Name, found <EOF>", 1, 2);
}

#[test]
fn expected_keyword_error() {
    assert_syntax_error(
        "{ ...MissingOn }\nfragment MissingOn Type\n",
        "Expected \"on\", found Name \"Type\"",
        2,
        20,
    );
}

#[test]
fn unexpected_token_errors() {
    assert_syntax_error("{ field: {} }", "Expected Name, found {", 1, 10);
    assert_syntax_error(
        "notanoperation Foo { field }",
        "Unexpected Name \"notanoperation\"",
        1,
        1,
    );
    assert_syntax_error("...", "Unexpected ...", 1, 1);
    assert_syntax_error("query", "Expected {, found <EOF>", 1, 6);
}

#[test]
fn empty_document_is_an_error() {
    assert_syntax_error("", "Unexpected <EOF>", 1, 1);
}

#[test]
fn empty_selection_set_is_an_error() {
    assert_syntax_error("{}", "Expected Name, found }", 1, 2);
}

#[test]
fn fragment_cannot_be_named_on() {
    assert_syntax_error("fragment on on on { on }", "Unexpected Name \"on\"", 1, 10);
}

#[test]
fn spread_of_on_is_not_a_fragment_spread() {
    assert_syntax_error("{ ...on }", "Expected Name, found }", 1, 9);
}

#[test]
fn variables_rejected_in_constant_values() {
    assert_syntax_error(
        "query Foo($x: Complex = { a: { b: [ $var ] } }) { field }",
        "Unexpected $",
        1,
        37,
    );
}

#[test]
fn error_kinds_distinguish_parser_errors() {
    let error = parse_err("{ field: {} }");
    assert_eq!(
        *error.kind(),
        GraphQLSyntaxErrorKind::UnexpectedToken {
            expected: "Name".to_string(),
            found: "{".to_string(),
        },
    );
    assert!(!error.kind().is_lexer_error());

    let error = parse_err("{ field(arg: 00) }");
    assert!(error.kind().is_lexer_error());
}

// =============================================================================
// Operations and selections
// =============================================================================

#[test]
fn anonymous_query_shorthand() {
    let doc = parse_ok("{ a }");
    let op = operation(&doc, 0);
    assert_eq!(op.operation, OperationType::Query);
    assert!(op.name.is_none());
    assert!(op.variable_definitions.is_empty());
    assert!(op.directives.is_empty());
    assert_eq!(field_at(&op.selection_set.selections, 0).name.value, "a");
}

#[test]
fn named_operations() {
    let doc = parse_ok("query Q { a } mutation M { b } subscription S { c }");
    let kinds: Vec<(OperationType, Option<&str>)> = doc
        .definitions
        .iter()
        .map(|def| match def {
            Definition::Operation(op) => {
                (op.operation, op.name.as_ref().map(|n| n.value.as_str()))
            },
            other => panic!("expected an operation, got: {other:?}"),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            (OperationType::Query, Some("Q")),
            (OperationType::Mutation, Some("M")),
            (OperationType::Subscription, Some("S")),
        ],
    );
}

#[test]
fn trailing_fragment_keyword_is_an_error() {
    assert_syntax_error("{ a } query Q { b } fragment", "Expected Name, found <EOF>", 1, 29);
}

#[test]
fn variable_definitions_with_defaults() {
    let doc = parse_ok("query Q($a: Int = 1, $b: [String!]!) { f(a: $a) }");
    let op = operation(&doc, 0);
    assert_eq!(op.variable_definitions.len(), 2);

    let a = &op.variable_definitions[0];
    assert_eq!(a.variable.name.value, "a");
    assert!(matches!(&a.ty, Type::Named(named) if named.name.value == "Int"));
    assert!(matches!(&a.default_value, Some(Value::Int(int)) if int.value == "1"));

    let b = &op.variable_definitions[1];
    assert!(b.default_value.is_none());
    let Type::NonNull(non_null) = &b.ty else {
        panic!("expected a non-null type, got: {:?}", b.ty);
    };
    assert!(matches!(&non_null.ty, Type::List(_)));

    let field = field_at(&op.selection_set.selections, 0);
    assert!(matches!(&field.arguments[0].value, Value::Variable(var) if var.name.value == "a"));
}

#[test]
fn aliases_arguments_and_directives() {
    let doc = parse_ok("{ alias: field(x: 1) @include(if: true) { sub } }");
    let field = field_at(&operation(&doc, 0).selection_set.selections, 0);
    assert_eq!(field.alias.as_ref().map(|a| a.value.as_str()), Some("alias"));
    assert_eq!(field.name.value, "field");
    assert_eq!(field.response_key(), "alias");
    assert_eq!(field.arguments[0].name.value, "x");
    assert_eq!(field.directives[0].name.value, "include");
    assert!(matches!(
        &field.directives[0].arguments[0].value,
        Value::Boolean(boolean) if boolean.value
    ));
    assert!(field.selection_set.is_some());
}

#[test]
fn fragment_spreads_and_inline_fragments() {
    let doc = parse_ok("{ ...Frag @d ... on User { id } ... @skip(if: $x) { name } }");
    let selections = &operation(&doc, 0).selection_set.selections;

    let Selection::FragmentSpread(spread) = &selections[0] else {
        panic!("expected a fragment spread, got: {:?}", selections[0]);
    };
    assert_eq!(spread.name.value, "Frag");
    assert_eq!(spread.directives.len(), 1);

    let Selection::InlineFragment(typed) = &selections[1] else {
        panic!("expected an inline fragment, got: {:?}", selections[1]);
    };
    assert_eq!(typed.type_condition.as_ref().map(|t| t.name.value.as_str()), Some("User"));

    let Selection::InlineFragment(untyped) = &selections[2] else {
        panic!("expected an inline fragment, got: {:?}", selections[2]);
    };
    assert!(untyped.type_condition.is_none());
    assert_eq!(untyped.directives[0].name.value, "skip");
}

#[test]
fn fragment_definition() {
    let doc = parse_ok("fragment F on User @d { id }");
    let Definition::Fragment(fragment) = &doc.definitions[0] else {
        panic!("expected a fragment, got: {:?}", doc.definitions[0]);
    };
    assert_eq!(fragment.name.value, "F");
    assert_eq!(fragment.type_condition.name.value, "User");
    assert_eq!(fragment.directives.len(), 1);
    assert_eq!(doc.definitions[0].name(), Some("F"));
}

#[test]
fn keywords_are_valid_field_names() {
    let keywords = [
        "on", "fragment", "query", "mutation", "subscription", "true", "false", "null",
    ];
    for keyword in keywords {
        let doc = parse_ok(&format!("{{ {keyword} }}"));
        let field = field_at(&operation(&doc, 0).selection_set.selections, 0);
        assert_eq!(field.name.value, keyword);
    }
}

#[test]
fn mixed_documents_split_by_definition_kind() {
    let doc = parse_ok("type T { a: Int } { a } fragment F on T { a }");
    assert_eq!(doc.executable_definitions().count(), 2);
    assert_eq!(doc.type_system_definitions().count(), 1);
}

// =============================================================================
// Values
// =============================================================================

#[test]
fn value_literals() {
    let doc = parse_ok(
        "{ f(i: -4, fl: 1.5e3, s: \"str\", b: false, n: null, e: RED, \
        l: [1, [2]], o: { a: 1, b: { c: $v } }) }",
    );
    let field = field_at(&operation(&doc, 0).selection_set.selections, 0);
    let kinds: Vec<NodeKind> = field.arguments.iter().map(|arg| arg.value.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::IntValue,
            NodeKind::FloatValue,
            NodeKind::StringValue,
            NodeKind::BooleanValue,
            NodeKind::NullValue,
            NodeKind::EnumValue,
            NodeKind::ListValue,
            NodeKind::ObjectValue,
        ],
    );
    let Value::Object(object) = &field.arguments[7].value else {
        panic!("expected an object value");
    };
    assert_eq!(object.fields[0].name.value, "a");
    let Value::Object(inner) = &object.fields[1].value else {
        panic!("expected a nested object value");
    };
    assert!(matches!(&inner.fields[0].value, Value::Variable(_)));
}

#[test]
fn constant_values_allow_nested_literals() {
    let doc = parse_ok("query Foo($x: Complex = { a: { b: [ 123, \"abc\" ] } }) { field }");
    let op = operation(&doc, 0);
    assert!(matches!(op.variable_definitions[0].default_value, Some(Value::Object(_))));
}

#[test]
fn parse_value_accepts_one_literal() {
    let value = parse_value("[123 \"abc\"]", ParseOptions::default()).unwrap();
    let Value::List(list) = &value else {
        panic!("expected a list value, got: {value:?}");
    };
    assert_eq!(list.loc.as_ref().map(|loc| (loc.start, loc.end)), Some((0, 11)));
    assert!(matches!(&list.values[0], Value::Int(int) if int.value == "123"));
    assert!(matches!(&list.values[1], Value::String(s) if s.value == "abc"));
}

#[test]
fn parse_value_allows_variables() {
    let value = parse_value("$var", ParseOptions::default()).unwrap();
    assert!(matches!(value, Value::Variable(_)));
}

#[test]
fn parse_value_requires_end_of_input() {
    let error = parse_value("1 2", ParseOptions::default()).unwrap_err();
    assert_eq!(error.description(), "Expected <EOF>, found Int \"2\"");
}

// =============================================================================
// Types
// =============================================================================

#[test]
fn parse_type_wraps_right_recursively() {
    let ty = parse_type("[[T!]]!", ParseOptions::no_location()).unwrap();
    let Type::NonNull(outer) = &ty else {
        panic!("expected NonNull, got: {ty:?}");
    };
    let Type::List(list) = &outer.ty else {
        panic!("expected List, got: {:?}", outer.ty);
    };
    let Type::List(inner_list) = &list.ty else {
        panic!("expected List, got: {:?}", list.ty);
    };
    let Type::NonNull(inner) = &inner_list.ty else {
        panic!("expected NonNull, got: {:?}", inner_list.ty);
    };
    assert!(matches!(&inner.ty, Type::Named(named) if named.name.value == "T"));
}

#[test]
fn parse_type_rejects_double_bang() {
    let error = parse_type("T!!", ParseOptions::default()).unwrap_err();
    assert_eq!(error.description(), "Expected <EOF>, found !");
}

// =============================================================================
// Locations
// =============================================================================

#[test]
fn field_name_location() {
    let doc = parse_ok("{\n      field\n    }");
    let field = field_at(&operation(&doc, 0).selection_set.selections, 0);
    let loc = field.name.loc.as_ref().unwrap();
    assert_eq!((loc.start, loc.end), (8, 13));
    assert_eq!(loc.start_location(), Some(SourceLocation::new(2, 7)));
    assert_eq!(loc.source_text().as_deref(), Some("field"));
}

#[test]
fn document_location_spans_sof_to_last_token() {
    let doc = parse_ok("  { a }  ");
    let loc = doc.loc.as_ref().unwrap();
    assert_eq!((loc.start, loc.end), (0, 9));
}

#[test]
fn location_bounding_tokens() {
    let doc = parse_ok("query Q { a }");
    let op = operation(&doc, 0);
    let loc = op.loc.as_ref().unwrap();
    assert_eq!(loc.start_token.as_ref().and_then(|t| t.value.as_deref()), Some("query"));
    assert_eq!(
        loc.end_token.as_ref().map(|t| t.kind),
        Some(crate::token::GraphQLTokenKind::CurlyBraceClose),
    );
    assert_eq!(op.to_source(), "query Q { a }");
}

#[test]
fn location_offset_applies_to_node_locations() {
    let source = Source::with_location_offset(
        "{ a }",
        "embedded.js",
        SourceLocation::new(3, 10),
    ).unwrap();
    let doc = parse(source, ParseOptions::default()).unwrap();
    let field = field_at(&operation(&doc, 0).selection_set.selections, 0);
    assert_eq!(
        field.loc.as_ref().and_then(|loc| loc.start_location()),
        Some(SourceLocation::new(3, 12)),
    );
}

#[test]
fn no_location_option_omits_every_location() {
    let doc = parse(
        "query Q($v: Int = 1) { a(x: [1, { y: $v }]) @d { ...F } }",
        ParseOptions::no_location(),
    ).unwrap();
    let mut located = 0;
    let mut visitor = VisitFnTable::new().on_enter(|node: &Node, _| {
        if node.loc().is_some() {
            located += 1;
        }
        Ok(VisitAction::Continue)
    });
    visit(&Node::from(doc), &mut visitor).unwrap();
    drop(visitor);
    assert_eq!(located, 0);
}

#[test]
fn equal_text_parses_to_equal_trees() {
    assert_eq!(parse_no_loc("{ a b { c } }"), parse_no_loc("{a,b{c}}"));
    assert_ne!(parse_no_loc("{ a b }"), parse_no_loc("{ a c }"));
}
