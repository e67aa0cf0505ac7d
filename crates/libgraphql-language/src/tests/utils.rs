//! Various test utils.

use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::Node;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::parse;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::VisitError;
use crate::visitor::Visitor;
use crate::GraphQLLexer;
use crate::GraphQLSyntaxError;
use crate::ParseOptions;
use crate::Source;
use std::sync::Arc;

/// Parses `text`, panicking with the rendered error on failure.
pub fn parse_ok(text: &str) -> Document {
    match parse(text, ParseOptions::default()) {
        Ok(doc) => doc,
        Err(error) => panic!("unexpected parse error:\n{error}"),
    }
}

/// Parses `text` without locations so structurally equal documents compare
/// equal.
pub fn parse_no_loc(text: &str) -> Document {
    match parse(text, ParseOptions::no_location()) {
        Ok(doc) => doc,
        Err(error) => panic!("unexpected parse error:\n{error}"),
    }
}

/// Parses `text`, panicking if it succeeds.
pub fn parse_err(text: &str) -> GraphQLSyntaxError {
    match parse(text, ParseOptions::default()) {
        Ok(doc) => panic!("expected a syntax error, parsed: {doc:?}"),
        Err(error) => error,
    }
}

/// Lexes the first significant token of `text`.
pub fn lex_one(text: &str) -> Result<GraphQLToken, GraphQLSyntaxError> {
    let mut lexer = GraphQLLexer::new(Arc::new(Source::new(text)));
    lexer.advance().cloned()
}

/// Lexes every significant token of `text`, including `Eof`.
pub fn lex_kinds(text: &str) -> Vec<GraphQLTokenKind> {
    GraphQLLexer::new(Arc::new(Source::new(text)))
        .map(|token| match token {
            Ok(token) => token.kind,
            Err(error) => panic!("unexpected lex error:\n{error}"),
        })
        .collect()
}

/// Returns the `index`th definition, which must be an operation.
pub fn operation(doc: &Document, index: usize) -> &OperationDefinition {
    match &doc.definitions[index] {
        Definition::Operation(op) => op,
        other => panic!("expected an operation, got: {other:?}"),
    }
}

/// Returns the `index`th selection of `selections`, which must be a field.
pub fn field_at(selections: &[Selection], index: usize) -> &Field {
    match &selections[index] {
        Selection::Field(field) => field,
        other => panic!("expected a field, got: {other:?}"),
    }
}

/// One hook invocation recorded by an [`EventRecorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Enter(String),
    Leave(String),
}

/// Labels a node for event logs: `Kind` or `Kind:value` for names.
pub fn label(node: &Node) -> String {
    match node {
        Node::Name(name) => format!("Name:{}", name.value),
        other => other.kind().to_string(),
    }
}

pub fn enter(label: &str) -> Event {
    Event::Enter(label.to_string())
}

pub fn leave(label: &str) -> Event {
    Event::Leave(label.to_string())
}

/// A visitor that records every enter/leave and asks `on_enter` what to do.
pub struct EventRecorder<F> {
    pub events: Vec<Event>,
    on_enter: F,
}

impl<F: FnMut(&Node) -> VisitAction> EventRecorder<F> {
    pub fn new(on_enter: F) -> Self {
        Self {
            events: vec![],
            on_enter,
        }
    }
}

impl<F: FnMut(&Node) -> VisitAction> Visitor for EventRecorder<F> {
    fn enter(&mut self, node: &Node, _ctx: &VisitContext<'_>) -> Result<VisitAction, VisitError> {
        self.events.push(Event::Enter(label(node)));
        Ok((self.on_enter)(node))
    }

    fn leave(&mut self, node: &Node, _ctx: &VisitContext<'_>) -> Result<VisitAction, VisitError> {
        self.events.push(Event::Leave(label(node)));
        Ok(VisitAction::Continue)
    }
}
