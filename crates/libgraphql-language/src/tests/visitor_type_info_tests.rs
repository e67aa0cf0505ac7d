//! Tests for `visit_with_type_info()`.

use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::Selection;
use crate::tests::utils::label;
use crate::tests::utils::operation;
use crate::tests::utils::parse_no_loc;
use crate::visitor::visit;
use crate::visitor::visit_with_type_info;
use crate::visitor::TypeInfo;
use crate::visitor::VisitAction;
use crate::visitor::VisitFnTable;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

/// Tracks the stack of entered nodes, logging every call.
struct StackTypeInfo {
    stack: Vec<NodeKind>,
    log: Log,
}

impl TypeInfo for StackTypeInfo {
    fn enter(&mut self, node: &Node) {
        self.stack.push(node.kind());
        self.log.borrow_mut().push(format!("info enter {}", label(node)));
    }

    fn leave(&mut self, node: &Node) {
        self.stack.pop();
        self.log.borrow_mut().push(format!("info leave {}", label(node)));
    }
}

fn logging_table<'a>(
    log: &Log,
    on_enter: impl Fn(&Node) -> VisitAction + 'a,
) -> VisitFnTable<'a> {
    let enter_log = Rc::clone(log);
    let leave_log = Rc::clone(log);
    VisitFnTable::new()
        .on_enter(move |node, _| {
            enter_log.borrow_mut().push(format!("visit enter {}", label(node)));
            Ok(on_enter(node))
        })
        .on_leave(move |node, _| {
            leave_log.borrow_mut().push(format!("visit leave {}", label(node)));
            Ok(VisitAction::Continue)
        })
}

#[test]
fn type_info_brackets_the_inner_hooks() {
    let doc = Node::from(parse_no_loc("{ a }"));
    let log: Log = Rc::default();
    let mut info = StackTypeInfo { stack: vec![], log: Rc::clone(&log) };
    let inner = logging_table(&log, |_| VisitAction::Continue);
    {
        let mut wrapped = visit_with_type_info(&mut info, inner);
        visit(&doc, &mut wrapped).unwrap();
    }

    let log = log.take();
    assert_eq!(&log[..4], &[
        "info enter Document",
        "visit enter Document",
        "info enter OperationDefinition",
        "visit enter OperationDefinition",
    ]);
    assert_eq!(&log[log.len() - 2..], &["visit leave Document", "info leave Document"]);
    assert!(info.stack.is_empty());
}

#[test]
fn replacement_on_enter_swaps_type_info_to_the_replacement() {
    let doc = Node::from(parse_no_loc("{ a }"));
    let replacement_doc = parse_no_loc("{ b }");
    let Selection::Field(replacement) = &operation(&replacement_doc, 0).selection_set.selections[0]
    else {
        panic!("expected a field");
    };
    let replacement = Node::from(replacement.clone());

    let log: Log = Rc::default();
    let mut info = StackTypeInfo { stack: vec![], log: Rc::clone(&log) };
    let inner = logging_table(&log, move |node| match node {
        Node::Field(field) if field.name.value == "a" => {
            VisitAction::Replace(replacement.clone())
        },
        _ => VisitAction::Continue,
    });
    let edited = {
        let mut wrapped = visit_with_type_info(&mut info, inner);
        visit(&doc, &mut wrapped).unwrap()
    };

    assert_eq!(edited, Node::from(parse_no_loc("{ b }")));
    let log = log.take();
    let start = log.iter().position(|line| line == "info enter Field").unwrap();
    assert_eq!(&log[start..start + 6], &[
        "info enter Field",
        "visit enter Field",
        "info leave Field",
        "info enter Field",
        "info enter Name:b",
        "visit enter Name:b",
    ]);
    assert!(info.stack.is_empty());
}

#[test]
fn skip_leaves_type_info_immediately() {
    let doc = Node::from(parse_no_loc("{ a { b } }"));
    let log: Log = Rc::default();
    let mut info = StackTypeInfo { stack: vec![], log: Rc::clone(&log) };
    let inner = logging_table(&log, |node| match node {
        Node::Field(_) => VisitAction::Skip,
        _ => VisitAction::Continue,
    });
    {
        let mut wrapped = visit_with_type_info(&mut info, inner);
        visit(&doc, &mut wrapped).unwrap();
    }

    let log = log.take();
    let start = log.iter().position(|line| line == "info enter Field").unwrap();
    assert_eq!(&log[start..start + 4], &[
        "info enter Field",
        "visit enter Field",
        "info leave Field",
        "visit leave SelectionSet",
    ]);
    assert!(!log.iter().any(|line| line.contains("Name:")));
    assert!(info.stack.is_empty());
}

#[test]
fn into_inner_returns_the_wrapped_visitor() {
    let log: Log = Rc::default();
    let mut info = StackTypeInfo { stack: vec![], log: Rc::clone(&log) };
    let doc = Node::from(parse_no_loc("{ a }"));
    let mut wrapped = visit_with_type_info(&mut info, VisitFnTable::new());
    visit(&doc, &mut wrapped).unwrap();
    let table = wrapped.into_inner();
    drop(table);
    assert_eq!(log.borrow().len(), 2 * 5);
}
