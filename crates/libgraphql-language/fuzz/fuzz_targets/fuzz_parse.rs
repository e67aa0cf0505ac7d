#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_language::ast::Node;
use libgraphql_language::parse;
use libgraphql_language::visitor::visit;
use libgraphql_language::visitor::NoopVisitor;
use libgraphql_language::ParseOptions;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    match parse(s, ParseOptions::default()) {
        Ok(doc) => {
            let root = Node::from(doc);
            let visited = visit(&root, &mut NoopVisitor).expect("a no-op visit never fails");
            assert!(visited.ptr_eq(&root));
        },
        Err(error) => {
            let _ = error.format_detailed();
        },
    }
});
