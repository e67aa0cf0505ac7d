#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_language::GraphQLLexer;
use libgraphql_language::Source;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let source = Arc::new(Source::new(s));
    for token in GraphQLLexer::new(Arc::clone(&source)) {
        let Ok(token) = token else {
            break;
        };
        assert!(token.start <= token.end);
        assert!(token.end <= source.len());
    }
});
